use crate::foundation::error::{GaborError, GaborResult};

/// RGB triple with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::gray(0.0);
    pub const WHITE: Self = Self::gray(1.0);

    /// Build a color, rejecting channels outside `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64) -> GaborResult<Self> {
        for (name, v) in [("r", r), ("g", g), ("b", b)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(GaborError::color(format!(
                    "channel {name} must be within [0, 1], got {v}"
                )));
            }
        }
        Ok(Self { r, g, b })
    }

    pub const fn gray(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    pub(crate) const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// `self * t + other * (1 - t)`, per channel.
    pub fn mix(self, other: Self, t: f64) -> Self {
        // Exact when both ends agree.
        fn lerp(a: f64, b: f64, t: f64) -> f64 {
            if a == b {
                a
            } else {
                a * t + b * (1.0 - t)
            }
        }

        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }

    /// Scale to the 8-bit display range, truncating toward zero.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn to_u8(x: f64) -> u8 {
            (x * 255.0) as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }
}

/// Square, row-major grid of reals aligned with the output image pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    size: u32,
    data: Vec<f64>,
}

impl Field {
    pub(crate) fn from_vec(size: u32, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), (size as usize) * (size as usize));
        Self { size, data }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Value at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not less than [`Field::size`].
    pub fn get(&self, x: u32, y: u32) -> f64 {
        assert!(
            x < self.size && y < self.size,
            "field index ({x}, {y}) out of bounds for size {}",
            self.size
        );
        self.data[(y as usize) * (self.size as usize) + (x as usize)]
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn same_shape(&self, other: &Field) -> bool {
        self.size == other.size && self.data.len() == other.data.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
