use crate::{
    foundation::{
        core::Rgb,
        error::{GaborError, GaborResult},
    },
    params::envelope::Envelope,
};

/// Everything needed to render one Gabor patch image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchParams {
    /// Grating frequency in cycles per pixel.
    pub frequency: f64,
    /// Direction of variation of the grating, in degrees.
    pub orientation: f64,
    pub envelope: Envelope,
    /// Side length of the square image, in pixels.
    pub size: u32,
    /// Offset of the cosine grating along its axis, in cycles.
    pub phase: f64,
    pub background_color: Rgb,
    pub color1: Rgb,
    pub color2: Rgb,
}

impl PatchParams {
    pub fn validate(&self) -> GaborResult<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(GaborError::validation(format!(
                "frequency must be finite and > 0, got {}",
                self.frequency
            )));
        }
        if !self.orientation.is_finite() {
            return Err(GaborError::validation(format!(
                "orientation must be finite, got {}",
                self.orientation
            )));
        }
        if !self.phase.is_finite() {
            return Err(GaborError::validation(format!(
                "phase must be finite, got {}",
                self.phase
            )));
        }
        if self.size == 0 {
            return Err(GaborError::validation("size must be >= 1"));
        }
        if let Envelope::Gaussian { std } = self.envelope {
            Envelope::gaussian(std)?;
        }
        for (name, c) in [
            ("background_color", self.background_color),
            ("color1", self.color1),
            ("color2", self.color2),
        ] {
            Rgb::new(c.r, c.g, c.b)
                .map_err(|e| GaborError::validation(format!("{name}: {e}")))?;
        }
        Ok(())
    }
}

/// A batch of patches sharing every parameter except orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchRequest {
    pub frequency: f64,
    /// Orientations to render, in order, after interpolation.
    pub orientations: Vec<f64>,
    pub envelope: Envelope,
    pub size: u32,
    pub phase: f64,
    pub background_color: Rgb,
    pub color1: Rgb,
    pub color2: Rgb,
}

impl PatchRequest {
    /// Parameters of the single patch at `orientation`.
    pub fn patch(&self, orientation: f64) -> PatchParams {
        PatchParams {
            frequency: self.frequency,
            orientation,
            envelope: self.envelope,
            size: self.size,
            phase: self.phase,
            background_color: self.background_color,
            color1: self.color1,
            color2: self.color2,
        }
    }

    pub fn patches(&self) -> impl Iterator<Item = PatchParams> + '_ {
        self.orientations.iter().map(|&o| self.patch(o))
    }

    pub fn validate(&self) -> GaborResult<()> {
        if self.orientations.is_empty() {
            return Err(GaborError::validation(
                "at least one orientation is required",
            ));
        }
        self.patches().try_for_each(|p| p.validate())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/patch.rs"]
mod tests;
