use std::fmt;

use crate::foundation::error::{GaborError, GaborResult};

/// Spatial window applied over the grating.
///
/// Only the gaussian window carries a parameter; its `std` is a frequency-like
/// scale (the exponent is multiplied by `std / size`), not a standard deviation
/// in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Envelope {
    Gaussian { std: f64 },
    Linear,
    Sine,
    Circle,
}

impl Envelope {
    /// Names accepted by [`Envelope::from_name`].
    pub const NAMES: [&'static str; 4] = ["gaussian", "linear", "sine", "circle"];

    /// Resolve an envelope by name. `std` is only consulted for `"gaussian"`.
    pub fn from_name(name: &str, std: f64) -> GaborResult<Self> {
        match name {
            "gaussian" => Self::gaussian(std),
            "linear" => Ok(Self::Linear),
            "sine" => Ok(Self::Sine),
            "circle" => Ok(Self::Circle),
            other => Err(GaborError::invalid_envelope(other)),
        }
    }

    pub fn gaussian(std: f64) -> GaborResult<Self> {
        if !std.is_finite() || std < 0.0 {
            return Err(GaborError::validation(format!(
                "gaussian std must be finite and >= 0, got {std}"
            )));
        }
        Ok(Self::Gaussian { std })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gaussian { .. } => "gaussian",
            Self::Linear => "linear",
            Self::Sine => "sine",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/envelope.rs"]
mod tests;
