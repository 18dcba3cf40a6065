use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{
    field::grid::{CoordinateGrid, GridPoint},
    foundation::{core::Field, error::GaborResult, math::half_size},
    params::{envelope::Envelope, patch::PatchParams},
};

/// The two aligned fields a patch is composed from.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchFields {
    /// Raw cosine grating, in `[0, 1]`.
    pub amplitude: Field,
    /// Per-pixel opacity of the grating over the background, in `[0, 1]`.
    pub envelope: Field,
}

/// Build the amplitude and envelope fields for one patch.
///
/// Both fields are sampled from the same [`CoordinateGrid`], so pixel `(x, y)`
/// of one lines up with pixel `(x, y)` of the other.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(size = params.size, orientation = params.orientation, envelope = %params.envelope)
)]
pub fn generate_fields(params: &PatchParams) -> GaborResult<PatchFields> {
    params.validate()?;

    let grid = CoordinateGrid::new(params.size, params.orientation);
    let amplitude = grid.map(|p| grating_amplitude(p, params.frequency, params.phase));
    let envelope = grid.map(|p| envelope_weight(params.envelope, p, params.size));

    Ok(PatchFields {
        amplitude,
        envelope,
    })
}

fn grating_amplitude(p: &GridPoint, frequency: f64, phase: f64) -> f64 {
    0.5 + 0.5 * (TAU * (p.x * frequency + phase)).cos()
}

fn envelope_weight(envelope: Envelope, p: &GridPoint, size: u32) -> f64 {
    let half = f64::from(half_size(size));
    let size = f64::from(size);

    match envelope {
        // Exponent scales with `std / size`, not its square. Floored at the
        // smallest normal f64 so underflow never reaches zero.
        Envelope::Gaussian { std } => (-0.5 * (std / size) * (p.x * p.x + p.y * p.y))
            .exp()
            .max(f64::MIN_POSITIVE),
        Envelope::Linear => {
            if half == 0.0 {
                return 1.0;
            }
            ((half - p.r) / half).max(0.0)
        }
        Envelope::Sine => {
            if p.r > half {
                0.0
            } else if size <= 1.0 {
                1.0
            } else {
                // Dips just below zero within a pixel of the rim.
                (PI * (p.r + half) / (size - 1.0) - FRAC_PI_2)
                    .cos()
                    .max(0.0)
            }
        }
        Envelope::Circle => {
            if p.r > half {
                0.0
            } else {
                1.0
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/generate.rs"]
mod tests;
