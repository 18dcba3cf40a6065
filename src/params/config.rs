use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::{
    foundation::{
        core::Rgb,
        error::{GaborError, GaborResult},
    },
    params::{envelope::Envelope, orientation::expand_orientations, patch::PatchRequest},
};

/// Unresolved patch parameters, as read from a JSON document or assembled by
/// the command line.
///
/// Keys mirror the CLI flags; absent keys take the CLI defaults. `frequency`
/// and `orientation` have no default and must be supplied before
/// [`PatchConfig::resolve`] succeeds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchConfig {
    pub frequency: Option<f64>,
    pub orientation: Vec<f64>,
    pub envelope: String,
    pub size: u32,
    pub phase: f64,
    pub background_color: Rgb,
    pub color1: Rgb,
    pub color2: Rgb,
    pub std: f64,
    pub num_orientations: i64,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            frequency: None,
            orientation: Vec::new(),
            envelope: "sine".to_owned(),
            size: 500,
            phase: 0.0,
            background_color: Rgb::from_u8(128, 128, 128),
            color1: Rgb::BLACK,
            color2: Rgb::WHITE,
            std: 20.0,
            num_orientations: 0,
        }
    }
}

impl PatchConfig {
    pub fn from_json_str(s: &str) -> GaborResult<Self> {
        serde_json::from_str(s).map_err(|e| GaborError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> GaborResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))
            .map_err(|e| GaborError::io(format!("{e:#}")))?;
        Self::from_json_str(&text)
    }

    /// Validate every field and expand the orientation list.
    pub fn resolve(&self) -> GaborResult<PatchRequest> {
        let frequency = self
            .frequency
            .ok_or_else(|| GaborError::validation("missing required parameter 'frequency'"))?;
        if self.orientation.is_empty() {
            return Err(GaborError::validation(
                "missing required parameter 'orientation'",
            ));
        }
        let envelope = Envelope::from_name(&self.envelope, self.std)?;
        let orientations = expand_orientations(&self.orientation, self.num_orientations)?;

        let req = PatchRequest {
            frequency,
            orientations,
            envelope,
            size: self.size,
            phase: self.phase,
            background_color: self.background_color,
            color1: self.color1,
            color2: self.color2,
        };
        req.validate()?;
        tracing::debug!(orientations = ?req.orientations, envelope = %req.envelope, "resolved patch request");
        Ok(req)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/config.rs"]
mod tests;
