use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbImage;

use crate::{
    compose::{
        blend::compose,
        output::{output_file_name, write_png},
    },
    field::generate::generate_fields,
    foundation::error::{GaborError, GaborResult},
    params::patch::{PatchParams, PatchRequest},
};

/// Generate the fields for one patch and compose them into an image.
pub fn render_patch(params: &PatchParams) -> GaborResult<RgbImage> {
    let fields = generate_fields(params)?;
    compose(
        &fields.amplitude,
        &fields.envelope,
        params.color1,
        params.color2,
        params.background_color,
    )
}

/// Render one patch and write it into `out_dir` under its canonical file name.
#[tracing::instrument(skip(params, out_dir), fields(orientation = params.orientation))]
pub fn write_patch(params: &PatchParams, out_dir: &Path) -> GaborResult<PathBuf> {
    let img = render_patch(params)?;
    let path = out_dir.join(output_file_name(
        params.orientation,
        params.envelope,
        params.frequency,
    ));
    write_png(&img, &path)?;
    tracing::info!("wrote {}", path.display());
    Ok(path)
}

/// Render every orientation of `req` in order, returning the written paths.
///
/// Stops at the first failure; images written before it are left in place.
pub fn generate_batch(req: &PatchRequest, out_dir: &Path) -> GaborResult<Vec<PathBuf>> {
    req.validate()?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))
        .map_err(|e| GaborError::io(format!("{e:#}")))?;

    req.patches().map(|p| write_patch(&p, out_dir)).collect()
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
