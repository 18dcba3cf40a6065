use image::RgbImage;

use crate::foundation::{
    core::{Field, Rgb},
    error::{GaborError, GaborResult},
};

/// Blend the grating colors by `amplitude`, then blend the result over
/// `background` using `envelope` as opacity, quantizing to 8-bit RGB.
pub fn compose(
    amplitude: &Field,
    envelope: &Field,
    color1: Rgb,
    color2: Rgb,
    background: Rgb,
) -> GaborResult<RgbImage> {
    if !amplitude.same_shape(envelope) {
        return Err(GaborError::validation(format!(
            "amplitude ({0}x{0}) and envelope ({1}x{1}) fields are not aligned",
            amplitude.size(),
            envelope.size()
        )));
    }

    let size = amplitude.size();
    let mut img = RgbImage::new(size, size);
    let weights = amplitude.values().iter().zip(envelope.values());
    for (px, (&a, &e)) in img.pixels_mut().zip(weights) {
        let grating = color1.mix(color2, a);
        *px = image::Rgb(grating.mix(background, e).to_rgb8());
    }
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
