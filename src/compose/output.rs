use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::{
    foundation::error::{GaborError, GaborResult},
    params::envelope::Envelope,
};

/// `gabor_o<orientation>_env<envelope>_freq<frequency>.png`
pub fn output_file_name(orientation: f64, envelope: Envelope, frequency: f64) -> String {
    format!(
        "gabor_o{}_env{}_freq{}.png",
        format_orientation(orientation),
        envelope.name(),
        format_frequency(frequency)
    )
}

/// General numeric format with six significant digits and no trailing zeros
/// (`30`, `22.5`, `1e-05`, `1.23457e+06`).
pub fn format_orientation(v: f64) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }
    if v == 0.0 {
        let zero = if v.is_sign_negative() { "-0" } else { "0" };
        return zero.to_owned();
    }

    let sci = format!("{v:.5e}");
    let Some((mantissa, exp)) = split_exponent(&sci) else {
        return v.to_string();
    };
    if (-4..6).contains(&exp) {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_owned()
    } else {
        format!("{}{}", trim_fraction(mantissa), exponent_suffix(exp))
    }
}

/// Shortest round-trip decimal that always carries a fractional part
/// (`0.1`, `2.0`, `1.5e-05`).
pub fn format_frequency(v: f64) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }
    let s = format!("{v:?}");
    match split_exponent(&s) {
        Some((mantissa, exp)) => format!("{mantissa}{}", exponent_suffix(exp)),
        None => s,
    }
}

/// Encode `img` as PNG at `path`.
pub fn write_png(img: &RgbImage, path: &Path) -> GaborResult<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| GaborError::io(format!("write png '{}': {e}", path.display())))
}

fn split_exponent(s: &str) -> Option<(&str, i32)> {
    let (mantissa, exp) = s.split_once('e')?;
    Some((mantissa, exp.parse().ok()?))
}

fn exponent_suffix(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("e{sign}{:02}", exp.unsigned_abs())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn non_finite(v: f64) -> String {
    if v.is_nan() {
        "nan".to_owned()
    } else if v > 0.0 {
        "inf".to_owned()
    } else {
        "-inf".to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/output.rs"]
mod tests;
