use std::path::PathBuf;

use super::*;

#[test]
fn file_name_matches_documented_pattern() {
    assert_eq!(
        output_file_name(30.0, Envelope::Sine, 0.1),
        "gabor_o30_envsine_freq0.1.png"
    );
    assert_eq!(
        output_file_name(22.5, Envelope::Gaussian { std: 20.0 }, 2.0),
        "gabor_o22.5_envgaussian_freq2.0.png"
    );
    assert_eq!(
        output_file_name(-45.0, Envelope::Circle, 0.05),
        "gabor_o-45_envcircle_freq0.05.png"
    );
}

#[test]
fn orientation_uses_general_format() {
    let cases = [
        (0.0, "0"),
        (30.0, "30"),
        (67.5, "67.5"),
        (-0.5, "-0.5"),
        (123456.0, "123456"),
        (1234567.0, "1.23457e+06"),
        (0.0001, "0.0001"),
        (0.00001, "1e-05"),
        (1.0 / 3.0, "0.333333"),
        (359.99999, "360"),
    ];
    for (v, expected) in cases {
        assert_eq!(format_orientation(v), expected, "{v}");
    }
}

#[test]
fn frequency_keeps_a_fractional_part() {
    assert_eq!(format_frequency(0.1), "0.1");
    assert_eq!(format_frequency(2.0), "2.0");
    assert_eq!(format_frequency(0.3333333333333333), "0.3333333333333333");
    assert_eq!(format_frequency(1.5e-5), "1.5e-05");
    assert_eq!(format_frequency(1e16), "1e+16");
}

#[test]
fn write_png_round_trips_pixels() {
    let dir = PathBuf::from("target").join("unit_write_png");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("px.png");

    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgb([1, 2, 3]));
    img.put_pixel(1, 0, image::Rgb([250, 128, 0]));
    write_png(&img, &path).unwrap();

    let back = image::open(&path).unwrap().to_rgb8();
    assert_eq!(back, img);
}

#[test]
fn write_png_to_missing_directory_is_io_error() {
    let path = PathBuf::from("target")
        .join("unit_write_png_missing")
        .join("nested")
        .join("px.png");
    let _ = std::fs::remove_dir_all(PathBuf::from("target").join("unit_write_png_missing"));

    let err = write_png(&RgbImage::new(1, 1), &path).unwrap_err();
    assert!(matches!(err, GaborError::Io(_)));
    assert!(!err.is_config());
    assert!(!path.exists());
}
