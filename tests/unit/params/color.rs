use serde_json::json;

use super::*;

#[test]
fn parses_default_cli_colors() {
    assert_eq!(parse_color("black").unwrap(), Rgb::BLACK);
    assert_eq!(parse_color("white").unwrap(), Rgb::WHITE);
    let gray = parse_color("gray").unwrap();
    assert_eq!(gray, Rgb::from_u8(128, 128, 128));
    assert_eq!(gray.to_rgb8(), [128, 128, 128]);
}

#[test]
fn names_are_case_insensitive_and_grey_aliases_gray() {
    assert_eq!(
        parse_color("DarkSlateBlue").unwrap(),
        Rgb::from_u8(0x48, 0x3d, 0x8b)
    );
    assert_eq!(parse_color("grey").unwrap(), parse_color("gray").unwrap());
    assert_eq!(parse_color("  red ").unwrap(), Rgb::from_u8(255, 0, 0));
}

#[test]
fn css_table_is_sorted_for_binary_search() {
    assert!(CSS4_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(CSS4_COLORS.len(), 148);
}

#[test]
fn parses_hex_forms() {
    assert_eq!(parse_color("#ff0000").unwrap(), Rgb::from_u8(255, 0, 0));
    assert_eq!(parse_color("#00FF0080").unwrap(), Rgb::from_u8(0, 255, 0));
    assert_eq!(parse_color("#abc").unwrap(), Rgb::from_u8(0xaa, 0xbb, 0xcc));
    assert_eq!(parse_color("#abcd").unwrap(), Rgb::from_u8(0xaa, 0xbb, 0xcc));
    assert!(parse_color("#abcde").is_err());
    assert!(parse_color("#gg0000").is_err());
}

#[test]
fn parses_base_tableau_and_grayscale() {
    assert_eq!(parse_color("k").unwrap(), Rgb::BLACK);
    assert_eq!(parse_color("g").unwrap().g, 0.5);
    assert_eq!(
        parse_color("tab:blue").unwrap(),
        Rgb::from_u8(0x1f, 0x77, 0xb4)
    );
    assert_eq!(parse_color("0.25").unwrap(), Rgb::gray(0.25));
    assert!(parse_color("1.5").is_err());
    assert!(parse_color("-0.5").is_err());
}

#[test]
fn unknown_colors_are_color_errors() {
    for s in ["", "notacolor", "tab:teal", "nan"] {
        let err = parse_color(s).unwrap_err();
        assert!(matches!(err, GaborError::Color(_)), "{s}: {err}");
        assert!(err.is_config());
    }
}

#[test]
fn deserializes_from_string_or_array() {
    let c: Rgb = serde_json::from_value(json!("navy")).unwrap();
    assert_eq!(c, Rgb::from_u8(0, 0, 0x80));

    let c: Rgb = serde_json::from_value(json!([0.25, 0.5, 0.75])).unwrap();
    assert_eq!(c, Rgb::new(0.25, 0.5, 0.75).unwrap());

    assert!(serde_json::from_value::<Rgb>(json!([0.25, 0.5])).is_err());
    assert!(serde_json::from_value::<Rgb>(json!([0.25, 0.5, 2.0])).is_err());
    assert!(serde_json::from_value::<Rgb>(json!("nope")).is_err());
}
