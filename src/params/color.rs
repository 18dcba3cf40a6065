use serde::Deserialize;

use crate::foundation::{
    core::Rgb,
    error::{GaborError, GaborResult},
};

/// Resolve a human-readable color to an RGB triple in `[0, 1]`.
///
/// Accepted forms:
/// - CSS4 color names, case-insensitive (`"gray"`, `"DarkSlateBlue"`)
/// - single-letter base colors `b g r c m y k w`
/// - Tableau palette names (`"tab:blue"`, `"tab:orange"`, ...)
/// - hex `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (alpha is ignored)
/// - grayscale intensity strings such as `"0.75"`
pub fn parse_color(s: &str) -> GaborResult<Rgb> {
    let s = s.trim();
    if s.is_empty() {
        return Err(GaborError::color("empty color string"));
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Ok(v) = s.parse::<f64>() {
        if !(0.0..=1.0).contains(&v) {
            return Err(GaborError::color(format!(
                "grayscale value must be within [0, 1], got \"{s}\""
            )));
        }
        return Ok(Rgb::gray(v));
    }

    let lower = s.to_ascii_lowercase();
    if let Some(c) = base_color(&lower) {
        return Ok(c);
    }
    if let Some(name) = lower.strip_prefix("tab:") {
        return tableau_color(name)
            .ok_or_else(|| GaborError::color(format!("unknown tableau color \"{s}\"")));
    }
    CSS4_COLORS
        .binary_search_by_key(&lower.as_str(), |&(name, _)| name)
        .map(|idx| rgb_from_hex_u32(CSS4_COLORS[idx].1))
        .map_err(|_| GaborError::color(format!("unknown color \"{s}\"")))
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Named(String),
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Named(s) => parse_color(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => {
                if v.len() != 3 {
                    return Err(serde::de::Error::custom(
                        "rgb array must have len 3 ([r,g,b])",
                    ));
                }
                Rgb::new(v[0], v[1], v[2]).map_err(serde::de::Error::custom)
            }
        }
    }
}

fn parse_hex(hex: &str) -> GaborResult<Rgb> {
    fn nibble(c: u8) -> Option<u8> {
        (c as char).to_digit(16).map(|d| d as u8)
    }

    let digits = hex
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| GaborError::color(format!("invalid hex color \"#{hex}\"")))?;

    let (r, g, b) = match digits.len() {
        3 | 4 => (digits[0] * 17, digits[1] * 17, digits[2] * 17),
        6 | 8 => (
            (digits[0] << 4) | digits[1],
            (digits[2] << 4) | digits[3],
            (digits[4] << 4) | digits[5],
        ),
        _ => {
            return Err(GaborError::color(
                "hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA (case-insensitive)",
            ));
        }
    };
    Ok(Rgb::from_u8(r, g, b))
}

fn rgb_from_hex_u32(v: u32) -> Rgb {
    Rgb::from_u8((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

fn base_color(name: &str) -> Option<Rgb> {
    let c = match name {
        "b" => Rgb { r: 0.0, g: 0.0, b: 1.0 },
        "g" => Rgb { r: 0.0, g: 0.5, b: 0.0 },
        "r" => Rgb { r: 1.0, g: 0.0, b: 0.0 },
        "c" => Rgb { r: 0.0, g: 0.75, b: 0.75 },
        "m" => Rgb { r: 0.75, g: 0.0, b: 0.75 },
        "y" => Rgb { r: 0.75, g: 0.75, b: 0.0 },
        "k" => Rgb::BLACK,
        "w" => Rgb::WHITE,
        _ => return None,
    };
    Some(c)
}

fn tableau_color(name: &str) -> Option<Rgb> {
    let hex = match name {
        "blue" => 0x1f77b4,
        "orange" => 0xff7f0e,
        "green" => 0x2ca02c,
        "red" => 0xd62728,
        "purple" => 0x9467bd,
        "brown" => 0x8c564b,
        "pink" => 0xe377c2,
        "gray" | "grey" => 0x7f7f7f,
        "olive" => 0xbcbd22,
        "cyan" => 0x17becf,
        _ => return None,
    };
    Some(rgb_from_hex_u32(hex))
}

// Sorted by name for binary search.
const CSS4_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

#[cfg(test)]
#[path = "../../tests/unit/params/color.rs"]
mod tests;
