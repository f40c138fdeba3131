//! Custom serialization helpers for vello::peniko::Color

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Same as the parent module, for optional colors.
pub mod option {
    use super::*;

    /// Serialize an optional Color as a hex string or `null`.
    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(color) => serializer.serialize_some(&to_hex(*color)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional Color from a hex string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        Option::<String>::deserialize(deserializer)?
            .map(|hex| parse_hex_color(&hex).map_err(Error::custom))
            .transpose()
    }
}

/// Format a Color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.components.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into a Color.
pub fn parse_hex_color(hex: &str) -> Result<Color, String> {
    let Some(hex) = hex.strip_prefix('#') else {
        return Err("Hex color must start with '#'".to_string());
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("Invalid hex color".to_string());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| "Invalid hex color".to_string());

    match hex.len() {
        3 => {
            let r = channel(&hex[0..1].repeat(2))?;
            let g = channel(&hex[1..2].repeat(2))?;
            let b = channel(&hex[2..3].repeat(2))?;
            Ok(Color::from_rgb8(r, g, b))
        },
        6 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            Ok(Color::from_rgb8(r, g, b))
        },
        8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = channel(&hex[6..8])?;
            Ok(Color::from_rgba8(r, g, b, a))
        },
        _ => Err("Hex color must be 3, 6 or 8 characters".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex_color("#7C7BAD"), Ok(Color::from_rgb8(0x7c, 0x7b, 0xad)));
        assert_eq!(parse_hex_color("#ff0"), Ok(Color::from_rgb8(255, 255, 0)));
        assert_eq!(
            parse_hex_color("#00000080"),
            Ok(Color::from_rgba8(0, 0, 0, 0x80))
        );
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(parse_hex_color("7c7bad").is_err());
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
        assert!(parse_hex_color("#ééé").is_err());
        assert!(parse_hex_color("#+f+f+f").is_err());
        assert!(parse_hex_color("#+1+2+3").is_err());
        assert!(parse_hex_color("#-1-2-3").is_err());
        assert!(parse_hex_color(" #ffffff").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Color::from_rgb8(0x12, 0xab, 0x34)), "#12ab34");
        assert_eq!(to_hex(Color::from_rgba8(0, 0, 0, 0x80)), "#00000080");
    }
}
