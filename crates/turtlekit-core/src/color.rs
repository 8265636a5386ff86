//! Stroke and fill colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const PURPLE: Color = Color::rgb(160, 32, 240);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const GRAY: Color = Color::rgb(190, 190, 190);
    pub const OLIVE: Color = Color::rgb(128, 128, 0);
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const MAROON: Color = Color::rgb(176, 48, 96);

    /// Look up a named color (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "blue" => Self::BLUE,
            "orange" => Self::ORANGE,
            "green" => Self::GREEN,
            "purple" => Self::PURPLE,
            "magenta" => Self::MAGENTA,
            "cyan" => Self::CYAN,
            "yellow" => Self::YELLOW,
            "pink" => Self::PINK,
            "brown" => Self::BROWN,
            "gray" | "grey" => Self::GRAY,
            "olive" => Self::OLIVE,
            "teal" => Self::TEAL,
            "navy" => Self::NAVY,
            "maroon" => Self::MAROON,
            _ => return None,
        };
        Some(color)
    }

    /// `#rrggbb` form, as used by SVG output.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts a color name or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(format!("Invalid hex color: {}", s));
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16)
                    .map_err(|e| format!("Invalid hex color {}: {}", s, e))
            };
            return Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }
        Color::from_name(s).ok_or_else(|| format!("Unknown color: {}", s))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Dot palette for the vertical ladder, indexed by `(label - 3) % PALETTE.len()`.
pub const PALETTE: [Color; 14] = [
    Color::BLUE,
    Color::ORANGE,
    Color::GREEN,
    Color::PURPLE,
    Color::MAGENTA,
    Color::CYAN,
    Color::YELLOW,
    Color::PINK,
    Color::BROWN,
    Color::GRAY,
    Color::OLIVE,
    Color::TEAL,
    Color::NAVY,
    Color::MAROON,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex() {
        assert_eq!("Magenta".parse::<Color>(), Ok(Color::MAGENTA));
        assert_eq!("#ff0000".parse::<Color>(), Ok(Color::RED));
        assert!("#ff00".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex_digits() {
        assert!("#a\u{e9}bcd".parse::<Color>().is_err());
        assert!("#+f0000".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::PURPLE).unwrap();
        assert_eq!(json, "\"#a020f0\"");
        let back: Color = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(back, Color::WHITE);
    }
}
