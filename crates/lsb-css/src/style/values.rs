//! Property values for the supported inline-style properties.

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Black (#000000), the root text color.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Blue (#0000ff), the fixed link color.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Build a color from its three channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse the six-digit `#RRGGBB` notation.
    ///
    /// Three-digit, alpha and unprefixed forms are rejected.
    #[must_use]
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Font size as a raw percentage.
///
/// The percentage is relative, but nothing in the pipeline composes it
/// against a base size. It is carried through to the layout output so the
/// presentation layer can decide what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FontSize(pub u32);

impl FontSize {
    /// 100%, the root size.
    pub const ROOT: Self = Self(100);

    /// The raw percentage value.
    #[must_use]
    pub const fn percent(self) -> u32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// `font-weight: normal | bold`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// `font-style: normal | italic`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// `text-decoration: none | underline`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    /// No decoration.
    #[default]
    None,
    /// Underlined text.
    Underline,
}

/// `display: none | block | inline`
///
/// Block boxes start on a new line; inline boxes continue the current line;
/// `none` hides the element and everything inside it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DisplayValue {
    /// Generates no boxes.
    None,
    /// Starts on a new line.
    #[default]
    Block,
    /// Flows on the current line.
    Inline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("#FfA500"), Some(Color::rgb(255, 165, 0)));
    }

    #[test]
    fn test_from_hex_rejects_other_forms() {
        assert_eq!(Color::from_hex("#f00"), None);
        assert_eq!(Color::from_hex("ff0000"), None);
        assert_eq!(Color::from_hex("#ff00000"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#+f0000"), None);
    }

    #[test]
    fn test_color_display_round_trips_hex() {
        let color = Color::rgb(18, 52, 86);
        assert_eq!(color.to_string(), "#123456");
    }

    #[test]
    fn test_keywords_parse_case_insensitively() {
        assert_eq!("BOLD".parse::<FontWeight>(), Ok(FontWeight::Bold));
        assert_eq!("italic".parse::<FontStyle>(), Ok(FontStyle::Italic));
        assert_eq!("Underline".parse::<TextDecoration>(), Ok(TextDecoration::Underline));
        assert_eq!("none".parse::<DisplayValue>(), Ok(DisplayValue::None));
        assert!("oblique".parse::<FontStyle>().is_err());
    }
}
