//! Resolved styles.
//!
//! Every token carries exactly one [`ResolvedStyle`], computed when the token
//! is created and never modified afterwards. Partial updates are expressed
//! as [`StyleOverrides`], which both the built-in tag defaults and parsed
//! inline declarations produce.

use serde::Serialize;

use super::values::{Color, DisplayValue, FontSize, FontStyle, FontWeight, TextDecoration};

/// The fully computed set of visual properties for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedStyle {
    /// Text color.
    pub color: Color,
    /// Raw relative font size.
    pub font_size: FontSize,
    /// Bold or normal.
    pub font_weight: FontWeight,
    /// Italic or normal.
    pub font_style: FontStyle,
    /// Underline or none.
    pub text_decoration: TextDecoration,
    /// How the token participates in flow layout.
    pub display: DisplayValue,
}

impl ResolvedStyle {
    /// The synthetic root style every top-level token inherits from: black,
    /// 100%, normal weight and style, no decoration, block display.
    pub const ROOT: Self = Self {
        color: Color::BLACK,
        font_size: FontSize::ROOT,
        font_weight: FontWeight::Normal,
        font_style: FontStyle::Normal,
        text_decoration: TextDecoration::None,
        display: DisplayValue::Block,
    };

    /// Returns true if the style generates no boxes.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.display == DisplayValue::None
    }

    /// Returns true if the style starts a new line in flow layout.
    #[must_use]
    pub fn is_block(&self) -> bool {
        self.display == DisplayValue::Block
    }
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self::ROOT
    }
}

/// A partial style: only the properties that are `Some` replace the
/// corresponding field of the style they are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StyleOverrides {
    /// Replacement color.
    pub color: Option<Color>,
    /// Replacement font size.
    pub font_size: Option<FontSize>,
    /// Replacement font weight.
    pub font_weight: Option<FontWeight>,
    /// Replacement font style.
    pub font_style: Option<FontStyle>,
    /// Replacement text decoration.
    pub text_decoration: Option<TextDecoration>,
    /// Replacement display.
    pub display: Option<DisplayValue>,
}

impl StyleOverrides {
    /// Overrides that change nothing.
    pub const NONE: Self = Self {
        color: None,
        font_size: None,
        font_weight: None,
        font_style: None,
        text_decoration: None,
        display: None,
    };

    /// Overrides that only set `display`.
    #[must_use]
    pub const fn display(display: DisplayValue) -> Self {
        Self {
            display: Some(display),
            ..Self::NONE
        }
    }

    /// Returns true if no property is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Apply these overrides on top of `base`, field by field.
    #[must_use]
    pub fn apply_to(&self, base: &ResolvedStyle) -> ResolvedStyle {
        ResolvedStyle {
            color: self.color.unwrap_or(base.color),
            font_size: self.font_size.unwrap_or(base.font_size),
            font_weight: self.font_weight.unwrap_or(base.font_weight),
            font_style: self.font_style.unwrap_or(base.font_style),
            text_decoration: self.text_decoration.unwrap_or(base.text_decoration),
            display: self.display.unwrap_or(base.display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_style_values() {
        let root = ResolvedStyle::default();
        assert_eq!(root.color, Color::BLACK);
        assert_eq!(root.font_size.percent(), 100);
        assert_eq!(root.font_weight, FontWeight::Normal);
        assert_eq!(root.font_style, FontStyle::Normal);
        assert_eq!(root.text_decoration, TextDecoration::None);
        assert!(root.is_block());
    }

    #[test]
    fn test_empty_overrides_are_identity() {
        let base = ResolvedStyle {
            color: Color::rgb(1, 2, 3),
            font_weight: FontWeight::Bold,
            ..ResolvedStyle::ROOT
        };
        assert!(StyleOverrides::NONE.is_empty());
        assert_eq!(StyleOverrides::NONE.apply_to(&base), base);
    }

    #[test]
    fn test_overrides_touch_only_named_fields() {
        let base = ResolvedStyle {
            color: Color::rgb(9, 9, 9),
            ..ResolvedStyle::ROOT
        };
        let overrides = StyleOverrides {
            font_style: Some(FontStyle::Italic),
            ..StyleOverrides::display(DisplayValue::Inline)
        };
        let result = overrides.apply_to(&base);
        assert_eq!(result.color, Color::rgb(9, 9, 9));
        assert_eq!(result.font_style, FontStyle::Italic);
        assert_eq!(result.display, DisplayValue::Inline);
        assert_eq!(result.font_weight, FontWeight::Normal);
    }
}
