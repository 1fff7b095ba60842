//! Inline `style` attribute parsing.
//!
//! A declaration list is a sequence of `name: value` pairs separated by `;`.
//! Pairs are processed strictly left to right, so a later declaration of the
//! same property wins. Only the properties in [`Property`] are understood:
//! a recognized property with a malformed value is fatal, while an unknown
//! property is reported as a warning and skipped.

use lsb_common::{Component, Diagnostics};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::StyleError;
use crate::style::{
    Color, DisplayValue, FontSize, FontStyle, FontWeight, ResolvedStyle, StyleOverrides,
    TextDecoration,
};

/// The properties an inline `style` attribute may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Property {
    /// `color: #RRGGBB`
    Color,
    /// `font-size: <integer>%`
    FontSize,
    /// `font-weight: normal | bold`
    FontWeight,
    /// `font-style: normal | italic`
    FontStyle,
    /// `text-decoration: none | underline`
    TextDecoration,
    /// `display: none | block | inline`
    Display,
}

impl Property {
    /// The CSS name of the property, e.g. `font-weight`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Parse a declaration list into overrides.
///
/// # Errors
///
/// Returns a [`StyleError`] as soon as a recognized property carries a value
/// outside its grammar. Declarations after the failing one are not examined.
pub fn parse_inline_style(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Result<StyleOverrides, StyleError> {
    let mut overrides = StyleOverrides::NONE;

    for declaration in text.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }

        let Some((name, value)) = declaration.split_once(':') else {
            diagnostics.warn(
                Component::Css,
                format!("ignored CSS declaration without a value: {declaration}"),
            );
            continue;
        };

        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        match name.parse::<Property>() {
            Ok(property) => apply_declaration(&mut overrides, property, value.trim())?,
            Err(_) => diagnostics.warn(Component::Css, format!("ignored CSS property: {name}")),
        }
    }

    Ok(overrides)
}

/// Parse a declaration list and apply it on top of `style`.
///
/// # Errors
///
/// See [`parse_inline_style`].
pub fn apply_inline_style(
    style: &ResolvedStyle,
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Result<ResolvedStyle, StyleError> {
    Ok(parse_inline_style(text, diagnostics)?.apply_to(style))
}

fn apply_declaration(
    overrides: &mut StyleOverrides,
    property: Property,
    value: &str,
) -> Result<(), StyleError> {
    match property {
        Property::Color => {
            let color = Color::from_hex(value).ok_or_else(|| StyleError::InvalidColor {
                value: value.to_string(),
            })?;
            overrides.color = Some(color);
        }
        Property::FontSize => overrides.font_size = Some(parse_font_size(value)?),
        Property::FontWeight => {
            overrides.font_weight = Some(parse_keyword::<FontWeight>(property, value)?);
        }
        Property::FontStyle => {
            overrides.font_style = Some(parse_keyword::<FontStyle>(property, value)?);
        }
        Property::TextDecoration => {
            overrides.text_decoration = Some(parse_keyword::<TextDecoration>(property, value)?);
        }
        Property::Display => {
            overrides.display = Some(parse_keyword::<DisplayValue>(property, value)?);
        }
    }
    Ok(())
}

/// `font-size` is an unsigned integer immediately followed by `%`.
fn parse_font_size(value: &str) -> Result<FontSize, StyleError> {
    let is_integer = |digits: &str| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

    match value.strip_suffix('%') {
        Some(digits) if is_integer(digits) => digits
            .parse()
            .map(FontSize)
            .map_err(|_| StyleError::InvalidFontSize {
                value: value.to_string(),
            }),
        None if is_integer(value) => Err(StyleError::MissingPercent {
            value: value.to_string(),
        }),
        _ => Err(StyleError::InvalidFontSize {
            value: value.to_string(),
        }),
    }
}

fn parse_keyword<T: std::str::FromStr>(property: Property, value: &str) -> Result<T, StyleError> {
    value.parse().map_err(|_| StyleError::InvalidKeyword {
        property: property.name(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn parse(text: &str) -> (Result<StyleOverrides, StyleError>, Diagnostics) {
        let mut diagnostics = Diagnostics::quiet();
        let result = parse_inline_style(text, &mut diagnostics);
        (result, diagnostics)
    }

    #[test]
    fn test_every_property_round_trips_its_name() {
        for property in Property::iter() {
            assert_eq!(property.name().parse::<Property>(), Ok(property));
        }
        assert_eq!(Property::TextDecoration.name(), "text-decoration");
    }

    #[test]
    fn test_color_declaration() {
        let (result, diagnostics) = parse("color:#ff0000;");
        assert_eq!(result.unwrap().color, Some(Color::rgb(255, 0, 0)));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_whitespace_and_case_are_tolerated() {
        let (result, _) = parse("  Font-Weight :  BOLD ; font-style:italic");
        let overrides = result.unwrap();
        assert_eq!(overrides.font_weight, Some(FontWeight::Bold));
        assert_eq!(overrides.font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn test_later_declaration_wins() {
        let (result, _) = parse("display:block; display:inline;");
        assert_eq!(result.unwrap().display, Some(DisplayValue::Inline));
    }

    #[test]
    fn test_font_size_percentage() {
        let (result, _) = parse("font-size:150%;");
        assert_eq!(result.unwrap().font_size, Some(FontSize(150)));
    }

    #[test]
    fn test_font_size_without_percent_is_fatal() {
        let (result, _) = parse("font-size:12;");
        assert_eq!(
            result,
            Err(StyleError::MissingPercent {
                value: "12".to_string()
            })
        );
    }

    #[test]
    fn test_font_size_garbage_is_fatal() {
        for value in ["%", "-5%", "1.5%", "12 %", "big"] {
            let (result, _) = parse(&format!("font-size:{value}"));
            assert!(
                matches!(result, Err(StyleError::InvalidFontSize { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_bad_color_is_fatal() {
        let (result, _) = parse("color: red;");
        assert!(matches!(result, Err(StyleError::InvalidColor { .. })));
    }

    #[test]
    fn test_bad_keyword_is_fatal() {
        let (result, _) = parse("font-weight: 700;");
        assert_eq!(
            result,
            Err(StyleError::InvalidKeyword {
                property: "font-weight",
                value: "700".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_property_warns_and_continues() {
        let (result, diagnostics) = parse("margin: 4px; color:#00ff00;");
        assert_eq!(result.unwrap().color, Some(Color::rgb(0, 255, 0)));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.warnings()[0].message.contains("margin"));
    }

    #[test]
    fn test_empty_pairs_are_silent() {
        let (result, diagnostics) = parse(";; ;");
        assert!(result.unwrap().is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_value_split_on_first_colon() {
        let (result, diagnostics) = parse("background:url(a:b);");
        assert!(result.unwrap().is_empty());
        assert!(diagnostics.warnings()[0].message.ends_with("background"));
    }

    #[test]
    fn test_apply_inline_style_keeps_untouched_fields() {
        let mut diagnostics = Diagnostics::quiet();
        let base = ResolvedStyle {
            font_weight: FontWeight::Bold,
            ..ResolvedStyle::ROOT
        };
        let style = apply_inline_style(&base, "text-decoration:underline", &mut diagnostics)
            .unwrap();
        assert_eq!(style.font_weight, FontWeight::Bold);
        assert_eq!(style.text_decoration, TextDecoration::Underline);
    }
}
