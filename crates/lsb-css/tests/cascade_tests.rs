//! Integration tests for the style cascade and inline-style parser.

use lsb_common::Diagnostics;
use lsb_css::{
    Color, DisplayValue, FontSize, FontStyle, FontWeight, ResolvedStyle, StyleError,
    StyleOverrides, TextDecoration, apply_inline_style, cascade, resolve,
};
use quickcheck_macros::quickcheck;

/// Build an arbitrary style from raw generator output.
fn style_from(seed: (u8, u8, u8, u32, u8)) -> ResolvedStyle {
    let (r, g, b, size, flags) = seed;
    ResolvedStyle {
        color: Color::rgb(r, g, b),
        font_size: FontSize(size % 1000),
        font_weight: if flags & 1 == 0 {
            FontWeight::Normal
        } else {
            FontWeight::Bold
        },
        font_style: if flags & 2 == 0 {
            FontStyle::Normal
        } else {
            FontStyle::Italic
        },
        text_decoration: if flags & 4 == 0 {
            TextDecoration::None
        } else {
            TextDecoration::Underline
        },
        display: match (flags >> 3) & 3 {
            0 => DisplayValue::None,
            1 => DisplayValue::Inline,
            _ => DisplayValue::Block,
        },
    }
}

/// The `em` defaults: italic and inline, nothing else.
fn em_defaults() -> StyleOverrides {
    StyleOverrides {
        font_style: Some(FontStyle::Italic),
        ..StyleOverrides::display(DisplayValue::Inline)
    }
}

#[quickcheck]
fn prop_no_defaults_means_exact_inheritance(seed: (u8, u8, u8, u32, u8)) -> bool {
    let parent = style_from(seed);
    cascade(Some(&parent), &StyleOverrides::NONE) == parent
}

#[quickcheck]
fn prop_defaults_override_only_named_properties(seed: (u8, u8, u8, u32, u8)) -> bool {
    let parent = style_from(seed);
    let child = cascade(Some(&parent), &em_defaults());

    child.font_style == FontStyle::Italic
        && child.display == DisplayValue::Inline
        && child.color == parent.color
        && child.font_size == parent.font_size
        && child.font_weight == parent.font_weight
        && child.text_decoration == parent.text_decoration
}

#[quickcheck]
fn prop_any_hex_color_parses(r: u8, g: u8, b: u8) -> bool {
    let mut diagnostics = Diagnostics::quiet();
    let declaration = format!("color:#{r:02X}{g:02x}{b:02x};");
    apply_inline_style(&ResolvedStyle::ROOT, &declaration, &mut diagnostics)
        .is_ok_and(|style| style.color == Color::rgb(r, g, b))
}

#[test]
fn test_em_inside_bold_colored_parent() {
    let parent = ResolvedStyle {
        color: Color::rgb(200, 0, 0),
        font_weight: FontWeight::Bold,
        ..ResolvedStyle::ROOT
    };
    let em = cascade(Some(&parent), &em_defaults());
    assert_eq!(em.color, Color::rgb(200, 0, 0));
    assert_eq!(em.font_weight, FontWeight::Bold);
    assert_eq!(em.font_style, FontStyle::Italic);
}

#[test]
fn test_span_color_from_inline_style() {
    let mut diagnostics = Diagnostics::quiet();
    let style = resolve(
        None,
        &StyleOverrides::display(DisplayValue::Inline),
        Some("color:#ff0000;"),
        &mut diagnostics,
    )
    .unwrap();
    assert_eq!(style.color, Color::rgb(255, 0, 0));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_every_recognized_property_at_once() {
    let mut diagnostics = Diagnostics::quiet();
    let style = apply_inline_style(
        &ResolvedStyle::ROOT,
        "color:#010203; font-size:80%; font-weight:bold; font-style:italic; \
         text-decoration:underline; display:none;",
        &mut diagnostics,
    )
    .unwrap();
    assert_eq!(
        style,
        ResolvedStyle {
            color: Color::rgb(1, 2, 3),
            font_size: FontSize(80),
            font_weight: FontWeight::Bold,
            font_style: FontStyle::Italic,
            text_decoration: TextDecoration::Underline,
            display: DisplayValue::None,
        }
    );
}

#[test]
fn test_error_messages_name_the_value() {
    let mut diagnostics = Diagnostics::quiet();
    let err = apply_inline_style(&ResolvedStyle::ROOT, "display:flex", &mut diagnostics)
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid value 'flex' for property 'display'");

    let err = apply_inline_style(&ResolvedStyle::ROOT, "font-size:12", &mut diagnostics)
        .unwrap_err();
    assert_eq!(
        err,
        StyleError::MissingPercent {
            value: "12".to_string()
        }
    );
}
