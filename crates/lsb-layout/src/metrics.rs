//! Text measurement.
//!
//! Layout never rasterizes anything; it only needs the advance width of a
//! run and the height of a line. Both come from a [`FontMetrics`]
//! implementation, so layout can run against real font files or against the
//! fixed-ratio [`ApproximateFontMetrics`] used as a fallback and in tests.

use lsb_css::{FontStyle, FontWeight};
use lsb_html::TagKind;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// The font face selected by the nearest heading or paragraph ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    /// Paragraph and default text.
    #[default]
    Body,
    /// `h1`
    Heading1,
    /// `h2`
    Heading2,
    /// `h3`
    Heading3,
}

impl FontFace {
    /// The face a tag selects, if it selects one at all.
    #[must_use]
    pub const fn for_tag(tag: TagKind) -> Option<Self> {
        match tag {
            TagKind::P => Some(Self::Body),
            TagKind::H1 => Some(Self::Heading1),
            TagKind::H2 => Some(Self::Heading2),
            TagKind::H3 => Some(Self::Heading3),
            _ => None,
        }
    }
}

/// Everything a measurement depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Selected face.
    pub face: FontFace,
    /// Face size in pixels.
    pub size: f32,
    /// Bold or normal.
    pub weight: FontWeight,
    /// Italic or normal.
    pub style: FontStyle,
}

/// Font metrics provider for measuring text runs.
pub trait FontMetrics {
    /// Measure the total advance width of `text` in `font`.
    fn text_width(&self, text: &str, font: &FontSpec) -> f32;

    /// Height of one line of text in `font`.
    fn line_height(&self, font: &FontSpec) -> f32;
}

/// Approximate font metrics using fixed ratios.
///
/// Every character advances by 0.6 of the font size and a line is 1.2 times
/// the font size. Weight and style are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontMetrics;

impl FontMetrics for ApproximateFontMetrics {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        const CHAR_WIDTH_RATIO: f32 = 0.6;
        text.chars().count() as f32 * font.size * CHAR_WIDTH_RATIO
    }

    fn line_height(&self, font: &FontSpec) -> f32 {
        const LINE_HEIGHT_RATIO: f32 = 1.2;
        font.size * LINE_HEIGHT_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(size: f32) -> FontSpec {
        FontSpec {
            face: FontFace::Body,
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }

    #[test]
    fn test_approximate_width_counts_chars() {
        let metrics = ApproximateFontMetrics;
        assert!((metrics.text_width("abcde", &body(10.0)) - 30.0).abs() < f32::EPSILON);
        assert!((metrics.text_width("•", &body(10.0)) - 6.0).abs() < f32::EPSILON);
        assert!(metrics.text_width("", &body(10.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_approximate_line_height() {
        assert!((ApproximateFontMetrics.line_height(&body(20.0)) - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_face_selection() {
        assert_eq!(FontFace::for_tag(TagKind::H2), Some(FontFace::Heading2));
        assert_eq!(FontFace::for_tag(TagKind::P), Some(FontFace::Body));
        assert_eq!(FontFace::for_tag(TagKind::Strong), None);
    }
}
