//! Layout configuration.

use lsb_html::TagKind;

use crate::metrics::FontFace;

/// Fixed geometry of the flow layout, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Left and right page margin.
    pub padding_x: f32,
    /// Top and bottom page margin.
    pub padding_y: f32,
    /// Extra space added below every line.
    pub line_gap: f32,
    /// Size of the body face.
    pub body_size: f32,
    /// Size of the `h1` face.
    pub heading1_size: f32,
    /// Size of the `h2` face.
    pub heading2_size: f32,
    /// Size of the `h3` face.
    pub heading3_size: f32,
    /// Space added above an `h1`.
    pub heading1_gap: f32,
    /// Space added above an `h2`.
    pub heading2_gap: f32,
    /// Space added above an `h3`.
    pub heading3_gap: f32,
    /// Marker placed at the start of every list item.
    pub list_marker: String,
    /// Text whose width indents continuation lines of a list item.
    pub list_indent: String,
    /// Distance moved by one scroll step.
    pub scroll_step: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_x: 20.0,
            padding_y: 20.0,
            line_gap: 10.0,
            body_size: 16.0,
            heading1_size: 48.0,
            heading2_size: 32.0,
            heading3_size: 20.0,
            heading1_gap: 20.0,
            heading2_gap: 15.0,
            heading3_gap: 10.0,
            list_marker: " \u{2022}  ".to_string(),
            list_indent: "    ".to_string(),
            scroll_step: 20.0,
        }
    }
}

impl LayoutConfig {
    /// Pixel size of a face.
    #[must_use]
    pub const fn face_size(&self, face: FontFace) -> f32 {
        match face {
            FontFace::Body => self.body_size,
            FontFace::Heading1 => self.heading1_size,
            FontFace::Heading2 => self.heading2_size,
            FontFace::Heading3 => self.heading3_size,
        }
    }

    /// Space added above a heading start tag; zero for other tags.
    #[must_use]
    pub const fn heading_gap(&self, tag: TagKind) -> f32 {
        match tag {
            TagKind::H1 => self.heading1_gap,
            TagKind::H2 => self.heading2_gap,
            TagKind::H3 => self.heading3_gap,
            _ => 0.0,
        }
    }
}
