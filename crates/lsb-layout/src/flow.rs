//! Flow layout.
//!
//! One forward pass over the token arena. Block tags only raise a
//! "start a new line" flag; text runs are placed left to right on the
//! current line until the next block boundary. Nothing ever wraps: a line is
//! as wide as the runs placed on it, and the content width is the widest
//! line.
//!
//! Cursor coordinates are relative to the top-left of the content area.
//! Box rectangles are in viewport coordinates: the page padding is added and
//! the scroll offset subtracted.

use lsb_css::{Color, FontSize, FontStyle, FontWeight, ResolvedStyle, TextDecoration};
use lsb_html::{TagKind, TokenId, TokenKind, TokenList};
use serde::Serialize;

use crate::cache::{MeasureCache, Measurement};
use crate::config::LayoutConfig;
use crate::metrics::{FontFace, FontMetrics, FontSpec};
use crate::viewport::{ContentSize, ScrollOffset};

/// A rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// What produced a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxKind {
    /// A text token.
    Text,
    /// The marker in front of a list item.
    Marker,
}

/// One positioned, sized and styled run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutBox {
    /// The text token, or the `li` start tag for a marker.
    pub token: TokenId,
    /// Text or marker.
    pub kind: BoxKind,
    /// The run's text.
    pub text: String,
    /// Position and size.
    pub rect: Rect,
    /// Text color.
    pub color: Color,
    /// Selected face.
    pub face: FontFace,
    /// Bold or normal.
    pub weight: FontWeight,
    /// Italic or normal.
    pub style: FontStyle,
    /// Underline or none.
    pub decoration: TextDecoration,
    /// Raw relative font size from the cascade.
    pub font_size: FontSize,
}

/// Output of one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutResult {
    /// Boxes in document order.
    pub boxes: Vec<LayoutBox>,
    /// Widest line plus horizontal padding.
    pub content_width: f32,
    /// Bottom of the last line plus vertical padding.
    pub content_height: f32,
    /// Text of the `title` element, if any.
    pub title: Option<String>,
    /// Runs measured through the font metrics in this pass.
    pub measured: usize,
    /// Runs whose size came from the cache.
    pub reused: usize,
}

impl LayoutResult {
    /// Width and height of the laid-out content.
    #[must_use]
    pub const fn content_size(&self) -> ContentSize {
        ContentSize {
            width: self.content_width,
            height: self.content_height,
        }
    }
}

/// Cursor state carried through one pass.
struct Cursor {
    x: f32,
    y: f32,
    line_height: f32,
    last_width: f32,
    max_right: f32,
    new_line: bool,
    faces: Vec<FontFace>,
    open_items: usize,
}

impl Cursor {
    const fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            line_height: 0.0,
            last_width: 0.0,
            max_right: 0.0,
            new_line: true,
            faces: Vec::new(),
            open_items: 0,
        }
    }

    fn face(&self) -> FontFace {
        self.faces.last().copied().unwrap_or_default()
    }

    /// Move to the start of the next line.
    fn break_line(&mut self, indent: f32) {
        self.x = indent;
        self.y += self.line_height;
        self.line_height = 0.0;
        self.new_line = false;
    }
}

/// The flow layout engine. Holds the measurement cache between passes.
#[derive(Debug, Default)]
pub struct FlowLayout {
    config: LayoutConfig,
    cache: MeasureCache,
}

impl FlowLayout {
    /// A layout engine with an empty cache.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            cache: MeasureCache::default(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration. Face sizes may change, so the cache is
    /// invalidated.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.cache.invalidate();
    }

    /// Forget every cached measurement. Call after a new parse or a font
    /// change.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// The measurement cache.
    #[must_use]
    pub const fn cache(&self) -> &MeasureCache {
        &self.cache
    }

    /// Lay out `tokens`, shifting every box by `scroll`.
    pub fn layout(
        &mut self,
        tokens: &TokenList,
        metrics: &dyn FontMetrics,
        scroll: ScrollOffset,
    ) -> LayoutResult {
        let mut cursor = Cursor::new();
        let mut result = LayoutResult::default();
        let mut title = String::new();
        let mut saw_title = false;

        for (id, token) in tokens.iter() {
            if let Some(text) = token.text()
                && let Some(title_tag) = tokens.enclosing(id, TagKind::Title)
            {
                // The title element is never displayed itself; only a hidden
                // element around it drops the text.
                if !tokens.ancestors(title_tag).any(|(_, a)| a.style.is_hidden()) {
                    title.push_str(text);
                    saw_title = true;
                }
                continue;
            }
            if tokens.is_hidden(id) {
                continue;
            }

            match &token.kind {
                TokenKind::StartTag(tag) => {
                    if token.style.is_block() {
                        cursor.new_line = true;
                    }
                    cursor.line_height += self.config.heading_gap(*tag);
                    if let Some(face) = FontFace::for_tag(*tag) {
                        cursor.faces.push(face);
                    }
                    if *tag == TagKind::Li {
                        self.place_marker(id, &token.style, &mut cursor, metrics, scroll, &mut result);
                        cursor.open_items += 1;
                    }
                }
                TokenKind::EndTag(tag) => {
                    if token.style.is_block() {
                        cursor.new_line = true;
                    }
                    if FontFace::for_tag(*tag).is_some() {
                        let _ = cursor.faces.pop();
                    }
                    if *tag == TagKind::Li {
                        cursor.open_items = cursor.open_items.saturating_sub(1);
                    }
                }
                TokenKind::SelfClosingTag(TagKind::Br) => {
                    cursor.y += cursor.line_height;
                    cursor.x = 0.0;
                    cursor.line_height = self.config.line_gap;
                    cursor.new_line = true;
                }
                TokenKind::PlainText(text) => {
                    self.place_text(id, text, &token.style, &mut cursor, metrics, scroll, &mut result);
                }
                TokenKind::SelfClosingTag(_) | TokenKind::EndOfInput => {}
            }
        }

        self.cache.mark_valid();
        result.content_width = cursor.max_right + 2.0 * self.config.padding_x;
        result.content_height = cursor.y + cursor.line_height + 2.0 * self.config.padding_y;
        if saw_title {
            result.title = Some(title.trim().to_string());
        }

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT] {} boxes, content {}x{}, measured={} reused={}",
            result.boxes.len(),
            result.content_width,
            result.content_height,
            result.measured,
            result.reused
        );

        result
    }

    fn font_spec(&self, face: FontFace, style: &ResolvedStyle) -> FontSpec {
        FontSpec {
            face,
            size: self.config.face_size(face),
            weight: style.font_weight,
            style: style.font_style,
        }
    }

    /// Size of a run, from the cache when it is valid.
    fn measure(
        &mut self,
        id: TokenId,
        text: &str,
        font: &FontSpec,
        metrics: &dyn FontMetrics,
        result: &mut LayoutResult,
    ) -> Measurement {
        if let Some(measurement) = self.cache.get(id.0) {
            result.reused += 1;
            return measurement;
        }
        let measurement = Measurement {
            width: metrics.text_width(text, font),
            height: metrics.line_height(font),
        };
        self.cache.insert(id.0, measurement);
        result.measured += 1;
        measurement
    }

    fn indent(&self, cursor: &Cursor, metrics: &dyn FontMetrics) -> f32 {
        if cursor.open_items == 0 {
            return 0.0;
        }
        let font = self.font_spec(cursor.face(), &ResolvedStyle::ROOT);
        metrics.text_width(&self.config.list_indent, &font)
    }

    #[allow(clippy::too_many_arguments)]
    fn place_text(
        &mut self,
        id: TokenId,
        text: &str,
        style: &ResolvedStyle,
        cursor: &mut Cursor,
        metrics: &dyn FontMetrics,
        scroll: ScrollOffset,
        result: &mut LayoutResult,
    ) {
        if cursor.new_line {
            let indent = self.indent(cursor, metrics);
            cursor.break_line(indent);
        } else {
            cursor.x += cursor.last_width;
        }

        let face = cursor.face();
        let font = self.font_spec(face, style);
        let size = self.measure(id, text, &font, metrics, result);

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT TEXT] token={} at ({}, {}) size {}x{} {text:?}",
            id.0, cursor.x, cursor.y, size.width, size.height
        );

        result.boxes.push(self.make_box(id, BoxKind::Text, text, style, face, size, cursor, scroll));
        self.advance(cursor, size);
    }

    /// Start a fresh line for a list item and put the marker on it.
    #[allow(clippy::too_many_arguments)]
    fn place_marker(
        &mut self,
        id: TokenId,
        style: &ResolvedStyle,
        cursor: &mut Cursor,
        metrics: &dyn FontMetrics,
        scroll: ScrollOffset,
        result: &mut LayoutResult,
    ) {
        let indent = self.indent(cursor, metrics);
        cursor.break_line(indent);

        let marker_style = ResolvedStyle {
            font_weight: FontWeight::Bold,
            ..*style
        };
        let face = cursor.face();
        let font = self.font_spec(face, &marker_style);
        let marker = self.config.list_marker.clone();
        let size = self.measure(id, &marker, &font, metrics, result);

        result.boxes.push(self.make_box(
            id,
            BoxKind::Marker,
            &marker,
            &marker_style,
            face,
            size,
            cursor,
            scroll,
        ));
        self.advance(cursor, size);
    }

    fn advance(&self, cursor: &mut Cursor, size: Measurement) {
        cursor.max_right = cursor.max_right.max(cursor.x + size.width);
        cursor.line_height = cursor.line_height.max(size.height + self.config.line_gap);
        cursor.last_width = size.width;
    }

    #[allow(clippy::too_many_arguments)]
    fn make_box(
        &self,
        token: TokenId,
        kind: BoxKind,
        text: &str,
        style: &ResolvedStyle,
        face: FontFace,
        size: Measurement,
        cursor: &Cursor,
        scroll: ScrollOffset,
    ) -> LayoutBox {
        LayoutBox {
            token,
            kind,
            text: text.to_string(),
            rect: Rect {
                x: self.config.padding_x + cursor.x - scroll.x,
                y: self.config.padding_y + cursor.y - scroll.y,
                width: size.width,
                height: size.height,
            },
            color: style.color,
            face,
            weight: style.font_weight,
            style: style.font_style,
            decoration: style.text_decoration,
            font_size: style.font_size,
        }
    }
}
