//! A page session.
//!
//! Owns one document together with the layout engine, the viewport and the
//! font metrics, and decides when cached measurements survive: scrolling and
//! resizing keep them, a new document or new fonts throw them away.

use lsb_layout::{ContentSize, FlowLayout, FontMetrics, LayoutConfig, LayoutResult, Viewport};

use crate::loader::Document;

/// A loaded document being displayed in a viewport.
pub struct Page {
    document: Document,
    layout: FlowLayout,
    viewport: Viewport,
    metrics: Box<dyn FontMetrics>,
    last: Option<LayoutResult>,
}

impl Page {
    /// Start a session. Nothing is laid out until [`Page::render`].
    #[must_use]
    pub fn new(
        document: Document,
        config: LayoutConfig,
        viewport: Viewport,
        metrics: Box<dyn FontMetrics>,
    ) -> Self {
        Self {
            document,
            layout: FlowLayout::new(config),
            viewport,
            metrics,
            last: None,
        }
    }

    /// Lay out the document at the current scroll offset.
    pub fn render(&mut self) -> &LayoutResult {
        let result = self.layout.layout(
            &self.document.tokens,
            self.metrics.as_ref(),
            self.viewport.scroll,
        );
        self.last.insert(result)
    }

    /// Content size of the latest layout, laying out first if needed.
    fn content_size(&mut self) -> ContentSize {
        match self.last.as_ref().map(LayoutResult::content_size) {
            Some(size) => size,
            None => self.render().content_size(),
        }
    }

    /// Scroll by a pixel delta, clamped to the content.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        let content = self.content_size();
        self.viewport.scroll_by(dx, dy, content);
    }

    /// Scroll by whole wheel steps of the configured size.
    pub fn scroll_steps(&mut self, x_steps: i16, y_steps: i16) {
        let step = self.layout.config().scroll_step;
        self.scroll_by(f32::from(x_steps) * step, f32::from(y_steps) * step);
    }

    /// Change the window size, clamping the scroll offset.
    pub fn resize(&mut self, width: f32, height: f32) {
        let content = self.content_size();
        self.viewport.resize(width, height, content);
    }

    /// Show a different document. Cached measurements are dropped.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.layout.invalidate();
        self.last = None;
        let content = self.content_size();
        self.viewport.clamp(content);
    }

    /// Measure with different fonts. Cached measurements are dropped.
    pub fn set_metrics(&mut self, metrics: Box<dyn FontMetrics>) {
        self.metrics = metrics;
        self.layout.invalidate();
        self.last = None;
    }

    /// Change layout geometry. Cached measurements are dropped.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.layout.set_config(config);
        self.last = None;
    }

    /// The document being shown.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The current viewport.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The latest layout, if one has been computed since the last change.
    #[must_use]
    pub const fn layout_result(&self) -> Option<&LayoutResult> {
        self.last.as_ref()
    }

    /// The document title from the latest layout.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.last.as_ref()?.title.as_deref()
    }
}
