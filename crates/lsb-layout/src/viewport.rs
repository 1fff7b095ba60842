//! Viewport and scroll clamping.
//!
//! Scrolling never triggers remeasurement: a new offset is clamped against
//! the content size of the last layout and the next pass shifts every box.

use serde::Serialize;

/// Width and height of laid-out content, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ContentSize {
    /// Content width.
    pub width: f32,
    /// Content height.
    pub height: f32,
}

/// How far the content is scrolled, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollOffset {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

/// The visible window onto the content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Window width.
    pub width: f32,
    /// Window height.
    pub height: f32,
    /// Current scroll offset.
    pub scroll: ScrollOffset,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(720.0, 480.0)
    }
}

/// Clamp one axis to `[0, content - window]`, or zero when the content fits.
fn clamp_axis(offset: f32, content: f32, window: f32) -> f32 {
    if offset <= 0.0 || content < window {
        0.0
    } else if offset > content - window {
        content - window
    } else {
        offset
    }
}

impl Viewport {
    /// A window of the given size scrolled to the top-left.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll: ScrollOffset::default(),
        }
    }

    /// Bring the scroll offset back inside the scrollable range.
    pub fn clamp(&mut self, content: ContentSize) {
        self.scroll.x = clamp_axis(self.scroll.x, content.width, self.width);
        self.scroll.y = clamp_axis(self.scroll.y, content.height, self.height);
    }

    /// Scroll by a delta and clamp.
    pub fn scroll_by(&mut self, dx: f32, dy: f32, content: ContentSize) {
        self.scroll.x += dx;
        self.scroll.y += dy;
        self.clamp(content);
    }

    /// Change the window size and clamp.
    pub fn resize(&mut self, width: f32, height: f32, content: ContentSize) {
        self.width = width;
        self.height = height;
        self.clamp(content);
    }
}
