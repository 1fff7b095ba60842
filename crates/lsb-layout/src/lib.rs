//! Flow layout for lsb.
//!
//! Turns a styled token arena into positioned text boxes:
//!
//! - **Flow** - a single forward pass with block line breaks, list markers,
//!   heading faces and `br`
//! - **Measurement cache** - text sizes keyed by token ordinal, reused until
//!   the document or the fonts change
//! - **Metrics** - the [`FontMetrics`] seam and a fixed-ratio fallback
//! - **Viewport** - scroll offsets clamped to the content size
//!
//! # Example
//! ```
//! use lsb_common::Diagnostics;
//! use lsb_html::{ParserLimits, tokenize};
//! use lsb_layout::{ApproximateFontMetrics, FlowLayout, ScrollOffset};
//!
//! let mut diagnostics = Diagnostics::quiet();
//! let tokens = tokenize("<h1>Hi</h1><p>there</p>", ParserLimits::default(), &mut diagnostics)
//!     .unwrap();
//! let mut layout = FlowLayout::default();
//! let result = layout.layout(&tokens, &ApproximateFontMetrics, ScrollOffset::default());
//! assert_eq!(result.boxes.len(), 2);
//! assert!(result.boxes[1].rect.y > result.boxes[0].rect.y);
//! ```

/// Per-token measurement cache.
pub mod cache;
/// Layout geometry.
pub mod config;
/// The flow layout pass.
pub mod flow;
/// Text measurement.
pub mod metrics;
/// Viewport and scrolling.
pub mod viewport;

pub use cache::{MeasureCache, Measurement};
pub use config::LayoutConfig;
pub use flow::{BoxKind, FlowLayout, LayoutBox, LayoutResult, Rect};
pub use metrics::{ApproximateFontMetrics, FontFace, FontMetrics, FontSpec};
pub use viewport::{ContentSize, ScrollOffset, Viewport};
