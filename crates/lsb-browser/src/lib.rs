//! Document loading and the page session for lsb.
//!
//! This crate ties the pipeline together:
//!
//! - [`load_document`] / [`parse_html_string`] read and tokenize a document
//!   under a size limit
//! - [`FontdueFontMetrics`] measures text with real fonts, with
//!   [`load_metrics`] falling back to approximate metrics
//! - [`Page`] keeps a document, its viewport and the layout cache together
//!   across relayouts

/// Font metrics backed by fontdue.
pub mod font_metrics;
/// Reading and tokenizing documents.
pub mod loader;
/// The page session.
pub mod page;

pub use font_metrics::{FontError, FontdueFontMetrics, load_metrics};
pub use loader::{
    DEFAULT_MAX_DOCUMENT_BYTES, Document, LoadError, LoadOptions, load_document,
    parse_html_string,
};
pub use page::Page;
