//! Style model, inline-style parsing and cascade for lsb.
//!
//! # Scope
//!
//! This crate implements:
//! - **Resolved styles** - the fixed property set every token carries:
//!   color, font-size, font-weight, font-style, text-decoration, display
//! - **Inline-style parser** - `prop: value; prop: value` declaration lists
//!   from `style="…"` attributes
//! - **Cascade** - root defaults → parent inheritance → tag defaults →
//!   inline declarations, applied field by field
//!
//! # Not Implemented
//!
//! - Stylesheets, selectors and specificity
//! - Percentage font sizes composed against a base size (the percentage is
//!   kept raw on [`FontSize`])

/// Field-by-field style cascade.
pub mod cascade;
/// Inline-style errors.
pub mod error;
/// Inline `style` attribute parser.
pub mod inline;
/// Style values and resolved style records.
pub mod style;

pub use cascade::{cascade, resolve, text_style};
pub use error::StyleError;
pub use inline::{Property, apply_inline_style, parse_inline_style};
pub use style::{
    Color, DisplayValue, FontSize, FontStyle, FontWeight, ResolvedStyle, StyleOverrides,
    TextDecoration,
};
