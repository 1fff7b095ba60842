//! Style values and resolved style records.

/// Resolved style records and partial overrides.
pub mod resolved;
/// Individual property values.
pub mod values;

pub use resolved::{ResolvedStyle, StyleOverrides};
pub use values::{Color, DisplayValue, FontSize, FontStyle, FontWeight, TextDecoration};
