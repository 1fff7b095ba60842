//! Style cascade.
//!
//! Precedence, lowest to highest:
//!
//! 1. the synthetic root style ([`ResolvedStyle::ROOT`])
//! 2. the parent's resolved style (every property inherits)
//! 3. the tag's built-in defaults
//! 4. the element's inline declarations
//!
//! Each stage is a field-by-field override: a property not mentioned by a
//! later stage keeps the value it had after the earlier one.

use lsb_common::Diagnostics;

use crate::error::StyleError;
use crate::inline::parse_inline_style;
use crate::style::{DisplayValue, ResolvedStyle, StyleOverrides};

/// Compute a child's style before inline declarations: copy the parent
/// (or the root style at the top level) and apply the tag defaults.
#[must_use]
pub fn cascade(parent: Option<&ResolvedStyle>, defaults: &StyleOverrides) -> ResolvedStyle {
    defaults.apply_to(parent.unwrap_or(&ResolvedStyle::ROOT))
}

/// Run the whole cascade for an element, including its `style` attribute.
///
/// # Errors
///
/// Returns a [`StyleError`] if the inline declarations are malformed.
pub fn resolve(
    parent: Option<&ResolvedStyle>,
    defaults: &StyleOverrides,
    inline: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Result<ResolvedStyle, StyleError> {
    let style = cascade(parent, defaults);
    match inline {
        Some(text) => Ok(parse_inline_style(text, diagnostics)?.apply_to(&style)),
        None => Ok(style),
    }
}

/// Style for a run of text: the parent's style, always inline.
#[must_use]
pub fn text_style(parent: Option<&ResolvedStyle>) -> ResolvedStyle {
    cascade(parent, &StyleOverrides::display(DisplayValue::Inline))
}
