//! Pipeline warnings with colored terminal output.
//!
//! Warnings are recoverable diagnostics: an unsupported tag, attribute or CSS
//! property was skipped and processing continued. Every stage reports into a
//! [`Diagnostics`] sink owned by the caller, which keeps the full list for
//! later inspection and optionally echoes each warning to stderr as it
//! arrives.

use std::fmt;

use owo_colors::OwoColorize;
use serde::Serialize;
use strum_macros::Display;

/// The pipeline stage that raised a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Component {
    /// Document loading.
    #[strum(serialize = "Loader")]
    Loader,
    /// The HTML tokenizer.
    #[strum(serialize = "HTML")]
    Html,
    /// The inline-style parser.
    #[strum(serialize = "CSS")]
    Css,
    /// The flow layout engine.
    #[strum(serialize = "Layout")]
    Layout,
}

/// A single recoverable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Stage that raised the warning.
    pub component: Component,
    /// Human readable description.
    pub message: String,
    /// Byte offset into the source document, when known.
    pub offset: Option<usize>,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(
                f,
                "[lsb {}] ⚠ {} (at byte {offset})",
                self.component, self.message
            ),
            None => write!(f, "[lsb {}] ⚠ {}", self.component, self.message),
        }
    }
}

/// Collects warnings raised while processing one document.
///
/// # Example
/// ```
/// use lsb_common::{Component, Diagnostics};
///
/// let mut diagnostics = Diagnostics::quiet();
/// diagnostics.warn(Component::Css, "ignored CSS property 'margin'");
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
    echo: bool,
}

impl Diagnostics {
    /// A sink that prints every warning to stderr as it is recorded.
    #[must_use]
    pub const fn echoing() -> Self {
        Self {
            warnings: Vec::new(),
            echo: true,
        }
    }

    /// A sink that only records warnings.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            warnings: Vec::new(),
            echo: false,
        }
    }

    /// Record a warning without a source position.
    pub fn warn(&mut self, component: Component, message: impl Into<String>) {
        self.push(Warning {
            component,
            message: message.into(),
            offset: None,
        });
    }

    /// Record a warning attached to a byte offset in the source document.
    pub fn warn_at(&mut self, component: Component, offset: usize, message: impl Into<String>) {
        self.push(Warning {
            component,
            message: message.into(),
            offset: Some(offset),
        });
    }

    fn push(&mut self, warning: Warning) {
        if self.echo {
            eprintln!("{}", warning.yellow());
        }
        self.warnings.push(warning);
    }

    /// All warnings recorded so far, in the order they were raised.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of recorded warnings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Consume the sink and return the recorded warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
