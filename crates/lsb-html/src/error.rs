//! Fatal tokenizer errors.
//!
//! Anything that is not merely unsupported (which is a warning) aborts the
//! whole tokenization: no partial token list is returned. Every variant
//! carries the byte offset into the input where the problem was detected.

use lsb_css::StyleError;
use thiserror::Error;

use crate::tags::TagKind;

/// An error that aborts tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// More containers open at once than the stack allows.
    #[error("too many nested tags (limit {capacity}) at byte {offset}")]
    StackOverflow {
        /// Configured stack capacity.
        capacity: usize,
        /// Position of the offending start tag.
        offset: usize,
    },

    /// An end tag with nothing open.
    #[error("unexpected end tag </{tag}> with no open tag at byte {offset}")]
    StackUnderflow {
        /// The end tag that was found.
        tag: TagKind,
        /// Position of the end tag.
        offset: usize,
    },

    /// An end tag that does not close the innermost open tag.
    #[error("mismatched end tag: expected </{expected}>, found </{found}> at byte {offset}")]
    TagMismatch {
        /// The innermost open tag.
        expected: TagKind,
        /// The end tag that was found.
        found: TagKind,
        /// Position of the end tag.
        offset: usize,
    },

    /// A tag or attribute name longer than the configured limit.
    #[error("{what} name longer than {limit} characters at byte {offset}")]
    NameTooLong {
        /// `"tag"` or `"attribute"`.
        what: &'static str,
        /// Configured limit.
        limit: usize,
        /// Position where the name starts.
        offset: usize,
    },

    /// An attribute value longer than the configured limit.
    #[error("attribute value longer than {limit} characters at byte {offset}")]
    AttributeTooLong {
        /// Configured limit.
        limit: usize,
        /// Position where the value starts.
        offset: usize,
    },

    /// A text run longer than the configured limit after collapsing.
    #[error("text run longer than {limit} characters at byte {offset}")]
    TextTooLong {
        /// Configured limit.
        limit: usize,
        /// Position where the run starts.
        offset: usize,
    },

    /// A character that cannot appear where it was found.
    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Its position.
        offset: usize,
    },

    /// Input ended in the middle of a tag.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEnd {
        /// Length of the input.
        offset: usize,
    },

    /// A comment, tag, quoted value or script body with no terminator.
    #[error("unterminated {construct} starting at byte {offset}")]
    Unterminated {
        /// What was left open.
        construct: &'static str,
        /// Where it started.
        offset: usize,
    },

    /// A malformed inline `style` attribute.
    #[error("invalid style attribute at byte {offset}: {source}")]
    Style {
        /// The underlying declaration error.
        source: StyleError,
        /// Position of the tag carrying the attribute.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset into the input where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::StackOverflow { offset, .. }
            | Self::StackUnderflow { offset, .. }
            | Self::TagMismatch { offset, .. }
            | Self::NameTooLong { offset, .. }
            | Self::AttributeTooLong { offset, .. }
            | Self::TextTooLong { offset, .. }
            | Self::UnexpectedCharacter { offset, .. }
            | Self::UnexpectedEnd { offset }
            | Self::Unterminated { offset, .. }
            | Self::Style { offset, .. } => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_tags() {
        let err = ParseError::TagMismatch {
            expected: TagKind::H1,
            found: TagKind::H2,
            offset: 16,
        };
        assert_eq!(
            err.to_string(),
            "mismatched end tag: expected </h1>, found </h2> at byte 16"
        );
        assert_eq!(err.offset(), 16);
    }

    #[test]
    fn test_style_error_is_the_source() {
        use std::error::Error as _;

        let err = ParseError::Style {
            source: StyleError::MissingPercent {
                value: "12".to_string(),
            },
            offset: 0,
        };
        assert!(err.source().is_some());
    }
}
