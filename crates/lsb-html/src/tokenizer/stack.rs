//! The open-tag stack.
//!
//! A bounded stack of container tags that are currently open. It only
//! validates nesting; styles live on the tokens themselves.

use crate::error::ParseError;
use crate::tags::TagKind;

/// Container tags opened but not yet closed, innermost last.
#[derive(Debug, Clone)]
pub struct OpenTagStack {
    entries: Vec<(TagKind, usize)>,
    capacity: usize,
}

impl OpenTagStack {
    /// An empty stack that holds at most `capacity` open tags.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Open `tag`, found at byte `offset`.
    ///
    /// # Errors
    ///
    /// [`ParseError::StackOverflow`] if the stack is full.
    pub fn push(&mut self, tag: TagKind, offset: usize) -> Result<(), ParseError> {
        if self.entries.len() >= self.capacity {
            return Err(ParseError::StackOverflow {
                capacity: self.capacity,
                offset,
            });
        }
        self.entries.push((tag, offset));
        Ok(())
    }

    /// Close `tag` with an end tag found at byte `offset`.
    ///
    /// # Errors
    ///
    /// [`ParseError::StackUnderflow`] if nothing is open, and
    /// [`ParseError::TagMismatch`] if the innermost open tag is a different
    /// kind. The stack is unchanged on error.
    pub fn pop(&mut self, tag: TagKind, offset: usize) -> Result<(), ParseError> {
        match self.entries.last() {
            None => Err(ParseError::StackUnderflow { tag, offset }),
            Some(&(top, _)) if top != tag => Err(ParseError::TagMismatch {
                expected: top,
                found: tag,
                offset,
            }),
            Some(_) => {
                let _ = self.entries.pop();
                Ok(())
            }
        }
    }

    /// Open tags with the byte offset of their start tag, outermost first.
    #[must_use]
    pub fn open_tags(&self) -> &[(TagKind, usize)] {
        &self.entries
    }

    /// Number of open tags.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
