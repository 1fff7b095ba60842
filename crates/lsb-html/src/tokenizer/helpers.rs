//! Input helpers for the tokenizer.
//!
//! Cursor movement and lookahead over the input, plus whitespace collapsing
//! for text runs.

use super::lexer::Tokenizer;

/// Collapse every run of ASCII whitespace into a single space.
///
/// Leading and trailing runs become a single space too; the result is never
/// trimmed. Applying the function twice gives the same result as once.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

impl Tokenizer<'_> {
    /// The unread part of the input.
    pub(super) fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    /// The next character without consuming it.
    pub(super) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Check if the input continues with `target` exactly.
    pub(super) fn next_characters_are(&self, target: &str) -> bool {
        self.rest().starts_with(target)
    }

    /// Check if the input continues with `target`, ignoring ASCII case.
    pub(super) fn next_characters_are_case_insensitive(&self, target: &str) -> bool {
        self.rest()
            .get(..target.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(target))
    }

    /// Skip ASCII whitespace. Returns true if anything was skipped.
    pub(super) fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos > start
    }

    /// Move past the next occurrence of `marker`. Returns false, leaving the
    /// position unchanged, if the marker never appears.
    pub(super) fn skip_past(&mut self, marker: &str) -> bool {
        match self.rest().find(marker) {
            Some(index) => {
                self.pos += index + marker.len();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_become_one_space() {
        assert_eq!(collapse_whitespace("a \t\n b"), "a b");
        assert_eq!(collapse_whitespace("\n\nhello\r\n"), " hello ");
    }

    #[test]
    fn test_no_whitespace_is_unchanged() {
        assert_eq!(collapse_whitespace("plain"), "plain");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_non_ascii_whitespace_is_kept() {
        assert_eq!(collapse_whitespace("a\u{a0}\u{a0}b"), "a\u{a0}\u{a0}b");
    }
}
