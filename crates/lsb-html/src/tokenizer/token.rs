//! Tokens and the token arena.

use std::fmt;
use std::ops::Index;

use lsb_css::ResolvedStyle;
use serde::Serialize;

use crate::tags::TagKind;

/// Index of a token in a [`TokenList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TokenId(pub usize);

/// What a token represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum TokenKind {
    /// `<tag ...>` for a container tag.
    StartTag(TagKind),
    /// `</tag>`
    EndTag(TagKind),
    /// `<br>` or `<img>`.
    SelfClosingTag(TagKind),
    /// A run of text, whitespace collapsed and entities decoded.
    PlainText(String),
    /// Always the last token.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag(tag) => write!(f, "<{tag}>"),
            Self::EndTag(tag) => write!(f, "</{tag}>"),
            Self::SelfClosingTag(tag) => write!(f, "<{tag}/>"),
            Self::PlainText(text) => write!(f, "{text:?}"),
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}

/// One lexical unit with its resolved style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token kind and payload.
    pub kind: TokenKind,
    /// Style computed when the token was created.
    pub style: ResolvedStyle,
    /// The enclosing start tag, or `None` at the top level.
    pub parent: Option<TokenId>,
}

impl Token {
    /// The tag of a start, end or self-closing token.
    #[must_use]
    pub const fn tag(&self) -> Option<TagKind> {
        match self.kind {
            TokenKind::StartTag(tag) | TokenKind::EndTag(tag) | TokenKind::SelfClosingTag(tag) => {
                Some(tag)
            }
            TokenKind::PlainText(_) | TokenKind::EndOfInput => None,
        }
    }

    /// The text of a plain-text token.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::PlainText(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true for a start tag of `tag`.
    #[must_use]
    pub fn is_start_of(&self, tag: TagKind) -> bool {
        self.kind == TokenKind::StartTag(tag)
    }
}

/// Append-only arena of tokens in document order.
///
/// Parent links are [`TokenId`]s into the same arena, so the tree overlay
/// costs nothing beyond one index per token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub(crate) fn push(&mut self, token: Token) -> TokenId {
        let id = TokenId(self.tokens.len());
        self.tokens.push(token);
        id
    }

    /// Get a token by id.
    #[must_use]
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0)
    }

    /// All tokens in document order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| (TokenId(index), token))
    }

    /// Number of tokens, including the final end-of-input token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the list holds no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Walk the parent chain of `id`, innermost first. The token itself is
    /// not included.
    pub fn ancestors(&self, id: TokenId) -> impl Iterator<Item = (TokenId, &Token)> {
        let mut next = self.get(id).and_then(|token| token.parent);
        std::iter::from_fn(move || {
            let current = next?;
            let token = self.get(current)?;
            next = token.parent;
            Some((current, token))
        })
    }

    /// Returns true if the token or any ancestor has `display: none`.
    #[must_use]
    pub fn is_hidden(&self, id: TokenId) -> bool {
        self.get(id).is_some_and(|token| token.style.is_hidden())
            || self.ancestors(id).any(|(_, token)| token.style.is_hidden())
    }

    /// Returns true if some ancestor is a start tag of `tag`.
    #[must_use]
    pub fn is_inside(&self, id: TokenId, tag: TagKind) -> bool {
        self.enclosing(id, tag).is_some()
    }

    /// The innermost ancestor start tag of `tag`, if any.
    #[must_use]
    pub fn enclosing(&self, id: TokenId, tag: TagKind) -> Option<TokenId> {
        self.ancestors(id)
            .find(|(_, token)| token.is_start_of(tag))
            .map(|(ancestor, _)| ancestor)
    }
}

impl Index<TokenId> for TokenList {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsb_css::DisplayValue;

    fn token(kind: TokenKind, display: DisplayValue, parent: Option<TokenId>) -> Token {
        Token {
            kind,
            style: ResolvedStyle {
                display,
                ..ResolvedStyle::ROOT
            },
            parent,
        }
    }

    fn nested() -> TokenList {
        let mut list = TokenList::default();
        let div = list.push(token(TokenKind::StartTag(TagKind::Div), DisplayValue::Block, None));
        let title = list.push(token(
            TokenKind::StartTag(TagKind::Title),
            DisplayValue::None,
            Some(div),
        ));
        let _ = list.push(token(
            TokenKind::PlainText("t".to_string()),
            DisplayValue::Inline,
            Some(title),
        ));
        let _ = list.push(token(
            TokenKind::PlainText("u".to_string()),
            DisplayValue::Inline,
            Some(div),
        ));
        list
    }

    #[test]
    fn test_ids_follow_document_order() {
        let list = nested();
        let ids: Vec<usize> = list.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, [0, 1, 2, 3]);
        assert_eq!(list[TokenId(2)].text(), Some("t"));
    }

    #[test]
    fn test_ancestors_innermost_first() {
        let list = nested();
        let chain: Vec<TokenId> = list.ancestors(TokenId(2)).map(|(id, _)| id).collect();
        assert_eq!(chain, [TokenId(1), TokenId(0)]);
        assert_eq!(list.ancestors(TokenId(0)).count(), 0);
    }

    #[test]
    fn test_hidden_through_ancestor() {
        let list = nested();
        assert!(list.is_hidden(TokenId(2)));
        assert!(!list.is_hidden(TokenId(3)));
        assert!(list.is_inside(TokenId(2), TagKind::Title));
        assert!(!list.is_inside(TokenId(3), TagKind::Title));
        assert_eq!(list.enclosing(TokenId(2), TagKind::Title), Some(TokenId(1)));
        assert_eq!(list.enclosing(TokenId(2), TagKind::Div), Some(TokenId(0)));
        assert_eq!(list.enclosing(TokenId(3), TagKind::Title), None);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(TokenKind::StartTag(TagKind::P).to_string(), "<p>");
        assert_eq!(TokenKind::EndTag(TagKind::H1).to_string(), "</h1>");
        assert_eq!(TokenKind::SelfClosingTag(TagKind::Br).to_string(), "<br/>");
        assert_eq!(TokenKind::PlainText("a b".into()).to_string(), "\"a b\"");
        assert_eq!(TokenKind::EndOfInput.to_string(), "EOF");
    }
}
