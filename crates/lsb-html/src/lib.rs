//! HTML tokenizer for lsb.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag table** - the closed set of supported elements and their built-in
//!   style defaults
//! - **Tokenizer** - one pass over the input producing start, end,
//!   self-closing, text and end-of-input tokens in a [`TokenList`] arena
//!   - Comment and DOCTYPE skipping
//!   - A fixed table of named character entities
//!   - Whitespace collapsing
//!   - A bounded open-tag stack validating nesting
//!   - Inline `style` attributes resolved through `lsb-css`
//!
//! # Not Implemented
//!
//! - Full HTML5 tokenization and tree construction
//! - Implied end tags and error recovery for mis-nested markup
//! - Numeric character references

/// Fatal tokenizer errors.
pub mod error;
/// Supported element kinds and their defaults.
pub mod tags;
/// Tokenizer, tokens and the token arena.
pub mod tokenizer;

pub use error::ParseError;
pub use tags::{TagClass, TagDescriptor, TagKind};
pub use tokenizer::{
    ParserLimits, Token, TokenId, TokenKind, TokenList, Tokenizer, collapse_whitespace,
    decode_entities, tokenize,
};
