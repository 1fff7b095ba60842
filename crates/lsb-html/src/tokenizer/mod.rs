//! Tokenizer module.
//!
//! Turns a raw character buffer into the ordered token sequence, attaching a
//! resolved style to each token as it is created.

/// Named character entity table.
pub mod entities;
/// Input scanning helpers and text normalization.
pub mod helpers;
/// Tokenizer state and main loop.
pub mod lexer;
/// Bounded stack of open tags.
pub mod stack;
/// Token types and the token arena.
pub mod token;

pub use entities::decode_entities;
pub use helpers::collapse_whitespace;
pub use lexer::{ParserLimits, Tokenizer, tokenize};
pub use token::{Token, TokenId, TokenKind, TokenList};
