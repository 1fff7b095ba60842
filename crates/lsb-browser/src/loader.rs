//! Document loading.
//!
//! Reads a file, enforces the size limit and the encoding, and tokenizes
//! it. The result is a [`Document`]: the source, its token arena and the
//! warnings raised while parsing it.

use std::fs;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use lsb_common::{Component, Diagnostics, Warning};
use lsb_html::{ParseError, ParserLimits, TokenList, tokenize};
use thiserror::Error;

/// Default cap on the size of a document.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

/// Limits applied while loading a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Largest accepted document, in bytes.
    pub max_document_bytes: usize,
    /// Tokenizer limits.
    pub limits: ParserLimits,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            limits: ParserLimits::default(),
        }
    }
}

/// Why a document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is larger than the configured limit.
    #[error("document is {size} bytes, larger than the {limit} byte limit")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Configured limit.
        limit: usize,
    },

    /// The file is not valid UTF-8.
    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    Encoding {
        /// Document path.
        path: PathBuf,
        /// Decoding error.
        source: FromUtf8Error,
    },

    /// The tokenizer hit a fatal error.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A parsed document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the document was read from, if it came from a file.
    pub source_path: Option<PathBuf>,
    /// The document source.
    pub source: String,
    /// Tokens in document order.
    pub tokens: TokenList,
    /// Warnings raised while parsing this document.
    pub warnings: Vec<Warning>,
}

/// Load and tokenize a document from a file.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, is too large, is not
/// UTF-8, or fails to tokenize.
pub fn load_document(
    path: &Path,
    options: &LoadOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Document, LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_error)?.len();
    check_size(size, options)?;

    let bytes = fs::read(path).map_err(io_error)?;
    // The file may have grown since the metadata call.
    check_size(bytes.len() as u64, options)?;

    let source = String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document = parse_html_string(source, options, diagnostics)?;
    document.source_path = Some(path.to_path_buf());
    Ok(document)
}

/// Tokenize a document held in memory.
///
/// # Errors
///
/// Returns [`LoadError::TooLarge`] or [`LoadError::Parse`].
pub fn parse_html_string(
    source: String,
    options: &LoadOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Document, LoadError> {
    check_size(source.len() as u64, options)?;

    let first_warning = diagnostics.len();
    if source.trim().is_empty() {
        diagnostics.warn(Component::Loader, "document is empty");
    }
    let tokens = tokenize(&source, options.limits, diagnostics)?;

    Ok(Document {
        source_path: None,
        source,
        tokens,
        warnings: diagnostics.warnings()[first_warning..].to_vec(),
    })
}

fn check_size(size: u64, options: &LoadOptions) -> Result<(), LoadError> {
    if size > options.max_document_bytes as u64 {
        return Err(LoadError::TooLarge {
            size,
            limit: options.max_document_bytes,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_too_large() {
        let options = LoadOptions {
            max_document_bytes: 4,
            ..LoadOptions::default()
        };
        let mut diagnostics = Diagnostics::quiet();
        let err = parse_html_string("<p>x</p>".to_string(), &options, &mut diagnostics)
            .unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { size: 8, limit: 4 }));
    }

    #[test]
    fn test_document_keeps_only_its_own_warnings() {
        let mut diagnostics = Diagnostics::quiet();
        diagnostics.warn(Component::Css, "earlier");
        let document = parse_html_string(
            "<img src=a.png>".to_string(),
            &LoadOptions::default(),
            &mut diagnostics,
        )
        .unwrap();
        assert_eq!(document.warnings.len(), 1);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(document.source_path, None);
    }

    #[test]
    fn test_parse_error_is_wrapped() {
        let mut diagnostics = Diagnostics::quiet();
        let err = parse_html_string("<p></div>".to_string(), &LoadOptions::default(), &mut diagnostics)
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError::TagMismatch { .. })));
    }

    #[test]
    fn test_missing_file() {
        let mut diagnostics = Diagnostics::quiet();
        let err = load_document(
            Path::new("/nonexistent/page.html"),
            &LoadOptions::default(),
            &mut diagnostics,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
