//! Unified error types for chatrecap.
//!
//! This module provides a single [`RecapError`] enum that covers every failure
//! the pipeline can report. Malformed message chunks are not errors: the
//! parser drops them silently, so the only fatal parse outcome is a transcript
//! that does not look like the selected export dialect at all.

use std::io;

use thiserror::Error;

use crate::dialect::Dialect;

/// A specialized [`Result`] type for chatrecap operations.
///
/// # Example
///
/// ```rust
/// use chatrecap::error::Result;
/// use chatrecap::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, RecapError>;

/// The error type for all chatrecap operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecapError {
    /// The transcript contains no line matching the dialect's message header.
    ///
    /// This usually means the wrong dialect was selected, or the input is
    /// not a WhatsApp export.
    #[error(
        "Unrecognized {dialect} export: no line matches the expected message header ({example})"
    )]
    UnrecognizedFormat {
        /// The dialect whose header pattern was tried
        dialect: Dialect,
        /// A sample header for the dialect, shown to the user
        example: &'static str,
    },

    /// An I/O error occurred while reading a transcript or writing a summary.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Raw transcript bytes were not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for RecapError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        RecapError::Utf8 {
            context: "transcript bytes".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl RecapError {
    /// Creates an unrecognized format error for the given dialect.
    pub fn unrecognized_format(dialect: Dialect) -> Self {
        RecapError::UnrecognizedFormat {
            dialect,
            example: dialect.sample_header(),
        }
    }

    /// Creates a UTF-8 error with a custom context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        RecapError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, RecapError::Io(_))
    }

    /// Returns `true` if the transcript did not match the selected dialect.
    pub fn is_unrecognized_format(&self) -> bool {
        matches!(self, RecapError::UnrecognizedFormat { .. })
    }

    /// Returns `true` if the input bytes were not valid UTF-8.
    pub fn is_utf8(&self) -> bool {
        matches!(self, RecapError::Utf8 { .. })
    }
}
