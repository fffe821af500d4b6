//! Transcript parser.
//!
//! Turns the raw text of a WhatsApp export into an ordered list of
//! [`MessageRecord`]s for one target year.
//!
//! # How messages are found
//!
//! A message starts wherever the dialect's header appears, e.g.
//! `12/31/23, 23:59 - ` on Android. The transcript is cut at every header
//! and each piece keeps the header that introduced it, so a body that runs
//! over several lines stays in one chunk: embedded newlines never look like
//! a header.
//!
//! Each chunk is then split at the first colon after the header into the
//! header-plus-author segment and the body. Chunks without that colon
//! (system notices such as "Alice added Bob") and chunks whose header does
//! not yield a valid date, time and author are dropped silently.
//!
//! # Example
//!
//! ```rust
//! use chatrecap::parser::parse;
//! use chatrecap::Dialect;
//!
//! let raw = "12/31/23, 23:58 - Alice: Happy new year\n\
//!            12/31/23, 23:59 - Bob: <Media omitted>\n\
//!            1/1/24, 00:00 - Alice: too late\n";
//!
//! let messages = parse(raw, 2023, Dialect::Android)?;
//! assert_eq!(messages.len(), 2);
//! assert!(messages[1].has_image);
//! # Ok::<(), chatrecap::RecapError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use crate::config::RecapConfig;
use crate::dialect::Dialect;
use crate::error::{RecapError, Result};
use crate::message::MessageRecord;

/// Parses `raw_text` in the given dialect, keeping only `target_year`.
///
/// Shorthand for `TranscriptParser::new(dialect, target_year).parse_str(raw_text)`.
pub fn parse(raw_text: &str, target_year: i32, dialect: Dialect) -> Result<Vec<MessageRecord>> {
    TranscriptParser::new(dialect, target_year).parse_str(raw_text)
}

/// Parser for WhatsApp TXT exports of one dialect.
///
/// # Example
///
/// ```rust,no_run
/// use chatrecap::parser::TranscriptParser;
/// use chatrecap::Dialect;
///
/// let parser = TranscriptParser::new(Dialect::Ios, 2023);
/// let messages = parser.parse_file("chat.txt".as_ref())?;
/// # Ok::<(), chatrecap::RecapError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TranscriptParser {
    dialect: Dialect,
    target_year: i32,
}

/// Outcome of parsing one header-delimited chunk.
#[derive(Debug, PartialEq)]
enum Chunk {
    Message(MessageRecord),
    OtherYear,
    Malformed,
}

impl TranscriptParser {
    /// Creates a parser for `dialect` that keeps messages from `target_year`.
    pub fn new(dialect: Dialect, target_year: i32) -> Self {
        Self {
            dialect,
            target_year,
        }
    }

    /// Creates a parser from a pipeline configuration.
    pub fn with_config(config: &RecapConfig) -> Self {
        Self::new(config.dialect, config.target_year)
    }

    /// Returns the dialect this parser expects.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the year this parser keeps.
    pub fn target_year(&self) -> i32 {
        self.target_year
    }

    /// Parses a fully decoded transcript.
    ///
    /// Messages are returned in transcript order.
    ///
    /// # Errors
    ///
    /// Returns [`RecapError::UnrecognizedFormat`] if no header of the selected
    /// dialect occurs anywhere in `content`.
    pub fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>> {
        let starts: Vec<usize> = self
            .dialect
            .header_regex()
            .find_iter(content)
            .map(|m| m.start())
            .collect();

        if starts.is_empty() {
            return Err(RecapError::unrecognized_format(self.dialect));
        }

        let mut messages = Vec::new();
        let mut other_year = 0usize;
        let mut malformed = 0usize;

        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(content.len());
            match self.parse_chunk(&content[start..end]) {
                Chunk::Message(msg) => messages.push(msg),
                Chunk::OtherYear => other_year += 1,
                Chunk::Malformed => malformed += 1,
            }
        }

        debug!(
            dialect = %self.dialect,
            target_year = self.target_year,
            chunks = starts.len(),
            kept = messages.len(),
            other_year,
            malformed,
            "parsed transcript"
        );

        Ok(messages)
    }

    /// Parses raw transcript bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<MessageRecord>> {
        let content = String::from_utf8(bytes.to_vec())?;
        self.parse_str(&content)
    }

    /// Reads and parses a transcript file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| RecapError::utf8(format!("file {}", path.display()), e))?;
        self.parse_str(&content)
    }

    fn parse_chunk(&self, chunk: &str) -> Chunk {
        let Some((meta, body)) = split_author_body(chunk, self.dialect) else {
            return Chunk::Malformed;
        };
        let Some((timestamp, author)) = parse_meta(meta, self.dialect) else {
            return Chunk::Malformed;
        };

        if timestamp.year() != self.target_year {
            return Chunk::OtherYear;
        }

        let author = author.to_string();
        if self.dialect.is_media_placeholder(body) {
            Chunk::Message(MessageRecord::media(timestamp, author))
        } else {
            Chunk::Message(MessageRecord::text(timestamp, author, clean_body(body)))
        }
    }
}

/// Splits a chunk at the first colon following the header's own colons.
fn split_author_body(chunk: &str, dialect: Dialect) -> Option<(&str, &str)> {
    let (pos, _) = chunk.match_indices(':').nth(dialect.header_colons())?;
    Some((&chunk[..pos], &chunk[pos + 1..]))
}

/// Extracts timestamp and author from the header-plus-author segment.
fn parse_meta(meta: &str, dialect: Dialect) -> Option<(NaiveDateTime, &str)> {
    let caps = dialect.meta_regex().captures(meta)?;
    let date_str = caps.get(1)?.as_str();
    let time_str = caps.get(2)?.as_str();
    let author = caps.get(3)?.as_str().trim();
    if author.is_empty() {
        return None;
    }
    let timestamp = dialect.parse_timestamp(date_str, time_str)?;
    Some((timestamp, author))
}

/// Drops the separator space and trailing line break, collapses newlines.
fn clean_body(body: &str) -> String {
    let body = body.strip_prefix(' ').unwrap_or(body);
    body.trim_end_matches(|c: char| c.is_whitespace() || c == '\u{200e}')
        .replace("\r\n", " ")
        .replace('\n', " ")
}
