//! Parsed transcript messages.
//!
//! A [`MessageRecord`] is one message from a WhatsApp export after the header,
//! author and body have been separated. Records are immutable once parsed and
//! feed every statistic in [`SummaryRecord`](crate::core::SummaryRecord).
//!
//! # Example
//!
//! ```
//! use chatrecap::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 6, 1)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! let msg = MessageRecord::text(ts, "Alice", "Hello!");
//! assert_eq!(msg.char_count(), 6);
//!
//! let photo = MessageRecord::media(ts, "Bob");
//! assert!(photo.has_image);
//! assert!(photo.text.is_none());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single chat message recovered from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local time exactly as written in the export |
/// | `author` | `String` | Display name, verbatim |
/// | `text` | `Option<String>` | Body with newlines collapsed, `None` for media |
/// | `has_image` | `bool` | Whether the body was a media placeholder |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent. No timezone is attached.
    pub timestamp: NaiveDateTime,

    /// Author display name as it appears in the export.
    ///
    /// Names are not normalized: two spellings are two distinct users.
    pub author: String,

    /// Message body, or `None` when the message was a media placeholder.
    #[serde(default)]
    pub text: Option<String>,

    /// `true` iff the body was a recognized "media omitted" placeholder.
    #[serde(default)]
    pub has_image: bool,
}

impl MessageRecord {
    /// Creates a text message.
    pub fn text(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            text: Some(text.into()),
            has_image: false,
        }
    }

    /// Creates a media placeholder message.
    pub fn media(timestamp: NaiveDateTime, author: impl Into<String>) -> Self {
        Self {
            timestamp,
            author: author.into(),
            text: None,
            has_image: true,
        }
    }

    /// Number of Unicode scalar values in the body; 0 for media.
    pub fn char_count(&self) -> usize {
        self.text.as_deref().map_or(0, |t| t.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_char_count_counts_scalars() {
        let msg = MessageRecord::text(ts(), "Иван", "Привет");
        assert_eq!(msg.char_count(), 6);

        let msg = MessageRecord::text(ts(), "Alice", "hi 👋");
        assert_eq!(msg.char_count(), 4);
    }

    #[test]
    fn test_media_has_no_chars() {
        let msg = MessageRecord::media(ts(), "Bob");
        assert_eq!(msg.char_count(), 0);
        assert!(msg.has_image);
    }
}
