//! The statistics aggregator and the one-call pipeline.

use std::borrow::Cow;
use std::path::Path;

use chrono::Datelike;
use tracing::{debug, warn};

use crate::config::RecapConfig;
use crate::core::distribution::time_distribution;
use crate::core::emoji::top_emojis;
use crate::core::models::SummaryRecord;
use crate::core::streaks::longest_streaks;
use crate::core::users::user_stats;
use crate::error::Result;
use crate::message::MessageRecord;
use crate::parser::TranscriptParser;

/// Folds a message sequence into a [`SummaryRecord`] with default settings.
///
/// `messages` must be in transcript order. An empty sequence produces a
/// summary of zeros rather than an error.
///
/// # Example
///
/// ```rust
/// use chatrecap::core::summarize;
/// use chatrecap::MessageRecord;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
/// let messages = vec![
///     MessageRecord::text(day.and_hms_opt(10, 0, 0).unwrap(), "Alice", "hi 👋"),
///     MessageRecord::text(day.and_hms_opt(10, 1, 0).unwrap(), "Alice", "anyone?"),
///     MessageRecord::text(day.and_hms_opt(10, 21, 0).unwrap(), "Bob", "here"),
/// ];
///
/// let summary = summarize(&messages, 2023);
/// assert_eq!(summary.streaks.longest_silence_seconds, 1200);
/// assert_eq!(summary.user_stats["Alice"].message_count, 2);
/// assert_eq!(summary.top_emojis.get("👋"), Some(1));
/// ```
pub fn summarize(messages: &[MessageRecord], target_year: i32) -> SummaryRecord {
    summarize_with_config(messages, &RecapConfig::new(target_year))
}

/// Folds a message sequence into a [`SummaryRecord`].
///
/// Only `target_year`, `streak_threshold_secs` and `top_emoji_limit` are
/// read from `config`.
pub fn summarize_with_config(messages: &[MessageRecord], config: &RecapConfig) -> SummaryRecord {
    let year = config.target_year;

    let messages: Cow<'_, [MessageRecord]> =
        if messages.iter().all(|m| m.timestamp.year() == year) {
            Cow::Borrowed(messages)
        } else {
            let kept: Vec<MessageRecord> = messages
                .iter()
                .filter(|m| m.timestamp.year() == year)
                .cloned()
                .collect();
            warn!(
                target_year = year,
                dropped = messages.len() - kept.len(),
                "ignoring messages outside the target year"
            );
            Cow::Owned(kept)
        };

    if messages.is_empty() {
        warn!(target_year = year, "no messages in target year, summary is empty");
    }

    let summary = SummaryRecord {
        target_year: year,
        streaks: longest_streaks(&messages, config.streak_threshold_secs),
        top_emojis: top_emojis(&messages, config.top_emoji_limit),
        time_distribution: time_distribution(&messages, year, None),
        user_stats: user_stats(&messages, year),
    };

    debug!(
        target_year = year,
        messages = messages.len(),
        users = summary.user_stats.len(),
        emojis = summary.top_emojis.len(),
        "summarized messages"
    );

    summary
}

/// Parses `raw` and summarizes it in one call.
///
/// # Errors
///
/// Fails only if `raw` is not an export of `config.dialect`.
pub fn generate_summary(raw: &str, config: &RecapConfig) -> Result<SummaryRecord> {
    let messages = TranscriptParser::with_config(config).parse_str(raw)?;
    Ok(summarize_with_config(&messages, config))
}

/// Like [`generate_summary`], for raw UTF-8 bytes (e.g. an uploaded file).
pub fn generate_summary_from_bytes(bytes: &[u8], config: &RecapConfig) -> Result<SummaryRecord> {
    let messages = TranscriptParser::with_config(config).parse_bytes(bytes)?;
    Ok(summarize_with_config(&messages, config))
}

/// Like [`generate_summary`], reading the transcript from `path`.
pub fn generate_summary_from_file(path: &Path, config: &RecapConfig) -> Result<SummaryRecord> {
    let messages = TranscriptParser::with_config(config).parse_file(path)?;
    Ok(summarize_with_config(&messages, config))
}
