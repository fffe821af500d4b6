//! Statistics aggregator.
//!
//! This module contains:
//! - [`models`] - The [`SummaryRecord`] and its parts
//! - [`streaks`] - Longest silence and longest active streak
//! - [`emoji`] - Emoji sequence detection and ranking
//! - [`distribution`] - Weekday/hour/day counts and the monthly calendar
//! - [`users`] - Per-author rollups
//! - [`summary`] - The fold that combines all of the above
//! - [`output`] - JSON writers
//!
//! # Quick Start
//!
//! ```rust
//! use chatrecap::core::summarize;
//! use chatrecap::parser::parse;
//! use chatrecap::Dialect;
//!
//! let raw = "3/1/23, 09:00 - Alice: morning ☀️\n3/1/23, 09:02 - Bob: hey\n";
//! let messages = parse(raw, 2023, Dialect::Android)?;
//! let summary = summarize(&messages, 2023);
//!
//! assert_eq!(summary.time_distribution.hour_totals[9], 2);
//! # Ok::<(), chatrecap::RecapError>(())
//! ```

pub mod distribution;
pub mod emoji;
pub mod models;
pub mod output;
pub mod streaks;
pub mod summary;
pub mod users;

// Re-export main types for convenience
pub use models::{
    MonthlyCalendar, Streaks, SummaryRecord, TimeDistribution, TopEmojis, UserStats,
    WeekdayHourMatrix, WeekRow,
};
pub use summary::{
    generate_summary, generate_summary_from_bytes, generate_summary_from_file, summarize,
    summarize_with_config,
};

#[cfg(feature = "json-output")]
pub use output::{to_json, to_json_compact, write_json};
