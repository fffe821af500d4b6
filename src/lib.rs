//! # Chatrecap
//!
//! A Rust library that turns a WhatsApp chat export into a year-in-review
//! summary: when people talked, how long the longest silence lasted, which
//! emoji they used most and how each member contributed.
//!
//! ## Overview
//!
//! The pipeline has two stages with no shared state:
//!
//! 1. **Parsing** — [`parser`] splits the raw export into [`MessageRecord`]s
//!    for one target year. Two export dialects are supported, see [`Dialect`].
//! 2. **Aggregation** — [`core`] folds the messages into a [`SummaryRecord`].
//!
//! Rendering, HTTP serving and the like are left to callers; the summary is a
//! plain serde-serializable struct.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatrecap::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = "12/30/23, 21:00 - Alice: party tomorrow? 🎉\n\
//!                12/30/23, 21:01 - Bob: <Media omitted>\n\
//!                12/30/23, 21:21 - Alice: ok then\n";
//!
//!     let config = RecapConfig::new(2023).with_dialect(Dialect::Android);
//!     let summary = generate_summary(raw, &config)?;
//!
//!     assert_eq!(summary.user_stats["Bob"].images_sent, 1);
//!     assert_eq!(summary.top_emojis.get("🎉"), Some(1));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`dialect`] — [`Dialect`] and its header/format/placeholder tables
//! - [`parser`] — [`TranscriptParser`](parser::TranscriptParser), [`parse`](parser::parse)
//! - [`message`] — [`MessageRecord`]
//! - [`core`] — statistics aggregator
//!   - [`core::models`] — [`SummaryRecord`] and its parts
//!   - [`core::summary`] — [`summarize`](core::summarize), [`generate_summary`](core::generate_summary)
//!   - [`core::output`] — JSON writers
//! - [`config`] — [`RecapConfig`](config::RecapConfig)
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — [`RecapError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod dialect;
pub mod error;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use core::models::SummaryRecord;
pub use dialect::Dialect;
pub use error::{RecapError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatrecap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Dialect, MessageRecord, SummaryRecord};

    // Error types
    pub use crate::error::{RecapError, Result};

    // Configuration
    pub use crate::config::RecapConfig;

    // Parsing
    pub use crate::parser::{TranscriptParser, parse};

    // Aggregation
    pub use crate::core::{
        Streaks, TimeDistribution, TopEmojis, UserStats, generate_summary,
        generate_summary_from_bytes, generate_summary_from_file, summarize,
        summarize_with_config,
    };

    // Output
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_json_compact, write_json};
}
