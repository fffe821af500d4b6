//! Pipeline configuration.
//!
//! [`RecapConfig`] collects everything a single pipeline run needs: which
//! export dialect to parse, which year to summarize, and the two tuning
//! constants of the aggregator. It is a plain serde struct, so callers can
//! load it from any format they already use.
//!
//! # Example
//!
//! ```rust
//! use chatrecap::config::RecapConfig;
//! use chatrecap::Dialect;
//!
//! let config = RecapConfig::new(2023)
//!     .with_dialect(Dialect::Ios)
//!     .with_top_emoji_limit(5);
//!
//! assert_eq!(config.streak_threshold_secs, 600);
//! ```

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;

/// Gap (in seconds) at or above which a streak is closed.
pub const DEFAULT_STREAK_THRESHOLD_SECS: i64 = 600;

/// Number of emoji kept in the ranking.
pub const DEFAULT_TOP_EMOJI_LIMIT: usize = 10;

/// Configuration for one parse-and-summarize run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecapConfig {
    /// Export dialect of the transcript (default: Android)
    pub dialect: Dialect,

    /// Year to summarize; messages from other years are dropped while parsing
    pub target_year: i32,

    /// Streak threshold in seconds (default: 600)
    pub streak_threshold_secs: i64,

    /// Maximum number of ranked emoji (default: 10)
    pub top_emoji_limit: usize,
}

impl Default for RecapConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            target_year: 2023,
            streak_threshold_secs: DEFAULT_STREAK_THRESHOLD_SECS,
            top_emoji_limit: DEFAULT_TOP_EMOJI_LIMIT,
        }
    }
}

impl RecapConfig {
    /// Creates a configuration for `target_year` with default values.
    pub fn new(target_year: i32) -> Self {
        Self {
            target_year,
            ..Self::default()
        }
    }

    /// Sets the export dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets the target year.
    #[must_use]
    pub fn with_target_year(mut self, year: i32) -> Self {
        self.target_year = year;
        self
    }

    /// Sets the streak threshold in seconds.
    #[must_use]
    pub fn with_streak_threshold_secs(mut self, secs: i64) -> Self {
        self.streak_threshold_secs = secs;
        self
    }

    /// Sets how many emoji the ranking keeps.
    #[must_use]
    pub fn with_top_emoji_limit(mut self, limit: usize) -> Self {
        self.top_emoji_limit = limit;
        self
    }
}
