//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Source`] - Export dialect selector, convertible to [`Dialect`]

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_STREAK_THRESHOLD_SECS, DEFAULT_TOP_EMOJI_LIMIT, RecapConfig};
use crate::dialect::Dialect;

/// Summarize one year of a WhatsApp chat export as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatrecap")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatrecap android chat.txt --year 2023
    chatrecap ios _chat.txt --year 2023 -o recap_2023.json
    chatrecap android chat.txt --year 2022 --stdout --compact")]
pub struct Args {
    /// Export dialect
    #[arg(value_enum)]
    pub source: Source,

    /// Path to the exported chat (.txt)
    pub input: String,

    /// Year to summarize
    #[arg(short, long)]
    pub year: i32,

    /// Path to output file
    #[arg(short, long, default_value = "result.json")]
    pub output: String,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Gap in seconds that ends an active streak
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_STREAK_THRESHOLD_SECS)]
    pub streak_threshold: i64,

    /// Number of emoji to rank
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_EMOJI_LIMIT)]
    pub top_emojis: usize,
}

impl Args {
    /// Builds the pipeline configuration from the parsed arguments.
    pub fn recap_config(&self) -> RecapConfig {
        RecapConfig::new(self.year)
            .with_dialect(self.source.into())
            .with_streak_threshold_secs(self.streak_threshold)
            .with_top_emoji_limit(self.top_emojis)
    }
}

/// Export dialect as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Source {
    /// Android export (`MM/DD/YY, HH:MM - `)
    #[value(alias = "a")]
    Android,

    /// iOS export (`[DD.MM.YYYY HH.MM.SS] `)
    #[value(alias = "iphone")]
    Ios,
}

impl From<Source> for Dialect {
    fn from(source: Source) -> Self {
        match source {
            Source::Android => Dialect::Android,
            Source::Ios => Dialect::Ios,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Dialect::from(*self), f)
    }
}
