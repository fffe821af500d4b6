//! Summary writers.
//!
//! - [`write_json`] / [`to_json`] - pretty JSON, 4-space indent
//! - [`to_json_compact`] - single-line JSON
//!
//! Non-ASCII text (names, emoji) is written literally, not escaped, and the
//! field order is fixed, so identical input always produces identical bytes.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatrecap::Result<()> {
//! use chatrecap::core::output::write_json;
//! use chatrecap::core::summarize;
//!
//! let summary = summarize(&[], 2023);
//! write_json(&summary, "result.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "json-output")]
pub use json_writer::{to_json, to_json_compact, write_json};
