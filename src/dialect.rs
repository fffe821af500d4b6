//! WhatsApp export dialects.
//!
//! WhatsApp writes chat exports differently depending on the phone platform
//! and locale. chatrecap understands two of them:
//!
//! | Dialect | Header | Media placeholder |
//! |---------|--------|-------------------|
//! | [`Android`](Dialect::Android) | `12/31/23, 23:59 - Alice: text` | `<Media omitted>` |
//! | [`Ios`](Dialect::Ios) | `[31.12.2023 23.59.59] Alice: text` | `ei kuvaa`, `image omitted`, ... |
//!
//! Every difference between the two lives in the tables on [`Dialect`]; the
//! parser itself has a single code path.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Supported WhatsApp export dialects.
///
/// # Example
///
/// ```rust
/// use chatrecap::Dialect;
/// use std::str::FromStr;
///
/// let dialect = Dialect::from_str("ios").unwrap();
/// assert_eq!(dialect, Dialect::Ios);
/// assert_eq!(dialect.timestamp_format(), "%d.%m.%Y %H.%M.%S");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Android export: `MM/DD/YY, HH:MM - Sender: Message`
    #[default]
    Android,

    /// iOS export: `[DD.MM.YYYY HH.MM.SS] Sender: Message`
    #[serde(alias = "iphone")]
    Ios,
}

impl Dialect {
    /// Returns the pattern that marks the start of a message.
    ///
    /// The header may appear anywhere in the text, not only at line start.
    pub fn header_pattern(self) -> &'static str {
        match self {
            // 12/31/23, 23:59 -
            Dialect::Android => r"\d+/\d+/\d+, \d{2}:\d{2} - ",
            // [31.12.2023 23.59.59]
            Dialect::Ios => r"\[\d+\.\d+\.\d{4} \d{2}\.\d{2}\.\d{2}\] ",
        }
    }

    /// Returns the pattern applied to the header-plus-author segment of a chunk.
    ///
    /// Captures: 1 = date, 2 = time, 3 = author.
    pub fn meta_pattern(self) -> &'static str {
        match self {
            Dialect::Android => r"^(\d+/\d+/\d+), (\d{2}:\d{2}) - (.+)$",
            Dialect::Ios => r"^\[(\d+\.\d+\.\d{4}) (\d{2}\.\d{2}\.\d{2})\] (.+)$",
        }
    }

    /// Returns the chrono format for `"{date} {time}"`.
    ///
    /// Android carries a two-digit year and minute precision, iOS a
    /// four-digit year and second precision.
    pub fn timestamp_format(self) -> &'static str {
        match self {
            Dialect::Android => "%m/%d/%y %H:%M",
            Dialect::Ios => "%d.%m.%Y %H.%M.%S",
        }
    }

    /// Returns the chrono format of a full header as WhatsApp writes it,
    /// trailing separator included.
    pub fn header_format(self) -> &'static str {
        match self {
            Dialect::Android => "%m/%d/%y, %H:%M - ",
            Dialect::Ios => "[%d.%m.%Y %H.%M.%S] ",
        }
    }

    /// Renders the message header for `timestamp`.
    ///
    /// Android headers carry minute precision, so seconds are dropped.
    pub fn format_header(self, timestamp: NaiveDateTime) -> String {
        timestamp.format(self.header_format()).to_string()
    }

    /// Returns the locale-specific strings WhatsApp writes instead of a media file.
    pub fn media_markers(self) -> &'static [&'static str] {
        match self {
            Dialect::Android => &["<Media omitted>"],
            Dialect::Ios => &[
                "ei kuvaa",
                "videota ei sisällytetä",
                "image omitted",
                "video omitted",
            ],
        }
    }

    /// Number of `:` characters inside the header itself.
    ///
    /// The author/body separator is the first colon after these.
    pub fn header_colons(self) -> usize {
        match self {
            Dialect::Android => 1,
            Dialect::Ios => 0,
        }
    }

    /// Returns a sample header, used in error messages.
    pub fn sample_header(self) -> &'static str {
        match self {
            Dialect::Android => "12/31/23, 23:59 - ",
            Dialect::Ios => "[31.12.2023 23.59.59] ",
        }
    }

    /// Returns all dialect names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["android", "ios", "iphone"]
    }

    /// Returns all supported dialects.
    pub fn all() -> &'static [Dialect] {
        &[Dialect::Android, Dialect::Ios]
    }

    /// Returns `true` if `body` is one of this dialect's media placeholders.
    pub fn is_media_placeholder(self, body: &str) -> bool {
        self.media_markers().iter().any(|marker| body.contains(marker))
    }

    /// Parses the date and time captured from a header into a naive timestamp.
    pub fn parse_timestamp(self, date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
        let datetime_str = format!("{date_str} {time_str}");
        NaiveDateTime::parse_from_str(&datetime_str, self.timestamp_format()).ok()
    }

    pub(crate) fn header_regex(self) -> &'static Regex {
        static ANDROID: OnceLock<Regex> = OnceLock::new();
        static IOS: OnceLock<Regex> = OnceLock::new();
        let cell = match self {
            Dialect::Android => &ANDROID,
            Dialect::Ios => &IOS,
        };
        cell.get_or_init(|| Regex::new(self.header_pattern()).expect("valid header regex"))
    }

    pub(crate) fn meta_regex(self) -> &'static Regex {
        static ANDROID: OnceLock<Regex> = OnceLock::new();
        static IOS: OnceLock<Regex> = OnceLock::new();
        let cell = match self {
            Dialect::Android => &ANDROID,
            Dialect::Ios => &IOS,
        };
        cell.get_or_init(|| Regex::new(self.meta_pattern()).expect("valid meta regex"))
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Android => write!(f, "Android"),
            Dialect::Ios => write!(f, "iOS"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Dialect::Android),
            "ios" | "iphone" => Ok(Dialect::Ios),
            _ => Err(format!(
                "Unknown dialect: '{}'. Expected one of: {}",
                s,
                Dialect::all_names().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use std::str::FromStr;

    #[test]
    fn test_header_matches_inline() {
        let re = Dialect::Android.header_regex();
        assert!(re.is_match("12/31/23, 23:59 - Alice: hi"));
        assert!(re.is_match("text before 1/2/24, 08:05 - Bob: hi"));
        assert!(!re.is_match("[31.12.2023 23.59.59] Alice: hi"));

        let re = Dialect::Ios.header_regex();
        assert!(re.is_match("[31.12.2023 23.59.59] Alice: hi"));
        assert!(!re.is_match("12/31/23, 23:59 - Alice: hi"));
    }

    #[test]
    fn test_format_header_parses_back() {
        let ts = chrono::NaiveDate::from_ymd_opt(2023, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        for dialect in Dialect::all() {
            let header = dialect.format_header(ts);
            assert!(dialect.header_regex().is_match(&header), "{header}");

            let meta = format!("{header}Alice");
            let caps = dialect.meta_regex().captures(&meta).unwrap();
            let parsed = dialect.parse_timestamp(&caps[1], &caps[2]).unwrap();
            assert_eq!(parsed, ts);
            assert_eq!(&caps[3], "Alice");
        }
    }

    #[test]
    fn test_patterns_compile() {
        for dialect in Dialect::all() {
            assert!(Regex::new(dialect.header_pattern()).is_ok());
            assert!(Regex::new(dialect.meta_pattern()).is_ok());
        }
    }

    #[test]
    fn test_parse_timestamp_android() {
        let ts = Dialect::Android.parse_timestamp("12/31/23", "23:59").unwrap();
        assert_eq!(ts.year(), 2023);
        assert_eq!(ts.month(), 12);
        assert_eq!(ts.day(), 31);
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.minute(), 59);
        assert_eq!(ts.second(), 0);
    }

    #[test]
    fn test_parse_timestamp_android_single_digit_fields() {
        let ts = Dialect::Android.parse_timestamp("1/5/24", "08:07").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 5));
    }

    #[test]
    fn test_parse_timestamp_ios() {
        let ts = Dialect::Ios.parse_timestamp("01.02.2023", "10.11.12").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 2, 1));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (10, 11, 12));
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(Dialect::Android.parse_timestamp("13/45/23", "10:00").is_none());
        assert!(Dialect::Ios.parse_timestamp("31.02.2023", "10.00.00").is_none());
    }

    #[test]
    fn test_media_placeholders() {
        assert!(Dialect::Android.is_media_placeholder("<Media omitted>"));
        assert!(!Dialect::Android.is_media_placeholder("image omitted"));
        assert!(Dialect::Ios.is_media_placeholder("‎ei kuvaa"));
        assert!(Dialect::Ios.is_media_placeholder("videota ei sisällytetä"));
        assert!(!Dialect::Ios.is_media_placeholder("<Media omitted>"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Dialect::from_str("android").unwrap(), Dialect::Android);
        assert_eq!(Dialect::from_str("ANDROID").unwrap(), Dialect::Android);
        assert_eq!(Dialect::from_str("iOS").unwrap(), Dialect::Ios);
        assert_eq!(Dialect::from_str("iphone").unwrap(), Dialect::Ios);
        assert!(Dialect::from_str("symbian").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dialect::Android.to_string(), "Android");
        assert_eq!(Dialect::Ios.to_string(), "iOS");
    }
}
