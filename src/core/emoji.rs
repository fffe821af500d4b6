//! Emoji detection and ranking.
//!
//! Emoji are matched as whole sequences, so a flag, a keycap, a skin-toned
//! hand or a ZWJ family counts as one occurrence:
//!
//! ```rust
//! use chatrecap::core::emoji::find_emojis;
//!
//! let found: Vec<_> = find_emojis("gg 🇫🇮👍🏽 👨‍👩‍👧‍👦 1️⃣").collect();
//! assert_eq!(found, vec!["🇫🇮", "👍🏽", "👨‍👩‍👧‍👦", "1️⃣"]);
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::models::TopEmojis;
use crate::message::MessageRecord;

/// One emoji sequence: flag pair, keycap, or emoji base with optional
/// presentation selector, skin tone, tag sequence and ZWJ continuations.
///
/// The base is `\p{Emoji}` without the keycap bases (`#`, `*`, digits) and
/// without regional indicators, which only count as a pair.
const EMOJI_SEQUENCE_PATTERN: &str = concat!(
    r"[\x{1F1E6}-\x{1F1FF}]{2}",
    r"|[\x23\x2A0-9]\x{FE0F}?\x{20E3}",
    r"|[\p{Emoji}--[#*0-9\x{1F1E6}-\x{1F1FF}]]",
    r"(?:\x{FE0F}|[\x{1F3FB}-\x{1F3FF}])?",
    r"(?:[\x{E0020}-\x{E007E}]+\x{E007F})?",
    r"(?:\x{200D}[\p{Emoji}--[#*0-9\x{1F1E6}-\x{1F1FF}]]",
    r"(?:\x{FE0F}|[\x{1F3FB}-\x{1F3FF}])?)*",
);

fn emoji_regex() -> &'static Regex {
    static EMOJI_RE: OnceLock<Regex> = OnceLock::new();
    EMOJI_RE.get_or_init(|| Regex::new(EMOJI_SEQUENCE_PATTERN).expect("valid emoji regex"))
}

/// Iterates over every emoji sequence in `text`, in order of appearance.
pub fn find_emojis(text: &str) -> impl Iterator<Item = &str> {
    emoji_regex().find_iter(text).map(|m| m.as_str())
}

/// Ranks emoji across all text messages.
///
/// Returns at most `limit` entries by descending count. Equal counts keep
/// the order in which the emoji were first seen.
pub fn top_emojis(messages: &[MessageRecord], limit: usize) -> TopEmojis {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for text in messages.iter().filter_map(|m| m.text.as_deref()) {
        for glyph in find_emojis(text) {
            match index.get(glyph) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(glyph.to_string(), counts.len());
                    counts.push((glyph.to_string(), 1));
                }
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    TopEmojis(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(text: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 5, 5)
            .unwrap()
            .and_hms_opt(5, 5, 0)
            .unwrap();
        MessageRecord::text(ts, "Alice", text)
    }

    fn found(text: &str) -> Vec<&str> {
        find_emojis(text).collect()
    }

    #[test]
    fn test_plain_text_has_no_emoji() {
        assert!(found("hello world 123 #tag *bold*").is_empty());
        assert!(found("Привет, как дела?").is_empty());
    }

    #[test]
    fn test_single_codepoint_emoji() {
        assert_eq!(found("lol 😂😂"), vec!["😂", "😂"]);
    }

    #[test]
    fn test_variation_selector_kept() {
        assert_eq!(found("love ❤️"), vec!["❤️"]);
    }

    #[test]
    fn test_flags_are_one_sequence() {
        assert_eq!(found("🇺🇸🇰🇿"), vec!["🇺🇸", "🇰🇿"]);
    }

    #[test]
    fn test_skin_tone_is_one_sequence() {
        assert_eq!(found("👍🏽👍"), vec!["👍🏽", "👍"]);
    }

    #[test]
    fn test_zwj_sequences() {
        assert_eq!(found("🏳️‍🌈"), vec!["🏳️‍🌈"]);
        assert_eq!(found("🤷‍♀️ ok"), vec!["🤷‍♀️"]);
        assert_eq!(found("👨‍👩‍👧‍👦"), vec!["👨‍👩‍👧‍👦"]);
    }

    #[test]
    fn test_pictographs_outside_emoji_are_ignored() {
        assert!(found("★ ☆ ♡ 🂡 🇺").is_empty());
        assert!(found("rating: ★★★★★").is_empty());
    }

    #[test]
    fn test_text_default_emoji_still_match() {
        assert_eq!(found("⭐ ☺️ ©️"), vec!["⭐", "☺️", "©️"]);
    }

    #[test]
    fn test_ranking_ignores_star_ratings() {
        let top = top_emojis(&[msg("★★★★★ 5/5 👍")], 10);
        let ranked: Vec<_> = top.iter().collect();
        assert_eq!(ranked, vec![("👍", 1)]);
    }

    #[test]
    fn test_keycap() {
        assert_eq!(found("#️⃣ 5️⃣"), vec!["#️⃣", "5️⃣"]);
    }

    #[test]
    fn test_ranking_order_and_ties() {
        let messages = vec![
            msg("🔥 👍"),
            msg("😂 😂 😂"),
            msg("👍 🔥 🎉"),
        ];
        let top = top_emojis(&messages, 10);
        let ranked: Vec<_> = top.iter().collect();
        assert_eq!(ranked, vec![("😂", 3), ("🔥", 2), ("👍", 2), ("🎉", 1)]);
    }

    #[test]
    fn test_ranking_limit() {
        let text = "😀 😁 😂 🤣 😃 😄 😅 😆 😉 😊 😋 😎";
        let top = top_emojis(&[msg(text)], 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top.iter().next(), Some(("😀", 1)));
        assert_eq!(top.get("😋"), None);
    }

    #[test]
    fn test_media_messages_are_skipped() {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let top = top_emojis(&[MessageRecord::media(ts, "Bob")], 10);
        assert!(top.is_empty());
    }
}
