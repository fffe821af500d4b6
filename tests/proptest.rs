//! Property-based tests for chatrecap.
//!
//! These tests generate random transcripts and message sequences and check
//! the aggregate invariants that must hold for all of them.

use proptest::prelude::*;

use chatrecap::core::emoji::find_emojis;
use chatrecap::core::streaks::longest_streaks;
use chatrecap::prelude::*;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Generate a random message body using fast strategies (no regex!)
fn arb_body() -> impl Strategy<Value = Option<String>> {
    prop::sample::select(vec![
        Some("Hello".to_string()),
        Some("How are you?".to_string()),
        Some("Привет мир".to_string()),
        Some(String::new()),
        Some("time: 10:30".to_string()),
        Some("🎉🔥💀 emoji".to_string()),
        Some("flags 🇩🇪🇰🇿 and 👍🏽".to_string()),
        Some("family 👨‍👩‍👧‍👦 ❤️".to_string()),
        Some("😂😂😂".to_string()),
        None,
    ])
}

/// Generate messages in the target year, in transcript order.
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<MessageRecord>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["Alice", "Bob", "Иван", "Carol"]),
            arb_body(),
            0i64..20_000,
        ),
        0..max_len,
    )
    .prop_map(|items| {
        let mut ts = base();
        let mut out = Vec::with_capacity(items.len());
        for (author, body, gap) in items {
            ts += Duration::seconds(gap);
            if ts.year() != 2023 {
                break;
            }
            out.push(match body {
                Some(text) => MessageRecord::text(ts, author, text),
                None => MessageRecord::media(ts, author),
            });
        }
        out
    })
}

fn render_android(messages: &[MessageRecord]) -> String {
    let mut out = String::from("1/1/22, 00:00 - Alice: previous year\n");
    for msg in messages {
        let body = msg.text.as_deref().unwrap_or("<Media omitted>");
        out.push_str(&format!(
            "{} - {}: {}\n",
            msg.timestamp.format("%m/%d/%y, %H:%M"),
            msg.author,
            body
        ));
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every parsed record belongs to the target year
    #[test]
    fn parsed_records_match_target_year(messages in arb_messages(60)) {
        let raw = render_android(&messages);
        for year in [2022, 2023] {
            let parsed = parse(&raw, year, Dialect::Android).unwrap();
            prop_assert!(parsed.iter().all(|m| m.timestamp.year() == year));
        }
    }

    /// Parsing a rendered transcript recovers authors, bodies and media flags
    #[test]
    fn parse_recovers_rendered_messages(messages in arb_messages(60)) {
        let raw = render_android(&messages);
        let parsed = parse(&raw, 2023, Dialect::Android).unwrap();

        prop_assert_eq!(parsed.len(), messages.len());
        for (got, want) in parsed.iter().zip(&messages) {
            prop_assert_eq!(&got.author, &want.author);
            prop_assert_eq!(&got.text, &want.text);
            prop_assert_eq!(got.has_image, want.has_image);
        }
    }

    /// Three independent countings agree
    #[test]
    fn distributions_agree(messages in arb_messages(120)) {
        let summary = summarize(&messages, 2023);
        let dist = &summary.time_distribution;

        prop_assert_eq!(dist.hour_totals.iter().sum::<usize>(), messages.len());
        prop_assert_eq!(dist.daily_series.iter().sum::<usize>(), messages.len());
        prop_assert_eq!(dist.weekday_hour_matrix.total(), messages.len());

        let calendar_total: usize = dist
            .monthly_calendar
            .iter()
            .flat_map(|(_, weeks)| weeks.iter().flatten().flatten())
            .sum();
        prop_assert_eq!(calendar_total, messages.len());
    }

    /// Ranking is bounded, non-increasing and matches a direct count
    #[test]
    fn top_emojis_are_consistent(messages in arb_messages(120)) {
        let summary = summarize(&messages, 2023);
        let ranked: Vec<(&str, usize)> = summary.top_emojis.iter().collect();

        prop_assert!(ranked.len() <= 10);
        prop_assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));

        for (glyph, count) in &ranked {
            let direct = messages
                .iter()
                .filter_map(|m| m.text.as_deref())
                .flat_map(find_emojis)
                .filter(|found| found == glyph)
                .count();
            prop_assert_eq!(*count, direct);
        }
    }

    /// User rollups add up to the whole sequence
    #[test]
    fn user_stats_sum_to_totals(messages in arb_messages(120)) {
        let summary = summarize(&messages, 2023);

        let count: usize = summary.user_stats.values().map(|u| u.message_count).sum();
        let images: usize = summary.user_stats.values().map(|u| u.images_sent).sum();
        prop_assert_eq!(count, messages.len());
        prop_assert_eq!(images, messages.iter().filter(|m| m.has_image).count());

        for stats in summary.user_stats.values() {
            prop_assert!(stats.message_count > 0);
            prop_assert!(stats.avg_message_length >= 0.0);
        }
    }

    /// The longest silence is the largest consecutive gap; a streak never
    /// exceeds the timespan it was observed in
    #[test]
    fn streak_bounds(messages in arb_messages(120)) {
        let streaks = longest_streaks(&messages, 600);

        let max_gap = messages
            .windows(2)
            .map(|w| (w[1].timestamp - w[0].timestamp).num_seconds())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(streaks.longest_silence_seconds, max_gap);

        if let (Some(first), Some(last)) = (messages.first(), messages.last()) {
            let span = (last.timestamp - first.timestamp).num_seconds();
            prop_assert!(streaks.longest_streak_duration_seconds <= span);
        }
    }

    /// Summarizing twice produces byte-identical JSON
    #[test]
    fn summary_is_idempotent(messages in arb_messages(80)) {
        let first = to_json(&summarize(&messages, 2023)).unwrap();
        let second = to_json(&summarize(&messages, 2023)).unwrap();
        prop_assert_eq!(first, second);
    }
}
