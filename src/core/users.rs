//! Per-author rollups.

use std::collections::BTreeMap;

use crate::core::distribution::time_distribution;
use crate::core::models::{TimeDistribution, UserStats};
use crate::message::MessageRecord;

/// Groups messages by author name and computes each author's totals and
/// time distribution.
///
/// Author names are compared verbatim. Every author in the result has at
/// least one message, so `avg_message_length` is always defined.
pub fn user_stats(messages: &[MessageRecord], year: i32) -> BTreeMap<String, UserStats> {
    let mut users: BTreeMap<String, UserStats> = BTreeMap::new();

    for msg in messages {
        let stats = users
            .entry(msg.author.clone())
            .or_insert_with(empty_stats);

        stats.message_count += 1;
        stats.total_characters += msg.char_count();
        if msg.has_image {
            stats.images_sent += 1;
        }
    }

    for (author, stats) in &mut users {
        stats.avg_message_length = stats.total_characters as f64 / stats.message_count as f64;
        stats.time_distribution = time_distribution(messages, year, Some(author.as_str()));
    }

    users
}

fn empty_stats() -> UserStats {
    UserStats {
        message_count: 0,
        total_characters: 0,
        images_sent: 0,
        avg_message_length: 0.0,
        time_distribution: TimeDistribution::default(),
    }
}
