//! Longest silence and longest active streak.
//!
//! Both metrics walk consecutive message pairs in transcript order. The
//! sequence is never re-sorted: two messages stamped with the same minute
//! are ordered by the transcript itself.

use crate::core::models::Streaks;
use crate::message::MessageRecord;

/// Computes silence and streak metrics over `messages`.
///
/// - The longest silence is the largest gap between consecutive messages.
///   Ties keep the first occurrence, zero-length gaps included: when every
///   gap is 0 the silence starts at the first message, not the latest one.
/// - A streak accumulates consecutive gaps below `threshold_secs`; a gap at
///   or above the threshold closes it.
///
/// Two boundary rules are kept for compatibility with existing reports:
/// the gap between the first two messages never counts toward a streak
/// (it still counts as a silence), and a streak still open at the end of
/// the sequence is not considered.
///
/// A negative gap, which only occurs when the export itself is out of
/// order, counts as zero.
///
/// Fewer than two messages yield [`Streaks::default`].
pub fn longest_streaks(messages: &[MessageRecord], threshold_secs: i64) -> Streaks {
    let mut streaks = Streaks::default();
    let Some(first) = messages.first() else {
        return streaks;
    };

    let mut current_duration = 0i64;
    let mut current_start = first.timestamp;
    let mut current_end = None;

    for (i, pair) in messages.windows(2).enumerate() {
        let (msg, next) = (&pair[0], &pair[1]);
        let gap = (next.timestamp - msg.timestamp).num_seconds().max(0);

        if i == 0 || gap > streaks.longest_silence_seconds {
            streaks.longest_silence_seconds = gap;
            streaks.longest_silence_started_at = Some(msg.timestamp);
        }

        if i == 0 {
            continue;
        }

        if gap < threshold_secs {
            current_duration += gap;
            current_end = Some(next.timestamp);
        } else {
            if current_duration > streaks.longest_streak_duration_seconds {
                streaks.longest_streak_duration_seconds = current_duration;
                streaks.longest_streak_started_at = Some(current_start);
                streaks.longest_streak_ended_at = current_end;
            }
            current_start = next.timestamp;
            current_end = None;
            current_duration = 0;
        }
    }

    streaks
}
