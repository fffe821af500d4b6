//! Summary record types.
//!
//! [`SummaryRecord`] is the only output of the pipeline. Its serialized form
//! has a stable field order: struct fields in declaration order, weekdays
//! Monday to Sunday, months January to December, emoji by rank and users by
//! name.

use std::collections::BTreeMap;

use chrono::{Month, NaiveDateTime, Weekday};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Weekday names in matrix row order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names in calendar order.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Length of [`TimeDistribution::daily_series`]; fits leap years.
pub const DAYS_IN_SERIES: usize = 366;

/// Statistical summary of one year of a chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    /// The year that was summarized
    pub target_year: i32,

    /// Longest silence and longest active streak
    pub streaks: Streaks,

    /// Most used emoji, most frequent first
    pub top_emojis: TopEmojis,

    /// Activity distribution over the whole chat
    pub time_distribution: TimeDistribution,

    /// Per-author rollups keyed by display name
    pub user_stats: BTreeMap<String, UserStats>,
}

/// Silence and streak metrics.
///
/// The `*_at` fields are omitted from JSON when no such interval exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    /// Longest gap between two consecutive messages, in seconds
    pub longest_silence_seconds: i64,

    /// Longest accumulated streak duration, in seconds
    pub longest_streak_duration_seconds: i64,

    /// Timestamp of the message after which the longest silence began
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_silence_started_at: Option<NaiveDateTime>,

    /// First message of the longest streak
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_streak_started_at: Option<NaiveDateTime>,

    /// Last message of the longest streak
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_streak_ended_at: Option<NaiveDateTime>,
}

/// Ranked emoji counts, serialized as an ordered `glyph -> count` map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopEmojis(pub(crate) Vec<(String, usize)>);

impl TopEmojis {
    /// Number of ranked emoji.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no emoji was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the count for `glyph`, if it made the ranking.
    pub fn get(&self, glyph: &str) -> Option<usize> {
        self.0.iter().find(|(g, _)| g == glyph).map(|(_, c)| *c)
    }

    /// Iterates `(glyph, count)` in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(g, c)| (g.as_str(), *c))
    }
}

impl Serialize for TopEmojis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (glyph, count) in &self.0 {
            map.serialize_entry(glyph, count)?;
        }
        map.end()
    }
}

/// Message counts by weekday and hour of day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayHourMatrix(pub(crate) [[usize; 24]; 7]);

impl WeekdayHourMatrix {
    /// Returns the 24 hourly counts for `weekday`.
    pub fn row(&self, weekday: Weekday) -> &[usize; 24] {
        &self.0[weekday.num_days_from_monday() as usize]
    }

    /// Returns the count for one weekday and hour.
    pub fn get(&self, weekday: Weekday, hour: usize) -> usize {
        self.row(weekday).get(hour).copied().unwrap_or(0)
    }

    /// Sum over all 168 cells.
    pub fn total(&self) -> usize {
        self.0.iter().flatten().sum()
    }
}

impl Serialize for WeekdayHourMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEKDAYS.len()))?;
        for (name, row) in WEEKDAYS.iter().zip(&self.0) {
            map.serialize_entry(name, row)?;
        }
        map.end()
    }
}

/// One calendar row, Monday first. `None` marks a slot that is not a day
/// of the month; `Some(0)` is a day without messages.
pub type WeekRow = [Option<usize>; 7];

/// Per-day counts laid out as weeks for each month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyCalendar(pub(crate) Vec<Vec<WeekRow>>);

impl MonthlyCalendar {
    /// Returns the week rows for `month`.
    pub fn weeks(&self, month: Month) -> &[WeekRow] {
        let index = month.number_from_month() as usize - 1;
        self.0.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates `(month name, weeks)` from January to December.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[WeekRow])> {
        MONTHS.iter().copied().zip(self.0.iter().map(Vec::as_slice))
    }
}

impl Serialize for MonthlyCalendar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, weeks) in self.iter() {
            map.serialize_entry(name, weeks)?;
        }
        map.end()
    }
}

/// When messages were sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeDistribution {
    /// Weekday x hour counts
    pub weekday_hour_matrix: WeekdayHourMatrix,

    /// Counts per hour of day
    pub hour_totals: [usize; 24],

    /// Counts per day of year, index 0 = January 1st
    pub daily_series: Vec<usize>,

    /// `daily_series` regrouped into calendar weeks per month
    pub monthly_calendar: MonthlyCalendar,
}

impl Default for TimeDistribution {
    fn default() -> Self {
        Self {
            weekday_hour_matrix: WeekdayHourMatrix::default(),
            hour_totals: [0; 24],
            daily_series: vec![0; DAYS_IN_SERIES],
            monthly_calendar: MonthlyCalendar::default(),
        }
    }
}

/// Rollup for one author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    /// Messages sent, media included
    pub message_count: usize,

    /// Characters across text messages only
    pub total_characters: usize,

    /// Media placeholders sent
    pub images_sent: usize,

    /// `total_characters / message_count`
    pub avg_message_length: f64,

    /// Activity distribution of this author's messages
    pub time_distribution: TimeDistribution,
}
