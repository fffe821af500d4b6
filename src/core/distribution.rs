//! Calendar-bucketed activity distributions.
//!
//! The same routine serves the whole chat and, filtered by author, every
//! per-user rollup.

use chrono::{Datelike, NaiveDate, Timelike};

use crate::core::models::{MonthlyCalendar, TimeDistribution, WeekRow};
use crate::message::MessageRecord;

/// Counts messages by weekday/hour, hour and day of year, then lays the
/// daily counts out as a monthly calendar.
///
/// When `author` is set only that author's messages are counted. Messages
/// outside `year` are ignored so that the three countings always agree.
pub fn time_distribution(
    messages: &[MessageRecord],
    year: i32,
    author: Option<&str>,
) -> TimeDistribution {
    let mut dist = TimeDistribution::default();

    let selected = messages
        .iter()
        .filter(|m| author.is_none_or(|a| m.author == a))
        .filter(|m| m.timestamp.year() == year);

    for msg in selected {
        let weekday = msg.timestamp.weekday().num_days_from_monday() as usize;
        let hour = msg.timestamp.hour() as usize;
        let day = msg.timestamp.ordinal0() as usize;

        dist.weekday_hour_matrix.0[weekday][hour] += 1;
        dist.hour_totals[hour] += 1;
        dist.daily_series[day] += 1;
    }

    dist.monthly_calendar = monthly_calendar(year, &dist.daily_series);
    dist
}

/// Lays `daily` (indexed by day of year) out as Monday-first week rows.
///
/// A row ends after each Sunday and at the end of the month. Slots before
/// the 1st or after the last day of the month are `None`.
pub fn monthly_calendar(year: i32, daily: &[usize]) -> MonthlyCalendar {
    let mut months = Vec::with_capacity(12);
    let mut day_index = 0usize;

    for month in 1..=12 {
        let last_day = days_in_month(year, month);
        let mut weeks = Vec::new();
        let mut week: WeekRow = [None; 7];

        for day in 1..=last_day {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                break;
            };
            let slot = date.weekday().num_days_from_monday() as usize;
            week[slot] = Some(daily.get(day_index).copied().unwrap_or(0));
            day_index += 1;

            if slot == 6 || day == last_day {
                weeks.push(week);
                week = [None; 7];
            }
        }

        months.push(weeks);
    }

    MonthlyCalendar(months)
}

/// Number of days in `month` of `year`; 0 if the date is out of range.
fn days_in_month(year: i32, month: u32) -> u32 {
    let next_first = if month == 12 {
        year.checked_add(1)
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_first
        .and_then(|d| d.pred_opt())
        .map_or(0, |d| d.day())
}
