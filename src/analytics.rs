//! Chart aggregation over the session collection.
//!
//! Everything here is a pure function of its inputs: "now" is an
//! explicit parameter, no I/O happens, and no errors are raised.
//! Sessions with unparseable dates simply fall outside every window
//! and bucket.

use crate::models::Session;
use crate::time_utils::{month_label, month_offset, parse_calendar_date, subtract_months};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Chart time range, anchored to "now" at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    ThreeMonths,
    SixMonths,
    OneYear,
    All,
}

impl TimeWindow {
    /// Parse the range values the dashboard sends.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "3months" => Some(TimeWindow::ThreeMonths),
            "6months" => Some(TimeWindow::SixMonths),
            "1year" => Some(TimeWindow::OneYear),
            "all" => Some(TimeWindow::All),
            _ => None,
        }
    }

    /// How many calendar months the trend charts span. "All time"
    /// charts the trailing year.
    pub fn month_span(&self) -> u32 {
        match self {
            TimeWindow::ThreeMonths => 3,
            TimeWindow::SixMonths => 6,
            TimeWindow::OneYear | TimeWindow::All => 12,
        }
    }
}

/// One calendar-month aggregation unit for the trend charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MonthlyBucket {
    /// Three-letter month label for the chart axis
    pub month: String,
    /// Session count
    pub sessions: u32,
    /// Total hours in the water
    pub hours: f64,
    /// Mean rating, 0 when the bucket is empty
    pub avg_rating: f64,
    /// Mean wave height in feet, 0 when the bucket is empty
    pub avg_wave_height: f64,
}

/// Occurrence count for one category value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryCount {
    pub name: String,
    pub count: u32,
}

/// Headline statistics for the dashboard cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryStats {
    pub total_sessions: u32,
    pub total_hours: f64,
    pub avg_rating: f64,
    pub avg_wave_height: f64,
    /// Highest-rated session; ties go to the earliest record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_session: Option<Session>,
}

/// Keep sessions whose date falls within `[now - window, now]`.
/// `All` keeps everything.
pub fn filter_by_window(
    sessions: &[Session],
    window: TimeWindow,
    now: DateTime<Utc>,
) -> Vec<Session> {
    if window == TimeWindow::All {
        return sessions.to_vec();
    }

    let cutoff = subtract_months(now, window.month_span()).date_naive();
    let today = now.date_naive();

    sessions
        .iter()
        .filter(|s| match parse_calendar_date(&s.date) {
            Some(date) => date >= cutoff && date <= today,
            None => false,
        })
        .cloned()
        .collect()
}

/// Partition sessions into `month_count` consecutive calendar-month
/// buckets ending at the current month, oldest first.
///
/// A session belongs to exactly one bucket, matched on both the
/// calendar month and year of its date.
pub fn monthly_buckets(
    sessions: &[Session],
    month_count: u32,
    now: DateTime<Utc>,
) -> Vec<MonthlyBucket> {
    (0..month_count)
        .rev()
        .map(|offset| {
            let (year, month) = month_offset(now, offset);

            let in_month: Vec<&Session> = sessions
                .iter()
                .filter(|s| {
                    parse_calendar_date(&s.date)
                        .map(|d| d.year() == year && d.month() == month)
                        .unwrap_or(false)
                })
                .collect();

            let count = in_month.len() as u32;
            let hours: f64 = in_month.iter().map(|s| s.duration).sum();
            let avg_rating = mean(in_month.iter().map(|s| s.rating as f64), count);
            let avg_wave = mean(in_month.iter().map(|s| s.wave_height), count);

            MonthlyBucket {
                month: month_label(month).to_string(),
                sessions: count,
                hours: round1(hours),
                avg_rating: round1(avg_rating),
                avg_wave_height: round1(avg_wave),
            }
        })
        .collect()
}

/// Occurrence count per observed category value, in first-seen order.
pub fn distribution<F>(sessions: &[Session], key_fn: F) -> Vec<CategoryCount>
where
    F: Fn(&Session) -> &str,
{
    let mut counts: Vec<CategoryCount> = Vec::new();
    for session in sessions {
        let key = key_fn(session);
        match counts.iter_mut().find(|c| c.name == key) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: key.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

/// Headline stats over a session collection. All means are 0 for an
/// empty collection; the division is guarded on the count.
pub fn summary_stats(sessions: &[Session]) -> SummaryStats {
    let count = sessions.len() as u32;

    let mut best: Option<&Session> = None;
    for session in sessions {
        if session.rating > best.map(|b| b.rating).unwrap_or(0) {
            best = Some(session);
        }
    }

    SummaryStats {
        total_sessions: count,
        total_hours: sessions.iter().map(|s| s.duration).sum(),
        avg_rating: mean(sessions.iter().map(|s| s.rating as f64), count),
        avg_wave_height: mean(sessions.iter().map(|s| s.wave_height), count),
        best_session: best.cloned(),
    }
}

fn mean(values: impl Iterator<Item = f64>, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Round to one decimal, as the charts display values.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
