//! Alert inbox operations: recency grouping, unread tracking and
//! copy-on-write read-state updates.
//!
//! Every mutator takes a slice and returns a new vector. Callers own the
//! working list; nothing here keeps state between calls.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use checkup_contracts::HealthAlert;

/// Alerts partitioned by calendar date. Input order is kept in each bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertGroups {
    pub today: Vec<HealthAlert>,
    pub earlier: Vec<HealthAlert>,
}

/// Split `alerts` into those dated `today` and all others.
pub fn group_by_recency(alerts: &[HealthAlert], today: NaiveDate) -> AlertGroups {
    let (today_bucket, earlier): (Vec<_>, Vec<_>) =
        alerts.iter().cloned().partition(|a| a.date == today);
    AlertGroups {
        today: today_bucket,
        earlier,
    }
}

pub fn count_unread(alerts: &[HealthAlert]) -> usize {
    alerts.iter().filter(|a| !a.is_read).count()
}

/// The first `limit` unread alerts, in order.
pub fn unread_preview(alerts: &[HealthAlert], limit: usize) -> Vec<&HealthAlert> {
    alerts.iter().filter(|a| !a.is_read).take(limit).collect()
}

pub fn mark_all_read(alerts: &[HealthAlert]) -> Vec<HealthAlert> {
    alerts
        .iter()
        .map(|a| HealthAlert {
            is_read: true,
            ..a.clone()
        })
        .collect()
}

/// Mark the alert with `id` as read. An unknown id leaves the list unchanged.
pub fn mark_read(alerts: &[HealthAlert], id: &str) -> Vec<HealthAlert> {
    if !alerts.iter().any(|a| a.id == id) {
        debug!(alert_id = %id, "mark_read on unknown alert; list unchanged");
    }
    alerts
        .iter()
        .map(|a| {
            if a.id == id {
                HealthAlert {
                    is_read: true,
                    ..a.clone()
                }
            } else {
                a.clone()
            }
        })
        .collect()
}

/// Drop every alert that has been read.
pub fn delete_read(alerts: &[HealthAlert]) -> Vec<HealthAlert> {
    alerts.iter().filter(|a| !a.is_read).cloned().collect()
}

/// A date expressed relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelativeDate {
    Today,
    Yesterday,
    /// Two to six days in the past.
    DaysAgo(u32),
    /// A week or more in the past, or any future date.
    Absolute(NaiveDate),
}

/// Express `date` relative to `today`.
///
/// Future dates have a negative day difference and fall to `Absolute`
/// rather than being read as "N days ago".
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> RelativeDate {
    let diff_days = (today - date).num_days();
    match diff_days {
        0 => RelativeDate::Today,
        1 => RelativeDate::Yesterday,
        2..=6 => RelativeDate::DaysAgo(diff_days as u32),
        _ => RelativeDate::Absolute(date),
    }
}

impl fmt::Display for RelativeDate {
    /// ko-KR labels: `오늘`, `어제`, `N일 전`, `M월 D일`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeDate::Today => f.write_str("오늘"),
            RelativeDate::Yesterday => f.write_str("어제"),
            RelativeDate::DaysAgo(n) => write!(f, "{n}일 전"),
            RelativeDate::Absolute(date) => write!(f, "{}월 {}일", date.month(), date.day()),
        }
    }
}
