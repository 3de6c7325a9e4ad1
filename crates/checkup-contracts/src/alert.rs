//! Health alerts shown in the notification inbox.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Alert category. Serialised as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
    Urgent,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
            AlertKind::Urgent => "urgent",
        };
        f.write_str(name)
    }
}

/// A notification about the user's health data.
///
/// `is_read` is the only field that changes after load, and only through
/// copy-on-write operations in `checkup-core::alerts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAlert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    pub date: NaiveDate,
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}
