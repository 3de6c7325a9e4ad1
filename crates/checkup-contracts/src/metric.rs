//! Checkup metrics, checkup snapshots and per-metric history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{HealthStatus, Range};

/// One measured quantity within a checkup.
///
/// `status` is stored alongside the value in the source data and is treated
/// as authoritative; the classifier in `checkup-core` can re-derive it from
/// the two bands for validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub status: HealthStatus,
    pub normal_range: Range,
    pub caution_range: Range,
    pub description: String,
    pub advice: String,
}

/// A dated checkup snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckup {
    pub id: String,
    pub date: NaiveDate,
    pub metrics: Vec<HealthMetric>,
    pub overall_status: HealthStatus,
    pub health_age: i32,
    pub actual_age: i32,
}

impl HealthCheckup {
    /// Find a metric by id.
    pub fn metric(&self, id: &str) -> Option<&HealthMetric> {
        self.metrics.iter().find(|m| m.id == id)
    }
}

/// One historical reading. `date` is a display label such as `"2024-11"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthHistory {
    pub date: String,
    pub value: f64,
    pub status: HealthStatus,
}

/// Chronologically ascending readings of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricHistory {
    pub metric_id: String,
    pub metric_name: String,
    pub unit: String,
    pub history: Vec<HealthHistory>,
}
