//! Per-checkup status aggregation.

use serde::{Deserialize, Serialize};

use checkup_contracts::{HealthMetric, HealthStatus};

/// Number of metrics holding each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub safe: usize,
    pub caution: usize,
    pub danger: usize,
}

impl StatusCounts {
    pub fn get(&self, status: HealthStatus) -> usize {
        match status {
            HealthStatus::Safe => self.safe,
            HealthStatus::Caution => self.caution,
            HealthStatus::Danger => self.danger,
        }
    }

    /// Always equals the number of metrics counted.
    pub fn total(&self) -> usize {
        self.safe + self.caution + self.danger
    }

    fn record(&mut self, status: HealthStatus) {
        match status {
            HealthStatus::Safe => self.safe += 1,
            HealthStatus::Caution => self.caution += 1,
            HealthStatus::Danger => self.danger += 1,
        }
    }
}

/// Overall status and per-status counts of a set of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckupSummary {
    pub overall: HealthStatus,
    pub counts: StatusCounts,
}

/// Summarise `metrics` by their stored status.
///
/// The overall status is the most severe status present. An empty list
/// carries no risk signal and is `Safe`.
pub fn aggregate(metrics: &[HealthMetric]) -> CheckupSummary {
    let mut counts = StatusCounts::default();
    for metric in metrics {
        counts.record(metric.status);
    }

    let overall = metrics
        .iter()
        .map(|m| m.status)
        .max()
        .unwrap_or(HealthStatus::Safe);

    CheckupSummary { overall, counts }
}

/// Metrics that are not `Safe`, in their original order.
pub fn attention_metrics(metrics: &[HealthMetric]) -> Vec<&HealthMetric> {
    metrics
        .iter()
        .filter(|m| m.status != HealthStatus::Safe)
        .collect()
}
