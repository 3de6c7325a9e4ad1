//! Stored-versus-derived status checks.
//!
//! Catalog statuses are authoritative for display. `ConsistencyVerifier`
//! re-derives each one through a [`StatusClassifier`] and reports every
//! disagreement without altering the catalog.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use checkup_contracts::{Catalog, HealthStatus};
use checkup_core::{aggregate, StatusClassifier};

/// Where a mismatching status was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchSite {
    /// A metric of the latest checkup.
    Metric { metric_id: String },
    /// One point of a metric history.
    HistoryPoint { metric_id: String, date: String },
    /// The stored overall status of the latest checkup.
    Overall,
}

impl fmt::Display for MismatchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchSite::Metric { metric_id } => write!(f, "metric '{metric_id}'"),
            MismatchSite::HistoryPoint { metric_id, date } => {
                write!(f, "history '{metric_id}' at {date}")
            }
            MismatchSite::Overall => f.write_str("overall status"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMismatch {
    pub site: MismatchSite,
    pub value: Option<f64>,
    pub stored: HealthStatus,
    pub derived: HealthStatus,
}

impl fmt::Display for StatusMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(
                f,
                "{}: value {v} stored as {} but derives to {}",
                self.site, self.stored, self.derived
            ),
            None => write!(
                f,
                "{}: stored as {} but derives to {}",
                self.site, self.stored, self.derived
            ),
        }
    }
}

/// Outcome of one consistency pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    pub passed: bool,
    /// Number of statuses compared.
    pub checked: usize,
    pub mismatches: Vec<StatusMismatch>,
}

impl ConsistencyReport {
    /// Ids of the current metrics that disagree with the classifier.
    pub fn mismatched_metrics(&self) -> Vec<&str> {
        self.mismatches
            .iter()
            .filter_map(|m| match &m.site {
                MismatchSite::Metric { metric_id } => Some(metric_id.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsistencyVerifier;

impl ConsistencyVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Compare every stored status in `catalog` with `classifier`.
    ///
    /// History points are classified with the bands of the current metric of
    /// the same id; series without a current metric are skipped. The stored
    /// overall status is compared with the aggregate of the stored metric
    /// statuses.
    pub fn verify(&self, catalog: &Catalog, classifier: &dyn StatusClassifier) -> ConsistencyReport {
        let checkup = &catalog.latest_checkup;
        let mut mismatches = Vec::new();
        let mut checked = 0;

        for metric in &checkup.metrics {
            checked += 1;
            let derived = classifier.classify(metric, metric.value);
            if derived != metric.status {
                mismatches.push(StatusMismatch {
                    site: MismatchSite::Metric {
                        metric_id: metric.id.clone(),
                    },
                    value: Some(metric.value),
                    stored: metric.status,
                    derived,
                });
            }
        }

        for series in &catalog.metric_histories {
            let Some(metric) = checkup.metric(&series.metric_id) else {
                debug!(metric_id = %series.metric_id, "history has no current metric; skipped");
                continue;
            };
            for point in &series.history {
                checked += 1;
                let derived = classifier.classify(metric, point.value);
                if derived != point.status {
                    mismatches.push(StatusMismatch {
                        site: MismatchSite::HistoryPoint {
                            metric_id: series.metric_id.clone(),
                            date: point.date.clone(),
                        },
                        value: Some(point.value),
                        stored: point.status,
                        derived,
                    });
                }
            }
        }

        checked += 1;
        let overall = aggregate(&checkup.metrics).overall;
        if overall != checkup.overall_status {
            mismatches.push(StatusMismatch {
                site: MismatchSite::Overall,
                value: None,
                stored: checkup.overall_status,
                derived: overall,
            });
        }

        for mismatch in &mismatches {
            warn!(checkup = %checkup.id, %mismatch, "stored status disagrees with classifier");
        }
        debug!(checked, mismatches = mismatches.len(), "consistency pass complete");

        ConsistencyReport {
            passed: mismatches.is_empty(),
            checked,
            mismatches,
        }
    }
}
