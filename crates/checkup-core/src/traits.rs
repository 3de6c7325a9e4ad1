//! Seam traits between the engine and its collaborators.
//!
//! - `StatusClassifier`: maps a reading of a metric onto a `HealthStatus`.
//!   The engine ships `BandClassifier`; `checkup-ranges` supplies a
//!   configuration-driven table.
//! - `HealthCatalog`: the read-only data source loaded at start-up.
//!
//! Both are synchronous and side-effect free from the engine's point of view.

use checkup_contracts::{
    ActivityData, Catalog, HealthAlert, HealthCheckup, HealthMetric, HealthStatus, Hospital,
    MedicalVisit, Medication, MetricHistory, UserProfile,
};

/// Classifies a numeric reading of a metric.
///
/// `value` is passed separately from `metric` so that historical readings can
/// be classified against the bands of the current metric definition.
pub trait StatusClassifier: Send + Sync {
    /// Return the status of `value` read as `metric`. Must be total.
    fn classify(&self, metric: &HealthMetric, value: f64) -> HealthStatus;
}

/// Read access to the static data source.
pub trait HealthCatalog {
    fn profile(&self) -> &UserProfile;
    fn latest_checkup(&self) -> &HealthCheckup;
    fn metric_histories(&self) -> &[MetricHistory];
    fn alerts(&self) -> &[HealthAlert];
    fn hospitals(&self) -> &[Hospital];
    fn activity(&self) -> &[ActivityData];
    fn medications(&self) -> &[Medication];
    fn visits(&self) -> &[MedicalVisit];

    /// Current metric with the given id, if the latest checkup has one.
    fn metric(&self, id: &str) -> Option<&HealthMetric> {
        self.latest_checkup().metric(id)
    }

    /// History series for the given metric id.
    fn history(&self, metric_id: &str) -> Option<&MetricHistory> {
        self.metric_histories().iter().find(|h| h.metric_id == metric_id)
    }

    /// The most recent activity entry (the source lists days ascending).
    fn latest_activity(&self) -> Option<&ActivityData> {
        self.activity().last()
    }
}

impl HealthCatalog for Catalog {
    fn profile(&self) -> &UserProfile {
        &self.profile
    }

    fn latest_checkup(&self) -> &HealthCheckup {
        &self.latest_checkup
    }

    fn metric_histories(&self) -> &[MetricHistory] {
        &self.metric_histories
    }

    fn alerts(&self) -> &[HealthAlert] {
        &self.alerts
    }

    fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    fn activity(&self) -> &[ActivityData] {
        &self.activity
    }

    fn medications(&self) -> &[Medication] {
        &self.medications
    }

    fn visits(&self) -> &[MedicalVisit] {
        &self.visits
    }
}
