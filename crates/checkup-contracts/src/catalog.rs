//! The complete static data source consumed by the engine.

use serde::{Deserialize, Serialize};

use crate::{
    alert::HealthAlert,
    directory::Hospital,
    metric::{HealthCheckup, MetricHistory},
    profile::{ActivityData, MedicalVisit, Medication, UserProfile},
};

/// Everything the application reads at start-up.
///
/// Loaded once and never mutated; per-session changes (alert read state)
/// live in a separate view state that starts from a copy of `alerts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub profile: UserProfile,
    pub latest_checkup: HealthCheckup,
    #[serde(default)]
    pub metric_histories: Vec<MetricHistory>,
    #[serde(default)]
    pub alerts: Vec<HealthAlert>,
    #[serde(default)]
    pub hospitals: Vec<Hospital>,
    #[serde(default)]
    pub activity: Vec<ActivityData>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub visits: Vec<MedicalVisit>,
}
