//! Health status and classification bands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tri-state severity of a measured value.
///
/// Variant order is the severity order: `Safe < Caution < Danger`. The
/// derived `Ord` is what aggregation relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Safe,
    Caution,
    Danger,
}

impl HealthStatus {
    /// All statuses in ascending severity.
    pub const ALL: [HealthStatus; 3] = [HealthStatus::Safe, HealthStatus::Caution, HealthStatus::Danger];

    /// The lowercase wire name (`"safe"`, `"caution"`, `"danger"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Safe => "safe",
            HealthStatus::Caution => "caution",
            HealthStatus::Danger => "danger",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive numeric band `[min, max]`.
///
/// One-sided bands use a large sentinel for `max` (the reference data uses
/// `999`). Nothing enforces `min <= max`; see [`Range::is_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when neither bound is NaN and `min <= max`.
    pub fn is_well_formed(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan() && self.min <= self.max
    }

    /// Inclusive containment on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
