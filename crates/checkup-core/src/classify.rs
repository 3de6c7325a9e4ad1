//! Band-based status classification.
//!
//! A reading is `Safe` inside the normal band, `Caution` inside the caution
//! band, and `Danger` anywhere else. The rule only tests containment, so it
//! works whether the caution band sits above the normal band (glucose,
//! blood pressure) or below it (HDL cholesterol, GFR).
//!
//! Degenerate input never errors. A non-finite value or a band with
//! `min > max` classifies as `Danger`.

use tracing::{debug, warn};

use checkup_contracts::{HealthMetric, HealthStatus, Range};

use crate::traits::StatusClassifier;

/// Classify `value` against a normal and a caution band.
pub fn classify(value: f64, normal: &Range, caution: &Range) -> HealthStatus {
    if !value.is_finite() {
        warn!(value, "non-finite reading; classifying as danger");
        return HealthStatus::Danger;
    }
    if !normal.is_well_formed() || !caution.is_well_formed() {
        warn!(
            normal_min = normal.min,
            normal_max = normal.max,
            caution_min = caution.min,
            caution_max = caution.max,
            "malformed classification band; classifying as danger"
        );
        return HealthStatus::Danger;
    }

    let status = if normal.contains(value) {
        HealthStatus::Safe
    } else if caution.contains(value) {
        HealthStatus::Caution
    } else {
        HealthStatus::Danger
    };

    debug!(value, %status, "classified reading");
    status
}

/// Classify a metric's current value against its own bands.
pub fn classify_metric(metric: &HealthMetric) -> HealthStatus {
    classify(metric.value, &metric.normal_range, &metric.caution_range)
}

/// The default `StatusClassifier`: uses the bands carried on each metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandClassifier;

impl StatusClassifier for BandClassifier {
    fn classify(&self, metric: &HealthMetric, value: f64) -> HealthStatus {
        classify(value, &metric.normal_range, &metric.caution_range)
    }
}
