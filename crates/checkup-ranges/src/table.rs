//! TOML-driven reference-range table.
//!
//! `RangeTable` loads a `RangeConfig` from a TOML string or file and
//! implements the `StatusClassifier` trait from checkup-core.
//!
//! Classification algorithm:
//!
//! 1. Iterate entries in declaration order.
//! 2. Skip entries whose `metric` differs from the metric id.
//! 3. For the first matching entry, check its unit guard. A unit mismatch
//!    skips the entry (logged at `warn`) and the search continues.
//! 4. Classify the value against the entry's bands.
//! 5. If no entry applies, classify against the bands on the metric itself.

use std::path::Path;

use tracing::{debug, warn};

use checkup_contracts::{CheckupError, CheckupResult, HealthMetric, HealthStatus, Range};
use checkup_core::{classify::classify, StatusClassifier};

use crate::rule::{RangeConfig, RangeRule};

/// The bundled reference bands.
pub const DEFAULT_RANGES: &str = include_str!("../ranges/default.toml");

/// A `StatusClassifier` backed by configured reference ranges.
///
/// ```rust,ignore
/// use checkup_ranges::RangeTable;
///
/// let table = RangeTable::from_file(Path::new("ranges/clinic.toml"))?;
/// let status = table.classify(&metric, metric.value);
/// ```
#[derive(Debug, Clone)]
pub struct RangeTable {
    config: RangeConfig,
}

impl RangeTable {
    /// Parse `s` as TOML and build a `RangeTable`.
    ///
    /// Returns `CheckupError::ConfigError` if the TOML is malformed, does not
    /// match `RangeConfig`, or contains a band with `min > max`.
    pub fn from_toml_str(s: &str) -> CheckupResult<Self> {
        let config: RangeConfig = toml::from_str(s).map_err(|e| CheckupError::ConfigError {
            reason: format!("failed to parse range TOML: {}", e),
        })?;

        for rule in &config.ranges {
            if !rule.normal.is_well_formed() || !rule.caution.is_well_formed() {
                return Err(CheckupError::ConfigError {
                    reason: format!("range '{}' has a band with min greater than max", rule.id),
                });
            }
        }

        debug!(entries = config.ranges.len(), "loaded reference ranges");
        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as a range table.
    pub fn from_file(path: &Path) -> CheckupResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CheckupError::ConfigError {
            reason: format!("failed to read range file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The bundled table in `ranges/default.toml`.
    pub fn default_table() -> CheckupResult<Self> {
        Self::from_toml_str(DEFAULT_RANGES)
    }

    pub fn rules(&self) -> &[RangeRule] {
        &self.config.ranges
    }

    /// The entry that applies to `metric`, if any.
    pub fn rule_for(&self, metric: &HealthMetric) -> Option<&RangeRule> {
        for rule in &self.config.ranges {
            if !rule.matches(&metric.id) {
                continue;
            }
            if !rule.accepts_unit(&metric.unit) {
                warn!(
                    rule_id = %rule.id,
                    metric_id = %metric.id,
                    metric_unit = %metric.unit,
                    rule_unit = rule.unit.as_deref().unwrap_or(""),
                    "range entry unit does not match metric; skipping"
                );
                continue;
            }
            return Some(rule);
        }
        None
    }

    /// Normal and caution bands used for `metric`.
    pub fn bands_for(&self, metric: &HealthMetric) -> (Range, Range) {
        match self.rule_for(metric) {
            Some(rule) => (rule.normal, rule.caution),
            None => (metric.normal_range, metric.caution_range),
        }
    }
}

impl StatusClassifier for RangeTable {
    fn classify(&self, metric: &HealthMetric, value: f64) -> HealthStatus {
        let (normal, caution) = match self.rule_for(metric) {
            Some(rule) => {
                debug!(rule_id = %rule.id, metric_id = %metric.id, "range entry matched");
                (rule.normal, rule.caution)
            }
            None => {
                debug!(metric_id = %metric.id, "no range entry; using metric bands");
                (metric.normal_range, metric.caution_range)
            }
        };
        classify(value, &normal, &caution)
    }
}
