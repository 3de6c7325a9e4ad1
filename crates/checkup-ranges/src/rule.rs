//! Reference-range entries and the configuration schema.
//!
//! A `RangeConfig` is deserialized from TOML and holds an ordered list of
//! `RangeRule`s. Rules are matched by metric id in declaration order; the
//! first matching rule wins. If no rule matches, the table falls back to the
//! bands stored on the metric.

use serde::{Deserialize, Serialize};

use checkup_contracts::Range;

/// A single reference-range entry loaded from TOML.
///
/// Example:
/// ```toml
/// [[ranges]]
/// id = "hdl-cholesterol-adult"
/// description = "HDL cholesterol; lower is worse"
/// metric = "hdl-cholesterol"
/// unit = "mg/dL"
/// normal = { min = 40, max = 999 }
/// caution = { min = 35, max = 40 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeRule {
    /// Stable identifier used in log events.
    pub id: String,

    /// Human-readable explanation of the band.
    pub description: String,

    /// Metric id this entry applies to. Matched exactly (case-sensitive).
    pub metric: String,

    /// When present, the entry only applies to metrics reported in this
    /// unit. A metric in another unit skips the entry.
    #[serde(default)]
    pub unit: Option<String>,

    /// Inclusive band classified as safe.
    pub normal: Range,

    /// Inclusive band classified as caution.
    pub caution: Range,
}

impl RangeRule {
    /// Return true if this entry targets `metric_id`.
    pub fn matches(&self, metric_id: &str) -> bool {
        self.metric == metric_id
    }

    /// Return true if the entry has no unit guard or the guard equals `unit`.
    pub fn accepts_unit(&self, unit: &str) -> bool {
        self.unit.as_deref().map_or(true, |u| u == unit)
    }
}

/// The top-level structure deserialized from a TOML range file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Ordered list of entries. First match wins.
    #[serde(default)]
    pub ranges: Vec<RangeRule>,
}
