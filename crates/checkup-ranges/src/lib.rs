//! # checkup-ranges
//!
//! Configured reference ranges for classifying checkup metrics.
//!
//! ## Overview
//!
//! This crate provides [`RangeTable`], which implements the
//! [`StatusClassifier`](checkup_core::traits::StatusClassifier) trait. Bands
//! are declared in a TOML file, matched by metric id in order, and the first
//! match wins. Metrics without an entry keep the bands they carry.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use checkup_ranges::RangeTable;
//!
//! let table = RangeTable::default_table()?;
//! ```

pub mod rule;
pub mod table;

pub use rule::{RangeConfig, RangeRule};
pub use table::{RangeTable, DEFAULT_RANGES};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use checkup_contracts::{CheckupError, HealthMetric, HealthStatus, Range};
    use checkup_core::StatusClassifier;

    use crate::RangeTable;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// A metric whose own bands differ from any configured entry, so tests
    /// can tell which bands were used.
    fn metric(id: &str, unit: &str, value: f64) -> HealthMetric {
        HealthMetric {
            id: id.to_string(),
            name: id.to_string(),
            value,
            unit: unit.to_string(),
            status: HealthStatus::Safe,
            normal_range: Range::new(0.0, 1000.0),
            caution_range: Range::new(1000.0, 2000.0),
            description: String::new(),
            advice: String::new(),
        }
    }

    // ── 1. empty table falls back ─────────────────────────────────────────────

    #[test]
    fn test_empty_table_uses_metric_bands() {
        let table = RangeTable::from_toml_str("ranges = []").unwrap();
        let m = metric("bp-systolic", "mmHg", 135.0);
        assert_eq!(table.classify(&m, 135.0), HealthStatus::Safe);
        assert!(table.rule_for(&m).is_none());
    }

    // ── 2. matching entry overrides metric bands ──────────────────────────────

    #[test]
    fn test_entry_overrides_metric_bands() {
        let toml = r#"
            [[ranges]]
            id = "sys"
            description = "Systolic"
            metric = "bp-systolic"
            normal = { min = 90, max = 120 }
            caution = { min = 120, max = 140 }
        "#;
        let table = RangeTable::from_toml_str(toml).unwrap();
        let m = metric("bp-systolic", "mmHg", 135.0);

        assert_eq!(table.classify(&m, 135.0), HealthStatus::Caution);
        assert_eq!(table.classify(&m, 150.0), HealthStatus::Danger);
        assert_eq!(table.bands_for(&m).0, Range::new(90.0, 120.0));
    }

    // ── 3. first match wins ───────────────────────────────────────────────────

    #[test]
    fn test_first_match_wins() {
        let toml = r#"
            [[ranges]]
            id = "strict"
            description = "First entry"
            metric = "ldl-cholesterol"
            normal = { min = 0, max = 100 }
            caution = { min = 100, max = 130 }

            [[ranges]]
            id = "lenient"
            description = "Second entry, never reached"
            metric = "ldl-cholesterol"
            normal = { min = 0, max = 130 }
            caution = { min = 130, max = 160 }
        "#;
        let table = RangeTable::from_toml_str(toml).unwrap();
        let m = metric("ldl-cholesterol", "mg/dL", 125.0);

        assert_eq!(table.rule_for(&m).map(|r| r.id.as_str()), Some("strict"));
        assert_eq!(table.classify(&m, 125.0), HealthStatus::Caution);
    }

    // ── 4. unit guard ─────────────────────────────────────────────────────────

    #[test]
    fn test_unit_mismatch_skips_entry() {
        let toml = r#"
            [[ranges]]
            id = "glucose-mmol"
            description = "Glucose in mmol/L"
            metric = "fasting-glucose"
            unit = "mmol/L"
            normal = { min = 3.9, max = 5.6 }
            caution = { min = 5.6, max = 7.0 }

            [[ranges]]
            id = "glucose-mgdl"
            description = "Glucose in mg/dL"
            metric = "fasting-glucose"
            unit = "mg/dL"
            normal = { min = 70, max = 100 }
            caution = { min = 100, max = 126 }
        "#;
        let table = RangeTable::from_toml_str(toml).unwrap();

        let mgdl = metric("fasting-glucose", "mg/dL", 105.0);
        assert_eq!(table.rule_for(&mgdl).map(|r| r.id.as_str()), Some("glucose-mgdl"));
        assert_eq!(table.classify(&mgdl, 105.0), HealthStatus::Caution);

        let mmol = metric("fasting-glucose", "mmol/L", 6.1);
        assert_eq!(table.classify(&mmol, 6.1), HealthStatus::Caution);

        // No entry for this unit: falls back to the metric's own bands.
        let other = metric("fasting-glucose", "g/L", 1.05);
        assert!(table.rule_for(&other).is_none());
    }

    // ── 5. direction-agnostic bands ───────────────────────────────────────────

    #[test]
    fn test_default_table_handles_lower_is_worse() {
        let table = RangeTable::default_table().unwrap();
        let hdl = metric("hdl-cholesterol", "mg/dL", 55.0);

        assert_eq!(table.classify(&hdl, 55.0), HealthStatus::Safe);
        assert_eq!(table.classify(&hdl, 38.0), HealthStatus::Caution);
        assert_eq!(table.classify(&hdl, 30.0), HealthStatus::Danger);
        assert_eq!(table.rules().len(), 11);
    }

    // ── 6. config errors ──────────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let result = RangeTable::from_toml_str("this is not valid toml ][[[");
        match result {
            Err(CheckupError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse range TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_band_is_rejected() {
        let toml = r#"
            [[ranges]]
            id = "inverted"
            description = "min above max"
            metric = "bmi"
            normal = { min = 23, max = 18.5 }
            caution = { min = 23, max = 25 }
        "#;
        match RangeTable::from_toml_str(toml) {
            Err(CheckupError::ConfigError { reason }) => assert!(reason.contains("inverted")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = RangeTable::from_file(std::path::Path::new("/nonexistent/ranges.toml"));
        assert!(matches!(result, Err(CheckupError::ConfigError { .. })));
    }

    // ── 7. reference checkup ──────────────────────────────────────────────────

    #[test]
    fn test_default_table_agrees_with_reference_checkup_except_bmi() {
        let catalog = checkup_ref_data::reference_catalog().unwrap();
        let table = RangeTable::default_table().unwrap();

        let disagreeing: Vec<&str> = catalog
            .latest_checkup
            .metrics
            .iter()
            .filter(|m| table.classify(m, m.value) != m.status)
            .map(|m| m.id.as_str())
            .collect();

        assert_eq!(disagreeing, vec!["bmi"]);
    }
}
