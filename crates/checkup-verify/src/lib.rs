//! # checkup-verify
//!
//! Verification of checkup catalogs.
//!
//! Two independent checks are provided:
//!
//! 1. **Structural**: [`catalog::load_catalog`] validates a catalog document
//!    against [`catalog::catalog_schema`] using the `jsonschema` crate before
//!    deserialising it. All violations are reported in one error.
//! 2. **Semantic**: [`consistency::ConsistencyVerifier`] re-derives every
//!    stored status through a `StatusClassifier` and lists disagreements.
//!    Stored statuses stay authoritative; the report is advisory.

pub mod catalog;
pub mod consistency;

pub use catalog::{catalog_schema, load_catalog, schema_violations, validate_document};
pub use consistency::{ConsistencyReport, ConsistencyVerifier, MismatchSite, StatusMismatch};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use checkup_contracts::{CheckupError, HealthStatus};
    use checkup_core::classify::BandClassifier;
    use checkup_ranges::RangeTable;
    use checkup_ref_data::{reference_catalog, reference_document};

    use super::*;

    // ── Schema ────────────────────────────────────────────────────────────────

    #[test]
    fn reference_document_satisfies_schema() {
        let violations = schema_violations(&reference_document()).unwrap();
        assert!(violations.is_empty(), "violations: {violations:?}");
    }

    #[test]
    fn load_catalog_matches_reference_catalog() {
        let text = reference_document().to_string();
        let loaded = load_catalog(&text).unwrap();
        assert_eq!(loaded, reference_catalog().unwrap());
    }

    #[test]
    fn unknown_status_is_a_schema_violation() {
        let mut doc = reference_document();
        doc["latestCheckup"]["metrics"][0]["status"] = json!("critical");

        let err = load_catalog(&doc.to_string()).unwrap_err();
        match err {
            CheckupError::SchemaValidation { reason } => {
                assert!(reason.contains("/latestCheckup/metrics/0/status"), "{reason}");
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut doc = reference_document();
        doc["alerts"][0]["type"] = json!("emergency");
        doc["hospitals"][1]["isOpen"] = json!("yes");

        let violations = schema_violations(&doc).unwrap();
        assert_eq!(violations.len(), 2, "violations: {violations:?}");
        assert!(violate_at(&violations, "/alerts/0/type"));
        assert!(violate_at(&violations, "/hospitals/1/isOpen"));
    }

    #[test]
    fn missing_checkup_is_rejected() {
        let mut doc = reference_document();
        if let Some(obj) = doc.as_object_mut() {
            obj.remove("latestCheckup");
        }
        assert!(matches!(
            validate_document(&doc),
            Err(CheckupError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn malformed_json_is_catalog_invalid() {
        let err = load_catalog("{ not json").unwrap_err();
        assert!(matches!(err, CheckupError::CatalogInvalid { .. }));
    }

    fn violate_at(violations: &[String], path: &str) -> bool {
        violations.iter().any(|v| v.ends_with(path))
    }

    // ── Consistency ───────────────────────────────────────────────────────────

    #[test]
    fn reference_catalog_reports_only_bmi() {
        let catalog = reference_catalog().unwrap();
        let report = ConsistencyVerifier::new().verify(&catalog, &BandClassifier);

        assert!(!report.passed);
        assert_eq!(report.mismatches.len(), 1);
        let only = &report.mismatches[0];
        assert_eq!(
            only.site,
            MismatchSite::Metric {
                metric_id: "bmi".to_string()
            }
        );
        assert_eq!(only.stored, HealthStatus::Safe);
        assert_eq!(only.derived, HealthStatus::Caution);
        // 11 metrics + 40 history points + overall
        assert_eq!(report.checked, 52);
    }

    #[test]
    fn default_range_table_agrees_with_band_classifier() {
        let catalog = reference_catalog().unwrap();
        let table = RangeTable::default_table().unwrap();
        let report = ConsistencyVerifier::new().verify(&catalog, &table);
        assert_eq!(report.mismatched_metrics(), vec!["bmi"]);
    }

    #[test]
    fn corrected_catalog_passes() {
        let mut catalog = reference_catalog().unwrap();
        for metric in catalog.latest_checkup.metrics.iter_mut() {
            if metric.id == "bmi" {
                metric.status = HealthStatus::Caution;
            }
        }
        let report = ConsistencyVerifier::new().verify(&catalog, &BandClassifier);
        assert!(report.passed, "{:?}", report.mismatches);
    }

    #[test]
    fn stale_overall_status_is_reported() {
        let mut catalog = reference_catalog().unwrap();
        catalog.latest_checkup.overall_status = HealthStatus::Safe;

        let report = ConsistencyVerifier::new().verify(&catalog, &BandClassifier);
        let overall = report
            .mismatches
            .iter()
            .find(|m| m.site == MismatchSite::Overall)
            .unwrap();
        assert_eq!(overall.derived, HealthStatus::Caution);
        assert!(overall.to_string().starts_with("overall status"));
    }

    #[test]
    fn history_point_mismatch_names_its_date() {
        let mut catalog = reference_catalog().unwrap();
        catalog.metric_histories[0].history[0].status = HealthStatus::Danger;

        let report = ConsistencyVerifier::new().verify(&catalog, &BandClassifier);
        assert!(report.mismatches.iter().any(|m| m.site
            == MismatchSite::HistoryPoint {
                metric_id: "bp-systolic".to_string(),
                date: "2015-04".to_string(),
            }));
    }
}
