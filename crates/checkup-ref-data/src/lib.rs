//! # checkup-ref-data
//!
//! Reference catalog for the checkup status engine.
//!
//! Provides the sample user's profile, an eleven-metric checkup, ten-year
//! histories for four metrics, the alert inbox, a five-entry hospital
//! directory, a week of activity, medications and visit history.
//!
//! All data is hardcoded and fictional. No external systems are contacted.

use serde_json::{json, Value};
use tracing::debug;

use checkup_contracts::{Catalog, CheckupError, CheckupResult};

pub mod mock_data;

/// The whole reference catalog as a JSON document in catalog layout.
pub fn reference_document() -> Value {
    json!({
        "profile": mock_data::user_profile(),
        "latestCheckup": mock_data::latest_checkup(),
        "metricHistories": mock_data::metric_histories(),
        "alerts": mock_data::health_alerts(),
        "hospitals": mock_data::nearby_hospitals(),
        "activity": mock_data::activity_data(),
        "medications": mock_data::medications(),
        "visits": mock_data::medical_visits()
    })
}

/// The reference catalog mapped onto the data model.
pub fn reference_catalog() -> CheckupResult<Catalog> {
    let catalog: Catalog =
        serde_json::from_value(reference_document()).map_err(|e| CheckupError::CatalogInvalid {
            reason: format!("reference catalog does not match the data model: {e}"),
        })?;
    debug!(
        metrics = catalog.latest_checkup.metrics.len(),
        alerts = catalog.alerts.len(),
        hospitals = catalog.hospitals.len(),
        "loaded reference catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use checkup_contracts::HealthStatus;
    use checkup_core::{
        age::{age_on, evaluate_age_deviation, AgeDirection},
        aggregate,
        alerts::{count_unread, format_relative_date, group_by_recency, RelativeDate},
        classify::classify_metric,
        filter::{filter_hospitals, HospitalQuery},
        HealthCatalog,
    };

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> Catalog {
        reference_catalog().unwrap()
    }

    fn query(q: &str, specialty: &str, open_only: bool) -> HospitalQuery {
        HospitalQuery {
            query: q.to_string(),
            specialty: specialty.to_string(),
            open_only,
        }
    }

    // ── Shape ─────────────────────────────────────────────────────────────────

    #[test]
    fn catalog_loads_with_expected_sizes() {
        let c = catalog();
        assert_eq!(c.latest_checkup.metrics.len(), 11);
        assert_eq!(c.metric_histories.len(), 4);
        assert_eq!(c.alerts.len(), 4);
        assert_eq!(c.hospitals.len(), 5);
        assert_eq!(c.activity.len(), 7);
        assert_eq!(c.medications.len(), 1);
        assert_eq!(c.visits.len(), 3);
    }

    #[test]
    fn histories_are_chronological() {
        for series in catalog().metric_histories {
            let dates: Vec<&str> = series.history.iter().map(|h| h.date.as_str()).collect();
            let mut sorted = dates.clone();
            sorted.sort();
            assert_eq!(dates, sorted, "{} history out of order", series.metric_id);
        }
    }

    // ── Classification against stored status ──────────────────────────────────

    #[test]
    fn band_rule_reproduces_stored_status() {
        let c = catalog();
        for metric in c.latest_checkup.metrics.iter().filter(|m| m.id != "bmi") {
            assert_eq!(classify_metric(metric), metric.status, "metric {}", metric.id);
        }
    }

    #[test]
    fn stored_bmi_status_disagrees_with_its_bands() {
        let c = catalog();
        let bmi = c.metric("bmi").unwrap();
        assert_eq!(bmi.status, HealthStatus::Safe);
        assert_eq!(classify_metric(bmi), HealthStatus::Caution);
    }

    // ── Aggregation ───────────────────────────────────────────────────────────

    #[test]
    fn reference_checkup_is_caution_overall() {
        let c = catalog();
        let summary = aggregate(&c.latest_checkup.metrics);

        assert_eq!(summary.counts.total(), 11);
        assert_eq!(summary.counts.safe, 8);
        assert_eq!(summary.counts.caution, 3);
        assert_eq!(summary.counts.danger, 0);
        assert_eq!(summary.overall, HealthStatus::Caution);
        assert_eq!(summary.overall, c.latest_checkup.overall_status);
    }

    // ── Ages ──────────────────────────────────────────────────────────────────

    #[test]
    fn profile_age_matches_checkup_actual_age() {
        let c = catalog();
        assert_eq!(age_on(c.profile.birth_date, c.latest_checkup.date), c.latest_checkup.actual_age);

        let dev = evaluate_age_deviation(c.latest_checkup.health_age, c.latest_checkup.actual_age);
        assert_eq!(dev.direction, AgeDirection::Higher);
        assert_eq!(dev.delta, 4);
    }

    // ── Alerts ────────────────────────────────────────────────────────────────

    #[test]
    fn alerts_on_the_day_after_the_checkup() {
        let c = catalog();
        let today = ymd(2024, 11, 16);
        let groups = group_by_recency(c.alerts(), today);

        assert_eq!(groups.today.len(), 2);
        assert_eq!(groups.earlier.len(), 2);
        assert_eq!(count_unread(c.alerts()), 2);

        let labels: Vec<RelativeDate> =
            c.alerts.iter().map(|a| format_relative_date(a.date, today)).collect();
        assert_eq!(
            labels,
            vec![
                RelativeDate::Today,
                RelativeDate::Today,
                RelativeDate::Absolute(ymd(2024, 11, 1)),
                RelativeDate::DaysAgo(6),
            ]
        );
    }

    // ── Hospital directory ────────────────────────────────────────────────────

    #[test]
    fn empty_query_returns_all_hospitals_in_order() {
        let c = catalog();
        let found = filter_hospitals(&c.hospitals, &query("", "전체", false));
        let ids: Vec<&str> = found.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["hospital-001", "hospital-002", "hospital-003", "hospital-004", "hospital-005"]
        );
    }

    #[test]
    fn substring_search_for_internal_medicine() {
        let c = catalog();
        let found = filter_hospitals(&c.hospitals, &query("내과", "전체", false));
        let expected: Vec<&str> = c
            .hospitals
            .iter()
            .filter(|h| {
                h.name.contains("내과")
                    || h.address.contains("내과")
                    || h.specialty.iter().any(|s| s.contains("내과"))
            })
            .map(|h| h.id.as_str())
            .collect();
        let ids: Vec<&str> = found.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn open_internal_medicine_excludes_closed_clinic() {
        let c = catalog();
        let found = filter_hospitals(&c.hospitals, &query("", "내과", true));
        let names: Vec<&str> = found.iter().map(|h| h.name.as_str()).collect();

        assert!(!names.contains(&"종로성모내과"));
        assert_eq!(names, vec!["서울대학교병원", "강북삼성병원", "연세내과의원", "서울메디컬센터"]);
    }

    // ── Catalog seam ──────────────────────────────────────────────────────────

    #[test]
    fn catalog_lookups() {
        let c = catalog();
        assert_eq!(c.metric("gfr").map(|m| m.value), Some(92.0));
        assert!(c.metric("nope").is_none());
        assert_eq!(c.history("bmi").map(|h| h.history.len()), Some(10));
        assert!(c.history("hdl-cholesterol").is_none());
        assert_eq!(c.latest_activity().map(|a| a.steps), Some(8567));
    }
}
