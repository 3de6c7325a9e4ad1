//! Stable predicate filters over the hospital directory and checkup metrics.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use checkup_contracts::{HealthMetric, HealthStatus, Hospital};

/// Specialty selector that matches every hospital.
pub const ALL_SPECIALTIES: &str = "전체";

/// Specialty chips offered by the directory screen, in display order.
pub const SPECIALTY_FILTERS: [&str; 6] = [
    ALL_SPECIALTIES,
    "내과",
    "심장내과",
    "내분비내과",
    "가정의학과",
    "건강검진센터",
];

/// Search criteria for the hospital directory. All three predicates are ANDed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalQuery {
    /// Case-sensitive substring matched against name, address and each
    /// specialty tag. Empty matches everything.
    pub query: String,
    /// Exact specialty tag, or `전체` / `all` for no restriction.
    pub specialty: String,
    pub open_only: bool,
}

impl Default for HospitalQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            specialty: ALL_SPECIALTIES.to_string(),
            open_only: false,
        }
    }
}

impl HospitalQuery {
    pub fn matches(&self, hospital: &Hospital) -> bool {
        let q = self.query.as_str();
        let matches_search = hospital.name.contains(q)
            || hospital.address.contains(q)
            || hospital.specialty.iter().any(|s| s.contains(q));

        let matches_specialty = is_all_specialties(&self.specialty)
            || hospital.specialty.iter().any(|s| *s == self.specialty);

        let matches_open = !self.open_only || hospital.is_open;

        matches_search && matches_specialty && matches_open
    }
}

fn is_all_specialties(tag: &str) -> bool {
    tag == ALL_SPECIALTIES || tag.eq_ignore_ascii_case("all")
}

/// Hospitals matching `query`, in input order.
pub fn filter_hospitals<'a>(hospitals: &'a [Hospital], query: &HospitalQuery) -> Vec<&'a Hospital> {
    hospitals.iter().filter(|h| query.matches(h)).collect()
}

/// Status selector for the checkup list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(HealthStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: HealthStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    /// Parses `safe`, `caution`, `danger`; anything else selects `All`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s.trim().to_ascii_lowercase().as_str() {
            "safe" => StatusFilter::Only(HealthStatus::Safe),
            "caution" => StatusFilter::Only(HealthStatus::Caution),
            "danger" => StatusFilter::Only(HealthStatus::Danger),
            _ => StatusFilter::All,
        };
        Ok(filter)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

/// Metrics matching `filter`, in input order.
pub fn filter_metrics(metrics: &[HealthMetric], filter: StatusFilter) -> Vec<&HealthMetric> {
    metrics.iter().filter(|m| filter.matches(m.status)).collect()
}
