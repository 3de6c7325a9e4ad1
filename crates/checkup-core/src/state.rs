//! Per-session view state and its reducer.
//!
//! The inbox read flags and the list filters are the only things that change
//! while the application runs. They live in one `ViewState` value owned by
//! the presentation layer and advance only through `reduce`, which consumes
//! the old state and returns the next one.

use chrono::NaiveDate;
use tracing::debug;

use checkup_contracts::{HealthAlert, HealthCheckup, HealthMetric, HealthStatus, Hospital};

use crate::{
    alerts::{self, AlertGroups},
    filter::{self, HospitalQuery, StatusFilter},
};

/// Everything the user can change during a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub inbox: Vec<HealthAlert>,
    pub status_filter: StatusFilter,
    pub hospital_query: HospitalQuery,
}

/// A user intent.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    MarkRead(String),
    MarkAllRead,
    DeleteRead,
    /// Replace the inbox, e.g. with the catalog's alerts on reload.
    ResetAlerts(Vec<HealthAlert>),
    /// Select a status; selecting the active one returns to `All`.
    ToggleStatusFilter(HealthStatus),
    SetStatusFilter(StatusFilter),
    SetQuery(String),
    SetSpecialty(String),
    SetOpenOnly(bool),
}

impl ViewState {
    /// Fresh session state seeded with the catalog's alerts.
    pub fn new(alerts: Vec<HealthAlert>) -> Self {
        Self {
            inbox: alerts,
            ..Self::default()
        }
    }

    pub fn unread_count(&self) -> usize {
        alerts::count_unread(&self.inbox)
    }

    pub fn inbox_groups(&self, today: NaiveDate) -> AlertGroups {
        alerts::group_by_recency(&self.inbox, today)
    }

    pub fn visible_metrics<'a>(&self, checkup: &'a HealthCheckup) -> Vec<&'a HealthMetric> {
        filter::filter_metrics(&checkup.metrics, self.status_filter)
    }

    pub fn visible_hospitals<'a>(&self, hospitals: &'a [Hospital]) -> Vec<&'a Hospital> {
        filter::filter_hospitals(hospitals, &self.hospital_query)
    }
}

/// Apply `action` to `state`.
pub fn reduce(state: ViewState, action: ViewAction) -> ViewState {
    debug!(?action, "reducing view action");

    match action {
        ViewAction::MarkRead(id) => ViewState {
            inbox: alerts::mark_read(&state.inbox, &id),
            ..state
        },
        ViewAction::MarkAllRead => ViewState {
            inbox: alerts::mark_all_read(&state.inbox),
            ..state
        },
        ViewAction::DeleteRead => ViewState {
            inbox: alerts::delete_read(&state.inbox),
            ..state
        },
        ViewAction::ResetAlerts(inbox) => ViewState { inbox, ..state },
        ViewAction::ToggleStatusFilter(status) => {
            let status_filter = if state.status_filter == StatusFilter::Only(status) {
                StatusFilter::All
            } else {
                StatusFilter::Only(status)
            };
            ViewState { status_filter, ..state }
        }
        ViewAction::SetStatusFilter(status_filter) => ViewState { status_filter, ..state },
        ViewAction::SetQuery(query) => ViewState {
            hospital_query: HospitalQuery {
                query,
                ..state.hospital_query
            },
            ..state
        },
        ViewAction::SetSpecialty(specialty) => ViewState {
            hospital_query: HospitalQuery {
                specialty,
                ..state.hospital_query
            },
            ..state
        },
        ViewAction::SetOpenOnly(open_only) => ViewState {
            hospital_query: HospitalQuery {
                open_only,
                ..state.hospital_query
            },
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use checkup_contracts::AlertKind;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alert(id: &str, is_read: bool) -> HealthAlert {
        HealthAlert {
            id: id.to_string(),
            kind: AlertKind::Info,
            title: String::new(),
            message: String::new(),
            metric_id: None,
            date: ymd(2024, 11, 16),
            is_read,
            action_url: None,
        }
    }

    fn session() -> ViewState {
        ViewState::new(vec![alert("a", false), alert("b", false), alert("c", true)])
    }

    #[test]
    fn new_state_has_no_filters() {
        let state = session();
        assert_eq!(state.status_filter, StatusFilter::All);
        assert_eq!(state.hospital_query, HospitalQuery::default());
        assert_eq!(state.unread_count(), 2);
    }

    #[test]
    fn inbox_actions() {
        let state = reduce(session(), ViewAction::MarkRead("a".to_string()));
        assert_eq!(state.unread_count(), 1);

        let state = reduce(state, ViewAction::DeleteRead);
        let ids: Vec<&str> = state.inbox.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);

        let state = reduce(state, ViewAction::MarkAllRead);
        assert_eq!(state.unread_count(), 0);

        let state = reduce(state, ViewAction::ResetAlerts(vec![alert("z", false)]));
        assert_eq!(state.unread_count(), 1);
        assert_eq!(state.inbox_groups(ymd(2024, 11, 16)).today.len(), 1);
    }

    #[test]
    fn toggling_active_status_returns_to_all() {
        let state = reduce(session(), ViewAction::ToggleStatusFilter(HealthStatus::Caution));
        assert_eq!(state.status_filter, StatusFilter::Only(HealthStatus::Caution));

        let state = reduce(state, ViewAction::ToggleStatusFilter(HealthStatus::Safe));
        assert_eq!(state.status_filter, StatusFilter::Only(HealthStatus::Safe));

        let state = reduce(state, ViewAction::ToggleStatusFilter(HealthStatus::Safe));
        assert_eq!(state.status_filter, StatusFilter::All);
    }

    #[test]
    fn hospital_query_fields_update_independently() {
        let state = reduce(session(), ViewAction::SetQuery("종로".to_string()));
        let state = reduce(state, ViewAction::SetSpecialty("내과".to_string()));
        let state = reduce(state, ViewAction::SetOpenOnly(true));

        assert_eq!(
            state.hospital_query,
            HospitalQuery {
                query: "종로".to_string(),
                specialty: "내과".to_string(),
                open_only: true,
            }
        );
        // Filter changes leave the inbox alone.
        assert_eq!(state.inbox.len(), 3);
    }
}
