//! # checkup-core
//!
//! Pure classification and aggregation logic behind every checkup screen.
//!
//! This crate provides:
//! - `classify`: band-based tri-state status classification
//! - `aggregate`: overall status and per-status counts for a checkup
//! - `age`: health-age deviation and calendar age
//! - `alerts`: recency grouping, unread counts, copy-on-write read state
//! - `filter`: hospital directory search and metric status filters
//! - `present`: the shared status → label/colour table and gauge maths
//! - `state`: the session `ViewState` and its reducer
//! - `traits`: the `StatusClassifier` and `HealthCatalog` seams
//!
//! Every function is synchronous and deterministic. The current date is
//! always passed in by the caller.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkup_core::{aggregate::aggregate, alerts::group_by_recency};
//!
//! let summary = aggregate(&checkup.metrics);
//! let groups = group_by_recency(&alerts, today);
//! ```

pub mod age;
pub mod aggregate;
pub mod alerts;
pub mod classify;
pub mod filter;
pub mod present;
pub mod state;
pub mod traits;

pub use aggregate::{aggregate, CheckupSummary, StatusCounts};
pub use classify::{classify, BandClassifier};
pub use state::{reduce, ViewAction, ViewState};
pub use traits::{HealthCatalog, StatusClassifier};
