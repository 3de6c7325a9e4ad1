//! # checkup-contracts
//!
//! Shared data model and error types for the health checkup status engine.
//!
//! Every crate in the workspace imports from here. No business logic lives in
//! this crate, only data definitions and error types. JSON field names follow
//! the camelCase layout of the catalog document.

pub mod alert;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod metric;
pub mod profile;
pub mod status;

pub use alert::{AlertKind, HealthAlert};
pub use catalog::Catalog;
pub use directory::Hospital;
pub use error::{CheckupError, CheckupResult};
pub use metric::{HealthCheckup, HealthHistory, HealthMetric, MetricHistory};
pub use profile::{ActivityData, Gender, MedicalVisit, Medication, UserProfile};
pub use status::{HealthStatus, Range};
