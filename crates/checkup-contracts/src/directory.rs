//! Hospital directory entries.

use serde::{Deserialize, Serialize};

/// A nearby hospital or clinic.
///
/// `distance` is a pre-formatted label (e.g. `"2.3km"`), never computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub specialty: Vec<String>,
    pub address: String,
    pub distance: String,
    pub rating: f64,
    pub phone: String,
    pub is_open: bool,
    pub open_hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}
