use crate::models::lighthouse::audit::Audits;
use crate::models::lighthouse::category::Categories;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The subset of a Lighthouse JSON report this crate reads. Unknown fields
/// are ignored.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub categories: Categories,
    pub audits: Audits,
    #[serde(default)]
    pub requested_url: Option<String>,
    #[serde(default)]
    pub final_url: Option<String>,
    #[serde(default)]
    pub lighthouse_version: Option<String>,
    #[serde(default)]
    pub fetch_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub runtime_error: Option<RuntimeError>,
}

/// Set by Lighthouse when the page could not be loaded; scores are then
/// meaningless even though the tool exited cleanly.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuntimeError {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}
