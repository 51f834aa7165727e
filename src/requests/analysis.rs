//! Request bodies for `/Analysis/*` operations.
use serde::Serialize;

/// A dream analysis over a date range, for `/Analysis/Create`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub start_date: String,
    pub end_date: String,
    pub result: String,
    pub recommendation: String,
}
