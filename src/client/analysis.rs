//! Dream analysis operations: `/Analysis/*`. All require a token.
use serde_json::Value;

use super::{Client, Error};
use crate::endpoints::analysis;
use crate::query::Query;
use crate::requests::analysis::AnalysisPayload;

impl Client {
    /// Stores an analysis of the user's dreams over a date range.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn create_analysis(&self, payload: &AnalysisPayload) -> Result<Value, Error> {
        self.post_json(analysis::CREATE, payload).await
    }

    /// Fetches the user's analyses. `params` may carry pagination
    /// (`page`, `pageSize`).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_analysis_list(&self, params: Query) -> Result<Value, Error> {
        self.get(analysis::GET_LIST, params).await
    }

    /// Fetches one analysis.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_analysis_detail(&self, analysis_id: u64) -> Result<Value, Error> {
        self.get(&analysis::detail(analysis_id), Query::default()).await
    }

    /// Deletes an analysis.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn delete_analysis(&self, analysis_id: u64) -> Result<Value, Error> {
        self.delete(&analysis::delete(analysis_id)).await
    }
}
