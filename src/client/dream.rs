//! Dream entry operations: `/Dream/*`. All require a token.
use serde_json::Value;

use super::{Client, Error};
use crate::endpoints::dream;
use crate::query::Query;
use crate::requests::dream::DreamPayload;

impl Client {
    /// Creates a dream entry.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn create_dream(&self, payload: &DreamPayload) -> Result<Value, Error> {
        self.post_json(dream::CREATE, payload).await
    }

    /// Fetches the user's dream entries. `params` may carry pagination and
    /// filters (`page`, `pageSize`, `dateFrom`, `dateTo`, `keyword`).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_dreams_list(&self, params: Query) -> Result<Value, Error> {
        self.get(dream::GET_LIST, params).await
    }

    /// Fetches one dream entry.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_dream_detail(&self, dream_id: u64) -> Result<Value, Error> {
        self.get(&dream::detail(dream_id), Query::default()).await
    }

    /// Replaces a dream entry.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn update_dream(&self, dream_id: u64, payload: &DreamPayload) -> Result<Value, Error> {
        self.put_json(&dream::update(dream_id), payload).await
    }

    /// Deletes a dream entry.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn delete_dream(&self, dream_id: u64) -> Result<Value, Error> {
        self.delete(&dream::delete(dream_id)).await
    }

    /// Fetches the emotion catalog used to tag dreams.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_emotions(&self) -> Result<Value, Error> {
        self.get(dream::GET_EMOTIONS, Query::default()).await
    }

    /// Fetches the dream type catalog.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_dream_types(&self) -> Result<Value, Error> {
        self.get(dream::GET_DREAM_TYPES, Query::default()).await
    }
}
