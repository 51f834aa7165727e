//! Admin console operations: `/Admin/*`.
//!
//! Everything except [`Client::admin_login`] requires an admin token.
use serde_json::Value;

use super::{Client, Error};
use crate::endpoints::admin;
use crate::query::Query;
use crate::requests::admin::{LogDeletion, NewDreamType, NewEmotion};
use crate::requests::auth::Credentials;

impl Client {
    /// Logs an administrator in.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<Value, Error> {
        self.post_json(
            admin::LOGIN,
            &Credentials {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Fetches backend logs. `params` may carry filters and pagination
    /// (`logType`, `startDate`, `endDate`, `page`, `pageSize`).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_logs(&self, params: Query) -> Result<Value, Error> {
        self.get(admin::GET_LOGS, params).await
    }

    /// Deletes a batch of log entries by id.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn delete_logs(&self, log_ids: &[u64]) -> Result<Value, Error> {
        self.delete_json(
            admin::DELETE_LOGS,
            &LogDeletion {
                log_ids: log_ids.to_vec(),
            },
        )
        .await
    }

    /// Fetches the emotion catalog.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn admin_get_emotions(&self) -> Result<Value, Error> {
        self.get(admin::GET_EMOTIONS, Query::default()).await
    }

    /// Adds an emotion to the catalog.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn admin_add_emotion(&self, emotion_name: &str, color: &str) -> Result<Value, Error> {
        self.post_json(
            admin::ADD_EMOTION,
            &NewEmotion {
                emotion_name: emotion_name.to_string(),
                color: color.to_string(),
            },
        )
        .await
    }

    /// Removes an emotion from the catalog.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn admin_delete_emotion(&self, emotion_id: u64) -> Result<Value, Error> {
        self.delete(&admin::delete_emotion(emotion_id)).await
    }

    /// Fetches the dream type catalog.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn admin_get_dream_types(&self) -> Result<Value, Error> {
        self.get(admin::GET_DREAM_TYPES, Query::default()).await
    }

    /// Adds a dream type to the catalog.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn admin_add_dream_type(&self, type_name: &str, color: &str) -> Result<Value, Error> {
        self.post_json(
            admin::ADD_DREAM_TYPE,
            &NewDreamType {
                type_name: type_name.to_string(),
                color: color.to_string(),
            },
        )
        .await
    }

    /// Removes a dream type from the catalog.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn admin_delete_dream_type(&self, type_id: u64) -> Result<Value, Error> {
        self.delete(&admin::delete_dream_type(type_id)).await
    }

    /// Fetches the dreams users chose to publish. `params` may carry
    /// pagination (`page`, `pageSize`).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_public_dreams(&self, params: Query) -> Result<Value, Error> {
        self.get(admin::GET_PUBLIC_DREAMS, params).await
    }
}
