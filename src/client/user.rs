//! User profile operations: `/User/*`. All require a token.
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::{Client, Error};
use crate::endpoints::user;
use crate::query::Query;
use crate::requests::user::ProfileUpdate;

impl Client {
    /// Fetches the profile of the user the token belongs to.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_user_info(&self) -> Result<Value, Error> {
        self.get(user::GET_INFO, Query::default()).await
    }

    /// Fetches the user's journaling statistics.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn get_user_statistics(&self) -> Result<Value, Error> {
        self.get(user::GET_STATISTICS, Query::default()).await
    }

    /// Updates the user's profile fields.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn update_user_info(&self, profile: &ProfileUpdate) -> Result<Value, Error> {
        self.put_json(user::UPDATE_INFO, profile).await
    }

    /// Uploads a new avatar image as a multipart form.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn upload_avatar(&self, file_name: &str, content: Vec<u8>) -> Result<Value, Error> {
        let part = Part::bytes(content).file_name(file_name.to_string());
        let form = Form::new().part("avatar", part);

        self.post_form(user::UPLOAD_AVATAR, form).await
    }
}
