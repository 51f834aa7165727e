//! Authentication operations: `/Auth/*` plus the token validity check.
//!
//! None of these require a token except [`Client::check_token`].
use serde_json::Value;

use super::{Client, Error};
use crate::endpoints::{self, auth};
use crate::query::Query;
use crate::requests::auth::{Credentials, PasswordUpdate, SignUpForm, VerifyForm};

impl Client {
    /// Logs a user in with their email and password.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, Error> {
        self.post_json(
            auth::LOGIN,
            &Credentials {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Signs a user up directly, without a verification code.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Value, Error> {
        self.post_json(
            auth::SIGN_UP,
            &SignUpForm {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Confirms a sign-up with the emailed verification code.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn verify_sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        verify_code: &str,
    ) -> Result<Value, Error> {
        self.post_json(
            auth::VERIFY,
            &VerifyForm {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                verify_code: verify_code.to_string(),
            },
        )
        .await
    }

    /// Asks the backend to email a password-reset verification code.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn request_password_reset(&self, email: &str) -> Result<Value, Error> {
        // The password is not needed at the code-sending stage.
        self.post_json(
            auth::RESET_PASSWORD,
            &Credentials {
                email: email.to_string(),
                password: String::new(),
            },
        )
        .await
    }

    /// Sets a new password, authorized by the emailed verification code.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn update_password(
        &self,
        email: &str,
        password: &str,
        verify_code: &str,
    ) -> Result<Value, Error> {
        self.post_json(
            auth::UPDATE_PASSWORD,
            &PasswordUpdate {
                email: email.to_string(),
                password: password.to_string(),
                verify_code: verify_code.to_string(),
            },
        )
        .await
    }

    /// Checks whether the connection's bearer token is still valid.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the backend is unreachable or replies with a body
    /// that is not JSON.
    pub async fn check_token(&self) -> Result<Value, Error> {
        self.get(endpoints::CHECK_TOKEN, Query::default()).await
    }
}
