//! Dream Diary API client.
//!
//! One method per backend operation, all thin calls into a shared set of
//! request helpers. Every method issues exactly one request and returns the
//! parsed JSON body regardless of the HTTP status code: application-level
//! error envelopes are the caller's business. Only a transport failure or a
//! body that is not JSON raises an [`Error`].
//!
//! URL components in this context:
//!
//! ```text
//! http://127.0.0.1:8888/Dream/GetList?page=1&pageSize=10
//! \____________________/\____________/\_________________/
//!           |                  |               |
//!        base url            path            query
//! ```
pub mod admin;
pub mod ai;
pub mod analysis;
pub mod auth;
pub mod dream;
pub mod user;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::RequestBuilder;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::connection_info::ConnectionInfo;
use crate::query::{Query, ReqwestQuery};

/// Dream Diary API client.
///
/// Stateless and fire-once: no retries, no caching, no request coordination.
/// Concurrent calls are independent and callers are responsible for not
/// double-invoking non-idempotent operations.
pub struct Client {
    connection_info: ConnectionInfo,
    reqwest: reqwest::Client,
}

/// Errors raised by the client functions themselves. The backend encoding an
/// error in the JSON payload is not one of them; such payloads are returned
/// as a success value.
#[derive(Debug, Error)]
pub enum Error {
    /// The connection could not be established or was interrupted.
    #[error("Failed to get a response from the backend: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The response body is not valid JSON. Keeps the raw body for debugging.
    #[error("Failed to deserialize the response body as JSON: {source}")]
    Parse {
        data: Bytes,
        source: serde_json::Error,
    },
}

impl Client {
    #[must_use]
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            reqwest: reqwest::Client::new(),
        }
    }

    pub(crate) async fn get(&self, path: &str, params: Query) -> Result<Value, Error> {
        let mut request = self
            .reqwest
            .get(self.build_url(path))
            .header(CONTENT_TYPE, "application/json");

        // An empty query must not leave a trailing `?` on the URL.
        if !params.is_empty() {
            request = request.query(&ReqwestQuery::from(params));
        }

        self.send(request).await
    }

    pub(crate) async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Value, Error> {
        self.send(self.reqwest.post(self.build_url(path)).json(body)).await
    }

    pub(crate) async fn put_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Value, Error> {
        self.send(self.reqwest.put(self.build_url(path)).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, Error> {
        self.send(
            self.reqwest
                .delete(self.build_url(path))
                .header(CONTENT_TYPE, "application/json"),
        )
        .await
    }

    pub(crate) async fn delete_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Value, Error> {
        self.send(self.reqwest.delete(self.build_url(path)).json(body)).await
    }

    /// Multipart bodies carry no explicit `Content-Type` header here: the
    /// transport sets it together with the form boundary.
    pub(crate) async fn post_form(&self, path: &str, form: Form) -> Result<Value, Error> {
        self.send(self.reqwest.post(self.build_url(path)).multipart(form)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, Error> {
        let request = match &self.connection_info.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;

        tracing::debug!(url = %response.url(), status = %response.status(), "response received");

        let data = response.bytes().await?;

        serde_json::from_slice(&data).map_err(|source| Error::Parse { data, source })
    }

    fn build_url(&self, path: &str) -> String {
        let base_url = self.connection_info.base_url.as_str().trim_end_matches('/');
        format!("{base_url}{path}")
    }
}
