//! A typed, async HTTP client for the Dream Diary backend API.
//!
//! The backend owns every entity (users, dream entries, analyses, chat
//! histories, admin resources). This crate only builds requests, attaches
//! credentials and relays the parsed JSON responses: application-level error
//! envelopes pass through untouched for the caller to interpret.
//!
//! ```no_run
//! use dream_diary_client::client::Client;
//! use dream_diary_client::connection_info::ConnectionInfo;
//! use url::Url;
//!
//! # async fn example() -> Result<(), dream_diary_client::client::Error> {
//! let base_url = Url::parse("http://127.0.0.1:8888").unwrap();
//!
//! let client = Client::new(ConnectionInfo::anonymous(base_url));
//!
//! let response = client.login("alice@example.com", "secret").await?;
//! # Ok(())
//! # }
//! ```
//!
//! The base URL is always injected through [`connection_info::ConnectionInfo`].
//! Use the `dream-diary-configuration` package to resolve it from a TOML file
//! or the environment.
pub mod client;
pub mod connection_info;
pub mod endpoints;
pub mod query;
pub mod requests;
pub mod routes;
