//! Typed request bodies for the backend operations.
//!
//! Key casing follows the wire contract: the credential forms of the auth
//! and admin consoles use PascalCase keys, everything else camelCase. The
//! client forwards these payloads without validating them; validation is
//! entirely server-side.
pub mod admin;
pub mod ai;
pub mod analysis;
pub mod auth;
pub mod dream;
pub mod user;
