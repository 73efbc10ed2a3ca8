//! HTTP client for the field-service-management REST API.
//!
//! Thin JSON pass-through over the backend's resource endpoints, plus
//! the [`fsm_session::AuthApi`] implementation the session manager
//! drives.

pub(crate) mod auth_api;
pub(crate) mod client;
pub(crate) mod error;

pub use client::Client;
pub use error::{ClientError, Result as ApiClientResult};
