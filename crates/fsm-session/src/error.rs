use crate::store::StoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by session operations.
///
/// Only explicit auth-rejection responses are fatal and destroy the
/// session; anything else (network loss, timeouts, server hiccups) is
/// soft and degrades to the last known session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session rejected by server: {code} {location}")]
    Rejected {
        code: String,
        location: ErrorLocation,
    },

    #[error("Access forbidden {location}")]
    Forbidden { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("API error: {message} (status {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Timed out after {secs}s {location}")]
    Timeout { secs: u64, location: ErrorLocation },

    #[error("Credential storage error: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Whether the error must destroy the session.
    ///
    /// Fatal errors are hard rejections from the backend; everything
    /// else tolerates transient connectivity loss by keeping the stale
    /// session alive.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Forbidden { .. })
    }

    /// Creates a Rejected error at caller location.
    #[track_caller]
    pub fn rejected(code: impl Into<String>) -> Self {
        Self::Rejected {
            code: code.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a Forbidden error at caller location.
    #[track_caller]
    pub fn forbidden() -> Self {
        Self::Forbidden {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates an InvalidCredentials error at caller location.
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates an Api error at caller location.
    #[track_caller]
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a Network error at caller location.
    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a Timeout error at caller location.
    #[track_caller]
    pub fn timeout(secs: u64) -> Self {
        Self::Timeout {
            secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for SessionError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
