//! Client-side session management for the field-service dashboard.
//!
//! An explicit [`SessionManager`] drives the session lifecycle through
//! two injected seams: a [`store::CredentialStore`] hierarchy behind a
//! [`store::Vault`] for persistence, and an [`AuthApi`] for the network.

pub mod api;
pub mod error;
pub mod manager;
pub mod state;
pub mod store;
pub mod throttle;

pub use api::{AuthApi, LoginResponse};
pub use error::{Result, SessionError};
pub use manager::SessionManager;
pub use state::SessionState;
pub use store::{CredentialStore, FileStore, MemoryStore, Vault};
pub use throttle::MinIntervalGate;

#[cfg(test)]
mod tests;
