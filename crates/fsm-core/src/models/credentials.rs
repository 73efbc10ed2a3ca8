use crate::{CoreError, Result as CoreResult};

use serde::{Deserialize, Serialize};

/// Login credentials submitted to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reject obviously malformed credentials before they hit the network.
    pub fn validate(&self) -> CoreResult<()> {
        if self.email.is_empty() || !self.email.contains('@') {
            return Err(CoreError::validation("email must contain '@'"));
        }

        if self.password.is_empty() {
            return Err(CoreError::validation("password must not be empty"));
        }

        Ok(())
    }
}
