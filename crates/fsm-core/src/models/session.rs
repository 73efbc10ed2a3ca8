use crate::models::tokens::Tokens;
use crate::models::user::User;

use serde::{Deserialize, Serialize};

/// The authenticated session tracked client-side.
///
/// Created on successful login or restoration, destroyed on logout or
/// when the backend rejects the tokens outright.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: User,
    pub tokens: Tokens,
}

impl Session {
    pub fn new(user: User, tokens: Tokens) -> Self {
        Self { user, tokens }
    }
}
