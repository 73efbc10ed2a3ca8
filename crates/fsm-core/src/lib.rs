pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::credentials::Credentials;
pub use models::role::Role;
pub use models::session::Session;
pub use models::tokens::Tokens;
pub use models::user::User;

#[cfg(test)]
mod tests;
