pub mod credentials;
pub mod role;
pub mod session;
pub mod tokens;
pub mod user;
