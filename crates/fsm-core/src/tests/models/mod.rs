mod credentials;
mod role;
mod tokens;
mod user;
