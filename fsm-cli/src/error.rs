use thiserror::Error;

/// Top-level CLI failures, unifying the layers below it.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] fsm_config::ConfigError),

    #[error("{0}")]
    Session(#[from] fsm_session::SessionError),

    #[error("{0}")]
    Store(#[from] fsm_session::store::StoreError),

    #[error("{0}")]
    Client(#[from] fsm_client::ClientError),

    #[error("Not logged in. Run: fsm auth login --email <email> --password <password>")]
    NotAuthenticated,

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
