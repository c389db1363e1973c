use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoverError {
    #[error("Unknown command token: {token}")]
    UnknownToken { token: String },

    #[error("No alignment reaches exit: {exit}")]
    NoAlignment { exit: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RoverError>;
