use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Random source failed: {0}")]
    RandomSource(String),

    #[error("Cannot allocate population of {size}: {source}")]
    Allocation {
        size: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Invalid entity: {0}")]
    InvalidEntity(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
