use thiserror::Error;

use crate::ProviderType;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find person {0}")]
    PersonNotFound(i64),

    #[error("No provider found for type: {0}")]
    ProviderNotFound(ProviderType),

    #[error("Provider already registered for type: {0}")]
    DuplicateProvider(ProviderType),

    #[error("Unknown provider type: {0}")]
    UnknownProviderType(String),

    #[error("Failed to read person data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
