/// CLI error types
use thiserror::Error;
use vidshelf_core::CatalogError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Admin login required (run `vidshelf login`)")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<vidshelf_storage::StorageError> for CliError {
    fn from(err: vidshelf_storage::StorageError) -> Self {
        // Convert StorageError -> CatalogError -> CliError
        CliError::Catalog(err.into())
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
