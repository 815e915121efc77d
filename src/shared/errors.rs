use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
