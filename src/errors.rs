// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CabinetError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}

impl CabinetError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CabinetError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        CabinetError::Logging(msg.into())
    }
}

pub type CabinetResult<T> = Result<T, CabinetError>;
