//! Error types for jubgoong

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Ledger storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Ledger file corrupted: {0}")]
    Corrupted(String),

    #[error("Storage IO error: {0}")]
    IoError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Lot not found: {0}")]
    LotNotFound(String),

    #[error("Transport not found: {0}")]
    TransportNotFound(String),

    #[error("Weigh entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid weight: {0} (must be a positive number)")]
    InvalidWeight(f64),

    #[error("Cannot parse weight: {0}")]
    WeightParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
