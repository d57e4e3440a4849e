//! Unified application error type.
//! All modules (store, core, input, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Failed to access {table}: {reason}")]
    Persistence { table: String, reason: String },

    #[error("Failed to write to {log}: {reason}")]
    Logging { log: String, reason: String },

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Transaction ID {0} not found")]
    NotFound(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Reporting
    // ---------------------------
    #[error("Chart error: {0}")]
    Chart(String),
}

impl AppError {
    /// Wrap any I/O or CSV failure on a table into a `Persistence` error.
    pub fn persistence(table: &str, err: impl std::fmt::Display) -> Self {
        AppError::Persistence {
            table: table.to_string(),
            reason: err.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
