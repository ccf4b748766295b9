//! Error types for HealthVital operations.
//!
//! This module provides the main error type [`HealthVitalError`] which wraps
//! the error conditions of both generators.

use std::io;

use thiserror::Error;

use healthvital_core::architecture::ModelError;

/// The main error type for HealthVital operations.
#[derive(Debug, Error)]
pub enum HealthVitalError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for HealthVitalError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
