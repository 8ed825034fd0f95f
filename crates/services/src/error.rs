//! Shared error types for the services crate.

use thiserror::Error;

use bimari_core::model::{ServiceSettingsError, SymptomError};
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `Predictor`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PredictionError {
    #[error("prediction request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("prediction request timed out")]
    Timeout,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ConsultationService::submit`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConsultationError {
    #[error(transparent)]
    InvalidSymptoms(#[from] SymptomError),
    #[error("a consultation is already in progress")]
    Busy,
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl ConsultationError {
    /// Text shown to the user. Service failures are deliberately uniform.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            ConsultationError::InvalidSymptoms(_) => "Please describe your symptoms first.",
            ConsultationError::Busy => "Still analyzing your last request.",
            ConsultationError::Prediction(_) => "Failed to get prediction",
        }
    }
}

/// Errors emitted by `ReportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Settings(#[from] ServiceSettingsError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
