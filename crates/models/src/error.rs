use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body returned for request-level failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum SignError {
    #[error("No text provided")]
    NoText,

    #[error("Empty text provided")]
    EmptyText,

    #[error("Unsupported language. Use 'isl' or 'asl'")]
    UnsupportedLanguage { language: String },

    #[error("Video not found")]
    VideoNotFound { filename: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache error: {reason}")]
    Cache { reason: String },

    #[error("Configuration error: {reason}")]
    Config { reason: String },

    #[error("Internal server error: {reason}")]
    Internal { reason: String },
}

impl SignError {
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            SignError::NoText => 400,
            SignError::EmptyText => 400,
            // Raised from inside the translator, so it surfaces as a server error
            SignError::UnsupportedLanguage { .. } => 500,
            SignError::VideoNotFound { .. } => 404,
            SignError::Io(_) => 500,
            SignError::Cache { .. } => 500,
            SignError::Config { .. } => 500,
            SignError::Internal { .. } => 500,
        }
    }
}
