use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TendaraError {
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Source unreadable: {path} - {message}")]
    SourceUnreadable { path: String, message: String },

    #[error("Extraction error: {message}")]
    Extraction { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

impl TendaraError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn source_unreadable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::SourceUnreadable { .. } => "SOURCE_UNREADABLE",
            Self::Extraction { .. } => "EXTRACTION_ERROR",
            Self::Export { .. } => "EXPORT_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }
}

pub type TendaraResult<T> = Result<T, TendaraError>;

// Conversion from common error types
impl From<csv::Error> for TendaraError {
    fn from(error: csv::Error) -> Self {
        Self::export(error.to_string())
    }
}

impl From<serde_json::Error> for TendaraError {
    fn from(error: serde_json::Error) -> Self {
        Self::export(error.to_string())
    }
}
