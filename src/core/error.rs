//! Error types for the bodygraph engine
//!
//! This module provides structured error handling using thiserror.

use thiserror::Error;

use super::bodies::{Body, ChartSide};

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while decoding positions or building charts
#[derive(Error, Debug)]
pub enum ChartError {
    /// Longitude is NaN or infinite
    #[error("Invalid longitude: {value} is not a finite number of degrees")]
    InvalidLongitude { value: f64 },

    /// A required body is absent from one side of the chart
    #[error("Missing {body} activation in the {chart} chart")]
    MissingActivation { body: Body, chart: ChartSide },

    /// Structurally invalid input that is not a longitude
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The ephemeris collaborator could not provide a position
    #[error("Ephemeris error: {message}")]
    Ephemeris { message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// IO error while reading inputs or configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ChartError>,
    },
}

impl ChartError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ChartError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ChartError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChartError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an ephemeris error
    pub fn ephemeris(message: impl Into<String>) -> Self {
        ChartError::Ephemeris {
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        match self {
            ChartError::InvalidLongitude { .. }
            | ChartError::MissingActivation { .. }
            | ChartError::InvalidInput { .. } => true,
            ChartError::WithContext { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}
