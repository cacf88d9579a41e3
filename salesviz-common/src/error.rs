//! Error types and utilities for salesviz

use thiserror::Error;

/// Result type alias for salesviz operations
pub type Result<T> = std::result::Result<T, SalesVizError>;

/// Main error type for salesviz operations
#[derive(Error, Debug)]
pub enum SalesVizError {
    /// I/O related errors (chart files, report file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset generation and aggregation errors
    #[error("Data error: {message}")]
    Data { message: String },

    /// Chart rendering and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SalesVizError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data error
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to SalesVizError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for SalesVizError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Chart rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = SalesVizError::new("test message");
        assert!(error.to_string().contains("test message"));

        let data_error = SalesVizError::data("bad date range");
        assert!(data_error.to_string().contains("Data error"));
        assert!(data_error.to_string().contains("bad date range"));

        let graph_error = SalesVizError::graph("empty aggregate");
        assert!(graph_error.to_string().contains("Graph error"));
        assert!(graph_error.to_string().contains("empty aggregate"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped = SalesVizError::with_source("Failed to write chart", io_error);

        assert!(wrapped.to_string().contains("Failed to write chart"));
        assert!(wrapped.source().is_some());

        let graph_source = SalesVizError::graph_with_source(
            "Rendering failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(graph_source.to_string().contains("Graph error"));
        assert!(graph_source.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: SalesVizError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(SalesVizError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
        assert!(returns_error().unwrap_err().to_string().contains("failure"));
    }

    #[test]
    fn test_error_display_formatting() {
        let error = SalesVizError::new("plain message");
        assert_eq!(format!("{}", error), "plain message");

        let data_error = SalesVizError::data("negative span");
        assert_eq!(format!("{}", data_error), "Data error: negative span");
    }
}
