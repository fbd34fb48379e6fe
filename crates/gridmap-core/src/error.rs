//! Unified error types for the gridmap ecosystem
//!
//! This module provides a common error type [`GridmapError`] that can
//! represent failures from any part of the workspace. Table-shape problems
//! and geometry-parse problems get dedicated variants so callers can match
//! on them; everything else funnels through conversion impls.
//!
//! # Example
//!
//! ```ignore
//! use gridmap_core::{GridmapError, GridmapResult};
//!
//! fn check(network: &Network) -> GridmapResult<()> {
//!     let tables = extract_geometries(network)?;
//!     Ok(())
//! }
//! ```

use polars::prelude::PolarsError;
use thiserror::Error;

/// Unified error type for all gridmap operations.
///
/// Missing-column and geometry-parse failures are fatal for the operation
/// that raised them; there are no recoverable variants.
#[derive(Error, Debug)]
pub enum GridmapError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input table does not carry a column the operation requires
    #[error("{table} table is missing expected column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A geometry string failed to parse as well-known text
    #[error("invalid geometry for {table} '{id}': {message}")]
    Geometry {
        table: &'static str,
        id: String,
        message: String,
    },

    /// Table-shape invariant violations (e.g. mismatched column lengths)
    #[error("schema error: {0}")]
    Schema(String),

    /// Errors raised by the underlying dataframe library
    #[error("dataframe error: {0}")]
    DataFrame(#[from] PolarsError),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using GridmapError.
pub type GridmapResult<T> = Result<T, GridmapError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for GridmapError {
    fn from(err: anyhow::Error) -> Self {
        GridmapError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for GridmapError {
    fn from(s: String) -> Self {
        GridmapError::Other(s)
    }
}

impl From<&str> for GridmapError {
    fn from(s: &str) -> Self {
        GridmapError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = GridmapError::MissingColumn {
            table: "buses",
            column: "carrier",
        };
        assert!(err.to_string().contains("buses"));
        assert!(err.to_string().contains("'carrier'"));
    }

    #[test]
    fn test_geometry_error_display() {
        let err = GridmapError::Geometry {
            table: "lines",
            id: "line1".into(),
            message: "expected a number".into(),
        };
        assert!(err.to_string().contains("invalid geometry"));
        assert!(err.to_string().contains("line1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GridmapError = io_err.into();
        assert!(matches!(err, GridmapError::Io(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> GridmapResult<()> {
            Err(GridmapError::Schema("test".into()))
        }

        fn outer() -> GridmapResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
