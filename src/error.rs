//! Application error types using thiserror
//!
//! Error hierarchy:
//! - TimeError: Timestamp fields that match neither accepted layout
//! - ReportError: Issues reading or decoding a report payload
//! - InputError: Issues reading or decoding a dependency list

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding a timestamp
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The value did not match the attempted layout
    #[error("malformed timestamp '{value}': expected layout {layout}")]
    Malformed { value: String, layout: &'static str },
}

/// Errors related to report payloads
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to read the payload file
    #[error("failed to read report {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not a valid report
    #[error("failed to decode report: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

/// Errors related to dependency list files
#[derive(Error, Debug)]
pub enum InputError {
    /// Failed to read the dependency list
    #[error("failed to read dependency list {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dependency list is not valid JSON
    #[error("failed to parse dependency list {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

impl TimeError {
    /// Creates a new Malformed error
    pub fn malformed(value: impl Into<String>, layout: &'static str) -> Self {
        TimeError::Malformed {
            value: value.into(),
            layout,
        }
    }

    /// Returns the offending input
    pub fn value(&self) -> &str {
        match self {
            TimeError::Malformed { value, .. } => value,
        }
    }
}

impl ReportError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Wraps a JSON decode failure
    pub fn decode(source: serde_json::Error) -> Self {
        ReportError::Decode { source }
    }
}

impl InputError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InputError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}
