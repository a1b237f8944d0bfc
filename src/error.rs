//! Custom error types for expenses
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// The main error type for expenses operations
#[derive(Error, Debug)]
pub enum ExpensesError {
    /// Configuration file missing or unreadable
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed date or numeric field in a source row
    #[error("Parse error: {0}")]
    Parse(String),

    /// Database errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Row did not match the shape requested by the caller
    #[error("Decode error: {0}")]
    Decode(String),

    /// Statistics requested over zero values
    #[error("Cannot compute {0} of an empty dataset")]
    EmptyDataset(&'static str),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Several independent failures from one batch
    #[error("{}", JoinedErrors(.0))]
    Multiple(Vec<ExpensesError>),
}

struct JoinedErrors<'a>(&'a [ExpensesError]);

impl fmt::Display for JoinedErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl ExpensesError {
    /// Join the failures of a batch into a single error
    ///
    /// Returns `None` when every result succeeded. A single failure is
    /// returned as-is rather than wrapped.
    pub fn join<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = ExpensesError>,
    {
        let mut errors: Vec<_> = errors
            .into_iter()
            .flat_map(|e| match e {
                Self::Multiple(inner) => inner,
                other => vec![other],
            })
            .collect();
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpensesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for ExpensesError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::InvalidColumnIndex(_)
            | rusqlite::Error::InvalidColumnType(..)
            | rusqlite::Error::FromSqlConversionFailure(..)
            | rusqlite::Error::IntegralValueOutOfRange(..) => Self::Decode(err.to_string()),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl From<serde_yaml::Error> for ExpensesError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<csv::Error> for ExpensesError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

impl From<glob::PatternError> for ExpensesError {
    fn from(err: glob::PatternError) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for expenses operations
pub type ExpensesResult<T> = Result<T, ExpensesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpensesError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_empty_dataset_display() {
        let err = ExpensesError::EmptyDataset("median");
        assert_eq!(err.to_string(), "Cannot compute median of an empty dataset");
    }

    #[test]
    fn test_join_none_when_empty() {
        assert!(ExpensesError::join(Vec::new()).is_none());
    }

    #[test]
    fn test_join_single_is_unwrapped() {
        let err = ExpensesError::join(vec![ExpensesError::Io("disk".into())]).unwrap();
        assert!(matches!(err, ExpensesError::Io(_)));
    }

    #[test]
    fn test_join_collects_every_failure() {
        let err = ExpensesError::join(vec![
            ExpensesError::Config("no config".into()),
            ExpensesError::join(vec![
                ExpensesError::Import("OP".into()),
                ExpensesError::Import("S-Pankki".into()),
            ])
            .unwrap(),
        ])
        .unwrap();

        match &err {
            ExpensesError::Multiple(inner) => assert_eq!(inner.len(), 3),
            other => panic!("expected Multiple, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Configuration error: no config\nImport error: OP\nImport error: S-Pankki"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpensesError = io_err.into();
        assert!(matches!(err, ExpensesError::Io(_)));
    }

    #[test]
    fn test_from_sqlite_column_error_is_decode() {
        let err: ExpensesError = rusqlite::Error::InvalidColumnIndex(3).into();
        assert!(err.is_decode());
    }
}
