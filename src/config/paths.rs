//! Path management for expenses
//!
//! ## Path Resolution Order
//!
//! Config file:
//! 1. `EXPENSES_CONFIG` environment variable (if set)
//! 2. `~/.expenses.yaml`
//!
//! Database file:
//! 1. `EXPENSES_DATABASE` environment variable (if set)
//! 2. `expenses.sql` in the working directory

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::ExpensesError;

/// Default database filename, relative to the working directory
pub const DATABASE_FILE: &str = "expenses.sql";

/// Config filename inside the home directory
pub const CONFIG_FILE: &str = ".expenses.yaml";

/// Manages all paths used by expenses
#[derive(Debug, Clone)]
pub struct ExpensesPaths {
    config_file: PathBuf,
    database_file: PathBuf,
}

impl ExpensesPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined and
    /// `EXPENSES_CONFIG` is not set.
    pub fn new() -> Result<Self, ExpensesError> {
        let config_file = match std::env::var("EXPENSES_CONFIG") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_config()?,
        };
        let database_file = std::env::var("EXPENSES_DATABASE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DATABASE_FILE));

        Ok(Self {
            config_file,
            database_file,
        })
    }

    /// Create ExpensesPaths with explicit locations (useful for testing)
    pub fn with_files(config_file: PathBuf, database_file: PathBuf) -> Self {
        Self {
            config_file,
            database_file,
        }
    }

    /// Replace the config file location
    pub fn with_config_file(mut self, config_file: PathBuf) -> Self {
        self.config_file = config_file;
        self
    }

    /// Replace the database file location
    pub fn with_database_file(mut self, database_file: PathBuf) -> Self {
        self.database_file = database_file;
        self
    }

    /// Get the path to the YAML settings file
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> &Path {
        &self.database_file
    }
}

fn resolve_default_config() -> Result<PathBuf, ExpensesError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ExpensesError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensesPaths::with_files(
            temp_dir.path().join("cfg.yaml"),
            temp_dir.path().join("db.sql"),
        );

        assert_eq!(paths.config_file(), temp_dir.path().join("cfg.yaml"));
        assert_eq!(paths.database_file(), temp_dir.path().join("db.sql"));
    }

    #[test]
    fn test_overrides_replace_single_path() {
        let paths = ExpensesPaths::with_files("a.yaml".into(), "a.sql".into())
            .with_database_file("b.sql".into());

        assert_eq!(paths.config_file(), Path::new("a.yaml"));
        assert_eq!(paths.database_file(), Path::new("b.sql"));
    }
}
