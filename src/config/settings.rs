//! User settings for expenses
//!
//! Loaded from a YAML file. Holds the statement directory, the report
//! thresholds and the classification rule lists.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensesPaths;
use crate::error::ExpensesError;

/// Rules and bounds for silent transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SilentRules {
    /// Amounts below this are reported as outliers
    #[serde(default)]
    pub min: f64,

    /// Amounts above this are reported as outliers
    #[serde(default)]
    pub max: f64,

    /// Memo texts that mark a transaction silent
    #[serde(default)]
    pub explanation: Vec<String>,

    /// Payee names that mark a transaction silent
    #[serde(default)]
    pub names: Vec<String>,
}

/// Rules for transactions left out of totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExcludedRules {
    #[serde(default)]
    pub accounts: Vec<String>,

    #[serde(default)]
    pub explanation: Vec<String>,

    #[serde(default)]
    pub names: Vec<String>,
}

/// User settings for expenses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory holding one subdirectory per bank
    #[serde(default)]
    pub directory: PathBuf,

    /// Outflows larger than this are listed individually
    #[serde(default)]
    pub large: f64,

    #[serde(default)]
    pub silent: SilentRules,

    #[serde(default)]
    pub excluded: ExcludedRules,
}

impl Settings {
    /// Load settings from the config file
    ///
    /// # Errors
    ///
    /// A missing or malformed file is a configuration error.
    pub fn load(paths: &ExpensesPaths) -> Result<Self, ExpensesError> {
        let config_path = paths.config_file();

        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            ExpensesError::Config(format!(
                "Failed to read {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_yaml(&contents).map_err(|e| {
            ExpensesError::Config(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Parse settings from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ExpensesError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Render settings back to YAML
    pub fn to_yaml(&self) -> Result<String, ExpensesError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
