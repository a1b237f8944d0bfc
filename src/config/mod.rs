//! Configuration module for expenses
//!
//! This module provides configuration management including:
//! - Config file and database path resolution
//! - YAML settings with classification rules and report thresholds

pub mod paths;
pub mod settings;

pub use paths::ExpensesPaths;
pub use settings::{ExcludedRules, Settings, SilentRules};
