//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reports and storage layers.

pub mod make;
pub mod report;

pub use make::handle_make_command;
pub use report::{
    handle_large_command, handle_list_command, handle_outliers_command, handle_report_command,
};

use clap::Args;

use crate::config::{ExpensesPaths, Settings};
use crate::error::{ExpensesError, ExpensesResult};
use crate::reports::{DayOfYear, ReportFilter};
use crate::storage::Store;

/// Filters shared by the reporting commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only include this year (repeatable)
    #[arg(short, long = "year")]
    pub years: Vec<i32>,

    /// Only include events on or before this day of each year (MM-DD)
    #[arg(short, long)]
    pub until: Option<DayOfYear>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> ReportFilter {
        ReportFilter::default()
            .with_years(self.years.clone())
            .with_until(self.until)
    }
}

/// Load settings and open the database
///
/// Both are attempted; when both fail, both failures are reported.
pub fn open_session(paths: &ExpensesPaths) -> ExpensesResult<(Settings, Store)> {
    let settings = Settings::load(paths);
    let store = Store::open_existing(paths.database_file());

    match (settings, store) {
        (Ok(settings), Ok(store)) => Ok((settings, store)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(a), Err(b)) => Err(ExpensesError::Multiple(vec![a, b])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_session_reports_both_failures() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensesPaths::with_files(
            temp_dir.path().join("absent.yaml"),
            temp_dir.path().join("absent.sql"),
        );

        match open_session(&paths) {
            Err(ExpensesError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].is_config());
            }
            other => panic!("expected both failures, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_filter_args_keep_exclusion_default() {
        let args = FilterArgs {
            years: vec![2024],
            until: None,
        };
        let filter = args.to_filter();
        assert_eq!(filter.years, vec![2024]);
        assert_eq!(filter.exclude_labels, ReportFilter::default().exclude_labels);
    }
}
