//! Reports module for expenses
//!
//! Folds store rows into monthly income/outgoing totals, order statistics,
//! the large-transaction split and the silent-boundary outlier list.

pub mod boundaries;
pub mod large;
pub mod monthly;
pub mod stats;

pub use boundaries::BoundaryReport;
pub use large::LargeReport;
pub use monthly::{monthly_stats, MonthRow, MonthlyReport, MonthlyTotals};
pub use stats::{mean, median, Summary};

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::ExpensesError;
use crate::models::Label;
use crate::storage::QueryOption;

/// A month-day position within any year, e.g. `06-30`
///
/// Used to compare the same part of several years side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOfYear {
    pub month: u32,
    pub day: u32,
}

impl FromStr for DayOfYear {
    type Err = ExpensesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ExpensesError::Parse(format!("Invalid day of year '{}'. Use MM-DD", s));
        let (month, day) = s.split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        // 2000 is a leap year, so 02-29 is accepted
        NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;
        Ok(Self { month, day })
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Filters shared by every report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFilter {
    pub years: Vec<i32>,
    pub until: Option<DayOfYear>,
    pub exclude_labels: Vec<Label>,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self {
            years: Vec::new(),
            until: None,
            exclude_labels: vec![Label::Exclude],
        }
    }
}

impl ReportFilter {
    pub fn with_years(mut self, years: Vec<i32>) -> Self {
        self.years = years;
        self
    }

    pub fn with_until(mut self, until: Option<DayOfYear>) -> Self {
        self.until = until;
        self
    }

    /// Query options for this filter
    pub fn options(&self) -> Vec<QueryOption> {
        let mut options = Vec::new();
        if let Some(until) = self.until {
            options.push(QueryOption::DayOfYear {
                month: until.month,
                day: until.day,
            });
        }
        if !self.years.is_empty() {
            options.push(QueryOption::Years(self.years.clone()));
        }
        if !self.exclude_labels.is_empty() {
            options.push(QueryOption::WithoutLabels(self.exclude_labels.clone()));
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_of_year() {
        let cutoff: DayOfYear = "06-30".parse().unwrap();
        assert_eq!(cutoff, DayOfYear { month: 6, day: 30 });
        assert_eq!(cutoff.to_string(), "06-30");
        assert!("02-29".parse::<DayOfYear>().is_ok());
    }

    #[test]
    fn test_reject_invalid_day_of_year() {
        assert!("13-01".parse::<DayOfYear>().is_err());
        assert!("02-30".parse::<DayOfYear>().is_err());
        assert!("0630".parse::<DayOfYear>().is_err());
    }

    #[test]
    fn test_default_filter_drops_excluded() {
        let options = ReportFilter::default().options();
        assert_eq!(options, vec![QueryOption::WithoutLabels(vec![Label::Exclude])]);
    }

    #[test]
    fn test_filter_options() {
        let filter = ReportFilter::default()
            .with_years(vec![2023, 2024])
            .with_until(Some(DayOfYear { month: 3, day: 31 }));

        assert_eq!(
            filter.options(),
            vec![
                QueryOption::DayOfYear { month: 3, day: 31 },
                QueryOption::Years(vec![2023, 2024]),
                QueryOption::WithoutLabels(vec![Label::Exclude]),
            ]
        );
    }
}
