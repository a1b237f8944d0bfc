//! Event record model
//!
//! One normalized bank transaction as produced by an importer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::labels::{Label, LabelSet};
use super::month::YearMonth;

/// A bank account event
///
/// Built from a [`NaiveDate`], so the year/month/day triple is always a
/// valid calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,

    /// Free-text memo from the statement
    pub explanation: String,

    /// Payee or counterparty
    pub name: String,

    /// Source account identifier
    pub account: String,

    /// Signed amount (positive for inflow, negative for outflow)
    pub amount: f64,

    pub labels: LabelSet,

    /// Source institution tag, e.g. "OP"
    pub bank: String,
}

impl EventRecord {
    /// Create a new unlabeled event
    pub fn new(
        date: NaiveDate,
        amount: f64,
        name: impl Into<String>,
        bank: impl Into<String>,
    ) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            explanation: String::new(),
            name: name.into(),
            account: String::new(),
            amount,
            labels: LabelSet::new(),
            bank: bank.into(),
        }
    }

    /// Set the memo text
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Set the source account
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Replace the labels
    pub fn with_labels(mut self, labels: LabelSet) -> Self {
        self.labels = labels;
        self
    }

    /// The calendar date of the event
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    pub fn is_silent(&self) -> bool {
        self.labels.contains(Label::Silent)
    }

    pub fn is_excluded(&self) -> bool {
        self.labels.contains(Label::Exclude)
    }

    /// Zero counts as income
    pub fn is_income(&self) -> bool {
        self.amount >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let event = EventRecord::new(date, -12.5, "Kauppa", "OP");

        assert_eq!((event.year, event.month, event.day), (2024, 2, 29));
        assert_eq!(event.date(), Some(date));
        assert_eq!(event.year_month().to_string(), "2024-02");
        assert!(!event.is_income());
    }

    #[test]
    fn test_zero_amount_is_income() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(EventRecord::new(date, 0.0, "", "OP").is_income());
    }

    #[test]
    fn test_label_helpers() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let event = EventRecord::new(date, 1.0, "x", "OP")
            .with_labels([Label::Silent].into_iter().collect());

        assert!(event.is_silent());
        assert!(!event.is_excluded());
    }
}
