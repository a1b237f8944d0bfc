//! Large transaction report
//!
//! Splits outflows into large and normal by a configured threshold and keeps
//! running totals of income, normal outflow and large outflow.

use super::ReportFilter;
use crate::display::{format_euros, separator};
use crate::error::ExpensesResult;
use crate::models::EventRecord;
use crate::storage::{OrderConfig, QueryOption, Store, EVENT_FIELDS};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Outflows above a threshold, listed one by one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LargeReport {
    pub threshold: f64,
    /// Large outflows in date order
    pub large: Vec<EventRecord>,
    pub total_income: f64,
    /// Sum of normal outflows as a positive number
    pub normal_total: f64,
    /// Sum of large outflows as a positive number
    pub large_total: f64,
}

impl LargeReport {
    /// Read all matching events and classify them
    pub fn generate(store: &Store, filter: &ReportFilter, threshold: f64) -> ExpensesResult<Self> {
        let mut options = filter.options();
        options.push(QueryOption::Order(OrderConfig::order_by(["Year", "Month", "Day"])));

        let mut report = Self::new(threshold);
        store.for_each(&EVENT_FIELDS, &options, |event: EventRecord| {
            report.add(event);
            Ok(())
        })?;
        Ok(report)
    }

    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Build a report from events already in memory
    pub fn from_events<I>(events: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = EventRecord>,
    {
        let mut report = Self::new(threshold);
        for event in events {
            report.add(event);
        }
        report
    }

    /// Account for one event
    ///
    /// Silent outflows are never large; they still count as normal outflow.
    pub fn add(&mut self, event: EventRecord) {
        if event.is_income() {
            self.total_income += event.amount;
            return;
        }

        let magnitude = -event.amount;
        if magnitude > self.threshold && !event.is_silent() {
            self.large_total += magnitude;
            self.large.push(event);
        } else {
            self.normal_total += magnitude;
        }
    }

    pub fn monthly_income(&self) -> f64 {
        self.total_income / MONTHS_PER_YEAR
    }

    pub fn monthly_normal(&self) -> f64 {
        self.normal_total / MONTHS_PER_YEAR
    }

    pub fn monthly_large(&self) -> f64 {
        self.large_total / MONTHS_PER_YEAR
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Outflows larger than {}\n",
            format_euros(self.threshold)
        ));
        output.push_str(&separator(60));
        output.push('\n');
        for event in &self.large {
            output.push_str(&format!(
                "{}-{:02}-{:02} {:<30} {:>12}\n",
                event.year,
                event.month,
                event.day,
                event.name,
                format_euros(event.amount)
            ));
        }
        output.push_str(&separator(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<10} {:>12} {:>12}/m\n",
            "income",
            format_euros(self.total_income),
            format_euros(self.monthly_income())
        ));
        output.push_str(&format!(
            "{:<10} {:>12} {:>12}/m\n",
            "normal",
            format_euros(self.normal_total),
            format_euros(self.monthly_normal())
        ));
        output.push_str(&format!(
            "{:<10} {:>12} {:>12}/m\n",
            "large",
            format_euros(self.large_total),
            format_euros(self.monthly_large())
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;
    use chrono::NaiveDate;

    fn event(amount: f64, labels: &[Label]) -> EventRecord {
        EventRecord::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), amount, "x", "OP")
            .with_labels(labels.iter().copied().collect())
    }

    #[test]
    fn test_threshold_split() {
        let report = LargeReport::from_events(vec![event(-600.0, &[]), event(-400.0, &[])], 500.0);

        assert_eq!(report.large.len(), 1);
        assert_eq!(report.large[0].amount, -600.0);
        assert_eq!(report.large_total, 600.0);
        assert_eq!(report.normal_total, 400.0);
        assert_eq!(report.total_income, 0.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let report = LargeReport::from_events(vec![event(-500.0, &[])], 500.0);
        assert!(report.large.is_empty());
        assert_eq!(report.normal_total, 500.0);
    }

    #[test]
    fn test_income_and_monthly_views() {
        let report = LargeReport::from_events(
            vec![event(1200.0, &[]), event(0.0, &[]), event(-2400.0, &[])],
            500.0,
        );
        assert_eq!(report.total_income, 1200.0);
        assert_eq!(report.monthly_income(), 100.0);
        assert_eq!(report.monthly_large(), 200.0);
        assert_eq!(report.monthly_normal(), 0.0);
    }

    #[test]
    fn test_silent_outflow_is_not_large() {
        let report = LargeReport::from_events(vec![event(-900.0, &[Label::Silent])], 500.0);
        assert!(report.large.is_empty());
        assert_eq!(report.normal_total, 900.0);
    }

    #[test]
    fn test_generate_from_store() {
        let mut store = Store::open_in_memory().unwrap();
        store.create().unwrap();
        store
            .insert(&[
                event(-600.0, &[]),
                event(-400.0, &[]),
                event(-5000.0, &[Label::Exclude]),
                event(3000.0, &[]),
            ])
            .unwrap();

        let report = LargeReport::generate(&store, &ReportFilter::default(), 500.0).unwrap();
        assert_eq!(report.large_total, 600.0);
        assert_eq!(report.normal_total, 400.0);
        assert_eq!(report.total_income, 3000.0);
        assert!(report.format_terminal().contains("-600.00€"));
    }
}
