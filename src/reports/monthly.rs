//! Monthly income/outgoing report
//!
//! Grouping happens in the database; this module keys the grouped sums by
//! month, merges the income and outgoing streams and summarizes them.

use std::collections::{BTreeMap, BTreeSet};

use super::stats::Summary;
use super::ReportFilter;
use crate::display::{format_euros, separator};
use crate::error::ExpensesResult;
use crate::models::YearMonth;
use crate::storage::{AmountCondition, OrderConfig, QueryOption, Store};

/// Summed amount per month
pub type MonthlyTotals = BTreeMap<YearMonth, f64>;

/// Sum amounts per month
///
/// Groups by year and month unless a later option overrides the order. One
/// row per month is expected; a repeated month overwrites the earlier row.
pub fn monthly_stats(store: &Store, options: &[QueryOption]) -> ExpensesResult<MonthlyTotals> {
    let mut all = vec![QueryOption::Order(OrderConfig::group_by(["Year", "Month"]))];
    all.extend_from_slice(options);

    let mut totals = MonthlyTotals::new();
    store.for_each(
        &["Year", "Month", "sum(Amount)"],
        &all,
        |(year, month, amount): (i32, u32, f64)| {
            totals.insert(YearMonth::new(year, month), amount);
            Ok(())
        },
    )?;
    Ok(totals)
}

/// One line of the monthly report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthRow {
    pub month: YearMonth,
    pub incoming: f64,
    /// Outflow as a positive number
    pub outgoing: f64,
}

/// Income and outgoing per month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub rows: Vec<MonthRow>,
}

impl MonthlyReport {
    /// Query both streams and merge them
    pub fn generate(store: &Store, filter: &ReportFilter) -> ExpensesResult<Self> {
        let base = filter.options();

        let mut income_options = base.clone();
        income_options.push(QueryOption::Amount(AmountCondition::income()));
        let mut outgoing_options = base;
        outgoing_options.push(QueryOption::Amount(AmountCondition::outgoing()));

        let incoming = monthly_stats(store, &income_options)?;
        let outgoing = monthly_stats(store, &outgoing_options)?;
        Ok(Self::assemble(&incoming, &outgoing))
    }

    /// Merge income and outgoing totals
    ///
    /// Months come from either map, in chronological order. A month missing
    /// from one side shows 0 for that side.
    pub fn assemble(incoming: &MonthlyTotals, outgoing: &MonthlyTotals) -> Self {
        let months: BTreeSet<YearMonth> = incoming.keys().chain(outgoing.keys()).copied().collect();

        let rows = months
            .into_iter()
            .map(|month| MonthRow {
                month,
                incoming: incoming.get(&month).copied().unwrap_or(0.0),
                outgoing: outgoing.get(&month).map(|v| -v).unwrap_or(0.0),
            })
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn incoming_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.incoming).collect()
    }

    pub fn outgoing_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.outgoing).collect()
    }

    /// Median and mean of income and of outgoing
    ///
    /// Fails with an empty-dataset error when there are no months.
    pub fn summary(&self) -> ExpensesResult<(Summary, Summary)> {
        Ok((
            Summary::from_values(&self.incoming_values())?,
            Summary::from_values(&self.outgoing_values())?,
        ))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> ExpensesResult<String> {
        let mut output = String::new();

        for row in &self.rows {
            output.push_str(&format!(
                "{} in: {:>10} out: {:>10}\n",
                row.month,
                format_euros(row.incoming),
                format_euros(row.outgoing)
            ));
        }

        if self.is_empty() {
            output.push_str("No events found.\n");
            return Ok(output);
        }

        let (incoming, outgoing) = self.summary()?;
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "median:\nin: {:>10}/m out: {:>10}/m\n",
            format_euros(incoming.median),
            format_euros(outgoing.median)
        ));
        output.push_str(&format!(
            "average:\nin: {:>10}/m out: {:>10}/m\n",
            format_euros(incoming.mean),
            format_euros(outgoing.mean)
        ));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventRecord, Label};
    use chrono::NaiveDate;

    fn ym(s: &str) -> YearMonth {
        let (y, m) = s.split_once('-').unwrap();
        YearMonth::new(y.parse().unwrap(), m.parse().unwrap())
    }

    fn totals(entries: &[(&str, f64)]) -> MonthlyTotals {
        entries.iter().map(|(k, v)| (ym(k), *v)).collect()
    }

    fn event(y: i32, m: u32, d: u32, amount: f64, labels: &[Label]) -> EventRecord {
        EventRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), amount, "x", "OP")
            .with_labels(labels.iter().copied().collect())
    }

    fn store_with(events: &[EventRecord]) -> Store {
        let mut store = Store::open_in_memory().unwrap();
        store.create().unwrap();
        store.insert(events).unwrap();
        store
    }

    #[test]
    fn test_assemble_union_of_months() {
        let incoming = totals(&[("2024-01", 100.0), ("2024-02", 50.0)]);
        let outgoing = totals(&[("2024-01", -40.0)]);

        let report = MonthlyReport::assemble(&incoming, &outgoing);
        let months: Vec<String> = report.rows.iter().map(|r| r.month.to_string()).collect();

        assert_eq!(months, vec!["2024-01", "2024-02"]);
        assert_eq!(report.rows[0].outgoing, 40.0);
        assert_eq!(report.rows[1].incoming, 50.0);
        assert_eq!(report.rows[1].outgoing, 0.0);
    }

    #[test]
    fn test_assemble_outgoing_only_month() {
        let incoming = totals(&[("2024-03", 10.0)]);
        let outgoing = totals(&[("2023-12", -5.0)]);

        let report = MonthlyReport::assemble(&incoming, &outgoing);
        assert_eq!(report.rows[0].month, ym("2023-12"));
        assert_eq!(report.rows[0].incoming, 0.0);
        assert_eq!(report.rows[0].outgoing, 5.0);
    }

    #[test]
    fn test_monthly_stats_groups_by_month() {
        let store = store_with(&[
            event(2024, 1, 1, -10.0, &[]),
            event(2024, 1, 20, -5.0, &[]),
            event(2024, 2, 3, -1.0, &[]),
        ]);

        let stats = monthly_stats(&store, &[]).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[&ym("2024-01")], -15.0);
        assert_eq!(stats[&ym("2024-02")], -1.0);
    }

    #[test]
    fn test_generate_splits_by_sign_and_drops_excluded() {
        let store = store_with(&[
            event(2024, 1, 5, 2000.0, &[]),
            event(2024, 1, 6, -300.0, &[]),
            event(2024, 1, 7, -999.0, &[Label::Exclude]),
            event(2024, 2, 1, 0.0, &[]),
            event(2024, 2, 2, -100.0, &[Label::Silent]),
        ]);

        let report = MonthlyReport::generate(&store, &ReportFilter::default()).unwrap();

        assert_eq!(
            report.rows,
            vec![
                MonthRow {
                    month: ym("2024-01"),
                    incoming: 2000.0,
                    outgoing: 300.0
                },
                MonthRow {
                    month: ym("2024-02"),
                    incoming: 0.0,
                    outgoing: 100.0
                },
            ]
        );
    }

    #[test]
    fn test_summary_uses_negated_outgoing() {
        let incoming = totals(&[("2024-01", 10.0), ("2024-02", 20.0), ("2024-03", 30.0)]);
        let outgoing = totals(&[("2024-01", -1.0), ("2024-02", -3.0), ("2024-03", -2.0)]);

        let (inc, out) = MonthlyReport::assemble(&incoming, &outgoing).summary().unwrap();
        assert_eq!(inc.median, 20.0);
        assert_eq!(inc.mean, 20.0);
        assert_eq!(out.median, 2.0);
        assert_eq!(out.mean, 2.0);
    }

    #[test]
    fn test_empty_report_summary_fails() {
        let report = MonthlyReport::assemble(&MonthlyTotals::new(), &MonthlyTotals::new());
        assert!(report.summary().is_err());
        assert_eq!(report.format_terminal().unwrap(), "No events found.\n");
    }

    #[test]
    fn test_format_terminal() {
        let incoming = totals(&[("2024-01", 100.0)]);
        let outgoing = totals(&[("2024-01", -40.0)]);

        let text = MonthlyReport::assemble(&incoming, &outgoing)
            .format_terminal()
            .unwrap();
        assert!(text.starts_with("2024-01 in:    100.00€ out:     40.00€\n"));
        assert!(text.contains("median:"));
        assert!(text.contains("average:"));
    }
}
