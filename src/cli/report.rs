//! CLI commands for reports
//!
//! Each handler generates a report from the store and prints it.

use crate::config::Settings;
use crate::display::format_event_table;
use crate::error::ExpensesResult;
use crate::models::EventRecord;
use crate::reports::{BoundaryReport, LargeReport, MonthlyReport, ReportFilter};
use crate::storage::{OrderConfig, QueryOption, Store, EVENT_FIELDS};

/// Handle the default report: outliers first, then the monthly table
pub fn handle_report_command(
    settings: &Settings,
    store: &Store,
    filter: &ReportFilter,
) -> ExpensesResult<()> {
    handle_outliers_command(settings, store, filter)?;
    println!();

    let report = MonthlyReport::generate(store, filter)?;
    print!("{}", report.format_terminal()?);
    Ok(())
}

/// Handle the large transaction report
pub fn handle_large_command(
    settings: &Settings,
    store: &Store,
    filter: &ReportFilter,
    threshold: Option<f64>,
) -> ExpensesResult<()> {
    let threshold = threshold.unwrap_or(settings.large);
    let report = LargeReport::generate(store, filter, threshold)?;
    print!("{}", report.format_terminal());
    Ok(())
}

/// Handle the silent-boundary outlier list
pub fn handle_outliers_command(
    settings: &Settings,
    store: &Store,
    filter: &ReportFilter,
) -> ExpensesResult<()> {
    let report = BoundaryReport::generate(store, filter, &settings.silent)?;
    print!("{}", report.format_terminal());
    Ok(())
}

/// Handle listing raw events, newest first
pub fn handle_list_command(
    store: &Store,
    filter: &ReportFilter,
    payee: Option<String>,
    limit: usize,
) -> ExpensesResult<()> {
    let mut options = filter.options();
    if let Some(name) = payee {
        options.push(QueryOption::Payee(name));
    }
    options.push(QueryOption::Order(
        OrderConfig::order_by(["Year desc", "Month desc", "Day desc"]).with_limit(limit),
    ));

    let events: Vec<EventRecord> = store.query(&EVENT_FIELDS, &options)?;
    println!("{}", format_event_table(&events));
    Ok(())
}
