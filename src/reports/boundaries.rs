//! Transactions outside the silent boundaries
//!
//! Anything below `silent.min` or above `silent.max` is worth a look,
//! unless its labels say otherwise.

use super::ReportFilter;
use crate::config::SilentRules;
use crate::display::format_euros;
use crate::error::ExpensesResult;
use crate::models::{EventRecord, Label};
use crate::storage::{OrderConfig, QueryOption, Store, EVENT_FIELDS};

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryReport {
    pub min: f64,
    pub max: f64,
    pub events: Vec<EventRecord>,
}

impl BoundaryReport {
    pub fn generate(store: &Store, filter: &ReportFilter, bounds: &SilentRules) -> ExpensesResult<Self> {
        let mut options = filter.options();
        options.push(QueryOption::WithoutLabels(vec![Label::Silent]));
        options.push(QueryOption::Order(OrderConfig::order_by(["Year", "Month", "Day"])));

        let mut events = Vec::new();
        store.for_each(&EVENT_FIELDS, &options, |event: EventRecord| {
            if event.amount < bounds.min || bounds.max < event.amount {
                events.push(event);
            }
            Ok(())
        })?;

        Ok(Self {
            min: bounds.min,
            max: bounds.max,
            events,
        })
    }

    pub fn format_terminal(&self) -> String {
        self.events
            .iter()
            .map(|e| {
                format!(
                    "{}-{:02}-{:02} {} {}\n",
                    e.year,
                    e.month,
                    e.day,
                    e.name,
                    format_euros(e.amount)
                )
            })
            .collect()
    }
}
