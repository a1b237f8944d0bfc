//! Event table formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_euros, truncate};
use crate::models::EventRecord;

const TEXT_WIDTH: usize = 30;

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Explanation")]
    explanation: String,
    #[tabled(rename = "Labels")]
    labels: String,
}

impl From<&EventRecord> for EventRow {
    fn from(event: &EventRecord) -> Self {
        Self {
            date: format!("{}-{:02}-{:02}", event.year, event.month, event.day),
            amount: format_euros(event.amount),
            name: truncate(&event.name, TEXT_WIDTH),
            explanation: truncate(&event.explanation, TEXT_WIDTH),
            labels: event.labels.to_column(),
        }
    }
}

/// Format events as a table
pub fn format_event_table(events: &[EventRecord]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }

    let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}
