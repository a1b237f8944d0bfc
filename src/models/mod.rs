//! Core data models for expenses
//!
//! This module contains the normalized event record and the small value
//! types around it: classification labels and year-month bucket keys.

pub mod event;
pub mod labels;
pub mod month;

pub use event::EventRecord;
pub use labels::{Label, LabelSet, LABEL_DELIMITER};
pub use month::YearMonth;
