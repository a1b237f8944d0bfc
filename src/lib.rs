//! expenses - monthly burn-rate from bank statement exports
//!
//! Imports CSV statements from several banks into a SQLite database and
//! reports monthly income and outgoing with median and mean.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config file and database path resolution, YAML settings
//! - `error`: Custom error types
//! - `models`: Event records, labels and month keys
//! - `services`: Classification rules and bank importers
//! - `storage`: Query builder and the SQLite store
//! - `reports`: Monthly, large-transaction and boundary reports
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expenses::reports::{MonthlyReport, ReportFilter};
//! use expenses::storage::Store;
//!
//! let store = Store::open(Path::new("expenses.sql"))?;
//! let report = MonthlyReport::generate(&store, &ReportFilter::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpensesError, ExpensesResult};
