//! Storage layer for expenses
//!
//! A single SQLite database with one `Event` table. Statements come from
//! [`query::build`]; rows are decoded positionally through [`FromRow`].

pub mod query;
pub mod rows;

pub use query::{build, AmountCondition, Comparison, OrderConfig, QueryConfig, QueryOption, EVENT_TABLE};
pub use rows::{FromRow, EVENT_FIELDS};

use std::path::Path;

use rusqlite::{params, params_from_iter, Connection};

use crate::error::{ExpensesError, ExpensesResult};
use crate::models::EventRecord;

/// Owns the database connection
///
/// Not shared: one command invocation opens, uses and drops it.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> ExpensesResult<Self> {
        let conn = Connection::open(path).map_err(|e| {
            ExpensesError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Ok(Self { conn })
    }

    /// Open a database that `make` has already built
    pub fn open_existing(path: &Path) -> ExpensesResult<Self> {
        if !path.exists() {
            return Err(ExpensesError::Storage(format!(
                "Database not found at {}. Run 'expenses make' first",
                path.display()
            )));
        }
        Self::open(path)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> ExpensesResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Delete the database file; a missing file is fine
    pub fn remove(path: &Path) -> ExpensesResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ExpensesError::Io(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Create the event table
    pub fn create(&self) -> ExpensesResult<()> {
        self.conn.execute_batch(&format!(
            "create table {} (
                Year integer, Month integer, Day integer,
                Explanation text,
                Name text,
                Account text,
                Amount real,
                Labels text
            )",
            EVENT_TABLE
        ))?;
        Ok(())
    }

    /// Insert a batch of events; either all rows commit or none do
    pub fn insert(&mut self, records: &[EventRecord]) -> ExpensesResult<()> {
        let tx = self.conn.transaction()?;
        {
            let placeholders = vec!["?"; EVENT_FIELDS.len()].join(",");
            let mut stmt = tx.prepare(&format!(
                "insert into {}({}) values ({})",
                EVENT_TABLE,
                EVENT_FIELDS.join(","),
                placeholders
            ))?;
            for r in records {
                stmt.execute(params![
                    r.year,
                    r.month,
                    r.day,
                    r.explanation,
                    r.name,
                    r.account,
                    r.amount,
                    r.labels.to_column(),
                ])
                .map_err(|e| ExpensesError::Storage(format!("Insert failed: {}", e)))?;
            }
        }
        tx.commit()?;
        tracing::debug!(count = records.len(), "inserted events");
        Ok(())
    }

    /// Run a query and hand each decoded row to `f`
    ///
    /// Rows are streamed; the first decode or callback error stops
    /// iteration and is returned. The statement is released on every path.
    pub fn for_each<S, T, F>(&self, fields: &[S], options: &[QueryOption], mut f: F) -> ExpensesResult<()>
    where
        S: AsRef<str>,
        T: FromRow,
        F: FnMut(T) -> ExpensesResult<()>,
    {
        let (statement, args) = build(fields, options);
        tracing::debug!(%statement, ?args, "query");

        let mut stmt = self.conn.prepare(&statement)?;
        let mut rows = stmt.query(params_from_iter(args.iter()))?;
        while let Some(row) = rows.next()? {
            f(T::decode(row)?)?;
        }
        Ok(())
    }

    /// Run a query and collect every decoded row
    pub fn query<S, T>(&self, fields: &[S], options: &[QueryOption]) -> ExpensesResult<Vec<T>>
    where
        S: AsRef<str>,
        T: FromRow,
    {
        let mut out = Vec::new();
        self.for_each(fields, options, |row| {
            out.push(row);
            Ok(())
        })?;
        Ok(out)
    }

    /// Number of rows matching the options
    pub fn count(&self, options: &[QueryOption]) -> ExpensesResult<i64> {
        let rows: Vec<(i64,)> = self.query(&["count(*)"], options)?;
        Ok(rows.first().map(|r| r.0).unwrap_or_default())
    }
}
