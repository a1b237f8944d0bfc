//! CLI command handler for rebuilding the database
//!
//! Reads every bank's CSV exports and replaces the database with them.
//! Labels are attached at import time, so changed rules need a rebuild.

use crate::config::{ExpensesPaths, Settings};
use crate::error::ExpensesResult;
use crate::services::ImportService;
use crate::storage::Store;

/// Handle the make command
pub fn handle_make_command(paths: &ExpensesPaths, settings: &Settings) -> ExpensesResult<()> {
    tracing::info!("making database");

    // Read first so a failed import leaves the old database in place
    let events = ImportService::new(settings).read_all()?;

    let path = paths.database_file();
    Store::remove(path)?;
    let mut store = Store::open(path)?;
    store.create()?;
    store.insert(&events)?;

    let silent = events.iter().filter(|e| e.is_silent()).count();
    let excluded = events.iter().filter(|e| e.is_excluded()).count();

    println!("Database rebuilt: {}", path.display());
    println!("  Events:    {}", events.len());
    println!("  Silent:    {}", silent);
    println!("  Excluded:  {}", excluded);

    Ok(())
}
