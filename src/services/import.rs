//! Bank statement import
//!
//! Reads the CSV exports of each supported bank from
//! `<directory>/<bank>/*/*.csv`, normalizes rows into [`EventRecord`]s and
//! labels them with the classification rules.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::config::Settings;
use crate::error::{ExpensesError, ExpensesResult};
use crate::models::EventRecord;
use crate::services::classification::{classify, ClassificationRules};

/// Column layout and date format of one bank's CSV export
#[derive(Debug, Clone)]
pub struct BankFormat {
    /// Bank tag, also the name of its subdirectory
    pub bank: &'static str,
    pub date_column: usize,
    pub amount_column: usize,
    pub explanation_column: usize,
    pub name_column: usize,
    pub account_column: usize,
    /// chrono format string for the date column
    pub date_format: &'static str,
    pub delimiter: u8,
}

impl BankFormat {
    /// OP export: ISO dates
    pub fn op() -> Self {
        Self {
            bank: "OP",
            date_column: 1,
            amount_column: 2,
            explanation_column: 4,
            name_column: 5,
            account_column: 6,
            date_format: "%Y-%m-%d",
            delimiter: b';',
        }
    }

    /// S-Pankki export: `dd.mm.yyyy` dates
    pub fn s_pankki() -> Self {
        Self {
            bank: "S-Pankki",
            date_format: "%d.%m.%Y",
            ..Self::op()
        }
    }

    /// Every supported bank
    pub fn all() -> Vec<Self> {
        vec![Self::op(), Self::s_pankki()]
    }

    /// Glob pattern for this bank's files under `directory`
    pub fn pattern(&self, directory: &Path) -> String {
        directory
            .join(self.bank)
            .join("*")
            .join("*.csv")
            .to_string_lossy()
            .into_owned()
    }
}

/// Reads and labels events for the configured banks
pub struct ImportService<'a> {
    settings: &'a Settings,
}

impl<'a> ImportService<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Read every supported bank
    ///
    /// Banks are independent: failures from all of them are joined into one
    /// error instead of stopping at the first.
    pub fn read_all(&self) -> ExpensesResult<Vec<EventRecord>> {
        let mut events = Vec::new();
        let mut errors = Vec::new();

        for format in BankFormat::all() {
            match self.read_bank(&format) {
                Ok(mut bank_events) => events.append(&mut bank_events),
                Err(e) => errors.push(e),
            }
        }

        match ExpensesError::join(errors) {
            Some(err) => Err(err),
            None => Ok(events),
        }
    }

    /// Read all CSV files of one bank
    pub fn read_bank(&self, format: &BankFormat) -> ExpensesResult<Vec<EventRecord>> {
        let pattern = format.pattern(&self.settings.directory);
        let files = glob::glob(&pattern)?
            .collect::<Result<Vec<PathBuf>, _>>()
            .map_err(|e| ExpensesError::Io(e.to_string()))?;
        tracing::info!(count = files.len(), %pattern, "found csv files");

        let mut events = Vec::new();
        for path in &files {
            let file = std::fs::File::open(path).map_err(|e| {
                ExpensesError::Io(format!("Failed to open {}: {}", path.display(), e))
            })?;
            let mut parsed = self
                .parse_csv_from_reader(file, format)
                .map_err(|e| ExpensesError::Import(format!("{}: {}", path.display(), e)))?;
            events.append(&mut parsed);
        }

        tracing::info!(bank = format.bank, count = events.len(), "read events");
        Ok(events)
    }

    /// Parse one CSV export; the first failing row aborts the file
    pub fn parse_csv_from_reader<R: Read>(
        &self,
        reader: R,
        format: &BankFormat,
    ) -> ExpensesResult<Vec<EventRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(format.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut events = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let event = self.parse_record(&record, format).map_err(|e| match e {
                ExpensesError::Parse(msg) => ExpensesError::Parse(format!("line {}: {}", line, msg)),
                other => other,
            })?;
            events.push(event);
        }
        Ok(events)
    }

    fn parse_record(&self, record: &StringRecord, format: &BankFormat) -> ExpensesResult<EventRecord> {
        let field = |column: usize, what: &str| {
            record
                .get(column)
                .map(str::trim)
                .ok_or_else(|| ExpensesError::Parse(format!("missing {} column {}", what, column)))
        };

        let date = parse_date(field(format.date_column, "date")?, format.date_format)?;
        let amount = parse_amount(field(format.amount_column, "amount")?)?;
        let explanation = field(format.explanation_column, "explanation")?;
        let name = field(format.name_column, "name")?;
        let account = field(format.account_column, "account")?;

        let labels = classify(account, explanation, name, ClassificationRules::from(self.settings));

        Ok(EventRecord::new(date, amount, name, format.bank)
            .with_explanation(explanation)
            .with_account(account)
            .with_labels(labels))
    }
}

fn parse_date(s: &str, format: &str) -> ExpensesResult<NaiveDate> {
    NaiveDate::parse_from_str(s, format)
        .map_err(|e| ExpensesError::Parse(format!("Could not parse date '{}': {}", s, e)))
}

/// Amounts use a decimal comma, e.g. `-12,50`
fn parse_amount(s: &str) -> ExpensesResult<f64> {
    s.replacen(',', ".", 1)
        .parse::<f64>()
        .map_err(|e| ExpensesError::Parse(format!("Could not parse amount '{}': {}", s, e)))
}
