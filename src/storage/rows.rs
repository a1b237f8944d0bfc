//! Positional row decoding

use rusqlite::types::FromSql;
use rusqlite::Row;

use crate::error::{ExpensesError, ExpensesResult};
use crate::models::{EventRecord, LabelSet};

/// Every persisted column of the event table, in insert order
pub const EVENT_FIELDS: [&str; 8] = [
    "Year",
    "Month",
    "Day",
    "Explanation",
    "Name",
    "Account",
    "Amount",
    "Labels",
];

/// A value decoded from one row, column by column
///
/// The caller's field list decides what each position holds; nothing is
/// checked until a row is actually decoded.
pub trait FromRow: Sized {
    /// Number of columns the row must have
    const COLUMNS: usize;

    fn from_row(row: &Row<'_>) -> ExpensesResult<Self>;

    /// Check the column count, then decode
    fn decode(row: &Row<'_>) -> ExpensesResult<Self> {
        let count = row.as_ref().column_count();
        if count != Self::COLUMNS {
            return Err(ExpensesError::Decode(format!(
                "row has {} columns, expected {}",
                count,
                Self::COLUMNS
            )));
        }
        Self::from_row(row)
    }
}

macro_rules! impl_from_row_tuple {
    ($count:expr; $($name:ident $idx:tt),+) => {
        impl<$($name: FromSql),+> FromRow for ($($name,)+) {
            const COLUMNS: usize = $count;

            fn from_row(row: &Row<'_>) -> ExpensesResult<Self> {
                Ok(($(row.get::<usize, $name>($idx)?,)+))
            }
        }
    };
}

impl_from_row_tuple!(1; A 0);
impl_from_row_tuple!(2; A 0, B 1);
impl_from_row_tuple!(3; A 0, B 1, C 2);
impl_from_row_tuple!(4; A 0, B 1, C 2, D 3);
impl_from_row_tuple!(5; A 0, B 1, C 2, D 3, E 4);
impl_from_row_tuple!(6; A 0, B 1, C 2, D 3, E 4, F 5);

/// Decodes the [`EVENT_FIELDS`] projection
///
/// The bank tag is not persisted and comes back empty.
impl FromRow for EventRecord {
    const COLUMNS: usize = EVENT_FIELDS.len();

    fn from_row(row: &Row<'_>) -> ExpensesResult<Self> {
        let labels: String = row.get(7)?;
        Ok(Self {
            year: row.get(0)?,
            month: row.get(1)?,
            day: row.get(2)?,
            explanation: row.get(3)?,
            name: row.get(4)?,
            account: row.get(5)?,
            amount: row.get(6)?,
            labels: LabelSet::from_column(&labels)?,
            bank: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_tuple_decode() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare("select 2024, 3, 12.5").unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();

        let (year, month, amount) = <(i32, u32, f64)>::decode(row).unwrap();
        assert_eq!((year, month, amount), (2024, 3, 12.5));
    }

    #[test]
    fn test_too_few_targets_is_decode_error() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare("select 1, 2, 3").unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();

        assert!(<(i32, i32)>::decode(row).unwrap_err().is_decode());
    }

    #[test]
    fn test_unknown_label_in_column_is_decode_error() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn
            .prepare("select 2024, 1, 1, 'memo', 'name', 'acct', -1.0, 'bogus'")
            .unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();

        assert!(EventRecord::decode(row).unwrap_err().is_decode());
    }
}
