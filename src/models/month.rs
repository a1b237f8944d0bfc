//! Year-month bucket key

use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar month, displayed as `YYYY-MM`
///
/// Field order makes the derived ordering chronological, which matches
/// the lexicographic order of the zero-padded display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(YearMonth::new(2024, 3).to_string(), "2024-03");
        assert_eq!(YearMonth::new(2024, 11).to_string(), "2024-11");
    }

    #[test]
    fn test_order_matches_display_order() {
        let mut months = vec![
            YearMonth::new(2024, 10),
            YearMonth::new(2023, 12),
            YearMonth::new(2024, 2),
        ];
        months.sort();
        let keys: Vec<_> = months.iter().map(|m| m.to_string()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys, vec!["2023-12", "2024-02", "2024-10"]);
    }
}
