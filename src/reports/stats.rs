//! Order statistics over monthly totals

use crate::error::{ExpensesError, ExpensesResult};

/// Median of the values
///
/// The values are sorted ascending and the element at `len / 2` is taken.
/// For an even count that is the upper of the two middle elements; the two
/// are never averaged.
pub fn median(values: &[f64]) -> ExpensesResult<f64> {
    if values.is_empty() {
        return Err(ExpensesError::EmptyDataset("median"));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted[sorted.len() / 2])
}

/// Arithmetic mean of the values
pub fn mean(values: &[f64]) -> ExpensesResult<f64> {
    if values.is_empty() {
        return Err(ExpensesError::EmptyDataset("mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median and mean of one stream of monthly totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub median: f64,
    pub mean: f64,
    pub count: usize,
}

impl Summary {
    pub fn from_values(values: &[f64]) -> ExpensesResult<Self> {
        Ok(Self {
            median: median(values)?,
            mean: mean(values)?,
            count: values.len(),
        })
    }
}
