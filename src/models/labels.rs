//! Classification labels
//!
//! Labels are a closed set, so a label name can never contain the `,`
//! used to persist a [`LabelSet`] as a single column.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExpensesError;

/// Delimiter used when persisting a label set
pub const LABEL_DELIMITER: char = ',';

/// A classification tag attached to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Counted in totals but never alerted on
    Silent,
    /// Left out of totals entirely
    Exclude,
}

impl Label {
    /// The persisted name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Exclude => "exclude",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ExpensesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "silent" => Ok(Self::Silent),
            "exclude" => Ok(Self::Exclude),
            other => Err(ExpensesError::Decode(format!("Unknown label: '{}'", other))),
        }
    }
}

/// Ordered set of labels
///
/// Iterates `silent` before `exclude`, so serialization is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet(BTreeSet<Label>);

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: Label) -> bool {
        self.0.insert(label)
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0.contains(&label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.0.iter().copied()
    }

    /// Serialize for the storage column, e.g. `"silent,exclude"`
    pub fn to_column(&self) -> String {
        self.iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(&LABEL_DELIMITER.to_string())
    }

    /// Parse the storage column form; the empty string is the empty set
    pub fn from_column(s: &str) -> Result<Self, ExpensesError> {
        s.split(LABEL_DELIMITER)
            .filter(|part| !part.is_empty())
            .map(str::parse::<Label>)
            .collect()
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_column())
    }
}
