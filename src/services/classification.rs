//! Classification rules
//!
//! Maps an (account, explanation, name) triple to labels using the rule
//! lists from the settings file. Matching is exact and case-sensitive.

use crate::config::{ExcludedRules, Settings, SilentRules};
use crate::models::{Label, LabelSet};

/// Borrowed view of the rule lists used for labeling
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRules<'a> {
    pub silent: &'a SilentRules,
    pub excluded: &'a ExcludedRules,
}

impl<'a> From<&'a Settings> for ClassificationRules<'a> {
    fn from(settings: &'a Settings) -> Self {
        Self {
            silent: &settings.silent,
            excluded: &settings.excluded,
        }
    }
}

fn contains(list: &[String], value: &str) -> bool {
    list.iter().any(|entry| entry == value)
}

/// Label a raw transaction
///
/// `silent` when the explanation or name is in the silent lists, `exclude`
/// when the account, explanation or name is in the excluded lists. Both
/// may apply.
pub fn classify(
    account: &str,
    explanation: &str,
    name: &str,
    rules: ClassificationRules<'_>,
) -> LabelSet {
    let mut labels = LabelSet::new();

    if contains(&rules.silent.explanation, explanation) || contains(&rules.silent.names, name) {
        labels.insert(Label::Silent);
    }

    if contains(&rules.excluded.accounts, account)
        || contains(&rules.excluded.explanation, explanation)
        || contains(&rules.excluded.names, name)
    {
        labels.insert(Label::Exclude);
    }

    labels
}
