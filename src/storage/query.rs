//! Query construction
//!
//! Turns a field list and a sequence of [`QueryOption`]s into one
//! parameterized `select` statement with positional `?` arguments.
//!
//! Field and table names are trusted internal literals and are used
//! verbatim. Years, months, days and payee names are always bound as
//! arguments. The amount condition and excluded labels are typed values, so
//! their inlined text can only be produced by this module.

use std::fmt;

use crate::models::Label;

/// The table holding bank account events
pub const EVENT_TABLE: &str = "Event";

/// Comparison operator for an amount condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Comparison {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        }
    }
}

/// A condition on the `Amount` column, e.g. `> 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountCondition {
    pub comparison: Comparison,
    pub value: f64,
}

impl AmountCondition {
    pub fn new(comparison: Comparison, value: f64) -> Self {
        Self { comparison, value }
    }

    /// Inflows; zero-amount events count as income
    pub fn income() -> Self {
        Self::new(Comparison::GreaterOrEqual, 0.0)
    }

    /// Outflows
    pub fn outgoing() -> Self {
        Self::new(Comparison::Less, 0.0)
    }
}

impl fmt::Display for AmountCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.comparison.as_sql(), self.value)
    }
}

/// Grouping, ordering and limit of a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderConfig {
    pub group_by: Vec<String>,
    pub order_by: Vec<String>,
    /// Zero means no limit
    pub limit: usize,
}

impl OrderConfig {
    pub fn group_by<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group_by: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn order_by<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            order_by: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn to_sql(&self) -> String {
        let mut sorting = String::new();
        if !self.group_by.is_empty() {
            sorting.push_str(" group by ");
            sorting.push_str(&self.group_by.join(","));
        }
        if !self.order_by.is_empty() {
            sorting.push_str(" order by ");
            sorting.push_str(&self.order_by.join(","));
        }
        if self.limit > 0 {
            sorting.push_str(&format!(" limit {}", self.limit));
        }
        sorting
    }
}

/// One modifier of a query
///
/// Options are folded left to right. Scalar fields take the last value
/// given; years, tables and excluded labels accumulate.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOption {
    Amount(AmountCondition),
    /// Keep events on or before this month and day of any year
    DayOfYear { month: u32, day: u32 },
    Years(Vec<i32>),
    Order(OrderConfig),
    WithoutLabels(Vec<Label>),
    Table(String),
    Payee(String),
}

/// All options folded into one place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryConfig {
    pub tables: Vec<String>,
    pub name: Option<String>,
    pub day: u32,
    pub month: u32,
    pub years: Vec<i32>,
    pub order: Option<OrderConfig>,
    pub amount: Option<AmountCondition>,
    pub exclude_labels: Vec<Label>,
}

impl QueryConfig {
    pub fn from_options(options: &[QueryOption]) -> Self {
        let mut config = Self::default();
        for option in options {
            config.apply(option);
        }
        if config.tables.is_empty() {
            config.tables.push(EVENT_TABLE.to_string());
        }
        config
    }

    fn apply(&mut self, option: &QueryOption) {
        match option {
            QueryOption::Amount(condition) => self.amount = Some(*condition),
            QueryOption::DayOfYear { month, day } => {
                self.month = *month;
                self.day = *day;
            }
            QueryOption::Years(years) => self.years.extend_from_slice(years),
            QueryOption::Order(order) => self.order = Some(order.clone()),
            QueryOption::WithoutLabels(labels) => self.exclude_labels.extend_from_slice(labels),
            QueryOption::Table(table) => {
                if self.tables.contains(table) {
                    tracing::warn!(tables = ?self.tables, %table, "table listed twice in query");
                }
                self.tables.push(table.clone());
            }
            QueryOption::Payee(name) => self.name = Some(name.clone()),
        }
    }
}

/// Build a `select` statement and its positional arguments
///
/// Output is deterministic for a given input. `fields` must not be empty;
/// that is not validated here.
pub fn build<S: AsRef<str>>(fields: &[S], options: &[QueryOption]) -> (String, Vec<String>) {
    let config = QueryConfig::from_options(options);
    let mut clauses: Vec<String> = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if config.month > 0 && config.day > 0 {
        clauses.push("(Month < ? or (Month=? and Day<=?))".to_string());
        let month = config.month.to_string();
        args.extend([month.clone(), month, config.day.to_string()]);
    }

    if !config.years.is_empty() {
        let terms = vec!["Year=?"; config.years.len()].join(" or ");
        clauses.push(format!("({})", terms));
        args.extend(config.years.iter().map(|y| y.to_string()));
    }

    if let Some(amount) = &config.amount {
        clauses.push(format!("Amount {}", amount));
    }

    for label in &config.exclude_labels {
        clauses.push(format!("Labels NOT LIKE '%{}%'", label.as_str()));
    }

    if let Some(name) = &config.name {
        clauses.push("Name=?".to_string());
        args.push(name.clone());
    }

    let condition = if clauses.is_empty() {
        String::new()
    } else {
        format!(" where {}", clauses.join(" and "))
    };

    let fields: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
    let sorting = config.order.as_ref().map(OrderConfig::to_sql).unwrap_or_default();

    let statement = format!(
        "select {} from {}{}{}",
        fields.join(","),
        config.tables.join(","),
        condition,
        sorting
    );
    (statement, args)
}
