//! Business logic layer
//!
//! Classification of raw transactions and the per-bank CSV importers.

pub mod classification;
pub mod import;

pub use classification::{classify, ClassificationRules};
pub use import::{BankFormat, ImportService};
