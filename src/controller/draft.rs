//! The in-progress copy of a record being created or edited.

use crate::domain::common::Identifiable;
use crate::domain::{Category, HsrStation, Record, RecordKind, Transaction};

/// Draft buffer for one record of any kind, distinct from the persisted
/// listing. Each variant carries its own validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Category(Category),
    Transaction(Transaction),
    HsrStation(HsrStation),
}

impl Draft {
    /// Empty draft for an "add" action.
    pub fn empty(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Category => Draft::Category(Category::default()),
            RecordKind::Transaction => Draft::Transaction(Transaction::default()),
            RecordKind::HsrStation => Draft::HsrStation(HsrStation::default()),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Draft::Category(_) => RecordKind::Category,
            Draft::Transaction(_) => RecordKind::Transaction,
            Draft::HsrStation(_) => RecordKind::HsrStation,
        }
    }

    pub fn as_record(&self) -> Record {
        match self {
            Draft::Category(category) => Record::Category(category.clone()),
            Draft::Transaction(transaction) => Record::Transaction(transaction.clone()),
            Draft::HsrStation(station) => Record::HsrStation(station.clone()),
        }
    }

    /// Runs kind-specific validation against the loaded category listing.
    ///
    /// All violations are collected, never short-circuited. Only transaction
    /// drafts carry client-side rules; the other kinds are validated by shape
    /// alone.
    pub fn validate(&self, categories: &[Category]) -> Vec<String> {
        match self {
            Draft::Transaction(transaction) => validate_transaction(transaction, categories),
            Draft::Category(_) | Draft::HsrStation(_) => Vec::new(),
        }
    }
}

impl From<Record> for Draft {
    fn from(record: Record) -> Self {
        match record {
            Record::Category(category) => Draft::Category(category),
            Record::Transaction(transaction) => Draft::Transaction(transaction),
            Record::HsrStation(station) => Draft::HsrStation(station),
        }
    }
}

impl Identifiable for Draft {
    fn id(&self) -> Option<&str> {
        match self {
            Draft::Category(category) => category.id(),
            Draft::Transaction(transaction) => transaction.id(),
            Draft::HsrStation(station) => station.id(),
        }
    }
}

fn validate_transaction(transaction: &Transaction, categories: &[Category]) -> Vec<String> {
    let mut errors = Vec::new();

    if transaction.name.trim().is_empty() {
        errors.push("name must not be empty".to_string());
    }
    if transaction.unit.trim().is_empty() {
        errors.push("unit must not be empty".to_string());
    }
    if transaction.coefficient <= 0.0 {
        errors.push("coefficient must be greater than 0".to_string());
    }
    if !categories
        .iter()
        .any(|category| category.name == transaction.category)
    {
        errors.push("category must match an existing category".to_string());
    }
    if transaction.source.is_empty() {
        errors.push("source must not be empty".to_string());
    }

    errors
}
