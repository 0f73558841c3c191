//! Tagged unions over the three managed record kinds.
//!
//! One capability surface (`list`/`fetch`/`create`/`update`/`delete`) is
//! parameterized by [`RecordKind`] instead of keeping three parallel copies of
//! the same plumbing.

use std::fmt;

use crate::domain::category::Category;
use crate::domain::common::{Displayable, Identifiable};
use crate::domain::station::HsrStation;
use crate::domain::transaction::Transaction;

/// The three record kinds managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Category,
    Transaction,
    HsrStation,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Transaction,
        RecordKind::Category,
        RecordKind::HsrStation,
    ];

    /// REST resource segment for this kind.
    pub fn resource(self) -> &'static str {
        match self {
            RecordKind::Category => "categories",
            RecordKind::Transaction => "transactions",
            RecordKind::HsrStation => "hsr",
        }
    }

    /// Listing title shown in menus and notices.
    pub fn title(self) -> &'static str {
        match self {
            RecordKind::Category => "categories",
            RecordKind::Transaction => "line items",
            RecordKind::HsrStation => "HSR stations",
        }
    }

    /// Singular label for notices about one record.
    pub fn singular(self) -> &'static str {
        match self {
            RecordKind::Category => "category",
            RecordKind::Transaction => "line item",
            RecordKind::HsrStation => "HSR station",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A single record of any managed kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Category(Category),
    Transaction(Transaction),
    HsrStation(HsrStation),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Category(_) => RecordKind::Category,
            Record::Transaction(_) => RecordKind::Transaction,
            Record::HsrStation(_) => RecordKind::HsrStation,
        }
    }
}

impl Identifiable for Record {
    fn id(&self) -> Option<&str> {
        match self {
            Record::Category(category) => category.id(),
            Record::Transaction(transaction) => transaction.id(),
            Record::HsrStation(station) => station.id(),
        }
    }
}

impl Displayable for Record {
    fn display_label(&self) -> String {
        match self {
            Record::Category(category) => category.display_label(),
            Record::Transaction(transaction) => transaction.display_label(),
            Record::HsrStation(station) => station.display_label(),
        }
    }
}

impl From<Category> for Record {
    fn from(category: Category) -> Self {
        Record::Category(category)
    }
}

impl From<Transaction> for Record {
    fn from(transaction: Transaction) -> Self {
        Record::Transaction(transaction)
    }
}

impl From<HsrStation> for Record {
    fn from(station: HsrStation) -> Self {
        Record::HsrStation(station)
    }
}

/// A fetched listing of one record kind.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordList {
    Categories(Vec<Category>),
    Transactions(Vec<Transaction>),
    HsrStations(Vec<HsrStation>),
}

impl RecordList {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordList::Categories(_) => RecordKind::Category,
            RecordList::Transactions(_) => RecordKind::Transaction,
            RecordList::HsrStations(_) => RecordKind::HsrStation,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordList::Categories(items) => items.len(),
            RecordList::Transactions(items) => items.len(),
            RecordList::HsrStations(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_their_rest_resources() {
        assert_eq!(RecordKind::Category.resource(), "categories");
        assert_eq!(RecordKind::Transaction.resource(), "transactions");
        assert_eq!(RecordKind::HsrStation.resource(), "hsr");
    }

    #[test]
    fn records_report_the_kind_of_their_payload() {
        let record = Record::from(Category::new("Office", ""));
        assert_eq!(record.kind(), RecordKind::Category);
        assert_eq!(record.id(), None);
    }

    #[test]
    fn listings_expose_length_and_kind() {
        let list = RecordList::Transactions(vec![Transaction::new(
            "Paper", "kg", 1.0, "Office", "EPA",
        )]);
        assert_eq!(list.kind(), RecordKind::Transaction);
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
    }
}
