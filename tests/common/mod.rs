use std::sync::{Arc, Mutex};

use carbon_admin::client::{RecordStore, Result};
use carbon_admin::domain::{Category, HsrStation, Record, RecordKind, RecordList, Transaction};
use carbon_admin::errors::AdminError;

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    stations: Vec<HsrStation>,
    next_id: u64,
    calls: Vec<String>,
    fail_lists: bool,
    fail_creates: bool,
    fail_updates: bool,
    fail_deletes: bool,
}

/// In-memory record store recording every call, for driving the controller
/// without a backend. Clones share state, so tests can hand one handle to the
/// controller and inspect the other. Failure switches make any operation
/// family return a server error.
#[derive(Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        let store = Self::new();
        store.state.lock().unwrap().categories = categories;
        store
    }

    pub fn seed_transactions(&self, transactions: Vec<Transaction>) {
        self.state.lock().unwrap().transactions = transactions;
    }

    pub fn seed_stations(&self, stations: Vec<HsrStation>) {
        self.state.lock().unwrap().stations = stations;
    }

    /// Every store call so far, oldest first, as `"<op> <resource> [<id>]"`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn fail_lists(&self) {
        self.state.lock().unwrap().fail_lists = true;
    }

    pub fn fail_creates(&self) {
        self.state.lock().unwrap().fail_creates = true;
    }

    pub fn fail_updates(&self) {
        self.state.lock().unwrap().fail_updates = true;
    }

    pub fn fail_deletes(&self) {
        self.state.lock().unwrap().fail_deletes = true;
    }
}

impl RecordStore for MemoryStore {
    fn list(&self, kind: RecordKind) -> Result<RecordList> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("list {}", kind.resource()));
        if state.fail_lists {
            return Err(AdminError::Api { status: 500 });
        }
        Ok(match kind {
            RecordKind::Category => RecordList::Categories(state.categories.clone()),
            RecordKind::Transaction => RecordList::Transactions(state.transactions.clone()),
            RecordKind::HsrStation => RecordList::HsrStations(state.stations.clone()),
        })
    }

    fn fetch(&self, kind: RecordKind, id: &str) -> Result<Record> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("fetch {} {id}", kind.resource()));
        let found = match kind {
            RecordKind::Category => state
                .categories
                .iter()
                .find(|c| c.id.as_deref() == Some(id))
                .cloned()
                .map(Record::from),
            RecordKind::Transaction => state
                .transactions
                .iter()
                .find(|t| t.id.as_deref() == Some(id))
                .cloned()
                .map(Record::from),
            RecordKind::HsrStation => state
                .stations
                .iter()
                .find(|s| s.id.as_deref() == Some(id))
                .cloned()
                .map(Record::from),
        };
        found.ok_or(AdminError::Api { status: 404 })
    }

    fn create(&self, record: &Record) -> Result<Record> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(format!("create {}", record.kind().resource()));
        if state.fail_creates {
            return Err(AdminError::Api { status: 500 });
        }
        state.next_id += 1;
        let id = format!("id-{}", state.next_id);
        Ok(match record.clone() {
            Record::Category(mut category) => {
                category.id = Some(id);
                state.categories.push(category.clone());
                Record::Category(category)
            }
            Record::Transaction(mut transaction) => {
                transaction.id = Some(id);
                state.transactions.push(transaction.clone());
                Record::Transaction(transaction)
            }
            Record::HsrStation(mut station) => {
                station.id = Some(id);
                state.stations.push(station.clone());
                Record::HsrStation(station)
            }
        })
    }

    fn update(&self, id: &str, record: &Record) -> Result<Record> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(format!("update {} {id}", record.kind().resource()));
        if state.fail_updates {
            return Err(AdminError::Api { status: 500 });
        }
        let replaced = match record {
            Record::Category(category) => state
                .categories
                .iter_mut()
                .find(|c| c.id.as_deref() == Some(id))
                .map(|slot| *slot = category.clone())
                .is_some(),
            Record::Transaction(transaction) => state
                .transactions
                .iter_mut()
                .find(|t| t.id.as_deref() == Some(id))
                .map(|slot| *slot = transaction.clone())
                .is_some(),
            Record::HsrStation(station) => state
                .stations
                .iter_mut()
                .find(|s| s.id.as_deref() == Some(id))
                .map(|slot| *slot = station.clone())
                .is_some(),
        };
        if replaced {
            Ok(record.clone())
        } else {
            Err(AdminError::Api { status: 404 })
        }
    }

    fn delete(&self, kind: RecordKind, id: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(format!("delete {} {id}", kind.resource()));
        if state.fail_deletes {
            return Err(AdminError::Api { status: 500 });
        }
        let before;
        let after;
        match kind {
            RecordKind::Category => {
                before = state.categories.len();
                state.categories.retain(|c| c.id.as_deref() != Some(id));
                after = state.categories.len();
            }
            RecordKind::Transaction => {
                before = state.transactions.len();
                state.transactions.retain(|t| t.id.as_deref() != Some(id));
                after = state.transactions.len();
            }
            RecordKind::HsrStation => {
                before = state.stations.len();
                state.stations.retain(|s| s.id.as_deref() != Some(id));
                after = state.stations.len();
            }
        }
        if before == after {
            return Err(AdminError::Api { status: 404 });
        }
        Ok(())
    }
}

pub fn category(name: &str) -> Category {
    Category::new(name, "")
}

pub fn persisted_transaction(id: &str) -> Transaction {
    let mut transaction = Transaction::new("Paper", "kg", 1.2, "Office", "EPA");
    transaction.id = Some(id.to_string());
    transaction
}
