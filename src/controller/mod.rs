//! Management state machine over the three record kinds.
//!
//! Holds the selected kind, the cached listings, the in-progress draft, and
//! the pending-delete target; validates drafts before submission and drives
//! the record store's request/response cycle.

pub mod draft;
pub mod notice;

pub use draft::Draft;
pub use notice::{Notice, NoticeLevel};

use tracing::{debug, warn};

use crate::client::{RecordStore, Result as StoreResult};
use crate::domain::common::Identifiable;
use crate::domain::{Category, HsrStation, Record, RecordKind, RecordList, Transaction};

/// Where the controller sits in its request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Editing,
    ConfirmingDelete,
}

/// Receipt for one issued listing request.
///
/// A completion whose ticket is no longer the latest issued for its kind is
/// discarded, so a late response can never overwrite a newer listing.
#[derive(Debug)]
pub struct LoadTicket {
    kind: RecordKind,
    seq: u64,
}

impl LoadTicket {
    pub fn kind(&self) -> RecordKind {
        self.kind
    }
}

pub struct Controller<S: RecordStore> {
    store: S,
    selected: RecordKind,
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    stations: Vec<HsrStation>,
    phase: Phase,
    draft: Option<Draft>,
    pending_delete: Option<String>,
    load_seq: u64,
    issued: [u64; 3],
}

impl<S: RecordStore> Controller<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            selected: RecordKind::Transaction,
            categories: Vec::new(),
            transactions: Vec::new(),
            stations: Vec::new(),
            phase: Phase::Idle,
            draft: None,
            pending_delete: None,
            load_seq: 0,
            issued: [0; 3],
        }
    }

    pub fn selected(&self) -> RecordKind {
        self.selected
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.phase == Phase::ConfirmingDelete
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn stations(&self) -> &[HsrStation] {
        &self.stations
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Snapshot of the currently selected listing as uniform records.
    pub fn selected_records(&self) -> Vec<Record> {
        match self.selected {
            RecordKind::Category => self.categories.iter().cloned().map(Record::from).collect(),
            RecordKind::Transaction => {
                self.transactions.iter().cloned().map(Record::from).collect()
            }
            RecordKind::HsrStation => self.stations.iter().cloned().map(Record::from).collect(),
        }
    }

    /// Initial load: category cache first (validation needs it), then the
    /// selected listing.
    pub fn bootstrap(&mut self) -> Notice {
        let warmed = self.refresh_categories();
        if warmed.is_error() {
            warn!("category cache load failed during bootstrap: {warmed}");
        }
        self.refresh()
    }

    pub fn select_kind(&mut self, kind: RecordKind) -> Notice {
        debug!(kind = %kind, "switching record kind");
        self.selected = kind;
        self.refresh()
    }

    /// Reloads the selected listing through one full request/response cycle.
    pub fn refresh(&mut self) -> Notice {
        let ticket = self.begin_load(self.selected);
        let result = self.store.list(ticket.kind);
        self.finish_load(ticket, result)
    }

    /// Reloads the category cache without touching the selected kind.
    pub fn refresh_categories(&mut self) -> Notice {
        let ticket = self.begin_load(RecordKind::Category);
        let result = self.store.list(RecordKind::Category);
        self.finish_load(ticket, result)
    }

    /// Issues a listing request for `kind` and returns its receipt.
    pub fn begin_load(&mut self, kind: RecordKind) -> LoadTicket {
        self.load_seq += 1;
        self.issued[kind_index(kind)] = self.load_seq;
        self.phase = Phase::Loading;
        LoadTicket {
            kind,
            seq: self.load_seq,
        }
    }

    /// Applies a listing response. Stale tickets are discarded without
    /// touching state.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: StoreResult<RecordList>) -> Notice {
        if self.issued[kind_index(ticket.kind)] != ticket.seq {
            debug!(kind = %ticket.kind, seq = ticket.seq, "discarding stale listing response");
            return Notice::info(format!("ignored a stale {} listing", ticket.kind));
        }
        self.phase = Phase::Idle;
        match result {
            Ok(list) => {
                let count = list.len();
                match list {
                    RecordList::Categories(items) => self.categories = items,
                    RecordList::Transactions(items) => self.transactions = items,
                    RecordList::HsrStations(items) => self.stations = items,
                }
                Notice::info(format!("loaded {count} {}", ticket.kind))
            }
            Err(err) => Notice::from_admin_error(&err),
        }
    }

    /// Opens an empty draft of the selected kind.
    pub fn begin_add(&mut self) {
        self.draft = Some(Draft::empty(self.selected));
        self.phase = Phase::Editing;
    }

    /// Clones an existing record into the draft buffer.
    pub fn begin_edit(&mut self, record: Record) {
        self.draft = Some(Draft::from(record));
        self.phase = Phase::Editing;
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
        self.phase = Phase::Idle;
    }

    /// Validates and submits the open draft.
    ///
    /// Validation failures and store failures both leave the draft open so
    /// the operator can correct and retry; success closes it and reloads the
    /// affected listings.
    pub fn save(&mut self) -> Notice {
        let Some(draft) = self.draft.clone() else {
            return Notice::error("nothing to save");
        };
        let errors = draft.validate(&self.categories);
        if !errors.is_empty() {
            return Notice::error(errors.join("; "));
        }

        let record = draft.as_record();
        let kind = record.kind();
        let persisted = record.is_persisted();
        let result = match record.id().filter(|id| !id.is_empty()) {
            Some(id) => self.store.update(id, &record),
            None => self.store.create(&record),
        };

        match result {
            Ok(_) => {
                self.draft = None;
                self.phase = Phase::Idle;
                let verb = if persisted { "updated" } else { "created" };
                debug!(kind = %kind, "record {verb}");
                let outcome = Notice::info(format!("{} {verb}", kind.singular()));
                self.reload_after_mutation(kind, outcome)
            }
            Err(err) => Notice::from_admin_error(&err),
        }
    }

    /// Records the delete target and opens the confirmation step. Returns a
    /// notice only when the identifier is unusable.
    pub fn request_delete(&mut self, id: &str) -> Option<Notice> {
        if id.trim().is_empty() {
            return Some(Notice::error("invalid identifier"));
        }
        self.pending_delete = Some(id.to_string());
        self.phase = Phase::ConfirmingDelete;
        None
    }

    /// Issues the destructive call for the pending target.
    ///
    /// The pending identifier is cleared and the listing reloaded whether the
    /// call succeeded or not.
    pub fn confirm_delete(&mut self) -> Notice {
        let Some(id) = self.pending_delete.clone() else {
            return Notice::error("no deletion pending");
        };
        let kind = self.selected;
        let result = self.store.delete(kind, &id);

        self.pending_delete = None;
        self.phase = Phase::Idle;

        let outcome = match result {
            Ok(()) => Notice::info(format!("{} deleted", kind.singular())),
            Err(err) => Notice::from_admin_error(&err),
        };
        self.reload_after_mutation(kind, outcome)
    }

    /// Discards the pending delete target without any call.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.phase = Phase::Idle;
    }

    /// Case-insensitive substring search over the cached category listing.
    /// Empty search text yields no suggestions.
    pub fn search_categories(&self, text: &str) -> Vec<&Category> {
        if text.is_empty() {
            return Vec::new();
        }
        let needle = text.to_lowercase();
        self.categories
            .iter()
            .filter(|category| category.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Writes a suggested category name into the open transaction draft.
    /// Returns false when no transaction draft is open.
    pub fn choose_category(&mut self, name: &str) -> bool {
        match self.draft.as_mut() {
            Some(Draft::Transaction(transaction)) => {
                transaction.category = name.to_string();
                true
            }
            _ => false,
        }
    }

    fn reload_after_mutation(&mut self, kind: RecordKind, outcome: Notice) -> Notice {
        if kind == RecordKind::Category && self.selected != RecordKind::Category {
            let warmed = self.refresh_categories();
            if warmed.is_error() {
                return warmed;
            }
        }
        let reload = self.refresh();
        if reload.is_error() {
            reload
        } else {
            outcome
        }
    }
}

fn kind_index(kind: RecordKind) -> usize {
    match kind {
        RecordKind::Category => 0,
        RecordKind::Transaction => 1,
        RecordKind::HsrStation => 2,
    }
}
