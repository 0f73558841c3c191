pub mod rest_backend;

use crate::domain::{Record, RecordKind, RecordList};
use crate::errors::AdminError;

pub type Result<T> = std::result::Result<T, AdminError>;

/// Abstraction over the remote record store consumed by the controller.
///
/// One list/fetch/create/update/delete capability per record kind, each a
/// single request/response exchange. Implementations forward failures to the
/// caller untransformed; they never retry and never cache.
pub trait RecordStore: Send + Sync {
    fn list(&self, kind: RecordKind) -> Result<RecordList>;
    fn fetch(&self, kind: RecordKind, id: &str) -> Result<Record>;
    fn create(&self, record: &Record) -> Result<Record>;
    fn update(&self, id: &str, record: &Record) -> Result<Record>;
    fn delete(&self, kind: RecordKind, id: &str) -> Result<()>;
}

pub use rest_backend::RestClient;
