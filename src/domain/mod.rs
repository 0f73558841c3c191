pub mod category;
pub mod common;
pub mod record;
pub mod station;
pub mod transaction;

pub use category::Category;
pub use record::{Record, RecordKind, RecordList};
pub use station::HsrStation;
pub use transaction::Transaction;
