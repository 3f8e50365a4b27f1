//! Record storage
//!
//! Phone records, their line format, and the file-backed ledger.

pub mod error;
pub mod ledger;
pub mod record;

pub use error::StoreError;
pub use ledger::{RecordStore, DEFAULT_LEDGER_FILE};
pub use record::{Field, PhoneRecord, DELIMITER, FIELD_COUNT};
