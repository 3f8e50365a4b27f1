//! Mobile Ledger - record mobile phones in a flat-file ledger
//!
//! A terminal form that appends one `!`-delimited line per phone to a
//! text file and mirrors the file in an on-screen table.

pub mod config;
pub mod logging;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use store::{Field, PhoneRecord, RecordStore, StoreError};
pub use ui::App;
