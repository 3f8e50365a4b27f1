//! User Interface module
//!
//! Terminal form and record table using ratatui.

pub mod app;
pub mod form;

pub use app::{Action, App, Notice, NoticeKind};
pub use form::FormState;
