//! Selection filter panel
//!
//! - `checklist`: tri-state rows with a single user-change listener
//! - `host`: the document and accessibility collaborators
//! - `panel`: binds a document and keeps checklist and mask in sync

pub mod checklist;
pub mod host;
pub mod panel;

pub use checklist::{CheckState, ChecklistRow, FilterChecklist, RowChanged, RowId, RowView, AGGREGATE_ROW};
pub use host::{AccessibleStateChange, Announcer, FilterHost, LogAnnouncer};
pub use panel::FilterPanel;
