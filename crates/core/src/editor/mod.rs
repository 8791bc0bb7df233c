//! Row editor - the add-currency dialog, its draft, and live rate lookups.

mod editor_errors;
mod editor_model;
mod lookup;
mod lookup_gate;
mod row_editor;

pub use editor_errors::RowEditorError;
pub use editor_model::{Draft, LookupOutcome, LookupRequest, LookupResponse, ModalState};
pub use lookup::run_lookup;
pub use lookup_gate::LookupGate;
pub use row_editor::RowEditor;
