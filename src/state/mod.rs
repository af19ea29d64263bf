//! Table controller state machine (pure).
//!
//! All state transitions are pure functions testable without TUI or network.

pub mod app_state;
pub mod input_handler;
pub mod pagination;
pub mod query;
pub mod search;
pub mod table_state;

// Re-export for convenience
pub use app_state::AppState;
pub use input_handler::{InputMode, TextInput};
pub use pagination::{compute_window, total_pages, PageMarker};
pub use query::build_request;
pub use search::filter_records;
pub use table_state::{
    ApplyResult, FetchOutcome, FetchTicket, TableState, TableStatus, TableView,
};
