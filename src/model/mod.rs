//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod filters;
pub mod key_action;
pub mod record;
pub mod request;
pub mod resource;

// Re-export for convenience
pub use error::{AppError, FetchError};
pub use filters::Filters;
pub use key_action::KeyAction;
pub use record::{Page, Record};
pub use request::{Endpoint, RequestDescriptor};
pub use resource::{Category, Column, FilterField, InvalidPageSize, PageSize, ResourceKind};
