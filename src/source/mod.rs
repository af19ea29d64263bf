//! Remote page sources.
//!
//! This module provides the fetch collaborator the table controller talks to:
//! - [`PageFetcher`]: the one operation the controller needs
//! - [`HttpFetcher`]: blocking HTTP implementation against a DummyJSON-style API
//! - [`FetchWorker`]: runs tickets off the UI thread and hands back outcomes

use crate::model::{FetchError, Page, Record, RequestDescriptor, ResourceKind};
use serde_json::Value;

pub mod http;
pub mod worker;

pub use http::HttpFetcher;
pub use worker::FetchWorker;

/// Fetch one page of a remote listing.
///
/// Implementations must be callable from worker threads.
pub trait PageFetcher: Send + Sync {
    /// Run `request` and return its page.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport failures, non-success statuses and
    /// malformed bodies.
    fn fetch_page(&self, request: &RequestDescriptor) -> Result<Page, FetchError>;
}

impl<F> PageFetcher for F
where
    F: Fn(&RequestDescriptor) -> Result<Page, FetchError> + Send + Sync,
{
    fn fetch_page(&self, request: &RequestDescriptor) -> Result<Page, FetchError> {
        self(request)
    }
}

/// Decode a response body of the form `{"<collection>": [...], "total": n}`.
///
/// Non-object array elements become empty records. A missing `total` falls
/// back to the number of items on the page.
///
/// # Errors
///
/// Returns `FetchError::MissingCollection` if the body has no array under
/// the resource's collection key.
pub fn parse_page(resource: ResourceKind, body: Value) -> Result<Page, FetchError> {
    let collection = resource.collection();
    let Value::Object(mut fields) = body else {
        return Err(FetchError::MissingCollection { collection });
    };

    let items = match fields.remove(collection) {
        Some(Value::Array(items)) => items,
        _ => return Err(FetchError::MissingCollection { collection }),
    };

    let total = fields
        .get("total")
        .and_then(Value::as_u64)
        .unwrap_or(items.len() as u64);

    Ok(Page {
        items: items.into_iter().map(Record::from).collect(),
        total,
    })
}
