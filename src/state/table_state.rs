//! Per-resource table state machine (pure).
//!
//! A [`TableState`] owns everything one listing needs: the fetched page,
//! loading and error flags, pagination position, filters, search term and
//! category tab. It changes only through the intent methods below.
//!
//! # Fetch protocol
//!
//! Intents that change a page-affecting field (page, page size, filters,
//! category) return a [`FetchTicket`]. The shell runs the ticket's request
//! and hands the result back through [`TableState::apply_outcome`]. Every
//! ticket carries a sequence number; only the most recently issued ticket is
//! applied, so a slow response for an old request can never overwrite the
//! result of a newer one.
//!
//! Status is derived, never stored:
//!
//! | loading | error | loaded once | status  |
//! |---------|-------|-------------|---------|
//! | true    | -     | -           | Loading |
//! | false   | Some  | -           | Failed  |
//! | false   | None  | true        | Loaded  |
//! | false   | None  | false       | Idle    |

use crate::model::{
    Category, FetchError, Filters, Page, PageSize, Record, RequestDescriptor, ResourceKind,
};
use crate::state::pagination::{compute_window, total_pages, PageMarker};
use crate::state::query::build_request;
use crate::state::search::filter_records;
use chrono::{DateTime, Local};
use tracing::{debug, warn};

// ===== Fetch protocol types =====

/// A request the shell must run on behalf of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Table that issued the request.
    pub resource: ResourceKind,
    /// Issue order within the table; only the latest is applied.
    pub seq: u64,
    /// Endpoint and parameters to fetch.
    pub request: RequestDescriptor,
}

/// The result of running a [`FetchTicket`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// Table the ticket was issued by.
    pub resource: ResourceKind,
    /// Sequence number copied from the ticket.
    pub seq: u64,
    /// Page on success, or the reason the fetch failed.
    pub result: Result<Page, FetchError>,
}

impl FetchOutcome {
    /// Pair a result with the ticket it answers.
    pub fn for_ticket(ticket: &FetchTicket, result: Result<Page, FetchError>) -> Self {
        Self {
            resource: ticket.resource,
            seq: ticket.seq,
            result,
        }
    }
}

/// What [`TableState::apply_outcome`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// Page replaced the previous items and total.
    Applied,
    /// Error recorded; previous items and total kept.
    Failed,
    /// Outcome answered a superseded request and was dropped.
    Stale,
}

/// Derived lifecycle status of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// Nothing fetched yet.
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last request succeeded.
    Loaded,
    /// The last request failed; previous rows stay.
    Failed,
}

/// The fields whose change requires a new fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PageKey {
    page: u32,
    page_size: PageSize,
    filters: Filters,
    category: Category,
}

// ===== TableState =====

/// Mutable state for one resource listing.
#[derive(Debug, Clone)]
pub struct TableState {
    resource: ResourceKind,
    items: Vec<Record>,
    loading: bool,
    error: Option<String>,
    page: u32,
    page_size: PageSize,
    total: u64,
    search_term: String,
    filters: Filters,
    category: Category,
    next_seq: u64,
    in_flight: Option<u64>,
    last_loaded_at: Option<DateTime<Local>>,
}

impl TableState {
    /// Fresh state: page 1, default page size, no filters, category `ALL`.
    pub fn new(resource: ResourceKind) -> Self {
        Self::with_page_size(resource, PageSize::default())
    }

    /// Idle table starting at `page_size` rows per page.
    pub fn with_page_size(resource: ResourceKind, page_size: PageSize) -> Self {
        Self {
            resource,
            items: Vec::new(),
            loading: false,
            error: None,
            page: 1,
            page_size,
            total: 0,
            search_term: String::new(),
            filters: Filters::new(),
            category: Category::default(),
            next_seq: 1,
            in_flight: None,
            last_loaded_at: None,
        }
    }

    // ===== Accessors =====

    /// Resource this table lists.
    pub fn resource(&self) -> ResourceKind {
        self.resource
    }

    /// Raw fetched page, before the search term is applied.
    pub fn items(&self) -> &[Record] {
        &self.items
    }

    /// True while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, cleared by the next request.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current page, 1-based.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Server-reported row count from the last successful fetch.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Client-side search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Active server-side filters.
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Selected category tab (products only).
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Local time of the last successful fetch.
    pub fn last_loaded_at(&self) -> Option<DateTime<Local>> {
        self.last_loaded_at
    }

    /// Sequence number of the outstanding request, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Lifecycle status derived from the loading and error fields.
    pub fn status(&self) -> TableStatus {
        if self.loading {
            TableStatus::Loading
        } else if self.error.is_some() {
            TableStatus::Failed
        } else if self.last_loaded_at.is_some() {
            TableStatus::Loaded
        } else {
            TableStatus::Idle
        }
    }

    /// Page count for the current `total` and page size.
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size.get())
    }

    /// Pagination bar markers, or `None` when there is at most one page.
    pub fn page_markers(&self) -> Option<Vec<PageMarker>> {
        let pages = self.total_pages();
        (pages > 1).then(|| compute_window(self.page, pages))
    }

    /// The request the current state maps to.
    pub fn current_request(&self) -> RequestDescriptor {
        build_request(self)
    }

    /// Read-only view model for the rendering layer.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            resource: self.resource,
            items: filter_records(&self.items, &self.search_term, self.resource.columns()),
            loading: self.loading,
            error: self.error.as_deref(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages(),
            markers: self.page_markers(),
            search_term: &self.search_term,
            filters: &self.filters,
            category: &self.category,
            status: self.status(),
            last_loaded_at: self.last_loaded_at,
        }
    }

    // ===== Intents =====

    /// Initial fetch at mount.
    pub fn start(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Reissue the current request unconditionally.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Go to `page`.
    ///
    /// Pages below 1 clamp to 1. Once a total is known, pages past the last
    /// one clamp to the last page.
    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        let mut target = page.max(1);
        let pages = self.total_pages();
        if pages > 0 {
            target = target.min(pages);
        }
        self.transition(|state| state.page = target)
    }

    /// Step forward one page, stopping at the last.
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.page.saturating_add(1))
    }

    /// Step back one page, stopping at the first.
    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Jump to page 1.
    pub fn first_page(&mut self) -> Option<FetchTicket> {
        self.set_page(1)
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.total_pages())
    }

    /// Change rows per page; always returns to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) -> Option<FetchTicket> {
        self.transition(|state| {
            state.page_size = page_size;
            state.page = 1;
        })
    }

    /// Apply a filter; always returns to page 1.
    ///
    /// Products keep a single active filter: a non-empty value replaces all
    /// others, an empty value clears every filter, and a `category` filter
    /// switches the category tab back to `ALL`. Users accumulate filters per
    /// field; an empty value removes that field.
    pub fn set_filter(&mut self, field: &str, value: &str) -> Option<FetchTicket> {
        let resource = self.resource;
        self.transition(|state| {
            match (resource, value.is_empty()) {
                (ResourceKind::Products, true) => state.filters.clear(),
                (ResourceKind::Products, false) => {
                    state.filters = Filters::single(field, value);
                    if field == "category" {
                        state.category = Category::all();
                    }
                }
                (ResourceKind::Users, true) => {
                    state.filters.remove(field);
                }
                (ResourceKind::Users, false) => state.filters.insert(field, value),
            }
            state.page = 1;
        })
    }

    /// Drop every filter; always returns to page 1.
    pub fn reset_filters(&mut self) -> Option<FetchTicket> {
        self.transition(|state| {
            state.filters.clear();
            state.page = 1;
        })
    }

    /// Select a category tab (products only); clears filters and returns to
    /// page 1. Ignored for users.
    pub fn set_category(&mut self, category: Category) -> Option<FetchTicket> {
        if self.resource != ResourceKind::Products {
            return None;
        }
        self.transition(|state| {
            state.filters.clear();
            state.category = category;
            state.page = 1;
        })
    }

    /// Change the client-side search term. Never fetches.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    // ===== Fetch results =====

    /// Apply the result of a previously issued ticket.
    ///
    /// Outcomes for anything but the latest ticket are dropped.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> ApplyResult {
        if outcome.resource != self.resource {
            warn!(
                expected = %self.resource,
                got = %outcome.resource,
                "Outcome routed to wrong table, dropping"
            );
            return ApplyResult::Stale;
        }

        if self.in_flight != Some(outcome.seq) {
            debug!(
                resource = %self.resource,
                seq = outcome.seq,
                in_flight = ?self.in_flight,
                "Dropping stale fetch outcome"
            );
            return ApplyResult::Stale;
        }

        self.in_flight = None;
        self.loading = false;

        match outcome.result {
            Ok(page) => {
                debug!(
                    resource = %self.resource,
                    seq = outcome.seq,
                    rows = page.items.len(),
                    total = page.total,
                    "Applied fetched page"
                );
                self.items = page.items;
                self.total = page.total;
                self.error = None;
                self.last_loaded_at = Some(Local::now());
                ApplyResult::Applied
            }
            Err(err) => {
                warn!(resource = %self.resource, seq = outcome.seq, error = %err, "Fetch failed");
                self.error = Some(err.to_string());
                ApplyResult::Failed
            }
        }
    }

    // ===== Internals =====

    fn page_key(&self) -> PageKey {
        PageKey {
            page: self.page,
            page_size: self.page_size,
            filters: self.filters.clone(),
            category: self.category.clone(),
        }
    }

    /// Run `change`, then issue a ticket iff a page-affecting field moved.
    fn transition(&mut self, change: impl FnOnce(&mut Self)) -> Option<FetchTicket> {
        let before = self.page_key();
        change(self);
        (self.page_key() != before).then(|| self.issue())
    }

    fn issue(&mut self) -> FetchTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.loading = true;
        self.error = None;

        let request = build_request(self);
        debug!(
            resource = %self.resource,
            seq,
            path = %request.path(),
            params = ?request.params,
            "Issuing fetch"
        );

        FetchTicket {
            resource: self.resource,
            seq,
            request,
        }
    }
}

// ===== TableView =====

/// Read-only snapshot handed to the rendering layer.
///
/// `items` already has the search term applied; `total` is still the
/// server's count for the whole query.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    /// Resource this snapshot belongs to.
    pub resource: ResourceKind,
    /// Rows of the current page matching the search term.
    pub items: Vec<&'a Record>,
    /// A request is outstanding.
    pub loading: bool,
    /// Message of the last failed fetch.
    pub error: Option<&'a str>,
    /// Current page, 1-based.
    pub page: u32,
    /// Rows per page.
    pub page_size: PageSize,
    /// Server-side row count.
    pub total: u64,
    /// Page count derived from `total`.
    pub total_pages: u32,
    /// Pagination bar contents; `None` hides the page numbers.
    pub markers: Option<Vec<PageMarker>>,
    /// Client-side search term.
    pub search_term: &'a str,
    /// Active server-side filters.
    pub filters: &'a Filters,
    /// Selected category tab.
    pub category: &'a Category,
    /// Lifecycle status.
    pub status: TableStatus,
    /// Time of the last successful fetch.
    pub last_loaded_at: Option<DateTime<Local>>,
}

// ===== Tests =====

#[cfg(test)]
#[path = "table_state_tests.rs"]
mod tests;
