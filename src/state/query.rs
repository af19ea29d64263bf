//! Query building (pure).
//!
//! Turns the page-affecting part of a [`TableState`] into the single
//! [`RequestDescriptor`] the remote provider is asked for. The function never
//! fails and reads nothing but its argument, so equal states always yield
//! equal requests.
//!
//! # Approximations
//!
//! The provider has no brand endpoint, so a products `brand` filter goes
//! through the generic text search. Likewise a users filter on any field
//! other than `firstName`/`lastName`/`gender` becomes an unscoped text
//! search for the value.

use crate::model::request::param;
use crate::model::{Category, Endpoint, Filters, RequestDescriptor, ResourceKind};
use crate::state::table_state::TableState;

/// Users fields the search endpoint can narrow to via `key=`.
const USER_SEARCH_KEYS: [&str; 2] = ["firstName", "lastName"];

/// Build the request for the current state.
pub fn build_request(state: &TableState) -> RequestDescriptor {
    let limit = state.page_size().get();
    let skip = u64::from(state.page().saturating_sub(1)) * u64::from(limit);

    let mut params = vec![
        (param::LIMIT.to_string(), limit.to_string()),
        (param::SKIP.to_string(), skip.to_string()),
    ];

    let endpoint = match state.resource() {
        ResourceKind::Products => {
            products_endpoint(state.filters(), state.category().as_str(), &mut params)
        }
        ResourceKind::Users => users_endpoint(state.filters(), &mut params),
    };

    RequestDescriptor {
        resource: state.resource(),
        endpoint,
        params,
    }
}

/// Products precedence: category filter, title, brand, category tab, listing.
fn products_endpoint(
    filters: &Filters,
    category: &str,
    params: &mut Vec<(String, String)>,
) -> Endpoint {
    if let Some(name) = filters.active("category") {
        return Endpoint::Category(name.to_string());
    }

    if let Some(text) = filters.active("title").or_else(|| filters.active("brand")) {
        params.push((param::QUERY.to_string(), text.to_string()));
        return Endpoint::Search;
    }

    if category != Category::ALL {
        return Endpoint::Category(category.to_string());
    }

    Endpoint::List
}

/// Users precedence: gender attribute filter, first other filter, listing.
fn users_endpoint(filters: &Filters, params: &mut Vec<(String, String)>) -> Endpoint {
    if let Some(gender) = filters.active("gender") {
        params.push((param::KEY.to_string(), "gender".to_string()));
        params.push((param::VALUE.to_string(), gender.to_lowercase()));
        return Endpoint::AttributeFilter;
    }

    if let Some((field, value)) = filters.first_active() {
        params.push((param::QUERY.to_string(), value.to_string()));
        if USER_SEARCH_KEYS.contains(&field) {
            params.push((param::KEY.to_string(), field.to_string()));
        }
        return Endpoint::Search;
    }

    Endpoint::List
}

// ===== Tests =====

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
