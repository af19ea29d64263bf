//! Outgoing request descriptors.
//!
//! A [`RequestDescriptor`] fully determines one remote page fetch. It is
//! produced by the query builder and consumed by the fetch collaborator.

use super::error::FetchError;
use super::resource::ResourceKind;
use url::Url;

/// Query parameter names understood by the remote provider.
pub mod param {
    /// Page length.
    pub const LIMIT: &str = "limit";
    /// Rows to skip before the page starts.
    pub const SKIP: &str = "skip";
    /// Free-text search term.
    pub const QUERY: &str = "q";
    /// Field name for attribute filters and scoped search.
    pub const KEY: &str = "key";
    /// Value for attribute filters.
    pub const VALUE: &str = "value";
}

/// Which remote endpoint of a resource collection a request targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Unscoped listing: `/{collection}`.
    List,
    /// Generic text search: `/{collection}/search?q=...`.
    Search,
    /// Category-scoped listing: `/{collection}/category/{name}`.
    Category(String),
    /// Attribute filter: `/{collection}/filter?key=...&value=...`.
    AttributeFilter,
}

/// Everything needed to issue one page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestDescriptor {
    /// Collection being listed.
    pub resource: ResourceKind,
    /// Endpoint shape within the collection.
    pub endpoint: Endpoint,
    /// Query parameters in emission order.
    pub params: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Path segments relative to the provider base URL.
    pub fn segments(&self) -> Vec<&str> {
        let collection = self.resource.collection();
        match &self.endpoint {
            Endpoint::List => vec![collection],
            Endpoint::Search => vec![collection, "search"],
            Endpoint::Category(name) => vec![collection, "category", name.as_str()],
            Endpoint::AttributeFilter => vec![collection, "filter"],
        }
    }

    /// Unencoded relative path, e.g. `products/category/laptops`.
    pub fn path(&self) -> String {
        self.segments().join("/")
    }

    /// Value of the first parameter named `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Absolute URL against `base`, with path segments and query encoded.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidBaseUrl` if `base` cannot carry a path
    /// (e.g. `mailto:` URLs).
    pub fn to_url(&self, base: &Url) -> Result<Url, FetchError> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidBaseUrl(base.to_string()))?;
            path.pop_if_empty();
            path.extend(self.segments());
        }
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.params);
        }
        Ok(url)
    }
}
