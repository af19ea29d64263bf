//! Resource kinds and their static table layout.
//!
//! Each resource kind is served by its own controller instance. The kinds
//! differ only in which columns are shown, which fields can be filtered, and
//! which query rules the builder applies.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

// ===== ResourceKind =====

/// One of the two independent remote listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// `/users`
    Users,
    /// `/products`
    Products,
}

impl ResourceKind {
    /// All kinds, in display order.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Users, ResourceKind::Products];

    /// Path segment of the remote collection, also the JSON key holding the
    /// page items in the response body.
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Products => "products",
        }
    }

    /// Human-readable title used by the rendering shell.
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Users => "Users",
            ResourceKind::Products => "Products",
        }
    }

    /// Columns rendered (and searched) for this resource.
    pub fn columns(self) -> &'static [Column] {
        match self {
            ResourceKind::Users => USER_COLUMNS,
            ResourceKind::Products => PRODUCT_COLUMNS,
        }
    }

    /// Fields the user may filter on, in menu order.
    pub fn filter_fields(self) -> &'static [FilterField] {
        match self {
            ResourceKind::Users => USER_FILTERS,
            ResourceKind::Products => PRODUCT_FILTERS,
        }
    }

    /// The other resource kind.
    pub fn toggle(self) -> Self {
        match self {
            ResourceKind::Users => ResourceKind::Products,
            ResourceKind::Products => ResourceKind::Users,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(ResourceKind::Users),
            "products" => Ok(ResourceKind::Products),
            other => Err(format!("unknown resource '{other}'")),
        }
    }
}

// ===== Column / FilterField =====

/// A visible table column: dot-path into the record plus a header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Dot-path looked up in each record.
    pub key: &'static str,
    /// Header text.
    pub label: &'static str,
}

/// A field offered in the filter menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    /// Filter key sent to the controller.
    pub key: &'static str,
    /// Name shown in the filter prompt.
    pub label: &'static str,
}

const USER_COLUMNS: &[Column] = &[
    Column { key: "firstName", label: "FIRST NAME" },
    Column { key: "lastName", label: "LAST NAME" },
    Column { key: "maidenName", label: "MAIDEN NAME" },
    Column { key: "age", label: "AGE" },
    Column { key: "gender", label: "GENDER" },
    Column { key: "email", label: "EMAIL" },
    Column { key: "username", label: "USERNAME" },
    Column { key: "bloodGroup", label: "BLOODGROUP" },
    Column { key: "eyeColor", label: "EYECOLOR" },
];

const PRODUCT_COLUMNS: &[Column] = &[
    Column { key: "title", label: "TITLE" },
    Column { key: "description", label: "DESCRIPTION" },
    Column { key: "price", label: "PRICE" },
    Column { key: "discountPercentage", label: "DISCOUNT" },
    Column { key: "rating", label: "RATING" },
    Column { key: "stock", label: "STOCK" },
    Column { key: "brand", label: "BRAND" },
    Column { key: "category", label: "CATEGORY" },
];

const USER_FILTERS: &[FilterField] = &[
    FilterField { key: "firstName", label: "Name" },
    FilterField { key: "email", label: "Email" },
    FilterField { key: "gender", label: "Gender" },
];

const PRODUCT_FILTERS: &[FilterField] = &[
    FilterField { key: "title", label: "Title" },
    FilterField { key: "brand", label: "Brand" },
    FilterField { key: "category", label: "Category" },
];

// ===== PageSize =====

/// Error returned when a page size outside the allowed set is requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid page size {0}: expected one of 5, 10, 20, 50")]
pub struct InvalidPageSize(pub u32);

/// Rows per page. Only the values offered by the page-size menu exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PageSize {
    /// 5 rows.
    #[default]
    Five,
    /// 10 rows.
    Ten,
    /// 20 rows.
    Twenty,
    /// 50 rows.
    Fifty,
}

impl PageSize {
    /// Menu order.
    pub const OPTIONS: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
    ];

    /// Numeric row count.
    pub fn get(self) -> u32 {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }

    /// Next larger size, saturating at 50.
    pub fn cycle_next(self) -> Self {
        let idx = self.index();
        Self::OPTIONS[(idx + 1).min(Self::OPTIONS.len() - 1)]
    }

    /// Next smaller size, saturating at 5.
    pub fn cycle_prev(self) -> Self {
        Self::OPTIONS[self.index().saturating_sub(1)]
    }

    fn index(self) -> usize {
        Self::OPTIONS
            .iter()
            .position(|&size| size == self)
            .unwrap_or(0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            50 => Ok(PageSize::Fifty),
            other => Err(InvalidPageSize(other)),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// ===== Category =====

/// Category tab selection for the products resource.
///
/// `ALL` means no category scoping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    /// Name of the unscoped tab.
    pub const ALL: &'static str = "ALL";

    /// Category with the given slug, taken verbatim.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The `ALL` tab.
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// True for the `ALL` tab.
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// Slug as sent in the category path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
