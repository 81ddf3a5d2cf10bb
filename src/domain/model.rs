use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One catalog listing as delivered by the remote API.
///
/// `price` (list price) and `sale_price` arrive as decimal strings and are only
/// used after an explicit parse; `rating` is absent when a product has no
/// reviews yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub price: String,
    pub sale_price: String,
    pub rating: Option<f64>,
    pub feedbacks: u64,
}

impl Product {
    /// Parsed list price, `None` when the string is not a number.
    pub fn parsed_price(&self) -> Option<f64> {
        self.price.trim().parse().ok()
    }

    /// Parsed sale price, `None` when the string is not a number.
    pub fn parsed_sale_price(&self) -> Option<f64> {
        self.sale_price.trim().parse().ok()
    }

    /// Rating with an absent value collapsed to zero, the way the table sorts it.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Paginated wire response from `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Product>,
}

/// The full set of records currently loaded. Replaced wholesale on every fetch,
/// never merged incrementally.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub total: u64,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(products: Vec<Product>, total: u64) -> Self {
        Self {
            products,
            total,
            fetched_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Remote query parameters for a filtered fetch. Unset fields are left out of
/// the request entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub query: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_sale_price: Option<f64>,
    pub max_sale_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub min_reviews: Option<u64>,
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ProductFilter {
    /// URL query pairs for the fetch, skipping unset fields.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(query) = &self.query {
            if !query.is_empty() {
                params.push(("query", query.clone()));
            }
        }
        if let Some(v) = self.min_price {
            params.push(("min_price", v.to_string()));
        }
        if let Some(v) = self.max_price {
            params.push(("max_price", v.to_string()));
        }
        if let Some(v) = self.min_sale_price {
            params.push(("min_sale_price", v.to_string()));
        }
        if let Some(v) = self.max_sale_price {
            params.push(("max_sale_price", v.to_string()));
        }
        if let Some(v) = self.min_rating {
            params.push(("min_rating", v.to_string()));
        }
        if let Some(v) = self.min_reviews {
            params.push(("min_reviews", v.to_string()));
        }
        if let Some(ordering) = &self.ordering {
            if !ordering.is_empty() {
                params.push(("ordering", ordering.clone()));
            }
        }
        if let Some(v) = self.page {
            params.push(("page", v.to_string()));
        }
        if let Some(v) = self.page_size {
            params.push(("page_size", v.to_string()));
        }
        params
    }
}

/// Column a table sort runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Price,
    SalePrice,
    Rating,
    Feedbacks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Transient sort request; lives only for the current render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Integer sale-price bounds used to seed the filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// One equal-width subdivision of the sale-price domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub label: String,
    pub count: usize,
}

/// One (rating, discount) point with the metadata a tooltip shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub name: String,
    pub rating: f64,
    pub discount: i64,
    pub price: f64,
    pub sale_price: f64,
}

/// Everything derived from one snapshot, ready for rendering or export.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub total: u64,
    pub fetched_at: DateTime<Utc>,
    pub products: Vec<Product>,
    pub price_range: PriceRange,
    pub histogram: Vec<PriceBucket>,
    pub scatter: Vec<ScatterPoint>,
}
