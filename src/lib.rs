pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::LocalStorage;

pub use crate::core::engine::ReportEngine;
pub use crate::core::pipeline::ApiPipeline;
pub use crate::core::state::CatalogState;
pub use crate::domain::model::{
    CatalogReport, PriceBucket, PriceRange, Product, ProductFilter, ProductPage, ScatterPoint,
    Snapshot, SortDirection, SortField, SortSpec,
};
pub use crate::utils::error::{CatalogError, Result};
