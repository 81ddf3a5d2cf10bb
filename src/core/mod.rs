pub mod engine;
pub mod histogram;
pub mod pipeline;
pub mod range;
pub mod scatter;
pub mod sort;
pub mod state;

pub use crate::domain::model::{
    CatalogReport, PriceBucket, PriceRange, Product, ProductFilter, ProductPage, ScatterPoint,
    Snapshot, SortDirection, SortField, SortSpec,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
