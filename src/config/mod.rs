pub mod cli;

pub use cli::LocalStorage;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{ProductFilter, SortDirection, SortField, SortSpec};
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_page_size, validate_path, validate_rating_bound, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-lens")]
#[command(about = "Fetches a filtered product page and derives table and chart data from it")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8000")]
    pub api_base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Substring match against product names")]
    pub query: Option<String>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    #[arg(long)]
    pub min_sale_price: Option<f64>,

    #[arg(long)]
    pub max_sale_price: Option<f64>,

    #[arg(long)]
    pub min_rating: Option<f64>,

    #[arg(long)]
    pub min_reviews: Option<u64>,

    #[arg(long, help = "Server-side ordering expression, passed through as-is")]
    pub ordering: Option<String>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long, default_value = "300")]
    pub page_size: u32,

    #[arg(long, value_enum, help = "Column to order the exported table by")]
    pub sort_by: Option<SortField>,

    #[arg(long, value_enum, default_value = "ascending")]
    pub direction: SortDirection,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn filter(&self) -> ProductFilter {
        ProductFilter {
            query: self.query.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_sale_price: self.min_sale_price,
            max_sale_price: self.max_sale_price,
            min_rating: self.min_rating,
            min_reviews: self.min_reviews,
            ordering: self.ordering.clone(),
            page: self.page,
            page_size: Some(self.page_size),
        }
    }

    fn sort_spec(&self) -> Option<SortSpec> {
        self.sort_by.map(|field| SortSpec {
            field,
            direction: self.direction,
        })
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_page_size("page_size", self.page_size, crate::core::pipeline::MAX_PAGE_SIZE)?;
        if let Some(rating) = self.min_rating {
            validate_rating_bound("min_rating", rating)?;
        }
        Ok(())
    }
}
