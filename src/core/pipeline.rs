use crate::core::state::CatalogState;
use crate::core::{CatalogReport, ConfigProvider, Pipeline, Snapshot, Storage};
use crate::utils::error::{CatalogError, Result};
use reqwest::Client;

/// Hard cap on the page requested from the API; keeps the in-memory
/// transforms responsive.
pub const MAX_PAGE_SIZE: u32 = 300;

pub struct ApiPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ApiPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    fn products_url(&self) -> String {
        format!(
            "{}/api/products",
            self.config.api_base_url().trim_end_matches('/')
        )
    }

    async fn write_csv<T: serde::Serialize>(&self, path: &str, rows: &[T]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rows {
            writer.serialize(row)?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| CatalogError::ProcessingError {
                message: format!("CSV buffer flush failed: {}", e),
            })?;
        self.storage.write_file(path, &data).await
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ApiPipeline<S, C> {
    /// Requests one bounded, filtered page and turns it into a fresh snapshot.
    async fn fetch(&self) -> Result<Snapshot> {
        let mut filter = self.config.filter();
        let page_size = filter
            .page_size
            .unwrap_or_else(|| self.config.page_size())
            .min(MAX_PAGE_SIZE);
        filter.page_size = Some(page_size);

        let url = self.products_url();
        tracing::debug!("Fetching products from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&filter.to_query())
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("API response status: {}", response.status());

        let page: crate::domain::model::ProductPage = response.json().await?;
        tracing::debug!(
            "Received {} of {} products",
            page.results.len(),
            page.count
        );

        Ok(Snapshot::new(page.results, page.count))
    }

    /// Pure step: derives range, histogram and scatter, then applies the
    /// requested table order.
    fn analyze(&self, snapshot: Snapshot) -> Result<CatalogReport> {
        let mut state = CatalogState::new(snapshot);
        if let Some(spec) = self.config.sort_spec() {
            state.apply_sort(spec);
        }
        Ok(state.report())
    }

    async fn export(&self, report: &CatalogReport) -> Result<String> {
        self.write_csv("products.csv", &report.products).await?;
        self.write_csv("price_histogram.csv", &report.histogram)
            .await?;
        self.write_csv("discount_scatter.csv", &report.scatter)
            .await?;

        tracing::debug!(
            "Exported {} products, {} buckets, {} scatter points",
            report.products.len(),
            report.histogram.len(),
            report.scatter.len()
        );
        Ok(self.config.output_path().to_string())
    }
}
