use crate::domain::model::{CatalogReport, ProductFilter, Snapshot, SortSpec};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn filter(&self) -> ProductFilter;
    fn sort_spec(&self) -> Option<SortSpec>;
    fn page_size(&self) -> u32;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot>;
    fn analyze(&self, snapshot: Snapshot) -> Result<CatalogReport>;
    async fn export(&self, report: &CatalogReport) -> Result<String>;
}
