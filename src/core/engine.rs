use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through its three stages: fetch, analyze, export.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching product page...");
        let snapshot = self.pipeline.fetch().await?;
        tracing::info!(
            "Loaded {} products ({} matching in total)",
            snapshot.len(),
            snapshot.total
        );

        let report = self.pipeline.analyze(snapshot)?;
        tracing::info!(
            "Sale price range {} - {}, {} histogram buckets, {} scatter points",
            report.price_range.min,
            report.price_range.max,
            report.histogram.len(),
            report.scatter.len()
        );

        let output_path = self.pipeline.export(&report).await?;
        tracing::info!("Reports written to: {}", output_path);

        Ok(output_path)
    }
}
