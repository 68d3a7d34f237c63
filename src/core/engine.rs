use crate::core::report::ReportExporter;
use crate::domain::ports::{DealSource, Storage};
use crate::utils::error::Result;

/// Drives one full fetch -> export sequence. A pipeline-listing failure is
/// returned to the caller; a deal-fetch failure surfaces only as a shorter
/// deal list (the source logs it).
pub struct ReportEngine<D: DealSource, S: Storage> {
    source: D,
    exporter: ReportExporter<S>,
}

impl<D: DealSource, S: Storage> ReportEngine<D, S> {
    pub fn new(source: D, exporter: ReportExporter<S>) -> Self {
        Self { source, exporter }
    }

    /// Returns the written file path, or `None` when there was nothing to
    /// export (no pipelines, or no deals in the selected pipeline).
    pub async fn run(&self) -> Result<Option<String>> {
        let pipelines = self.source.list_pipelines().await?;
        tracing::info!("Found {} pipeline(s)", pipelines.len());

        // Always the first pipeline in API response order; the ordering is
        // API-defined and not guaranteed stable across calls.
        let Some(pipeline) = pipelines.first() else {
            tracing::warn!("No pipelines found");
            return Ok(None);
        };

        tracing::info!("Fetching deals for pipeline: {}", pipeline.label);
        let deals = self.source.fetch_deals_for_pipeline(&pipeline.id).await;
        tracing::info!("Found {} deal(s)", deals.len());

        if deals.is_empty() {
            tracing::warn!("No deals found in this pipeline");
            return Ok(None);
        }

        let path = self.exporter.export(&pipeline.label, &deals).await?;
        tracing::info!("Report saved: {}", path);

        Ok(Some(path))
    }
}
