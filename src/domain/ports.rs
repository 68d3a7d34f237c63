use crate::domain::model::{Deal, Pipeline};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Source of pipelines and deals. Implemented by the live HubSpot client and
/// by the demo generator so both feed the same export path.
///
/// Listing pipelines is fatal on failure; fetching deals is not. A fetch
/// failure mid-pagination yields whatever was accumulated so far.
#[async_trait]
pub trait DealSource: Send + Sync {
    async fn list_pipelines(&self) -> Result<Vec<Pipeline>>;
    async fn fetch_deals_for_pipeline(&self, pipeline_id: &str) -> Vec<Deal>;
}
