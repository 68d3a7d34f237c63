use crate::config::ReporterConfig;
use crate::domain::model::{Deal, DealPage, Pipeline, PipelineList};
use crate::domain::ports::DealSource;
use crate::utils::error::{ReporterError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Properties requested on every deal page. `pipeline` is only used for
/// client-side filtering and never rendered.
const DEAL_PROPERTIES: &str = "dealname,amount,dealstage,closedate,pipeline,createdate";
const PAGE_SIZE: &str = "100";

pub struct HubSpotClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HubSpotClient {
    pub fn new(config: &ReporterConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    async fn fetch_deal_page(&self, after: Option<&str>) -> Result<DealPage> {
        let url = format!("{}/crm/v3/objects/deals", self.base_url);

        tracing::debug!("Making API request to: {}", url);
        let mut request = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("properties", DEAL_PROPERTIES), ("limit", PAGE_SIZE)]);

        if let Some(cursor) = after {
            request = request.query(&[("after", cursor)]);
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ReporterError::ApiStatusError {
                url,
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<DealPage>().await?)
    }
}

#[async_trait]
impl DealSource for HubSpotClient {
    /// One authenticated GET; any failure is returned to the caller, which
    /// treats it as fatal. No retry.
    async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        let url = format!("{}/crm/v3/pipelines/deals", self.base_url);

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ReporterError::ApiStatusError {
                url,
                status: response.status().as_u16(),
            });
        }

        let list = response.json::<PipelineList>().await?;
        Ok(list.results)
    }

    /// Cursor-paginated fetch. The API is queried unfiltered and deals are
    /// matched against the pipeline id here. A failure mid-pagination is
    /// logged and whatever was accumulated so far is returned.
    async fn fetch_deals_for_pipeline(&self, pipeline_id: &str) -> Vec<Deal> {
        let mut deals = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let page = match self.fetch_deal_page(after.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!("Error fetching deals: {}", e);
                    return deals;
                }
            };

            let next = page.next_cursor().map(str::to_string);

            deals.extend(
                page.results
                    .into_iter()
                    .filter(|deal| deal.properties.pipeline.as_deref() == Some(pipeline_id)),
            );

            match next {
                Some(cursor) => after = Some(cursor),
                None => break,
            }
        }

        deals
    }
}
