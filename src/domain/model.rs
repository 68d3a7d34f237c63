use serde::{Deserialize, Serialize};

/// Placeholder rendered for any deal property the API did not return.
pub const MISSING_FIELD: &str = "N/A";

/// The five display properties requested from the API, plus the pipeline id
/// used for client-side filtering. Field names match HubSpot property names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealProperties {
    pub dealname: Option<String>,
    pub amount: Option<String>,
    pub dealstage: Option<String>,
    pub closedate: Option<String>,
    pub pipeline: Option<String>,
    pub createdate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub properties: DealProperties,
}

impl Deal {
    /// Rendered cell values in report column order. Missing properties
    /// become the `N/A` placeholder, never an empty cell.
    pub fn display_fields(&self) -> [&str; 5] {
        let p = &self.properties;
        [
            p.dealname.as_deref().unwrap_or(MISSING_FIELD),
            p.amount.as_deref().unwrap_or(MISSING_FIELD),
            p.dealstage.as_deref().unwrap_or(MISSING_FIELD),
            p.closedate.as_deref().unwrap_or(MISSING_FIELD),
            p.createdate.as_deref().unwrap_or(MISSING_FIELD),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct PipelineList {
    pub results: Vec<Pipeline>,
}

/// One page of `/crm/v3/objects/deals`.
#[derive(Debug, Deserialize)]
pub struct DealPage {
    #[serde(default)]
    pub results: Vec<Deal>,
    pub paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
pub struct Paging {
    pub next: Option<PagingNext>,
}

#[derive(Debug, Deserialize)]
pub struct PagingNext {
    pub after: String,
}

impl DealPage {
    /// Continuation cursor, when the API signalled more pages.
    pub fn next_cursor(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.next.as_ref())
            .map(|n| n.after.as_str())
    }
}
