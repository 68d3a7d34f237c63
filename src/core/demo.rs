use crate::domain::model::{Deal, DealProperties, Pipeline};
use crate::domain::ports::DealSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{Duration, Local};
use rand::seq::IndexedRandom;
use rand::Rng;

pub const DEMO_PIPELINE_ID: &str = "demo";
pub const DEMO_PIPELINE_NAME: &str = "Sales_Pipeline_Demo";
pub const DEMO_DEAL_COUNT: usize = 15;

const COMPANIES: [&str; 15] = [
    "Acme Corp",
    "TechStart Inc",
    "Global Solutions",
    "Innovation Labs",
    "Enterprise Co",
    "StartupXYZ",
    "Digital Ventures",
    "CloudTech",
    "DataSystems Ltd",
    "FutureTech",
    "SmartBiz",
    "NextGen Solutions",
    "Quantum Corp",
    "Velocity Inc",
    "Synergy Partners",
];

const STAGES: [&str; 6] = [
    "Qualified Lead",
    "Meeting Scheduled",
    "Proposal Sent",
    "Negotiation",
    "Closed Won",
    "Closed Lost",
];

const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

/// Generates realistic-looking synthetic deals: every display field is
/// always present, dates sit around today, amounts are pre-formatted
/// currency strings like the live API returns.
pub fn generate_demo_deals(count: usize) -> Vec<Deal> {
    let mut rng = rand::rng();
    let now = Local::now();

    (0..count)
        .map(|_| {
            let created = now - Duration::days(rng.random_range(10..=90));
            let close = now + Duration::days(rng.random_range(-10..=60));
            let amount: u32 = rng.random_range(5_000..=150_000);

            Deal {
                properties: DealProperties {
                    dealname: Some(format!(
                        "{} - {} Deal",
                        COMPANIES.choose(&mut rng).unwrap_or(&COMPANIES[0]),
                        QUARTERS.choose(&mut rng).unwrap_or(&QUARTERS[0]),
                    )),
                    amount: Some(format!("${}", group_thousands(amount))),
                    dealstage: Some(
                        STAGES
                            .choose(&mut rng)
                            .unwrap_or(&STAGES[0])
                            .to_string(),
                    ),
                    closedate: Some(close.format("%Y-%m-%d").to_string()),
                    pipeline: Some(DEMO_PIPELINE_ID.to_string()),
                    createdate: Some(created.format("%Y-%m-%d").to_string()),
                },
            }
        })
        .collect()
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Stand-in for the live client: one synthetic pipeline, random deals,
/// no credential needed. Drives the same engine and exporter path.
pub struct DemoDealSource {
    count: usize,
}

impl DemoDealSource {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for DemoDealSource {
    fn default() -> Self {
        Self::new(DEMO_DEAL_COUNT)
    }
}

#[async_trait]
impl DealSource for DemoDealSource {
    async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        Ok(vec![Pipeline {
            id: DEMO_PIPELINE_ID.to_string(),
            label: DEMO_PIPELINE_NAME.to_string(),
        }])
    }

    async fn fetch_deals_for_pipeline(&self, _pipeline_id: &str) -> Vec<Deal> {
        generate_demo_deals(self.count)
    }
}
