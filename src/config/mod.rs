use crate::domain::ports::Storage;
use crate::utils::error::{ReporterError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

/// Runtime configuration, loaded once at startup from the process
/// environment and passed into the components. No ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterConfig {
    pub api_key: String,
    pub base_url: String,
    pub output_dir: String,
}

impl ReporterConfig {
    /// Reads `HUBSPOT_API_KEY` (required), `HUBSPOT_BASE_URL` and
    /// `REPORT_OUTPUT_DIR` (optional). A missing API key is a fatal
    /// initialization error, surfaced before any network call.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: env::var("HUBSPOT_API_KEY").map_err(|_| {
                ReporterError::MissingConfigError {
                    field: "HUBSPOT_API_KEY".to_string(),
                }
            })?,
            base_url: env::var("HUBSPOT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            output_dir: env::var("REPORT_OUTPUT_DIR")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
        })
    }
}

impl Validate for ReporterConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("base_url", &self.base_url)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
