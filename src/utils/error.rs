use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    ApiStatusError { url: String, status: u16 },

    #[error("Excel generation failed: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ReporterError>;
