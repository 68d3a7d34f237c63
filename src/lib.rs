pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{LocalStorage, ReporterConfig};
pub use core::demo::DemoDealSource;
pub use core::engine::ReportEngine;
pub use core::hubspot::HubSpotClient;
pub use core::report::ReportExporter;
pub use core::scheduler::WeeklySchedule;
pub use domain::model::{Deal, DealProperties, Pipeline};
pub use domain::ports::{DealSource, Storage};
pub use utils::error::{ReporterError, Result};
