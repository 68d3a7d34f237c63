pub mod demo;
pub mod engine;
pub mod hubspot;
pub mod report;
pub mod scheduler;

pub use crate::domain::model::{Deal, DealProperties, Pipeline};
pub use crate::domain::ports::{DealSource, Storage};
pub use crate::utils::error::Result;
