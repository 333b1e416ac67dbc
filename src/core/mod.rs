//! Core module - Configuration, error types, and the appliance data model

mod config;
mod error;
mod types;

pub use config::{Config, PricingConfig, StorageConfig};
pub use error::{Error, Result};
pub use types::{Appliance, ApplianceKind, ApplianceSummary, Bill, BillLine};
