pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{report::ReportRenderer, sample::seed_sample_domains, shell::SearchShell};
pub use config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::engine::{BucketSnapshot, ExpiryEngine};
pub use crate::core::{search::search, store::DomainStore};
pub use domain::model::{Bucket, BucketFlags, ClassificationWindow, DomainRecord};
pub use domain::ports::{Clock, FixedClock, RecordSource, SystemClock};
pub use utils::error::{Result, TrackerError};
