//! growthpath-store: the JSON file store backend and configuration loading.

pub mod config;
pub mod file;

pub use config::{load_config_from, GrowthpathConfig, TimingConfig};
pub use file::JsonFileStore;
