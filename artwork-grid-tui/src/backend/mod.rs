//! Backend 层：配置、日志与 catalog 请求

mod catalog_service;
mod config_service;
pub mod logging;

pub use catalog_service::CatalogService;
pub use config_service::{log_path, ConfigService, LoadedConfig, LocalConfigService};
