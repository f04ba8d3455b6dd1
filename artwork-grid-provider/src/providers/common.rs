//! Catalog 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{CatalogError, Result};
use crate::types::CatalogSettings;

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(settings: &CatalogSettings, source_name: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .user_agent(concat!("artwork-grid/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CatalogError::InvalidConfig {
            source_id: source_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}
