//! Art Institute of Chicago catalog source

mod http;
mod provider;
mod types;

use reqwest::Client;
use url::Url;

use crate::error::{CatalogError, Result};
use crate::providers::common::create_http_client;
use crate::traits::CatalogErrorMapper;
use crate::types::{CatalogSettings, MAX_PAGE_SIZE};

pub(crate) use types::ArticPageResponse;

pub(crate) const SOURCE_NAME: &str = "artic";

/// 列表请求只取表格用到的字段
pub(crate) const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// Art Institute of Chicago catalog source
///
/// Serves `GET {base_url}/artworks?page={n}&limit={page_size}`.
pub struct ArticCatalog {
    pub(crate) client: Client,
    pub(crate) artworks_url: Url,
    pub(crate) page_size: u32,
}

impl ArticCatalog {
    /// Build a client from connection settings.
    ///
    /// Fails with [`CatalogError::InvalidConfig`] if the base URL does not
    /// parse or the HTTP client cannot be created.
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let base = settings.base_url.trim_end_matches('/');
        let artworks_url =
            Url::parse(&format!("{base}/artworks")).map_err(|e| CatalogError::InvalidConfig {
                source_id: SOURCE_NAME.to_string(),
                detail: format!("invalid base URL '{base}': {e}"),
            })?;

        Ok(Self {
            client: create_http_client(settings, SOURCE_NAME)?,
            artworks_url,
            page_size: settings.page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }
}

impl CatalogErrorMapper for ArticCatalog {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }
}
