//! ARTIC API 响应结构

use serde::Deserialize;

use crate::types::Artwork;

/// `GET /artworks` 响应
#[derive(Debug, Deserialize)]
pub struct ArticPageResponse {
    pub data: Vec<Artwork>,
    pub pagination: ArticPagination,
}

/// 响应中的分页信息，只依赖 `total`
#[derive(Debug, Deserialize)]
pub struct ArticPagination {
    pub total: u64,
    #[serde(default)]
    pub current_page: Option<u32>,
}
