use async_trait::async_trait;

use crate::error::{CatalogError, Result};
use crate::types::{Artwork, PaginatedResponse};

/// 原始 HTTP 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawHttpError {
    /// HTTP 状态码
    pub status: u16,
    /// 响应体（可能为空）
    pub body: String,
}

/// 错误映射 Trait（内部使用）
/// 各 catalog 实现此 trait 以将原始错误映射到统一错误类型
pub(crate) trait CatalogErrorMapper {
    /// 返回 catalog 标识符
    fn source_name(&self) -> &'static str;

    /// 将非 2xx 响应映射到统一错误类型
    fn map_status(&self, raw: RawHttpError) -> CatalogError {
        CatalogError::HttpStatus {
            source_id: self.source_name().to_string(),
            status: raw.status,
            raw_message: (!raw.body.is_empty())
                .then(|| crate::utils::log_sanitizer::truncate_for_log(&raw.body)),
        }
    }
}

/// A paginated source of catalog records.
///
/// Implementations fetch exactly one page per call and never retry; the caller
/// decides when to ask again.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Catalog identifier, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Number of records per page this source serves.
    fn page_size(&self) -> u32;

    /// Fetch one page (1-indexed) of records together with the catalog's total count.
    async fn fetch_page(&self, page: u32) -> Result<PaginatedResponse<Artwork>>;
}
