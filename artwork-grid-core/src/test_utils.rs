//! 测试辅助模块
//!
//! 提供 mock catalog 和便捷的记录工厂方法。

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};

use artwork_grid_provider::{
    Artwork, CatalogError, CatalogSource, PaginatedResponse, Result as CatalogResult,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Records with ids in `ids`, titled after their id.
pub fn artworks(ids: RangeInclusive<u64>) -> Vec<Artwork> {
    ids.map(|id| Artwork::new(id, format!("Artwork {id}"))).collect()
}

/// The page a catalog of `total` sequentially numbered records would return.
pub fn page_response(page: u32, page_size: u32, total: u64) -> PaginatedResponse<Artwork> {
    let first = u64::from(page_size) * u64::from(page.saturating_sub(1)) + 1;
    let last = (u64::from(page_size) * u64::from(page)).min(total);
    PaginatedResponse::new(artworks(first..=last), page, page_size, total)
}

// ===== MockCatalog =====

pub struct MockCatalog {
    total: RwLock<u64>,
    page_size: u32,
    /// 如果 Some，下一次 fetch_page 返回此错误
    fail_next: RwLock<Option<CatalogError>>,
    calls: AtomicUsize,
}

impl MockCatalog {
    pub fn new(total: u64, page_size: u32) -> Self {
        Self {
            total: RwLock::new(total),
            page_size,
            fail_next: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn fail_next(&self, err: CatalogError) {
        *self.fail_next.write().await = Some(err);
    }

    pub async fn set_total(&self, total: u64) {
        *self.total.write().await = total;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn fetch_page(&self, page: u32) -> CatalogResult<PaginatedResponse<Artwork>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_next.write().await.take() {
            return Err(err);
        }
        let total = *self.total.read().await;
        Ok(page_response(page, self.page_size, total))
    }
}
