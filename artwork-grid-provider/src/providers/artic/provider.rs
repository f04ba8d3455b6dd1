//! ARTIC CatalogSource trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::CatalogSource;
use crate::types::{Artwork, PaginatedResponse, PaginationParams};

use super::{ArticCatalog, SOURCE_NAME};

#[async_trait]
impl CatalogSource for ArticCatalog {
    fn id(&self) -> &'static str {
        SOURCE_NAME
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn fetch_page(&self, page: u32) -> Result<PaginatedResponse<Artwork>> {
        let params = PaginationParams {
            page,
            page_size: self.page_size,
        };
        self.get_page(&params).await
    }
}
