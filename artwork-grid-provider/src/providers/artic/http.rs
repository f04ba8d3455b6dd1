//! ARTIC HTTP 请求方法

use url::Url;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{CatalogErrorMapper, RawHttpError};
use crate::types::{PaginatedResponse, PaginationParams};

use super::{ARTWORK_FIELDS, ArticCatalog, ArticPageResponse};
use crate::types::{Artwork, MAX_PAGE_SIZE};

impl ArticCatalog {
    /// 构建分页请求 URL
    pub(crate) fn page_url(&self, params: &PaginationParams) -> Url {
        let params = params.validated(MAX_PAGE_SIZE);
        let mut url = self.artworks_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &params.page.to_string())
            .append_pair("limit", &params.page_size.to_string())
            .append_pair("fields", ARTWORK_FIELDS);
        url
    }

    /// 执行 GET 请求 (带分页)
    pub(crate) async fn get_page(
        &self,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<Artwork>> {
        let url = self.page_url(params);

        let (status, body) = HttpUtils::execute_request(
            self.client.get(url.clone()),
            self.source_name(),
            "GET",
            url.as_str(),
        )
        .await?;

        if !(200..300).contains(&status) {
            log::warn!("[{}] HTTP {status} for page {}", self.source_name(), params.page);
            return Err(self.map_status(RawHttpError { status, body }));
        }

        self.parse_page(&body, params)
    }

    /// 解析分页响应体
    pub(crate) fn parse_page(
        &self,
        body: &str,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<Artwork>> {
        let response: ArticPageResponse = HttpUtils::parse_json(body, self.source_name())?;

        if let Some(served) = response.pagination.current_page {
            if served != params.page {
                log::debug!(
                    "[{}] requested page {} but server reported {served}",
                    self.source_name(),
                    params.page
                );
            }
        }

        Ok(PaginatedResponse::new(
            response.data,
            params.page,
            params.page_size,
            response.pagination.total,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::types::CatalogSettings;

    fn catalog() -> ArticCatalog {
        ArticCatalog::new(&CatalogSettings::default()).unwrap()
    }

    #[test]
    fn page_url_carries_page_limit_and_fields() {
        let url = catalog().page_url(&PaginationParams {
            page: 3,
            page_size: 12,
        });
        assert_eq!(url.path(), "/api/v1/artworks");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("page".to_string(), "3".to_string()));
        assert_eq!(pairs[1], ("limit".to_string(), "12".to_string()));
        assert_eq!(pairs[2].0, "fields");
    }

    #[test]
    fn page_url_clamps_page_and_limit() {
        let url = catalog().page_url(&PaginationParams {
            page: 0,
            page_size: 500,
        });
        let query = url.query().unwrap_or_default();
        assert!(query.starts_with("page=1&limit=100"), "{query}");
    }

    #[test]
    fn parse_page_reads_data_and_total() {
        let body = r#"{
            "pagination": {"total": 133, "limit": 12, "offset": 0, "total_pages": 12, "current_page": 1},
            "data": [
                {"id": 27992, "title": "A Sunday on La Grande Jatte — 1884",
                 "place_of_origin": "France", "artist_display": "Georges Seurat\nFrench, 1859-1891",
                 "inscriptions": null, "date_start": 1884, "date_end": 1886},
                {"id": 28560, "title": null}
            ]
        }"#;
        let params = PaginationParams {
            page: 1,
            page_size: 12,
        };
        let page = catalog().parse_page(body, &params).unwrap();
        assert_eq!(page.total_count, 133);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, 27992);
        assert_eq!(page.items[0].date_start, Some(1884));
        assert_eq!(page.items[1].display_title(), "Untitled");
        assert!(page.has_more);
    }

    #[test]
    fn parse_page_without_total_is_data_error() {
        let body = r#"{"pagination": {}, "data": []}"#;
        let err = catalog()
            .parse_page(body, &PaginationParams::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn parse_page_without_data_is_data_error() {
        let body = r#"{"pagination": {"total": 10}}"#;
        let err = catalog()
            .parse_page(body, &PaginationParams::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn non_2xx_maps_to_http_status() {
        let c = catalog();
        let err = c.map_status(RawHttpError {
            status: 403,
            body: r#"{"status":403,"error":"Invalid number of results"}"#.to_string(),
        });
        assert!(matches!(
            err,
            CatalogError::HttpStatus { status: 403, raw_message: Some(_), .. }
        ));
    }
}
