//! ARTIC catalog 集成测试
//!
//! 访问真实 API 的用例标记为 `#[ignore]`，运行方式:
//! ```bash
//! cargo test -p artwork-grid-provider --test artic_test -- --ignored --nocapture
//! ```
//!
//! 本地回环用例无需外部网络，随普通 `cargo test` 运行。

mod common;

use std::collections::HashSet;

use artwork_grid_provider::{CatalogError, ErrorKind};
use common::TestContext;

#[tokio::test]
#[ignore]
async fn test_artic_first_page() {
    skip_if_offline!();

    let ctx = TestContext::artic().expect("创建测试上下文失败");
    let page = require_ok!(ctx.catalog.fetch_page(1).await);

    assert_eq!(page.page, 1);
    assert!(page.total_count > 0, "catalog should not be empty");
    assert!(page.items.len() <= ctx.catalog.page_size() as usize);

    println!("✓ first page: {} items of {}", page.items.len(), page.total_count);
}

#[tokio::test]
#[ignore]
async fn test_artic_ids_unique_across_pages() {
    skip_if_offline!();

    let ctx = TestContext::artic().expect("创建测试上下文失败");
    let first = require_ok!(ctx.catalog.fetch_page(1).await);
    let second = require_ok!(ctx.catalog.fetch_page(2).await);

    let ids: HashSet<u64> = first.items.iter().map(|a| a.id).collect();
    assert!(second.items.iter().all(|a| !ids.contains(&a.id)));
}

// ===== 本地测试（无需外部网络）=====

#[tokio::test]
async fn test_artic_unreachable_host_is_transport_error() {
    let catalog = common::local_catalog("http://127.0.0.1:9".to_string());
    let result = catalog.fetch_page(1).await;

    assert!(matches!(
        &result,
        Err(e @ (CatalogError::NetworkError { .. } | CatalogError::Timeout { .. }))
            if e.kind() == ErrorKind::Transport && e.is_expected()
    ));
}

#[tokio::test]
async fn test_artic_non_2xx_is_http_status() {
    let body = r#"{"status":503,"error":"Service Unavailable"}"#;
    let base_url = common::serve_once(common::http_response("503 Service Unavailable", body)).await;
    let catalog = common::local_catalog(base_url);

    let result = catalog.fetch_page(2).await;

    let Err(CatalogError::HttpStatus {
        status,
        raw_message,
        ..
    }) = &result
    else {
        panic!("expected HttpStatus, got {result:?}");
    };
    assert_eq!(*status, 503);
    assert!(raw_message.as_deref().is_some_and(|m| m.contains("Service Unavailable")));
}

#[tokio::test]
async fn test_artic_local_page_is_parsed() {
    let body = r#"{
        "pagination": { "total": 133, "limit": 12, "current_page": 3 },
        "data": [
            { "id": 25, "title": "Nighthawks", "date_start": 1942, "date_end": 1942 },
            { "id": 26, "title": null }
        ]
    }"#;
    let base_url = common::serve_once(common::http_response("200 OK", body)).await;
    let catalog = common::local_catalog(base_url);

    let page = catalog.fetch_page(3).await.expect("本地页面应解析成功");

    assert_eq!(page.page, 3);
    assert_eq!(page.total_count, 133);
    assert_eq!(page.items.iter().map(|a| a.id).collect::<Vec<_>>(), vec![25, 26]);
    assert_eq!(page.items[0].title.as_deref(), Some("Nighthawks"));
}

#[tokio::test]
async fn test_artic_malformed_body_is_parse_error() {
    let base_url = common::serve_once(common::http_response("200 OK", "{ not json")).await;
    let catalog = common::local_catalog(base_url);

    let result = catalog.fetch_page(1).await;

    assert!(matches!(
        &result,
        Err(e @ CatalogError::ParseError { .. }) if e.kind() == ErrorKind::Data
    ));
}
