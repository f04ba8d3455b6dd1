//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use artwork_grid_provider::{CatalogSettings, CatalogSource, create_catalog};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 跳过测试的宏（当设置了离线标志时）
#[macro_export]
macro_rules! skip_if_offline {
    () => {
        if std::env::var("ARTWORK_GRID_OFFLINE").is_ok() {
            eprintln!("跳过测试: ARTWORK_GRID_OFFLINE 已设置");
            return;
        }
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文
pub struct TestContext {
    pub catalog: Arc<dyn CatalogSource>,
}

impl TestContext {
    /// 使用默认设置（或 `ARTWORK_GRID_BASE_URL`）创建 catalog
    pub fn artic() -> Option<Self> {
        let mut settings = CatalogSettings::default();
        if let Ok(base_url) = std::env::var("ARTWORK_GRID_BASE_URL") {
            settings.base_url = base_url;
        }
        create_catalog(&settings)
            .ok()
            .map(|catalog| Self { catalog })
    }
}

/// 本地回环 HTTP 服务：接受一个连接，读完请求头后回写 `response`。
///
/// 返回可作为 `base_url` 使用的地址。
pub async fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("读取本地地址失败");

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    });

    format!("http://{addr}")
}

/// 拼一个完整的 HTTP/1.1 响应
pub fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// 指向 `base_url` 的短超时 catalog
pub fn local_catalog(base_url: String) -> Arc<dyn CatalogSource> {
    let settings = CatalogSettings {
        base_url,
        connect_timeout_secs: 2,
        request_timeout_secs: 2,
        ..CatalogSettings::default()
    };
    create_catalog(&settings).expect("创建 catalog 失败")
}
