//! Catalog 服务：在 tokio 运行时上执行分页请求
//!
//! 每次导航产生一个 [`FetchTicket`]，这里为其派生一个任务，完成后把结果
//! 通过无界 channel 送回主循环。请求不会被取消，旧结果由控制器的序号守卫丢弃。
//!
//! 主循环是同步的，运行在主线程上；任务通过 [`Handle`] 派发到运行时的工作线程。

use std::sync::Arc;

use artwork_grid_core::{fetch_ticket, FetchResult, FetchTicket};
use artwork_grid_provider::CatalogSource;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub struct CatalogService {
    runtime: Handle,
    source: Arc<dyn CatalogSource>,
    results: UnboundedSender<FetchResult>,
}

impl CatalogService {
    /// 创建服务，返回结果接收端
    pub fn new(
        runtime: Handle,
        source: Arc<dyn CatalogSource>,
    ) -> (Self, UnboundedReceiver<FetchResult>) {
        let (results, rx) = mpsc::unbounded_channel();
        (
            Self {
                runtime,
                source,
                results,
            },
            rx,
        )
    }

    /// 派生一个请求任务
    pub fn spawn_fetch(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let results = self.results.clone();
        self.runtime.spawn(async move {
            let result = fetch_ticket(source.as_ref(), ticket).await;
            if results.send(result).is_err() {
                log::debug!("UI loop closed, dropping fetch #{}", ticket.seq);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use artwork_grid_provider::{Artwork, PaginatedResponse, Result as CatalogResult};
    use std::time::Duration;

    /// 页码越小响应越慢，用于制造乱序完成
    struct SlowFirstPages;

    #[async_trait]
    impl CatalogSource for SlowFirstPages {
        fn id(&self) -> &'static str {
            "slow"
        }

        fn page_size(&self) -> u32 {
            2
        }

        async fn fetch_page(&self, page: u32) -> CatalogResult<PaginatedResponse<Artwork>> {
            tokio::time::sleep(Duration::from_millis(u64::from(10 - page) * 20)).await;
            let id = u64::from(page) * 2;
            Ok(PaginatedResponse::new(
                vec![Artwork::new(id - 1, "a"), Artwork::new(id, "b")],
                page,
                2,
                20,
            ))
        }
    }

    #[tokio::test]
    async fn results_arrive_over_channel() {
        let (service, mut rx) = CatalogService::new(Handle::current(), Arc::new(SlowFirstPages));
        let ticket = FetchTicket { seq: 1, page: 9 };

        service.spawn_fetch(ticket);
        let result = rx.recv().await.unwrap();

        assert_eq!(result.ticket, ticket);
        assert_eq!(result.outcome.unwrap().items.len(), 2);
    }

    #[tokio::test]
    async fn later_ticket_can_finish_first() {
        let (service, mut rx) = CatalogService::new(Handle::current(), Arc::new(SlowFirstPages));

        service.spawn_fetch(FetchTicket { seq: 1, page: 1 });
        service.spawn_fetch(FetchTicket { seq: 2, page: 8 });

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.ticket.seq, 2);
        assert_eq!(second.ticket.seq, 1);
    }
}
