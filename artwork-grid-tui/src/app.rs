//! 应用主循环
//!
//! 大约每 100 ms 执行一轮：
//! loop {
//!     收取已完成的请求 → update
//!     派发 update 排队的请求（tokio 任务）
//!     terminal.draw(...)
//!     if app.should_quit { break }
//!     poll_event(100ms) → handle_event → update
//! }

use std::time::Duration;

use anyhow::Result;
use artwork_grid_core::FetchResult;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CatalogService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    service: &CatalogService,
    results: &mut UnboundedReceiver<FetchResult>,
) -> Result<()> {
    loop {
        // 1. 应用后台结果（顺序任意，控制器按序号丢弃旧结果）
        while let Ok(result) = results.try_recv() {
            update::update(app, AppMessage::FetchCompleted(result));
        }

        // 2. 派发请求
        for ticket in app.take_pending_fetches() {
            service.spawn_fetch(ticket);
        }

        // 3. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询按键（主线程阻塞，请求在运行时工作线程上继续）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
