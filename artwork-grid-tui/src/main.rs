//! Artwork Grid TUI
//!
//! Browse the Art Institute of Chicago collection page by page and tick rows
//! across pages.
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 界面状态 (`model/`)，分页与选择由 core 的 `PageController` 持有
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、日志与请求派发 (`backend/`)

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use artwork_grid_core::PageController;
use artwork_grid_provider::create_catalog;

use backend::{log_path, logging, CatalogService, ConfigService, LoadedConfig, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置与日志（终端接管 stdout 之前）
    let config_service = LocalConfigService::new()?;
    let LoadedConfig { config, warnings } = config_service.load()?;
    logging::init(&config.log_level, &log_path()?)?;
    log::info!("Loaded config from {}", config_service.path().display());
    for warning in &warnings {
        log::warn!("{warning}");
    }
    log::info!(
        "Starting Artwork Grid against {} ({} per page)",
        config.base_url,
        config.page_size
    );

    // 2. 请求运行时（主线程留给同步主循环）
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("artwork-grid-fetch")
        .build()
        .context("Failed to start async runtime")?;

    // 3. Catalog 与后台请求服务
    let source =
        create_catalog(&config.catalog_settings()).context("Failed to create catalog client")?;
    let mut app = model::App::new(PageController::for_source(source.as_ref()), source.id());
    let (service, mut results) = CatalogService::new(runtime.handle().clone(), source);

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &service, &mut results);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!(
        "Exiting with {} artworks selected",
        app.controller.selection().len()
    );
    result
}
