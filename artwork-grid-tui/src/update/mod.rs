//! Update 层：根据消息修改 Model
//!
//! 这里不做 I/O。需要请求数据时把 ticket 排进 `App` 的待派发队列，
//! 由主循环交给 `CatalogService`。

mod bulk_select;
mod pager;
mod table;

use artwork_grid_core::{FetchDisposition, FetchResult};

use crate::message::AppMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Refresh => {
            let ticket = app.controller.refresh();
            app.queue_fetch(ticket);
            app.set_status("Refreshing...");
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Pager(pager_msg) => {
            pager::update(app, pager_msg);
        }

        AppMessage::Table(table_msg) => {
            table::update(app, table_msg);
        }

        AppMessage::BulkSelect(bulk_msg) => {
            bulk_select::update(app, bulk_msg);
        }

        AppMessage::FetchCompleted(result) => {
            handle_fetch_completed(app, result);
        }

        AppMessage::Noop => {}
    }
}

fn handle_fetch_completed(app: &mut App, result: FetchResult) {
    let FetchResult { ticket, outcome } = result;
    match app.controller.apply_fetch(ticket, outcome) {
        FetchDisposition::Applied => {
            app.clamp_cursor();
            app.clear_status();
        }
        FetchDisposition::Failed => {
            if let Some(err) = app.controller.last_error() {
                let message = format!("Page {} failed: {err} (r to retry)", ticket.page);
                app.set_status(message);
            }
        }
        FetchDisposition::Stale => {}
        FetchDisposition::Reclamped(next) => {
            app.clamp_cursor();
            app.queue_fetch(next);
        }
    }
}
