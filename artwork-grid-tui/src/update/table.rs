//! 表格更新

use crate::message::TableMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: TableMessage) {
    let len = app.controller.records().len();
    match msg {
        TableMessage::CursorUp => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        TableMessage::CursorDown => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        TableMessage::CursorFirst => {
            app.cursor = 0;
        }
        TableMessage::CursorLast => {
            app.cursor = len.saturating_sub(1);
        }
        TableMessage::ToggleRow => {
            if let Some(id) = app.cursor_record().map(|a| a.id) {
                app.controller.toggle_row(id);
            }
        }
        TableMessage::ToggleAll => {
            app.controller.toggle_all_on_page();
        }
    }
}
