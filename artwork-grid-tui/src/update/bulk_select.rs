//! 批量选择面板更新

use crate::message::BulkSelectMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: BulkSelectMessage) {
    match msg {
        BulkSelectMessage::Toggle => app.controller.toggle_bulk_panel(),
        BulkSelectMessage::Input(c) => app.controller.bulk_input_push(c),
        BulkSelectMessage::Backspace => app.controller.bulk_input_pop(),
        BulkSelectMessage::Apply => {
            // 无效数量静默放弃
            if let Ok(count) = app.controller.apply_bulk_select() {
                app.set_status(format!("Selected first {count} rows"));
            }
        }
        BulkSelectMessage::Cancel => app.controller.cancel_bulk_select(),
    }
}
