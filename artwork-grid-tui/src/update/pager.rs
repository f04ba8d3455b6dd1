//! 分页控件更新

use crate::message::PagerMessage;
use crate::model::{App, Focus};

pub fn update(app: &mut App, msg: PagerMessage) {
    let ticket = match msg {
        PagerMessage::Previous => app.controller.previous(),
        PagerMessage::Next => app.controller.next(),
        PagerMessage::JumpToSlot(index) => app.controller.go_to_window_slot(index),
        PagerMessage::FocusInput => {
            app.focus = Focus::PageInput;
            app.controller.page_input_clear();
            None
        }
        PagerMessage::InputChar(c) => {
            app.controller.page_input_push(c);
            None
        }
        PagerMessage::InputBackspace => {
            app.controller.page_input_pop();
            None
        }
        PagerMessage::CommitInput => {
            app.focus = Focus::Table;
            app.controller.commit_page_input()
        }
    };

    if let Some(ticket) = ticket {
        app.cursor = 0;
        app.queue_fetch(ticket);
    }
}
