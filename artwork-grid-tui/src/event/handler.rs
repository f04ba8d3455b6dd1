//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, BulkSelectMessage, PagerMessage, TableMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.show_help {
        return handle_help_keys(key);
    }

    if app.controller.bulk_panel().open {
        return handle_bulk_select_keys(key);
    }

    if app.focus.is_page_input() {
        return handle_page_input_keys(key);
    }

    handle_table_keys(key)
}

fn handle_help_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key)
        || DefaultKeymap::HELP.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
    {
        AppMessage::CloseHelp
    } else {
        AppMessage::Noop
    }
}

fn handle_bulk_select_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::BACK.matches(&key) {
        BulkSelectMessage::Cancel
    } else if DefaultKeymap::CONFIRM.matches(&key) {
        BulkSelectMessage::Apply
    } else if DefaultKeymap::BACKSPACE.matches(&key) {
        BulkSelectMessage::Backspace
    } else if let KeyCode::Char(c) = key.code {
        BulkSelectMessage::Input(c)
    } else {
        return AppMessage::Noop;
    };
    AppMessage::BulkSelect(msg)
}

fn handle_page_input_keys(key: KeyEvent) -> AppMessage {
    // Enter 提交；Esc / Tab 失焦，同样提交
    let msg = if DefaultKeymap::CONFIRM.matches(&key)
        || DefaultKeymap::BACK.matches(&key)
        || DefaultKeymap::BLUR.matches(&key)
    {
        PagerMessage::CommitInput
    } else if DefaultKeymap::BACKSPACE.matches(&key) {
        PagerMessage::InputBackspace
    } else if let KeyCode::Char(c) = key.code {
        PagerMessage::InputChar(c)
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Pager(msg)
}

fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    // 分页
    if DefaultKeymap::PREV_PAGE.matches(&key) || DefaultKeymap::PREV_PAGE_ALT.matches(&key) {
        return AppMessage::Pager(PagerMessage::Previous);
    }
    if DefaultKeymap::NEXT_PAGE.matches(&key) || DefaultKeymap::NEXT_PAGE_ALT.matches(&key) {
        return AppMessage::Pager(PagerMessage::Next);
    }
    if DefaultKeymap::GOTO_PAGE.matches(&key) {
        return AppMessage::Pager(PagerMessage::FocusInput);
    }
    if let KeyCode::Char(c @ '1'..='5') = key.code {
        let slot = c as usize - '1' as usize;
        return AppMessage::Pager(PagerMessage::JumpToSlot(slot));
    }

    // 表格
    let msg = if DefaultKeymap::ROW_UP.matches(&key) || key.code == KeyCode::Char('k') {
        TableMessage::CursorUp
    } else if DefaultKeymap::ROW_DOWN.matches(&key) || key.code == KeyCode::Char('j') {
        TableMessage::CursorDown
    } else if DefaultKeymap::ROW_FIRST.matches(&key) {
        TableMessage::CursorFirst
    } else if DefaultKeymap::ROW_LAST.matches(&key) {
        TableMessage::CursorLast
    } else if DefaultKeymap::TOGGLE_ROW.matches(&key) {
        TableMessage::ToggleRow
    } else if DefaultKeymap::TOGGLE_ALL.matches(&key) {
        TableMessage::ToggleAll
    } else if DefaultKeymap::BULK_SELECT.matches(&key) {
        return AppMessage::BulkSelect(BulkSelectMessage::Toggle);
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Table(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Focus;
    use artwork_grid_core::PageController;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(PageController::new(12), "mock")
    }

    #[test]
    fn table_keys() {
        let app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Pager(PagerMessage::Previous)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('l')), &app),
            AppMessage::Pager(PagerMessage::Next)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('3')), &app),
            AppMessage::Pager(PagerMessage::JumpToSlot(2))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Table(TableMessage::ToggleRow)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('n')), &app),
            AppMessage::BulkSelect(BulkSelectMessage::Toggle)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('6')), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn shifted_question_mark_opens_help() {
        let app = app();
        let key = Event::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(matches!(handle_event(key, &app), AppMessage::ShowHelp));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = app();
        app.show_help = true;
        app.controller.open_bulk_panel();
        let key = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(key, &app), AppMessage::Quit));
    }

    #[test]
    fn page_input_captures_digits_and_blur_commits() {
        let mut app = app();
        app.focus = Focus::PageInput;

        assert!(matches!(
            handle_event(press(KeyCode::Char('4')), &app),
            AppMessage::Pager(PagerMessage::InputChar('4'))
        ));
        // q 在输入框中不会退出
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Pager(PagerMessage::InputChar('q'))
        ));
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Tab] {
            assert!(matches!(
                handle_event(press(code), &app),
                AppMessage::Pager(PagerMessage::CommitInput)
            ));
        }
    }

    #[test]
    fn bulk_panel_keys_take_priority() {
        let mut app = app();
        app.controller.open_bulk_panel();

        assert!(matches!(
            handle_event(press(KeyCode::Char('2')), &app),
            AppMessage::BulkSelect(BulkSelectMessage::Input('2'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::BulkSelect(BulkSelectMessage::Apply)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::BulkSelect(BulkSelectMessage::Cancel)
        ));
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut app = app();
        app.show_help = true;
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::CloseHelp
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app();
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
