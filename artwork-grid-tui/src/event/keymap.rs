//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// `SHIFT` 被忽略，大写字母和 `?` 等符号在不同终端上会带或不带该修饰键。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 分页
    pub const PREV_PAGE: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const PREV_PAGE_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('h'));
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const NEXT_PAGE_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('l'));
    pub const GOTO_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('g'));

    // 表格
    pub const ROW_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const ROW_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const ROW_FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const ROW_LAST: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const TOGGLE_ROW: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const TOGGLE_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const BULK_SELECT: KeyBinding = KeyBinding::key(KeyCode::Char('n'));

    // 输入框
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const BLUR: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
}
