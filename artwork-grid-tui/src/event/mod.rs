//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。按优先级分发：
//! 帮助弹窗 → 批量选择面板 → 跳页输入框 → 表格。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
