//! Model 层：应用状态
//!
//! 分页、选择集和输入缓冲都由 core 的 `PageController` 持有，
//! 这里只保存纯界面状态（焦点、光标、弹窗、状态栏）。

mod app;
mod focus;

pub use app::App;
pub use focus::Focus;
