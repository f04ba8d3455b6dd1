//! Message 层：事件消息定义
//!
//! Event 层把按键翻译成消息，Update 层消费消息修改 Model。
//! 后台请求的结果同样以消息（`AppMessage::FetchCompleted`）进入 Update 层。

mod app;
mod bulk_select;
mod pager;
mod table;

pub use app::AppMessage;
pub use bulk_select::BulkSelectMessage;
pub use pager::PagerMessage;
pub use table::TableMessage;
