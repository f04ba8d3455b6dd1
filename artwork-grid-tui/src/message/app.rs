//! 应用主消息枚举

use artwork_grid_core::FetchResult;

use super::{BulkSelectMessage, PagerMessage, TableMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 重新请求当前页
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 清除状态消息
    ClearStatus,

    /// 翻页与跳页
    Pager(PagerMessage),

    /// 表格光标与勾选
    Table(TableMessage),

    /// 批量选择面板
    BulkSelect(BulkSelectMessage),

    /// 后台请求完成
    FetchCompleted(FetchResult),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
