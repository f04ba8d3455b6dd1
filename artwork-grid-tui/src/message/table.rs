//! 表格消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMessage {
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    /// 勾选/取消光标所在行
    ToggleRow,
    /// 表头复选框：全选/清空本页
    ToggleAll,
}
