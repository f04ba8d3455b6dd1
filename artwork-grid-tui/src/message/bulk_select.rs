//! 批量选择面板消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkSelectMessage {
    /// 打开/关闭面板
    Toggle,
    /// 数量输入
    Input(char),
    Backspace,
    /// 选择前 N 行并关闭面板
    Apply,
    /// 关闭面板，不做选择
    Cancel,
}
