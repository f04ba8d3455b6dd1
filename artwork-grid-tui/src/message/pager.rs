//! 分页控件消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerMessage {
    /// 上一页
    Previous,
    /// 下一页
    Next,
    /// 跳到分页窗口中的第 n 个按钮（0-based）
    JumpToSlot(usize),
    /// 聚焦跳页输入框
    FocusInput,
    /// 输入框键入字符
    InputChar(char),
    /// 输入框退格
    InputBackspace,
    /// 提交输入框（Enter 或失焦）
    CommitInput,
}
