//! 焦点状态定义

/// 键盘输入当前落在哪里
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 表格（行光标、勾选、翻页快捷键）
    #[default]
    Table,
    /// 跳页输入框
    PageInput,
}

impl Focus {
    pub fn is_page_input(self) -> bool {
        matches!(self, Self::PageInput)
    }
}
