//! 应用主状态

use artwork_grid_core::{FetchTicket, PageController};
use artwork_grid_provider::Artwork;

use super::Focus;

pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: Focus,

    /// 分页、选择与请求序号
    pub controller: PageController,

    /// 表格行光标（0-based，相对于已加载的页）
    pub cursor: usize,

    /// 帮助弹窗是否打开
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// Catalog 标识，显示在标题栏
    pub source_id: &'static str,

    /// 等待主循环派发的请求
    pending_fetches: Vec<FetchTicket>,
}

impl App {
    /// 创建应用实例，并排队首页请求
    pub fn new(controller: PageController, source_id: &'static str) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: Focus::Table,
            controller,
            cursor: 0,
            show_help: false,
            status_message: None,
            source_id,
            pending_fetches: Vec::new(),
        };
        let ticket = app.controller.refresh();
        app.queue_fetch(ticket);
        app
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn queue_fetch(&mut self, ticket: FetchTicket) {
        self.pending_fetches.push(ticket);
    }

    /// 取出所有待派发请求
    pub fn take_pending_fetches(&mut self) -> Vec<FetchTicket> {
        std::mem::take(&mut self.pending_fetches)
    }

    /// 光标所在的记录
    pub fn cursor_record(&self) -> Option<&Artwork> {
        self.controller.records().get(self.cursor)
    }

    /// 记录数变化后把光标拉回范围内
    pub fn clamp_cursor(&mut self) {
        let len = self.controller.records().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
