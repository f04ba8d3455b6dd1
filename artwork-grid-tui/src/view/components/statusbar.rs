//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息：请求失败时显示为错误色
    if let Some(ref msg) = app.status_message {
        let color = if app.controller.last_error().is_some() {
            colors().error
        } else {
            Color::Yellow
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.show_help {
        return vec![("Esc", "Close")];
    }
    if app.controller.bulk_panel().open {
        return vec![("0-9", "Count"), ("Enter", "Apply"), ("Esc", "Cancel")];
    }
    if app.focus.is_page_input() {
        return vec![("0-9", "Page"), ("Enter/Esc", "Go")];
    }
    vec![
        ("←→", "Page"),
        ("↑↓", "Row"),
        ("Space", "Toggle"),
        ("n", "Select N"),
        ("g", "Go to"),
        ("?", "Help"),
        ("q", "Quit"),
    ]
}
