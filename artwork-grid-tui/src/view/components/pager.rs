//! 分页栏组件
//!
//! 左侧为 "Showing a to b of n"，右侧为 上一页 / 页码窗口 / 下一页 / 跳页输入框。

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    if app.controller.is_loading() {
        block = block.title(Span::styled(" Loading... ", Style::default().fg(c.warning)));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let showing = app
        .controller
        .showing()
        .map(|range| range.to_string())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {showing}"), Style::default().fg(c.fg))),
        columns[0],
    );

    frame.render_widget(
        Paragraph::new(controls_line(app)).alignment(Alignment::Right),
        columns[1],
    );
}

fn controls_line(app: &App) -> Line<'static> {
    let c = colors();
    let enabled = Style::default().fg(c.fg);
    let disabled = Style::default().fg(c.muted);

    let mut spans = Vec::new();

    spans.push(Span::styled(
        "◀ Prev ",
        if app.controller.can_go_previous() {
            enabled
        } else {
            disabled
        },
    ));

    let current = app.controller.current_page();
    for page in app.controller.window() {
        let style = if page == current {
            Styles::selected()
        } else {
            enabled
        };
        spans.push(Span::styled(format!(" {page} "), style));
    }

    spans.push(Span::styled(
        " Next ▶",
        if app.controller.can_go_next() {
            enabled
        } else {
            disabled
        },
    ));

    // 跳页输入框
    let input_style = if app.focus.is_page_input() {
        Style::default()
            .fg(c.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let cursor = if app.focus.is_page_input() { "_" } else { "" };
    spans.push(Span::styled("   Page ", disabled));
    spans.push(Span::styled(
        format!("[{}{cursor}]", app.controller.page_input()),
        input_style,
    ));
    let total_pages = app.controller.total_pages();
    if total_pages > 0 {
        spans.push(Span::styled(format!(" of {total_pages} "), disabled));
    }

    Line::from(spans)
}
