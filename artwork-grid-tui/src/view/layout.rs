//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 表格 + 分页栏 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(3),    // 表格
            Constraint::Length(3), // 分页栏
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_table_area(app, frame, main_layout[1]);
    components::pager::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 弹窗（在最上层）
    components::bulk_select::render(app, frame);
    components::help::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " Artwork Grid v{} · {}",
        env!("CARGO_PKG_VERSION"),
        app.source_id
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_table_area(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = !app.focus.is_page_input() && !app.controller.bulk_panel().open;
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let selected = app.controller.selection().len();
    let block = Block::default()
        .title(format!(" Artworks · {selected} selected "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::artworks::render(app, frame, inner_area);
}
