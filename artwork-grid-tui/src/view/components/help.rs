//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

use super::centered_rect;

const SHORTCUTS: &[(&str, &str)] = &[
    ("←/h →/l", "Previous / next page"),
    ("1-5", "Jump to a page button"),
    ("g", "Type a page number"),
    ("↑↓/jk", "Move row cursor"),
    ("Space", "Toggle row"),
    ("a", "Toggle all rows on page"),
    ("n", "Select first N rows"),
    ("r", "Reload page"),
    ("q", "Quit"),
];

pub fn render(app: &App, frame: &mut Frame) {
    if !app.show_help {
        return;
    }

    let height = u16::try_from(SHORTCUTS.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(50, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::modal_border())
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );

    let mut lines = vec![
        Line::styled(
            "Shortcuts",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(SHORTCUTS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc to close the help",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
