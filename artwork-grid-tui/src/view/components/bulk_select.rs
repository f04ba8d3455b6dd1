//! 批量选择面板

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

use super::centered_rect;

pub fn render(app: &App, frame: &mut Frame) {
    let panel = app.controller.bulk_panel();
    if !panel.open {
        return;
    }
    let c = colors();

    let area = centered_rect(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Select Rows ")
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

    let loaded = app.controller.records().len();
    let lines = vec![
        Line::styled(
            format!("Select the first N rows of this page ({loaded} loaded)"),
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Rows: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}_", panel.input),
                Style::default().fg(c.border_focused),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::hint_key()),
            Span::styled(" Apply  ", Style::default().fg(c.muted)),
            Span::styled("Esc", Styles::hint_key()),
            Span::styled(" Cancel", Style::default().fg(c.muted)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
