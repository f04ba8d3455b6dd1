//! 作品表格页面

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use artwork_grid_provider::Artwork;

use crate::model::App;
use crate::util::{cell_text, year_text};
use crate::view::theme::{colors, Styles};

const CHECK_WIDTH: u16 = 3;
const TITLE_WIDTH: u16 = 36;
const ORIGIN_WIDTH: u16 = 16;
const ARTIST_WIDTH: u16 = 30;
const INSCRIPTIONS_WIDTH: u16 = 24;
const YEAR_WIDTH: u16 = 9;

/// 渲染作品页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.controller.records().is_empty() {
        render_placeholder(app, frame, area);
    } else {
        render_table(app, frame, area);
    }
}

/// 无数据时：加载中 / 加载失败 / 空结果
fn render_placeholder(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let (text, color) = if app.controller.is_loading() {
        ("  Loading artworks...", c.muted)
    } else if app.controller.last_error().is_some() {
        ("  Could not load artworks. Press r to retry.", c.error)
    } else {
        ("  No artworks found.", c.muted)
    };

    let content = vec![Line::from(""), Line::styled(text, Style::default().fg(color))];
    frame.render_widget(Paragraph::new(content), area);
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// 表头复选框：全选 / 部分 / 无
fn header_checkbox(app: &App) -> &'static str {
    let records = app.controller.records();
    let selection = app.controller.selection();
    if selection.all_on_page(records) {
        "[x]"
    } else if selection.selected_on_page(records).is_empty() {
        "[ ]"
    } else {
        "[-]"
    }
}

fn artwork_row(artwork: &Artwork, checked: bool) -> Row<'static> {
    let c = colors();
    let style = if checked {
        Style::default().fg(c.success)
    } else {
        Style::default().fg(c.fg)
    };

    Row::new(vec![
        Cell::from(checkbox(checked)),
        Cell::from(cell_text(artwork.title.as_deref(), TITLE_WIDTH.into())),
        Cell::from(cell_text(artwork.place_of_origin.as_deref(), ORIGIN_WIDTH.into())),
        Cell::from(cell_text(artwork.artist_display.as_deref(), ARTIST_WIDTH.into())),
        Cell::from(cell_text(artwork.inscriptions.as_deref(), INSCRIPTIONS_WIDTH.into())),
        Cell::from(year_text(artwork.date_start)),
        Cell::from(year_text(artwork.date_end)),
    ])
    .style(style)
}

fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let header = Row::new(vec![
        header_checkbox(app),
        "Title",
        "Place of Origin",
        "Artist",
        "Inscriptions",
        "Start",
        "End",
    ])
    .style(Style::default().fg(c.warning).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .controller
        .records()
        .iter()
        .map(|artwork| artwork_row(artwork, app.controller.is_selected(artwork.id)))
        .collect();

    let widths = [
        Constraint::Length(CHECK_WIDTH),
        Constraint::Length(TITLE_WIDTH),
        Constraint::Length(ORIGIN_WIDTH),
        Constraint::Length(ARTIST_WIDTH),
        Constraint::Min(INSCRIPTIONS_WIDTH),
        Constraint::Length(YEAR_WIDTH),
        Constraint::Length(YEAR_WIDTH),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}
