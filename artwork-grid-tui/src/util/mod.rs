//! 工具函数

mod terminal;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use terminal::{init_terminal, restore_terminal, Term};

/// Placeholder for a missing cell value.
pub const EMPTY_CELL: &str = "—";

/// Render an optional text value into a single-line cell at most
/// `max_width` columns wide.
///
/// Line breaks become spaces, runs of whitespace collapse, and overlong
/// text ends in `…`. Width is measured in terminal columns, so CJK text
/// is cut at the right place.
pub fn cell_text(value: Option<&str>, max_width: usize) -> String {
    let flat = value
        .map(|v| v.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    if flat.is_empty() {
        return EMPTY_CELL.to_string();
    }
    truncate_to_width(&flat, max_width)
}

/// Cut `text` to `max_width` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Year column text; negative years are BCE.
pub fn year_text(year: Option<i32>) -> String {
    match year {
        Some(y) if y < 0 => format!("{} BCE", y.unsigned_abs()),
        Some(y) => y.to_string(),
        None => EMPTY_CELL.to_string(),
    }
}
