use crate::grid::DayCell;
use ratatui::style::{Color, Modifier, Style};

pub const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

pub const HEADER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Days belonging to the months before and after the displayed one.
pub const ADJACENT_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const TODAY_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

pub const WEEKEND_STYLE: Style = Style::new().fg(Color::LightRed);

pub const SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightGreen);

pub const CURSOR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Dates excluded from picking by an enabled-dates set.
pub const DISABLED_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::CROSSED_OUT);

/// The default style for a day cell, by classification.  Precedence runs
/// adjacent-month, then today, then weekend.
pub fn day_style(cell: &DayCell) -> Style {
    if !cell.in_month {
        ADJACENT_STYLE
    } else if cell.is_today {
        TODAY_STYLE
    } else if cell.is_weekend {
        WEEKEND_STYLE
    } else {
        Style::new()
    }
}
