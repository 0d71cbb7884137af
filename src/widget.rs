use crate::grid::{DayCell, MonthGrid};
use crate::month::YearMonth;
use crate::properties::CalendarProperties;
use crate::state::CalendarState;
use crate::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    widgets::StatefulWidget,
};
use time::Date;

/// Number of columns per day cell
const DAY_WIDTH: u16 = 4;

/// Total width of the seven-column grid
const GRID_WIDTH: u16 = DAY_WIDTH * 7;

/// Number of lines taken up by the month title and the weekday header
const HEADER_LINES: u16 = 2;

/// Chooses the style for each day cell of the rendered grid.
///
/// Hosts implement this to overlay their own concerns (selection, a cursor,
/// disabled dates) on top of the grid classification; [`DefaultStyler`]
/// applies the plain theme.
pub trait DayStyler {
    fn day_style(&self, cell: &DayCell) -> Style;
}

impl<T: DayStyler + ?Sized> DayStyler for &T {
    fn day_style(&self, cell: &DayCell) -> Style {
        (**self).day_style(cell)
    }
}

/// Styles cells purely by their classification, with no host overlays.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DefaultStyler;

impl DayStyler for DefaultStyler {
    fn day_style(&self, cell: &DayCell) -> Style {
        theme::day_style(cell)
    }
}

/// Renders one page of the paged calendar: the month the state's cursor
/// points at, under a title and a localized weekday header.
///
/// The view draws a single month; paging between months is the host's job,
/// driven through [`CalendarState`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthView<'a, S> {
    properties: &'a CalendarProperties,
    today: Date,
    styler: S,
}

impl<'a, S: DayStyler> MonthView<'a, S> {
    pub fn new(properties: &'a CalendarProperties, today: Date, styler: S) -> MonthView<'a, S> {
        MonthView {
            properties,
            today,
            styler,
        }
    }
}

impl<S: DayStyler> StatefulWidget for MonthView<'_, S> {
    type State = CalendarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut CalendarState) {
        let month = state
            .current_month()
            .unwrap_or_else(|| self.properties.range().clamp(self.properties.init_month()));
        let grid = MonthGrid::new(month, self.properties, self.today);
        let [grid_area] = Layout::horizontal([GRID_WIDTH]).flex(Flex::Center).areas(area);
        let mut canvas = BufferCanvas::new(grid_area, buf);
        canvas.draw_title(month);
        canvas.draw_header(self.properties.weekday_labels());
        for (row, week) in std::iter::zip(0u16.., grid.weeks()) {
            for (col, cell) in std::iter::zip(0u16.., week) {
                canvas.draw_day(row, col, cell, self.styler.day_style(cell));
            }
        }
    }
}

// Bounds-checked drawing onto a Buffer, in grid-local coordinates
#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> BufferCanvas<'a> {
        BufferCanvas { area, buf }
    }

    fn draw_title(&mut self, month: YearMonth) {
        let title = format!("{} {}", month.month(), month.year());
        let width = u16::try_from(title.len()).unwrap_or(GRID_WIDTH);
        let x = GRID_WIDTH.saturating_sub(width) / 2;
        self.mvprint(0, x, &title, theme::TITLE_STYLE);
    }

    fn draw_header(&mut self, labels: [&str; 7]) {
        for (i, label) in std::iter::zip(0u16.., labels) {
            self.mvprint(1, i * DAY_WIDTH, &format!(" {label:<2} "), theme::HEADER_STYLE);
        }
    }

    fn draw_day(&mut self, row: u16, col: u16, cell: &DayCell, style: Style) {
        let day = cell.date.day();
        let text = if cell.is_today {
            format!("[{day:2}]")
        } else {
            format!(" {day:2} ")
        };
        self.mvprint(
            row.saturating_add(HEADER_LINES),
            col.saturating_mul(DAY_WIDTH),
            &text,
            style,
        );
    }

    fn mvprint(&mut self, y: u16, x: u16, s: &str, style: Style) {
        if y < self.area.height && x < self.area.width {
            let max_width = usize::from(self.area.width - x);
            self.buf
                .set_stringn(self.area.x + x, self.area.y + y, s, max_width, style);
        }
    }
}
