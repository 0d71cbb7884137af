use crate::help::Help;
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use monthpick::theme;
use monthpick::widget::{DayStyler, MonthView};
use monthpick::{
    CalendarProperties, CalendarState, DayCell, MonthGrid, MultiPick, SinglePick, YearMonth,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use time::{Date, Duration};

/// The host of the paged calendar.  It owns the viewport: `go_to` requests
/// from the calendar state land in `pending` via the navigation hook, and
/// `settle_navigation` plays the part of the viewport scroll by translating
/// the request to a page index and reporting the settled month back.  A new
/// request simply overwrites a pending one.
#[derive(Debug)]
pub(crate) struct App {
    props: CalendarProperties,
    today: Date,
    state: CalendarState,
    picker: PickerKind,
    cursor: Date,
    pending: Rc<Cell<Option<YearMonth>>>,
    view: ViewState,
}

impl App {
    pub(crate) fn new(props: CalendarProperties, today: Date, picker: PickerKind) -> App {
        let mut state = CalendarState::new();
        state.init(&props);
        let pending = Rc::new(Cell::new(None));
        let sink = Rc::clone(&pending);
        state.on_navigate(move |month| sink.set(Some(month)));
        let cursor = match state.current_month() {
            Some(month) if month.contains(today) => today,
            Some(month) => month.first_day(),
            None => today,
        };
        App {
            props,
            today,
            state,
            picker,
            cursor,
            pending,
            view: ViewState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.settle_navigation();
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    // Completes the go_to round trip: the hook only records the clamped
    // target, and this moves the viewport and reports the settled page back.
    fn settle_navigation(&mut self) {
        if let Some(month) = self.pending.take() {
            let page = self.props.range().index_of(month);
            let settled = self.props.range().month_at(page);
            self.state.page_settled(settled);
            if !settled.contains(self.cursor) {
                let day = self.cursor.day().min(settled.days());
                self.cursor = settled.day(day).unwrap_or_else(|| settled.first_day());
            }
        }
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.view = ViewState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.view {
            ViewState::Calendar => match key {
                KeyCode::Left => self.move_cursor(Duration::days(-1)),
                KeyCode::Right => self.move_cursor(Duration::days(1)),
                KeyCode::Up => self.move_cursor(Duration::days(-7)),
                KeyCode::Down => self.move_cursor(Duration::days(7)),
                KeyCode::Char('n') | KeyCode::PageDown => {
                    self.state.next_month();
                    true
                }
                KeyCode::Char('p') | KeyCode::PageUp => {
                    self.state.previous_month();
                    true
                }
                KeyCode::Char('N') => {
                    self.jump_months(12);
                    true
                }
                KeyCode::Char('P') => {
                    self.jump_months(-12);
                    true
                }
                KeyCode::Char('t') => {
                    self.go_today();
                    true
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    self.state.go_to(self.props.init_month());
                    true
                }
                KeyCode::Char(' ') | KeyCode::Enter => self.pick_under_cursor(),
                KeyCode::Char('?') => {
                    self.view = ViewState::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.view = ViewState::Quitting;
                    true
                }
                _ => false,
            },
            ViewState::Helping => {
                self.view = ViewState::Calendar;
                true
            }
            ViewState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.view == ViewState::Quitting
    }

    fn move_cursor(&mut self, delta: Duration) -> bool {
        let Some(next) = self.cursor.checked_add(delta) else {
            return false;
        };
        let month = YearMonth::from_date(next);
        if !self.props.range().contains(month) {
            return false;
        }
        self.cursor = next;
        if self.state.current_month() != Some(month) {
            self.state.go_to(month);
        }
        true
    }

    fn jump_months(&mut self, months: i64) {
        if let Some(current) = self.state.current_month() {
            self.state.go_to(current.saturating_add_months(months));
        }
    }

    fn go_today(&mut self) {
        let month = YearMonth::from_date(self.today);
        if self.props.range().contains(month) {
            self.cursor = self.today;
        }
        self.state.go_to(month);
    }

    fn pick_under_cursor(&mut self) -> bool {
        let Some(month) = self.state.current_month() else {
            return false;
        };
        let grid = MonthGrid::new(month, &self.props, self.today);
        let Some(cell) = grid
            .cells()
            .iter()
            .find(|cell| cell.date == self.cursor)
            .copied()
        else {
            return false;
        };
        if self.picker.can_pick(&cell) {
            self.picker.pick(cell.date);
            true
        } else {
            false
        }
    }

    fn status_line(&self) -> String {
        let range = self.props.range();
        let picked = match &self.picker {
            PickerKind::Single(picker) => match picker.selected() {
                Some(date) => format!("picked {date}"),
                None => String::from("nothing picked"),
            },
            PickerKind::Multi(picker) => format!("{} picked", picker.selected().len()),
        };
        match self.state.current_month() {
            Some(month) => format!(
                " {} · page {} of {} · {picked} · ? for help",
                month,
                range.index_of(month) + 1,
                range.total_months()
            ),
            None => format!(" {picked} · ? for help"),
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, theme::BASE_STYLE);
        let styler = PickStyler {
            picker: &self.picker,
            cursor: self.cursor,
        };
        let view = MonthView::new(&self.props, self.today, styler);
        StatefulWidget::render(view, area, buf, &mut self.state);
        if area.height > 0 {
            let status = self.status_line();
            buf.set_stringn(
                area.x,
                area.y + area.height - 1,
                &status,
                usize::from(area.width),
                theme::BASE_STYLE,
            );
        }
        if self.view == ViewState::Helping {
            Help(theme::BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ViewState {
    Calendar,
    Helping,
    Quitting,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum PickerKind {
    Single(SinglePick),
    Multi(MultiPick),
}

impl PickerKind {
    pub(crate) fn single() -> PickerKind {
        PickerKind::Single(SinglePick::new())
    }

    pub(crate) fn multi() -> PickerKind {
        PickerKind::Multi(MultiPick::new())
    }

    fn can_pick(&self, cell: &DayCell) -> bool {
        match self {
            PickerKind::Single(picker) => picker.can_pick(cell),
            PickerKind::Multi(picker) => picker.can_pick(cell),
        }
    }

    fn pick(&mut self, date: Date) {
        match self {
            PickerKind::Single(picker) => picker.pick(date),
            PickerKind::Multi(picker) => picker.toggle(date),
        }
    }

    fn is_selected(&self, date: Date) -> bool {
        match self {
            PickerKind::Single(picker) => picker.is_selected(date),
            PickerKind::Multi(picker) => picker.is_selected(date),
        }
    }

    fn is_enabled(&self, date: Date) -> bool {
        match self {
            PickerKind::Single(picker) => picker.is_enabled(date),
            PickerKind::Multi(picker) => picker.is_enabled(date),
        }
    }
}

// Theme styling plus the host's overlays: selection, disabled dates, and
// the day cursor
#[derive(Clone, Copy, Debug)]
struct PickStyler<'a> {
    picker: &'a PickerKind,
    cursor: Date,
}

impl DayStyler for PickStyler<'_> {
    fn day_style(&self, cell: &DayCell) -> Style {
        let style = if self.picker.is_selected(cell.date) {
            theme::SELECTED_STYLE
        } else if cell.in_month && !self.picker.is_enabled(cell.date) {
            theme::DISABLED_STYLE
        } else {
            theme::day_style(cell)
        };
        if cell.date == self.cursor {
            style.patch(theme::CURSOR_STYLE)
        } else {
            style
        }
    }
}
