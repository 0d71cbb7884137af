use crate::month::YearMonth;
use crate::properties::CalendarProperties;
use crate::week::DAYS_IN_WEEK;
use std::iter::successors;
use std::slice::ChunksExact;
use time::Date;

/// One slot of the seven-column month display, possibly holding a day of an
/// adjacent month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DayCell {
    pub date: Date,
    /// False for the leading and trailing cells that pad the grid out to
    /// whole weeks.
    pub in_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
}

/// The dates occupying a month's display grid, aligned to the configured
/// first day of the week and padded to whole weeks on both sides.
///
/// The grid is a pure function of `(month, properties, today)`: the same
/// inputs always produce the same cells.  `today` is passed in rather than
/// read from a clock so that callers and tests control it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
    month: YearMonth,
    leading: usize,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn new(month: YearMonth, properties: &CalendarProperties, today: Date) -> MonthGrid {
        let first = month.first_day();
        let leading = usize::from(
            (first.weekday().number_days_from_monday() + 7
                - properties.first_weekday().number_days_from_monday())
                % 7,
        );
        let content = leading + usize::from(month.days());
        let total = content + (DAYS_IN_WEEK - content % DAYS_IN_WEEK) % DAYS_IN_WEEK;
        let start = (0..leading).fold(first, |date, _| date.previous_day().unwrap_or(date));
        let cells = successors(Some(start), |date| date.next_day())
            .take(total)
            .map(|date| DayCell {
                date,
                in_month: month.contains(date),
                is_today: date == today,
                is_weekend: properties.is_weekend(date.weekday()),
            })
            .collect();
        MonthGrid {
            month,
            leading,
            cells,
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Iterates over the grid one week row at a time.
    pub fn weeks(&self) -> ChunksExact<'_, DayCell> {
        self.cells.chunks_exact(DAYS_IN_WEEK)
    }

    /// Number of prior-month cells before the 1st.
    pub fn leading(&self) -> usize {
        self.leading
    }

    /// Number of next-month cells after the last day.
    pub fn trailing(&self) -> usize {
        self.cells.len() - self.leading - usize::from(self.month.days())
    }
}
