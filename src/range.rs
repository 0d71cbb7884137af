use crate::month::YearMonth;
use std::iter::successors;
use thiserror::Error;

/// An inclusive, non-empty range of months.
///
/// The range doubles as the page space of a paged calendar: every month in
/// it has a zero-based page index, with `start` at index 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthRange {
    start: YearMonth,
    end: YearMonth,
}

impl MonthRange {
    /// Creates the range `start..=end`, failing if the bounds are reversed.
    pub fn new(start: YearMonth, end: YearMonth) -> Result<MonthRange, InvalidRangeError> {
        if start > end {
            Err(InvalidRangeError { start, end })
        } else {
            Ok(MonthRange { start, end })
        }
    }

    /// Creates the range spanning `a` and `b`, swapping them if reversed.
    pub fn normalized(a: YearMonth, b: YearMonth) -> MonthRange {
        if a <= b {
            MonthRange { start: a, end: b }
        } else {
            MonthRange { start: b, end: a }
        }
    }

    pub fn start(self) -> YearMonth {
        self.start
    }

    pub fn end(self) -> YearMonth {
        self.end
    }

    /// Number of months in the range, at least 1.
    pub fn total_months(self) -> usize {
        let span = self.start.months_until(self.end) + 1;
        usize::try_from(span.max(1)).unwrap_or(1)
    }

    pub fn contains(self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }

    /// Constrains `month` to the range, replacing it with the nearest bound
    /// if outside.
    pub fn clamp(self, month: YearMonth) -> YearMonth {
        if month < self.start {
            self.start
        } else if month > self.end {
            self.end
        } else {
            month
        }
    }

    /// Zero-based page index of `month`.  Months before the start map to 0
    /// and months after the end map to the last index.
    pub fn index_of(self, month: YearMonth) -> usize {
        let last = i64::try_from(self.total_months() - 1).unwrap_or(i64::MAX);
        let offset = self.start.months_until(month).clamp(0, last);
        usize::try_from(offset).unwrap_or(0)
    }

    /// The month at the given page index, clamped to the range.
    pub fn month_at(self, index: usize) -> YearMonth {
        let offset = i64::try_from(index).unwrap_or(i64::MAX);
        self.clamp(self.start.saturating_add_months(offset))
    }

    /// Iterates over every month in the range, in order.
    pub fn months(self) -> impl Iterator<Item = YearMonth> {
        successors(Some(self.start), move |month| {
            month.next().filter(|next| *next <= self.end)
        })
    }
}

/// Error returned when a range's start month lies after its end month.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("start month {start} is after end month {end}")]
pub struct InvalidRangeError {
    pub start: YearMonth,
    pub end: YearMonth,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn ym(year: i32, month: Month) -> YearMonth {
        YearMonth::new(year, month)
    }

    #[test]
    fn test_new_rejects_reversed_bounds() {
        let start = ym(2025, Month::January);
        let end = ym(2024, Month::January);
        assert_eq!(MonthRange::new(start, end), Err(InvalidRangeError { start, end }));
        assert!(MonthRange::new(end, start).is_ok());
    }

    #[test]
    fn test_normalized_swaps_reversed_bounds() {
        let range = MonthRange::normalized(ym(2025, Month::January), ym(2024, Month::January));
        assert_eq!(range.start(), ym(2024, Month::January));
        assert_eq!(range.end(), ym(2025, Month::January));
    }

    #[test]
    fn test_total_months_single_month() {
        let may = ym(2024, Month::May);
        let range = MonthRange::new(may, may).unwrap();
        assert_eq!(range.total_months(), 1);
    }

    #[test]
    fn test_total_months_three_years() {
        let range =
            MonthRange::new(ym(2023, Month::January), ym(2025, Month::December)).unwrap();
        assert_eq!(range.total_months(), 36);
    }

    #[test]
    fn test_index_of_inside() {
        let range =
            MonthRange::new(ym(2023, Month::January), ym(2025, Month::December)).unwrap();
        assert_eq!(range.index_of(ym(2023, Month::January)), 0);
        assert_eq!(range.index_of(ym(2024, Month::May)), 16);
        assert_eq!(range.index_of(ym(2025, Month::December)), 35);
    }

    #[test]
    fn test_index_of_clamps_outside() {
        let range =
            MonthRange::new(ym(2023, Month::January), ym(2025, Month::December)).unwrap();
        assert_eq!(range.index_of(ym(2022, Month::June)), 0);
        assert_eq!(range.index_of(ym(2026, Month::March)), 35);
    }

    #[test]
    fn test_month_at_inverts_index_of() {
        let range =
            MonthRange::new(ym(2023, Month::January), ym(2025, Month::December)).unwrap();
        assert_eq!(range.month_at(16), ym(2024, Month::May));
        assert_eq!(range.month_at(0), ym(2023, Month::January));
        assert_eq!(range.month_at(999), ym(2025, Month::December));
    }

    #[test]
    fn test_clamp() {
        let range =
            MonthRange::new(ym(2023, Month::January), ym(2025, Month::December)).unwrap();
        assert_eq!(range.clamp(ym(2022, Month::June)), ym(2023, Month::January));
        assert_eq!(range.clamp(ym(2026, Month::June)), ym(2025, Month::December));
        assert_eq!(range.clamp(ym(2024, Month::June)), ym(2024, Month::June));
    }

    #[test]
    fn test_months_iterates_inclusive() {
        let range = MonthRange::new(ym(2023, Month::November), ym(2024, Month::February)).unwrap();
        let months = range.months().collect::<Vec<_>>();
        assert_eq!(
            months,
            vec![
                ym(2023, Month::November),
                ym(2023, Month::December),
                ym(2024, Month::January),
                ym(2024, Month::February),
            ]
        );
        assert_eq!(range.months().count(), range.total_months());
    }
}
