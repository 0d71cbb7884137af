use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Month};

/// A calendar month within a specific year, without a day component.
///
/// Months are totally ordered chronologically and support month-granular
/// arithmetic.  The representable range sits one year inside the range
/// supported by [`time::Date`], so that a month grid can always reach into
/// the weeks adjacent to its first and last days.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// The earliest representable month.
    pub const MIN: YearMonth = YearMonth {
        year: Date::MIN.year() + 1,
        month: Month::January,
    };

    /// The latest representable month.
    pub const MAX: YearMonth = YearMonth {
        year: Date::MAX.year() - 1,
        month: Month::December,
    };

    /// Returns the month of `year` given by `month`.  Years outside the
    /// supported range are clamped inward.
    pub fn new(year: i32, month: Month) -> YearMonth {
        YearMonth {
            year: year.clamp(Self::MIN.year, Self::MAX.year),
            month,
        }
    }

    /// Returns the month containing `date`.
    pub fn from_date(date: Date) -> YearMonth {
        YearMonth::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> Month {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(self) -> Date {
        Date::from_calendar_date(self.year, self.month, 1)
            .expect("the first day of an in-range month should be a valid date")
    }

    /// The last day of the month.
    pub fn last_day(self) -> Date {
        Date::from_calendar_date(self.year, self.month, self.days())
            .expect("the last day of an in-range month should be a valid date")
    }

    /// Number of days in the month.
    pub fn days(self) -> u8 {
        time::util::days_in_month(self.month, self.year)
    }

    /// Returns the given day of this month, or `None` if the month has no
    /// such day.
    pub fn day(self, day: u8) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, day).ok()
    }

    /// True if `date` falls within this month.
    pub fn contains(self, date: Date) -> bool {
        YearMonth::from_date(date) == self
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(self, other: YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// The month `months` after `self`, or `None` if out of range.
    pub fn checked_add_months(self, months: i64) -> Option<YearMonth> {
        let ordinal = self.ordinal().checked_add(months)?;
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        if !(Self::MIN.year..=Self::MAX.year).contains(&year) {
            return None;
        }
        let month = u8::try_from(ordinal.rem_euclid(12) + 1).ok()?;
        let month = Month::try_from(month).ok()?;
        Some(YearMonth { year, month })
    }

    /// The month `months` after `self`, stopping at [`YearMonth::MIN`] or
    /// [`YearMonth::MAX`] on overflow.
    pub fn saturating_add_months(self, months: i64) -> YearMonth {
        self.checked_add_months(months)
            .unwrap_or(if months < 0 { Self::MIN } else { Self::MAX })
    }

    /// The following month, or `None` at the end of the range.
    pub fn next(self) -> Option<YearMonth> {
        self.checked_add_months(1)
    }

    /// The preceding month, or `None` at the start of the range.
    pub fn previous(self) -> Option<YearMonth> {
        self.checked_add_months(-1)
    }

    // Months since 0000-01, the basis for ordering and arithmetic
    fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(u8::from(self.month)) - 1
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &YearMonth) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &YearMonth) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    /// Parses `"YYYY-MM"`, e.g. `"2024-05"`.
    fn from_str(s: &str) -> Result<YearMonth, ParseYearMonthError> {
        let (year, month) = s.rsplit_once('-').ok_or(ParseYearMonthError::Format)?;
        let year = year
            .parse::<i32>()
            .map_err(|_| ParseYearMonthError::Format)?;
        let month = month
            .parse::<u8>()
            .map_err(|_| ParseYearMonthError::Format)?;
        let month = Month::try_from(month).map_err(|_| ParseYearMonthError::MonthRange)?;
        if !(YearMonth::MIN.year..=YearMonth::MAX.year).contains(&year) {
            return Err(ParseYearMonthError::YearRange);
        }
        Ok(YearMonth { year, month })
    }
}

/// Error returned when parsing a [`YearMonth`] from a string fails.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseYearMonthError {
    #[error("expected a month in YYYY-MM form")]
    Format,
    #[error("month number must be in 1..=12")]
    MonthRange,
    #[error("year is outside the supported calendar range")]
    YearRange,
}
