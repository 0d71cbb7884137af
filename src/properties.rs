use crate::month::YearMonth;
use crate::range::{InvalidRangeError, MonthRange};
use crate::week::{self, WeekdaySet, DAYS_IN_WEEK};
use time::Weekday;

/// How far the navigable range extends on each side of the initial month
/// when no explicit bounds are given
const DEFAULT_SPAN_MONTHS: i64 = 100 * 12;

/// Validated calendar configuration: the first day of the week, the weekend
/// days, the weekday-label locale, the initially shown month, and the
/// inclusive range of navigable months.
///
/// Properties are immutable once built.  Two constructors cover the two
/// range policies: [`CalendarProperties::new`] fails on a reversed range,
/// while [`CalendarProperties::normalized`] repairs one by swapping the
/// bounds and clamping the initial month into them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarProperties {
    first_weekday: Weekday,
    weekend: WeekdaySet,
    locale: String,
    init: YearMonth,
    range: MonthRange,
}

impl CalendarProperties {
    /// Creates properties showing `init` first and navigable over
    /// `start..=end`.  Fails if `start` is after `end`; `init` is kept as
    /// given even when it lies outside the range (the calendar state clamps
    /// it on initialization).
    pub fn new(
        init: YearMonth,
        start: YearMonth,
        end: YearMonth,
    ) -> Result<CalendarProperties, InvalidRangeError> {
        Ok(CalendarProperties::with_range(
            init,
            MonthRange::new(start, end)?,
        ))
    }

    /// Creates properties like [`CalendarProperties::new`] but never fails:
    /// reversed bounds are swapped and `init` is clamped into the resulting
    /// range.
    pub fn normalized(init: YearMonth, start: YearMonth, end: YearMonth) -> CalendarProperties {
        let range = MonthRange::normalized(start, end);
        CalendarProperties::with_range(range.clamp(init), range)
    }

    /// Creates properties showing `init` first with bounds 100 years on
    /// either side of it.
    pub fn around(init: YearMonth) -> CalendarProperties {
        let range = MonthRange::normalized(
            init.saturating_add_months(-DEFAULT_SPAN_MONTHS),
            init.saturating_add_months(DEFAULT_SPAN_MONTHS),
        );
        CalendarProperties::with_range(init, range)
    }

    fn with_range(init: YearMonth, range: MonthRange) -> CalendarProperties {
        CalendarProperties {
            first_weekday: Weekday::Monday,
            weekend: WeekdaySet::WEEKEND,
            locale: String::from("en"),
            init,
            range,
        }
    }

    /// Changes the first day of the week.
    pub fn with_first_weekday(mut self, day: Weekday) -> CalendarProperties {
        self.first_weekday = day;
        self
    }

    /// Replaces the set of days counted as the weekend.
    pub fn with_weekend<I: IntoIterator<Item = Weekday>>(mut self, days: I) -> CalendarProperties {
        self.weekend = days.into_iter().collect();
        self
    }

    /// Changes the locale used for weekday labels.  Display-only; no effect
    /// on date arithmetic.
    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> CalendarProperties {
        self.locale = locale.into();
        self
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn weekend(&self) -> WeekdaySet {
        self.weekend
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn init_month(&self) -> YearMonth {
        self.init
    }

    pub fn range(&self) -> MonthRange {
        self.range
    }

    pub fn is_weekend(&self, day: Weekday) -> bool {
        self.weekend.contains(day)
    }

    /// The seven weekdays in display order.
    pub fn weekdays(&self) -> [Weekday; DAYS_IN_WEEK] {
        week::ordered_weekdays(self.first_weekday)
    }

    /// Short weekday labels in display order, localized per the configured
    /// locale.
    pub fn weekday_labels(&self) -> [&'static str; DAYS_IN_WEEK] {
        week::weekday_labels(&self.locale, self.first_weekday)
    }
}
