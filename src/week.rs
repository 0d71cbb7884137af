use time::Weekday::{self, *};

pub const DAYS_IN_WEEK: usize = 7;

// Canonical week, Monday first; every other ordering is a rotation of this.
const CANONICAL: [Weekday; DAYS_IN_WEEK] =
    [Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday];

/// Returns the seven weekdays in display order, starting from `first` and
/// preserving cyclic order.
pub fn ordered_weekdays(first: Weekday) -> [Weekday; DAYS_IN_WEEK] {
    let shift = usize::from(first.number_days_from_monday());
    std::array::from_fn(|i| CANONICAL[(i + shift) % DAYS_IN_WEEK])
}

/// Short standalone weekday labels for `locale`, in display order starting
/// from `first`.  The locale's primary subtag selects the label set;
/// unrecognized locales fall back to English.  Labels affect display only,
/// never date arithmetic.
pub fn weekday_labels(locale: &str, first: Weekday) -> [&'static str; DAYS_IN_WEEK] {
    let names = short_names(locale);
    let shift = usize::from(first.number_days_from_monday());
    std::array::from_fn(|i| names[(i + shift) % DAYS_IN_WEEK])
}

fn short_names(locale: &str) -> &'static [&'static str; DAYS_IN_WEEK] {
    match locale.split(['-', '_']).next().unwrap_or(locale) {
        "de" => &["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
        "es" => &["Lu", "Ma", "Mi", "Ju", "Vi", "Sá", "Do"],
        "fr" => &["Lu", "Ma", "Me", "Je", "Ve", "Sa", "Di"],
        "ru" => &["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
        _ => &["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
    }
}

/// A set of weekdays, such as the days counted as the weekend.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WeekdaySet([bool; DAYS_IN_WEEK]);

impl WeekdaySet {
    pub const EMPTY: WeekdaySet = WeekdaySet([false; DAYS_IN_WEEK]);

    /// Saturday and Sunday.
    pub const WEEKEND: WeekdaySet = WeekdaySet([false, false, false, false, false, true, true]);

    pub fn contains(self, day: Weekday) -> bool {
        self.0[usize::from(day.number_days_from_monday())]
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0[usize::from(day.number_days_from_monday())] = true;
    }

    /// Iterates over the member weekdays in Monday-first order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        CANONICAL.into_iter().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> WeekdaySet {
        let mut set = WeekdaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}
