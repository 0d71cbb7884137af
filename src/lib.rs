//! Paged month calendar engine and terminal date pickers.
//!
//! The crate splits cleanly in two.  The engine half is framework-free
//! calendar arithmetic: [`YearMonth`] and the navigable [`MonthRange`] with
//! its page indexing, the [`MonthGrid`] classification of a month's display
//! cells, the [`CalendarProperties`] configuration, and the
//! [`CalendarState`] cursor that a host viewport drives through a
//! navigation hook.  The other half renders one page of that calendar as a
//! ratatui widget ([`MonthView`]) and layers date selection on top
//! ([`SinglePick`], [`MultiPick`]).
//!
//! ```
//! use monthpick::{CalendarProperties, CalendarState, YearMonth};
//! use time::{Month, Weekday};
//!
//! let props = CalendarProperties::around(YearMonth::new(2024, Month::May))
//!     .with_first_weekday(Weekday::Sunday);
//! let mut state = CalendarState::new();
//! state.init(&props);
//! assert_eq!(state.current_month(), Some(YearMonth::new(2024, Month::May)));
//! ```

pub mod grid;
pub mod month;
pub mod properties;
pub mod range;
pub mod select;
pub mod state;
pub mod theme;
pub mod week;
pub mod widget;

pub use crate::grid::{DayCell, MonthGrid};
pub use crate::month::{ParseYearMonthError, YearMonth};
pub use crate::properties::CalendarProperties;
pub use crate::range::{InvalidRangeError, MonthRange};
pub use crate::select::{MultiPick, SinglePick};
pub use crate::state::CalendarState;
pub use crate::week::{ordered_weekdays, weekday_labels, WeekdaySet};
pub use crate::widget::{DayStyler, DefaultStyler, MonthView};
