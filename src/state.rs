use crate::month::YearMonth;
use crate::properties::CalendarProperties;
use crate::range::MonthRange;
use std::fmt;

type NavigateHook = Box<dyn FnMut(YearMonth)>;

/// The navigation cursor of a paged calendar: which month is in view, and
/// how to ask the host viewport to move.
///
/// The state never moves the viewport itself.  [`CalendarState::go_to`]
/// clamps the target into the navigable range and hands it to the registered
/// hook synchronously; the host scrolls its viewport and, once the new page
/// has settled, reports the month back through
/// [`CalendarState::page_settled`], which is what actually updates
/// [`CalendarState::current_month`].  A `go_to` issued while an earlier one
/// is still settling simply supersedes it; only the latest hook and the
/// latest settled month are kept.
///
/// Every operation is total: out-of-range targets are clamped, and missing
/// pieces (no hook, no current month) make the operation a quiet no-op.
#[derive(Default)]
pub struct CalendarState {
    current: Option<YearMonth>,
    bounds: Option<MonthRange>,
    navigate: Option<NavigateHook>,
}

impl CalendarState {
    pub fn new() -> CalendarState {
        CalendarState::default()
    }

    /// Adopts the bounds of `properties` and resets the cursor to its
    /// initial month, clamped into them.  Call this whenever the active
    /// configuration changes.
    pub fn init(&mut self, properties: &CalendarProperties) {
        let range = properties.range();
        self.bounds = Some(range);
        self.current = Some(range.clamp(properties.init_month()));
    }

    /// The month currently in view, or `None` before the first
    /// [`CalendarState::init`].
    pub fn current_month(&self) -> Option<YearMonth> {
        self.current
    }

    /// Registers the navigation hook.  Only one hook is kept: registering
    /// again replaces the previous one.
    pub fn on_navigate<F>(&mut self, hook: F)
    where
        F: FnMut(YearMonth) + 'static,
    {
        self.navigate = Some(Box::new(hook));
    }

    /// Asks the host to move to `target`, clamped into the navigable range.
    /// The hook is invoked before this returns; without a hook this does
    /// nothing.
    pub fn go_to(&mut self, target: YearMonth) {
        let target = self.bounds.map_or(target, |range| range.clamp(target));
        if let Some(hook) = self.navigate.as_mut() {
            hook(target);
        }
    }

    /// Asks the host to move one month forward.  Does nothing before the
    /// first [`CalendarState::init`].
    pub fn next_month(&mut self) {
        if let Some(current) = self.current {
            self.go_to(current.saturating_add_months(1));
        }
    }

    /// Asks the host to move one month back.  Does nothing before the first
    /// [`CalendarState::init`].
    pub fn previous_month(&mut self) {
        if let Some(current) = self.current {
            self.go_to(current.saturating_add_months(-1));
        }
    }

    /// Records the month the host viewport has settled on.  The value is
    /// trusted as-is: the page space is already bounded, so no re-clamping
    /// happens here.
    pub fn page_settled(&mut self, month: YearMonth) {
        self.current = Some(month);
    }
}

impl fmt::Debug for CalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarState")
            .field("current", &self.current)
            .field("bounds", &self.bounds)
            .field("navigate", &self.navigate.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use time::Month;

    fn ym(year: i32, month: Month) -> YearMonth {
        YearMonth::new(year, month)
    }

    fn props() -> CalendarProperties {
        CalendarProperties::new(
            ym(2024, Month::May),
            ym(2023, Month::January),
            ym(2025, Month::December),
        )
        .unwrap()
    }

    fn recording(state: &mut CalendarState) -> Rc<RefCell<Vec<YearMonth>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.on_navigate(move |month| sink.borrow_mut().push(month));
        seen
    }

    #[test]
    fn test_init_sets_current_to_init_month() {
        let mut state = CalendarState::new();
        state.init(&props());
        assert_eq!(state.current_month(), Some(ym(2024, Month::May)));
    }

    #[test]
    fn test_init_clamps_out_of_range_init_month() {
        let mut state = CalendarState::new();
        state.init(
            &CalendarProperties::new(
                ym(2022, Month::March),
                ym(2023, Month::January),
                ym(2025, Month::December),
            )
            .unwrap(),
        );
        assert_eq!(state.current_month(), Some(ym(2023, Month::January)));
    }

    #[test]
    fn test_go_to_invokes_hook_synchronously() {
        let mut state = CalendarState::new();
        state.init(&props());
        let seen = recording(&mut state);
        state.go_to(ym(2024, Month::September));
        assert_eq!(*seen.borrow(), vec![ym(2024, Month::September)]);
        // The cursor itself only moves once the host reports back
        assert_eq!(state.current_month(), Some(ym(2024, Month::May)));
    }

    #[test]
    fn test_go_to_clamps_to_both_bounds() {
        let mut state = CalendarState::new();
        state.init(&props());
        let seen = recording(&mut state);
        state.go_to(ym(2026, Month::July));
        state.go_to(ym(2021, Month::February));
        assert_eq!(
            *seen.borrow(),
            vec![ym(2025, Month::December), ym(2023, Month::January)]
        );
    }

    #[test]
    fn test_go_to_without_hook_is_a_no_op() {
        let mut state = CalendarState::new();
        state.init(&props());
        state.go_to(ym(2024, Month::September));
        assert_eq!(state.current_month(), Some(ym(2024, Month::May)));
    }

    #[test]
    fn test_go_to_before_init_passes_target_through() {
        let mut state = CalendarState::new();
        let seen = recording(&mut state);
        state.go_to(ym(2031, Month::January));
        assert_eq!(*seen.borrow(), vec![ym(2031, Month::January)]);
    }

    #[test]
    fn test_next_and_previous_month() {
        let mut state = CalendarState::new();
        state.init(&props());
        let seen = recording(&mut state);
        state.next_month();
        state.previous_month();
        assert_eq!(
            *seen.borrow(),
            vec![ym(2024, Month::June), ym(2024, Month::April)]
        );
    }

    #[test]
    fn test_next_month_at_end_clamps_in_place() {
        let mut state = CalendarState::new();
        state.init(&props());
        state.page_settled(ym(2025, Month::December));
        let seen = recording(&mut state);
        state.next_month();
        assert_eq!(*seen.borrow(), vec![ym(2025, Month::December)]);
    }

    #[test]
    fn test_next_month_before_init_is_a_no_op() {
        let mut state = CalendarState::new();
        let seen = recording(&mut state);
        state.next_month();
        state.previous_month();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_hook_registration_is_last_write_wins() {
        let mut state = CalendarState::new();
        state.init(&props());
        let first = recording(&mut state);
        let second = recording(&mut state);
        state.go_to(ym(2024, Month::September));
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![ym(2024, Month::September)]);
    }

    #[test]
    fn test_page_settled_updates_current_directly() {
        let mut state = CalendarState::new();
        state.init(&props());
        state.page_settled(ym(2025, Month::March));
        assert_eq!(state.current_month(), Some(ym(2025, Month::March)));
    }

    #[test]
    fn test_reinit_resets_cursor() {
        let mut state = CalendarState::new();
        state.init(&props());
        state.page_settled(ym(2025, Month::March));
        state.init(&props());
        assert_eq!(state.current_month(), Some(ym(2024, Month::May)));
    }
}
