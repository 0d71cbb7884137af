use crate::grid::DayCell;
use std::collections::BTreeSet;
use time::Date;

/// Selection model of the single-date picker: at most one date is selected
/// at a time.
///
/// The model only holds the selection; whether a given grid cell may be
/// picked at all is answered by [`SinglePick::can_pick`], which the host
/// checks before calling [`SinglePick::pick`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SinglePick {
    selected: Option<Date>,
    enabled: Option<BTreeSet<Date>>,
}

impl SinglePick {
    /// A picker with no selection in which every date is pickable.
    pub fn new() -> SinglePick {
        SinglePick::default()
    }

    /// A picker in which only the given dates are pickable.
    pub fn with_enabled<I: IntoIterator<Item = Date>>(dates: I) -> SinglePick {
        SinglePick {
            selected: None,
            enabled: Some(dates.into_iter().collect()),
        }
    }

    pub fn selected(&self) -> Option<Date> {
        self.selected
    }

    pub fn is_selected(&self, date: Date) -> bool {
        self.selected == Some(date)
    }

    /// True unless an enabled set was given and `date` is not in it.
    pub fn is_enabled(&self, date: Date) -> bool {
        self.enabled.as_ref().map_or(true, |set| set.contains(&date))
    }

    /// True if the cell may be picked: it must belong to the displayed
    /// month and be enabled.
    pub fn can_pick(&self, cell: &DayCell) -> bool {
        cell.in_month && self.is_enabled(cell.date)
    }

    /// Selects `date`, or clears the selection if `date` was already
    /// selected.
    pub fn pick(&mut self, date: Date) {
        if self.selected == Some(date) {
            self.selected = None;
        } else {
            self.selected = Some(date);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Selection model of the multi-date picker: any number of dates, toggled
/// independently.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MultiPick {
    selected: BTreeSet<Date>,
    enabled: Option<BTreeSet<Date>>,
}

impl MultiPick {
    /// A picker with no selection in which every date is pickable.
    pub fn new() -> MultiPick {
        MultiPick::default()
    }

    /// A picker in which only the given dates are pickable.
    pub fn with_enabled<I: IntoIterator<Item = Date>>(dates: I) -> MultiPick {
        MultiPick {
            selected: BTreeSet::new(),
            enabled: Some(dates.into_iter().collect()),
        }
    }

    /// The selected dates in ascending order.
    pub fn selected(&self) -> &BTreeSet<Date> {
        &self.selected
    }

    pub fn is_selected(&self, date: Date) -> bool {
        self.selected.contains(&date)
    }

    /// True unless an enabled set was given and `date` is not in it.
    pub fn is_enabled(&self, date: Date) -> bool {
        self.enabled.as_ref().map_or(true, |set| set.contains(&date))
    }

    /// True if the cell may be picked: it must belong to the displayed
    /// month and be enabled.
    pub fn can_pick(&self, cell: &DayCell) -> bool {
        cell.in_month && self.is_enabled(cell.date)
    }

    /// Adds `date` to the selection, or removes it if already selected.
    pub fn toggle(&mut self, date: Date) {
        if !self.selected.remove(&date) {
            self.selected.insert(date);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn cell(date: Date, in_month: bool) -> DayCell {
        DayCell {
            date,
            in_month,
            is_today: false,
            is_weekend: false,
        }
    }

    #[test]
    fn test_single_pick_toggles() {
        let mut picker = SinglePick::new();
        picker.pick(date!(2024 - 05 - 17));
        assert_eq!(picker.selected(), Some(date!(2024 - 05 - 17)));
        picker.pick(date!(2024 - 05 - 17));
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_single_pick_replaces_previous_selection() {
        let mut picker = SinglePick::new();
        picker.pick(date!(2024 - 05 - 17));
        picker.pick(date!(2024 - 05 - 20));
        assert_eq!(picker.selected(), Some(date!(2024 - 05 - 20)));
        assert!(!picker.is_selected(date!(2024 - 05 - 17)));
    }

    #[test]
    fn test_single_pick_enabled_set() {
        let picker = SinglePick::with_enabled([date!(2024 - 05 - 17)]);
        assert!(picker.is_enabled(date!(2024 - 05 - 17)));
        assert!(!picker.is_enabled(date!(2024 - 05 - 18)));
        assert!(picker.can_pick(&cell(date!(2024 - 05 - 17), true)));
        assert!(!picker.can_pick(&cell(date!(2024 - 05 - 18), true)));
    }

    #[test]
    fn test_adjacent_month_cells_are_not_pickable() {
        let picker = SinglePick::new();
        assert!(!picker.can_pick(&cell(date!(2024 - 04 - 30), false)));
        let picker = MultiPick::new();
        assert!(!picker.can_pick(&cell(date!(2024 - 04 - 30), false)));
    }

    #[test]
    fn test_multi_pick_toggles_membership() {
        let mut picker = MultiPick::new();
        picker.toggle(date!(2024 - 05 - 17));
        picker.toggle(date!(2024 - 05 - 20));
        assert!(picker.is_selected(date!(2024 - 05 - 17)));
        assert!(picker.is_selected(date!(2024 - 05 - 20)));
        picker.toggle(date!(2024 - 05 - 17));
        assert!(!picker.is_selected(date!(2024 - 05 - 17)));
        assert_eq!(picker.selected().len(), 1);
    }

    #[test]
    fn test_multi_pick_enabled_set() {
        let picker = MultiPick::with_enabled([date!(2024 - 05 - 17), date!(2024 - 05 - 18)]);
        assert!(picker.can_pick(&cell(date!(2024 - 05 - 18), true)));
        assert!(!picker.can_pick(&cell(date!(2024 - 05 - 19), true)));
    }

    #[test]
    fn test_clear() {
        let mut single = SinglePick::new();
        single.pick(date!(2024 - 05 - 17));
        single.clear();
        assert_eq!(single.selected(), None);

        let mut multi = MultiPick::new();
        multi.toggle(date!(2024 - 05 - 17));
        multi.clear();
        assert!(multi.selected().is_empty());
    }
}
