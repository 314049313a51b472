//! Tri-state checklist backing the filter panel
//!
//! Row 0 is the "All" aggregate; every other row stands for one
//! [`SelectionFilterType`]. The checklist itself holds no filter logic: it
//! stores row states, and tells a single listener when the user clicks a row.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

use crate::models::filter::SelectionFilterType;

/// Index of the aggregate row
pub const AGGREGATE_ROW: usize = 0;

/// Visible check state of a row
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    #[default]
    Unchecked,
    Partial,
    Checked,
}

impl CheckState {
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Aggregate state for `checked` rows out of `total`
    pub fn aggregate(checked: usize, total: usize) -> Self {
        if checked == 0 {
            CheckState::Unchecked
        } else if checked >= total {
            CheckState::Checked
        } else {
            CheckState::Partial
        }
    }

    /// Effective boolean; partial counts as unchecked
    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }

    /// State a click moves to
    pub fn toggled(self) -> Self {
        CheckState::from_bool(!self.is_checked())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckState::Unchecked => "unchecked",
            CheckState::Partial => "partially checked",
            CheckState::Checked => "checked",
        }
    }
}

/// What a row stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowId {
    /// The derived "All" row
    All,
    Category(SelectionFilterType),
}

impl RowId {
    pub fn label(self) -> &'static str {
        match self {
            RowId::All => "All",
            RowId::Category(category) => category.label(),
        }
    }

    /// Mask bit for a category row, `None` for the aggregate
    pub fn bit(self) -> Option<u32> {
        match self {
            RowId::All => None,
            RowId::Category(category) => Some(category.bit()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistRow {
    pub id: RowId,
    pub state: CheckState,
}

/// Serializable snapshot of a row for the JS side
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub label: &'static str,
    pub bit: Option<u32>,
    pub state: CheckState,
}

/// Emitted when the user changes a row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowChanged {
    pub row: usize,
    pub state: CheckState,
}

pub type RowChangedCallback = Box<dyn FnMut(RowChanged)>;

/// Keeps the checklist in bulk update mode until dropped
#[must_use = "bulk update mode ends when the guard is dropped"]
pub struct BulkUpdateGuard {
    depth: Rc<Cell<usize>>,
}

impl Drop for BulkUpdateGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

pub struct FilterChecklist {
    rows: Vec<ChecklistRow>,
    listener: Option<RowChangedCallback>,
    bulk_depth: Rc<Cell<usize>>,
}

impl FilterChecklist {
    /// Aggregate row followed by one row per category, all unchecked
    pub fn new() -> Self {
        let rows = std::iter::once(RowId::All)
            .chain(SelectionFilterType::ALL.iter().copied().map(RowId::Category))
            .map(|id| ChecklistRow {
                id,
                state: CheckState::Unchecked,
            })
            .collect();

        Self {
            rows,
            listener: None,
            bulk_depth: Rc::new(Cell::new(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ChecklistRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ChecklistRow> {
        self.rows.get(index)
    }

    pub fn state(&self, index: usize) -> Option<CheckState> {
        self.rows.get(index).map(|row| row.state)
    }

    pub fn views(&self) -> Vec<RowView> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView {
                index,
                label: row.id.label(),
                bit: row.id.bit(),
                state: row.state,
            })
            .collect()
    }

    /// Register the row-changed listener, replacing any previous one
    pub fn on_row_changed(&mut self, callback: impl FnMut(RowChanged) + 'static) {
        self.listener = Some(Box::new(callback));
    }

    /// Suppress row-changed events until the returned guard is dropped
    pub fn begin_bulk_update(&self) -> BulkUpdateGuard {
        self.bulk_depth.set(self.bulk_depth.get() + 1);
        BulkUpdateGuard {
            depth: Rc::clone(&self.bulk_depth),
        }
    }

    pub fn in_bulk_update(&self) -> bool {
        self.bulk_depth.get() > 0
    }

    /// Programmatic write; never notifies the listener
    pub fn set_state(&mut self, index: usize, state: CheckState) {
        if let Some(row) = self.rows.get_mut(index) {
            row.state = state;
        }
    }

    /// User click on a row
    ///
    /// Returns the row's new state, or `None` for an out-of-range index.
    pub fn user_toggle(&mut self, index: usize) -> Option<CheckState> {
        let row = self.rows.get_mut(index)?;
        let state = row.state.toggled();
        row.state = state;

        if !self.in_bulk_update() {
            if let Some(listener) = self.listener.as_mut() {
                listener(RowChanged { row: index, state });
            }
        }
        Some(state)
    }
}

impl Default for FilterChecklist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording_checklist() -> (FilterChecklist, Rc<RefCell<Vec<RowChanged>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut checklist = FilterChecklist::new();
        checklist.on_row_changed(move |event| sink.borrow_mut().push(event));
        (checklist, events)
    }

    #[test]
    fn test_rows_in_fixed_order() {
        let checklist = FilterChecklist::new();
        assert_eq!(checklist.len(), SelectionFilterType::ALL.len() + 1);
        assert_eq!(checklist.row(AGGREGATE_ROW).unwrap().id, RowId::All);
        assert_eq!(
            checklist.row(8).unwrap().id,
            RowId::Category(SelectionFilterType::Lyrics)
        );
    }

    #[test]
    fn test_aggregate_state() {
        assert_eq!(CheckState::aggregate(0, 22), CheckState::Unchecked);
        assert_eq!(CheckState::aggregate(5, 22), CheckState::Partial);
        assert_eq!(CheckState::aggregate(22, 22), CheckState::Checked);
    }

    #[test]
    fn test_partial_toggles_to_checked() {
        assert_eq!(CheckState::Partial.toggled(), CheckState::Checked);
        assert_eq!(CheckState::Checked.toggled(), CheckState::Unchecked);
        assert_eq!(CheckState::Unchecked.toggled(), CheckState::Checked);
    }

    #[test]
    fn test_user_toggle_emits_one_event() {
        let (mut checklist, events) = recording_checklist();

        assert_eq!(checklist.user_toggle(3), Some(CheckState::Checked));
        assert_eq!(
            events.borrow().as_slice(),
            &[RowChanged { row: 3, state: CheckState::Checked }]
        );
    }

    #[test]
    fn test_set_state_is_silent() {
        let (mut checklist, events) = recording_checklist();
        checklist.set_state(2, CheckState::Checked);
        assert_eq!(checklist.state(2), Some(CheckState::Checked));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_bulk_update_suppresses_events_until_dropped() {
        let (mut checklist, events) = recording_checklist();

        {
            let _outer = checklist.begin_bulk_update();
            let inner = checklist.begin_bulk_update();
            drop(inner);
            assert!(checklist.in_bulk_update());
            checklist.user_toggle(1);
        }
        assert!(events.borrow().is_empty());
        assert!(!checklist.in_bulk_update());

        checklist.user_toggle(1);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let (mut checklist, events) = recording_checklist();
        assert_eq!(checklist.user_toggle(99), None);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_views_report_bits() {
        let views = FilterChecklist::new().views();
        assert_eq!(views[0].label, "All");
        assert_eq!(views[0].bit, None);
        assert_eq!(views[8].label, "Lyrics");
        assert_eq!(views[8].bit, Some(0x80));
    }
}
