//! The selection filter panel
//!
//! Keeps a [`FilterChecklist`] in sync with the filter mask of the bound
//! document, and writes user edits back to it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::filter_panel::checklist::{
    CheckState, FilterChecklist, RowChanged, RowId, RowView, AGGREGATE_ROW,
};
use crate::filter_panel::host::{AccessibleStateChange, Announcer, FilterHost, LogAnnouncer};
use crate::models::filter::SelectionFilterType;

pub struct FilterPanel<H: FilterHost> {
    checklist: FilterChecklist,
    document: Option<H>,
    announcer: Box<dyn Announcer>,
    /// Row changes delivered by the checklist listener, not yet handled
    pending: Rc<RefCell<VecDeque<RowChanged>>>,
}

impl<H: FilterHost> FilterPanel<H> {
    /// Unbound panel announcing through the `log` facade
    pub fn new() -> Self {
        Self::with_announcer(Box::new(LogAnnouncer))
    }

    pub fn with_announcer(announcer: Box<dyn Announcer>) -> Self {
        let pending = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&pending);

        let mut checklist = FilterChecklist::new();
        checklist.on_row_changed(move |event| sink.borrow_mut().push_back(event));

        Self {
            checklist,
            document: None,
            announcer,
            pending,
        }
    }

    /// Attach to a document and render its filter
    ///
    /// Returns the previously bound document, if any.
    pub fn bind(&mut self, document: H) -> Option<H> {
        let previous = self.document.replace(document);
        log::debug!("Filter panel bound (replaced previous: {})", previous.is_some());
        self.refresh();
        previous
    }

    /// Detach the current document
    pub fn unbind(&mut self) -> Option<H> {
        let previous = self.document.take();
        self.refresh();
        previous
    }

    pub fn is_bound(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&H> {
        self.document.as_ref()
    }

    pub fn document_mut(&mut self) -> Option<&mut H> {
        self.document.as_mut()
    }

    pub fn checklist(&self) -> &FilterChecklist {
        &self.checklist
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.checklist.views()
    }

    /// Re-render every row from the bound document's mask
    ///
    /// With no document bound every row shows unchecked.
    pub fn refresh(&mut self) {
        let _bulk = self.checklist.begin_bulk_update();

        let mask = self.document.as_ref().map(|doc| doc.filter_mask());
        let mut checked = 0;
        let mut total = 0;

        for index in 0..self.checklist.len() {
            let Some(RowId::Category(category)) = self.checklist.row(index).map(|row| row.id) else {
                continue;
            };
            let is_set = mask.map(|m| m.is_set(category)).unwrap_or(false);
            self.checklist.set_state(index, CheckState::from_bool(is_set));
            total += 1;
            if is_set {
                checked += 1;
            }
        }

        self.checklist
            .set_state(AGGREGATE_ROW, CheckState::aggregate(checked, total));
    }

    /// Apply a row edit to the bound document
    ///
    /// The aggregate row sets or clears every category; any other row sets or
    /// clears its own bit. No-op when unbound or for an unknown row.
    pub fn on_row_toggled(&mut self, row: usize, new_state: CheckState) {
        let Some(id) = self.checklist.row(row).map(|r| r.id) else {
            log::debug!("Ignoring toggle of unknown filter row {}", row);
            return;
        };
        let Some(document) = self.document.as_mut() else {
            log::debug!("Ignoring toggle of filter row {}: no document bound", row);
            return;
        };

        let enabled = new_state.is_checked();
        match id {
            RowId::All => {
                for category in SelectionFilterType::ALL {
                    document.set_filtered_bit(category, enabled);
                }
            }
            RowId::Category(category) => document.set_filtered_bit(category, enabled),
        }

        if document.has_range_selection() {
            document.recompute_selected_elements();
        }

        self.refresh();

        if let Some(document) = self.document.as_mut() {
            document.request_full_redraw();
        }

        let change = AccessibleStateChange {
            label: id.label(),
            state: self.checklist.state(row).unwrap_or(new_state),
        };
        self.announcer.announce_state_change(&change);
    }

    /// User click on a row
    ///
    /// The checklist reports the click through its listener; the queued
    /// change is then applied with [`FilterPanel::on_row_toggled`].
    pub fn click_row(&mut self, row: usize) {
        if self.document.is_none() {
            log::debug!("Ignoring click on filter row {}: no document bound", row);
            return;
        }

        self.checklist.user_toggle(row);

        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(event) => self.on_row_toggled(event.row, event.state),
                None => break,
            }
        }
    }
}

impl<H: FilterHost> Default for FilterPanel<H> {
    fn default() -> Self {
        Self::new()
    }
}
