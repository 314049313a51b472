//! Collaborators the filter panel talks to
//!
//! The panel never reaches into a concrete document type. It reads and
//! writes the filter through [`FilterHost`] and reports state changes to an
//! [`Announcer`].

use serde::Serialize;

use crate::filter_panel::checklist::CheckState;
use crate::models::filter::{FilterMask, SelectionFilterType};

/// Document-side owner of the selection filter
pub trait FilterHost {
    /// Current filter mask
    fn filter_mask(&self) -> FilterMask;

    /// Set or clear exactly one category bit
    fn set_filtered_bit(&mut self, category: SelectionFilterType, enabled: bool);

    /// Whether a range selection is active
    fn has_range_selection(&self) -> bool;

    /// Re-evaluate which elements of the range selection pass the filter
    fn recompute_selected_elements(&mut self);

    /// Ask the view to repaint everything
    fn request_full_redraw(&mut self);
}

/// Accessible description of a toggled checklist row
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessibleStateChange {
    pub label: &'static str,
    pub state: CheckState,
}

/// Accessibility subsystem
pub trait Announcer {
    fn announce_state_change(&mut self, change: &AccessibleStateChange);
}

/// Announcer that writes state changes to the `log` facade
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce_state_change(&mut self, change: &AccessibleStateChange) {
        log::info!("{}: {}", change.label, change.state.as_str());
    }
}
