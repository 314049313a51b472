//! Core document model
//!
//! A [`Document`] owns the score elements, the current range selection and the
//! selection filter mask. It is the filter panel's document collaborator.

use serde::{Deserialize, Serialize};

use crate::filter_panel::FilterHost;
use crate::models::elements::ScoreElement;
use crate::models::filter::{FilterMask, SelectionFilterType};

/// A range selection spanning score positions across all voices
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSelection {
    /// First tick in the range (inclusive)
    pub start_tick: u32,

    /// End of the range (exclusive)
    pub end_tick: u32,
}

impl RangeSelection {
    /// Create a range, normalizing so that start <= end
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { start_tick: a, end_tick: b }
        } else {
            Self { start_tick: b, end_tick: a }
        }
    }

    pub fn contains(&self, tick: u32) -> bool {
        tick >= self.start_tick && tick < self.end_tick
    }
}

/// Rendering bookkeeping; never serialized
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderState {
    /// Set when a full redraw has been requested and not yet taken
    pub needs_full_redraw: bool,

    /// Total full redraws requested over the document's lifetime
    pub full_redraw_requests: u32,
}

/// Score document with its selection state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub elements: Vec<ScoreElement>,

    /// Active range selection (if any)
    #[serde(default)]
    pub selection: Option<RangeSelection>,

    /// Categories allowed into range selections
    #[serde(default)]
    pub filter: FilterMask,

    /// Ids of elements currently selected under the filter; always derived
    #[serde(skip_deserializing)]
    pub selected: Vec<u32>,

    #[serde(skip)]
    pub render_state: RenderState,
}

impl Document {
    /// Create an empty document with every category selectable
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(elements: Vec<ScoreElement>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    /// Select a tick range and compute its contents under the current filter
    pub fn select_range(&mut self, start_tick: u32, end_tick: u32) {
        self.selection = Some(RangeSelection::new(start_tick, end_tick));
        self.recompute_selection();
    }

    /// Clear the range selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.selected.clear();
    }

    /// Ids of the currently selected elements
    pub fn selected_ids(&self) -> &[u32] {
        &self.selected
    }

    /// Normalize the range selection and recompute its contents
    ///
    /// Needed after deserialization, where neither is guaranteed.
    pub fn resync_selection(&mut self) {
        self.selection = self
            .selection
            .map(|range| RangeSelection::new(range.start_tick, range.end_tick));
        self.recompute_selection();
    }

    /// Consume a pending full redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.render_state.needs_full_redraw)
    }

    fn recompute_selection(&mut self) {
        let Some(range) = self.selection else {
            self.selected.clear();
            return;
        };

        let filter = self.filter;
        self.selected = self
            .elements
            .iter()
            .filter(|e| range.contains(e.tick) && filter.can_select(e))
            .map(|e| e.id)
            .collect();

        log::debug!(
            "Range {}..{} selects {} of {} elements (filter {:#x})",
            range.start_tick,
            range.end_tick,
            self.selected.len(),
            self.elements.len(),
            filter.bits()
        );
    }
}

impl FilterHost for Document {
    fn filter_mask(&self) -> FilterMask {
        self.filter
    }

    fn set_filtered_bit(&mut self, category: SelectionFilterType, enabled: bool) {
        self.filter.set(category, enabled);
    }

    fn has_range_selection(&self) -> bool {
        self.selection.is_some()
    }

    fn recompute_selected_elements(&mut self) {
        self.recompute_selection();
    }

    fn request_full_redraw(&mut self) {
        self.render_state.needs_full_redraw = true;
        self.render_state.full_redraw_requests += 1;
    }
}
