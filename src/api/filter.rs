//! Selection filter API
//!
//! The active filter panel is WASM-owned: JavaScript loads a document into it,
//! clicks rows and reads back the rendered rows. Each operation exists as a
//! plain Rust function and as a `#[wasm_bindgen]` export wrapping it.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::api::errors::FilterApiError;
use crate::api::helpers::{deserialize, serialize, to_js_error};
use crate::filter_panel::{CheckState, FilterHost, FilterPanel, RowView};
use crate::models::{Document, SelectionFilterType};
use crate::{wasm_info, wasm_log};

// WASM-owned panel (single UI thread)
thread_local! {
    static PANEL: RefCell<Option<FilterPanel<Document>>> = const { RefCell::new(None) };
}

/// Run `f` against the panel, creating it on first use
fn with_panel<T>(f: impl FnOnce(&mut FilterPanel<Document>) -> T) -> T {
    PANEL.with(|cell| {
        let mut slot = cell.borrow_mut();
        let panel = slot.get_or_insert_with(FilterPanel::new);
        f(panel)
    })
}

/// Run `f` against the panel, failing if no document is bound
fn with_bound_panel<T>(
    f: impl FnOnce(&mut FilterPanel<Document>) -> Result<T, FilterApiError>,
) -> Result<T, FilterApiError> {
    with_panel(|panel| {
        if !panel.is_bound() {
            return Err(FilterApiError::NoDocument);
        }
        f(panel)
    })
}

fn check_row(panel: &FilterPanel<Document>, index: usize) -> Result<(), FilterApiError> {
    let len = panel.checklist().len();
    if index >= len {
        return Err(FilterApiError::RowOutOfRange { index, len });
    }
    Ok(())
}

// ============================================================================
// Rust API
// ============================================================================

/// Bind `document` to the panel, replacing any loaded document
pub fn load_document(mut document: Document) -> Vec<RowView> {
    with_panel(|panel| {
        document.resync_selection();
        log::info!(
            "Loading document {:?} ({} elements, {} of {} categories enabled)",
            document.title,
            document.elements.len(),
            document.filter.count(),
            SelectionFilterType::ALL.len()
        );
        panel.bind(document);
        panel.rows()
    })
}

/// Detach and return the loaded document
pub fn unload_document() -> Option<Document> {
    with_panel(|panel| panel.unbind())
}

/// Rendered rows; all unchecked when nothing is loaded
pub fn filter_rows() -> Vec<RowView> {
    with_panel(|panel| panel.rows())
}

/// User click on a row
pub fn click_filter_row(index: usize) -> Result<Vec<RowView>, FilterApiError> {
    with_bound_panel(|panel| {
        check_row(panel, index)?;
        panel.click_row(index);
        Ok(panel.rows())
    })
}

/// Set a row directly, bypassing click semantics
pub fn set_filter_row(index: usize, checked: bool) -> Result<Vec<RowView>, FilterApiError> {
    with_bound_panel(|panel| {
        check_row(panel, index)?;
        panel.on_row_toggled(index, CheckState::from_bool(checked));
        Ok(panel.rows())
    })
}

pub fn filter_mask() -> Result<u32, FilterApiError> {
    with_bound_panel(|panel| {
        panel
            .document()
            .map(|doc| doc.filter.bits())
            .ok_or(FilterApiError::NoDocument)
    })
}

/// Select a tick range of the loaded document
pub fn select_range(start_tick: u32, end_tick: u32) -> Result<Vec<u32>, FilterApiError> {
    with_bound_panel(|panel| {
        let doc = panel.document_mut().ok_or(FilterApiError::NoDocument)?;
        doc.select_range(start_tick, end_tick);
        doc.request_full_redraw();
        Ok(doc.selected_ids().to_vec())
    })
}

/// Drop the range selection of the loaded document
pub fn clear_selection() -> Result<(), FilterApiError> {
    with_bound_panel(|panel| {
        let doc = panel.document_mut().ok_or(FilterApiError::NoDocument)?;
        doc.clear_selection();
        doc.request_full_redraw();
        Ok(())
    })
}

/// Ids selected by the current range selection under the filter
pub fn selected_elements() -> Result<Vec<u32>, FilterApiError> {
    with_bound_panel(|panel| {
        panel
            .document()
            .map(|doc| doc.selected_ids().to_vec())
            .ok_or(FilterApiError::NoDocument)
    })
}

// ============================================================================
// JavaScript API
// ============================================================================

#[wasm_bindgen(js_name = loadDocument)]
pub fn load_document_js(document_js: JsValue) -> Result<JsValue, JsValue> {
    let document: Document = deserialize(document_js, "Document deserialization error")?;
    wasm_info!("loadDocument: {} elements", document.elements.len());
    serialize(&load_document(document), "Row serialization error")
}

#[wasm_bindgen(js_name = unloadDocument)]
pub fn unload_document_js() -> Result<JsValue, JsValue> {
    wasm_info!("unloadDocument");
    serialize(&unload_document(), "Document serialization error")
}

#[wasm_bindgen(js_name = getFilterRows)]
pub fn get_filter_rows() -> Result<JsValue, JsValue> {
    serialize(&filter_rows(), "Row serialization error")
}

#[wasm_bindgen(js_name = clickFilterRow)]
pub fn click_filter_row_js(index: usize) -> Result<JsValue, JsValue> {
    wasm_log!("clickFilterRow: {}", index);
    let rows = click_filter_row(index).map_err(to_js_error)?;
    serialize(&rows, "Row serialization error")
}

#[wasm_bindgen(js_name = setFilterRow)]
pub fn set_filter_row_js(index: usize, checked: bool) -> Result<JsValue, JsValue> {
    wasm_log!("setFilterRow: {} -> {}", index, checked);
    let rows = set_filter_row(index, checked).map_err(to_js_error)?;
    serialize(&rows, "Row serialization error")
}

#[wasm_bindgen(js_name = getFilterMask)]
pub fn get_filter_mask() -> Result<u32, JsValue> {
    filter_mask().map_err(to_js_error)
}

#[wasm_bindgen(js_name = selectRange)]
pub fn select_range_js(start_tick: u32, end_tick: u32) -> Result<Vec<u32>, JsValue> {
    wasm_log!("selectRange: {}..{}", start_tick, end_tick);
    select_range(start_tick, end_tick).map_err(to_js_error)
}

#[wasm_bindgen(js_name = clearSelection)]
pub fn clear_selection_js() -> Result<(), JsValue> {
    wasm_log!("clearSelection");
    clear_selection().map_err(to_js_error)
}

#[wasm_bindgen(js_name = getSelectedElements)]
pub fn get_selected_elements() -> Result<Vec<u32>, JsValue> {
    selected_elements().map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementKind, FilterMask, ScoreElement};

    // Each test runs on its own thread, so each gets a fresh panel

    #[test]
    fn test_calls_before_load_report_no_document() {
        assert_eq!(click_filter_row(1), Err(FilterApiError::NoDocument));
        assert_eq!(filter_mask(), Err(FilterApiError::NoDocument));
        assert!(unload_document().is_none());
    }

    #[test]
    fn test_row_index_is_checked() {
        load_document(Document::new());
        assert_eq!(
            set_filter_row(23, true),
            Err(FilterApiError::RowOutOfRange { index: 23, len: 23 })
        );
    }

    #[test]
    fn test_loaded_json_selection_is_recomputed() {
        let doc: Document = serde_json::from_str(
            r#"{
                "elements": [
                    {"id": 1, "tick": 0, "voice": 0, "kind": "note"},
                    {"id": 2, "tick": 0, "voice": 0, "kind": "lyrics"}
                ],
                "selection": {"start_tick": 0, "end_tick": 480},
                "filter": 1
            }"#,
        )
        .unwrap();
        load_document(doc);
        assert_eq!(selected_elements().unwrap(), vec![1]);
    }

    #[test]
    fn test_loaded_json_selected_list_is_ignored() {
        let doc: Document = serde_json::from_str(
            r#"{
                "elements": [{"id": 1, "tick": 0, "kind": "note"}],
                "selected": [1, 99],
                "filter": 0
            }"#,
        )
        .unwrap();
        load_document(doc);
        assert!(selected_elements().unwrap().is_empty());
    }

    #[test]
    fn test_select_and_clear_range() {
        load_document(Document::with_elements(vec![
            ScoreElement::new(1, 0, 0, ElementKind::Note),
            ScoreElement::new(2, 960, 0, ElementKind::Note),
        ]));
        assert_eq!(select_range(960, 0).unwrap(), vec![1]);

        clear_selection().unwrap();
        assert!(selected_elements().unwrap().is_empty());
        let doc = unload_document().unwrap();
        assert!(doc.selection.is_none());
        assert_eq!(doc.render_state.full_redraw_requests, 2);
    }

    #[test]
    fn test_load_click_and_read_back() {
        let mut doc = Document::with_elements(vec![
            ScoreElement::new(1, 0, 0, ElementKind::Note),
            ScoreElement::new(2, 0, 0, ElementKind::Lyrics),
        ]);
        doc.filter = FilterMask::empty();
        doc.filter.set(SelectionFilterType::FirstVoice, true);
        doc.select_range(0, 480);
        assert_eq!(doc.selected_ids(), &[1]);

        let rows = load_document(doc);
        assert_eq!(rows[0].state, CheckState::Partial);

        let rows = click_filter_row(8).unwrap();
        assert_eq!(rows[8].state, CheckState::Checked);
        assert_eq!(filter_mask().unwrap(), 0x81);
        assert_eq!(selected_elements().unwrap(), vec![1, 2]);

        let doc = unload_document().unwrap();
        assert_eq!(doc.filter.bits(), 0x81);
        assert!(filter_rows().iter().all(|row| row.state == CheckState::Unchecked));
    }
}
