//! WASM build test
//!
//! Exercises the JavaScript-facing exports in a browser.

#![cfg(target_arch = "wasm32")]

use selection_filter_wasm::api::filter::*;
use selection_filter_wasm::api::helpers::serialize;
use selection_filter_wasm::models::{Document, FilterMask};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// A document with no elements and an empty filter
fn empty_document() -> JsValue {
    let mut doc = Document::new();
    doc.filter = FilterMask::empty();
    serialize(&doc, "test document").unwrap()
}

#[wasm_bindgen_test]
fn test_load_and_click() {
    load_document_js(empty_document()).unwrap();
    assert_eq!(get_filter_mask().unwrap(), 0);

    click_filter_row_js(8).unwrap();
    assert_eq!(get_filter_mask().unwrap(), 0x80);

    click_filter_row_js(0).unwrap();
    assert_eq!(get_filter_mask().unwrap(), (1 << 22) - 1);
}

#[wasm_bindgen_test]
fn test_out_of_range_row_is_rejected() {
    load_document_js(empty_document()).unwrap();
    assert!(set_filter_row_js(99, true).is_err());
}
