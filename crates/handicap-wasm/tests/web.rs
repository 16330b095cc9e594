//! Browser tests for the JavaScript-facing error paths.
//!
//! Run with: `wasm-pack test --headless --firefox crates/handicap-wasm`

#![cfg(target_arch = "wasm32")]

use handicap_wasm::{
    calculate_handicap, courses, handicap_from_input, stroke_difference,
    stroke_difference_from_input,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn rejects_zero_holes() {
    assert!(calculate_handicap(130.0, Some(0), 140.0).is_err());
}

#[wasm_bindgen_test]
fn rejects_out_of_range_percentage() {
    assert!(stroke_difference(130.0, Some(18), 134.0, 120.0, 150).is_err());
}

#[wasm_bindgen_test]
fn rejects_malformed_input() {
    assert!(handicap_from_input("130", "9", "").is_err());
    assert!(handicap_from_input("abc", "9", "150").is_err());
    assert!(stroke_difference_from_input("130", "0", "150", "120", "80").is_err());
}

#[wasm_bindgen_test]
fn courses_serialize() {
    let value = courses().ok().unwrap();
    assert!(value.is_object());
}
