#![cfg(target_arch = "wasm32")]
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use editsvg_vars_core::{Inputs, Outputs};
use editsvg_vars_wasm::{abi_version, sample_document, EditsvgVars};

#[wasm_bindgen_test]
fn abi_version_is_stable() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn load_and_render_sample_document() {
    let mut vars = EditsvgVars::new(JsValue::UNDEFINED).expect("default config");
    let out: Outputs = swb::from_value(vars.load_document(&sample_document()).unwrap()).unwrap();

    let rendered = out.rendered.expect("initial render");
    assert!(rendered.contains(r#"width="150""#));
    assert_eq!(out.controls.map(|c| c.len()), Some(3));
}

#[wasm_bindgen_test]
fn slider_update_round_trips_through_js() {
    let mut vars = EditsvgVars::new(JsValue::UNDEFINED).unwrap();
    vars.load_document(&sample_document()).unwrap();

    let inputs = swb::to_value(&Inputs::slider("w", 200.0)).unwrap();
    let out: Outputs = swb::from_value(vars.update(0.0, inputs).unwrap()).unwrap();
    assert!(out.rendered.unwrap().contains(r#"width="200""#));
    assert!(vars.rendered().contains(r#"width="200""#));
}

#[wasm_bindgen_test]
fn metadata_excludes_animated_fields() {
    let mut vars = EditsvgVars::new(JsValue::UNDEFINED).unwrap();
    vars.load_document(&sample_document()).unwrap();

    let meta = vars.metadata().unwrap();
    let json = js_sys::JSON::stringify(&meta).unwrap().as_string().unwrap();
    assert!(json.contains("savedBy"));
    assert!(!json.contains("current_value"));
}
