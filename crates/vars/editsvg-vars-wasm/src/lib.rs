use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use editsvg_vars_core::{Config, Engine, Inputs, Outputs, SAMPLE_DOCUMENT};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Engine wrapper for the web host. The JS side wires the document surface
/// (editor change notifications feed `update`), applies `rendered` to the
/// preview container, rebuilds controls from `controls` and keeps requesting
/// animation frames while `animating` is true.
#[wasm_bindgen]
pub struct EditsvgVars {
    core: Engine,
    sink: Option<Function>,
}

#[wasm_bindgen]
impl EditsvgVars {
    /// Create a new engine instance. Pass a JSON config object or
    /// undefined/null for defaults. Example:
    ///   new EditsvgVars({ max_events_per_tick: 64 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<EditsvgVars, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(EditsvgVars {
            core: Engine::new(cfg),
            sink: None,
        })
    }

    /// Register a presentation sink called with the substituted document
    /// text every time a render is published: sink(text: string).
    #[wasm_bindgen(js_name = on_render)]
    pub fn on_render(&mut self, sink: Function) {
        self.sink = Some(sink);
    }

    /// Replace the document wholesale (a newly loaded file), discarding live
    /// state. Returns Outputs JSON.
    #[wasm_bindgen(js_name = load_document)]
    pub fn load_document(&mut self, text: &str) -> Result<JsValue, JsError> {
        let outputs = self.core.load_document(text).clone();
        self.publish(&outputs);
        swb::to_value(&outputs).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Advance one frame at wall-clock `now` (seconds) with inputs JSON
    /// matching `Inputs` (document_edit / sliders / triggers). Returns
    /// Outputs JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, now: f64, inputs: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs) {
            Inputs::default()
        } else {
            swb::from_value(inputs).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let outputs = self.core.update(now, inputs).clone();
        self.publish(&outputs);
        swb::to_value(&outputs).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Convenience for one slider drag.
    #[wasm_bindgen(js_name = set_slider)]
    pub fn set_slider(&mut self, name: &str, value: f64, now: f64) -> Result<JsValue, JsError> {
        let outputs = self.core.update(now, Inputs::slider(name, value)).clone();
        self.publish(&outputs);
        swb::to_value(&outputs).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Convenience for one trigger activation.
    #[wasm_bindgen]
    pub fn trigger(&mut self, name: &str, now: f64) -> Result<JsValue, JsError> {
        let outputs = self.core.update(now, Inputs::trigger(name)).clone();
        self.publish(&outputs);
        swb::to_value(&outputs).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// The core's metadata contribution for the persistence store.
    #[wasm_bindgen]
    pub fn metadata(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.metadata())
            .map_err(|e| JsError::new(&format!("metadata error: {e}")))
    }

    /// Last substituted document text.
    #[wasm_bindgen]
    pub fn rendered(&self) -> String {
        self.core.rendered().to_string()
    }

    fn publish(&self, outputs: &Outputs) {
        if let (Some(sink), Some(text)) = (&self.sink, &outputs.rendered) {
            // Sink errors are the host's concern; rendering must not fail.
            let _ = sink.call1(&JsValue::UNDEFINED, &JsValue::from_str(text));
        }
    }
}

/// Seed document for hosts with no stored document.
#[wasm_bindgen]
pub fn sample_document() -> String {
    SAMPLE_DOCUMENT.to_string()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
