//! WASM bindings for yarm-core.
//!
//! Exposes `toJson` and `toYaml` as `#[wasm_bindgen]` functions callable from
//! JavaScript/TypeScript. `null`/`undefined` or blank input yields `undefined`;
//! malformed input throws a JS error whose message starts with
//! `invalid YAML format:` or `invalid JSON format:`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p yarm-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/yarm-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/yarm_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Convert YAML text to pretty-printed JSON.
///
/// `ignoreXYarm` defaults to `true` when omitted.
#[wasm_bindgen(js_name = toJson)]
pub fn to_json(
    yaml: Option<String>,
    ignore_x_yarm: Option<bool>,
) -> std::result::Result<Option<String>, JsValue> {
    let ignore = ignore_x_yarm.unwrap_or(yarm_core::DEFAULT_IGNORE_X_YARM);
    yarm_core::to_json(yaml.as_deref(), ignore).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert JSON text to YAML.
#[wasm_bindgen(js_name = toYaml)]
pub fn to_yaml(json: Option<String>) -> std::result::Result<Option<String>, JsValue> {
    yarm_core::to_yaml(json.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))
}
