//! JSON formatter/validator. Parse failures are returned as data, never
//! raised, so the UI can render the message next to the input.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::to_js_value;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct JsonFormatResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Strict parse followed by a 2-space pretty-print. The parser's error
/// message is captured in `error` on failure.
pub fn json_format(input: &str) -> JsonFormatResult {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => {
            let output = serde_json::to_string_pretty(&value).unwrap_or_default();
            JsonFormatResult {
                ok: true,
                output: Some(output),
                error: None,
            }
        }
        Err(err) => JsonFormatResult {
            ok: false,
            output: None,
            error: Some(err.to_string()),
        },
    }
}

#[wasm_bindgen]
pub fn format_json(input: &str) -> Result<JsValue, JsValue> {
    to_js_value(&json_format(input))
}
