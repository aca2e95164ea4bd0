//! Base64 codec (UTF-8 safe) and the random slug generator used by the
//! simulated URL shortener.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wasm_bindgen::prelude::*;

use crate::random_below;

const SLUG_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Encodes arbitrary Unicode text as standard base64 over its UTF-8 bytes,
/// so multi-byte code points survive the round trip.
pub fn base64_encode_text(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Exact inverse of [`base64_encode_text`]. Invalid base64 or payloads that
/// are not valid UTF-8 produce an error message instead of mangled output.
pub fn base64_decode_text(input: &str) -> Result<String, String> {
    let bytes = STANDARD
        .decode(input.trim().as_bytes())
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|_| "decoded payload is not valid UTF-8".to_string())
}

/// Random alphanumeric slug for the simulated shortener. Zero length falls
/// back to the default of 6.
pub fn generate_slug(len: usize) -> String {
    let len = if len == 0 { 6 } else { len };
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(SLUG_CHARS[random_below(SLUG_CHARS.len())] as char);
    }
    out
}

#[wasm_bindgen]
pub fn base64_encode(input: &str) -> String {
    base64_encode_text(input)
}

#[wasm_bindgen]
pub fn base64_decode(input: &str) -> Result<String, JsValue> {
    base64_decode_text(input).map_err(|err| JsValue::from_str(&err))
}

#[wasm_bindgen]
pub fn random_slug(len: usize) -> String {
    generate_slug(len)
}
