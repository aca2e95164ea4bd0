//! Wasm core for the ToolsHub static site. Each module is one independent
//! client-side tool; the `#[wasm_bindgen]` wrappers stay thin and map
//! internal `Result<_, String>` values to `JsValue` errors so the UI never
//! has to deal with panics.

use console_error_panic_hook::set_once as set_panic_hook;
use wasm_bindgen::prelude::*;

pub mod color;
pub mod diff;
pub mod encode;
pub mod format;
pub mod hash;
pub mod images;
pub mod keywords;
pub mod markdown;
pub mod minify;
pub mod numeric;
pub mod password;
pub mod registry;
pub mod state;
pub mod text;
pub mod units;

pub use color::{color_hex_to_rgb, color_hsl_to_rgb, color_rgb_to_hex, color_rgb_to_hsl};
pub use diff::{diff_text_lines, diff_text_unified};
pub use encode::{base64_decode, base64_encode, random_slug};
pub use format::format_json;
pub use hash::hash_digest;
pub use images::{image_data_url, resize_image};
pub use keywords::research_keywords;
pub use markdown::markdown_to_html_text;
pub use minify::{minify_css, minify_js};
pub use numeric::{
    age_from_birthdate, compute_invoice_totals, percentage_change, percentage_of,
    percentage_value, random_integer,
};
pub use password::generate_password;
pub use registry::{list_tools, search_tools};
pub use state::{
    cookie_consent_string, current_millis, theme_after_toggle, tool_click_increment,
    tool_click_key,
};
pub use text::{
    analyze_text_stats, convert_text_case, generate_lorem_ipsum, html_entities_decode,
    html_entities_encode,
};
pub use units::convert_units;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

pub(crate) fn fill_random(buf: &mut [u8]) {
    getrandom::fill(buf).expect("randomness available");
}

/// Uniform-ish index in `0..bound`. The modulo bias is irrelevant for the
/// UI-facing generators built on top of this.
pub(crate) fn random_below(bound: usize) -> usize {
    if bound <= 1 {
        return 0;
    }
    let mut bytes = [0u8; 8];
    fill_random(&mut bytes);
    (u64::from_ne_bytes(bytes) % bound as u64) as usize
}

/// Uniform-ish value in `0..=span`, for ranges wider than `usize`.
pub(crate) fn random_up_to(span: u64) -> u64 {
    let mut bytes = [0u8; 8];
    fill_random(&mut bytes);
    let value = u64::from_ne_bytes(bytes);
    match span.checked_add(1) {
        Some(bound) => value % bound,
        None => value,
    }
}

/// Random float in `[0, 1)` built from 53 random bits.
pub(crate) fn random_unit() -> f64 {
    let mut bytes = [0u8; 8];
    fill_random(&mut bytes);
    (u64::from_ne_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64
}

pub(crate) fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
