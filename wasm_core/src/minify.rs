//! Very basic CSS/JS minifiers. Regex substitution only, no parsing, so
//! these are fine for the demo tool but not safe for arbitrary production
//! bundles (string literals containing comment markers will break).

use std::sync::OnceLock;

use regex::Regex;
use wasm_bindgen::prelude::*;

fn regex_block_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap())
}

fn regex_line_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*//.*$").unwrap())
}

fn regex_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn regex_css_around_symbols() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*([{}:;,>])\s*").unwrap())
}

fn regex_js_around_symbols() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*([{}();,:+\-/*<>?=&|])\s*").unwrap())
}

/// Strips comments, collapses whitespace, trims around punctuation, and
/// drops redundant `;}` pairs.
pub fn css_minify(input: &str) -> String {
    let mut out = regex_block_comment().replace_all(input, "").into_owned();
    out = regex_whitespace().replace_all(&out, " ").into_owned();
    out = regex_css_around_symbols()
        .replace_all(&out, "$1")
        .into_owned();
    out = out.replace(";}", "}");
    out.trim().to_string()
}

/// Same regex approach for JS: line and block comments removed, then
/// whitespace collapsed around punctuation.
pub fn js_minify(input: &str) -> String {
    let mut out = regex_line_comment().replace_all(input, "").into_owned();
    out = regex_block_comment().replace_all(&out, "").into_owned();
    out = regex_whitespace().replace_all(&out, " ").into_owned();
    out = regex_js_around_symbols()
        .replace_all(&out, "$1")
        .into_owned();
    out.trim().to_string()
}

#[wasm_bindgen]
pub fn minify_css(input: &str) -> String {
    css_minify(input)
}

#[wasm_bindgen]
pub fn minify_js(input: &str) -> String {
    js_minify(input)
}
