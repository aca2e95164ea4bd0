//! Text analysis and rewriting tools: word counter, case converters,
//! lorem ipsum, and the HTML entity codec shared by the encoder tool.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{random_below, to_js_value};

/// Counts derived from a single piece of text. Recomputed per call,
/// nothing is cached.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub paragraphs: usize,
    pub lines: usize,
}

fn regex_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+\b").unwrap())
}

fn regex_blank_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{2,}").unwrap())
}

/// Computes character/word/paragraph/line counts. Empty or malformed input
/// degrades to zero counts instead of failing.
pub fn text_stats(text: &str) -> TextStats {
    let characters = text.chars().count();
    let words = regex_word().find_iter(text).count();
    let blocks = regex_blank_block()
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .count();
    let paragraphs = if blocks > 0 {
        blocks
    } else if text.trim().is_empty() {
        0
    } else {
        1
    };
    let lines = text.split('\n').count();
    TextStats {
        characters,
        words,
        paragraphs,
        lines,
    }
}

fn regex_title_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([a-z])([a-z]*)").unwrap())
}

pub fn to_title_case(input: &str) -> String {
    let lower = input.to_lowercase();
    regex_title_word()
        .replace_all(&lower, |caps: &regex::Captures| {
            format!("{}{}", caps[1].to_uppercase(), &caps[2])
        })
        .into_owned()
}

pub fn to_camel_case(input: &str) -> String {
    let spaced = input.replace(['_', '-'], " ");
    let words: Vec<&str> = spaced.split_whitespace().collect();
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let mut out = first.to_lowercase();
    for word in rest {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

fn regex_case_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").unwrap())
}

fn regex_space_or_dash() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+|-").unwrap())
}

fn regex_space_or_underscore() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+|_").unwrap())
}

pub fn to_snake_case(input: &str) -> String {
    let boundary = regex_case_boundary().replace_all(input, "${1}_${2}");
    regex_space_or_dash()
        .replace_all(&boundary, "_")
        .to_lowercase()
}

pub fn to_kebab_case(input: &str) -> String {
    let boundary = regex_case_boundary().replace_all(input, "${1}-${2}");
    regex_space_or_underscore()
        .replace_all(&boundary, "-")
        .to_lowercase()
}

fn regex_sentence_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|[.!?]\s+)([a-z])").unwrap())
}

pub fn to_sentence_case(input: &str) -> String {
    let lower = input.to_lowercase();
    regex_sentence_start()
        .replace_all(&lower, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

const LOREM_WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
    "ut",
    "enim",
    "ad",
    "minim",
    "veniam",
    "quis",
    "nostrud",
    "exercitation",
    "ullamco",
    "laboris",
    "nisi",
    "ut",
    "aliquip",
    "ex",
    "ea",
    "commodo",
    "consequat",
];

fn lorem_sentence() -> String {
    let len = 6 + random_below(8);
    let mut words = Vec::with_capacity(len);
    for _ in 0..len {
        words.push(LOREM_WORDS[random_below(LOREM_WORDS.len())]);
    }
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get(0..1) {
        sentence.replace_range(0..1, &first.to_uppercase());
    }
    sentence.push('.');
    sentence
}

/// Assembles random placeholder paragraphs from the classical word list.
/// Paragraph count is clamped to at least one; the sentence range is
/// normalized so `max >= min`.
pub fn lorem_ipsum(paragraphs: usize, min_sentences: usize, max_sentences: usize) -> String {
    let paragraphs = paragraphs.max(1);
    let min = min_sentences.max(1);
    let max = max_sentences.max(min);
    let mut out = Vec::with_capacity(paragraphs);
    for _ in 0..paragraphs {
        let count = min + random_below(max - min + 1);
        let sentences: Vec<String> = (0..count).map(|_| lorem_sentence()).collect();
        out.push(sentences.join(" "));
    }
    out.join("\n\n")
}

pub fn html_encode(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn html_decode(input: &str) -> String {
    input
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

#[wasm_bindgen]
pub fn analyze_text_stats(text: &str) -> Result<JsValue, JsValue> {
    to_js_value(&text_stats(text))
}

#[wasm_bindgen]
pub fn convert_text_case(mode: &str, input: &str) -> Result<String, JsValue> {
    match mode {
        "upper" => Ok(input.to_uppercase()),
        "lower" => Ok(input.to_lowercase()),
        "title" => Ok(to_title_case(input)),
        "camel" => Ok(to_camel_case(input)),
        "snake" => Ok(to_snake_case(input)),
        "kebab" => Ok(to_kebab_case(input)),
        "sentence" => Ok(to_sentence_case(input)),
        other => Err(JsValue::from_str(&format!("unsupported case mode {other}"))),
    }
}

#[wasm_bindgen]
pub fn generate_lorem_ipsum(
    paragraphs: usize,
    min_sentences: usize,
    max_sentences: usize,
) -> String {
    lorem_ipsum(paragraphs, min_sentences, max_sentences)
}

#[wasm_bindgen]
pub fn html_entities_encode(input: &str) -> String {
    html_encode(input)
}

#[wasm_bindgen]
pub fn html_entities_decode(input: &str) -> String {
    html_decode(input)
}
