//! Markdown to HTML for a restricted subset: headings, bold, italic,
//! inline code, links, and flat unordered lists. Sequential regex
//! substitution over entity-escaped text, deliberately not a compliant
//! Markdown engine.

use std::sync::OnceLock;

use regex::Regex;
use wasm_bindgen::prelude::*;

fn regex_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.*)$").unwrap())
}

fn regex_bold() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

fn regex_italic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.+?)\*").unwrap())
}

fn regex_inline_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+?)`").unwrap())
}

fn regex_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(.+?)\]\((https?:[^\s)]+)\)").unwrap())
}

fn regex_list_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^(?:-[ \t]+.*(?:\n|$))+").unwrap())
}

fn regex_list_item_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-[ \t]+").unwrap())
}

fn regex_paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{2,}").unwrap())
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn starts_block_element(block: &str) -> bool {
    block.starts_with("<h")
        || block.starts_with("<ul")
        || block.starts_with("<p")
        || block.starts_with("<pre")
        || block.starts_with("<code")
}

/// Converts the supported Markdown subset to HTML. Entities are escaped
/// first, then headings, inline spans, lists, and finally paragraph
/// wrapping with `<br>` for intra-block newlines.
pub fn markdown_to_html(input: &str) -> String {
    let mut html = html_escape(&input.replace("\r\n", "\n"));
    html = regex_heading()
        .replace_all(&html, |caps: &regex::Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned();
    html = regex_bold()
        .replace_all(&html, "<strong>$1</strong>")
        .into_owned();
    html = regex_italic().replace_all(&html, "<em>$1</em>").into_owned();
    html = regex_inline_code()
        .replace_all(&html, "<code>$1</code>")
        .into_owned();
    html = regex_link()
        .replace_all(&html, "<a href=\"$2\" target=\"_blank\" rel=\"noopener\">$1</a>")
        .into_owned();
    html = regex_list_block()
        .replace_all(&html, |caps: &regex::Captures| {
            let items: Vec<String> = caps[0]
                .trim_end()
                .lines()
                .map(|line| {
                    let item = regex_list_item_prefix().replace(line, "");
                    format!("<li>{item}</li>")
                })
                .collect();
            format!("<ul>{}</ul>\n", items.join(""))
        })
        .into_owned();
    let blocks: Vec<String> = regex_paragraph_break()
        .split(&html)
        .map(|block| {
            let block = block.trim_end_matches('\n');
            if block.is_empty() || starts_block_element(block) {
                block.to_string()
            } else {
                format!("<p>{}</p>", block.replace('\n', "<br>"))
            }
        })
        .collect();
    blocks.join("\n")
}

#[wasm_bindgen]
pub fn markdown_to_html_text(input: &str) -> String {
    markdown_to_html(input)
}
