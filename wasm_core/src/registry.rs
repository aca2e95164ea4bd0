//! Static tool registry that drives the landing-page cards and the
//! client-side search box.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::to_js_value;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub path: &'static str,
}

pub static TOOLS: &[ToolEntry] = &[
    ToolEntry {
        id: "word-counter",
        name: "Word Counter",
        description: "Count words, characters, and paragraphs.",
        category: "text",
        path: "tools/word-counter",
    },
    ToolEntry {
        id: "password-generator",
        name: "Password Generator",
        description: "Create secure passwords with custom options.",
        category: "text",
        path: "tools/password-generator",
    },
    ToolEntry {
        id: "qr-generator",
        name: "QR Code Generator",
        description: "Generate a QR code from text or URL.",
        category: "image",
        path: "tools/qr-generator",
    },
    ToolEntry {
        id: "image-resizer",
        name: "Image Resizer",
        description: "Resize images client-side and download.",
        category: "image",
        path: "tools/image-resizer",
    },
    ToolEntry {
        id: "unit-converter",
        name: "Unit Converter",
        description: "Convert length, weight, and temperature.",
        category: "utility",
        path: "tools/unit-converter",
    },
    ToolEntry {
        id: "text-case-converter",
        name: "Text Case Converter",
        description: "UPPER, lower, Title, CamelCase.",
        category: "text",
        path: "tools/text-case-converter",
    },
    ToolEntry {
        id: "lorem-ipsum",
        name: "Lorem Ipsum Generator",
        description: "Generate placeholder text.",
        category: "text",
        path: "tools/lorem-ipsum",
    },
    ToolEntry {
        id: "text-diff",
        name: "Text Difference Checker",
        description: "Compare two texts to see differences.",
        category: "text",
        path: "tools/text-diff",
    },
    ToolEntry {
        id: "url-shortener",
        name: "URL Shortener (Simulated)",
        description: "Simulate URL shortening.",
        category: "text",
        path: "tools/url-shortener",
    },
    ToolEntry {
        id: "md-to-html",
        name: "Markdown to HTML",
        description: "Convert Markdown to HTML.",
        category: "text",
        path: "tools/markdown-to-html",
    },
    ToolEntry {
        id: "color-picker",
        name: "Color Picker",
        description: "Pick colors in HEX, RGB, HSL.",
        category: "image",
        path: "tools/color-picker",
    },
    ToolEntry {
        id: "img-to-base64",
        name: "Image to Base64",
        description: "Convert images to Base64.",
        category: "image",
        path: "tools/image-to-base64",
    },
    ToolEntry {
        id: "favicon-generator",
        name: "Favicon Generator",
        description: "Create favicons from images.",
        category: "image",
        path: "tools/favicon-generator",
    },
    ToolEntry {
        id: "json-formatter",
        name: "JSON Formatter",
        description: "Format and validate JSON.",
        category: "developer",
        path: "tools/json-formatter",
    },
    ToolEntry {
        id: "html-encoder",
        name: "HTML Encoder/Decoder",
        description: "Encode/Decode HTML entities.",
        category: "developer",
        path: "tools/html-encoder",
    },
    ToolEntry {
        id: "css-minifier",
        name: "CSS Minifier",
        description: "Minify CSS code.",
        category: "developer",
        path: "tools/css-minifier",
    },
    ToolEntry {
        id: "js-minifier",
        name: "JavaScript Minifier",
        description: "Minify JS code.",
        category: "developer",
        path: "tools/js-minifier",
    },
    ToolEntry {
        id: "cps-tool",
        name: "Clicks Per Second (CPS)",
        description: "Test your clicking speed across durations.",
        category: "developer",
        path: "tools/cps-tool",
    },
    ToolEntry {
        id: "hash-generator",
        name: "Hash Generator",
        description: "MD5, SHA1, SHA256 (client-side).",
        category: "developer",
        path: "tools/hash-generator",
    },
    ToolEntry {
        id: "base64-tool",
        name: "Base64 Encoder/Decoder",
        description: "Encode/Decode Base64.",
        category: "developer",
        path: "tools/base64-tool",
    },
    ToolEntry {
        id: "seo-meta-tool",
        name: "SEO Meta Tool",
        description: "Generate and preview SEO meta tags.",
        category: "seo",
        path: "tools/seo-meta-tool",
    },
    ToolEntry {
        id: "keyword-research",
        name: "Keyword Research (Country-wise)",
        description: "Explore keyword ideas by country.",
        category: "seo",
        path: "tools/keyword-research",
    },
    ToolEntry {
        id: "backlink-checker",
        name: "Backlink Checker",
        description: "Check backlinks for a domain (placeholder).",
        category: "seo",
        path: "tools/backlink-checker",
    },
    ToolEntry {
        id: "serp-preview",
        name: "SERP Preview",
        description: "Preview how your page may appear in search results.",
        category: "seo",
        path: "tools/serp-preview",
    },
    ToolEntry {
        id: "sitemap-generator",
        name: "Sitemap Generator",
        description: "Generate an XML sitemap from URLs.",
        category: "seo",
        path: "tools/sitemap-generator",
    },
    ToolEntry {
        id: "robots-tester",
        name: "Robots.txt Generator & Tester",
        description: "Create and test robots.txt rules.",
        category: "seo",
        path: "tools/robots-tester",
    },
    ToolEntry {
        id: "percentage-calculator",
        name: "Percentage Calculator",
        description: "Compute percentages easily.",
        category: "utility",
        path: "tools/percentage-calculator",
    },
    ToolEntry {
        id: "age-calculator",
        name: "Age Calculator",
        description: "Calculate age from birthdate.",
        category: "utility",
        path: "tools/age-calculator",
    },
    ToolEntry {
        id: "random-number",
        name: "Random Number Generator",
        description: "Generate random numbers.",
        category: "utility",
        path: "tools/random-number",
    },
    ToolEntry {
        id: "timer-stopwatch",
        name: "Timer/Stopwatch",
        description: "Online timer and stopwatch.",
        category: "utility",
        path: "tools/timer-stopwatch",
    },
    ToolEntry {
        id: "invoice-generator",
        name: "Invoice Generator",
        description: "Create simple invoices.",
        category: "utility",
        path: "tools/invoice-generator",
    },
];

/// Case-insensitive substring match against names and categories; an empty
/// query returns the whole registry.
pub fn search(query: &str) -> Vec<&'static ToolEntry> {
    let q = query.trim().to_lowercase();
    TOOLS
        .iter()
        .filter(|tool| {
            q.is_empty()
                || tool.name.to_lowercase().contains(&q)
                || tool.category.to_lowercase().contains(&q)
        })
        .collect()
}

#[wasm_bindgen]
pub fn list_tools() -> Result<JsValue, JsValue> {
    to_js_value(&TOOLS)
}

#[wasm_bindgen]
pub fn search_tools(query: &str) -> Result<JsValue, JsValue> {
    to_js_value(&search(query))
}
