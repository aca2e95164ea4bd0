#![cfg(target_arch = "wasm32")]

use serde_json::Value as JsonValue;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use toolshub_core::{
    analyze_text_stats, base64_decode, base64_encode, color_hex_to_rgb, color_rgb_to_hex,
    convert_text_case, convert_units, cookie_consent_string, diff_text_lines, diff_text_unified,
    format_json, generate_lorem_ipsum, generate_password, hash_digest, html_entities_encode,
    image_data_url, list_tools, markdown_to_html_text, minify_css, random_slug, research_keywords,
    resize_image, search_tools, theme_after_toggle, tool_click_increment, tool_click_key,
};

wasm_bindgen_test_configure!(run_in_browser);

fn js_to_json(value: JsValue) -> JsonValue {
    serde_wasm_bindgen::from_value(value).expect("JsValue -> JSON")
}

fn field<'a>(map: &'a JsonValue, key: &str) -> &'a str {
    map.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| panic!("missing string field {key}"))
}

fn number(map: &JsonValue, key: &str) -> u64 {
    map.get(key)
        .and_then(|v| v.as_u64())
        .unwrap_or_else(|| panic!("missing numeric field {key}"))
}

#[wasm_bindgen_test]
fn text_stats_counts_words_and_characters() {
    let stats = js_to_json(analyze_text_stats("hello world").expect("text stats"));
    assert_eq!(number(&stats, "characters"), 11);
    assert_eq!(number(&stats, "words"), 2);
    assert_eq!(number(&stats, "paragraphs"), 1);
    assert_eq!(number(&stats, "lines"), 1);
}

#[wasm_bindgen_test]
fn case_converter_covers_each_mode() {
    assert_eq!(
        convert_text_case("snake", "Hello World").expect("snake"),
        "hello_world"
    );
    assert_eq!(
        convert_text_case("camel", "hello world").expect("camel"),
        "helloWorld"
    );
    assert_eq!(
        convert_text_case("upper", "abc").expect("upper"),
        "ABC"
    );
    assert!(convert_text_case("mystery", "abc").is_err());
}

#[wasm_bindgen_test]
fn lorem_ipsum_produces_requested_paragraphs() {
    let text = generate_lorem_ipsum(3, 2, 4);
    assert_eq!(text.split("\n\n").count(), 3);
    assert!(text.contains('.'));
}

#[wasm_bindgen_test]
fn password_generator_respects_length_and_charsets() {
    let pw = generate_password(20, true, true, true, false);
    assert_eq!(pw.chars().count(), 20);
    assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
    assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
    assert!(pw.chars().any(|c| c.is_ascii_digit()));
    assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[wasm_bindgen_test]
fn unit_converter_handles_length_and_temperature() {
    let meters = convert_units("length", 1.0, "km", "m").expect("length conversion");
    assert!((meters - 1000.0).abs() < 1e-9);
    let f = convert_units("temperature", 0.0, "C", "F").expect("temperature conversion");
    assert!((f - 32.0).abs() < 1e-9);
    assert!(convert_units("volume", 1.0, "l", "ml").is_err());
}

#[wasm_bindgen_test]
fn json_formatter_reports_success_and_errors() {
    let ok = js_to_json(format_json("{\"a\":1}").expect("format json"));
    assert_eq!(ok.get("ok").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(field(&ok, "output"), "{\n  \"a\": 1\n}");

    let bad = js_to_json(format_json("{nope").expect("format json error path"));
    assert_eq!(bad.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert!(!field(&bad, "error").is_empty());
}

#[wasm_bindgen_test]
fn base64_round_trip_and_slug_length() {
    let encoded = base64_encode("rust");
    assert_eq!(encoded, "cnVzdA==");
    assert_eq!(base64_decode(&encoded).expect("decode"), "rust");
    assert!(base64_decode("!!!not base64!!!").is_err());
    assert_eq!(random_slug(0).len(), 6);
    assert_eq!(random_slug(10).len(), 10);
}

#[wasm_bindgen_test]
fn color_conversions_match_known_values() {
    let rgb = js_to_json(color_hex_to_rgb("#ff8000").expect("hex -> rgb"));
    assert_eq!(number(&rgb, "r"), 255);
    assert_eq!(number(&rgb, "g"), 128);
    assert_eq!(number(&rgb, "b"), 0);
    assert_eq!(color_rgb_to_hex(255, 128, 0), "#ff8000");
    assert_eq!(color_rgb_to_hex(300, -20, 0), "#ff0000");
    assert!(color_hex_to_rgb("zzz").is_err());
}

#[wasm_bindgen_test]
fn markdown_renders_headings_links_and_escapes_html() {
    let html = markdown_to_html_text("# Title\n\n[site](https://example.com)\n\n<script>");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("href=\"https://example.com\""));
    assert!(html.contains("rel=\"noopener\""));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[wasm_bindgen_test]
fn html_entity_encoder_escapes_markup() {
    assert_eq!(html_entities_encode("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
}

#[wasm_bindgen_test]
fn diff_marks_changed_lines() {
    let rows = js_to_json(diff_text_lines("a\nb", "a\nc").expect("diff"));
    let rows = rows.as_array().expect("diff array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("same").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(rows[1].get("same").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(field(&rows[1], "left"), "b");
    assert_eq!(field(&rows[1], "right"), "c");

    let unified = diff_text_unified("a\nb", "a\nc", "a.txt", "b.txt");
    assert!(unified.contains("--- a.txt"));
    assert!(unified.contains("-b"));
    assert!(unified.contains("+c"));
}

#[wasm_bindgen_test]
fn hash_digests_match_reference_vectors() {
    assert_eq!(hash_digest("MD5", ""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(
        hash_digest("SHA-256", "abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(hash_digest("SHA-512", "abc"), "");
}

#[wasm_bindgen_test]
fn image_resize_fits_within_bounding_box() {
    // Tiny in-memory PNG so the wasm bundle carries no fixtures.
    let mut png_bytes = Vec::new();
    let png = image::DynamicImage::new_rgba8(100, 50);
    png.write_to(
        &mut std::io::Cursor::new(&mut png_bytes),
        image::ImageFormat::Png,
    )
    .expect("encode png fixture");

    let result = js_to_json(resize_image(&png_bytes, 40, 40, "png").expect("resize"));
    assert_eq!(number(&result, "width"), 40);
    assert_eq!(number(&result, "height"), 20);
    assert!(field(&result, "data_url").starts_with("data:image/png;base64,"));

    let url = image_data_url(&png_bytes, "").expect("data url");
    assert!(url.starts_with("data:image/png;base64,"));
}

#[wasm_bindgen_test]
fn keyword_research_returns_metric_per_keyword() {
    let rows = js_to_json(research_keywords("rust wasm\nbrowser tools", "google", "US").expect("keywords"));
    let rows = rows.as_array().expect("metric array");
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert!(!field(row, "keyword").is_empty());
        assert!(field(row, "cpc").parse::<f64>().is_ok());
        assert!(number(row, "difficulty") <= 100);
    }
}

#[wasm_bindgen_test]
fn registry_search_filters_by_name_and_category() {
    let all = js_to_json(list_tools().expect("list tools"));
    let all = all.as_array().expect("tool array");
    assert_eq!(all.len(), 31);

    let hits = js_to_json(search_tools("password").expect("search"));
    let hits = hits.as_array().expect("hit array");
    assert!(hits.iter().any(|t| field(t, "id") == "password-generator"));

    let by_category = js_to_json(search_tools("image").expect("search category"));
    assert!(!by_category.as_array().expect("hits").is_empty());
}

#[wasm_bindgen_test]
fn state_helpers_cover_theme_clicks_and_consent() {
    assert_eq!(theme_after_toggle(None), "dark");
    assert_eq!(theme_after_toggle(Some("dark".into())), "light");
    assert_eq!(tool_click_key("tools/word-counter"), "analytics:tools/word-counter");
    assert_eq!(tool_click_increment(Some("41".into())), "42");
    assert_eq!(tool_click_increment(None), "1");
    assert_eq!(
        cookie_consent_string("accepted").expect("consent"),
        "cookie_consent=accepted; max-age=31536000; path=/; SameSite=Lax"
    );
    assert!(cookie_consent_string("maybe").is_err());
}

#[wasm_bindgen_test]
fn css_minifier_strips_comments() {
    let css = "/* c */ body { color : red ; }";
    assert_eq!(minify_css(css), "body{color:red}");
}
