//! Keyword research demo. Every metric here is fabricated from random
//! numbers inside per-platform display ranges; nothing is derived from
//! real search data.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{random_unit, to_js_value};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct KeywordMetric {
    pub keyword: String,
    pub volume: u64,
    pub difficulty: u32,
    pub cpc: String,
    pub competition: f64,
    pub ctr: u32,
    pub traffic: u64,
}

struct PlatformRanges {
    ctr: (f64, f64),
    cpc: (f64, f64),
    volume: (f64, f64),
    difficulty: (f64, f64),
    traffic: (f64, f64),
}

/// Display ranges per platform, taken from the demo mockup. Unknown
/// platforms fall back to the google ranges.
fn ranges_for(platform: &str) -> PlatformRanges {
    match platform {
        "youtube" => PlatformRanges {
            ctr: (2.0, 40.0),
            cpc: (0.1, 5.0),
            volume: (50.0, 50_000.0),
            difficulty: (1.0, 90.0),
            traffic: (50.0, 50_000.0),
        },
        "amazon" => PlatformRanges {
            ctr: (3.0, 50.0),
            cpc: (0.5, 15.0),
            volume: (100.0, 20_000.0),
            difficulty: (1.0, 100.0),
            traffic: (100.0, 20_000.0),
        },
        "tiktok" => PlatformRanges {
            ctr: (15.0, 80.0),
            cpc: (0.1, 5.0),
            volume: (100.0, 500_000.0),
            difficulty: (1.0, 85.0),
            traffic: (100.0, 500_000.0),
        },
        _ => PlatformRanges {
            ctr: (1.0, 30.0),
            cpc: (0.5, 10.0),
            volume: (100.0, 10_000.0),
            difficulty: (1.0, 100.0),
            traffic: (100.0, 10_000.0),
        },
    }
}

fn sample(range: (f64, f64)) -> f64 {
    range.0 + random_unit() * (range.1 - range.0)
}

/// Fabricates one metric row. Non-GLOBAL regions get a random scale factor
/// in `[0.75, 1.25)` applied to volume and traffic; everything stays
/// clamped inside the platform's display range.
pub fn fabricate_metric(keyword: &str, platform: &str, region: &str) -> KeywordMetric {
    let ranges = ranges_for(platform);
    let region_factor = if region == "GLOBAL" {
        1.0
    } else {
        random_unit() * 0.5 + 0.75
    };
    let volume = (sample(ranges.volume) * region_factor)
        .clamp(ranges.volume.0, ranges.volume.1)
        .floor() as u64;
    let traffic = (sample(ranges.traffic) * region_factor)
        .clamp(ranges.traffic.0, ranges.traffic.1)
        .floor() as u64;
    KeywordMetric {
        keyword: keyword.to_string(),
        volume,
        difficulty: sample(ranges.difficulty).floor() as u32,
        cpc: format!("{:.2}", sample(ranges.cpc)),
        competition: (random_unit() * 100.0).round() / 100.0,
        ctr: sample(ranges.ctr).floor() as u32,
        traffic,
    }
}

/// Fabricates metrics for a batch of keywords; blank entries are skipped.
pub fn fabricate_metrics(keywords: &[&str], platform: &str, region: &str) -> Vec<KeywordMetric> {
    keywords
        .iter()
        .map(|kw| kw.trim())
        .filter(|kw| !kw.is_empty())
        .map(|kw| fabricate_metric(kw, platform, region))
        .collect()
}

/// `keywords` is one per line or comma-separated, matching the demo UI.
#[wasm_bindgen]
pub fn research_keywords(keywords: &str, platform: &str, region: &str) -> Result<JsValue, JsValue> {
    let list: Vec<&str> = keywords
        .split(|c| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .collect();
    to_js_value(&fabricate_metrics(&list, platform, region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_stay_inside_platform_ranges() {
        for platform in ["google", "youtube", "amazon", "tiktok"] {
            let ranges = ranges_for(platform);
            for _ in 0..25 {
                let metric = fabricate_metric("rust wasm", platform, "US");
                assert!(metric.volume >= ranges.volume.0 as u64);
                assert!(metric.volume <= ranges.volume.1 as u64);
                assert!(f64::from(metric.difficulty) >= ranges.difficulty.0 - 1.0);
                assert!(f64::from(metric.difficulty) <= ranges.difficulty.1);
                assert!((0.0..=1.0).contains(&metric.competition));
                let cpc: f64 = metric.cpc.parse().expect("cpc is numeric");
                assert!(cpc >= ranges.cpc.0 - 0.01 && cpc <= ranges.cpc.1 + 0.01);
            }
        }
    }

    #[test]
    fn unknown_platform_falls_back_to_google_ranges() {
        let metric = fabricate_metric("x", "altavista", "GLOBAL");
        assert!(metric.volume <= 10_000);
        assert!(metric.ctr <= 30);
    }

    #[test]
    fn blank_keywords_are_skipped() {
        let metrics = fabricate_metrics(&["a", " ", "", "b"], "google", "GLOBAL");
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].keyword, "a");
        assert_eq!(metrics[1].keyword, "b");
    }
}
