//! Explicit, component-scoped UI state with pure transition functions.
//! The host page owns localStorage and document.cookie; this module only
//! computes the next stored value so the read-modify-write stays a single
//! synchronous step on the UI thread.

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub const THEME_KEY: &str = "theme";
pub const COOKIE_CONSENT_NAME: &str = "cookie_consent";
const COOKIE_CONSENT_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than the stored `"dark"` value is treated as light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Storage key for the per-tool click counter.
pub fn analytics_key(path: &str) -> String {
    format!("analytics:{path}")
}

/// Increment for the click counter: parse the previous stored value
/// (missing or garbage counts as 0) and return the next value to store.
pub fn next_click_count(previous: Option<&str>) -> String {
    let count: u64 = previous
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0);
    (count + 1).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieConsent {
    Accepted,
    Declined,
}

impl CookieConsent {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }

    pub fn as_value(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// Full `document.cookie` assignment string: 365-day expiry, path `/`,
    /// SameSite=Lax.
    pub fn cookie_string(self) -> String {
        format!(
            "{COOKIE_CONSENT_NAME}={}; max-age={COOKIE_CONSENT_MAX_AGE_SECS}; path=/; SameSite=Lax",
            self.as_value()
        )
    }
}

/// Pure stopwatch state machine. Timestamps come from the caller
/// (`performance.now()` in the browser) so transitions stay testable.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Stopwatch {
    started_at: Option<f64>,
    accumulated: f64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(self, now: f64) -> Self {
        if self.started_at.is_some() {
            return self;
        }
        Self {
            started_at: Some(now),
            accumulated: self.accumulated,
        }
    }

    pub fn stop(self, now: f64) -> Self {
        match self.started_at {
            Some(start) => Self {
                started_at: None,
                accumulated: self.accumulated + (now - start).max(0.0),
            },
            None => self,
        }
    }

    pub fn reset(self) -> Self {
        Self {
            started_at: self.started_at,
            accumulated: 0.0,
        }
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        match self.started_at {
            Some(start) => self.accumulated + (now - start).max(0.0),
            None => self.accumulated,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

#[wasm_bindgen]
pub fn theme_after_toggle(stored: Option<String>) -> String {
    Theme::from_stored(stored.as_deref())
        .toggled()
        .as_stored()
        .to_string()
}

#[wasm_bindgen]
pub fn tool_click_key(path: &str) -> String {
    analytics_key(path)
}

#[wasm_bindgen]
pub fn tool_click_increment(previous: Option<String>) -> String {
    next_click_count(previous.as_deref())
}

#[wasm_bindgen]
pub fn cookie_consent_string(choice: &str) -> Result<String, JsValue> {
    CookieConsent::parse(choice)
        .map(CookieConsent::cookie_string)
        .ok_or_else(|| JsValue::from_str(&format!("unknown consent choice: {choice}")))
}

#[wasm_bindgen]
pub fn current_millis() -> f64 {
    js_sys::Date::now()
}
