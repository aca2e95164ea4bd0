//! Small numeric helpers: percentage math, age calculation, random
//! integers, and invoice totals.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::{random_up_to, to_js_value};

/// `part` as a percentage of `whole`; NaN when `whole` is zero so the UI
/// can show a blank result instead of Infinity.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        f64::NAN
    } else {
        part / whole * 100.0
    }
}

pub fn x_percent_of_y(x: f64, y: f64) -> f64 {
    x / 100.0 * y
}

pub fn percent_change(old_value: f64, new_value: f64) -> f64 {
    if old_value == 0.0 {
        f64::NAN
    } else {
        (new_value - old_value) / old_value * 100.0
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Whole years/months/days between `dob` and `today`, borrowing days from
/// the previous month's length when needed. Returns `None` for an invalid
/// or unparseable date of birth.
pub fn calculate_age(dob: &str, today: NaiveDate) -> Option<AgeBreakdown> {
    let dob = NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d").ok()?;
    let mut years = today.year() - dob.year();
    let mut months = today.month() as i32 - dob.month() as i32;
    let mut days = today.day() as i32 - dob.day() as i32;
    if days < 0 {
        let first_of_month = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?;
        let last_of_prev = first_of_month.pred_opt()?;
        days += last_of_prev.day() as i32;
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }
    Some(AgeBreakdown { years, months, days })
}

/// Inclusive random integer. A reversed range collapses to `min`. The span
/// is computed in `u64` so the full `i64` range does not overflow.
pub fn random_int(min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    let span = max.wrapping_sub(min) as u64;
    min.wrapping_add(random_up_to(span) as i64)
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct InvoiceItem {
    pub qty: f64,
    pub price: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Sums `qty * price` per line, treating non-finite numbers as 0, and
/// applies a tax rate clamped at >= 0 percent.
pub fn invoice_totals(items: &[InvoiceItem], tax_rate: f64) -> InvoiceTotals {
    let subtotal: f64 = items
        .iter()
        .map(|item| {
            let qty = if item.qty.is_finite() { item.qty } else { 0.0 };
            let price = if item.price.is_finite() { item.price } else { 0.0 };
            qty * price
        })
        .sum();
    let rate = if tax_rate.is_finite() { tax_rate.max(0.0) } else { 0.0 };
    let tax = subtotal * rate / 100.0;
    InvoiceTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[wasm_bindgen]
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    percent_of(part, whole)
}

#[wasm_bindgen]
pub fn percentage_value(x: f64, y: f64) -> f64 {
    x_percent_of_y(x, y)
}

#[wasm_bindgen]
pub fn percentage_change(old_value: f64, new_value: f64) -> f64 {
    percent_change(old_value, new_value)
}

/// `today_millis` is the host's `Date.now()`; core date math stays pure so
/// it can be tested with fixed dates.
#[wasm_bindgen]
pub fn age_from_birthdate(dob: &str, today_millis: f64) -> Result<JsValue, JsValue> {
    let days_since_epoch = (today_millis / 86_400_000.0).floor() as i64;
    let today = NaiveDate::from_ymd_opt(1970, 1, 1)
        .and_then(|epoch| epoch.checked_add_days(chrono::Days::new(days_since_epoch.max(0) as u64)))
        .ok_or_else(|| JsValue::from_str("invalid current date"))?;
    let breakdown =
        calculate_age(dob, today).ok_or_else(|| JsValue::from_str("invalid date of birth"))?;
    to_js_value(&breakdown)
}

#[wasm_bindgen]
pub fn random_integer(min: i64, max: i64) -> i64 {
    random_int(min, max)
}

#[wasm_bindgen]
pub fn compute_invoice_totals(items: JsValue, tax_rate: f64) -> Result<JsValue, JsValue> {
    let items: Vec<InvoiceItem> =
        serde_wasm_bindgen::from_value(items).map_err(|err| JsValue::from_str(&err.to_string()))?;
    to_js_value(&invoice_totals(&items, tax_rate))
}
