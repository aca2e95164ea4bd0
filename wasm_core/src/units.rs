//! Unit and temperature conversions. Linear units go through a canonical
//! base unit (meters, kilograms) via fixed factor tables; temperatures use
//! the standard affine formulas through Celsius.

use wasm_bindgen::prelude::*;

/// Multiplicative ratio from a length unit to meters. Unknown keys fall
/// back to 1 so the conversion degrades to a no-op instead of failing.
fn length_factor(unit: &str) -> f64 {
    match unit {
        "m" => 1.0,
        "km" => 1000.0,
        "cm" => 0.01,
        "mm" => 0.001,
        "mi" => 1609.344,
        "yd" => 0.9144,
        "ft" => 0.3048,
        "in" => 0.0254,
        _ => 1.0,
    }
}

/// Multiplicative ratio from a weight unit to kilograms; same fallback rule.
fn weight_factor(unit: &str) -> f64 {
    match unit {
        "kg" => 1.0,
        "g" => 0.001,
        "lb" => 0.45359237,
        "oz" => 0.028349523125,
        _ => 1.0,
    }
}

pub fn convert_length(value: f64, from: &str, to: &str) -> f64 {
    value * length_factor(from) / length_factor(to)
}

pub fn convert_weight(value: f64, from: &str, to: &str) -> f64 {
    value * weight_factor(from) / weight_factor(to)
}

/// Converts between `C`, `F`, and `K`. An unrecognized `from` unit is
/// treated as already Celsius; an unrecognized `to` unit returns Celsius.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    let celsius = match from {
        "C" => value,
        "F" => (value - 32.0) * 5.0 / 9.0,
        "K" => value - 273.15,
        _ => value,
    };
    match to {
        "C" => celsius,
        "F" => celsius * 9.0 / 5.0 + 32.0,
        "K" => celsius + 273.15,
        _ => celsius,
    }
}

#[wasm_bindgen]
pub fn convert_units(kind: &str, value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
    match kind {
        "length" => Ok(convert_length(value, from, to)),
        "weight" => Ok(convert_weight(value, from, to)),
        "temperature" => Ok(convert_temperature(value, from, to)),
        other => Err(JsValue::from_str(&format!("unsupported unit kind {other}"))),
    }
}
