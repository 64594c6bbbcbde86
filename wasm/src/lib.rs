//! WebAssembly module for the distribution operations front end
//!
//! Provides client-side computation for the order-entry and inventory
//! screens:
//! - Available-quantity figures from ledger feed records
//! - Requested-quantity validation
//! - Cascading dropdown options and leaf resolution for both catalogs
//! - Dashboard percentage formulas
//!
//! All structured data crosses the boundary as JSON strings, matching how
//! the surrounding UI glue already holds backend responses.

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::availability::compute_availability;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Compute the available quantity of one ledger feed record
#[wasm_bindgen]
pub fn available_quantity(record_json: &str) -> Result<f64, JsValue> {
    let entry: StockLedgerEntry = serde_json::from_str(record_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid ledger record JSON: {}", e)))?;
    Ok(compute_availability(&entry) as f64)
}

/// Validate a requested quantity against the available quantity
///
/// Returns "ok", "below_minimum", or "exceeds_available" for the form to map
/// onto a user-facing message.
#[wasm_bindgen]
pub fn check_requested_quantity(requested: f64, available: f64) -> String {
    match validate_requested_quantity(requested.trunc() as i64, available.trunc() as i64) {
        Ok(()) => "ok".to_string(),
        Err(QuantityError::BelowMinimum) => "below_minimum".to_string(),
        Err(QuantityError::ExceedsAvailable) => "exceeds_available".to_string(),
    }
}

/// Dropdown options for the unit catalog at a partial selection, sorted for
/// display. Returns a JSON array of strings.
#[wasm_bindgen]
pub fn unit_options(catalog_json: &str, path_json: &str) -> Result<String, JsValue> {
    let tree = unit_catalog_from_feed(&parse_json(catalog_json, "unit catalog")?);
    let path = parse_path(path_json)?;
    to_json(&sort_for_display(
        tree.options_at(&path).into_iter().collect(),
    ))
}

/// Dropdown options for the material catalog at a partial selection, sorted
/// for display. Returns a JSON array of strings.
#[wasm_bindgen]
pub fn material_options(catalog_json: &str, path_json: &str) -> Result<String, JsValue> {
    let tree = material_catalog_from_feed(&parse_json(catalog_json, "material catalog")?);
    let path = parse_path(path_json)?;
    to_json(&sort_for_display(
        tree.options_at(&path).into_iter().collect(),
    ))
}

/// Resolve a complete unit selection to its indoor/outdoor model pair.
/// Returns the leaf as JSON, or "null" when the path is incomplete or
/// unmatched.
#[wasm_bindgen]
pub fn resolve_unit_models(catalog_json: &str, path_json: &str) -> Result<String, JsValue> {
    let tree = unit_catalog_from_feed(&parse_json(catalog_json, "unit catalog")?);
    let path = parse_path(path_json)?;
    to_json(&tree.resolve_leaf(&path))
}

/// Resolve a complete material selection to its unit of measure.
/// Returns the leaf as JSON, or "null" when the path is incomplete or
/// unmatched.
#[wasm_bindgen]
pub fn resolve_material(catalog_json: &str, path_json: &str) -> Result<String, JsValue> {
    let tree = material_catalog_from_feed(&parse_json(catalog_json, "material catalog")?);
    let path = parse_path(path_json)?;
    to_json(&tree.resolve_leaf(&path))
}

/// Period-over-period growth percentage for the sales dashboards
#[wasm_bindgen]
pub fn calculate_growth_percent(current: f64, previous: f64) -> f64 {
    let current = Decimal::try_from(current).unwrap_or(Decimal::ZERO);
    let previous = Decimal::try_from(previous).unwrap_or(Decimal::ZERO);
    decimal_to_f64(shared::analytics::growth_percent(current, previous))
}

/// Target achievement percentage for the sales dashboards
#[wasm_bindgen]
pub fn calculate_achievement_percent(actual: f64, target: f64) -> f64 {
    let actual = Decimal::try_from(actual).unwrap_or(Decimal::ZERO);
    let target = Decimal::try_from(target).unwrap_or(Decimal::ZERO);
    decimal_to_f64(shared::analytics::achievement_percent(actual, target))
}

/// Sort options for display: horsepower-style all-numeric sets sort
/// numerically, everything else alphabetically.
fn sort_for_display(mut options: Vec<String>) -> Vec<String> {
    let all_numeric =
        !options.is_empty() && options.iter().all(|o| o.trim().parse::<f64>().is_ok());
    if all_numeric {
        options.sort_by(|a, b| {
            let a = a.trim().parse::<f64>().unwrap_or(f64::MAX);
            let b = b.trim().parse::<f64>().unwrap_or(f64::MAX);
            a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
        });
    } else {
        options.sort();
    }
    options
}

fn parse_json(raw: &str, what: &str) -> Result<serde_json::Value, JsValue> {
    serde_json::from_str(raw)
        .map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn parse_path(raw: &str) -> Result<Vec<String>, JsValue> {
    serde_json::from_str(raw)
        .map_err(|e| JsValue::from_str(&format!("Invalid selection path JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_string().parse().unwrap_or(0.0)
}
