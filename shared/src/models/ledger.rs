//! Stock ledger models
//!
//! One `StockLedgerEntry` per material or product variant, deserialized from
//! the backend's ledger feed. Movement fields arrive as integers, numeric
//! strings, or blanks depending on how the row was keyed in upstream
//! spreadsheets, so all quantity fields parse leniently (see
//! [`crate::availability::lenient_parse`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::availability::lenient_parse;

/// One row of quantity-movement data from the ledger feed.
///
/// Entries are constructed fresh from each fetch and treated as an immutable
/// snapshot; derived figures are recomputed wholesale on the next reload
/// rather than mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLedgerEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Unit of measure, passed through untouched (e.g., "PCS", "ROLL")
    #[serde(default)]
    pub uom: String,
    #[serde(default, deserialize_with = "de_lenient_cost")]
    pub unit_cost: Decimal,
    #[serde(rename = "beg_inv", default, deserialize_with = "de_lenient_quantity")]
    pub beginning_inventory: i64,
    #[serde(rename = "receipt", default, deserialize_with = "de_lenient_quantity")]
    pub receipts: i64,
    #[serde(default, deserialize_with = "de_lenient_quantity")]
    pub issued: i64,
    #[serde(default, deserialize_with = "de_lenient_quantity")]
    pub returned: i64,
    #[serde(default, deserialize_with = "de_lenient_quantity")]
    pub scrap_in: i64,
    #[serde(default, deserialize_with = "de_lenient_quantity")]
    pub scrap_out: i64,
    #[serde(default, deserialize_with = "de_lenient_quantity")]
    pub reserved: i64,
}

/// Accepts an integer, a float, a numeric string, or null; any other JSON
/// value (boolean, array, object) or unreadable text coerces to zero.
fn de_lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => 0,
        Some(Raw::Int(n)) => n,
        Some(Raw::Float(f)) => f.trunc() as i64,
        Some(Raw::Text(s)) => lenient_parse(&s),
        Some(Raw::Other(v)) => {
            tracing::warn!(raw = %v, "non-numeric quantity coerced to zero");
            0
        }
    })
}

/// Same leniency for the unit cost, but preserving decimal places.
fn de_lenient_cost<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => Decimal::ZERO,
        Some(Raw::Int(n)) => Decimal::from(n),
        Some(Raw::Float(f)) => Decimal::try_from(f).unwrap_or(Decimal::ZERO),
        Some(Raw::Text(s)) => s.trim().parse::<Decimal>().unwrap_or_else(|_| {
            if !s.trim().is_empty() {
                tracing::warn!(raw = %s, "non-numeric unit_cost coerced to zero");
            }
            Decimal::ZERO
        }),
        Some(Raw::Other(v)) => {
            tracing::warn!(raw = %v, "non-numeric unit_cost coerced to zero");
            Decimal::ZERO
        }
    })
}
