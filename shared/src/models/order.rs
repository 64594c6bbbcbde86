//! Order line models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What an order line points at: a ledger item picked from the inventory
/// browser, or a catalog path resolved through the cascading dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderItemRef {
    Ledger { id: String },
    Catalog { path: Vec<String> },
}

/// One line item of a sales or purchase order form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: OrderItemRef,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub order_date: NaiveDate,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
