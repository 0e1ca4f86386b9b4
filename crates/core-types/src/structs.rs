use crate::month::MonthKey;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single invoice line from the raw transaction ledger.
///
/// Immutable once loaded; every downstream computation (monthly aggregation,
/// report filtering) consumes these records read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub invoice_no: String,
    pub stock_code: String,
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub invoice_date: NaiveDateTime,
    /// Absent for guest checkouts, which the source ledger leaves blank.
    pub customer_id: Option<String>,
    pub country: String,
}

impl Transaction {
    /// The monetary value of this line: quantity times unit price, exact.
    pub fn sales(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.invoice_date.date())
    }
}

/// One row of the monthly aggregate: a calendar month and its total sales.
///
/// The model features derived from it (`t`, `sin_12`, `cos_12`) are computed
/// by the feature builder once a base month ordinal is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: MonthKey,
    pub total_sales: Decimal,
}
