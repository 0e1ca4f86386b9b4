use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A standardized summary of sales activity over a filtered slice of the
/// ledger.
///
/// This struct is the final output of the `ReportEngine` and the data
/// transfer object between the computation layer and whatever renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    // I. Headline metrics
    pub total_sales: Decimal,
    /// Distinct invoice numbers.
    pub total_orders: usize,
    /// Distinct (known) customer ids; guest checkouts don't count.
    pub unique_customers: usize,
    /// Total sales divided by order count. `None` when there are no orders.
    pub average_order_value: Option<Decimal>,
    /// Invoice lines that survived the filter.
    pub line_items: usize,

    // II. Breakdowns
    /// Per-day sales, ordered by date.
    pub sales_by_day: Vec<(NaiveDate, Decimal)>,
    /// Per-country sales, ordered by sales descending.
    pub sales_by_country: Vec<(String, Decimal)>,
    /// Best-selling products by sales, ordered descending, truncated to the
    /// requested top-N.
    pub top_products: Vec<(String, Decimal)>,
}

impl SalesReport {
    /// Creates a new, zeroed-out SalesReport.
    /// This is useful as a default or starting point before calculations.
    pub fn new() -> Self {
        Self {
            total_sales: Decimal::ZERO,
            total_orders: 0,
            unique_customers: 0,
            average_order_value: None,
            line_items: 0,
            sales_by_day: Vec::new(),
            sales_by_country: Vec::new(),
            top_products: Vec::new(),
        }
    }
}

impl Default for SalesReport {
    fn default() -> Self {
        Self::new()
    }
}
