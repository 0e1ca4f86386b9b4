use crate::error::ReportError;
use crate::filter::ReportFilter;
use crate::report::SalesReport;
use core_types::Transaction;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

/// A stateless calculator for deriving sales metrics from the raw ledger.
#[derive(Debug, Default)]
pub struct ReportEngine {}

impl ReportEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating a sales report.
    ///
    /// # Arguments
    ///
    /// * `transactions` - The raw ledger.
    /// * `filter` - Date/country/product selection to apply first.
    /// * `top_products` - How many best-selling products to keep.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `SalesReport` or a `ReportError`.
    pub fn calculate(
        &self,
        transactions: &[Transaction],
        filter: &ReportFilter,
        top_products: usize,
    ) -> Result<SalesReport, ReportError> {
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            if from > to {
                return Err(ReportError::InvalidFilter(format!(
                    "date range starts after it ends ({from} > {to})"
                )));
            }
        }

        let mut report = SalesReport::new();

        let mut orders = HashSet::new();
        let mut customers = HashSet::new();
        let mut by_day = BTreeMap::new();
        let mut by_country: BTreeMap<&str, Decimal> = BTreeMap::new();
        let mut by_product: BTreeMap<&str, Decimal> = BTreeMap::new();

        for transaction in transactions.iter().filter(|t| filter.matches(t)) {
            let sales = transaction.sales();
            report.total_sales += sales;
            report.line_items += 1;

            orders.insert(transaction.invoice_no.as_str());
            if let Some(customer) = &transaction.customer_id {
                customers.insert(customer.as_str());
            }

            *by_day
                .entry(transaction.invoice_date.date())
                .or_insert(Decimal::ZERO) += sales;
            *by_country
                .entry(transaction.country.as_str())
                .or_insert(Decimal::ZERO) += sales;
            *by_product
                .entry(transaction.description.as_str())
                .or_insert(Decimal::ZERO) += sales;
        }

        report.total_orders = orders.len();
        report.unique_customers = customers.len();
        if report.total_orders > 0 {
            report.average_order_value =
                Some(report.total_sales / Decimal::from(report.total_orders));
        }

        report.sales_by_day = by_day.into_iter().collect();

        let mut countries: Vec<(String, Decimal)> = by_country
            .into_iter()
            .map(|(country, sales)| (country.to_string(), sales))
            .collect();
        countries.sort_by(|a, b| b.1.cmp(&a.1));
        report.sales_by_country = countries;

        let mut products: Vec<(String, Decimal)> = by_product
            .into_iter()
            .map(|(product, sales)| (product.to_string(), sales))
            .collect();
        products.sort_by(|a, b| b.1.cmp(&a.1));
        products.truncate(top_products);
        report.top_products = products;

        Ok(report)
    }
}
