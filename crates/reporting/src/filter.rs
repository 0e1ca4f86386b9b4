use chrono::NaiveDate;
use core_types::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Selection criteria for a sales report. Every field is optional; the
/// default filter passes the whole ledger through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Inclusive start of the invoice-date range.
    pub from: Option<NaiveDate>,
    /// Inclusive end of the invoice-date range.
    pub to: Option<NaiveDate>,
    /// Keep only these countries. `None` keeps all.
    pub countries: Option<HashSet<String>>,
    /// Keep only these product descriptions. `None` keeps all.
    pub products: Option<HashSet<String>>,
}

impl ReportFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let date = transaction.invoice_date.date();
        if self.from.is_some_and(|from| date < from) {
            return false;
        }
        if self.to.is_some_and(|to| date > to) {
            return false;
        }
        if let Some(countries) = &self.countries {
            if !countries.contains(&transaction.country) {
                return false;
            }
        }
        if let Some(products) = &self.products {
            if !products.contains(&transaction.description) {
                return false;
            }
        }
        true
    }
}
