use core_types::{MonthlyRecord, Transaction};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Groups transactions by calendar month and sums quantity × unit price per
/// month, exactly, with no currency rounding.
///
/// Output has one row per month actually present in the input, ordered by
/// month. Months with no transactions are absent, never zero-filled; the
/// series keeps its gaps.
pub fn aggregate_monthly(transactions: &[Transaction]) -> Vec<MonthlyRecord> {
    let mut totals: BTreeMap<_, Decimal> = BTreeMap::new();
    for transaction in transactions {
        *totals.entry(transaction.month()).or_insert(Decimal::ZERO) += transaction.sales();
    }

    totals
        .into_iter()
        .map(|(month, total_sales)| MonthlyRecord { month, total_sales })
        .collect()
}

/// The base month ordinal: the minimum month ordinal observed in the
/// aggregate, defining the zero point of the `t` feature. `None` when there
/// is nothing to train on.
pub fn base_ordinal(records: &[MonthlyRecord]) -> Option<i64> {
    records.iter().map(|r| r.month.ordinal()).min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::MonthKey;
    use rust_decimal_macros::dec;

    fn transaction(date: (i32, u32, u32), quantity: i64, unit_price: Decimal) -> Transaction {
        Transaction {
            invoice_no: "536365".to_string(),
            stock_code: "85123A".to_string(),
            description: "T-LIGHT HOLDER".to_string(),
            quantity,
            unit_price,
            invoice_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            customer_id: Some("17850".to_string()),
            country: "United Kingdom".to_string(),
        }
    }

    #[test]
    fn one_row_per_distinct_month() {
        let transactions = vec![
            transaction((2010, 12, 1), 2, dec!(1.00)),
            transaction((2010, 12, 15), 1, dec!(4.00)),
            transaction((2011, 1, 3), 5, dec!(2.00)),
            transaction((2011, 3, 20), 1, dec!(9.99)),
        ];

        let records = aggregate_monthly(&transactions);
        assert_eq!(records.len(), 3);
        let months: Vec<_> = records.iter().map(|r| r.month).collect();
        assert_eq!(
            months,
            vec![
                MonthKey::new(2010, 12).unwrap(),
                MonthKey::new(2011, 1).unwrap(),
                MonthKey::new(2011, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn sums_are_exact() {
        // One transaction on 2011-03-05, quantity 3, unit price 2.50.
        let records = aggregate_monthly(&[transaction((2011, 3, 5), 3, dec!(2.50))]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].month, MonthKey::new(2011, 3).unwrap());
        assert_eq!(records[0].total_sales, dec!(7.50));
    }

    #[test]
    fn gaps_are_not_zero_filled() {
        // February 2011 has no transactions; it must not appear at all.
        let records = aggregate_monthly(&[
            transaction((2011, 1, 10), 1, dec!(1.00)),
            transaction((2011, 3, 10), 1, dec!(1.00)),
        ]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.month.month != 2));
    }

    #[test]
    fn empty_ledger_aggregates_to_nothing() {
        assert!(aggregate_monthly(&[]).is_empty());
        assert_eq!(base_ordinal(&[]), None);
    }

    #[test]
    fn base_ordinal_is_minimum_month() {
        let records = aggregate_monthly(&[
            transaction((2011, 6, 1), 1, dec!(1.00)),
            transaction((2010, 1, 1), 1, dec!(1.00)),
        ]);
        assert_eq!(base_ordinal(&records), Some(MonthKey::new(2010, 1).unwrap().ordinal()));
    }
}
