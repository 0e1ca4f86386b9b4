//! End-to-end pipeline test: a ledger CSV on disk, through aggregation,
//! training, bundle persistence, and prediction — plus the reporting path
//! over the same ledger.

use core_types::MonthKey;
use forecast_features::{aggregate_monthly, base_ordinal, feature_row};
use forecaster::{predict, train, ModelBundle, TrainerParams};
use reporting::{ReportEngine, ReportFilter};
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::TempDir;

/// Writes a two-year ledger (Jan 2010 - Dec 2011), one invoice per month,
/// with a gently rising sales total and a March 2011 line matching the
/// worked example from the design notes (qty 3 at 2.50).
fn write_ledger(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("ledger.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "InvoiceNo,StockCode,Description,Quantity,UnitPrice,InvoiceDate,CustomerID,Country"
    )
    .unwrap();

    let mut invoice = 536365;
    for year in [2010, 2011] {
        for month in 1..=12 {
            if year == 2011 && month == 3 {
                writeln!(
                    file,
                    "{invoice},85123A,T-LIGHT HOLDER,3,2.50,{year}-{month:02}-05 10:00:00,17850,United Kingdom"
                )
                .unwrap();
            } else {
                let quantity = 10 + (year - 2010) * 12 + month;
                writeln!(
                    file,
                    "{invoice},71053,WHITE METAL LANTERN,{quantity},4.00,{year}-{month:02}-15 09:30:00,12583,France"
                )
                .unwrap();
            }
            invoice += 1;
        }
    }
    path
}

#[test]
fn ledger_to_prediction_round_trip() {
    let dir = TempDir::new().unwrap();
    let ledger_path = write_ledger(&dir);
    let model_path = dir.path().join("model_sales.bundle");

    let transactions = ledger::load_transactions(&ledger_path).unwrap();
    assert_eq!(transactions.len(), 24);

    let records = aggregate_monthly(&transactions);
    assert_eq!(records.len(), 24);

    // The March 2011 worked example survives ingestion exactly.
    let march = records
        .iter()
        .find(|r| r.month == MonthKey::new(2011, 3).unwrap())
        .unwrap();
    assert_eq!(march.total_sales, dec!(7.50));

    // Base ordinal is Jan 2010, so Jan 2011 encodes t = 12.
    let base = base_ordinal(&records).unwrap();
    assert_eq!(base, MonthKey::new(2010, 1).unwrap().ordinal());
    assert_eq!(feature_row(MonthKey::new(2011, 1).unwrap(), base)[0], 12.0);

    let bundle = train(&records, &TrainerParams::default()).unwrap();
    bundle.save(&model_path).unwrap();

    let reloaded = ModelBundle::load(&model_path).unwrap();
    assert_eq!(reloaded.base_month_ordinal, base);

    let forecast = predict(&reloaded, MonthKey::new(2012, 1).unwrap()).unwrap();
    assert!(forecast.is_finite());
    // The training targets live between 7.50 and ~180; a tree ensemble
    // cannot predict outside the range of what it has seen.
    assert!(forecast > 0.0 && forecast < 1000.0);
}

#[test]
fn report_over_the_same_ledger() {
    let dir = TempDir::new().unwrap();
    let ledger_path = write_ledger(&dir);

    let transactions = ledger::load_transactions(&ledger_path).unwrap();
    let report = ReportEngine::new()
        .calculate(&transactions, &ReportFilter::default(), 5)
        .unwrap();

    assert_eq!(report.total_orders, 24);
    assert_eq!(report.unique_customers, 2);
    assert_eq!(report.top_products.len(), 2);
    assert_eq!(report.top_products[0].0, "WHITE METAL LANTERN");

    // Filtering down to the single UK invoice line.
    let filter = ReportFilter {
        countries: Some(["United Kingdom".to_string()].into()),
        ..Default::default()
    };
    let uk = ReportEngine::new()
        .calculate(&transactions, &filter, 5)
        .unwrap();
    assert_eq!(uk.line_items, 1);
    assert_eq!(uk.total_sales, dec!(7.50));
}
