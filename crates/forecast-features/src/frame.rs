use crate::{MODEL_FEATURES, TARGET_COLUMN};
use anyhow::Result;
use core_types::{MonthKey, MonthlyRecord};
use polars::prelude::*;
use rust_decimal::prelude::*;
use std::f64::consts::PI;

/// The seasonal encoding of a month number: sine and cosine of the month
/// scaled to a full yearly cycle. Lets the model represent periodic yearly
/// patterns without one-hot month indicators.
pub fn seasonal_pair(month_num: u32) -> (f64, f64) {
    let angle = 2.0 * PI * month_num as f64 / 12.0;
    (angle.sin(), angle.cos())
}

/// Assembles the feature vector for a single month, in `MODEL_FEATURES`
/// order. This is the one encoder shared by trainer and consumer.
///
/// `t` may be negative (months before the base) or arbitrarily large
/// (months far past the training window); no bound is applied here.
pub fn feature_row(month: MonthKey, base_month_ordinal: i64) -> [f64; 3] {
    let t = (month.ordinal() - base_month_ordinal) as f64;
    let (sin_12, cos_12) = seasonal_pair(month.month);
    [t, sin_12, cos_12]
}

/// Builds the training DataFrame from the monthly aggregate: the three
/// feature columns in schema order plus the `sales` target column.
///
/// Decimal sales totals are converted to f64 here, at the model boundary,
/// and nowhere else.
pub fn build_feature_frame(records: &[MonthlyRecord], base_month_ordinal: i64) -> Result<DataFrame> {
    let mut ts = Vec::with_capacity(records.len());
    let mut sins = Vec::with_capacity(records.len());
    let mut coss = Vec::with_capacity(records.len());
    let mut sales = Vec::with_capacity(records.len());

    for record in records {
        let [t, sin_12, cos_12] = feature_row(record.month, base_month_ordinal);
        ts.push(t);
        sins.push(sin_12);
        coss.push(cos_12);
        sales.push(record.total_sales.to_f64().unwrap_or(0.0));
    }

    let df = DataFrame::new(vec![
        Series::new(MODEL_FEATURES[0], ts),
        Series::new(MODEL_FEATURES[1], sins),
        Series::new(MODEL_FEATURES[2], coss),
        Series::new(TARGET_COLUMN, sales),
    ])?;

    Ok(df)
}
