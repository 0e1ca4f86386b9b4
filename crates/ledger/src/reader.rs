use crate::error::LedgerError;
use chrono::NaiveDateTime;
use core_types::Transaction;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Timestamp formats observed across ledger exports. The slash form is the
/// online-retail spreadsheet export; the dashed forms are ISO-ish re-exports.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Resolved indices of the required ledger columns.
struct ColumnMap {
    invoice_no: usize,
    stock_code: usize,
    description: usize,
    quantity: usize,
    unit_price: usize,
    invoice_date: usize,
    customer_id: usize,
    country: usize,
}

/// Lowercases a header and strips whitespace and underscores, so that
/// `InvoiceNo`, `invoice no` and `invoice_no` all resolve to `invoiceno`.
fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, LedgerError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| normalize_header(h) == name)
                .ok_or_else(|| LedgerError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            invoice_no: find("invoiceno")?,
            stock_code: find("stockcode")?,
            description: find("description")?,
            quantity: find("quantity")?,
            unit_price: find("unitprice")?,
            invoice_date: find("invoicedate")?,
            customer_id: find("customerid")?,
            country: find("country")?,
        })
    }
}

/// Loads the raw transaction ledger from a CSV file.
///
/// Headers are normalized before column lookup, rows are returned sorted by
/// invoice timestamp, and blank customer ids become `None`. A missing file is
/// reported as `LedgerError::MissingData`; a malformed row aborts the load
/// with the offending line number.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, LedgerError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LedgerError::MissingData(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut transactions = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        transactions.push(parse_record(&record, &columns, line)?);
    }

    // Chronological order simplifies every downstream consumer.
    transactions.sort_by_key(|t| t.invoice_date);

    tracing::debug!(rows = transactions.len(), path = %path.display(), "loaded transaction ledger");
    Ok(transactions)
}

fn parse_record(
    record: &StringRecord,
    columns: &ColumnMap,
    line: u64,
) -> Result<Transaction, LedgerError> {
    let field = |index: usize| {
        record.get(index).ok_or(LedgerError::Parse {
            line,
            message: format!("row has no field at column {index}"),
        })
    };

    let quantity = field(columns.quantity)?
        .trim()
        .parse::<i64>()
        .map_err(|e| LedgerError::Parse {
            line,
            message: format!("invalid quantity: {e}"),
        })?;

    let unit_price =
        Decimal::from_str(field(columns.unit_price)?.trim()).map_err(|e| LedgerError::Parse {
            line,
            message: format!("invalid unit price: {e}"),
        })?;

    let invoice_date = parse_timestamp(field(columns.invoice_date)?.trim()).ok_or_else(|| {
        LedgerError::Parse {
            line,
            message: format!(
                "unrecognized invoice date '{}'",
                field(columns.invoice_date).unwrap_or_default()
            ),
        }
    })?;

    let customer_id = field(columns.customer_id)?.trim();
    let customer_id = if customer_id.is_empty() {
        None
    } else {
        Some(customer_id.to_string())
    };

    Ok(Transaction {
        invoice_no: field(columns.invoice_no)?.trim().to_string(),
        stock_code: field(columns.stock_code)?.trim().to_string(),
        description: field(columns.description)?.trim().to_string(),
        quantity,
        unit_price,
        invoice_date,
        customer_id,
        country: field(columns.country)?.trim().to_string(),
    })
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_ledger(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_rows_and_sorts_by_timestamp() {
        let dir = TempDir::new().unwrap();
        let path = write_ledger(
            &dir,
            "ledger.csv",
            "InvoiceNo,StockCode,Description,Quantity,UnitPrice,InvoiceDate,CustomerID,Country\n\
             536366,71053,WHITE METAL LANTERN,6,3.39,12/2/2010 8:28,17850,United Kingdom\n\
             536365,85123A,T-LIGHT HOLDER,3,2.50,12/1/2010 8:26,17850,United Kingdom\n",
        );

        let transactions = load_transactions(&path).unwrap();
        assert_eq!(transactions.len(), 2);
        // Rows come back in timestamp order, not file order.
        assert_eq!(transactions[0].invoice_no, "536365");
        assert_eq!(transactions[0].unit_price, dec!(2.50));
        assert_eq!(transactions[0].sales(), dec!(7.50));
        assert_eq!(transactions[1].invoice_no, "536366");
    }

    #[test]
    fn normalizes_header_case_and_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = write_ledger(
            &dir,
            "ledger.csv",
            "invoice no,stock_code,DESCRIPTION,quantity,Unit Price,Invoice_Date,customer id,Country\n\
             536365,85123A,T-LIGHT HOLDER,3,2.50,2010-12-01 08:26:00,17850,United Kingdom\n",
        );

        let transactions = load_transactions(&path).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].stock_code, "85123A");
    }

    #[test]
    fn blank_customer_id_becomes_none() {
        let dir = TempDir::new().unwrap();
        let path = write_ledger(
            &dir,
            "ledger.csv",
            "InvoiceNo,StockCode,Description,Quantity,UnitPrice,InvoiceDate,CustomerID,Country\n\
             536370,22728,ALARM CLOCK BAKELIKE PINK,24,3.75,12/1/2010 8:45,,France\n",
        );

        let transactions = load_transactions(&path).unwrap();
        assert_eq!(transactions[0].customer_id, None);
    }

    #[test]
    fn missing_file_is_missing_data() {
        let dir = TempDir::new().unwrap();
        let result = load_transactions(dir.path().join("absent.csv"));
        assert!(matches!(result, Err(LedgerError::MissingData(_))));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let dir = TempDir::new().unwrap();
        let path = write_ledger(
            &dir,
            "ledger.csv",
            "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,CustomerID,Country\n",
        );

        let result = load_transactions(&path);
        match result {
            Err(LedgerError::MissingColumn(name)) => assert_eq!(name, "unitprice"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn malformed_quantity_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let path = write_ledger(
            &dir,
            "ledger.csv",
            "InvoiceNo,StockCode,Description,Quantity,UnitPrice,InvoiceDate,CustomerID,Country\n\
             536365,85123A,T-LIGHT HOLDER,three,2.50,12/1/2010 8:26,17850,United Kingdom\n",
        );

        match load_transactions(&path) {
            Err(LedgerError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }
}
