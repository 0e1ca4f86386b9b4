//! # Vantage Ledger
//!
//! Ingestion of the raw transaction ledger: a delimited-text export with one
//! row per invoice line. Column headers vary between exports (`InvoiceNo`,
//! `invoice no`, `invoice_no`), so they are case/whitespace-normalized before
//! lookup. This crate is the only place raw ledger bytes are touched; the
//! rest of the system consumes typed `Transaction` records.

pub mod error;
pub mod reader;

pub use error::LedgerError;
pub use reader::load_transactions;
