//! # Vantage Reporting
//!
//! The computational core of the sales dashboard: ledger filters and
//! aggregate metrics. Rendering (tables, charts) lives with the caller; this
//! crate only computes.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** pure computation over `core-types`; it consumes the
//!   raw ledger directly and knows nothing about the forecasting pipeline.
//! - **Stateless Calculation:** `ReportEngine` takes transactions plus a
//!   filter and produces a `SalesReport`. No caching, no sessions.
//!
//! ## Public API
//!
//! - `ReportEngine`: the main struct that contains the calculation logic.
//! - `ReportFilter`: date-range / country / product selection.
//! - `SalesReport`: the standardized struct holding the aggregate metrics.
//! - `ReportError`: the specific error types that can be returned.

pub mod engine;
pub mod error;
pub mod filter;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ReportEngine;
pub use error::ReportError;
pub use filter::ReportFilter;
pub use report::SalesReport;
