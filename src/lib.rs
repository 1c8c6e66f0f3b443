//! Core of the dealership inventory tracker: maps spreadsheet rows to
//! canonical vehicle records and back, normalizes hand-typed statuses,
//! filters/sorts record collections and aggregates per-salesperson deals.
//!
//! Everything here is synchronous and pure over in-memory collections.
//! Fetching rows, writing them back, auth and file delivery belong to the
//! external collaborators behind the traits in [`sheets::source`].

pub mod domain;
pub mod engine;
pub mod errors;
pub mod reports;
pub mod sheets;

pub use domain::{
    classify, classify_fine, is_received_advance, LogEntry, RecordSource, StatusClass,
    VehicleRecord,
};
pub use engine::{filter, sort, FilterOptions, FilterSet};
pub use errors::StockError;
pub use reports::{aggregate, export_stock_report, SalesPersonStats};
pub use sheets::{load_records, parse_ksa_rows, parse_rows, to_rows, write_back, SheetGrid};
