pub mod deals;
pub mod export_xlsx;

pub use deals::{aggregate, SalesPersonStats};
pub use export_xlsx::export_stock_report;
