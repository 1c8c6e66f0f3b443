// src/reports/export_xlsx.rs

use crate::domain::record::VehicleRecord;
use crate::engine::sort;
use crate::errors::StockError;
use crate::reports::deals;
use crate::sheets::headers::{Field, CANONICAL_HEADERS};
use crate::sheets::serializer::field_text;
use rust_xlsxwriter::Workbook;

/// Builds the downloadable stock report: a "Stock" sheet with every record
/// in report order under the canonical headers, plus a "Leaderboard" sheet
/// from the deal aggregation. Returns the xlsx file as bytes; delivering it
/// (object store, download) is the caller's side.
pub fn export_stock_report(records: &[VehicleRecord]) -> Result<Vec<u8>, StockError> {
    let mut workbook = Workbook::new();

    let sorted = sort::sort(records);
    let worksheet = workbook
        .add_worksheet()
        .set_name("Stock")
        .map_err(|e| StockError::Xlsx(format!("Failed to name stock sheet: {e}")))?;

    for (col, (_, label)) in CANONICAL_HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *label)
            .map_err(|e| StockError::Xlsx(format!("Failed to write header '{label}': {e}")))?;
    }

    for (i, rec) in sorted.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, (field, _)) in CANONICAL_HEADERS.iter().enumerate() {
            let c = col as u16;
            match field {
                Field::SerialNumber => worksheet.write_number(r, c, rec.serial_number as f64),
                Field::AgingDays => worksheet.write_number(r, c, rec.aging_days as f64),
                _ => worksheet.write_string(r, c, field_text(rec, *field)),
            }
            .map_err(|e| StockError::Xlsx(format!("Failed to write row {r}: {e}")))?;
        }
    }

    let leaderboard = workbook
        .add_worksheet()
        .set_name("Leaderboard")
        .map_err(|e| StockError::Xlsx(format!("Failed to name leaderboard sheet: {e}")))?;

    let headers = ["SP", "Booked", "Sold", "Total"];
    for (col, header) in headers.iter().enumerate() {
        leaderboard
            .write_string(0, col as u16, *header)
            .map_err(|e| StockError::Xlsx(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, stats) in deals::aggregate(records).iter().enumerate() {
        let r = (i + 1) as u32;
        leaderboard
            .write_string(r, 0, &stats.sales_person)
            .map_err(|e| StockError::Xlsx(format!("Failed to write salesperson: {e}")))?;
        leaderboard
            .write_number(r, 1, stats.booked_count as f64)
            .map_err(|e| StockError::Xlsx(format!("Failed to write booked count: {e}")))?;
        leaderboard
            .write_number(r, 2, stats.sold_count as f64)
            .map_err(|e| StockError::Xlsx(format!("Failed to write sold count: {e}")))?;
        leaderboard
            .write_number(r, 3, stats.total_count as f64)
            .map_err(|e| StockError::Xlsx(format!("Failed to write total: {e}")))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| StockError::Xlsx(format!("Failed to save workbook: {e}")))
}
