// src/sheets/parser.rs

use crate::domain::record::{make_scoped_id, RecordSource, VehicleRecord};
use crate::sheets::grid::{cell, is_blank_row};
use crate::sheets::headers::{lookup_header, Field};

/// Parses header-driven rows (the Stock and Incoming tabs) into canonical
/// records.
///
/// Header cells resolve through the alias table; columns with unknown labels
/// are skipped. Row-level problems never fail the parse: blank rows drop
/// silently, malformed cells fall back to documented defaults, and output
/// order follows input order.
pub fn parse_rows(
    source: RecordSource,
    header_row: &[String],
    data_rows: &[Vec<String>],
) -> Vec<VehicleRecord> {
    // Resolve each header cell once up front.
    let columns: Vec<Option<Field>> = header_row.iter().map(|h| lookup_header(h)).collect();

    let mut records = Vec::new();
    for (idx, row) in data_rows.iter().enumerate() {
        if is_blank_row(row) {
            continue;
        }
        let mut rec = VehicleRecord::default();
        for (col, field) in columns.iter().enumerate() {
            if let Some(field) = field {
                set_field(&mut rec, *field, cell(row, col).trim());
            }
        }
        finish_record(&mut rec, source, idx);
        records.push(rec);
    }
    records
}

fn set_field(rec: &mut VehicleRecord, field: Field, value: &str) {
    match field {
        // 0 here means "unusable"; finish_record swaps in the positional
        // fallback.
        Field::SerialNumber => rec.serial_number = value.parse().unwrap_or(0),
        Field::Status => rec.status = value.to_string(),
        Field::Name => rec.name = value.to_string(),
        Field::ModelYear => rec.model_year = value.to_string(),
        Field::Barcode => rec.barcode = value.to_string(),
        Field::ChassisNumber => rec.chassis_number = value.to_string(),
        Field::EngineNumber => rec.engine_number = value.to_string(),
        Field::SpecCode => rec.spec_code = value.to_string(),
        Field::Description => rec.description = value.to_string(),
        Field::ExteriorColor => rec.exterior_color = value.to_string(),
        Field::InteriorColor => rec.interior_color = value.to_string(),
        Field::Supplier => rec.supplier = value.to_string(),
        Field::Branch => rec.branch = value.to_string(),
        Field::Location => rec.location = value.to_string(),
        Field::CustomerDetails => rec.customer_details = value.to_string(),
        Field::SalesPerson => rec.sales_person = value.to_string(),
        Field::SaleDate => rec.sale_date = value.to_string(),
        Field::InvoiceNumber => rec.invoice_number = value.to_string(),
        Field::AmpiNumber => rec.ampi_number = value.to_string(),
        Field::PaperStatus => rec.paper_status = value.to_string(),
        Field::DealId => rec.deal_id = value.to_string(),
        Field::ReceivedDate => rec.received_date = value.to_string(),
        Field::AgingDays => rec.aging_days = value.parse().unwrap_or(0),
    }
}

/// Applies the documented defaults once all mapped cells are in:
/// serial falls back to the 1-based row position, a missing status means the
/// vehicle is on the floor, and the id is scoped to the source tab.
fn finish_record(rec: &mut VehicleRecord, source: RecordSource, row_idx: usize) {
    if rec.serial_number == 0 {
        rec.serial_number = (row_idx + 1) as u32;
    }
    if rec.status.trim().is_empty() {
        rec.status = "Available".to_string();
    }
    rec.id = make_scoped_id(source, rec.serial_number);
}
