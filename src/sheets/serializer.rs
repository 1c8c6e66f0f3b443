// src/sheets/serializer.rs

use crate::domain::record::VehicleRecord;
use crate::sheets::headers::{Field, CANONICAL_HEADERS};

/// Text rendering of one field, as written to a sheet cell.
pub fn field_text(rec: &VehicleRecord, field: Field) -> String {
    match field {
        Field::SerialNumber => rec.serial_number.to_string(),
        Field::Status => rec.status.clone(),
        Field::Name => rec.name.clone(),
        Field::ModelYear => rec.model_year.clone(),
        Field::Barcode => rec.barcode.clone(),
        Field::ChassisNumber => rec.chassis_number.clone(),
        Field::EngineNumber => rec.engine_number.clone(),
        Field::SpecCode => rec.spec_code.clone(),
        Field::Description => rec.description.clone(),
        Field::ExteriorColor => rec.exterior_color.clone(),
        Field::InteriorColor => rec.interior_color.clone(),
        Field::Supplier => rec.supplier.clone(),
        Field::Branch => rec.branch.clone(),
        Field::Location => rec.location.clone(),
        Field::CustomerDetails => rec.customer_details.clone(),
        Field::SalesPerson => rec.sales_person.clone(),
        Field::SaleDate => rec.sale_date.clone(),
        Field::InvoiceNumber => rec.invoice_number.clone(),
        Field::AmpiNumber => rec.ampi_number.clone(),
        Field::PaperStatus => rec.paper_status.clone(),
        Field::DealId => rec.deal_id.clone(),
        Field::ReceivedDate => rec.received_date.clone(),
        Field::AgingDays => rec.aging_days.to_string(),
    }
}

/// Renders records back into the write-back grid: the canonical header row
/// followed by one row per record, one field per column.
///
/// With no records the grid is empty, NOT a lone header row. The write-back
/// collaborator short-circuits on an empty grid, and a header-only write
/// would wipe the remote sheet's existing header formatting.
pub fn to_rows(records: &[VehicleRecord]) -> Vec<Vec<String>> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(
        CANONICAL_HEADERS
            .iter()
            .map(|(_, label)| label.to_string())
            .collect(),
    );
    for rec in records {
        grid.push(
            CANONICAL_HEADERS
                .iter()
                .map(|(field, _)| field_text(rec, *field))
                .collect(),
        );
    }
    grid
}
