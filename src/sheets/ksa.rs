// src/sheets/ksa.rs
//
// The KSA tab has no usable header row: the layout is strictly positional,
// interleaved with reference-code separator rows and repeated header rows
// pasted mid-sheet. Rows are classified before any field is read.

use crate::domain::record::{make_scoped_id, RecordSource, VehicleRecord};
use crate::sheets::grid::{cell, populated_cells};

// Fixed column layout of the KSA tab. Index 4 is unused on the sheet;
// changing the source's column order means updating this map.
const COL_STATUS: usize = 0;
const COL_NAME: usize = 1;
const COL_BARCODE: usize = 2;
const COL_MODEL: usize = 3;
const COL_SPEC_CODE: usize = 5;
const COL_DESCRIPTION: usize = 6;
const COL_EXT_COLOR: usize = 7;
const COL_INT_COLOR: usize = 8;
const COL_CHASSIS: usize = 9;
const COL_ENGINE: usize = 10;
const COL_SUPPLIER: usize = 11;
const COL_BRANCH: usize = 12;
const COL_PLACE: usize = 13;
const COL_CUSTOMER: usize = 14;
const COL_SALES_PERSON: usize = 15;
const COL_SALE_DATE: usize = 16;
const COL_INVOICE_NO: usize = 17;
const COL_AMPI_NO: usize = 18;
const COL_PAPER_STATUS: usize = 19;
const COL_DEAL_NO: usize = 20;
const COL_RECEIVED_DATE: usize = 21;
const COL_AGING: usize = 22;

#[derive(Debug, PartialEq)]
enum RowKind {
    Data,
    /// A lone cell holding a shipment reference code like "KSA-0425".
    ReferenceCode,
    /// A header row pasted into the data area.
    Header,
    /// Blank or too sparse to be a vehicle.
    Sparse,
}

fn classify_row(row: &[String]) -> RowKind {
    let populated = populated_cells(row);
    if populated == 0 {
        return RowKind::Sparse;
    }
    if populated == 1 {
        if let Some(only) = row.iter().find(|c| !c.trim().is_empty()) {
            if only.contains('-') {
                return RowKind::ReferenceCode;
            }
        }
    }
    if cell(row, 0).trim() == "STATUS" {
        return RowKind::Header;
    }
    let has = |token: &str| row.iter().any(|c| c.trim().eq_ignore_ascii_case(token));
    if has("STATUS") && has("MODEL") {
        return RowKind::Header;
    }
    if populated < 5 || cell(row, 0).trim().is_empty() {
        return RowKind::Sparse;
    }
    RowKind::Data
}

/// Whether a location cell means the vehicle is still in the incoming yard.
/// Matched on the stem so the usual misspellings ("Incomming") still hit.
pub fn is_incoming_location(location: &str) -> bool {
    location.trim().to_lowercase().contains("incom")
}

/// Parses raw KSA rows into canonical records.
///
/// Separator, header and sparse rows are skipped; accepted rows are read by
/// fixed column index. Serial numbers are positional (the tab carries none),
/// and a vehicle sitting in the incoming yard is forced to `UNRECEIVED`
/// regardless of what the status cell says.
pub fn parse_ksa_rows(data_rows: &[Vec<String>]) -> Vec<VehicleRecord> {
    let mut records = Vec::new();
    for (idx, row) in data_rows.iter().enumerate() {
        if classify_row(row) != RowKind::Data {
            continue;
        }

        let serial = (idx + 1) as u32;
        let location = cell(row, COL_PLACE).trim().to_string();
        let status = if is_incoming_location(&location) {
            "UNRECEIVED".to_string()
        } else {
            cell(row, COL_STATUS).trim().to_string()
        };

        records.push(VehicleRecord {
            id: make_scoped_id(RecordSource::Ksa, serial),
            serial_number: serial,
            status,
            name: cell(row, COL_NAME).trim().to_string(),
            model_year: cell(row, COL_MODEL).trim().to_string(),
            barcode: cell(row, COL_BARCODE).trim().to_string(),
            chassis_number: cell(row, COL_CHASSIS).trim().to_string(),
            engine_number: cell(row, COL_ENGINE).trim().to_string(),
            spec_code: cell(row, COL_SPEC_CODE).trim().to_string(),
            description: cell(row, COL_DESCRIPTION).trim().to_string(),
            exterior_color: cell(row, COL_EXT_COLOR).trim().to_string(),
            interior_color: cell(row, COL_INT_COLOR).trim().to_string(),
            supplier: cell(row, COL_SUPPLIER).trim().to_string(),
            branch: cell(row, COL_BRANCH).trim().to_string(),
            location,
            customer_details: cell(row, COL_CUSTOMER).trim().to_string(),
            sales_person: cell(row, COL_SALES_PERSON).trim().to_string(),
            sale_date: cell(row, COL_SALE_DATE).trim().to_string(),
            invoice_number: cell(row, COL_INVOICE_NO).trim().to_string(),
            ampi_number: cell(row, COL_AMPI_NO).trim().to_string(),
            paper_status: cell(row, COL_PAPER_STATUS).trim().to_string(),
            deal_id: cell(row, COL_DEAL_NO).trim().to_string(),
            received_date: cell(row, COL_RECEIVED_DATE).trim().to_string(),
            aging_days: cell(row, COL_AGING).trim().parse().unwrap_or(0),
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    // 23-wide row with the given positional cells, rest blank.
    fn ksa_row(cells: &[(usize, &str)]) -> Vec<String> {
        let mut row = vec![String::new(); 23];
        for (idx, value) in cells {
            row[*idx] = value.to_string();
        }
        row
    }

    fn full_row(status: &str, name: &str, place: &str) -> Vec<String> {
        ksa_row(&[
            (COL_STATUS, status),
            (COL_NAME, name),
            (COL_BARCODE, "BC-9"),
            (COL_MODEL, "2024"),
            (COL_SPEC_CODE, "GCC"),
            (COL_PLACE, place),
        ])
    }

    #[test]
    fn test_reference_code_rows_are_skipped() {
        let rows = vec![
            ksa_row(&[(0, "KSA-0425")]),
            full_row("Available", "Camry", "Showroom"),
        ];
        let recs = parse_ksa_rows(&rows);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Camry");
    }

    #[test]
    fn test_embedded_header_rows_are_skipped() {
        let by_first_cell = ksa_row(&[
            (0, "STATUS"),
            (1, "NAME"),
            (2, "BARCODE"),
            (3, "MODEL"),
            (5, "SPEC"),
        ]);
        let by_tokens = ksa_row(&[
            (0, "status"),
            (1, "Name"),
            (3, "Model"),
            (5, "Spec"),
            (6, "Desc"),
            (9, "STATUS"), // token may sit in any column
        ]);
        let recs = parse_ksa_rows(&[by_first_cell, by_tokens]);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_sparse_rows_are_skipped() {
        // Fewer than 5 populated cells, or an empty status cell: not data.
        let too_sparse = ksa_row(&[(COL_STATUS, "Available"), (COL_NAME, "Camry")]);
        let no_status = ksa_row(&[
            (COL_NAME, "Camry"),
            (COL_BARCODE, "BC"),
            (COL_MODEL, "2024"),
            (COL_SPEC_CODE, "GCC"),
            (COL_PLACE, "Showroom"),
        ]);
        assert!(parse_ksa_rows(&[too_sparse, no_status]).is_empty());
    }

    #[test]
    fn test_incoming_override_tolerates_misspelling() {
        let rows = vec![full_row("Available", "Hilux", "Incomming")];
        let recs = parse_ksa_rows(&rows);
        assert_eq!(recs[0].status, "UNRECEIVED");
        assert_eq!(recs[0].location, "Incomming");

        let rows = vec![full_row("Available", "Hilux", "Incoming Yard")];
        assert_eq!(parse_ksa_rows(&rows)[0].status, "UNRECEIVED");

        let rows = vec![full_row("Available", "Hilux", "Showroom")];
        assert_eq!(parse_ksa_rows(&rows)[0].status, "Available");
    }

    #[test]
    fn test_positional_extraction_and_serials() {
        let rows = vec![
            ksa_row(&[(0, "KSA-11")]), // separator at position 1
            full_row("Booked", "Land Cruiser", "Showroom"),
        ];
        let recs = parse_ksa_rows(&rows);
        assert_eq!(recs.len(), 1);
        let rec = &recs[0];
        // Serial is the 1-based position in the source, separators included.
        assert_eq!(rec.serial_number, 2);
        assert_eq!(rec.id, "ksa:2");
        assert_eq!(rec.status, "Booked");
        assert_eq!(rec.model_year, "2024");
        assert_eq!(rec.barcode, "BC-9");
        assert_eq!(rec.spec_code, "GCC");
    }
}
