// src/sheets/headers.rs

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Canonical columns of the header-driven stock sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SerialNumber,
    Status,
    Name,
    ModelYear,
    Barcode,
    ChassisNumber,
    EngineNumber,
    SpecCode,
    Description,
    ExteriorColor,
    InteriorColor,
    Supplier,
    Branch,
    Location,
    CustomerDetails,
    SalesPerson,
    SaleDate,
    InvoiceNumber,
    AmpiNumber,
    PaperStatus,
    DealId,
    ReceivedDate,
    AgingDays,
}

/// Fixed write-back column order. The serializer emits exactly these labels,
/// and each one resolves back to its field through the alias table, so
/// `parse_rows(to_rows(..))` recovers every field in this set.
pub const CANONICAL_HEADERS: [(Field, &str); 23] = [
    (Field::SerialNumber, "SN"),
    (Field::Status, "Status"),
    (Field::Name, "Name"),
    (Field::ModelYear, "Model"),
    (Field::Barcode, "Barcode"),
    (Field::ChassisNumber, "Chassis Number"),
    (Field::EngineNumber, "Engine Number"),
    (Field::SpecCode, "Spec Code"),
    (Field::Description, "Description"),
    (Field::ExteriorColor, "Ext Color"),
    (Field::InteriorColor, "Int Color"),
    (Field::Supplier, "Supplier"),
    (Field::Branch, "Branch"),
    (Field::Location, "Place"),
    (Field::CustomerDetails, "Customer Details"),
    (Field::SalesPerson, "SP"),
    (Field::SaleDate, "SD"),
    (Field::InvoiceNumber, "Invoice No"),
    (Field::AmpiNumber, "AMPI No"),
    (Field::PaperStatus, "Paper Status"),
    (Field::DealId, "Deal No"),
    (Field::ReceivedDate, "Received Date"),
    (Field::AgingDays, "Aging"),
];

// Header spellings actually seen across the source sheets, normalized
// (trimmed, lower-cased). Headers that resolve to nothing are ignored by the
// parser, so adding a spelling here is the whole fix for a renamed column.
const HEADER_ALIAS_TABLE: &[(&str, Field)] = &[
    ("sn", Field::SerialNumber),
    ("s/n", Field::SerialNumber),
    ("serial", Field::SerialNumber),
    ("serial no", Field::SerialNumber),
    ("serial no.", Field::SerialNumber),
    ("serial number", Field::SerialNumber),
    ("status", Field::Status),
    ("vehicle status", Field::Status),
    ("name", Field::Name),
    ("vehicle name", Field::Name),
    ("model name", Field::Name),
    ("vehicle", Field::Name),
    ("model", Field::ModelYear),
    ("model year", Field::ModelYear),
    ("model/year", Field::ModelYear),
    ("year", Field::ModelYear),
    ("barcode", Field::Barcode),
    ("bar code", Field::Barcode),
    ("barcode no", Field::Barcode),
    ("chassis number", Field::ChassisNumber),
    ("chassis no", Field::ChassisNumber),
    ("chassis no.", Field::ChassisNumber),
    ("chasis no", Field::ChassisNumber),
    ("chassis", Field::ChassisNumber),
    ("vin", Field::ChassisNumber),
    ("engine number", Field::EngineNumber),
    ("engine no", Field::EngineNumber),
    ("engine no.", Field::EngineNumber),
    ("engine", Field::EngineNumber),
    ("spec code", Field::SpecCode),
    ("spec", Field::SpecCode),
    ("specs code", Field::SpecCode),
    ("description", Field::Description),
    ("discription", Field::Description),
    ("desc", Field::Description),
    ("ext color", Field::ExteriorColor),
    ("ext. color", Field::ExteriorColor),
    ("ext colour", Field::ExteriorColor),
    ("exterior color", Field::ExteriorColor),
    ("exterior colour", Field::ExteriorColor),
    ("colour ext", Field::ExteriorColor),
    ("colour ext.", Field::ExteriorColor),
    ("color ext", Field::ExteriorColor),
    ("color ext.", Field::ExteriorColor),
    ("int color", Field::InteriorColor),
    ("int. color", Field::InteriorColor),
    ("int colour", Field::InteriorColor),
    ("interior color", Field::InteriorColor),
    ("interior colour", Field::InteriorColor),
    ("colour int", Field::InteriorColor),
    ("color int", Field::InteriorColor),
    ("supplier", Field::Supplier),
    ("suplier", Field::Supplier),
    ("vendor", Field::Supplier),
    ("branch", Field::Branch),
    ("showroom", Field::Branch),
    ("place", Field::Location),
    ("location", Field::Location),
    ("locaton", Field::Location),
    ("yard", Field::Location),
    ("customer details", Field::CustomerDetails),
    ("customer detail", Field::CustomerDetails),
    ("customer name", Field::CustomerDetails),
    ("customer", Field::CustomerDetails),
    ("sp", Field::SalesPerson),
    ("sales person", Field::SalesPerson),
    ("salesperson", Field::SalesPerson),
    ("salesman", Field::SalesPerson),
    ("sales man", Field::SalesPerson),
    ("sd", Field::SaleDate),
    ("sale date", Field::SaleDate),
    ("sales date", Field::SaleDate),
    ("sold date", Field::SaleDate),
    ("invoice no", Field::InvoiceNumber),
    ("invoice no.", Field::InvoiceNumber),
    ("invoice number", Field::InvoiceNumber),
    ("inv no", Field::InvoiceNumber),
    ("ampi no", Field::AmpiNumber),
    ("ampi no.", Field::AmpiNumber),
    ("ampi number", Field::AmpiNumber),
    ("ampi", Field::AmpiNumber),
    ("paper status", Field::PaperStatus),
    ("papers", Field::PaperStatus),
    ("paper", Field::PaperStatus),
    ("deal no", Field::DealId),
    ("deal no.", Field::DealId),
    ("deal id", Field::DealId),
    ("deal number", Field::DealId),
    ("deal", Field::DealId),
    ("received date", Field::ReceivedDate),
    ("recieved date", Field::ReceivedDate),
    ("rcvd date", Field::ReceivedDate),
    ("aging", Field::AgingDays),
    ("ageing", Field::AgingDays),
    ("aging days", Field::AgingDays),
    ("aging (days)", Field::AgingDays),
];

lazy_static! {
    static ref HEADER_ALIASES: HashMap<String, Field> = {
        let mut m = HashMap::new();
        for (alias, field) in HEADER_ALIAS_TABLE {
            m.insert((*alias).to_string(), *field);
        }
        // The canonical labels themselves always resolve, whatever casing
        // the sheet uses.
        for (field, label) in CANONICAL_HEADERS {
            m.insert(label.to_lowercase(), field);
        }
        m
    };
}

/// Resolves one header cell to its canonical field, or `None` for labels we
/// don't know (the parser skips those columns).
pub fn lookup_header(label: &str) -> Option<Field> {
    HEADER_ALIASES.get(&label.trim().to_lowercase()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_spellings_resolve() {
        assert_eq!(lookup_header("Colour Ext"), Some(Field::ExteriorColor));
        assert_eq!(lookup_header("color ext."), Some(Field::ExteriorColor));
        assert_eq!(lookup_header(" EXT COLOUR "), Some(Field::ExteriorColor));
        assert_eq!(lookup_header("Chasis No"), Some(Field::ChassisNumber));
        assert_eq!(lookup_header("S/N"), Some(Field::SerialNumber));
        assert_eq!(lookup_header("Salesman"), Some(Field::SalesPerson));
    }

    #[test]
    fn test_unknown_headers_are_ignored() {
        assert_eq!(lookup_header("Remarks"), None);
        assert_eq!(lookup_header(""), None);
    }

    #[test]
    fn test_every_canonical_label_round_trips() {
        for (field, label) in CANONICAL_HEADERS {
            assert_eq!(
                lookup_header(label),
                Some(field),
                "canonical label {label:?} must resolve to its own field"
            );
        }
    }

    #[test]
    fn test_canonical_headers_cover_each_field_once() {
        let mut seen = std::collections::HashSet::new();
        for (field, _) in CANONICAL_HEADERS {
            assert!(seen.insert(field), "{field:?} listed twice");
        }
        assert_eq!(seen.len(), 23);
    }
}
