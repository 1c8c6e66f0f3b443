// src/domain/record.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One of the logically separate spreadsheet tabs a record can come from.
/// Row shapes differ per tab: Stock and Incoming carry a header row, KSA is
/// strictly positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordSource {
    Stock,
    Incoming,
    Ksa,
}

impl RecordSource {
    pub fn key(&self) -> &'static str {
        match self {
            RecordSource::Stock => "stock",
            RecordSource::Incoming => "incoming",
            RecordSource::Ksa => "ksa",
        }
    }

    /// Named range the external store addresses this tab by.
    pub fn range(&self) -> &'static str {
        match self {
            RecordSource::Stock => "Stock!A1:W",
            RecordSource::Incoming => "Incoming!A1:W",
            RecordSource::Ksa => "KSA!A1:W",
        }
    }
}

/// Prefix ids with the source tab so ids can't collide across tabs.
/// Example: "stock:42"
pub fn make_scoped_id(source: RecordSource, serial: u32) -> String {
    format!("{}:{}", source.key(), serial)
}

/// One vehicle as parsed, flattened and normalized from a sheet row.
/// This is the anti-corruption layer between the raw grid and everything
/// downstream: every field is already trimmed, defaults already applied.
///
/// `status` stays free text exactly as the sheet had it (bar the KSA
/// incoming override); its canonical bucket is derived via
/// [`crate::domain::status::classify`], never stored separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Stable within one source snapshot; see [`make_scoped_id`].
    pub id: String,
    /// Unique per snapshot; 1-based row position when the sheet cell is
    /// blank or not a number.
    pub serial_number: u32,
    pub status: String,
    /// Vehicle model name, e.g. brand + trim.
    pub name: String,
    /// The "Model" column. Often a year, sometimes a trim code; kept as text.
    pub model_year: String,
    pub barcode: String,
    pub chassis_number: String,
    pub engine_number: String,
    pub spec_code: String,
    pub description: String,
    pub exterior_color: String,
    pub interior_color: String,
    pub supplier: String,
    pub branch: String,
    /// "Place" on the sheets; free text, e.g. "Incoming Yard".
    pub location: String,
    pub customer_details: String,
    /// "SP" on the sheets, usually initials.
    pub sales_person: String,
    /// "SD" on the sheets.
    pub sale_date: String,
    pub invoice_number: String,
    pub ampi_number: String,
    pub paper_status: String,
    /// Groups one sale/booking transaction across records. Placeholder
    /// values mean "no deal"; see [`VehicleRecord::has_deal`].
    pub deal_id: String,
    pub received_date: String,
    /// Days since received or booked, pre-computed upstream and trusted.
    pub aging_days: u32,
}

impl VehicleRecord {
    /// Whether `deal_id` names a real transaction. Empty, "N/A" and "null"
    /// (any casing) are placeholders and excluded from deal aggregation.
    pub fn has_deal(&self) -> bool {
        let d = self.deal_id.trim();
        !(d.is_empty() || d.eq_ignore_ascii_case("n/a") || d.eq_ignore_ascii_case("null"))
    }

    /// New record reflecting a user's status edit. The original is left
    /// untouched; pair the result with [`LogEntry::status_change`] after the
    /// write-back succeeds.
    pub fn with_status(&self, status: &str) -> VehicleRecord {
        VehicleRecord {
            status: status.to_string(),
            ..self.clone()
        }
    }
}

/// Immutable audit record: created exactly once per successful
/// status-changing update, never mutated or deleted. Emitting it to the log
/// sink is the caller's job after the write-back succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
    pub serial_number: u32,
    pub old_status: String,
    pub new_status: String,
    pub changed_by: String,
}

impl LogEntry {
    /// Stamps now and captures the transition from `old_status` to the
    /// record's current status.
    pub fn status_change(record: &VehicleRecord, old_status: &str, changed_by: &str) -> Self {
        let now = Utc::now();
        LogEntry {
            id: format!("{}-{}", record.serial_number, now.timestamp_millis()),
            timestamp: now.to_rfc3339(),
            serial_number: record.serial_number,
            old_status: old_status.to_string(),
            new_status: record.status.clone(),
            changed_by: changed_by.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_deal_ids() {
        let mut rec = VehicleRecord::default();
        for placeholder in ["", "  ", "N/A", "n/a", "null", "NULL"] {
            rec.deal_id = placeholder.to_string();
            assert!(!rec.has_deal(), "{placeholder:?} should not count as a deal");
        }
        rec.deal_id = "D-1001".to_string();
        assert!(rec.has_deal());
    }

    #[test]
    fn test_scoped_ids_do_not_collide_across_sources() {
        assert_eq!(make_scoped_id(RecordSource::Stock, 7), "stock:7");
        assert_ne!(
            make_scoped_id(RecordSource::Stock, 7),
            make_scoped_id(RecordSource::Ksa, 7)
        );
    }

    #[test]
    fn test_log_entry_captures_transition() {
        let before = VehicleRecord {
            serial_number: 12,
            status: "Available".to_string(),
            ..VehicleRecord::default()
        };
        let rec = before.with_status("Booked");
        assert_eq!(before.status, "Available"); // original untouched
        let entry = LogEntry::status_change(&rec, &before.status, "JS");
        assert_eq!(entry.serial_number, 12);
        assert_eq!(entry.old_status, "Available");
        assert_eq!(entry.new_status, "Booked");
        assert_eq!(entry.changed_by, "JS");
        assert!(entry.id.starts_with("12-"));
        assert!(!entry.timestamp.is_empty());
    }
}
