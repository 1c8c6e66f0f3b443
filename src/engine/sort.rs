// src/engine/sort.rs

use crate::domain::record::VehicleRecord;
use crate::domain::status::{classify, StatusClass};
use std::cmp::Ordering;

/// Report ordering. Business rule, reproduced exactly:
///
/// 1. status priority: Available, then Booked, then everything else
///    (Sold, Received Full, Invoiced, ... all share the last tier);
/// 2. within the Available tier only, Toyota sinks below every other brand;
/// 3. name, case-insensitive;
/// 4. model/year text, case-insensitive, DESCENDING (newer-looking codes
///    first);
/// 5. serial number ascending.
///
/// Stable on full ties.
pub fn sort(records: &[VehicleRecord]) -> Vec<VehicleRecord> {
    let mut out = records.to_vec();
    sort_in_place(&mut out);
    out
}

pub fn sort_in_place(records: &mut [VehicleRecord]) {
    records.sort_by(compare);
}

fn status_priority(status: &str) -> u8 {
    match classify(status) {
        StatusClass::Available => 1,
        StatusClass::Booked => 2,
        _ => 3,
    }
}

fn brand_rank(rec: &VehicleRecord) -> u8 {
    if rec.name.to_lowercase().contains("toyota") {
        1
    } else {
        0
    }
}

fn compare(a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    let pa = status_priority(&a.status);
    let pb = status_priority(&b.status);

    pa.cmp(&pb)
        .then_with(|| {
            // Brand exception applies inside the Available tier only.
            if pa == 1 {
                brand_rank(a).cmp(&brand_rank(b))
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| b.model_year.to_lowercase().cmp(&a.model_year.to_lowercase()))
        .then_with(|| a.serial_number.cmp(&b.serial_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(serial: u32, status: &str, name: &str, model: &str) -> VehicleRecord {
        VehicleRecord {
            serial_number: serial,
            status: status.to_string(),
            name: name.to_string(),
            model_year: model.to_string(),
            ..VehicleRecord::default()
        }
    }

    fn names(records: &[VehicleRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_status_tiers() {
        let records = vec![
            rec(1, "Sold", "Honda", ""),
            rec(2, "Available", "Toyota Camry", ""),
            rec(3, "Available", "Kia Rio", ""),
        ];
        let sorted = sort(&records);
        assert_eq!(names(&sorted), vec!["Kia Rio", "Toyota Camry", "Honda"]);
    }

    #[test]
    fn test_toyota_sinks_within_available_despite_alphabet() {
        // "Toyota" < "Zotye" alphabetically, so plain name order would put
        // Toyota first; the brand exception must override it.
        let records = vec![
            rec(1, "Available", "Toyota Camry", ""),
            rec(2, "Available", "Zotye T600", ""),
        ];
        let sorted = sort(&records);
        assert_eq!(names(&sorted), vec!["Zotye T600", "Toyota Camry"]);
    }

    #[test]
    fn test_brand_exception_does_not_apply_outside_available() {
        let records = vec![
            rec(1, "Booked", "Toyota Camry", ""),
            rec(2, "Booked", "Zotye T600", ""),
        ];
        let sorted = sort(&records);
        // Plain alphabetical inside the Booked tier.
        assert_eq!(names(&sorted), vec!["Toyota Camry", "Zotye T600"]);
    }

    #[test]
    fn test_model_year_descends_within_same_name() {
        let records = vec![
            rec(1, "Available", "Camry", "2022"),
            rec(2, "Available", "Camry", "2024"),
            rec(3, "Available", "Camry", "2023"),
        ];
        let sorted = sort(&records);
        let models: Vec<&str> = sorted.iter().map(|r| r.model_year.as_str()).collect();
        assert_eq!(models, vec!["2024", "2023", "2022"]);
    }

    #[test]
    fn test_serial_breaks_full_ties() {
        let records = vec![
            rec(9, "Available", "Camry", "2024"),
            rec(3, "Available", "Camry", "2024"),
        ];
        let sorted = sort(&records);
        assert_eq!(sorted[0].serial_number, 3);
        assert_eq!(sorted[1].serial_number, 9);
    }

    #[test]
    fn test_misspelled_statuses_rank_with_their_class() {
        let records = vec![
            rec(1, "bookd", "Camry", ""),
            rec(2, "availabe", "Yaris", ""),
        ];
        let sorted = sort(&records);
        assert_eq!(names(&sorted), vec!["Yaris", "Camry"]);
    }
}
