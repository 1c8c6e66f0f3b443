// src/engine/filter.rs

use crate::domain::record::VehicleRecord;
use crate::domain::status::{classify, StatusClass};
use std::collections::BTreeSet;

/// A snapshot of active filter selections: one free-text search plus seven
/// independent multi-valued criteria. An empty selection set means the
/// criterion is not applied. Snapshots are rebuilt on every user change and
/// consumed immutably; they are never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub search: String,
    /// Matched against the coarse status class label, or against the raw
    /// status text for values that classify as `Other`.
    pub statuses: BTreeSet<String>,
    pub names: BTreeSet<String>,
    pub model_years: BTreeSet<String>,
    pub branches: BTreeSet<String>,
    pub exterior_colors: BTreeSet<String>,
    pub barcodes: BTreeSet<String>,
    pub spec_codes: BTreeSet<String>,
}

/// The distinct values observed across a record collection: what the UI
/// offers in its filter dropdowns. Sorted, deduplicated, blanks excluded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub statuses: Vec<String>,
    pub names: Vec<String>,
    pub model_years: Vec<String>,
    pub branches: Vec<String>,
    pub exterior_colors: Vec<String>,
    pub barcodes: Vec<String>,
    pub spec_codes: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[VehicleRecord]) -> Self {
        let mut statuses = BTreeSet::new();
        let mut names = BTreeSet::new();
        let mut model_years = BTreeSet::new();
        let mut branches = BTreeSet::new();
        let mut exterior_colors = BTreeSet::new();
        let mut barcodes = BTreeSet::new();
        let mut spec_codes = BTreeSet::new();

        let mut insert = |set: &mut BTreeSet<String>, value: &str| {
            let v = value.trim();
            if !v.is_empty() {
                set.insert(v.to_string());
            }
        };

        for rec in records {
            // Known classes are offered by their label so one dropdown entry
            // covers every spelling; unknown statuses pass through raw.
            match classify(&rec.status) {
                StatusClass::Other => insert(&mut statuses, &rec.status),
                class => insert(&mut statuses, class.label()),
            }
            insert(&mut names, &rec.name);
            insert(&mut model_years, &rec.model_year);
            insert(&mut branches, &rec.branch);
            insert(&mut exterior_colors, &rec.exterior_color);
            insert(&mut barcodes, &rec.barcode);
            insert(&mut spec_codes, &rec.spec_code);
        }

        FilterOptions {
            statuses: statuses.into_iter().collect(),
            names: names.into_iter().collect(),
            model_years: model_years.into_iter().collect(),
            branches: branches.into_iter().collect(),
            exterior_colors: exterior_colors.into_iter().collect(),
            barcodes: barcodes.into_iter().collect(),
            spec_codes: spec_codes.into_iter().collect(),
        }
    }
}

/// Applies the filter snapshot: a record passes only when the search matches
/// AND every applied criterion matches (conjunction across criteria).
pub fn filter(records: &[VehicleRecord], filters: &FilterSet) -> Vec<VehicleRecord> {
    records
        .iter()
        .filter(|rec| matches(rec, filters))
        .cloned()
        .collect()
}

fn matches(rec: &VehicleRecord, filters: &FilterSet) -> bool {
    let search = filters.search.trim();
    if !search.is_empty() {
        let needle = search.to_lowercase();
        let hit = [&rec.chassis_number, &rec.barcode, &rec.name]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    status_matches(rec, &filters.statuses)
        && passes(&filters.names, &rec.name)
        && passes(&filters.model_years, &rec.model_year)
        && passes(&filters.branches, &rec.branch)
        && passes(&filters.exterior_colors, &rec.exterior_color)
        && passes(&filters.barcodes, &rec.barcode)
        && passes(&filters.spec_codes, &rec.spec_code)
}

fn passes(selection: &BTreeSet<String>, value: &str) -> bool {
    selection.is_empty() || selection.contains(value)
}

fn status_matches(rec: &VehicleRecord, selection: &BTreeSet<String>) -> bool {
    if selection.is_empty() {
        return true;
    }
    match classify(&rec.status) {
        // Custom strings stay filterable by their exact text.
        StatusClass::Other => selection.contains(rec.status.trim()),
        class => selection.contains(class.label()),
    }
}
