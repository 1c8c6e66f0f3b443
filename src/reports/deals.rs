// src/reports/deals.rs

use crate::domain::record::VehicleRecord;
use crate::domain::status::is_received_advance;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One leaderboard row: distinct deal counts per salesperson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesPersonStats {
    pub sales_person: String,
    pub booked_count: usize,
    pub sold_count: usize,
    pub total_count: usize,
}

#[derive(Default)]
struct DealBuckets {
    booked: HashSet<String>,
    sold: HashSet<String>,
}

/// Groups records by salesperson and counts distinct booked vs. sold deals.
///
/// Counts are distinct deal-id cardinalities, not record counts: two records
/// sharing a deal id count once. A record lands in at most one bucket,
/// booked taking precedence. Placeholder deal ids contribute nothing.
/// Salespeople with no deals are dropped; output is ordered by total
/// descending, ties alphabetically by salesperson.
pub fn aggregate(records: &[VehicleRecord]) -> Vec<SalesPersonStats> {
    let mut groups: HashMap<String, DealBuckets> = HashMap::new();

    for rec in records {
        if !rec.has_deal() {
            continue;
        }
        let key = {
            let k = rec.sales_person.trim().to_uppercase();
            if k.is_empty() {
                "UNASSIGNED".to_string()
            } else {
                k
            }
        };
        let status = rec.status.trim().to_lowercase();
        let deal_id = rec.deal_id.trim().to_string();
        let buckets = groups.entry(key).or_default();

        if is_booked_status(&status) {
            buckets.booked.insert(deal_id);
        } else if !status.is_empty() && status != "available" && status != "unreceived" {
            // Sold is the fallback for any other terminal-looking status.
            buckets.sold.insert(deal_id);
        }
    }

    let mut stats: Vec<SalesPersonStats> = groups
        .into_iter()
        .filter_map(|(sales_person, buckets)| {
            let booked_count = buckets.booked.len();
            let sold_count = buckets.sold.len();
            let total_count = booked_count + sold_count;
            if total_count == 0 {
                return None;
            }
            Some(SalesPersonStats {
                sales_person,
                booked_count,
                sold_count,
                total_count,
            })
        })
        .collect();

    stats.sort_by(|a, b| {
        b.total_count
            .cmp(&a.total_count)
            .then_with(|| a.sales_person.cmp(&b.sales_person))
    });
    stats
}

// A deal is "booked" (not yet closed) for exactly these statuses; everything
// received-advance-shaped goes through the classifier's predicate.
fn is_booked_status(status: &str) -> bool {
    status == "booked" || status == "partial payment" || is_received_advance(status)
}
