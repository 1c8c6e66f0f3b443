// src/domain/status.rs

use lazy_static::lazy_static;
use std::collections::HashSet;

/// The canonical bucket a free-text status string normalizes to.
///
/// Source sheets carry statuses typed by hand, so classification has to
/// swallow casing, stray whitespace and the misspellings that actually occur
/// in the data. It is total: anything unrecognized lands in `Other`, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Available,
    Booked,
    Sold,
    ReceivedFull,
    ReceivedAdv,
    Invoiced,
    Unreceived,
    Other,
}

impl StatusClass {
    /// Display label, also the value filter selections match against.
    pub fn label(&self) -> &'static str {
        match self {
            StatusClass::Available => "Available",
            StatusClass::Booked => "Booked",
            StatusClass::Sold => "Sold",
            StatusClass::ReceivedFull => "Received Full",
            StatusClass::ReceivedAdv => "Received ADV",
            StatusClass::Invoiced => "Invoiced",
            StatusClass::Unreceived => "UNRECEIVED",
            StatusClass::Other => "Other",
        }
    }
}

lazy_static! {
    static ref AVAILABLE_ALIASES: HashSet<&'static str> =
        ["available", "availabe", "availble", "avaliable", "avilable"]
            .into_iter()
            .collect();
    static ref BOOKED_ALIASES: HashSet<&'static str> =
        ["booked", "bookd", "boked", "bokked"].into_iter().collect();
    static ref SOLD_ALIASES: HashSet<&'static str> =
        ["sold", "soldd", "sold out"].into_iter().collect();
    static ref RECEIVED_FULL_ALIASES: HashSet<&'static str> =
        ["received full", "recieved full", "received ful", "full payment"]
            .into_iter()
            .collect();
    static ref RECEIVED_ADV_ALIASES: HashSet<&'static str> = [
        "received advance",
        "recieved advance",
        "received advanse",
        "recived advance",
        "received adv",
        "recieved adv",
    ]
    .into_iter()
    .collect();
    static ref INVOICED_ALIASES: HashSet<&'static str> =
        ["invoiced", "invoice", "invioced", "invoised"].into_iter().collect();
}

/// True when the status is a "received advance" variant (known misspellings
/// included, plus anything containing both "received" and "adv").
///
/// Call sites that need the booked/ADV split use this predicate instead of
/// re-deriving the substring rules.
pub fn is_received_advance(raw: &str) -> bool {
    let s = raw.trim().to_lowercase();
    RECEIVED_ADV_ALIASES.contains(s.as_str()) || (s.contains("received") && s.contains("adv"))
}

/// Coarse classification: received-advance variants are grouped under
/// `Booked`, which is what the table badges and the report ordering want.
pub fn classify(raw: &str) -> StatusClass {
    classify_impl(raw, true)
}

/// Fine classification: received-advance variants come back as their own
/// `ReceivedAdv` class instead of being folded into `Booked`. Everything
/// else agrees with `classify`.
pub fn classify_fine(raw: &str) -> StatusClass {
    classify_impl(raw, false)
}

// First match wins: Unreceived > Available > Booked > ReceivedFull > Sold >
// ReceivedAdv > Invoiced > Other. A status is not expected to match two
// groups, but if one does this order decides.
fn classify_impl(raw: &str, adv_as_booked: bool) -> StatusClass {
    let trimmed = raw.trim();
    // Exact literal, case-sensitive: "UNRECEIVED" is a status value the KSA
    // parser writes, not a free-text pattern. "unreceived" falls through.
    if trimmed == "UNRECEIVED" {
        return StatusClass::Unreceived;
    }
    let s = trimmed.to_lowercase();
    if s.is_empty() {
        return StatusClass::Other;
    }
    let adv = RECEIVED_ADV_ALIASES.contains(s.as_str())
        || (s.contains("received") && s.contains("adv"));
    if AVAILABLE_ALIASES.contains(s.as_str()) || s.contains("available") {
        return StatusClass::Available;
    }
    if BOOKED_ALIASES.contains(s.as_str()) || s.contains("booked") || (adv_as_booked && adv) {
        return StatusClass::Booked;
    }
    if RECEIVED_FULL_ALIASES.contains(s.as_str())
        || (s.contains("received") && s.contains("full"))
    {
        return StatusClass::ReceivedFull;
    }
    if SOLD_ALIASES.contains(s.as_str()) || s.contains("sold") {
        return StatusClass::Sold;
    }
    if adv {
        return StatusClass::ReceivedAdv;
    }
    if INVOICED_ALIASES.contains(s.as_str()) || s.contains("invoic") {
        return StatusClass::Invoiced;
    }
    StatusClass::Other
}
