//! Static underwriting lookup tables
//!
//! All tables are immutable maps constructed once at first use and safe for
//! concurrent reads. Lookups are keyed on trimmed, upper-cased text so that
//! intake casing differences never change a rating.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Normalizes free-text keys for table lookup
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Occupation rating factors
///
/// Unlisted occupations rate at 1.00.
static OCCUPATION_FACTORS: Lazy<HashMap<&'static str, Decimal>> = Lazy::new(|| {
    HashMap::from([
        // Low-risk professions
        ("ENGINEER", dec!(1.00)),
        ("SOFTWARE ENGINEER", dec!(1.00)),
        ("TEACHER", dec!(1.00)),
        ("ACCOUNTANT", dec!(1.00)),
        ("NURSE", dec!(1.00)),
        ("ATTORNEY", dec!(1.00)),
        // Public safety
        ("POLICE OFFICER", dec!(1.25)),
        ("FIREFIGHTER", dec!(1.25)),
        ("CORRECTIONS OFFICER", dec!(1.25)),
        // Aviation and construction
        ("PILOT", dec!(1.50)),
        ("COMMERCIAL PILOT", dec!(1.50)),
        ("CONSTRUCTION WORKER", dec!(1.50)),
        // High-hazard trades
        ("LOGGER", dec!(2.00)),
        ("MINER", dec!(2.00)),
        ("COMMERCIAL FISHERMAN", dec!(2.00)),
        ("OIL RIG WORKER", dec!(2.00)),
    ])
});

/// Geographic rating factors by state of residence
///
/// Unlisted states rate at 1.00.
static GEOGRAPHIC_FACTORS: Lazy<HashMap<&'static str, Decimal>> = Lazy::new(|| {
    HashMap::from([
        // High-cost states
        ("CA", dec!(1.05)),
        ("NY", dec!(1.05)),
        ("FL", dec!(1.10)),
        ("LA", dec!(1.10)),
        // Low-risk states
        ("UT", dec!(0.95)),
        ("MN", dec!(0.95)),
        ("CO", dec!(0.95)),
    ])
});

/// Additive risk score contributions for hazardous activities
///
/// Activities outside the table contribute no score but still count as
/// hazardous for the lifestyle rating factor.
static HAZARDOUS_ACTIVITY_SCORES: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("SKYDIVING", 30),
        ("ROCK CLIMBING", 20),
        ("MOTORCYCLE RACING", 40),
        ("SCUBA", 15),
        ("SCUBA DIVING", 15),
    ])
});

/// Base family history scores by condition
static FAMILY_CONDITION_SCORES: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("HEART DISEASE", 15),
        ("CANCER", 10),
        ("DIABETES", 8),
        ("STROKE", 12),
    ])
});

/// Base score for family history conditions not in the table
pub(crate) const FAMILY_CONDITION_DEFAULT_SCORE: i32 = 5;

/// Looks up the occupation rating factor
pub fn occupation_factor(occupation: &str) -> Decimal {
    OCCUPATION_FACTORS
        .get(normalize(occupation).as_str())
        .copied()
        .unwrap_or(dec!(1.00))
}

/// Looks up the geographic rating factor for a state
pub fn geographic_factor(state: &str) -> Decimal {
    GEOGRAPHIC_FACTORS
        .get(normalize(state).as_str())
        .copied()
        .unwrap_or(dec!(1.00))
}

/// Looks up the additive score for a hazardous activity
pub fn hazardous_activity_score(activity: &str) -> i32 {
    HAZARDOUS_ACTIVITY_SCORES
        .get(normalize(activity).as_str())
        .copied()
        .unwrap_or(0)
}

/// Looks up the base family history score for a condition
pub fn family_condition_score(condition: &str) -> i32 {
    FAMILY_CONDITION_SCORES
        .get(normalize(condition).as_str())
        .copied()
        .unwrap_or(FAMILY_CONDITION_DEFAULT_SCORE)
}
