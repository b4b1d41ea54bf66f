//! Cabrillo 3.0 value lists for validated header fields.

use crate::{schema::schema_for, validate::Validator};

/// Allowed `CATEGORY-ASSISTED` values.
pub const CATEGORY_ASSISTED: &[&str] = &["ASSISTED", "NON-ASSISTED"];

/// Allowed `CATEGORY-BAND` values.
pub const CATEGORY_BAND: &[&str] = &[
    "ALL", "160M", "80M", "40M", "20M", "15M", "10M", "6M", "4M", "2M", "222", "432", "902",
    "1.2G", "2.3G", "3.4G", "5.7G", "10G", "24G", "47G", "75G", "122G", "134G", "241G", "LIGHT",
    "VHF-3-BAND", "VHF-FM-ONLY",
];

/// Allowed `CATEGORY-MODE` values.
pub const CATEGORY_MODE: &[&str] = &["CW", "DIGI", "FM", "RTTY", "SSB", "MIXED"];

/// Allowed `CATEGORY-OPERATOR` values.
pub const CATEGORY_OPERATOR: &[&str] = &["SINGLE-OP", "MULTI-OP", "CHECKLOG"];

/// Allowed `CATEGORY-POWER` values.
pub const CATEGORY_POWER: &[&str] = &["HIGH", "LOW", "QRP"];

/// Allowed `CATEGORY-STATION` values.
pub const CATEGORY_STATION: &[&str] = &[
    "FIXED",
    "MOBILE",
    "PORTABLE",
    "ROVER",
    "ROVER-LIMITED",
    "ROVER-UNLIMITED",
    "EXPEDITION",
    "HQ",
    "SCHOOL",
];

/// Allowed `CATEGORY-TIME` values.
pub const CATEGORY_TIME: &[&str] = &["6-HOURS", "8-HOURS", "12-HOURS", "24-HOURS"];

/// Allowed `CATEGORY-TRANSMITTER` values.
pub const CATEGORY_TRANSMITTER: &[&str] = &["ONE", "TWO", "LIMITED", "UNLIMITED", "SWL"];

/// Allowed `CATEGORY-OVERLAY` values.
pub const CATEGORY_OVERLAY: &[&str] = &["CLASSIC", "ROOKIE", "TB-WIRES", "NOVICE-TECH", "OVER-50"];

/// Longest `NAME` value accepted.
pub const NAME_MAX_LEN: usize = 75;

/// Longest single `ADDRESS` line accepted.
pub const ADDRESS_MAX_LEN: usize = 45;

const CLAIMED_SCORE_PATTERN: &str = r"[0-9]+";
const OPERATORS_PATTERN: &str = r"@?[A-Z0-9/]+([ \t]+@?[A-Z0-9/]+)*";

pub(crate) fn one_of(values: &[&str]) -> Vec<Validator> {
    values.iter().map(|v| Validator::exact(*v)).collect()
}

pub(crate) fn contest() -> Vec<Validator> {
    vec![Validator::Check(is_known_contest)]
}

pub(crate) fn claimed_score() -> Vec<Validator> {
    compiled(CLAIMED_SCORE_PATTERN)
}

pub(crate) fn operators() -> Vec<Validator> {
    compiled(OPERATORS_PATTERN)
}

pub(crate) fn name() -> Vec<Validator> {
    vec![Validator::Check(|v| v.chars().count() <= NAME_MAX_LEN)]
}

pub(crate) fn address() -> Vec<Validator> {
    vec![Validator::Check(|v| v.chars().count() <= ADDRESS_MAX_LEN)]
}

/// Returns true when `contest` has a registered QSO layout.
pub fn is_known_contest(contest: &str) -> bool {
    schema_for(contest).is_some()
}

// Only called with the literal patterns above.
fn compiled(pattern: &str) -> Vec<Validator> {
    match Validator::pattern(pattern) {
        Ok(v) => vec![v],
        Err(err) => panic!("invalid built-in pattern {pattern:?}: {err}"),
    }
}
