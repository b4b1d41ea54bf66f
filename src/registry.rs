//! Header line-key registry.
//!
//! The table order is the canonical write order of header lines.

use std::sync::LazyLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{contest, validate::Validator};

/// Cabrillo specification version written when a document does not set one.
pub const CABRILLO_VERSION: &str = "3.0";

/// Identifier of every header field a [`crate::document::LogDocument`] carries.
///
/// Variants follow the registry's write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    /// `START-OF-LOG`.
    Version,
    /// `CREATED-BY`.
    CreatedBy,
    /// `CONTEST`.
    Contest,
    /// `CALLSIGN`.
    Callsign,
    /// `CATEGORY-ASSISTED`.
    CategoryAssisted,
    /// `CATEGORY-BAND`.
    CategoryBand,
    /// `CATEGORY-MODE`.
    CategoryMode,
    /// `CATEGORY-OPERATOR`.
    CategoryOperator,
    /// `CATEGORY-POWER`.
    CategoryPower,
    /// `CATEGORY-STATION`.
    CategoryStation,
    /// `CATEGORY-TIME`.
    CategoryTime,
    /// `CATEGORY-TRANSMITTER`.
    CategoryTransmitter,
    /// `CATEGORY-OVERLAY`.
    CategoryOverlay,
    /// `CLAIMED-SCORE`.
    ClaimedScore,
    /// `CLUB`.
    Club,
    /// `EMAIL`.
    Email,
    /// `NAME`.
    Name,
    /// `LOCATION`.
    Location,
    /// `OPERATORS`, multi-occurrence.
    Operators,
    /// `ADDRESS`, multi-occurrence.
    Address,
    /// `ADDRESS-CITY`.
    AddressCity,
    /// `ADDRESS-STATE-PROVINCE`.
    AddressStateProvince,
    /// `ADDRESS-POSTALCODE`.
    AddressPostalcode,
    /// `ADDRESS-COUNTRY`.
    AddressCountry,
    /// `SOAPBOX`, multi-occurrence.
    Soapbox,
    /// `OFFTIME`.
    Offtime,
}

impl HeaderField {
    /// Registry entry for this field.
    pub fn spec(self) -> &'static HeaderFieldSpec {
        // Variants are declared in table order.
        &HEADER_FIELDS[self as usize]
    }

    /// Line key this field is written under.
    pub fn line_key(self) -> &'static str {
        self.spec().line_key
    }
}

/// Registry entry binding a line key to a document field.
#[derive(Debug)]
pub struct HeaderFieldSpec {
    /// Line key as it appears before the colon.
    pub line_key: &'static str,
    /// Target document field.
    pub field: HeaderField,
    /// Disjunctive validator set; empty accepts anything.
    pub validators: Vec<Validator>,
    /// True when each line appends to a sequence.
    pub multi: bool,
}

fn entry(line_key: &'static str, field: HeaderField, validators: Vec<Validator>) -> HeaderFieldSpec {
    HeaderFieldSpec {
        line_key,
        field,
        validators,
        multi: false,
    }
}

fn multi(line_key: &'static str, field: HeaderField, validators: Vec<Validator>) -> HeaderFieldSpec {
    HeaderFieldSpec {
        multi: true,
        ..entry(line_key, field, validators)
    }
}

static HEADER_FIELDS: LazyLock<Vec<HeaderFieldSpec>> = LazyLock::new(|| {
    use HeaderField::*;
    vec![
        entry("START-OF-LOG", Version, vec![]),
        entry("CREATED-BY", CreatedBy, vec![]),
        entry("CONTEST", Contest, contest::contest()),
        entry("CALLSIGN", Callsign, vec![]),
        entry("CATEGORY-ASSISTED", CategoryAssisted, contest::one_of(contest::CATEGORY_ASSISTED)),
        entry("CATEGORY-BAND", CategoryBand, contest::one_of(contest::CATEGORY_BAND)),
        entry("CATEGORY-MODE", CategoryMode, contest::one_of(contest::CATEGORY_MODE)),
        entry("CATEGORY-OPERATOR", CategoryOperator, contest::one_of(contest::CATEGORY_OPERATOR)),
        entry("CATEGORY-POWER", CategoryPower, contest::one_of(contest::CATEGORY_POWER)),
        entry("CATEGORY-STATION", CategoryStation, contest::one_of(contest::CATEGORY_STATION)),
        entry("CATEGORY-TIME", CategoryTime, contest::one_of(contest::CATEGORY_TIME)),
        entry(
            "CATEGORY-TRANSMITTER",
            CategoryTransmitter,
            contest::one_of(contest::CATEGORY_TRANSMITTER),
        ),
        entry("CATEGORY-OVERLAY", CategoryOverlay, contest::one_of(contest::CATEGORY_OVERLAY)),
        entry("CLAIMED-SCORE", ClaimedScore, contest::claimed_score()),
        entry("CLUB", Club, vec![]),
        entry("EMAIL", Email, vec![]),
        entry("NAME", Name, contest::name()),
        entry("LOCATION", Location, vec![]),
        multi("OPERATORS", Operators, contest::operators()),
        multi("ADDRESS", Address, contest::address()),
        entry("ADDRESS-CITY", AddressCity, vec![]),
        entry("ADDRESS-STATE-PROVINCE", AddressStateProvince, vec![]),
        entry("ADDRESS-POSTALCODE", AddressPostalcode, vec![]),
        entry("ADDRESS-COUNTRY", AddressCountry, vec![]),
        multi("SOAPBOX", Soapbox, vec![]),
        entry("OFFTIME", Offtime, vec![]),
    ]
});

static BY_LINE_KEY: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    HEADER_FIELDS
        .iter()
        .enumerate()
        .map(|(idx, spec)| (spec.line_key, idx))
        .collect()
});

/// All header fields in canonical write order.
pub fn header_fields() -> &'static [HeaderFieldSpec] {
    &HEADER_FIELDS
}

/// Looks up a line key (exact, case-sensitive).
pub fn field_for(line_key: &str) -> Option<&'static HeaderFieldSpec> {
    BY_LINE_KEY.get(line_key).map(|idx| &HEADER_FIELDS[*idx])
}
