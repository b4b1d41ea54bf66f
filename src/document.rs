//! In-memory contest log.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::CabrilloResult,
    qso::QsoRecord,
    registry::{CABRILLO_VERSION, HeaderField},
};

/// A private `X-` header line carried through parse and write unchanged.
///
/// Writing rejects keys outside the `X-` namespace, keys holding `:` or
/// whitespace, and values spanning more than one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionLine {
    /// Line key, including the `X-` prefix.
    pub key: String,
    /// Line value.
    pub value: String,
}

/// One contest log: header fields, extension lines and QSO records.
///
/// Field names double as the identifiers accepted by
/// [`LogDocument::from_value`]; identifiers outside this set are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogDocument {
    /// `START-OF-LOG`.
    ///
    /// `None` is written as `3.0`, so it reads back as `Some("3.0")`.
    pub version: Option<String>,
    /// `CREATED-BY`.
    pub created_by: Option<String>,
    /// `CONTEST`.
    pub contest: Option<String>,
    /// `CALLSIGN`.
    pub callsign: Option<String>,
    /// `CATEGORY-ASSISTED`.
    pub category_assisted: Option<String>,
    /// `CATEGORY-BAND`.
    pub category_band: Option<String>,
    /// `CATEGORY-MODE`.
    pub category_mode: Option<String>,
    /// `CATEGORY-OPERATOR`.
    pub category_operator: Option<String>,
    /// `CATEGORY-POWER`.
    pub category_power: Option<String>,
    /// `CATEGORY-STATION`.
    pub category_station: Option<String>,
    /// `CATEGORY-TIME`.
    pub category_time: Option<String>,
    /// `CATEGORY-TRANSMITTER`.
    pub category_transmitter: Option<String>,
    /// `CATEGORY-OVERLAY`.
    pub category_overlay: Option<String>,
    /// `CLAIMED-SCORE`.
    pub claimed_score: Option<String>,
    /// `CLUB`.
    pub club: Option<String>,
    /// `EMAIL`.
    pub email: Option<String>,
    /// `NAME`.
    pub name: Option<String>,
    /// `LOCATION`.
    pub location: Option<String>,
    /// `OPERATORS` lines in file order.
    pub operators: Vec<String>,
    /// `ADDRESS` lines in file order.
    pub address: Vec<String>,
    /// `ADDRESS-CITY`.
    pub address_city: Option<String>,
    /// `ADDRESS-STATE-PROVINCE`.
    pub address_state_province: Option<String>,
    /// `ADDRESS-POSTALCODE`.
    pub address_postalcode: Option<String>,
    /// `ADDRESS-COUNTRY`.
    pub address_country: Option<String>,
    /// `SOAPBOX` lines in file order.
    pub soapbox: Vec<String>,
    /// `OFFTIME`.
    pub offtime: Option<String>,
    /// `X-` lines in file order.
    pub extensions: Vec<ExtensionLine>,
    /// QSO records in file order.
    pub qsos: Vec<QsoRecord>,
}

impl Default for LogDocument {
    fn default() -> Self {
        Self {
            version: Some(CABRILLO_VERSION.to_string()),
            created_by: None,
            contest: None,
            callsign: None,
            category_assisted: None,
            category_band: None,
            category_mode: None,
            category_operator: None,
            category_power: None,
            category_station: None,
            category_time: None,
            category_transmitter: None,
            category_overlay: None,
            claimed_score: None,
            club: None,
            email: None,
            name: None,
            location: None,
            operators: Vec::new(),
            address: Vec::new(),
            address_city: None,
            address_state_province: None,
            address_postalcode: None,
            address_country: None,
            soapbox: Vec::new(),
            offtime: None,
            extensions: Vec::new(),
            qsos: Vec::new(),
        }
    }
}

/// Borrowed view of one header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    /// Single-valued field.
    Scalar(Option<&'a str>),
    /// Multi-occurrence field.
    Multi(&'a [String]),
}

/// Mutable view of one header field.
#[derive(Debug)]
pub enum FieldMut<'a> {
    /// Single-valued field.
    Scalar(&'a mut Option<String>),
    /// Multi-occurrence field.
    Multi(&'a mut Vec<String>),
}

impl LogDocument {
    /// Empty document declaring the current Cabrillo version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from a JSON object keyed by field identifier.
    ///
    /// Missing identifiers take their defaults; `qsos` holds QSO records.
    pub fn from_value(value: Value) -> CabrilloResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Builds a document from JSON text; see [`LogDocument::from_value`].
    pub fn from_json(text: &str) -> CabrilloResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads `field`.
    pub fn field(&self, field: HeaderField) -> FieldRef<'_> {
        use HeaderField::*;
        let scalar = match field {
            Version => &self.version,
            CreatedBy => &self.created_by,
            Contest => &self.contest,
            Callsign => &self.callsign,
            CategoryAssisted => &self.category_assisted,
            CategoryBand => &self.category_band,
            CategoryMode => &self.category_mode,
            CategoryOperator => &self.category_operator,
            CategoryPower => &self.category_power,
            CategoryStation => &self.category_station,
            CategoryTime => &self.category_time,
            CategoryTransmitter => &self.category_transmitter,
            CategoryOverlay => &self.category_overlay,
            ClaimedScore => &self.claimed_score,
            Club => &self.club,
            Email => &self.email,
            Name => &self.name,
            Location => &self.location,
            AddressCity => &self.address_city,
            AddressStateProvince => &self.address_state_province,
            AddressPostalcode => &self.address_postalcode,
            AddressCountry => &self.address_country,
            Offtime => &self.offtime,
            Operators => return FieldRef::Multi(&self.operators),
            Address => return FieldRef::Multi(&self.address),
            Soapbox => return FieldRef::Multi(&self.soapbox),
        };
        FieldRef::Scalar(scalar.as_deref())
    }

    /// Mutable access to `field`.
    pub fn field_mut(&mut self, field: HeaderField) -> FieldMut<'_> {
        use HeaderField::*;
        let scalar = match field {
            Version => &mut self.version,
            CreatedBy => &mut self.created_by,
            Contest => &mut self.contest,
            Callsign => &mut self.callsign,
            CategoryAssisted => &mut self.category_assisted,
            CategoryBand => &mut self.category_band,
            CategoryMode => &mut self.category_mode,
            CategoryOperator => &mut self.category_operator,
            CategoryPower => &mut self.category_power,
            CategoryStation => &mut self.category_station,
            CategoryTime => &mut self.category_time,
            CategoryTransmitter => &mut self.category_transmitter,
            CategoryOverlay => &mut self.category_overlay,
            ClaimedScore => &mut self.claimed_score,
            Club => &mut self.club,
            Email => &mut self.email,
            Name => &mut self.name,
            Location => &mut self.location,
            AddressCity => &mut self.address_city,
            AddressStateProvince => &mut self.address_state_province,
            AddressPostalcode => &mut self.address_postalcode,
            AddressCountry => &mut self.address_country,
            Offtime => &mut self.offtime,
            Operators => return FieldMut::Multi(&mut self.operators),
            Address => return FieldMut::Multi(&mut self.address),
            Soapbox => return FieldMut::Multi(&mut self.soapbox),
        };
        FieldMut::Scalar(scalar)
    }

    /// Overwrites a scalar field or appends to a multi-occurrence field.
    pub fn assign(&mut self, field: HeaderField, value: impl Into<String>) {
        match self.field_mut(field) {
            FieldMut::Scalar(slot) => *slot = Some(value.into()),
            FieldMut::Multi(values) => values.push(value.into()),
        }
    }

    /// All values of `field`: zero or one for scalars, every line for sequences.
    pub fn values(&self, field: HeaderField) -> Vec<&str> {
        match self.field(field) {
            FieldRef::Scalar(value) => value.into_iter().collect(),
            FieldRef::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }
}
