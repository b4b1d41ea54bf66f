//! QSO record, contest exchange variants, and the QSO line codec.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    error::{CabrilloError, CabrilloResult},
    freq::{self, Hertz},
    schema::{FREQUENCY_WIDTH, MODE_WIDTH, SchemaKind, Slot, SlotSpec},
};

/// Line prefix that marks a QSO record.
pub const QSO_MARKER: &str = "QSO:";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H%M";

/// One logged contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QsoRecord {
    /// Frequency in Hz.
    pub frequency_hz: Hertz,
    /// Mode code, e.g. `PH` or `CW`.
    pub mode: String,
    /// UTC date and time, minute resolution.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    /// Contest-specific exchange.
    #[serde(default)]
    pub exchange: Option<Exchange>,
}

impl QsoRecord {
    /// Builds a complete record.
    pub fn new(
        frequency_hz: Hertz,
        mode: impl Into<String>,
        timestamp: NaiveDateTime,
        exchange: Exchange,
    ) -> Self {
        Self {
            frequency_hz,
            mode: mode.into(),
            timestamp: Some(timestamp),
            exchange: Some(exchange),
        }
    }
}

/// Sent side of a DX-style exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DxSent {
    /// Own callsign.
    pub callsign: Option<String>,
    /// Signal report sent.
    pub rst: Option<String>,
    /// Exchange sent.
    pub exchange: Option<String>,
}

/// Received side of a DX-style exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DxReceived {
    /// Worked station callsign.
    pub callsign: Option<String>,
    /// Signal report received.
    pub rst: Option<String>,
    /// Exchange received.
    pub exchange: Option<String>,
    /// Transmitter that made the contact.
    pub transmitter_id: Option<String>,
}

/// Either side of a Sweepstakes exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepstakesSide {
    /// Station callsign.
    pub callsign: Option<String>,
    /// Serial number.
    pub serial_number: Option<String>,
    /// Precedence letter.
    pub precedence: Option<String>,
    /// Check.
    pub check: Option<String>,
    /// ARRL section.
    pub section: Option<String>,
}

/// Exchange tagged by the contest's schema kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exchange {
    /// DX-style layout.
    Dx {
        /// What this station sent.
        sent: DxSent,
        /// What this station received.
        received: DxReceived,
    },
    /// Sweepstakes layout.
    Sweepstakes {
        /// What this station sent.
        sent: SweepstakesSide,
        /// What this station received.
        received: SweepstakesSide,
    },
}

/// Slot-addressed access to one side of an exchange.
pub trait ExchangeSide {
    /// Storage for `slot`, or `None` when this side has no such slot.
    fn field(&self, slot: Slot) -> Option<&Option<String>>;
    /// Mutable storage for `slot`, or `None` when this side has no such slot.
    fn field_mut(&mut self, slot: Slot) -> Option<&mut Option<String>>;

    /// Value held in `slot`.
    fn slot(&self, slot: Slot) -> Option<&str> {
        self.field(slot).and_then(|v| v.as_deref())
    }

    /// Stores `value` in `slot`; returns false when this side has no such slot.
    fn set(&mut self, slot: Slot, value: Option<String>) -> bool {
        match self.field_mut(slot) {
            Some(field) => {
                *field = value;
                true
            }
            None => false,
        }
    }
}

impl ExchangeSide for DxSent {
    fn field(&self, slot: Slot) -> Option<&Option<String>> {
        match slot {
            Slot::Callsign => Some(&self.callsign),
            Slot::Rst => Some(&self.rst),
            Slot::Exchange => Some(&self.exchange),
            _ => None,
        }
    }

    fn field_mut(&mut self, slot: Slot) -> Option<&mut Option<String>> {
        match slot {
            Slot::Callsign => Some(&mut self.callsign),
            Slot::Rst => Some(&mut self.rst),
            Slot::Exchange => Some(&mut self.exchange),
            _ => None,
        }
    }
}

impl ExchangeSide for DxReceived {
    fn field(&self, slot: Slot) -> Option<&Option<String>> {
        match slot {
            Slot::Callsign => Some(&self.callsign),
            Slot::Rst => Some(&self.rst),
            Slot::Exchange => Some(&self.exchange),
            Slot::TransmitterId => Some(&self.transmitter_id),
            _ => None,
        }
    }

    fn field_mut(&mut self, slot: Slot) -> Option<&mut Option<String>> {
        match slot {
            Slot::Callsign => Some(&mut self.callsign),
            Slot::Rst => Some(&mut self.rst),
            Slot::Exchange => Some(&mut self.exchange),
            Slot::TransmitterId => Some(&mut self.transmitter_id),
            _ => None,
        }
    }
}

impl ExchangeSide for SweepstakesSide {
    fn field(&self, slot: Slot) -> Option<&Option<String>> {
        match slot {
            Slot::Callsign => Some(&self.callsign),
            Slot::SerialNumber => Some(&self.serial_number),
            Slot::Precedence => Some(&self.precedence),
            Slot::Check => Some(&self.check),
            Slot::Section => Some(&self.section),
            _ => None,
        }
    }

    fn field_mut(&mut self, slot: Slot) -> Option<&mut Option<String>> {
        match slot {
            Slot::Callsign => Some(&mut self.callsign),
            Slot::SerialNumber => Some(&mut self.serial_number),
            Slot::Precedence => Some(&mut self.precedence),
            Slot::Check => Some(&mut self.check),
            Slot::Section => Some(&mut self.section),
            _ => None,
        }
    }
}

impl Exchange {
    /// An exchange of `kind` with every slot absent.
    pub fn empty(kind: SchemaKind) -> Self {
        match kind {
            SchemaKind::Dx => Self::Dx {
                sent: DxSent::default(),
                received: DxReceived::default(),
            },
            SchemaKind::Sweepstakes => Self::Sweepstakes {
                sent: SweepstakesSide::default(),
                received: SweepstakesSide::default(),
            },
        }
    }

    /// Schema kind of this exchange.
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::Dx { .. } => SchemaKind::Dx,
            Self::Sweepstakes { .. } => SchemaKind::Sweepstakes,
        }
    }

    /// Sent and received sides.
    pub fn sides(&self) -> (&dyn ExchangeSide, &dyn ExchangeSide) {
        match self {
            Self::Dx { sent, received } => (sent as &dyn ExchangeSide, received as &dyn ExchangeSide),
            Self::Sweepstakes { sent, received } => {
                (sent as &dyn ExchangeSide, received as &dyn ExchangeSide)
            }
        }
    }

    /// Mutable sent and received sides.
    pub fn sides_mut(&mut self) -> (&mut dyn ExchangeSide, &mut dyn ExchangeSide) {
        match self {
            Self::Dx { sent, received } => {
                (sent as &mut dyn ExchangeSide, received as &mut dyn ExchangeSide)
            }
            Self::Sweepstakes { sent, received } => {
                (sent as &mut dyn ExchangeSide, received as &mut dyn ExchangeSide)
            }
        }
    }

    /// Own callsign.
    pub fn sent_callsign(&self) -> Option<&str> {
        self.sides().0.slot(Slot::Callsign)
    }

    /// Worked station callsign.
    pub fn received_callsign(&self) -> Option<&str> {
        self.sides().1.slot(Slot::Callsign)
    }
}

/// Decodes the body of a QSO line (text after [`QSO_MARKER`]).
///
/// Exchange tokens fill the schema's slots positionally; missing trailing
/// tokens leave slots absent and surplus tokens are ignored.
pub fn decode_qso(body: &str, kind: SchemaKind) -> CabrilloResult<QsoRecord> {
    let mut tokens = body.split_whitespace();

    let freq_token = tokens.next().unwrap_or_default();
    let frequency_hz = freq::parse_frequency(freq_token)
        .ok_or_else(|| CabrilloError::invalid("QSO frequency", freq_token))?;

    let mode = tokens
        .next()
        .ok_or_else(|| CabrilloError::invalid("QSO mode", ""))?
        .to_string();

    let date_token = tokens.next().unwrap_or_default();
    let date = NaiveDate::parse_from_str(date_token, DATE_FORMAT)
        .map_err(|_| CabrilloError::invalid("QSO date", date_token))?;
    let time_token = tokens.next().unwrap_or_default();
    let time = NaiveTime::parse_from_str(time_token, TIME_FORMAT)
        .map_err(|_| CabrilloError::invalid("QSO time", time_token))?;

    let spec = kind.spec();
    let mut exchange = Exchange::empty(kind);
    {
        let (sent, received) = exchange.sides_mut();
        for slot in spec.sent {
            sent.set(slot.slot, tokens.next().map(str::to_owned));
        }
        for slot in spec.received {
            received.set(slot.slot, tokens.next().map(str::to_owned));
        }
    }

    Ok(QsoRecord {
        frequency_hz,
        mode,
        timestamp: Some(NaiveDateTime::new(date, time)),
        exchange: Some(exchange),
    })
}

/// Encodes `qso` as a full QSO line using the layout of `kind`.
pub fn encode_qso(qso: &QsoRecord, kind: SchemaKind) -> CabrilloResult<String> {
    let mut columns = vec![
        pad(&freq::format_qso_frequency(qso.frequency_hz), FREQUENCY_WIDTH),
        pad(token("QSO mode", &qso.mode)?, MODE_WIDTH),
    ];

    let timestamp = qso.timestamp.ok_or(CabrilloError::Missing("qso time"))?;
    columns.push(timestamp.format(DATE_FORMAT).to_string());
    columns.push(timestamp.format(TIME_FORMAT).to_string());

    let exchange = qso
        .exchange
        .as_ref()
        .ok_or(CabrilloError::Missing("qso exchange"))?;
    if exchange.kind() != kind {
        return Err(CabrilloError::invalid("QSO exchange", exchange.kind().name()));
    }
    if exchange.sent_callsign().is_none() {
        return Err(CabrilloError::Missing("sent callsign"));
    }
    if exchange.received_callsign().is_none() {
        return Err(CabrilloError::Missing("received callsign"));
    }

    let spec = kind.spec();
    let (sent, received) = exchange.sides();
    let mut gap: Option<String> = None;
    for (side, label, slots) in [(sent, "sent", spec.sent), (received, "received", spec.received)] {
        for slot in slots {
            push_slot(&mut columns, &mut gap, side, label, slot)?;
        }
    }

    let line = format!("{QSO_MARKER} {}", columns.join(" "));
    Ok(line.trim_end().to_string())
}

fn push_slot(
    columns: &mut Vec<String>,
    gap: &mut Option<String>,
    side: &dyn ExchangeSide,
    label: &str,
    spec: &SlotSpec,
) -> CabrilloResult<()> {
    let key = format!("{label}.{}", spec.slot.name());
    match side.slot(spec.slot) {
        Some(value) => {
            // A value after an absent slot would be read back into the wrong position.
            if let Some(absent) = gap.take() {
                return Err(CabrilloError::invalid(absent, ""));
            }
            columns.push(pad(token(&key, value)?, spec.width));
        }
        None => {
            gap.get_or_insert(key);
        }
    }
    Ok(())
}

fn token<'a>(key: &str, value: &'a str) -> CabrilloResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(CabrilloError::invalid(key, value));
    }
    Ok(trimmed)
}

fn pad(value: &str, width: usize) -> String {
    format!("{value:<width$}")
}
