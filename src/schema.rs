//! Contest identifier to QSO layout dispatch.
//!
//! Every contest maps to exactly one [`SchemaKind`]. A kind is described by a
//! [`ContestSchemaSpec`]: the ordered exchange slots for the sent and received
//! sides, each with the width it is padded to on write. The same slot lists
//! drive both parsing and writing of QSO lines.

use std::sync::LazyLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Reserved width of the frequency column.
pub const FREQUENCY_WIDTH: usize = 5;
/// Reserved width of the mode column.
pub const MODE_WIDTH: usize = 2;
/// Reserved width of a callsign slot.
pub const CALLSIGN_WIDTH: usize = 13;
/// Reserved width of a free-text exchange slot.
pub const EXCHANGE_WIDTH: usize = 6;
/// Reserved width of a signal report slot.
pub const RST_WIDTH: usize = 3;

/// Closed set of QSO layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// Callsign, signal report and free-text exchange on both sides.
    Dx,
    /// ARRL Sweepstakes serial/precedence/check/section exchange.
    Sweepstakes,
}

/// Named position within one side of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Station callsign.
    Callsign,
    /// Signal report.
    Rst,
    /// Free-text exchange.
    Exchange,
    /// Transmitter id for multi-transmitter entries.
    TransmitterId,
    /// Sweepstakes serial number.
    SerialNumber,
    /// Sweepstakes precedence letter.
    Precedence,
    /// Sweepstakes check (year first licensed).
    Check,
    /// ARRL section.
    Section,
}

impl Slot {
    /// Name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Callsign => "callsign",
            Self::Rst => "rst",
            Self::Exchange => "exchange",
            Self::TransmitterId => "transmitter_id",
            Self::SerialNumber => "serial_number",
            Self::Precedence => "precedence",
            Self::Check => "check",
            Self::Section => "section",
        }
    }
}

/// A slot together with its write width; zero means unpadded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    /// Slot filled by the token at this position.
    pub slot: Slot,
    /// Left-justified width on write.
    pub width: usize,
}

const fn slot(slot: Slot, width: usize) -> SlotSpec {
    SlotSpec { slot, width }
}

/// Token layout of one QSO schema kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContestSchemaSpec {
    /// Kind described by this spec.
    pub kind: SchemaKind,
    /// Sent-side slots in wire order.
    pub sent: &'static [SlotSpec],
    /// Received-side slots in wire order.
    pub received: &'static [SlotSpec],
}

impl ContestSchemaSpec {
    /// Total number of exchange tokens a complete line carries.
    pub fn token_count(&self) -> usize {
        self.sent.len() + self.received.len()
    }
}

static DX: ContestSchemaSpec = ContestSchemaSpec {
    kind: SchemaKind::Dx,
    sent: &[
        slot(Slot::Callsign, CALLSIGN_WIDTH),
        slot(Slot::Rst, RST_WIDTH),
        slot(Slot::Exchange, EXCHANGE_WIDTH),
    ],
    received: &[
        slot(Slot::Callsign, CALLSIGN_WIDTH),
        slot(Slot::Rst, RST_WIDTH),
        slot(Slot::Exchange, EXCHANGE_WIDTH),
        slot(Slot::TransmitterId, 0),
    ],
};

static SWEEPSTAKES: ContestSchemaSpec = ContestSchemaSpec {
    kind: SchemaKind::Sweepstakes,
    sent: &[
        slot(Slot::Callsign, CALLSIGN_WIDTH),
        slot(Slot::SerialNumber, 0),
        slot(Slot::Precedence, 0),
        slot(Slot::Check, 0),
        slot(Slot::Section, 0),
    ],
    received: &[
        slot(Slot::Callsign, CALLSIGN_WIDTH),
        slot(Slot::SerialNumber, 0),
        slot(Slot::Precedence, 0),
        slot(Slot::Check, 0),
        slot(Slot::Section, 0),
    ],
};

impl SchemaKind {
    /// Short name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dx => "dx",
            Self::Sweepstakes => "sweepstakes",
        }
    }

    /// Returns the slot layout for this kind.
    pub fn spec(self) -> &'static ContestSchemaSpec {
        match self {
            Self::Dx => &DX,
            Self::Sweepstakes => &SWEEPSTAKES,
        }
    }
}

/// Contest identifiers and the layout each one uses, in declaration order.
pub const CONTEST_SCHEMAS: &[(&str, SchemaKind)] = &[
    ("CQ-160-CW", SchemaKind::Dx),
    ("CQ-160-SSB", SchemaKind::Dx),
    ("CQ-WPX-RTTY", SchemaKind::Dx),
    ("CQ-WPX-CW", SchemaKind::Dx),
    ("CQ-WPX-SSB", SchemaKind::Dx),
    ("CQ-WW-RTTY", SchemaKind::Dx),
    ("CQ-WW-CW", SchemaKind::Dx),
    ("CQ-WW-SSB", SchemaKind::Dx),
    ("ARRL-DX-CW", SchemaKind::Dx),
    ("ARRL-DX-SSB", SchemaKind::Dx),
    ("IARU-HF", SchemaKind::Dx),
    ("ARRL-10", SchemaKind::Dx),
    ("ARRL-160", SchemaKind::Dx),
    ("JIDX-CW", SchemaKind::Dx),
    ("JIDX-SSB", SchemaKind::Dx),
    ("STEW-PERRY", SchemaKind::Dx),
    ("OCEANIA-DX-CW", SchemaKind::Dx),
    ("OCEANIA-DX-SSB", SchemaKind::Dx),
    ("AP-SPRINT", SchemaKind::Dx),
    ("NEQP", SchemaKind::Dx),
    ("ARRL-FIELD-DAY", SchemaKind::Dx),
    ("ARRL-SS-CW", SchemaKind::Sweepstakes),
    ("ARRL-SS-SSB", SchemaKind::Sweepstakes),
];

static BY_CONTEST: LazyLock<HashMap<&'static str, SchemaKind>> =
    LazyLock::new(|| CONTEST_SCHEMAS.iter().copied().collect());

/// Looks up the QSO layout for a contest identifier (exact, case-sensitive).
pub fn schema_for(contest: &str) -> Option<SchemaKind> {
    BY_CONTEST.get(contest).copied()
}
