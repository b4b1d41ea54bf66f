//! Cabrillo 3.0 contest log parsing and writing.
//!
//! # Examples
//!
//! Parsing and re-writing a log with [`codec::CabrilloCodec`]:
//! ```
//! use cabrillo::codec::CabrilloCodec;
//!
//! let text = "\
//! START-OF-LOG: 3.0
//! CONTEST: NEQP
//! CALLSIGN: N8SQL
//! QSO: 14325 PH 2012-02-11 0102 N8SQL 59 001 KG4SGP 59 HARCT
//! END-OF-LOG:
//! ";
//!
//! let codec = CabrilloCodec::strict();
//! let log = codec.parse(text).expect("parse");
//! assert_eq!(log.qsos[0].frequency_hz, 14_325_000);
//!
//! let out = codec.to_text(&log).expect("write");
//! assert!(out.contains(
//!     "QSO: 14325 PH 2012-02-11 0102 N8SQL         59  001    KG4SGP        59  HARCT"
//! ));
//! assert!(out.ends_with("END-OF-LOG:\n"));
//! ```
//!
//! Building a document from field identifiers:
//! ```
//! use cabrillo::{codec::CabrilloCodec, document::LogDocument};
//! use serde_json::json;
//!
//! let log = LogDocument::from_value(json!({
//!     "contest": "ARRL-SS-CW",
//!     "callsign": "W1AW",
//!     "soapbox": ["First line.", "Second line."],
//! }))
//! .expect("document");
//!
//! let text = CabrilloCodec::default().to_text(&log).expect("write");
//! assert!(text.starts_with("START-OF-LOG: 3.0\n"));
//! ```
#![deny(missing_docs)]

/// Parse/write orchestration and codec configuration.
pub mod codec;
/// Cabrillo 3.0 value lists for validated header fields.
pub mod contest;
/// Log document model.
pub mod document;
/// Error type.
pub mod error;
/// Frequency text forms.
pub mod freq;
/// QSO records, exchanges and the QSO line codec.
pub mod qso;
/// Header line-key registry.
pub mod registry;
/// Contest identifier to QSO layout dispatch.
pub mod schema;
/// Header value validators.
pub mod validate;

pub use codec::{CabrilloCodec, CodecConfig};
pub use document::LogDocument;
pub use error::{CabrilloError, CabrilloResult, ErrorKind};
pub use qso::{Exchange, QsoRecord};
pub use schema::SchemaKind;
