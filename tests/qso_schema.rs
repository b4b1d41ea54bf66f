use chrono::{NaiveDate, NaiveDateTime};

use cabrillo::{
    codec::CabrilloCodec,
    document::LogDocument,
    error::{CabrilloError, ErrorKind},
    qso::{DxReceived, DxSent, Exchange, ExchangeSide, QsoRecord, SweepstakesSide, decode_qso, encode_qso},
    schema::{CONTEST_SCHEMAS, SchemaKind, Slot, schema_for},
};

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, 0))
        .expect("valid timestamp")
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn neqp_qso() -> QsoRecord {
    QsoRecord::new(
        14_325_000,
        "PH",
        at(2012, 2, 11, 1, 2),
        Exchange::Dx {
            sent: DxSent {
                callsign: some("N8SQL"),
                rst: some("59"),
                exchange: some("001"),
            },
            received: DxReceived {
                callsign: some("KG4SGP"),
                rst: some("59"),
                exchange: some("HARCT"),
                transmitter_id: None,
            },
        },
    )
}

#[test]
fn contest_table_dispatch() {
    assert_eq!(schema_for("NEQP"), Some(SchemaKind::Dx));
    assert_eq!(schema_for("CQ-WW-CW"), Some(SchemaKind::Dx));
    assert_eq!(schema_for("ARRL-SS-CW"), Some(SchemaKind::Sweepstakes));
    assert_eq!(schema_for("neqp"), None);
    assert_eq!(schema_for("MADE-UP"), None);
    assert_eq!(SchemaKind::Dx.spec().token_count(), 7);
    assert_eq!(SchemaKind::Sweepstakes.spec().token_count(), 10);
}

#[test]
fn every_schema_slot_has_storage() {
    for (contest, kind) in CONTEST_SCHEMAS {
        let spec = kind.spec();
        assert_eq!(spec.kind, *kind, "{contest}");
        assert_eq!(spec.sent[0].slot, Slot::Callsign);
        assert_eq!(spec.received[0].slot, Slot::Callsign);

        let mut exchange = Exchange::empty(*kind);
        let (sent, received) = exchange.sides_mut();
        for slot in spec.sent {
            assert!(sent.set(slot.slot, some("X")), "{contest} sent {slot:?}");
        }
        for slot in spec.received {
            assert!(received.set(slot.slot, some("X")), "{contest} received {slot:?}");
        }
    }
}

#[test]
fn neqp_line_parses_and_writes_back() {
    let text = "CONTEST: NEQP\nQSO: 14325 PH 2012-02-11 0102 N8SQL 59 001 KG4SGP 59 HARCT\n";
    let doc = CabrilloCodec::strict().parse(text).expect("parse");

    assert_eq!(doc.qsos, vec![neqp_qso()]);

    let out = CabrilloCodec::strict().to_text(&doc).expect("write");
    let qso_lines: Vec<_> = out.lines().filter(|l| l.starts_with("QSO:")).collect();
    assert_eq!(
        qso_lines,
        vec!["QSO: 14325 PH 2012-02-11 0102 N8SQL         59  001    KG4SGP        59  HARCT"]
    );
}

#[test]
fn transmitter_id_is_the_last_dx_token() {
    let qso = decode_qso(
        "7025 CW 2012-11-03 2101 W8UPD 599 05 K1ABC 599 05 1",
        SchemaKind::Dx,
    )
    .expect("decode");
    let exchange = qso.exchange.as_ref().expect("exchange");
    assert_eq!(exchange.sides().1.slot(Slot::TransmitterId), Some("1"));

    let line = encode_qso(&qso, SchemaKind::Dx).expect("encode");
    assert_eq!(
        line,
        "QSO: 7025  CW 2012-11-03 2101 W8UPD         599 05     K1ABC         599 05     1"
    );
}

#[test]
fn sweepstakes_line_parses_and_writes_back() {
    let text = "\
CONTEST: ARRL-SS-CW
QSO: 21042 CW 2012-11-03 2101 W8UPD 1 A 09 OH K1ABC 12 B 77 CT
";
    let doc = CabrilloCodec::strict().parse(text).expect("parse");
    assert_eq!(doc.qsos.len(), 1);
    assert_eq!(
        doc.qsos[0].exchange,
        Some(Exchange::Sweepstakes {
            sent: SweepstakesSide {
                callsign: some("W8UPD"),
                serial_number: some("1"),
                precedence: some("A"),
                check: some("09"),
                section: some("OH"),
            },
            received: SweepstakesSide {
                callsign: some("K1ABC"),
                serial_number: some("12"),
                precedence: some("B"),
                check: some("77"),
                section: some("CT"),
            },
        })
    );

    let out = CabrilloCodec::strict().to_text(&doc).expect("write");
    assert!(
        out.contains("QSO: 21042 CW 2012-11-03 2101 W8UPD         1 A 09 OH K1ABC         12 B 77 CT\n"),
        "{out}"
    );
}

#[test]
fn same_tokens_map_by_contest() {
    let body = "14025 CW 2012-02-11 0102 N8SQL 599 001 KG4SGP 599 HARCT 2";

    let dx = decode_qso(body, SchemaKind::Dx).expect("dx");
    let ss = decode_qso(body, SchemaKind::Sweepstakes).expect("ss");

    let dx_exchange = dx.exchange.expect("dx exchange");
    let ss_exchange = ss.exchange.expect("ss exchange");
    assert_eq!(dx_exchange.received_callsign(), Some("KG4SGP"));
    assert_eq!(ss_exchange.sent_callsign(), Some("N8SQL"));
    assert_eq!(ss_exchange.sides().0.slot(Slot::SerialNumber), Some("599"));
    assert_eq!(ss_exchange.sides().0.slot(Slot::Check), Some("KG4SGP"));
    assert_eq!(ss_exchange.sides().0.slot(Slot::Section), Some("599"));
    assert_eq!(ss_exchange.received_callsign(), Some("HARCT"));
    assert_eq!(ss_exchange.sides().1.slot(Slot::SerialNumber), Some("2"));
    assert_eq!(ss_exchange.sides().1.slot(Slot::Check), None);
}

#[test]
fn qso_before_contest_is_dropped() {
    let text = "\
QSO: 14325 PH 2012-02-11 0100 N8SQL 59 000 W1AW 59 SOMME
CONTEST: NEQP
QSO: 14325 PH 2012-02-11 0102 N8SQL 59 001 KG4SGP 59 HARCT
";
    let doc = CabrilloCodec::strict().parse(text).expect("parse");
    assert_eq!(doc.qsos, vec![neqp_qso()]);
}

#[test]
fn short_line_leaves_trailing_slots_absent() {
    let text = "CONTEST: NEQP\nQSO: 14325 PH 2012-02-11 0102 N8SQL 59 001 KG4SGP\n";
    let doc = CabrilloCodec::strict().parse(text).expect("parse");
    let exchange = doc.qsos[0].exchange.as_ref().expect("exchange");
    let (_, received) = exchange.sides();
    assert_eq!(received.slot(Slot::Callsign), Some("KG4SGP"));
    assert_eq!(received.slot(Slot::Rst), None);
    assert_eq!(received.slot(Slot::Exchange), None);

    let out = CabrilloCodec::strict().to_text(&doc).expect("write");
    assert!(out.contains("QSO: 14325 PH 2012-02-11 0102 N8SQL         59  001    KG4SGP\n"));
}

#[test]
fn dotted_frequency_is_normalized() {
    let qso = decode_qso("14.325 PH 2012-02-11 0102 N8SQL", SchemaKind::Dx).expect("decode");
    assert_eq!(qso.frequency_hz, 14_325_000);
}

#[test]
fn unreadable_qso_fields_fail_strict_and_skip_lenient() {
    let text = "\
CONTEST: NEQP
QSO: 14325 PH 2012-02-31 0102 N8SQL 59 001 KG4SGP 59 HARCT
QSO: 14325 PH 2012-02-11 0103 N8SQL 59 002 KD8LCV 59 NHNCT
";
    let err = CabrilloCodec::strict().parse(text).expect_err("bad date");
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert_eq!(err.line(), Some(2));
    assert!(err.to_string().contains("2012-02-31"));

    let doc = CabrilloCodec::lenient().parse(text).expect("lenient parse");
    assert_eq!(doc.qsos.len(), 1);
    assert_eq!(doc.qsos[0].timestamp, Some(at(2012, 2, 11, 1, 3)));
}

#[test]
fn write_requires_time_exchange_and_callsigns() {
    let mut qso = neqp_qso();
    qso.timestamp = None;
    assert!(matches!(
        encode_qso(&qso, SchemaKind::Dx),
        Err(CabrilloError::Missing("qso time"))
    ));

    let mut qso = neqp_qso();
    qso.exchange = None;
    assert!(matches!(
        encode_qso(&qso, SchemaKind::Dx),
        Err(CabrilloError::Missing("qso exchange"))
    ));

    let mut qso = neqp_qso();
    if let Some(exchange) = qso.exchange.as_mut() {
        exchange.sides_mut().0.set(Slot::Callsign, None);
    }
    assert!(matches!(
        encode_qso(&qso, SchemaKind::Dx),
        Err(CabrilloError::Missing("sent callsign"))
    ));

    let mut qso = neqp_qso();
    if let Some(exchange) = qso.exchange.as_mut() {
        exchange.sides_mut().1.set(Slot::Callsign, None);
    }
    assert!(matches!(
        encode_qso(&qso, SchemaKind::Dx),
        Err(CabrilloError::Missing("received callsign"))
    ));
}

#[test]
fn write_rejects_slots_that_would_not_read_back() {
    let mut gap = neqp_qso();
    if let Some(exchange) = gap.exchange.as_mut() {
        exchange.sides_mut().0.set(Slot::Rst, None);
    }
    match encode_qso(&gap, SchemaKind::Dx) {
        Err(CabrilloError::InvalidData { key, .. }) => assert_eq!(key, "sent.rst"),
        other => panic!("unexpected: {other:?}"),
    }

    let mut spaced = neqp_qso();
    if let Some(exchange) = spaced.exchange.as_mut() {
        exchange.sides_mut().1.set(Slot::Exchange, some("HAR CT"));
    }
    match encode_qso(&spaced, SchemaKind::Dx) {
        Err(CabrilloError::InvalidData { key, value }) => {
            assert_eq!(key, "received.exchange");
            assert_eq!(value, "HAR CT");
        }
        other => panic!("unexpected: {other:?}"),
    }

    match encode_qso(&neqp_qso(), SchemaKind::Sweepstakes) {
        Err(CabrilloError::InvalidData { key, value }) => {
            assert_eq!(key, "QSO exchange");
            assert_eq!(value, "dx");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn qso_write_needs_a_known_contest() {
    let mut doc = LogDocument::new();
    doc.qsos.push(neqp_qso());

    let err = CabrilloCodec::strict().to_text(&doc).expect_err("no contest");
    assert!(matches!(err, CabrilloError::Missing("contest")));

    let out = CabrilloCodec::lenient().to_text(&doc).expect("lenient write");
    assert_eq!(out, "START-OF-LOG: 3.0\nEND-OF-LOG:\n");
}

#[test]
fn lenient_write_omits_only_bad_qsos() {
    let mut doc = LogDocument::new();
    doc.contest = Some("NEQP".to_string());
    let mut bad = neqp_qso();
    bad.mode = String::new();
    doc.qsos = vec![bad, neqp_qso()];

    assert!(CabrilloCodec::strict().to_text(&doc).is_err());

    let out = CabrilloCodec::lenient().to_text(&doc).expect("lenient write");
    assert_eq!(out.lines().filter(|l| l.starts_with("QSO:")).count(), 1);
}

#[test]
fn fractional_khz_survives_round_trip() {
    let mut qso = neqp_qso();
    qso.frequency_hz = 14_325_500;
    let line = encode_qso(&qso, SchemaKind::Dx).expect("encode");
    assert!(line.starts_with("QSO: 14.325.500 PH "), "{line}");

    let body = line.strip_prefix("QSO:").expect("marker");
    assert_eq!(decode_qso(body, SchemaKind::Dx).expect("decode"), qso);
}
