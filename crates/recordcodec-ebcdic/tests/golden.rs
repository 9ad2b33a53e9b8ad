//! Golden fixture integration tests.
//!
//! Each record in `fixtures/ebcdic/reservations.json` is decoded against
//! `layouts/reservations.yaml` and every field is compared with the expected
//! text recorded next to the record bytes.

use recordcodec_core::{FieldDecoder, LineSpec};
use recordcodec_ebcdic::EbcdicDecoder;
use recordcodec_layout::LayoutRegistry;
use std::sync::Arc;

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// The fixtures live two levels above the crate root.
fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/ebcdic");
    p.push(name);
    p
}

/// The layouts live two levels above the crate root.
fn layout_path(rel: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../layouts");
    p.push(rel);
    p
}

fn load_fixture() -> serde_json::Value {
    let text = std::fs::read_to_string(fixture_path("reservations.json"))
        .expect("fixture not found");
    serde_json::from_str(&text).unwrap()
}

fn reservations_layout() -> Arc<LineSpec> {
    let registry = LayoutRegistry::new();
    registry
        .load_file(&layout_path("reservations.yaml"))
        .expect("failed to load reservations.yaml");
    registry
        .get("ReservationsData")
        .expect("layout not found in registry")
}

// ─── Reservations ─────────────────────────────────────────────────────────────

#[test]
fn reservations_golden() {
    let fixture = load_fixture();
    let layout = reservations_layout();
    assert_eq!(layout.line_size(), 73);
    assert_eq!(layout.field_count(), 8);

    let decoder = EbcdicDecoder::new();
    let records = fixture["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);

    for (i, rec) in records.iter().enumerate() {
        let bytes = hex::decode(rec["hex"].as_str().unwrap()).unwrap();
        assert_eq!(bytes.len(), 73, "record {i} length");

        let decoded = decoder
            .decode_record(&bytes, &layout)
            .unwrap_or_else(|e| panic!("record {i}: {e}"));
        assert!(
            !decoded.has_soft_failures(),
            "record {i} soft failures: {:?}",
            decoded.soft_failures().map(|f| f.name()).collect::<Vec<_>>()
        );

        let expected = rec["expectedFields"].as_object().unwrap();
        assert_eq!(decoded.len(), expected.len());
        for (name, value) in expected {
            assert_eq!(
                decoded.get(name).unwrap(),
                value.as_str().unwrap(),
                "record {i} field {name}"
            );
        }
    }
}

#[test]
fn first_record_spot_checks() {
    let fixture = load_fixture();
    let layout = reservations_layout();
    let bytes = hex::decode(fixture["records"][0]["hex"].as_str().unwrap()).unwrap();

    let decoded = EbcdicDecoder::new().decode_record(&bytes, &layout).unwrap();

    assert_eq!(&decoded["RESERVATION-NUMBER"], "04416365US2");
    assert_eq!(decoded[0].raw().len(), 11);
    assert_eq!(decoded.field("CALC-NET-AMOUNT").unwrap().raw_hex(), "00-00-AA-DB");
    assert_eq!(&decoded["CUSTOMER-NAME"], "KAY KENG,LOW");
    assert_eq!(&decoded["DATE-OF-BIRTH"], "1972-08-09");
    assert_eq!(
        decoded.values(),
        vec![
            "04416365US2",
            "2015-01-23",
            "437.39",
            "KAY KENG,LOW",
            "2015-01-28",
            "0.762728",
            "220.26",
            "1972-08-09",
        ]
    );
}

#[test]
fn binary_dump_matches_json_fixture() {
    let fixture = load_fixture();
    let dump = std::fs::read(fixture_path("reservations.dat")).expect("dump not found");
    let joined: Vec<u8> = fixture["records"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|r| hex::decode(r["hex"].as_str().unwrap()).unwrap())
        .collect();
    assert_eq!(dump, joined);
}
