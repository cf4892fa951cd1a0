//! Integration tests for reading SIF lines with the built-in layout.

use std::fs;

use proptest::prelude::*;
use sif_model::{ConversionConfig, FieldLayout, fields};
use sif_reader::{
    LineOutcome, LineRejection, ReadError, SifReader, decode_fields, decode_text, is_valid,
    parse_line,
};

fn block(layout: &FieldLayout, values: &[(&str, &str)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(layout.width());
    for field in layout.iter() {
        let value = values
            .iter()
            .find(|(name, _)| *name == field.name)
            .map_or("", |(_, value)| *value);
        let mut bytes = value.as_bytes().to_vec();
        bytes.resize(field.width, b' ');
        out.extend_from_slice(&bytes);
    }
    out
}

fn sif_line(
    config: &ConversionConfig,
    base: &[(&str, &str)],
    addresses: &[&[(&str, &str)]],
    note: &str,
) -> Vec<u8> {
    let mut line = block(&config.layout.base, base);
    line.push(b'0' + u8::try_from(addresses.len()).unwrap());
    for address in addresses {
        line.extend(block(&config.layout.address, address));
    }
    line.extend_from_slice(note.as_bytes());
    line
}

#[test]
fn parses_full_record_with_builtin_layout() {
    let config = ConversionConfig::builtin().unwrap();
    let line = sif_line(
        &config,
        &[
            (fields::PATRON_ID, "1001"),
            (fields::SURNAME, "Doe"),
            (fields::FIRST_NAME, "Jane"),
            (fields::PATRON_BARCODE_1, "21234000001"),
            (fields::BARCODE_STATUS_1, "1"),
            (fields::PATRON_EXPIRATION_DATE, "2026.06.30"),
        ],
        &[
            &[
                (fields::ADDRESS_TYPE, "1"),
                (fields::ADDRESS_LINE_1, "12 Main St"),
                (fields::CITY, "Springfield"),
                (fields::PHONE_PRIMARY, "(555) 123-4567"),
            ],
            &[
                (fields::ADDRESS_TYPE, "3"),
                (fields::ADDRESS_LINE_1, "jane@example.org"),
            ],
        ],
        "Prefers large print",
    );

    let LineOutcome::Record(record) = parse_line(&line, 1, &config.layout).unwrap() else {
        panic!("expected a record");
    };
    assert_eq!(record.patron_id(), "1001");
    assert_eq!(record.get(fields::SURNAME), "Doe");
    assert_eq!(record.get(fields::MIDDLE_NAME), "");
    assert_eq!(record.get(fields::PATRON_BARCODE_1), "21234000001");
    assert_eq!(record.addresses.len(), 2);
    assert_eq!(record.addresses[0].get(fields::CITY), "Springfield");
    assert_eq!(
        record.addresses[0].get(fields::PHONE_PRIMARY),
        "(555) 123-4567"
    );
    assert_eq!(
        record.addresses[1].get(fields::ADDRESS_LINE_1),
        "jane@example.org"
    );
    assert_eq!(record.note_text(), Some("Prefers large print"));
}

#[test]
fn reads_file_and_filters_invalid_lines() {
    let config = ConversionConfig::builtin().unwrap();
    let valid = sif_line(
        &config,
        &[(fields::PATRON_ID, "1")],
        &[&[(fields::ADDRESS_TYPE, "1")]],
        "",
    );
    let mut zero_count = valid.clone();
    zero_count[config.layout.address_count_offset()] = b'0';

    let mut contents = Vec::new();
    for line in [
        &valid[..],
        &b"too short"[..],
        &b""[..],
        &zero_count[..],
        &valid[..],
    ] {
        contents.extend_from_slice(line);
        contents.extend_from_slice(b"\r\n");
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patrons.sif");
    fs::write(&path, contents).unwrap();

    let mut records = 0;
    let mut rejections = Vec::new();
    for line in SifReader::open(&path).unwrap() {
        let line = line.unwrap();
        match parse_line(&line.bytes, line.number, &config.layout).unwrap() {
            LineOutcome::Record(_) => records += 1,
            LineOutcome::Rejected(rejection) => rejections.push(rejection),
            LineOutcome::Blank => {}
        }
    }
    assert_eq!(records, 2);
    assert_eq!(rejections.len(), 2);
    assert!(matches!(
        rejections[0],
        LineRejection::TooShort {
            line: 2,
            actual: 9,
            ..
        }
    ));
    assert!(matches!(
        rejections[1],
        LineRejection::InvalidAddressCount {
            line: 4,
            found: b'0'
        }
    ));
}

#[test]
fn address_count_bounds_decoded_blocks() {
    let config = ConversionConfig::builtin().unwrap();
    let postal: &[(&str, &str)] = &[(fields::ADDRESS_TYPE, "1")];
    let addresses = vec![postal; 9];
    let line = sif_line(&config, &[(fields::PATRON_ID, "9")], &addresses, "");
    let LineOutcome::Record(record) = parse_line(&line, 1, &config.layout).unwrap() else {
        panic!("expected a record");
    };
    assert_eq!(record.addresses.len(), 9);
    assert_eq!(record.note, None);
}

fn trailing_spaces(data: &[u8]) -> usize {
    data.iter().rev().take_while(|byte| **byte == b' ').count()
}

proptest! {
    #[test]
    fn decode_advances_by_layout_width(
        data in proptest::collection::vec(any::<u8>(), 0..1200),
        start in 0usize..1300,
    ) {
        let config = ConversionConfig::builtin().unwrap();
        match decode_fields(&config.layout.address, &data, start, 1) {
            Ok((values, end)) => {
                prop_assert_eq!(end, start + config.layout.address.width());
                prop_assert_eq!(values.len(), config.layout.address.len());
            }
            Err(err) => prop_assert!(matches!(err, ReadError::Encoding { line: 1, .. }), "unexpected error: {:?}", err),
        }
    }

    #[test]
    fn printable_latin1_always_decodes(
        data in proptest::collection::vec(0x20u8..=0xff, 0..200),
    ) {
        let text = decode_text(&data).unwrap();
        prop_assert_eq!(text.chars().count(), data.len() - trailing_spaces(&data));
    }

    #[test]
    fn short_lines_are_never_valid(
        data in proptest::collection::vec(any::<u8>(), 0..873),
    ) {
        let config = ConversionConfig::builtin().unwrap();
        prop_assert!(!is_valid(&data, 1, &config.layout));
    }
}
