use beaconparse_core::{DetectedType, ParseError, ParsedPacket, decode_scan_response};

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn scan_response_with_all_fields() {
    let buffer = hex("080961626364656667020A040A160DD061626364040264");
    let packet = decode_scan_response(&buffer).unwrap().unwrap();

    assert_eq!(packet.detected_type(), DetectedType::KontaktScanResponse);
    let ParsedPacket::KontaktScanResponse(response) = packet else {
        panic!("expected scan-response record");
    };
    assert_eq!(response.name.as_deref(), Some("abcdefg"));
    assert_eq!(response.tx_power, Some(4));
    let identifier = response.identifier.expect("identifier block");
    assert_eq!(identifier.unique_id, "abcd");
    assert_eq!(identifier.firmware, "4.2");
    assert_eq!(identifier.battery_level, 100);
}

#[test]
fn truncated_identifier_section_is_ignored_without_error() {
    let buffer = hex("080961626364656667020A0409160DD0616263640402");
    let packet = decode_scan_response(&buffer).unwrap().unwrap();

    let ParsedPacket::KontaktScanResponse(response) = packet else {
        panic!("expected scan-response record");
    };
    assert_eq!(response.name.as_deref(), Some("abcdefg"));
    assert_eq!(response.tx_power, Some(4));
    assert!(response.identifier.is_none());
}

#[test]
fn name_alone_commits_the_record() {
    let buffer = hex("080961626364656667");
    let packet = decode_scan_response(&buffer).unwrap().unwrap();

    let ParsedPacket::KontaktScanResponse(response) = packet else {
        panic!("expected scan-response record");
    };
    assert_eq!(response.name.as_deref(), Some("abcdefg"));
    assert!(response.tx_power.is_none());
    assert!(response.identifier.is_none());
}

#[test]
fn no_recognized_field_stays_unknown() {
    // Flags plus foreign service data complete without error and no record.
    let buffer = hex("02010604160F1864");
    assert!(decode_scan_response(&buffer).unwrap().is_none());
}

#[test]
fn scanner_truncation_still_fails_scan_responses() {
    let buffer = hex("0509616263");
    let err = decode_scan_response(&buffer).unwrap_err();
    assert!(matches!(err, ParseError::TruncatedStructure { .. }));
}

#[test]
fn fresh_parsers_over_the_same_buffer_agree() {
    let buffer = hex("080961626364656667020A040A160DD061626364040264");
    let first = decode_scan_response(&buffer).unwrap();
    let second = decode_scan_response(&buffer).unwrap();
    assert_eq!(first, second);
}
