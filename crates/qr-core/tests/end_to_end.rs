//! End-to-end scenarios and invariant checks exercised through the public API only.

use qr_core::{ErrorCorrectionLevel, QrCode, QrOptions, Version};

fn options(error_level: ErrorCorrectionLevel) -> QrOptions {
    QrOptions {
        error_level,
        ..QrOptions::default()
    }
}

#[test]
fn numeric_payload_picks_the_smallest_fitting_version() {
    let qr = QrCode::encode_text("849", options(ErrorCorrectionLevel::Medium)).unwrap();
    assert_eq!(qr.version(), Version::new(1).unwrap());
    assert_eq!(qr.matrix().side(), 21);
}

#[test]
fn alphanumeric_payload_round_trips_through_encode_text() {
    let qr = QrCode::encode_text("ABC", options(ErrorCorrectionLevel::Low)).unwrap();
    assert_eq!(qr.version(), Version::new(1).unwrap());
}

#[test]
fn latin1_text_is_auto_detected_as_byte_mode() {
    let qr = QrCode::encode_text("abc", options(ErrorCorrectionLevel::Low)).unwrap();
    assert_eq!(qr.version(), Version::new(1).unwrap());
}

#[test]
fn non_latin1_text_falls_back_to_eci_utf8() {
    // "Ä点" has a codepoint above 0xFF, so the auto-detector must wrap it in
    // an ECI(26) + Byte(UTF-8) block rather than truncating it.
    let qr = QrCode::encode_text("\u{00C4}\u{70B9}", QrOptions::default()).unwrap();
    assert!(!qr.version().is_micro());
}

#[test]
fn micro_m1_numeric_symbol_has_eleven_by_eleven_side() {
    let qr = QrCode::encode_text(
        "12345",
        QrOptions {
            error_level: ErrorCorrectionLevel::Low,
            micro: true,
            boost_ecl: false,
            ..QrOptions::default()
        },
    )
    .unwrap();
    assert_eq!(qr.version(), Version::new(-1).unwrap());
    assert_eq!(qr.matrix().side(), 11);
}

#[test]
fn matrix_area_matches_side_formula_at_the_version_bounds() {
    for (version, expected_side) in [(1, 21), (40, 177), (-1, 11), (-4, 17)] {
        assert_eq!(Version::new(version).unwrap().side(), expected_side);
    }
}

#[test]
fn boosted_ecl_never_exceeds_the_pinned_version_capacity() {
    let qr = QrCode::encode_text(
        "HELLO WORLD",
        QrOptions {
            error_level: ErrorCorrectionLevel::Low,
            version: Some(Version::new(2).unwrap()),
            boost_ecl: true,
            ..QrOptions::default()
        },
    )
    .unwrap();
    assert_eq!(qr.version(), Version::new(2).unwrap());
    assert!(qr.error_correction_level() >= ErrorCorrectionLevel::Low);
}

#[test]
fn content_too_long_for_pinned_micro_version_is_rejected() {
    let result = QrCode::encode_text(
        &"1".repeat(50),
        QrOptions {
            error_level: ErrorCorrectionLevel::Low,
            version: Some(Version::new(-1).unwrap()),
            ..QrOptions::default()
        },
    );
    assert!(result.is_err());
}

#[test]
fn finder_pattern_center_and_separator_survive_masking() {
    let qr = QrCode::encode_text("the quick brown fox", QrOptions::default()).unwrap();
    assert!(qr.get_module(3, 3)); // finder center always dark
    assert!(!qr.get_module(7, 7)); // separator module, always light
}

#[test]
fn same_input_produces_byte_identical_matrices() {
    let a = QrCode::encode_text("repeatable", QrOptions::default()).unwrap();
    let b = QrCode::encode_text("repeatable", QrOptions::default()).unwrap();
    assert_eq!(a, b);
}
