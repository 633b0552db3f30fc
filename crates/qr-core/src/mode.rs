use crate::error::QrError;
use crate::version::Version;

/// The encoding mode of a block of payload data.
///
/// Micro QR does not transmit a 4-bit mode indicator; it uses version-dependent
/// sub-identifiers instead (see `micro_header()`). Micro QR does not support ECI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
    /// `inner` is always Byte in practice (transcoders are external collaborators
    /// that hand the core already-encoded octets), but the wire format itself is
    /// generic over any inner mode.
    Eci { assignment: u32 },
}

impl EncodingMode {
    /// The 4-bit mode indicator used on full-QR wire format.
    pub fn mode_bits(self) -> u32 {
        use EncodingMode::*;
        match self {
            Numeric => 0x1,
            Alphanumeric => 0x2,
            Byte => 0x4,
            Kanji => 0x8,
            Eci { .. } => 0x7,
        }
    }

    /// `(value, width)` of the Micro QR sub-mode indicator, or `None` for M1
    /// (which transmits no mode header at all) or for ECI (illegal on Micro).
    pub fn micro_header(self, version: Version) -> Option<(u32, u8)> {
        debug_assert!(version.is_micro());
        let width = version.micro_number() - 1;
        if width == 0 {
            return None;
        }
        let value = match self {
            EncodingMode::Numeric => 0,
            EncodingMode::Alphanumeric => 1,
            EncodingMode::Byte => 2,
            EncodingMode::Kanji => 3,
            EncodingMode::Eci { .. } => return None,
        };
        Some((value, width))
    }

    /// Width in bits of the length field for this mode at the given version.
    ///
    /// Returns `Err(IllegalModeForVersion)` if the mode cannot appear at this version.
    pub fn length_bits(self, version: Version) -> Result<u8, QrError> {
        if version.is_micro() {
            let idx = (version.micro_number() - 1) as usize;
            let bits = match self {
                EncodingMode::Numeric => [3, 4, 5, 6][idx],
                EncodingMode::Alphanumeric => [0, 3, 4, 5][idx],
                EncodingMode::Byte => [0, 0, 4, 5][idx],
                EncodingMode::Kanji => [0, 0, 3, 4][idx],
                EncodingMode::Eci { .. } => 0,
            };
            if bits == 0 {
                return Err(QrError::IllegalModeForVersion {
                    version: version.value(),
                });
            }
            Ok(bits)
        } else {
            let range = match version.value() {
                1..=9 => 0,
                10..=26 => 1,
                27..=40 => 2,
                _ => unreachable!(),
            };
            let bits = match self {
                EncodingMode::Numeric => [10, 12, 14][range],
                EncodingMode::Alphanumeric => [9, 11, 13][range],
                EncodingMode::Byte => [8, 16, 16][range],
                EncodingMode::Kanji => [8, 10, 12][range],
                EncodingMode::Eci { .. } => 0,
            };
            Ok(bits)
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn report_zero_width_micro_header_for_m1() {
        let m1 = Version::new(-1).unwrap();
        assert_eq!(EncodingMode::Numeric.micro_header(m1), None);
    }

    #[test]
    fn report_widening_micro_header_by_version() {
        let m3 = Version::new(-3).unwrap();
        assert_eq!(EncodingMode::Byte.micro_header(m3), Some((2, 2)));
    }

    #[test]
    fn reject_byte_mode_on_m1_and_m2() {
        let m1 = Version::new(-1).unwrap();
        let m2 = Version::new(-2).unwrap();
        assert!(EncodingMode::Byte.length_bits(m1).is_err());
        assert!(EncodingMode::Byte.length_bits(m2).is_err());
    }

    #[test]
    fn accept_numeric_length_field_on_full_qr_ranges() {
        assert_eq!(
            EncodingMode::Numeric
                .length_bits(Version::new(1).unwrap())
                .unwrap(),
            10
        );
        assert_eq!(
            EncodingMode::Numeric
                .length_bits(Version::new(27).unwrap())
                .unwrap(),
            14
        );
    }
}
