use crate::version::Version;

/// The error correction level used by a QR Code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, serde::Serialize, serde::Deserialize)]
pub enum ErrorCorrectionLevel {
    /// Tolerates about 7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl ErrorCorrectionLevel {
    pub const ALL: [ErrorCorrectionLevel; 4] = [
        ErrorCorrectionLevel::Low,
        ErrorCorrectionLevel::Medium,
        ErrorCorrectionLevel::Quartile,
        ErrorCorrectionLevel::High,
    ];

    /// Index into the full-QR static tables (0..=3).
    pub fn ordinal(self) -> usize {
        use ErrorCorrectionLevel::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// The 2-bit value used in the full-QR format-info field. Not the same as `ordinal()`.
    pub fn format_bits(self) -> u8 {
        use ErrorCorrectionLevel::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }

    /// Whether this level is legal for the given Micro version.
    ///
    /// M1 supports only L; M2 and M3 support L and M; M4 supports L, M and Q.
    pub fn is_legal_for_micro(self, version: Version) -> bool {
        debug_assert!(version.is_micro());
        use ErrorCorrectionLevel::*;
        match version.micro_number() {
            1 => matches!(self, Low),
            2 | 3 => matches!(self, Low | Medium),
            4 => matches!(self, Low | Medium | Quartile),
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn restrict_micro_m1_to_low() {
        let m1 = Version::new(-1).unwrap();
        assert!(ErrorCorrectionLevel::Low.is_legal_for_micro(m1));
        assert!(!ErrorCorrectionLevel::Medium.is_legal_for_micro(m1));
    }

    #[test]
    fn allow_micro_m4_up_to_quartile() {
        let m4 = Version::new(-4).unwrap();
        assert!(ErrorCorrectionLevel::Quartile.is_legal_for_micro(m4));
        assert!(!ErrorCorrectionLevel::High.is_legal_for_micro(m4));
    }
}
