use crate::error_correction_level::ErrorCorrectionLevel;
use crate::version::Version;

/// Configuration for a single encode call.
///
/// There is no separate configuration file or environment-variable layer:
/// every knob the symbol builder exposes is a field here, set by the caller
/// at the point of use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOptions {
    /// The minimum error correction level to use.
    pub error_level: ErrorCorrectionLevel,

    /// Pins the symbol to an exact version instead of letting the builder
    /// pick the smallest version that fits the data.
    pub version: Option<Version>,

    /// Build a Micro QR Code instead of a full-range QR Code. Ignored when
    /// `version` is set (the sign of the pinned version decides instead).
    pub micro: bool,

    /// After a version is chosen, raise `error_level` as high as the
    /// standard allows without growing the version. Only applies to
    /// full-range QR Codes; Micro QR Code error level is never boosted,
    /// since legality varies by version.
    pub boost_ecl: bool,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            error_level: ErrorCorrectionLevel::Low,
            version: None,
            micro: false,
            boost_ecl: true,
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn default_to_low_ecl_with_boosting_and_automatic_version() {
        let opts = QrOptions::default();
        assert_eq!(opts.error_level, ErrorCorrectionLevel::Low);
        assert!(opts.version.is_none());
        assert!(!opts.micro);
        assert!(opts.boost_ecl);
    }
}
