use crate::error::QrError;

/// A QR Code or Micro QR Code version number.
///
/// Full-range QR Code versions are 1..=40. Micro QR Code versions M1..M4
/// are represented as -1..=-4, mirroring the source's signed-version convention.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, serde::Serialize, serde::Deserialize)]
pub struct Version(i8);

impl Version {
    /// The smallest full QR Code version.
    pub const MIN: Version = Version(1);

    /// The largest full QR Code version.
    pub const MAX: Version = Version(40);

    /// Micro QR Code M1, the smallest Micro version.
    pub const MICRO_MIN: Version = Version(-1);

    /// Micro QR Code M4, the largest Micro version.
    pub const MICRO_MAX: Version = Version(-4);

    /// Creates a version from a signed number in {-4..-1} ∪ {1..40}.
    pub fn new(ver: i32) -> Result<Self, QrError> {
        if (1..=40).contains(&ver) || (-4..=-1).contains(&ver) {
            Ok(Self(ver as i8))
        } else {
            Err(QrError::InvalidVersion(ver))
        }
    }

    /// Returns the raw signed version value.
    pub fn value(self) -> i32 {
        self.0 as i32
    }

    /// Returns whether this is a Micro QR version (M1..M4).
    pub fn is_micro(self) -> bool {
        self.0 < 0
    }

    /// Returns 1..=4 for Micro versions (the M-number), meaningless for full QR.
    pub fn micro_number(self) -> u8 {
        debug_assert!(self.is_micro());
        (-self.0) as u8
    }

    /// Returns the module side length: `17 + 4*v` for full QR, `9 + 2*|v|` for Micro.
    pub fn side(self) -> i32 {
        if self.is_micro() {
            9 + 2 * (-self.0 as i32)
        } else {
            17 + 4 * (self.0 as i32)
        }
    }

    /// Iterates full QR versions 1..=40 in ascending order.
    pub fn full_range() -> impl Iterator<Item = Version> {
        (1..=40).map(|v| Version(v))
    }

    /// Iterates Micro QR versions M1..M4 (-1..=-4) in ascending capacity order.
    pub fn micro_range() -> impl Iterator<Item = Version> {
        (1..=4).map(|v| Version(-v))
    }
}
