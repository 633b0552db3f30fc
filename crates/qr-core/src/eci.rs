use crate::error::QrError;

/// Recognized ECI assignment numbers and the charset each denotes.
///
/// The core only needs to recognize these values well enough to validate them
/// and to frame the 8-bit assignment token on the wire; the actual text-to-bytes
/// transcoding for any charset other than UTF-8 is an external collaborator
/// (see design notes) that hands the core already-encoded octets.
pub const RECOGNIZED_ECI_ASSIGNMENTS: &[u32] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 17, 18, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33, 34, 35,
];

/// ECI assignment 26, UTF-8, used as the auto-detection fallback.
pub const ECI_UTF8: u32 = 26;

/// Validates an ECI assignment number against the recognized set.
///
/// Values 14 and 19 are reserved by the standard and always rejected, along
/// with anything outside the recognized set entirely.
pub fn validate_eci_assignment(assignment: u32) -> Result<(), QrError> {
    if RECOGNIZED_ECI_ASSIGNMENTS.contains(&assignment) {
        Ok(())
    } else {
        Err(QrError::UnknownEciAssignment { assignment })
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn accept_utf8_assignment() {
        assert!(validate_eci_assignment(ECI_UTF8).is_ok());
    }

    #[test]
    fn reject_reserved_assignments() {
        assert!(validate_eci_assignment(14).is_err());
        assert!(validate_eci_assignment(19).is_err());
    }

    #[test]
    fn reject_unrecognized_assignments() {
        assert!(validate_eci_assignment(999).is_err());
    }
}
