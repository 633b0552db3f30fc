/// Errors surfaced by the encoding pipeline.
///
/// All variants are terminal: no partial `QrCode` is ever returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum QrError {
    /// No legal version (within the caller's requested range) has enough data
    /// capacity for the given blocks at the given error correction level.
    #[error("content too long: needs {needed_bits} bits, largest candidate version holds {available_bits} bits")]
    ContentTooLong {
        needed_bits: usize,
        available_bits: usize,
    },

    /// The caller pinned a version that cannot legally carry one of the blocks' modes
    /// (e.g. Byte mode on M1/M2, or ECI on any Micro version).
    #[error("mode not legal at version {version}")]
    IllegalModeForVersion { version: i32 },

    /// The caller pinned a Micro version/ECL combination the standard does not define.
    #[error("error correction level not legal at Micro version {version}")]
    IllegalErrorLevelForVersion { version: i32 },

    /// A character in the payload cannot be represented by the requested mode.
    #[error("character {character:?} at offset {offset} cannot be encoded in the requested mode")]
    InvalidCharacterForMode { character: char, offset: usize },

    /// An ECI assignment number is reserved (14, 19) or outside the recognized set.
    #[error("unrecognized or reserved ECI assignment number {assignment}")]
    UnknownEciAssignment { assignment: u32 },

    /// A requested version number is outside {-4..-1} ∪ {1..40}.
    #[error("version {0} is outside the legal range -4..=-1, 1..=40")]
    InvalidVersion(i32),

    /// Kanji payload bytes are not a valid Shift-JIS double-byte sequence.
    #[error("invalid Shift-JIS byte pair (0x{high:02X}, 0x{low:02X}) at pair index {index}")]
    InvalidKanjiBytes { high: u8, low: u8, index: usize },
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn format_content_too_long_with_both_operands() {
        let err = QrError::ContentTooLong {
            needed_bits: 100,
            available_bits: 80,
        };
        let message = err.to_string();
        assert!(message.contains("100"));
        assert!(message.contains("80"));
    }
}
