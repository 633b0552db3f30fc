//! Mode-aware bitstream construction (component C2).
//!
//! An `EncodeBlock` owns already-validated, already-encoded payload data: for
//! Byte, Kanji, and the inner segment of an Eci block, transcoding to the
//! target character set is an external collaborator's job, not this crate's.
//! Numeric and Alphanumeric need no transcoder since their charsets are a
//! fixed ASCII subset; Kanji expects Shift-JIS byte pairs already assembled
//! by the caller.

use crate::eci;
use crate::error::QrError;
use crate::mode::EncodingMode;
use crate::value_block::{BitWriter, ValueBlock};
use crate::version::Version;

/// The set of all legal characters in alphanumeric mode, where each
/// character's value is its index in the string.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// A block of payload data paired with the mode that interprets it.
///
/// Instances are immutable. This type imposes no length restriction of its
/// own; whether a block's length field fits a particular version's header
/// width is checked when assembling the full bitstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeBlock {
    Numeric(String),
    Alphanumeric(String),
    Byte(Vec<u8>),
    Kanji(Vec<(u8, u8)>),
    Eci {
        assignment: u32,
        inner: Box<EncodeBlock>,
    },
}

impl EncodeBlock {
    pub fn mode(&self) -> EncodingMode {
        match self {
            EncodeBlock::Numeric(_) => EncodingMode::Numeric,
            EncodeBlock::Alphanumeric(_) => EncodingMode::Alphanumeric,
            EncodeBlock::Byte(_) => EncodingMode::Byte,
            EncodeBlock::Kanji(_) => EncodingMode::Kanji,
            EncodeBlock::Eci { assignment, .. } => EncodingMode::Eci {
                assignment: *assignment,
            },
        }
    }

    /// The unencoded character/byte count this block's length field must
    /// carry: characters for Numeric/Alphanumeric/Kanji, bytes for Byte, 0
    /// for Eci (the assignment escape has no length field of its own).
    pub fn char_count(&self) -> usize {
        match self {
            EncodeBlock::Numeric(s) => s.chars().count(),
            EncodeBlock::Alphanumeric(s) => s.chars().count(),
            EncodeBlock::Byte(b) => b.len(),
            EncodeBlock::Kanji(pairs) => pairs.len(),
            EncodeBlock::Eci { .. } => 0,
        }
    }

    /// Tests whether `text` can be encoded in numeric mode: every character
    /// is an ASCII digit.
    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    /// Tests whether `text` can be encoded in alphanumeric mode: every
    /// character is in the 45-symbol alphanumeric charset.
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }

    /// Packs this block's own payload (no mode indicator, no length field)
    /// into 10/7/4-bit numeric triplets, 11/6-bit alphanumeric duplets,
    /// 8-bit bytes, 13-bit Kanji tokens, or an Eci designator escape.
    pub fn to_tokens(&self) -> Result<Vec<ValueBlock>, QrError> {
        match self {
            EncodeBlock::Numeric(text) => Ok(numeric_tokens(text)),
            EncodeBlock::Alphanumeric(text) => alphanumeric_tokens(text),
            EncodeBlock::Byte(bytes) => Ok(byte_tokens(bytes)),
            EncodeBlock::Kanji(pairs) => kanji_tokens(pairs),
            EncodeBlock::Eci { assignment, .. } => {
                eci::validate_eci_assignment(*assignment)?;
                Ok(eci_designator_tokens(*assignment))
            }
        }
    }

    /// Writes this block's full wire representation — mode indicator (or
    /// Micro QR sub-mode header), length field, and payload tokens — to
    /// `writer`. An Eci block writes its designator escape then recurses
    /// into the wrapped inner block, which gets its own full header.
    pub fn emit(&self, version: Version, writer: &mut BitWriter) -> Result<(), QrError> {
        if let EncodeBlock::Eci { assignment, inner } = self {
            if version.is_micro() {
                return Err(QrError::IllegalModeForVersion {
                    version: version.value(),
                });
            }
            writer.push_bits(EncodingMode::Eci { assignment: *assignment }.mode_bits(), 4);
            for token in self.to_tokens()? {
                writer.push(token);
            }
            return inner.emit(version, writer);
        }
        let mode = self.mode();
        if version.is_micro() {
            if let Some((value, width)) = mode.micro_header(version) {
                writer.push_bits(value, width);
            }
        } else {
            writer.push_bits(mode.mode_bits(), 4);
        }
        let ccbits = mode.length_bits(version)?;
        if ccbits > 0 {
            let limit = 1usize.checked_shl(u32::from(ccbits)).unwrap_or(usize::MAX);
            if self.char_count() >= limit {
                return Err(QrError::IllegalModeForVersion {
                    version: version.value(),
                });
            }
            writer.push_bits(self.char_count() as u32, ccbits);
        }
        for token in self.to_tokens()? {
            writer.push(token);
        }
        Ok(())
    }

    /// Computes the total bit length of `blocks` when encoded at `version`,
    /// including every mode indicator and character count field.
    pub fn total_bits(blocks: &[EncodeBlock], version: Version) -> Result<usize, QrError> {
        let mut writer = BitWriter::new();
        for block in blocks {
            block.emit(version, &mut writer)?;
        }
        Ok(writer.len_bits())
    }
}

fn numeric_tokens(text: &str) -> Vec<ValueBlock> {
    let mut tokens = Vec::with_capacity(text.len() / 3 + 1);
    let digits: Vec<u32> = text.bytes().map(|b| u32::from(b - b'0')).collect();
    for chunk in digits.chunks(3) {
        let value = chunk.iter().fold(0u32, |acc, &d| acc * 10 + d);
        let bits = match chunk.len() {
            3 => 10,
            2 => 7,
            _ => 4,
        };
        tokens.push(ValueBlock::new(value, bits));
    }
    tokens
}

fn alphanumeric_tokens(text: &str) -> Result<Vec<ValueBlock>, QrError> {
    let indices: Result<Vec<u32>, QrError> = text
        .chars()
        .enumerate()
        .map(|(offset, c)| {
            ALPHANUMERIC_CHARSET
                .find(c)
                .map(|i| i as u32)
                .ok_or(QrError::InvalidCharacterForMode { character: c, offset })
        })
        .collect();
    let indices = indices?;
    let mut tokens = Vec::with_capacity(indices.len() / 2 + 1);
    for pair in indices.chunks(2) {
        if pair.len() == 2 {
            tokens.push(ValueBlock::new(pair[0] * 45 + pair[1], 11));
        } else {
            tokens.push(ValueBlock::new(pair[0], 6));
        }
    }
    Ok(tokens)
}

fn byte_tokens(bytes: &[u8]) -> Vec<ValueBlock> {
    bytes.iter().map(|&b| ValueBlock::new(u32::from(b), 8)).collect()
}

/// Packs Shift-JIS byte pairs into 13-bit tokens per the two legal ranges
/// (0x8140..=0x9FFC and 0xE040..=0xEBBF), matching the Kanji mode formula.
fn kanji_tokens(pairs: &[(u8, u8)]) -> Result<Vec<ValueBlock>, QrError> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, &(high, low))| {
            let word = (u32::from(high) << 8) | u32::from(low);
            let shifted = if (0x8140..=0x9FFC).contains(&word) {
                word - 0x8140
            } else if (0xE040..=0xEBBF).contains(&word) {
                word - 0xC140
            } else {
                return Err(QrError::InvalidKanjiBytes { high, low, index });
            };
            let assembled = (shifted >> 8) * 0xC0 + (shifted & 0xFF);
            Ok(ValueBlock::new(assembled, 13))
        })
        .collect()
}

/// The ECI designator escape: a fixed 8-bit assignment value preceding the
/// wrapped segment's own mode indicator and data. `to_tokens` only reaches
/// this after `eci::validate_eci_assignment` has accepted the assignment,
/// and every recognized assignment is below 128, so the 8-bit form is the
/// only one this crate ever needs to emit.
fn eci_designator_tokens(assignment: u32) -> Vec<ValueBlock> {
    vec![ValueBlock::new(assignment, 8)]
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn pack_numeric_triplets_with_trailing_remainder_widths() {
        let tokens = numeric_tokens("12345");
        assert_eq!(tokens[0], ValueBlock::new(123, 10));
        assert_eq!(tokens[1], ValueBlock::new(45, 7));
    }

    #[test]
    fn pack_alphanumeric_duplets_with_base_45() {
        let tokens = alphanumeric_tokens("AC").unwrap();
        assert_eq!(tokens[0], ValueBlock::new(10 * 45 + 12, 11));
    }

    #[test]
    fn reject_unencodable_alphanumeric_character() {
        let err = alphanumeric_tokens("ac").unwrap_err();
        assert!(matches!(err, QrError::InvalidCharacterForMode { character: 'a', offset: 0 }));
    }

    #[test]
    fn recognize_numeric_and_alphanumeric_charsets() {
        assert!(EncodeBlock::is_numeric("0123"));
        assert!(!EncodeBlock::is_numeric("12a"));
        assert!(EncodeBlock::is_alphanumeric("AB 12"));
        assert!(!EncodeBlock::is_alphanumeric("ab"));
    }

    #[test]
    fn reject_kanji_pair_outside_legal_shift_jis_ranges() {
        let err = kanji_tokens(&[(0x00, 0x00)]).unwrap_err();
        assert!(matches!(err, QrError::InvalidKanjiBytes { high: 0, low: 0, index: 0 }));
    }

    #[test]
    fn emit_eci_designator_then_inner_segment_header() {
        let version = Version::new(1).unwrap();
        let block = EncodeBlock::Eci {
            assignment: 26,
            inner: Box::new(EncodeBlock::Byte(vec![0x41])),
        };
        let mut writer = BitWriter::new();
        block.emit(version, &mut writer).unwrap();
        // 4 (ECI mode) + 8 (designator) + 4 (Byte mode) + 8 (count, v1-9) + 8 (data)
        assert_eq!(writer.len_bits(), 4 + 8 + 4 + 8 + 8);
    }

    #[test]
    fn reject_eci_block_on_micro_version() {
        let m4 = Version::new(-4).unwrap();
        let block = EncodeBlock::Eci {
            assignment: 26,
            inner: Box::new(EncodeBlock::Byte(vec![0x41])),
        };
        assert!(EncodeBlock::total_bits(&[block], m4).is_err());
    }

    #[test]
    fn total_bits_matches_emitted_bit_count() {
        let version = Version::new(1).unwrap();
        let blocks = vec![EncodeBlock::Numeric("123".to_string())];
        let total = EncodeBlock::total_bits(&blocks, version).unwrap();
        assert_eq!(total, 4 + 10 + 10); // mode + count(v1-9) + one triplet
    }

    /// "849" as a single numeric triplet is the integer 849 (0b1101010001 in
    /// 10 bits); mode(0001) + count(0000000011) + digits(1101010001) packs to
    /// three whole bytes with no partial byte left over.
    #[test]
    fn pack_numeric_header_and_triplet_into_whole_bytes() {
        let version = Version::new(1).unwrap();
        let block = EncodeBlock::Numeric("849".to_string());
        let mut writer = BitWriter::new();
        block.emit(version, &mut writer).unwrap();
        assert_eq!(writer.len_bits(), 24);
        assert_eq!(writer.into_bytes(), vec![0x10, 0x0F, 0x51]);
    }

    #[test]
    fn pack_alphanumeric_header_and_duplets_into_bytes() {
        let version = Version::new(1).unwrap();
        let block = EncodeBlock::Alphanumeric("ABC".to_string());
        let mut writer = BitWriter::new();
        block.emit(version, &mut writer).unwrap();
        assert_eq!(writer.len_bits(), 4 + 9 + 11 + 6);
        assert_eq!(writer.into_bytes(), vec![0x20, 0x19, 0xCD, 0x30]);
    }

    #[test]
    fn pack_byte_header_and_latin1_octets_into_bytes() {
        let version = Version::new(1).unwrap();
        let block = EncodeBlock::Byte(b"abc".to_vec());
        let mut writer = BitWriter::new();
        block.emit(version, &mut writer).unwrap();
        assert_eq!(
            writer.into_bytes(),
            vec![0x40, 0x36, 0x16, 0x26, 0x30]
        );
    }

    #[test]
    fn pack_kanji_pairs_into_thirteen_bit_tokens() {
        let pairs: [(u8, u8); 2] = [(0xE4, 0xAA), (0x92, 0x78)];
        let tokens = kanji_tokens(&pairs).unwrap();
        let mut writer = BitWriter::new();
        for token in tokens {
            writer.push(token);
        }
        assert_eq!(writer.into_bytes(), vec![0xD5, 0x53, 0x67, 0xC0]);
    }

    #[test]
    fn eci_utf8_segment_frames_inner_byte_octets_on_a_byte_boundary() {
        let version = Version::new(1).unwrap();
        let block = EncodeBlock::Eci {
            assignment: eci::ECI_UTF8,
            inner: Box::new(EncodeBlock::Byte("\u{00C4}\u{70B9}".as_bytes().to_vec())),
        };
        let mut writer = BitWriter::new();
        block.emit(version, &mut writer).unwrap();
        assert_eq!(
            writer.into_bytes(),
            vec![0x71, 0xA4, 0x05, 0xC3, 0x84, 0xE7, 0x82, 0xB9]
        );
    }
}
