//! Static reference tables (component C8): capacities and EC block shapes.
//!
//! Alignment-pattern positions and the format/version BCH codes are not stored
//! here as verbatim tables; they're computed from their generator polynomials
//! in `bch.rs` and `qr_code.rs` rather than kept as a 40-entry literal table
//! for each.

use crate::error_correction_level::ErrorCorrectionLevel;
use crate::version::Version;

/// Total codewords (data + EC) per full-QR version 1..=40, embedded verbatim.
pub static TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

/// EC codewords per block, indexed `[ecl.ordinal()][version]`. Index 0 is unused padding.
pub static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

/// Number of EC blocks, indexed `[ecl.ordinal()][version]`. Index 0 is unused padding.
pub static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Total codewords per Micro QR version, indexed by `micro_number() - 1` (M1..M4).
pub static MICRO_TOTAL_CODEWORDS: [u8; 4] = [5, 10, 17, 24];

/// `(ec_codewords_per_block, data_codewords_per_block)` for a legal (Micro version, ECL)
/// pair, or `None` if the level is illegal at that version. Every Micro layout is a
/// single RS block (`count` is always 1), so no interleaving is needed.
pub fn micro_block_shape(version: Version, ecl: ErrorCorrectionLevel) -> Option<(usize, usize)> {
    use ErrorCorrectionLevel::*;
    let shape = match (version.micro_number(), ecl) {
        (1, Low) => (2, 3),
        (2, Low) => (5, 5),
        (2, Medium) => (6, 4),
        (3, Low) => (6, 11),
        (3, Medium) => (8, 9),
        (4, Low) => (8, 16),
        (4, Medium) => (10, 14),
        (4, Quartile) => (14, 10),
        _ => return None,
    };
    Some(shape)
}

/// `(ec_codewords_per_block, num_blocks, data_codewords_total)` for a legal
/// (full-QR version, ECL) pair, derived from the two tables above the same
/// way the matrix builder's interleaver does.
pub fn full_block_shape(version: Version, ecl: ErrorCorrectionLevel) -> (usize, usize, usize) {
    debug_assert!(!version.is_micro());
    let v = version.value() as usize;
    let ec_per_block = ECC_CODEWORDS_PER_BLOCK[ecl.ordinal()][v] as usize;
    let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[ecl.ordinal()][v] as usize;
    let total = usize::from(TOTAL_CODEWORDS[v]);
    let data_total = total - ec_per_block * num_blocks;
    (ec_per_block, num_blocks, data_total)
}
