//! Matrix builder and mask selector (components C6/C7), and the orchestration
//! that ties every other component into the public `encode_text`/`encode_segments`
//! entry points.

use crate::bch;
use crate::encode_block::EncodeBlock;
use crate::eci;
use crate::error::QrError;
use crate::error_correction_level::ErrorCorrectionLevel;
use crate::gf;
use crate::mask::{Mask, MicroMask};
use crate::matrix::{CellKind, Matrix};
use crate::options::QrOptions;
use crate::position_walker::PositionWalker;
use crate::tables;
use crate::value_block::BitWriter;
use crate::version::Version;

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

/// A QR Code or Micro QR Code symbol: an immutable square grid of modules
/// plus the version/error-level/mask that produced it.
///
/// Ways to build one:
/// - High level: `QrCode::encode_text()` auto-detects a single block's mode.
/// - Mid level: `QrCode::encode_segments()` takes a caller-built `EncodeBlock` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    error_level: ErrorCorrectionLevel,
    mask: Mask,
    matrix: Matrix,
}

impl QrCode {
    /*---- Static factory functions ----*/

    /// Encodes `content` as a single auto-detected block (Numeric, Alphanumeric,
    /// Latin-1 Byte, or a UTF-8 ECI-wrapped Byte fallback).
    pub fn encode_text(content: &str, options: QrOptions) -> Result<Self, QrError> {
        let block = auto_detect_block(content);
        Self::encode_segments(&[block], options)
    }

    /// Encodes a caller-built sequence of blocks.
    pub fn encode_segments(blocks: &[EncodeBlock], options: QrOptions) -> Result<Self, QrError> {
        let (version, error_level, used_bits) = select_version(blocks, &options)?;

        let mut writer = BitWriter::new();
        for block in blocks {
            block.emit(version, &mut writer)?;
        }
        debug_assert_eq!(writer.len_bits(), used_bits);

        let data_codewords = shape_codewords(writer, version, error_level)?;
        let last_data_byte_index = micro_nibble_skip_index(version, error_level);
        let interleaved = interleave(&data_codewords, version, error_level);

        let mut matrix = build_skeleton(version);
        place_data(&mut matrix, &interleaved, version.is_micro(), last_data_byte_index);
        let mask = select_mask(&mut matrix, version, error_level);

        Ok(Self {
            version,
            error_level,
            mask,
            matrix,
        })
    }

    /*---- Accessors ----*/

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn error_correction_level(&self) -> ErrorCorrectionLevel {
        self.error_level
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn get_module(&self, x: i32, y: i32) -> bool {
        self.matrix.get_module(x, y)
    }
}

/// Numeric ≻ Alphanumeric ≻ Latin-1 Byte ≻ UTF-8-via-ECI fallback. Kanji is
/// never auto-selected here since producing Shift-JIS pairs from a `str`
/// needs a transcoder, an external collaborator this crate does not embed.
fn auto_detect_block(text: &str) -> EncodeBlock {
    if EncodeBlock::is_numeric(text) {
        EncodeBlock::Numeric(text.to_string())
    } else if EncodeBlock::is_alphanumeric(text) {
        EncodeBlock::Alphanumeric(text.to_string())
    } else if text.chars().all(|c| u32::from(c) <= 0xFF) {
        EncodeBlock::Byte(text.chars().map(|c| c as u8).collect())
    } else {
        EncodeBlock::Eci {
            assignment: eci::ECI_UTF8,
            inner: Box::new(EncodeBlock::Byte(text.as_bytes().to_vec())),
        }
    }
}

/*---- Version selection (C4) ----*/

fn data_capacity_codewords(version: Version, ecl: ErrorCorrectionLevel) -> Option<usize> {
    if version.is_micro() {
        tables::micro_block_shape(version, ecl).map(|(_, data)| data)
    } else {
        Some(tables::full_block_shape(version, ecl).2)
    }
}

fn select_version(
    blocks: &[EncodeBlock],
    options: &QrOptions,
) -> Result<(Version, ErrorCorrectionLevel, usize), QrError> {
    if let Some(version) = options.version {
        if version.is_micro() && !options.error_level.is_legal_for_micro(version) {
            return Err(QrError::IllegalErrorLevelForVersion {
                version: version.value(),
            });
        }
        let capacity_codewords = data_capacity_codewords(version, options.error_level)
            .ok_or(QrError::IllegalErrorLevelForVersion {
                version: version.value(),
            })?;
        let used_bits = EncodeBlock::total_bits(blocks, version)?;
        let capacity_bits = capacity_codewords * 8;
        if used_bits > capacity_bits {
            return Err(QrError::ContentTooLong {
                needed_bits: used_bits,
                available_bits: capacity_bits,
            });
        }
        return Ok((version, options.error_level, used_bits));
    }

    let candidates: Box<dyn Iterator<Item = Version>> = if options.micro {
        Box::new(Version::micro_range())
    } else {
        Box::new(Version::full_range())
    };

    let mut largest_capacity_bits = 0usize;
    for version in candidates {
        if version.is_micro() && !options.error_level.is_legal_for_micro(version) {
            continue;
        }
        let Some(capacity_codewords) = data_capacity_codewords(version, options.error_level)
        else {
            continue;
        };
        let capacity_bits = capacity_codewords * 8;
        largest_capacity_bits = largest_capacity_bits.max(capacity_bits);
        let Ok(used_bits) = EncodeBlock::total_bits(blocks, version) else {
            continue;
        };
        if used_bits > capacity_bits {
            continue;
        }

        let mut chosen_ecl = options.error_level;
        if options.boost_ecl && !version.is_micro() {
            for &candidate_ecl in &[
                ErrorCorrectionLevel::Medium,
                ErrorCorrectionLevel::Quartile,
                ErrorCorrectionLevel::High,
            ] {
                if candidate_ecl <= chosen_ecl {
                    continue;
                }
                if let Some(boosted_capacity) = data_capacity_codewords(version, candidate_ecl) {
                    if used_bits <= boosted_capacity * 8 {
                        chosen_ecl = candidate_ecl;
                    }
                }
            }
        }
        return Ok((version, chosen_ecl, used_bits));
    }

    let needed_bits = EncodeBlock::total_bits(
        blocks,
        if options.micro { Version::MICRO_MIN } else { Version::MAX },
    )
    .unwrap_or(usize::MAX);
    Err(QrError::ContentTooLong {
        needed_bits,
        available_bits: largest_capacity_bits,
    })
}

/*---- Codeword shaper (C5) ----*/

fn micro_nibble_skip_index(version: Version, ecl: ErrorCorrectionLevel) -> Option<usize> {
    if !version.is_micro() || !matches!(version.micro_number(), 1 | 3) {
        return None;
    }
    tables::micro_block_shape(version, ecl).map(|(_, data_len)| data_len - 1)
}

fn shape_codewords(
    mut writer: BitWriter,
    version: Version,
    ecl: ErrorCorrectionLevel,
) -> Result<Vec<u8>, QrError> {
    let capacity_codewords = data_capacity_codewords(version, ecl).ok_or(
        QrError::IllegalErrorLevelForVersion {
            version: version.value(),
        },
    )?;
    let capacity_bits = capacity_codewords * 8;
    debug_assert!(writer.len_bits() <= capacity_bits);

    let terminator_width: usize = if version.is_micro() {
        2 * usize::from(version.micro_number()) + 1
    } else {
        4
    };
    let remaining = capacity_bits - writer.len_bits();
    writer.push_bits(0, terminator_width.min(remaining) as u8);

    let pad_to_byte = (8 - writer.len_bits() % 8) % 8;
    writer.push_bits(0, pad_to_byte as u8);

    for &pad_byte in [0xECu32, 0x11].iter().cycle() {
        if writer.len_bits() >= capacity_bits {
            break;
        }
        writer.push_bits(pad_byte, 8);
    }

    let mut data = writer.into_bytes();
    debug_assert_eq!(data.len(), capacity_codewords);

    if version.is_micro() && matches!(version.micro_number(), 1 | 3) {
        *data.last_mut().expect("Micro QR always has at least one codeword") = 0x00;
    }

    Ok(data)
}

/// Splits `data` into RS blocks, computes each block's EC codewords, and
/// interleaves data then EC bytes column-major across blocks. Micro QR is
/// always a single block, so this degenerates to plain concatenation there.
fn interleave(data: &[u8], version: Version, ecl: ErrorCorrectionLevel) -> Vec<u8> {
    if version.is_micro() {
        let (ec_len, data_len) = tables::micro_block_shape(version, ecl)
            .expect("version/ecl already validated by the caller");
        debug_assert_eq!(data.len(), data_len);
        let divisor = gf::generator_polynomial(ec_len);
        let ec = gf::Polynomial(data.to_vec()).remainder(&divisor);
        let mut result = data.to_vec();
        result.extend(ec);
        result
    } else {
        let (ec_per_block, num_blocks, data_total) = tables::full_block_shape(version, ecl);
        debug_assert_eq!(data.len(), data_total);
        let raw_codewords = usize::from(tables::TOTAL_CODEWORDS[version.value() as usize]);
        let num_short_blocks = num_blocks - raw_codewords % num_blocks;
        let short_block_len = raw_codewords / num_blocks;

        let divisor = gf::generator_polynomial(ec_per_block);
        let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
        let mut k = 0usize;
        for i in 0..num_blocks {
            let data_len = short_block_len - ec_per_block + usize::from(i >= num_short_blocks);
            let mut block = data[k..k + data_len].to_vec();
            k += data_len;
            let ec = gf::Polynomial(block.clone()).remainder(&divisor);
            if i < num_short_blocks {
                block.push(0); // padding byte so every block vec has the same length
            }
            block.extend(ec);
            blocks.push(block);
        }

        let mut result = Vec::with_capacity(raw_codewords);
        for i in 0..=short_block_len {
            for (j, block) in blocks.iter().enumerate() {
                if i != short_block_len - ec_per_block || j >= num_short_blocks {
                    result.push(block[i]);
                }
            }
        }
        result
    }
}

/*---- Matrix builder (C6) ----*/

fn build_skeleton(version: Version) -> Matrix {
    let side = version.side();
    let mut matrix = Matrix::blank(side);
    let micro = version.is_micro();

    draw_timing_patterns(&mut matrix, micro);
    draw_finder_pattern(&mut matrix, 3, 3);
    if !micro {
        draw_finder_pattern(&mut matrix, side - 4, 3);
        draw_finder_pattern(&mut matrix, 3, side - 4);
        draw_alignment_patterns(&mut matrix, version);
        draw_version_info(&mut matrix, version);
    }
    write_format_info(&mut matrix, version, ErrorCorrectionLevel::Low, Mask::new(0), 0);

    matrix
}

fn draw_timing_patterns(matrix: &mut Matrix, micro: bool) {
    let side = matrix.side();
    let axis = if micro { 0 } else { 6 };
    for i in 0..side {
        matrix.set(axis, i, i % 2 == 0, CellKind::Timing);
        matrix.set(i, axis, i % 2 == 0, CellKind::Timing);
    }
}

/// A 9x9 finder pattern (7x7 ring plus a one-module light separator) centered
/// at `(cx, cy)`. Modules falling outside the matrix are skipped.
fn draw_finder_pattern(matrix: &mut Matrix, cx: i32, cy: i32) {
    let side = matrix.side();
    for dy in -4..=4 {
        for dx in -4..=4 {
            let x = cx + dx;
            let y = cy + dy;
            if (0..side).contains(&x) && (0..side).contains(&y) {
                let dist = dx.abs().max(dy.abs());
                if dist == 4 {
                    matrix.set(x, y, false, CellKind::Separator);
                } else {
                    matrix.set(x, y, dist != 2, CellKind::Finder);
                }
            }
        }
    }
}

fn draw_alignment_patterns(matrix: &mut Matrix, version: Version) {
    let positions = alignment_pattern_positions(version);
    let n = positions.len();
    for (i, &row) in positions.iter().enumerate() {
        for (j, &col) in positions.iter().enumerate() {
            if i == 0 && j == 0 || i == 0 && j == n - 1 || i == n - 1 && j == 0 {
                continue; // overlaps a finder corner
            }
            draw_alignment_pattern(matrix, col, row);
        }
    }
}

fn draw_alignment_pattern(matrix: &mut Matrix, cx: i32, cy: i32) {
    for dy in -2..=2 {
        for dx in -2..=2 {
            matrix.set(
                cx + dx,
                cy + dy,
                dx.abs().max(dy.abs()) != 1,
                CellKind::Alignment,
            );
        }
    }
}

/// Alignment pattern center positions for full-QR `version`, ascending.
/// Empty for version 1, which has none.
fn alignment_pattern_positions(version: Version) -> Vec<i32> {
    let ver = version.value();
    if ver == 1 {
        return vec![];
    }
    let side = version.side();
    let num_align = ver / 7 + 2;
    let step = if ver == 32 {
        26
    } else {
        (ver * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };
    let mut result: Vec<i32> = (0..num_align - 1).map(|i| side - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}

fn draw_version_info(matrix: &mut Matrix, version: Version) {
    if version.value() < 7 {
        return;
    }
    let bits = bch::version_info(version.value() as u8);
    let side = matrix.side();
    for i in 0..18 {
        let bit = get_bit(bits, i);
        let a = side - 11 + i % 3;
        let b = i / 3;
        matrix.set(a, b, bit, CellKind::Version);
        matrix.set(b, a, bit, CellKind::Version);
    }
}

fn write_format_info(
    matrix: &mut Matrix,
    version: Version,
    ecl: ErrorCorrectionLevel,
    mask: Mask,
    micro_mask_index: u8,
) {
    if version.is_micro() {
        let bits = bch::micro_format_info(
            version.micro_number(),
            ecl,
            MicroMask::new(micro_mask_index),
        );
        for row in 1..=8 {
            matrix.set(8, row, get_bit(bits, 14 - (row - 1)), CellKind::Format);
        }
        for col in 1..=7 {
            matrix.set(col, 8, get_bit(bits, 7 - col), CellKind::Format);
        }
        return;
    }

    let bits = bch::full_format_info(ecl, mask);
    for i in 0..6 {
        matrix.set(8, i, get_bit(bits, i), CellKind::Format);
    }
    matrix.set(8, 7, get_bit(bits, 6), CellKind::Format);
    matrix.set(8, 8, get_bit(bits, 7), CellKind::Format);
    matrix.set(7, 8, get_bit(bits, 8), CellKind::Format);
    for i in 9..15 {
        matrix.set(14 - i, 8, get_bit(bits, i), CellKind::Format);
    }

    let side = matrix.side();
    for i in 0..8 {
        matrix.set(side - 1 - i, 8, get_bit(bits, i), CellKind::Format);
    }
    for i in 8..15 {
        matrix.set(8, side - 15 + i, get_bit(bits, i), CellKind::Format);
    }
    matrix.set(8, side - 8, true, CellKind::Format); // always dark
}

fn get_bit(value: u32, index: i32) -> bool {
    (value >> index) & 1 != 0
}

/// Reads bits from `data` MSB-first, skipping the low nibble of
/// `skip_low_nibble_of` (a byte index) and resuming at the next byte.
struct BitCursor<'a> {
    data: &'a [u8],
    pos: usize,
    skip_low_nibble_of: Option<usize>,
}

impl<'a> BitCursor<'a> {
    fn has_more(&self) -> bool {
        self.pos < self.data.len() * 8
    }

    fn next_bit(&mut self) -> bool {
        let byte_idx = self.pos / 8;
        let bit_in_byte = self.pos % 8;
        if bit_in_byte == 4 && self.skip_low_nibble_of == Some(byte_idx) {
            self.pos = (byte_idx + 1) * 8;
        }
        let byte_idx = self.pos / 8;
        let bit_in_byte = self.pos % 8;
        let bit = (self.data[byte_idx] >> (7 - bit_in_byte)) & 1 != 0;
        self.pos += 1;
        bit
    }
}

/// Walks the serpentine data-placement order and consumes bits from the
/// interleaved codeword stream, honoring the Micro M1/M3 final-nibble rule.
fn place_data(matrix: &mut Matrix, codewords: &[u8], micro: bool, skip_low_nibble_of: Option<usize>) {
    let positions: Vec<(i32, i32)> = PositionWalker::new(matrix, micro).collect();
    let mut cursor = BitCursor {
        data: codewords,
        pos: 0,
        skip_low_nibble_of,
    };
    for (x, y) in positions {
        if cursor.has_more() {
            let bit = cursor.next_bit();
            matrix.cell_mut(x, y).on = bit;
        }
    }
}

/*---- Mask selector (C7) ----*/

fn apply_mask(matrix: &mut Matrix, mask: Mask) {
    let side = matrix.side();
    for y in 0..side {
        for x in 0..side {
            if mask.invert_at(y, x) {
                matrix.toggle(x, y, true);
            }
        }
    }
}

fn select_mask(matrix: &mut Matrix, version: Version, ecl: ErrorCorrectionLevel) -> Mask {
    let candidates: Vec<Mask> = if version.is_micro() {
        (0..4).map(|i| MicroMask::new(i).to_full()).collect()
    } else {
        (0..8).map(Mask::new).collect()
    };

    let mut best_mask = candidates[0];
    let mut best_micro_index = 0u8;
    let mut best_penalty = i32::MAX;
    for (index, &mask) in candidates.iter().enumerate() {
        write_format_info(matrix, version, ecl, mask, index as u8);
        apply_mask(matrix, mask);
        let penalty = penalty_score(matrix);
        if penalty < best_penalty {
            best_penalty = penalty;
            best_mask = mask;
            best_micro_index = index as u8;
        }
        apply_mask(matrix, mask); // undo via XOR
    }

    write_format_info(matrix, version, ecl, best_mask, best_micro_index);
    apply_mask(matrix, best_mask);
    best_mask
}

/// Scores N1 (runs of ≥5 same-color modules) and N3 (finder-like patterns)
/// along one row or column of `len` modules, `is_dark(i)` giving module `i`.
fn score_line(len: i32, is_dark: impl Fn(i32) -> bool) -> i32 {
    let mut result = 0i32;
    let mut run_history = [0i32; 7];
    let mut run_color = false;
    let mut run_len = 0i32;
    for i in 0..len {
        if is_dark(i) == run_color {
            run_len += 1;
            if run_len == 5 {
                result += PENALTY_N1;
            } else if run_len > 5 {
                result += 1;
            }
        } else {
            push_run(&mut run_history, run_len, len);
            if !run_color {
                result += count_finder_like_patterns(&run_history, len) * PENALTY_N3;
            }
            run_color = is_dark(i);
            run_len = 1;
        }
    }
    if run_color {
        push_run(&mut run_history, run_len, len);
        run_len = 0;
    }
    push_run(&mut run_history, run_len + len, len); // light border on the final run
    result + count_finder_like_patterns(&run_history, len) * PENALTY_N3
}

/// Pushes `run_len` to the front of the 7-entry sliding window, dropping the oldest.
fn push_run(run_history: &mut [i32; 7], mut run_len: i32, size: i32) {
    if run_history[0] == 0 {
        run_len += size; // light border on the initial run
    }
    for i in (0..run_history.len() - 1).rev() {
        run_history[i + 1] = run_history[i];
    }
    run_history[0] = run_len;
}

/// Callable only immediately after a light run is pushed; returns 0, 1, or 2.
fn count_finder_like_patterns(run_history: &[i32; 7], size: i32) -> i32 {
    let n = run_history[1];
    debug_assert!(n <= size * 3);
    let core = n > 0 && run_history[2] == n && run_history[3] == n * 3 && run_history[4] == n && run_history[5] == n;
    i32::from(core && run_history[0] >= n * 4 && run_history[6] >= n)
        + i32::from(core && run_history[6] >= n * 4 && run_history[0] >= n)
}

fn penalty_score(matrix: &Matrix) -> i32 {
    let side = matrix.side();
    let mut result = 0i32;

    for y in 0..side {
        result += score_line(side, |x| matrix.get_module(x, y));
    }
    for x in 0..side {
        result += score_line(side, |y| matrix.get_module(x, y));
    }

    for y in 0..side - 1 {
        for x in 0..side - 1 {
            let color = matrix.get_module(x, y);
            if color == matrix.get_module(x + 1, y)
                && color == matrix.get_module(x, y + 1)
                && color == matrix.get_module(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    let dark: i32 = (0..side)
        .flat_map(|y| (0..side).map(move |x| (x, y)))
        .filter(|&(x, y)| matrix.get_module(x, y))
        .count() as i32;
    let total = side * side;
    // Symmetric around the 50% dark/light balance: find the largest k such
    // that the deviation still exceeds (k+1) symbol-area units either way.
    let mut k = 0i32;
    while (dark * 20 - total * 10).abs() > (k + 1) * total {
        k += 1;
    }
    result += k * PENALTY_N4;

    result
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::error_correction_level::ErrorCorrectionLevel;

    #[test]
    fn encode_small_numeric_text_at_version_one() {
        let qr = QrCode::encode_text(
            "849",
            QrOptions {
                error_level: ErrorCorrectionLevel::Medium,
                ..QrOptions::default()
            },
        )
        .unwrap();
        assert_eq!(qr.version().value(), 1);
        assert_eq!(qr.matrix().side(), 21);
    }

    #[test]
    fn encode_micro_numeric_text() {
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
        assert!(qr.version().is_micro());
        assert_eq!(qr.matrix().side(), 11);
    }

    #[test]
    fn reject_content_too_long_for_pinned_version() {
        let big = "1".repeat(100);
        let result = QrCode::encode_text(
            &big,
            QrOptions {
                error_level: ErrorCorrectionLevel::High,
                version: Some(Version::new(1).unwrap()),
                ..QrOptions::default()
            },
        );
        assert!(matches!(result, Err(QrError::ContentTooLong { .. })));
    }

    #[test]
    fn preserve_finder_pattern_after_masking() {
        let qr = QrCode::encode_text("HELLO", QrOptions::default()).unwrap();
        // Top-left finder's center module is always dark.
        assert!(qr.get_module(3, 3));
    }

    #[test]
    fn interleaved_codeword_count_matches_the_version_table() {
        let version = Version::new(5).unwrap();
        let ecl = ErrorCorrectionLevel::Quartile;
        let writer = BitWriter::new();
        let data = shape_codewords(writer, version, ecl).unwrap();
        let interleaved = interleave(&data, version, ecl);
        assert_eq!(interleaved.len(), usize::from(tables::TOTAL_CODEWORDS[5]));
    }

    #[test]
    fn rs_block_remainder_divides_evenly_into_the_codeword() {
        let version = Version::new(1).unwrap();
        let ecl = ErrorCorrectionLevel::Low;
        let writer = BitWriter::new();
        let data = shape_codewords(writer, version, ecl).unwrap();
        let (ec_per_block, _, _) = tables::full_block_shape(version, ecl);
        let divisor = gf::generator_polynomial(ec_per_block);
        let ec = gf::Polynomial(data.clone()).remainder(&divisor);
        let mut codeword = data;
        codeword.extend(ec);
        let remainder = gf::Polynomial(codeword).remainder(&divisor);
        assert!(remainder.iter().all(|&b| b == 0));
    }

    #[test]
    fn micro_m1_zeros_its_final_data_codeword() {
        let version = Version::new(-1).unwrap();
        let ecl = ErrorCorrectionLevel::Low;
        let mut writer = BitWriter::new();
        EncodeBlock::Numeric("12345".to_string()).emit(version, &mut writer).unwrap();
        let data = shape_codewords(writer, version, ecl).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(*data.last().unwrap(), 0x00);
    }

    #[test]
    fn apply_mask_twice_restores_original_data_bits() {
        let qr = QrCode::encode_text("HELLO WORLD", QrOptions::default()).unwrap();
        let mut matrix = qr.matrix().clone();
        let before = matrix.clone();
        apply_mask(&mut matrix, qr.mask());
        apply_mask(&mut matrix, qr.mask());
        assert_eq!(matrix, before);
    }
}
