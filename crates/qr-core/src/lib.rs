//! Builds QR Code and Micro QR Code symbols (ISO/IEC 18004) from pre-encoded
//! data segments.
//!
//! This crate aims to be a clear, correct symbol-generation core. It does not
//! render pixels or SVG, and it does not transcode text into Byte or Kanji
//! payloads itself — those are external collaborators' jobs; this crate
//! accepts already-encoded octets (or already-split Shift-JIS byte pairs for
//! Kanji) and turns them into a finished module grid.
//!
//! # Features
//!
//! - Encodes all 40 full-range versions and all four Micro QR versions (M1..M4)
//! - Automatic version selection, or a pinned version via `QrOptions`
//! - Automatic error-level boosting for full-range QR when it doesn't grow the version
//! - Manual multi-segment encoding via `QrCode::encode_segments`, including ECI segments
//! - Output format: a `Matrix` of light/dark modules, not rendered pixels
//!
//! # Examples
//!
//! ```
//! use qr_core::{QrCode, QrOptions};
//!
//! let qr = QrCode::encode_text("Hello, world!", QrOptions::default()).unwrap();
//! for y in 0..qr.matrix().side() {
//!     for x in 0..qr.matrix().side() {
//!         let _dark = qr.get_module(x, y);
//!     }
//! }
//! ```

mod bch;
mod eci;
mod encode_block;
mod error;
mod error_correction_level;
mod gf;
mod mask;
mod matrix;
mod mode;
mod options;
mod position_walker;
mod qr_code;
mod tables;
mod value_block;
mod version;

pub use encode_block::{EncodeBlock, ALPHANUMERIC_CHARSET};
pub use error::QrError;
pub use error_correction_level::ErrorCorrectionLevel;
pub use eci::{ECI_UTF8, RECOGNIZED_ECI_ASSIGNMENTS};
pub use mask::{Mask, MicroMask};
pub use matrix::{Cell, CellKind, Matrix};
pub use mode::EncodingMode;
pub use options::QrOptions;
pub use qr_code::QrCode;
pub use value_block::{BitWriter, ValueBlock};
pub use version::Version;
