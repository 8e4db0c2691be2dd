//! Firmware asset generators
//!
//! This crate turns QR payloads, small black/white PNG images and DOCX
//! documents into files the firmware build consumes: C headers holding a
//! 1bpp packed bitmap, or plain text.
//!
//! # Example
//!
//! ```rust,no_run
//! use fw_assets::{emit, module_grid, pack, HeaderLayout, DEFAULT_EC_LEVEL};
//! use std::path::Path;
//!
//! let grid = module_grid("http://example.com", DEFAULT_EC_LEVEL).unwrap();
//! let packed = pack(&grid).unwrap();
//! emit(
//!     Path::new("qr.h"),
//!     &HeaderLayout::qr_modules(),
//!     packed.modules(),
//!     packed.bytes(),
//!     "http://example.com",
//! )
//! .unwrap();
//! ```

pub mod cli;

mod bitmap;
mod docx;
mod error;
mod header;
mod pack;
mod qr;

pub use crate::{
    bitmap::{is_black, load_bitmap_32, threshold, BLACK_THRESHOLD},
    docx::{extract, paragraphs, write_text, DOCUMENT_ENTRY},
    error::Error,
    header::{emit, emit_bitmap_32, escape_comment, render, HeaderLayout},
    pack::{pack, packed_len, stride, unpack, PackedBits},
    qr::{module_grid, DEFAULT_EC_LEVEL},
};

pub use qrcode::EcLevel;

/// Square grid of cells, row-major. `true` is a black module or pixel.
///
/// Each inner `Vec<bool>` is one row; a valid grid has as many cells per row
/// as it has rows.
pub type Grid = Vec<Vec<bool>>;

/// Side length of the fixed-size PNG bitmap.
pub const BITMAP_32_SIDE: usize = 32;

/// Bytes per packed row of the fixed-size bitmap (32 / 8 = 4).
pub const BITMAP_32_STRIDE: usize = 4;

/// Packed length of the fixed-size bitmap (32 rows * 4 bytes = 128).
pub const BITMAP_32_LEN: usize = BITMAP_32_SIDE * BITMAP_32_STRIDE;
