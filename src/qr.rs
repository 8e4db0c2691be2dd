//! QR module matrix source.

use log::debug;
use qrcode::{Color, EcLevel, QrCode};

use crate::{error::Error, Grid};

/// Low error correction keeps the symbol small enough for the OLED.
pub const DEFAULT_EC_LEVEL: EcLevel = EcLevel::L;

/// Encode `content` as a normal (non-micro) QR symbol and return its module
/// matrix without the quiet zone. `true` is a dark module.
pub fn module_grid(content: &str, level: EcLevel) -> Result<Grid, Error> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), level).map_err(Error::Qr)?;
    let width = code.width();
    debug!(
        "encoded {} bytes as {:?} symbol, {} modules",
        content.len(),
        code.version(),
        width
    );

    let grid = code
        .to_colors()
        .chunks(width)
        .map(|row| row.iter().map(|color| *color == Color::Dark).collect())
        .collect();
    Ok(grid)
}
