//! Black/white bitmap source for pre-rendered PNG images.

use image::{io::Reader, GrayImage};
use log::debug;
use std::path::Path;

use crate::{error::Error, Grid, BITMAP_32_SIDE};

/// Luminance below this value is black.
pub const BLACK_THRESHOLD: u8 = 128;

/// Fixed midpoint cut, no dithering.
pub fn is_black(luma: u8) -> bool {
    luma < BLACK_THRESHOLD
}

/// Threshold a grayscale image into a grid, row-major.
pub fn threshold(image: &GrayImage) -> Grid {
    let (width, height) = image.dimensions();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| is_black(image.get_pixel(x, y)[0]))
                .collect()
        })
        .collect()
}

/// Load a 32x32 image and threshold it.
///
/// The format is detected from the file contents, not the extension. The
/// dimensions are read from the image header and checked before any pixel
/// is decoded or converted.
pub fn load_bitmap_32(path: &Path) -> Result<Grid, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let side = BITMAP_32_SIDE as u32;
    let dimensions = Reader::open(path)?.with_guessed_format()?.into_dimensions()?;
    debug!("{} is {}x{}", path.display(), dimensions.0, dimensions.1);
    if dimensions != (side, side) {
        return Err(Error::DimensionMismatch {
            expected: (side, side),
            actual: dimensions,
        });
    }

    let gray = Reader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_luma8();
    Ok(threshold(&gray))
}
