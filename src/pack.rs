//! 1bpp bit packing.
//!
//! Rows are packed row-major, MSB-first: the leftmost cell of each group of
//! eight lands in bit 7. Every row occupies `stride(n)` bytes and the unused
//! low bits of a row's last byte are zero.

use log::debug;

use crate::{error::Error, Grid};

/// Number of bytes holding one packed row of `n` cells.
pub fn stride(n: usize) -> usize {
    (n + 7) / 8
}

/// Total packed length of an `n`x`n` grid.
pub fn packed_len(n: usize) -> usize {
    n * stride(n)
}

/// Packed square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    modules: usize,
    bytes: Vec<u8>,
}

impl PackedBits {
    /// Number of modules (or pixels) along one side.
    pub fn modules(&self) -> usize {
        self.modules
    }

    pub fn stride(&self) -> usize {
        stride(self.modules)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read back the cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> bool {
        let byte = self.bytes[y * self.stride() + x / 8];
        byte & (0x80 >> (x % 8)) != 0
    }
}

/// Pack a square grid of cells into a 1bpp buffer.
///
/// Fails with [`Error::EmptyGrid`] or [`Error::NotSquare`] before producing
/// any output.
pub fn pack(grid: &[Vec<bool>]) -> Result<PackedBits, Error> {
    let n = grid.len();
    if n == 0 {
        return Err(Error::EmptyGrid);
    }
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != n {
            return Err(Error::NotSquare {
                row,
                len: cells.len(),
                rows: n,
            });
        }
    }

    let mut bytes: Vec<u8> = Vec::with_capacity(packed_len(n));
    for row in grid {
        for xb in (0..n).step_by(8) {
            let mut byte: u8 = 0x00;
            for bit in 0..8 {
                let x = xb + bit;
                if x < n && row[x] {
                    byte |= 1 << (7 - bit);
                }
            }
            bytes.push(byte);
        }
    }
    debug!(
        "packed {}x{} grid into {} bytes (stride {})",
        n,
        n,
        bytes.len(),
        stride(n)
    );

    Ok(PackedBits { modules: n, bytes })
}

/// Expand a packed buffer back into a grid, dropping the padding bits.
pub fn unpack(packed: &PackedBits) -> Grid {
    let n = packed.modules();
    (0..n)
        .map(|y| (0..n).map(|x| packed.get(x, y)).collect())
        .collect()
}
