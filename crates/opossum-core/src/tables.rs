//! Byte-position permutation table construction.

use crate::block::BLOCK_BYTES;

/// Side length of the square matrix view of a block.
const GRID: usize = 16;

const _: () = assert!(GRID * GRID == BLOCK_BYTES);

/// Builds the byte-position permutation used by the permute step.
///
/// Byte positions are read as a 16×16 row-major matrix and every row is
/// shifted left by its own row index (row 0 stays put). The returned
/// table maps source position to destination position.
pub fn row_shift_permutation() -> [usize; BLOCK_BYTES] {
    let mut perm = [0usize; BLOCK_BYTES];
    for row in 0..GRID {
        for col in 0..GRID {
            let new_col = (col + GRID - row) % GRID;
            perm[row * GRID + col] = row * GRID + new_col;
        }
    }
    perm
}
