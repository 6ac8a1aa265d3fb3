use std::ops::Range;

use derive_getters::Getters;
use derive_more::Constructor;

/// Position of a square tile in the grid of blocks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Constructor)]
pub struct Block {
    pub row: usize,
    pub col: usize,
}

impl Block {
    /// Index of the anti-diagonal the block belongs to.
    pub fn diagonal(&self) -> usize {
        self.row + self.col
    }
}

/// Partition of the interior (rows - 1) x (cols - 1) region of a score matrix into square blocks.
/// Blocks in the last row and column of the tiling may be partial.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Getters)]
pub struct Tiling {
    rows: usize,
    cols: usize,
    block_size: usize,
    block_rows: usize,
    block_cols: usize,
}

impl Tiling {
    pub fn new(rows: usize, cols: usize, block_size: usize) -> Self {
        let block_size = block_size.max(1);
        Self {
            rows,
            cols,
            block_size,
            block_rows: rows.saturating_sub(1).div_ceil(block_size),
            block_cols: cols.saturating_sub(1).div_ceil(block_size),
        }
    }

    /// Number of block anti-diagonals, zero if the matrix has no interior cells.
    pub fn diagonals(&self) -> usize {
        if self.block_rows == 0 || self.block_cols == 0 {
            0
        } else {
            self.block_rows + self.block_cols - 1
        }
    }

    /// Blocks of the given anti-diagonal ordered by block row.
    pub fn on_diagonal(&self, diagonal: usize) -> impl Iterator<Item = Block> {
        let (first, last) = if diagonal < self.diagonals() {
            (
                diagonal.saturating_sub(self.block_cols - 1),
                diagonal.min(self.block_rows - 1),
            )
        } else {
            (1, 0)
        };
        (first..=last).map(move |row| Block::new(row, diagonal - row))
    }

    /// Absolute cell ranges covered by the block, clipped to the matrix. None if the block starts
    /// outside of the matrix.
    pub fn cells(&self, block: &Block) -> Option<(Range<usize>, Range<usize>)> {
        let row_start = block.row.saturating_mul(self.block_size).saturating_add(1);
        let col_start = block.col.saturating_mul(self.block_size).saturating_add(1);
        if row_start >= self.rows || col_start >= self.cols {
            return None;
        }

        let row_end = row_start.saturating_add(self.block_size).min(self.rows);
        let col_end = col_start.saturating_add(self.block_size).min(self.cols);
        Some((row_start..row_end, col_start..col_end))
    }
}
