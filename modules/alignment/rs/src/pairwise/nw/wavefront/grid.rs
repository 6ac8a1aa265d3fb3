use std::marker::PhantomData;
use std::ops::Range;

use crate::pairwise::nw::algo::Grid;
use crate::pairwise::nw::ScoreMatrix;
use crate::pairwise::scoring::Score;

// Raw row-major view of a score matrix shared by all tasks of a wavefront run. It carries no
// access methods of its own; cells are reached only through a BlockView.
pub(crate) struct SharedGrid<'a, S: Score> {
    cells: *mut S,
    rows: usize,
    cols: usize,
    _matrix: PhantomData<&'a mut [S]>,
}

// SAFETY: the grid is a mutable borrow of the matrix buffer; concurrent access is mediated by
// BlockView whose constructor carries the aliasing contract.
unsafe impl<S: Score> Send for SharedGrid<'_, S> {}
unsafe impl<S: Score> Sync for SharedGrid<'_, S> {}

impl<'a, S: Score> SharedGrid<'a, S> {
    pub fn new(matrix: &'a mut ScoreMatrix<S>) -> Self {
        let (rows, cols) = matrix.shape();
        Self {
            cells: matrix.cells_mut().as_mut_ptr(),
            rows,
            cols,
            _matrix: PhantomData,
        }
    }
}

/// Exclusive window over one block of a [`SharedGrid`].
///
/// Writes are limited to the block itself; reads may also touch the row above and the column to
/// the left of the block.
pub(crate) struct BlockView<'g, 'a, S: Score> {
    grid: &'g SharedGrid<'a, S>,
    rows: Range<usize>,
    cols: Range<usize>,
}

impl<'g, 'a, S: Score> BlockView<'g, 'a, S> {
    /// # Safety
    ///
    /// While the view is alive:
    /// - no other code reads or writes cells inside `rows x cols`;
    /// - no other code writes the cells of row `rows.start - 1` and column `cols.start - 1`
    ///   adjacent to the block, and those cells already hold their final values.
    pub unsafe fn new(grid: &'g SharedGrid<'a, S>, rows: Range<usize>, cols: Range<usize>) -> Self {
        debug_assert!(rows.start >= 1 && rows.end <= grid.rows);
        debug_assert!(cols.start >= 1 && cols.end <= grid.cols);
        Self { grid, rows, cols }
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.grid.cols + col
    }
}

impl<S: Score> Grid<S> for BlockView<'_, '_, S> {
    #[inline(always)]
    fn read(&self, row: usize, col: usize) -> S {
        debug_assert!(row + 1 >= self.rows.start && row < self.rows.end);
        debug_assert!(col + 1 >= self.cols.start && col < self.cols.end);
        // SAFETY: the cell is inside the block or its top/left halo (see BlockView::new)
        unsafe { self.grid.cells.add(self.offset(row, col)).read() }
    }

    #[inline(always)]
    fn write(&mut self, row: usize, col: usize, value: S) {
        debug_assert!(self.rows.contains(&row) && self.cols.contains(&col));
        // SAFETY: the cell is inside the block owned exclusively by this view
        unsafe { self.grid.cells.add(self.offset(row, col)).write(value) }
    }
}
