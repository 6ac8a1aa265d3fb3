use std::ops::Index;

use derive_getters::Dissolve;
use eyre::{ensure, eyre, Result};

use gpsa_core_rs::Alignable;

use super::algo::Grid;
use super::SequenceInfo;
use crate::pairwise::scoring::Score;

/// Dense rows x cols matrix of alignment scores stored in a single row-major buffer.
///
/// The matrix is owned by the caller; fillers only overwrite its cells in place.
#[derive(Clone, PartialEq, Debug, Dissolve)]
pub struct ScoreMatrix<S: Score> {
    rows: usize,
    cols: usize,
    cells: Vec<S>,
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    ensure!(
        rows > 0 && cols > 0,
        "Score matrix must have at least one row and one column, got {}x{}",
        rows,
        cols
    );
    rows.checked_mul(cols)
        .ok_or_else(|| eyre!("Score matrix {}x{} is too large to address", rows, cols))
}

impl<S: Score> ScoreMatrix<S> {
    /// Zero-initialized matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Self::from_vec(rows, cols, vec![S::zero(); len])
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<S>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        ensure!(
            cells.len() == len,
            "Buffer of {} cells can't hold a {}x{} score matrix",
            cells.len(),
            rows,
            cols
        );
        Ok(Self { rows, cols, cells })
    }

    /// Zero-initialized matrix shaped for the given alignment input.
    pub fn for_sequences<Seq1, Seq2>(info: &SequenceInfo<Seq1, Seq2, S>) -> Self
    where
        Seq1: Alignable,
        Seq2: Alignable<Symbol = Seq1::Symbol>,
        Seq1::Symbol: PartialEq,
    {
        let (rows, cols) = (info.rows(), info.cols());
        Self {
            rows,
            cols,
            cells: vec![S::zero(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<S> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[S] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[S] {
        &self.cells
    }

    /// Bottom-right cell: the optimal global alignment score once the matrix is filled.
    pub fn optimal(&self) -> S {
        self.cells[self.cells.len() - 1]
    }

    /// Fail unless the matrix has exactly the requested shape.
    pub fn ensure_shape(&self, rows: usize, cols: usize) -> Result<()> {
        ensure!(
            self.rows == rows && self.cols == cols,
            "Score matrix is {}x{}, but the sequences require {}x{}",
            self.rows,
            self.cols,
            rows,
            cols
        );
        Ok(())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [S] {
        &mut self.cells
    }
}

impl<S: Score> Index<(usize, usize)> for ScoreMatrix<S> {
    type Output = S;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl<S: Score> Grid<S> for ScoreMatrix<S> {
    #[inline(always)]
    fn read(&self, row: usize, col: usize) -> S {
        self[(row, col)]
    }

    #[inline(always)]
    fn write(&mut self, row: usize, col: usize, value: S) {
        debug_assert!(col < self.cols);
        self.cells[row * self.cols + col] = value;
    }
}
