use std::ops::Range;

use eyre::Result;

use gpsa_core_rs::Alignable;

use super::{ScoreMatrix, SequenceInfo, Tracer};
use crate::pairwise::scoring::{Scheme, Score};

// Cell-level access shared by the sequential filler (the whole matrix) and the wavefront
// scheduler (one block at a time).
pub(crate) trait Grid<S: Score> {
    fn read(&self, row: usize, col: usize) -> S;
    fn write(&mut self, row: usize, col: usize, value: S);
}

/// Write the first row and the first column of the matrix.
///
/// Returns the number of written cells, rows + cols - 1.
pub(crate) fn boundary<S: Score, T: Tracer>(
    matrix: &mut ScoreMatrix<S>,
    scoring: &Scheme<S>,
    tracer: &T,
) -> Result<u64> {
    let (rows, cols) = matrix.shape();
    // Both gap ramps are computed before the first write
    let first_col = (1..rows)
        .map(|row| scoring.gaps(row))
        .collect::<Result<Vec<_>>>()?;
    let first_row = (0..cols)
        .map(|col| scoring.gaps(col))
        .collect::<Result<Vec<_>>>()?;

    for (row, value) in (1..rows).zip(first_col) {
        matrix.write(row, 0, value);
        tracer.cell(row, 0);
    }
    for (col, value) in first_row.into_iter().enumerate() {
        matrix.write(0, col, value);
        tracer.cell(0, col);
    }
    Ok((rows + cols - 1) as u64)
}

/// Fill the interior cells `rows x cols` in row-major order.
///
/// The row above and the column to the left of the range must be final. Returns the number of
/// written cells.
#[inline]
pub(crate) fn fill<S, Seq1, Seq2, G, T>(
    grid: &mut G,
    info: &SequenceInfo<Seq1, Seq2, S>,
    rows: Range<usize>,
    cols: Range<usize>,
    tracer: &T,
) -> u64
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
    G: Grid<S>,
    T: Tracer,
{
    debug_assert!(rows.start >= 1 && cols.start >= 1);
    let gap = info.scoring().gap();
    let mut visited = 0;
    for row in rows {
        for col in cols.clone() {
            let diagonal = grid.read(row - 1, col - 1) + info.substitution(row, col);
            let up = grid.read(row - 1, col) + gap;
            let left = grid.read(row, col - 1) + gap;
            grid.write(row, col, diagonal.max(up).max(left));
            tracer.cell(row, col);
            visited += 1;
        }
    }
    visited
}

/// Single-threaded reference filler: boundary first, then the interior row by row.
///
/// Returns the number of written cells, which is rows * cols for any valid input.
pub fn sequential<S, Seq1, Seq2, T>(
    matrix: &mut ScoreMatrix<S>,
    info: &SequenceInfo<Seq1, Seq2, S>,
    tracer: &T,
) -> Result<u64>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
    T: Tracer,
{
    let (rows, cols) = (info.rows(), info.cols());
    matrix.ensure_shape(rows, cols)?;

    let mut visited = boundary(matrix, info.scoring(), tracer)?;
    visited += fill(matrix, info, 1..rows, 1..cols, tracer);
    Ok(visited)
}
