use std::ops::Range;

use derive_getters::Getters;
use eyre::Result;
use rayon::prelude::*;

use gpsa_core_rs::Alignable;

use grid::{BlockView, SharedGrid};
pub use tiling::{Block, Tiling};

use super::{algo, ScoreMatrix, SequenceInfo, Tracer, VisitedCounter};
use crate::pairwise::scoring::Score;

mod grid;
mod tiling;

/// How the blocks of one anti-diagonal are handed over to the thread pool.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Granularity {
    /// One parallel loop per diagonal, one block per work item.
    Batch,
    /// One spawned task per block inside a scope per diagonal.
    Task,
}

/// Block-parallel wavefront filler.
///
/// The interior of the matrix is tiled into square blocks that are processed diagonal by
/// diagonal. Blocks of the same anti-diagonal are independent and run concurrently; the next
/// diagonal starts only once all of them have finished. Runs in the current rayon pool.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Getters)]
pub struct Wavefront {
    granularity: Granularity,
    block_size: usize,
}

impl Wavefront {
    pub fn new(granularity: Granularity, block_size: usize) -> Self {
        Self {
            granularity,
            block_size: block_size.max(1),
        }
    }

    pub fn run<S, Seq1, Seq2, T>(
        &self,
        matrix: &mut ScoreMatrix<S>,
        info: &SequenceInfo<Seq1, Seq2, S>,
        tracer: &T,
    ) -> Result<u64>
    where
        S: Score,
        Seq1: Alignable + Sync,
        Seq2: Alignable<Symbol = Seq1::Symbol> + Sync,
        Seq1::Symbol: PartialEq,
        T: Tracer,
    {
        let (rows, cols) = (info.rows(), info.cols());
        matrix.ensure_shape(rows, cols)?;

        let tiling = Tiling::new(rows, cols, self.block_size);
        log::debug!(
            "Wavefront fill of a {}x{} matrix: {}x{} blocks of size {}, {} diagonals, {:?} granularity",
            rows,
            cols,
            tiling.block_rows(),
            tiling.block_cols(),
            self.block_size,
            tiling.diagonals(),
            self.granularity
        );

        let visited = VisitedCounter::new();
        visited.add(algo::boundary(matrix, info.scoring(), tracer)?);

        let grid = SharedGrid::new(matrix);
        let fill = |(brows, bcols): &(Range<usize>, Range<usize>)| {
            // SAFETY: blocks of one diagonal cover disjoint cells, and the halo of each block
            // belongs to the boundary or to earlier diagonals that have already joined.
            let mut view = unsafe { BlockView::new(&grid, brows.clone(), bcols.clone()) };
            algo::fill(&mut view, info, brows.clone(), bcols.clone(), tracer)
        };

        let mut blocks = Vec::with_capacity((*tiling.block_rows()).min(*tiling.block_cols()));
        for diagonal in 0..tiling.diagonals() {
            // Blocks starting outside of the matrix hold no cells and are skipped
            blocks.clear();
            blocks.extend(
                tiling
                    .on_diagonal(diagonal)
                    .filter_map(|block| tiling.cells(&block)),
            );
            self.dispatch(&blocks, &visited, &fill);
        }

        Ok(visited.into_total())
    }

    // Parallel-for over independent work items; returns only after all of them are done.
    fn dispatch<W, F>(&self, items: &[W], visited: &VisitedCounter, job: &F)
    where
        W: Sync,
        F: Fn(&W) -> u64 + Sync,
    {
        match self.granularity {
            Granularity::Batch => {
                let cells: u64 = items.par_iter().with_max_len(1).map(job).sum();
                visited.add(cells);
            }
            Granularity::Task => rayon::scope(|s| {
                for item in items {
                    s.spawn(move |_| visited.add(job(item)));
                }
            }),
        }
    }
}
