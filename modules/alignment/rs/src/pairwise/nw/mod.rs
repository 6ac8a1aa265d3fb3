//! Global (Needleman-Wunsch) alignment score matrix and its fillers.
//!
//! All fillers produce bit-identical matrices; they only differ in how the interior of the
//! matrix is scheduled.

pub use engine::{Engine, EngineBuilder};
pub use matrix::ScoreMatrix;
pub use sequences::SequenceInfo;
pub use tracer::{Tracer, WriteCounter};
pub use tuning::Tuning;
pub use visited::VisitedCounter;
pub use wavefront::{Granularity, Wavefront};

use eyre::Result;

use gpsa_core_rs::Alignable;

use crate::pairwise::scoring::Score;

pub mod algo;
mod engine;
mod matrix;
mod sequences;
mod tracer;
mod tuning;
mod visited;
pub mod wavefront;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Strategy {
    /// Row-major single-threaded fill.
    #[default]
    Sequential,
    /// Wavefront, blocks of a diagonal submitted as one parallel loop.
    WavefrontLoop,
    /// Wavefront, every block submitted as its own task.
    WavefrontTasks,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Sequential,
        Strategy::WavefrontLoop,
        Strategy::WavefrontTasks,
    ];

    /// Submission granularity of the wavefront strategies, None for the sequential one.
    pub fn granularity(&self) -> Option<Granularity> {
        match self {
            Strategy::Sequential => None,
            Strategy::WavefrontLoop => Some(Granularity::Batch),
            Strategy::WavefrontTasks => Some(Granularity::Task),
        }
    }
}

/// Fill the score matrix with the selected strategy in the current rayon pool.
///
/// Returns the number of written cells, equal to rows * cols.
pub fn fill<S, Seq1, Seq2>(
    matrix: &mut ScoreMatrix<S>,
    info: &SequenceInfo<Seq1, Seq2, S>,
    strategy: Strategy,
    tuning: Tuning,
) -> Result<u64>
where
    S: Score,
    Seq1: Alignable + Sync,
    Seq2: Alignable<Symbol = Seq1::Symbol> + Sync,
    Seq1::Symbol: PartialEq,
{
    fill_traced(matrix, info, strategy, tuning, &())
}

/// Same as [`fill`], reporting every written cell to the tracer.
pub fn fill_traced<S, Seq1, Seq2, T>(
    matrix: &mut ScoreMatrix<S>,
    info: &SequenceInfo<Seq1, Seq2, S>,
    strategy: Strategy,
    tuning: Tuning,
    tracer: &T,
) -> Result<u64>
where
    S: Score,
    Seq1: Alignable + Sync,
    Seq2: Alignable<Symbol = Seq1::Symbol> + Sync,
    Seq1::Symbol: PartialEq,
    T: Tracer,
{
    match strategy.granularity() {
        None => algo::sequential(matrix, info, tracer),
        Some(granularity) => {
            let block_size = tuning.block_size();
            if let Some(y) = tuning.ignored_block_size_y() {
                log::debug!("block_size_y={} is ignored, block side is {}", y, block_size);
            }
            Wavefront::new(granularity, block_size).run(matrix, info, tracer)
        }
    }
}
