pub use builder::EngineBuilder;

use derive_more::Constructor;
use eyre::Result;
use rayon::ThreadPool;

use gpsa_core_rs::Alignable;

use super::{ScoreMatrix, SequenceInfo, Strategy, Tracer, Tuning};
use crate::pairwise::scoring::Score;

mod builder;

/// Reusable filler bound to a thread pool and a block size configuration.
///
/// Without a dedicated pool the work runs in the global rayon pool.
#[derive(Debug, Constructor)]
pub struct Engine {
    thread_pool: Option<ThreadPool>,
    tuning: Tuning,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn threads(&self) -> usize {
        match &self.thread_pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    pub fn fill<S, Seq1, Seq2>(
        &self,
        matrix: &mut ScoreMatrix<S>,
        info: &SequenceInfo<Seq1, Seq2, S>,
        strategy: Strategy,
    ) -> Result<u64>
    where
        S: Score,
        Seq1: Alignable + Sync,
        Seq2: Alignable<Symbol = Seq1::Symbol> + Sync,
        Seq1::Symbol: PartialEq,
    {
        self.fill_traced(matrix, info, strategy, &())
    }

    pub fn fill_traced<S, Seq1, Seq2, T>(
        &self,
        matrix: &mut ScoreMatrix<S>,
        info: &SequenceInfo<Seq1, Seq2, S>,
        strategy: Strategy,
        tracer: &T,
    ) -> Result<u64>
    where
        S: Score,
        Seq1: Alignable + Sync,
        Seq2: Alignable<Symbol = Seq1::Symbol> + Sync,
        Seq1::Symbol: PartialEq,
        T: Tracer,
    {
        let tuning = self.tuning;
        match &self.thread_pool {
            Some(pool) => {
                pool.install(|| super::fill_traced(matrix, info, strategy, tuning, tracer))
            }
            None => super::fill_traced(matrix, info, strategy, tuning, tracer),
        }
    }
}
