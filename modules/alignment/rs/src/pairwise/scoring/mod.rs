use derive_getters::Dissolve;
use derive_more::Constructor;
use eyre::Result;

use gpsa_core_rs::num;

pub use crate::Score;

/// Linear gap scoring: a fixed score for identical and for different symbols, and a fixed
/// penalty for every symbol aligned against a gap.
#[derive(Clone, Copy, PartialEq, Debug, Constructor, Dissolve)]
pub struct Scheme<S: Score> {
    pub match_score: S,
    pub mismatch_score: S,
    pub gap_penalty: S,
}

impl<S: Score> Scheme<S> {
    #[inline(always)]
    pub fn symbols<T: PartialEq + ?Sized>(&self, a: &T, b: &T) -> S {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    #[inline(always)]
    pub fn gap(&self) -> S {
        self.gap_penalty
    }

    /// Score of a prefix of `offset` symbols aligned entirely against gaps.
    pub fn gaps(&self, offset: usize) -> Result<S> {
        Ok(num::offset::<S>(offset)? * self.gap_penalty)
    }
}
