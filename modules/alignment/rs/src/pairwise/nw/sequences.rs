use derive_getters::{Dissolve, Getters};

use gpsa_core_rs::Alignable;

use crate::pairwise::scoring::{Scheme, Score};

/// Input of a global alignment: the sequence placed along the rows (`seq1`), the sequence placed
/// along the columns (`seq2`) and the scoring scheme shared by all cells of the grid.
#[derive(Clone, Debug, Getters, Dissolve)]
pub struct SequenceInfo<Seq1, Seq2, S: Score> {
    seq1: Seq1,
    seq2: Seq2,
    scoring: Scheme<S>,
}

impl<Seq1, Seq2, S> SequenceInfo<Seq1, Seq2, S>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: PartialEq,
{
    pub fn new(seq1: Seq1, seq2: Seq2, scoring: Scheme<S>) -> Self {
        Self {
            seq1,
            seq2,
            scoring,
        }
    }

    /// Number of grid rows: one per symbol of `seq1` plus the boundary row.
    pub fn rows(&self) -> usize {
        self.seq1.len() + 1
    }

    /// Number of grid columns: one per symbol of `seq2` plus the boundary column.
    pub fn cols(&self) -> usize {
        self.seq2.len() + 1
    }

    /// Substitution score for the interior cell (row, col), i.e. seq1[row - 1] vs seq2[col - 1].
    #[inline(always)]
    pub fn substitution(&self, row: usize, col: usize) -> S {
        self.scoring
            .symbols(self.seq1.at(row - 1), self.seq2.at(col - 1))
    }
}
