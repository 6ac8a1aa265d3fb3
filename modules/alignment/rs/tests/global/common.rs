use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

use gpsa_alignment_rs::pairwise::nw::{ScoreMatrix, SequenceInfo, Strategy, Tuning};
use gpsa_alignment_rs::pairwise::{nw, scoring};

pub type Score = f32;
pub type Info<'a> = SequenceInfo<&'a [u8], &'a [u8], Score>;

pub const DNA: &[u8] = b"ACGT";

/// Deterministic pseudo-random sequence (64-bit LCG).
pub fn sequence(seed: u64, len: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            alphabet[((state >> 33) % alphabet.len() as u64) as usize]
        })
        .collect()
}

pub fn scheme() -> scoring::Scheme<Score> {
    scoring::Scheme::new(1.25, -0.7, -0.45)
}

pub fn pool(threads: usize) -> Result<ThreadPool> {
    Ok(ThreadPoolBuilder::new().num_threads(threads).build()?)
}

/// Bit patterns of all cells, to compare matrices without float equality shortcuts.
pub fn bits(matrix: &ScoreMatrix<Score>) -> Vec<u32> {
    matrix.as_slice().iter().map(|x| x.to_bits()).collect()
}

/// Sequential fill used as the reference for all other strategies.
pub fn oracle(info: &Info<'_>) -> Result<(ScoreMatrix<Score>, u64)> {
    let mut matrix = ScoreMatrix::for_sequences(info);
    let visited = nw::fill(&mut matrix, info, Strategy::Sequential, Tuning::default())?;
    Ok((matrix, visited))
}
