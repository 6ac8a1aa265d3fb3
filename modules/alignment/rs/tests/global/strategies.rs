use eyre::Result;
use itertools::iproduct;

use gpsa_alignment_rs::pairwise::nw::{
    self, Engine, ScoreMatrix, SequenceInfo, Strategy, Tuning, WriteCounter,
};
use gpsa_alignment_rs::pairwise::scoring::Scheme;

use crate::common::*;

const THREADS: &[usize] = &[1, 2, 3, 8];

// Default, grain-driven, x-driven, fallbacks and a block larger than any matrix
fn tunings() -> [Tuning; 6] {
    [
        Tuning::new(None, None, None),
        Tuning::new(Some(2), None, None),
        Tuning::new(Some(3), Some(16), None),
        Tuning::new(Some(1), Some(7), None),
        Tuning::new(Some(-4), Some(13), Some(2)),
        Tuning::new(Some(500), None, None),
    ]
}

#[test]
fn worked_example() -> Result<()> {
    let info = SequenceInfo::new("AC", "AC", Scheme::new(2.0f32, -1.0, -1.0));
    let pool = pool(2)?;
    for (strategy, tuning) in iproduct!(Strategy::ALL, tunings()) {
        let mut matrix = ScoreMatrix::for_sequences(&info);
        let visited = pool.install(|| nw::fill(&mut matrix, &info, strategy, tuning))?;
        assert_eq!(visited, 9);
        assert_eq!(matrix.row(0), &[0.0, -1.0, -2.0]);
        assert_eq!(matrix.row(1), &[-1.0, 2.0, 1.0]);
        assert_eq!(matrix.row(2), &[-2.0, 1.0, 4.0]);
        assert_eq!(matrix.optimal(), 4.0);
    }
    Ok(())
}

#[test]
fn strategies_are_bit_identical() -> Result<()> {
    let workload = [
        (sequence(1, 1, DNA), sequence(2, 1, DNA)),
        (sequence(3, 17, DNA), sequence(4, 5, DNA)),
        (sequence(5, 64, DNA), sequence(6, 64, DNA)),
        (sequence(7, 65, DNA), sequence(8, 129, DNA)),
        (sequence(9, 211, DNA), sequence(10, 97, b"ACGTN")),
    ];

    for &threads in THREADS {
        let pool = pool(threads)?;
        for (seq1, seq2) in &workload {
            let info = SequenceInfo::new(seq1.as_slice(), seq2.as_slice(), scheme());
            let (expected, expected_visited) = oracle(&info)?;
            assert_eq!(expected_visited as usize, info.rows() * info.cols());

            for (strategy, tuning) in iproduct!(Strategy::ALL, tunings()) {
                let mut matrix = ScoreMatrix::for_sequences(&info);
                let visited = pool.install(|| nw::fill(&mut matrix, &info, strategy, tuning))?;

                let context = format!("{strategy:?} {tuning:?} x{threads}");
                assert_eq!(visited, expected_visited, "{context}");
                assert_eq!(bits(&matrix), bits(&expected), "{context}");
            }
        }
    }
    Ok(())
}

#[test]
fn every_cell_written_once() -> Result<()> {
    let (seq1, seq2) = (sequence(11, 150, DNA), sequence(12, 83, DNA));
    let info = SequenceInfo::new(seq1.as_slice(), seq2.as_slice(), scheme());

    let pool = pool(4)?;
    for (strategy, tuning) in iproduct!(Strategy::ALL, tunings()) {
        let mut matrix = ScoreMatrix::for_sequences(&info);
        let tracer = WriteCounter::new(info.rows(), info.cols());
        let visited =
            pool.install(|| nw::fill_traced(&mut matrix, &info, strategy, tuning, &tracer))?;

        assert!(tracer.is_write_once(), "{strategy:?} {tuning:?}");
        assert_eq!(tracer.total(), visited);
    }
    Ok(())
}

#[test]
fn engine_with_dedicated_pool() -> Result<()> {
    let (seq1, seq2) = (sequence(13, 300, DNA), sequence(14, 170, DNA));
    let info = SequenceInfo::new(seq1.as_slice(), seq2.as_slice(), scheme());
    let (expected, _) = oracle(&info)?;

    for &threads in THREADS {
        let engine = Engine::builder()
            .set_thread_pool(pool(threads)?)
            .set_tuning(Tuning::default().with_block_size_x(16))
            .build();
        for strategy in Strategy::ALL {
            let mut matrix = ScoreMatrix::for_sequences(&info);
            let visited = engine.fill(&mut matrix, &info, strategy)?;
            assert_eq!(visited as usize, 301 * 171);
            assert_eq!(bits(&matrix), bits(&expected));
        }
    }
    Ok(())
}

#[test]
fn identical_sequences_score_all_matches() -> Result<()> {
    let seq = sequence(15, 120, DNA);
    let info = SequenceInfo::new(
        seq.as_slice(),
        seq.as_slice(),
        Scheme::new(1.0f32, -1.0, -1.0),
    );
    let tuning = Tuning::default().with_grain_size(8);
    for strategy in Strategy::ALL {
        let mut matrix = ScoreMatrix::for_sequences(&info);
        nw::fill(&mut matrix, &info, strategy, tuning)?;
        assert_eq!(matrix.optimal(), 120.0);
    }
    Ok(())
}
