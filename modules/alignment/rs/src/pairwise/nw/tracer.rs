use std::sync::atomic::{AtomicU32, Ordering};

use impl_tools::autoimpl;

// Fillers notify the tracer about every written cell, possibly from many threads at once.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>)]
#[allow(unused_variables)]
pub trait Tracer: Sync {
    fn cell(&self, row: usize, col: usize) {}
}

impl Tracer for () {}

/// Tracer that counts how many times each cell of the grid was written.
///
/// Must be created with the shape of the filled matrix.
#[derive(Debug)]
pub struct WriteCounter {
    rows: usize,
    cols: usize,
    writes: Vec<AtomicU32>,
}

impl WriteCounter {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            writes: (0..rows * cols).map(|_| AtomicU32::new(0)).collect(),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn writes(&self, row: usize, col: usize) -> u32 {
        self.writes[row * self.cols + col].load(Ordering::Relaxed)
    }

    /// Total number of recorded writes.
    pub fn total(&self) -> u64 {
        self.writes
            .iter()
            .map(|x| x.load(Ordering::Relaxed) as u64)
            .sum()
    }

    /// True if every cell was written exactly once.
    pub fn is_write_once(&self) -> bool {
        self.writes.iter().all(|x| x.load(Ordering::Relaxed) == 1)
    }

    pub fn reset(&mut self) {
        for x in self.writes.iter_mut() {
            *x.get_mut() = 0;
        }
    }
}

impl Tracer for WriteCounter {
    #[inline(always)]
    fn cell(&self, row: usize, col: usize) {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) is outside the {}x{} write counter",
            row,
            col,
            self.rows,
            self.cols
        );
        self.writes[row * self.cols + col].fetch_add(1, Ordering::Relaxed);
    }
}
