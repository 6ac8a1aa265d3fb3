use derive_more::Constructor;

/// Block size parameters supplied by the caller.
///
/// Values that are absent, negative, zero or one are treated as "not set".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Constructor)]
pub struct Tuning {
    pub grain_size: Option<isize>,
    pub block_size_x: Option<isize>,
    // Accepted for symmetry with block_size_x, blocks are always square.
    pub block_size_y: Option<isize>,
}

fn resolved(value: Option<isize>) -> Option<usize> {
    value.filter(|x| *x > 1).map(|x| x as usize)
}

impl Tuning {
    pub const DEFAULT_BLOCK_SIZE: usize = 64;

    pub fn with_grain_size(mut self, grain_size: isize) -> Self {
        self.grain_size = Some(grain_size);
        self
    }

    pub fn with_block_size_x(mut self, block_size: isize) -> Self {
        self.block_size_x = Some(block_size);
        self
    }

    pub fn with_block_size_y(mut self, block_size: isize) -> Self {
        self.block_size_y = Some(block_size);
        self
    }

    /// Side of the square blocks: grain size first, then block_size_x, then the default.
    pub fn block_size(&self) -> usize {
        resolved(self.grain_size)
            .or_else(|| resolved(self.block_size_x))
            .unwrap_or(Self::DEFAULT_BLOCK_SIZE)
    }

    /// block_size_y when it is set and disagrees with the square block side.
    pub fn ignored_block_size_y(&self) -> Option<usize> {
        resolved(self.block_size_y).filter(|y| *y != self.block_size())
    }
}
