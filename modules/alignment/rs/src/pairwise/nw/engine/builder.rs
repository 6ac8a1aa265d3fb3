use eyre::Result;
use rayon::ThreadPool;

use gpsa_core_rs::parallelism;

use super::Engine;
use crate::pairwise::nw::Tuning;

#[derive(Debug, Default)]
pub struct EngineBuilder {
    thread_pool: Option<ThreadPool>,
    tuning: Tuning,
}

impl EngineBuilder {
    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    /// Run on a dedicated pool sized by [`parallelism::available`].
    pub fn set_threads(mut self, threads: isize) -> Result<Self> {
        self.thread_pool = Some(parallelism::pool(threads)?);
        Ok(self)
    }

    pub fn set_tuning(mut self, tuning: Tuning) -> Self {
        if let Some(y) = tuning.ignored_block_size_y() {
            log::warn!(
                "block_size_y={} is ignored, blocks are square with side {}",
                y,
                tuning.block_size()
            );
        }
        self.tuning = tuning;
        self
    }

    pub fn build(self) -> Engine {
        Engine::new(self.thread_pool, self.tuning)
    }
}
