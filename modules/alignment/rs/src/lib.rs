use gpsa_core_rs::num::Float;

pub mod pairwise;

/// Pairwise alignment score - any float type that can be shared between worker threads.
pub trait Score: Float + Send + Sync {}

impl<T: Float + Send + Sync> Score for T {}
