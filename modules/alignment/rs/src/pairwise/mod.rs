pub mod nw;
pub mod scoring;
