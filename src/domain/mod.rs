pub mod board;
pub mod item;
pub mod sampler;
