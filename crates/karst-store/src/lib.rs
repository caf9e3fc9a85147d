//! Chunk grid, load-queue discipline, and the block-level world facade.
#![forbid(unsafe_code)]

pub mod grid;
pub mod render;
pub mod store;

pub use grid::{ChunkGrid, GridError};
pub use render::RenderSink;
pub use store::BlockStore;
