//! World sizing, chunk coordinates, and the procedural generation sampler.
#![forbid(unsafe_code)]

pub mod chunk_coord;
pub mod world;
pub mod worldgen;

pub use chunk_coord::ChunkCoord;
pub use world::{CHUNK_SIZE, CapacityError, GenCtx, World, WorldGenMode};
pub use worldgen::{WorldGenParams, load_params_from_path};
