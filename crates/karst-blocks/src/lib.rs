//! Block value type and the registry that gives ids meaning.
#![forbid(unsafe_code)]

pub mod registry;
pub mod types;

pub use registry::BlockRegistry;
pub use types::{Block, BlockId, BlockType};
