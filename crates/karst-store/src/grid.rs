use std::fmt;

use karst_chunk::Chunk;
use karst_world::{CapacityError, ChunkCoord};

/// Owning storage for loaded chunks: a dense 3D array of optional chunk
/// slots, fixed capacity at construction. Every accessor is bounds-checked;
/// coordinates outside `[0,dims)` are rejected, never wrapped or clamped.
pub struct ChunkGrid {
    dims: (usize, usize, usize),
    slots: Vec<Option<Box<Chunk>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfRange(CapacityError),
    AlreadyLoaded(ChunkCoord),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfRange(e) => write!(f, "{}", e),
            GridError::AlreadyLoaded(c) => {
                write!(f, "chunk ({},{},{}) already published", c.cx, c.cy, c.cz)
            }
        }
    }
}

impl std::error::Error for GridError {}

impl ChunkGrid {
    pub fn new(chunks_x: usize, chunks_y: usize, chunks_z: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(chunks_x * chunks_y * chunks_z, || None);
        Self {
            dims: (chunks_x, chunks_y, chunks_z),
            slots,
        }
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        self.dims
    }

    #[inline]
    pub fn in_bounds(&self, coord: ChunkCoord) -> bool {
        coord.cx >= 0
            && (coord.cx as usize) < self.dims.0
            && coord.cy >= 0
            && (coord.cy as usize) < self.dims.1
            && coord.cz >= 0
            && (coord.cz as usize) < self.dims.2
    }

    #[inline]
    fn slot_index(&self, coord: ChunkCoord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        let (dx, dy, _) = self.dims;
        Some(((coord.cz as usize * dy) + coord.cy as usize) * dx + coord.cx as usize)
    }

    /// True iff the slot holds a chunk. False for out-of-range input.
    #[inline]
    pub fn exists(&self, coord: ChunkCoord) -> bool {
        self.slot_index(coord)
            .is_some_and(|i| self.slots[i].is_some())
    }

    #[inline]
    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        let i = self.slot_index(coord)?;
        self.slots[i].as_deref()
    }

    #[inline]
    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        let i = self.slot_index(coord)?;
        self.slots[i].as_deref_mut()
    }

    /// Installs a fully built chunk into its slot. The single mutation
    /// point: a slot goes from absent to complete in one move, and an
    /// occupied slot is never overwritten.
    pub fn publish(&mut self, coord: ChunkCoord, chunk: Chunk) -> Result<(), GridError> {
        let i = self.slot_index(coord).ok_or(GridError::OutOfRange(CapacityError {
            coord,
            dims: self.dims,
        }))?;
        if self.slots[i].is_some() {
            return Err(GridError::AlreadyLoaded(coord));
        }
        self.slots[i] = Some(Box::new(chunk));
        Ok(())
    }

    pub fn loaded_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
