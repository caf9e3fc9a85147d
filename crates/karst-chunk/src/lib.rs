//! Dense per-chunk block storage and chunk generation.
#![forbid(unsafe_code)]

use karst_blocks::{Block, BlockId, BlockRegistry};
use karst_world::{CHUNK_SIZE, ChunkCoord, CapacityError, World};

/// One cubic volume of block cells, addressed either by local offsets in
/// `[0, CHUNK_SIZE)` or by world coordinates inside the chunk's footprint.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    blocks: Vec<Block>,
}

impl Chunk {
    pub const VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

    /// An all-air chunk at `coord`.
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![Block::AIR; Self::VOLUME],
        }
    }

    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        (y * CHUNK_SIZE + z) * CHUNK_SIZE + x
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> Block {
        self.blocks[Self::idx(x, y, z)]
    }

    #[inline]
    pub fn set_local(&mut self, x: usize, y: usize, z: usize, b: Block) {
        self.blocks[Self::idx(x, y, z)] = b;
    }

    /// Whether a world coordinate falls inside this chunk's volume.
    #[inline]
    pub fn contains_world(&self, wx: i32, wy: i32, wz: i32) -> bool {
        let (bx, by, bz) = self.coord.base();
        let s = CHUNK_SIZE as i32;
        wx >= bx && wx < bx + s && wy >= by && wy < by + s && wz >= bz && wz < bz + s
    }

    #[inline]
    fn local_of_world(&self, wx: i32, wy: i32, wz: i32) -> Option<(usize, usize, usize)> {
        if !self.contains_world(wx, wy, wz) {
            return None;
        }
        let (bx, by, bz) = self.coord.base();
        Some(((wx - bx) as usize, (wy - by) as usize, (wz - bz) as usize))
    }

    #[inline]
    pub fn get_world(&self, wx: i32, wy: i32, wz: i32) -> Option<Block> {
        self.local_of_world(wx, wy, wz)
            .map(|(x, y, z)| self.get_local(x, y, z))
    }

    /// Writes a block by world coordinate. Coordinates outside the chunk's
    /// volume are ignored; returns whether the write landed.
    pub fn set_block_from_world(&mut self, wx: i32, wy: i32, wz: i32, b: Block) -> bool {
        match self.local_of_world(wx, wy, wz) {
            Some((x, y, z)) => {
                self.set_local(x, y, z, b);
                true
            }
            None => false,
        }
    }

    /// Block id at a world coordinate; 0 (air) outside the chunk's volume.
    #[inline]
    pub fn get_block_id(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        self.get_world(wx, wy, wz).map(|b| b.id).unwrap_or(0)
    }

    /// Opacity at a world coordinate; not opaque outside the volume.
    #[inline]
    pub fn is_opaque_from_world(&self, reg: &BlockRegistry, wx: i32, wy: i32, wz: i32) -> bool {
        self.get_world(wx, wy, wz)
            .map(|b| reg.is_opaque(b))
            .unwrap_or(false)
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.blocks.iter().any(|b| !b.is_air())
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// Runs procedural generation for every cell of the chunk at `coord`.
/// Rejects coordinates outside the world's grid capacity.
pub fn generate_chunk(
    world: &World,
    coord: ChunkCoord,
    reg: &BlockRegistry,
) -> Result<Chunk, CapacityError> {
    world.check_chunk_bounds(coord)?;
    let ctx = world.make_gen_ctx(reg);
    let (bx, by, bz) = coord.base();
    let mut chunk = Chunk::new(coord);
    for y in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let b = world.block_at(&ctx, bx + x as i32, by + y as i32, bz + z as i32);
                if !b.is_air() {
                    chunk.set_local(x, y, z, b);
                }
            }
        }
    }
    Ok(chunk)
}
