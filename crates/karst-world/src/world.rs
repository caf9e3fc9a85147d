use std::fmt;
use std::sync::{Arc, RwLock};

use fastnoise_lite::{FastNoiseLite, NoiseType};
use karst_blocks::{Block, BlockRegistry};

use crate::chunk_coord::ChunkCoord;
use crate::worldgen::WorldGenParams;

/// Edge length of a chunk in blocks, shared by every coordinate conversion.
pub const CHUNK_SIZE: usize = 16;

/// Default grid capacity in chunk slots.
pub const DEFAULT_CHUNKS_X: usize = 512;
pub const DEFAULT_CHUNKS_Y: usize = 1024;
pub const DEFAULT_CHUNKS_Z: usize = 32;

/// World sizing plus the parameters generation samples from. The grid
/// capacity is fixed at construction; coordinates outside it are rejected,
/// never wrapped or clamped.
pub struct World {
    pub chunks_x: usize,
    pub chunks_y: usize,
    pub chunks_z: usize,
    pub seed: i32,
    pub mode: WorldGenMode,
    gen_params: RwLock<Arc<WorldGenParams>>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorldGenMode {
    Normal,
    Flat { thickness: i32 },
}

/// A chunk coordinate outside the grid's fixed capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    pub coord: ChunkCoord,
    pub dims: (usize, usize, usize),
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chunk ({},{},{}) outside grid capacity {}x{}x{}",
            self.coord.cx, self.coord.cy, self.coord.cz, self.dims.0, self.dims.1, self.dims.2
        )
    }
}

impl std::error::Error for CapacityError {}

/// Reusable per-generation state: the seeded noise sampler plus resolved
/// block ids, built once per chunk instead of per voxel.
pub struct GenCtx {
    terrain: FastNoiseLite,
    params: Arc<WorldGenParams>,
    stone: Block,
    dirt: Block,
    grass: Block,
}

impl World {
    pub fn new(
        chunks_x: usize,
        chunks_y: usize,
        chunks_z: usize,
        seed: i32,
        mode: WorldGenMode,
    ) -> Self {
        Self {
            chunks_x,
            chunks_y,
            chunks_z,
            seed,
            mode,
            gen_params: RwLock::new(Arc::new(WorldGenParams::default())),
        }
    }

    /// Reference capacity: 512 x 1024 x 32 chunk slots.
    pub fn with_default_dims(seed: i32, mode: WorldGenMode) -> Self {
        Self::new(
            DEFAULT_CHUNKS_X,
            DEFAULT_CHUNKS_Y,
            DEFAULT_CHUNKS_Z,
            seed,
            mode,
        )
    }

    #[inline]
    pub fn world_size_x(&self) -> usize {
        CHUNK_SIZE * self.chunks_x
    }

    #[inline]
    pub fn world_size_y(&self) -> usize {
        CHUNK_SIZE * self.chunks_y
    }

    #[inline]
    pub fn world_size_z(&self) -> usize {
        CHUNK_SIZE * self.chunks_z
    }

    #[inline]
    pub fn chunk_slots(&self) -> usize {
        self.chunks_x * self.chunks_y * self.chunks_z
    }

    /// True iff `coord` names a slot inside `[0,dims)` on every axis.
    #[inline]
    pub fn chunk_in_bounds(&self, coord: ChunkCoord) -> bool {
        coord.cx >= 0
            && (coord.cx as usize) < self.chunks_x
            && coord.cy >= 0
            && (coord.cy as usize) < self.chunks_y
            && coord.cz >= 0
            && (coord.cz as usize) < self.chunks_z
    }

    #[inline]
    pub fn check_chunk_bounds(&self, coord: ChunkCoord) -> Result<(), CapacityError> {
        if self.chunk_in_bounds(coord) {
            Ok(())
        } else {
            Err(CapacityError {
                coord,
                dims: (self.chunks_x, self.chunks_y, self.chunks_z),
            })
        }
    }

    #[inline]
    pub fn is_flat(&self) -> bool {
        matches!(self.mode, WorldGenMode::Flat { .. })
    }

    pub fn update_worldgen_params(&self, params: WorldGenParams) {
        if let Ok(mut guard) = self.gen_params.write() {
            *guard = Arc::new(params);
        }
    }

    pub fn make_gen_ctx(&self, reg: &BlockRegistry) -> GenCtx {
        let params = match self.gen_params.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(_) => Arc::new(WorldGenParams::default()),
        };
        let mut terrain = FastNoiseLite::with_seed(self.seed);
        terrain.set_noise_type(Some(NoiseType::OpenSimplex2));
        terrain.set_frequency(Some(params.height_frequency));
        let resolve = |name: &str| reg.block_by_name(name).unwrap_or(Block::AIR);
        GenCtx {
            terrain,
            params,
            stone: resolve("stone"),
            dirt: resolve("dirt"),
            grass: resolve("grass"),
        }
    }

    /// Terrain surface height at a column, in world blocks.
    pub fn surface_height(&self, ctx: &GenCtx, wx: i32, wz: i32) -> i32 {
        match self.mode {
            WorldGenMode::Flat { thickness } => thickness - 1,
            WorldGenMode::Normal => {
                let n = ctx.terrain.get_noise_2d(wx as f32, wz as f32);
                let n01 = (n * 0.5 + 0.5).clamp(0.0, 1.0);
                let h = ctx.params.base_height + ctx.params.height_amplitude * n01;
                (h.floor() as i32).clamp(0, self.world_size_y() as i32 - 1)
            }
        }
    }

    /// Pure sampler: the block the generator puts at a world coordinate.
    pub fn block_at(&self, ctx: &GenCtx, wx: i32, wy: i32, wz: i32) -> Block {
        if wy < 0 {
            return Block::AIR;
        }
        match self.mode {
            WorldGenMode::Flat { thickness } => {
                if wy < thickness {
                    ctx.stone
                } else {
                    Block::AIR
                }
            }
            WorldGenMode::Normal => {
                let h = self.surface_height(ctx, wx, wz);
                if wy > h {
                    Block::AIR
                } else if wy == h {
                    ctx.grass
                } else if wy >= h - ctx.params.soil_depth {
                    ctx.dirt
                } else {
                    ctx.stone
                }
            }
        }
    }
}
