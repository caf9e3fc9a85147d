use serde::{Deserialize, Serialize};

use crate::world::CHUNK_SIZE;

/// Integer triple naming a chunk's slot in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// Owning chunk of a world block coordinate. Floor division, so block
    /// -1 maps to chunk -1, not chunk 0.
    #[inline]
    pub fn of_block(wx: i32, wy: i32, wz: i32) -> Self {
        let s = CHUNK_SIZE as i32;
        Self {
            cx: wx.div_euclid(s),
            cy: wy.div_euclid(s),
            cz: wz.div_euclid(s),
        }
    }

    /// World coordinate of this chunk's minimum-corner block.
    #[inline]
    pub fn base(self) -> (i32, i32, i32) {
        let s = CHUNK_SIZE as i32;
        (self.cx * s, self.cy * s, self.cz * s)
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChunkCoord> for (i32, i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
