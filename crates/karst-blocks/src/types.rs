pub type BlockId = u16;

/// The per-cell payload: a numeric block type id, copied by value into and
/// out of chunk storage. Id 0 is always air.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub id: BlockId,
}

impl Block {
    pub const AIR: Block = Block { id: 0 };

    #[inline]
    pub const fn new(id: BlockId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn is_air(self) -> bool {
        self.id == 0
    }
}

impl From<BlockId> for Block {
    fn from(id: BlockId) -> Self {
        Self { id }
    }
}

/// Static properties of one block type.
#[derive(Clone, Debug)]
pub struct BlockType {
    pub name: String,
    /// Occupies its cell (collisions, face culling).
    pub solid: bool,
    /// Rendered in the non-opaque pass even when solid (glass, water, leaves).
    pub transparent: bool,
}
