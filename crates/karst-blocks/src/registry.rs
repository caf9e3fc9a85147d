use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::{Block, BlockId, BlockType};

/// Maps block ids to their static properties. Id 0 is always air; ids are
/// assigned in declaration order so a given config yields stable ids.
#[derive(Clone, Debug)]
pub struct BlockRegistry {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
}

impl BlockRegistry {
    /// Registry containing only air.
    pub fn empty() -> Self {
        let mut reg = Self {
            blocks: Vec::new(),
            by_name: HashMap::new(),
        };
        reg.push(BlockType {
            name: "air".to_string(),
            solid: false,
            transparent: true,
        });
        reg
    }

    /// The built-in set the generator and tests rely on.
    pub fn with_defaults() -> Self {
        let mut reg = Self::empty();
        for (name, solid, transparent) in [
            ("stone", true, false),
            ("dirt", true, false),
            ("grass", true, false),
            ("water", true, true),
            ("glass", true, true),
        ] {
            reg.push(BlockType {
                name: name.to_string(),
                solid,
                transparent,
            });
        }
        reg
    }

    fn push(&mut self, ty: BlockType) -> BlockId {
        let id = self.blocks.len() as BlockId;
        self.by_name.insert(ty.name.clone(), id);
        self.blocks.push(ty);
        id
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn block_by_name(&self, name: &str) -> Option<Block> {
        self.id_by_name(name).map(Block::new)
    }

    /// Whether a block blocks light/visibility. Air is never opaque; ids the
    /// registry does not know are treated as non-opaque.
    #[inline]
    pub fn is_opaque(&self, b: Block) -> bool {
        match self.get(b.id) {
            Some(ty) => ty.solid && !ty.transparent,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Loads a registry from TOML. Air is implicit at id 0; entries get ids
    /// 1.. in file order. A `name = "air"` entry is rejected rather than
    /// silently shadowing the sentinel.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        let mut reg = Self::empty();
        for entry in cfg.blocks {
            if entry.name == "air" {
                return Err(format!("block name {:?} is reserved", entry.name).into());
            }
            if reg.by_name.contains_key(&entry.name) {
                return Err(format!("duplicate block name {:?}", entry.name).into());
            }
            reg.push(BlockType {
                name: entry.name,
                solid: entry.solid,
                transparent: entry.transparent,
            });
        }
        Ok(reg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// --- Config ---

#[derive(Deserialize)]
struct BlocksConfig {
    #[serde(default)]
    blocks: Vec<BlockEntry>,
}

#[derive(Deserialize)]
struct BlockEntry {
    name: String,
    #[serde(default = "default_solid")]
    solid: bool,
    #[serde(default)]
    transparent: bool,
}

fn default_solid() -> bool {
    true
}
