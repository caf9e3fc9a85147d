use karst_blocks::{Block, BlockRegistry};
use karst_chunk::{Chunk, generate_chunk};
use karst_world::{CHUNK_SIZE, ChunkCoord, World, WorldGenMode};
use proptest::prelude::*;

fn coord_component() -> impl Strategy<Value = i32> {
    -1_000i32..=1_000
}

// idx maps each local (x,y,z) to a unique in-range slot
#[test]
fn idx_is_unique_and_in_range() {
    let mut seen = vec![false; Chunk::VOLUME];
    for y in 0..CHUNK_SIZE { for z in 0..CHUNK_SIZE { for x in 0..CHUNK_SIZE {
        let i = Chunk::idx(x, y, z);
        assert!(i < Chunk::VOLUME);
        assert!(!seen[i]);
        seen[i] = true;
    }}}
    assert!(seen.into_iter().all(|b| b));
}

proptest! {
    // contains_world and get_world agree at the footprint edges
    #[test]
    fn contains_world_and_get_world_agree(cx in coord_component(), cy in coord_component(), cz in coord_component()) {
        let chunk = Chunk::new(ChunkCoord::new(cx, cy, cz));
        let (bx, by, bz) = chunk.coord.base();
        let s = CHUNK_SIZE as i32;
        let candidates = [
            (bx, by, bz),
            (bx + s - 1, by + s - 1, bz + s - 1),
            (bx - 1, by, bz),
            (bx + s, by, bz),
            (bx, by - 1, bz),
            (bx, by + s, bz),
            (bx, by, bz - 1),
            (bx, by, bz + s),
        ];
        for (wx, wy, wz) in candidates {
            let inside = wx >= bx && wx < bx + s && wy >= by && wy < by + s && wz >= bz && wz < bz + s;
            prop_assert_eq!(chunk.contains_world(wx, wy, wz), inside);
            prop_assert_eq!(chunk.get_world(wx, wy, wz).is_some(), inside);
        }
    }

    // set then get round-trips through world coordinates
    #[test]
    fn set_get_world_round_trip(
        cx in coord_component(), cy in coord_component(), cz in coord_component(),
        lx in 0usize..CHUNK_SIZE, ly in 0usize..CHUNK_SIZE, lz in 0usize..CHUNK_SIZE,
        id in 1u16..=500,
    ) {
        let mut chunk = Chunk::new(ChunkCoord::new(cx, cy, cz));
        let (bx, by, bz) = chunk.coord.base();
        let (wx, wy, wz) = (bx + lx as i32, by + ly as i32, bz + lz as i32);
        prop_assert!(chunk.set_block_from_world(wx, wy, wz, Block::new(id)));
        prop_assert_eq!(chunk.get_block_id(wx, wy, wz), id);
        prop_assert_eq!(chunk.get_local(lx, ly, lz), Block::new(id));
        // A write outside the footprint is ignored
        prop_assert!(!chunk.set_block_from_world(bx - 1, wy, wz, Block::new(id)));
    }
}

#[test]
fn new_chunk_is_all_air() {
    let chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
    assert!(!chunk.has_non_air());
    assert_eq!(chunk.get_block_id(0, 0, 0), 0);
}

#[test]
fn opacity_answers_through_registry() {
    let reg = BlockRegistry::with_defaults();
    let mut chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
    let stone = reg.block_by_name("stone").unwrap();
    let glass = reg.block_by_name("glass").unwrap();
    chunk.set_block_from_world(1, 2, 3, stone);
    chunk.set_block_from_world(4, 5, 6, glass);
    assert!(chunk.is_opaque_from_world(&reg, 1, 2, 3));
    assert!(!chunk.is_opaque_from_world(&reg, 4, 5, 6));
    assert!(!chunk.is_opaque_from_world(&reg, 0, 0, 0)); // air
    assert!(!chunk.is_opaque_from_world(&reg, -1, 0, 0)); // outside
}

#[test]
fn generate_flat_chunk_matches_sampler() {
    let reg = BlockRegistry::with_defaults();
    let world = World::new(4, 4, 4, 42, WorldGenMode::Flat { thickness: 2 });
    let chunk = generate_chunk(&world, ChunkCoord::new(1, 0, 1), &reg).unwrap();
    let stone = reg.block_by_name("stone").unwrap();
    assert_eq!(chunk.get_world(20, 0, 20), Some(stone));
    assert_eq!(chunk.get_world(20, 1, 20), Some(stone));
    assert_eq!(chunk.get_world(20, 2, 20), Some(Block::AIR));
    // Chunks above the slab are generated empty
    let above = generate_chunk(&world, ChunkCoord::new(1, 1, 1), &reg).unwrap();
    assert!(!above.has_non_air());
}

#[test]
fn generate_rejects_out_of_capacity() {
    let reg = BlockRegistry::with_defaults();
    let world = World::new(4, 4, 4, 42, WorldGenMode::Flat { thickness: 1 });
    assert!(generate_chunk(&world, ChunkCoord::new(4, 0, 0), &reg).is_err());
    assert!(generate_chunk(&world, ChunkCoord::new(0, -1, 0), &reg).is_err());
}
