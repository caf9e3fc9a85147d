use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use hashbrown::HashSet;
use karst_blocks::{Block, BlockId, BlockRegistry};
use karst_chunk::Chunk;
use karst_geom::{Camera, Cuboid, Point3};
use karst_runtime::{GenJob, GenJobOut, Runtime};
use karst_world::{CapacityError, ChunkCoord, World};

use crate::grid::ChunkGrid;
use crate::render::RenderSink;

/// The world facade: owns the chunk grid and the load queue, and exposes
/// the per-block read/write/query API on top of them.
///
/// Streaming discipline: `request_load` appends to a FIFO queue; at most one
/// generation job is ever in flight; completions are applied by
/// [`BlockStore::process_completions`] on the owning thread, which is the
/// only place chunks become visible. Readers therefore see a slot as either
/// absent or fully generated, never in between.
pub struct BlockStore {
    world: Arc<World>,
    reg: Arc<BlockRegistry>,
    runtime: Runtime,
    grid: ChunkGrid,
    /// Publication order, append-only.
    loaded: Vec<ChunkCoord>,
    /// Head = coordinate currently being (or about to be) generated.
    pending: VecDeque<ChunkCoord>,
    /// Guard against duplicate enqueue of a not-yet-published coordinate.
    queued: HashSet<ChunkCoord>,
    in_flight: bool,
    next_job_id: u64,
}

impl BlockStore {
    pub fn new(world: Arc<World>, reg: Arc<BlockRegistry>) -> Self {
        let grid = ChunkGrid::new(world.chunks_x, world.chunks_y, world.chunks_z);
        let runtime = Runtime::new(world.clone());
        Self {
            world,
            reg,
            runtime,
            grid,
            loaded: Vec::new(),
            pending: VecDeque::new(),
            queued: HashSet::new(),
            in_flight: false,
            next_job_id: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.reg
    }

    // --- Load queue ---

    /// Queues a chunk for generation. Out-of-range coordinates are rejected
    /// synchronously; coordinates already loaded or already queued are
    /// ignored, so requesting twice yields exactly one generation.
    pub fn request_load(&mut self, coord: ChunkCoord) -> Result<(), CapacityError> {
        self.world.check_chunk_bounds(coord)?;
        if self.grid.exists(coord) || self.queued.contains(&coord) {
            return Ok(());
        }
        self.queued.insert(coord);
        self.pending.push_back(coord);
        self.dispatch_next();
        Ok(())
    }

    /// Queues every chunk in a chunk-coordinate cuboid, skipping out-of-range
    /// slots rather than failing the whole request.
    pub fn request_load_region(&mut self, region: Cuboid) -> usize {
        let mut accepted = 0;
        for p in region.cells() {
            let coord = ChunkCoord::new(p.x, p.y, p.z);
            if self.world.chunk_in_bounds(coord) && self.request_load(coord).is_ok() {
                accepted += 1;
            }
        }
        accepted
    }

    fn dispatch_next(&mut self) {
        if self.in_flight {
            return;
        }
        // Always the current queue head, not the just-enqueued coordinate.
        if let Some(&head) = self.pending.front() {
            let job_id = self.next_job_id;
            self.next_job_id += 1;
            self.runtime.submit(GenJob {
                coord: head,
                job_id,
                reg: self.reg.clone(),
            });
            self.in_flight = true;
        }
    }

    /// Applies every completion sitting in the result channel, then
    /// dispatches the next queued coordinate if any. Returns the number of
    /// chunks published. Call this from the owning thread (e.g. once per
    /// frame).
    pub fn process_completions(&mut self) -> usize {
        let mut published = 0;
        for out in self.runtime.drain_results() {
            if self.apply_completion(out) {
                published += 1;
            }
        }
        self.dispatch_next();
        published
    }

    fn apply_completion(&mut self, out: GenJobOut) -> bool {
        let coord = out.coord;
        if self.pending.front() == Some(&coord) {
            self.pending.pop_front();
        } else {
            // Completion for a coordinate that is not the head means the
            // queue and worker disagree; drop the stale entry if present.
            log::error!(
                "completion for ({},{},{}) does not match queue head",
                coord.cx,
                coord.cy,
                coord.cz
            );
            self.pending.retain(|c| *c != coord);
        }
        self.queued.remove(&coord);
        self.in_flight = false;
        match out.result {
            Ok(chunk) => match self.grid.publish(coord, chunk) {
                Ok(()) => {
                    self.loaded.push(coord);
                    true
                }
                Err(e) => {
                    log::warn!("publish failed: {}", e);
                    false
                }
            },
            Err(e) => {
                // The coordinate is dropped, not retried; the queue advances
                // regardless so a failure can never wedge the worker.
                log::warn!("chunk generation failed: {}", e);
                false
            }
        }
    }

    /// Pumps completions until the queue is empty and nothing is in flight,
    /// or the timeout elapses. Returns whether idle was reached.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.process_completions();
            if self.is_idle() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            if let Some(out) = self.runtime.recv_result_timeout(deadline - now) {
                self.apply_completion(out);
                self.dispatch_next();
            }
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && !self.in_flight
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    // --- Chunk-level access ---

    /// Whether the chunk owning a world block coordinate is loaded.
    #[inline]
    pub fn chunk_exists(&self, wx: i32, wy: i32, wz: i32) -> bool {
        self.grid.exists(ChunkCoord::of_block(wx, wy, wz))
    }

    #[inline]
    pub fn chunk_exists_point(&self, p: Point3) -> bool {
        self.chunk_exists(p.x, p.y, p.z)
    }

    /// The loaded chunk owning a world block coordinate.
    #[inline]
    pub fn get_chunk(&self, wx: i32, wy: i32, wz: i32) -> Option<&Chunk> {
        self.grid.get(ChunkCoord::of_block(wx, wy, wz))
    }

    /// Direct slot access by chunk coordinate.
    #[inline]
    pub fn get_chunk_at(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.grid.get(coord)
    }

    // --- Block-level access ---

    /// Writes a block. Writes into unloaded or out-of-range space are
    /// silently dropped, not buffered for later.
    pub fn set_block(&mut self, wx: i32, wy: i32, wz: i32, b: Block) {
        if let Some(chunk) = self.grid.get_mut(ChunkCoord::of_block(wx, wy, wz)) {
            chunk.set_block_from_world(wx, wy, wz, b);
        }
    }

    pub fn set_block_point(&mut self, p: Point3, b: Block) {
        self.set_block(p.x, p.y, p.z, b);
    }

    /// Fills every cell of a half-open block-coordinate box. One write per
    /// cell, no rollback; cells in unloaded chunks are skipped like any
    /// other dropped write.
    pub fn set_cuboid(&mut self, cuboid: Cuboid, b: Block) {
        for p in cuboid.cells() {
            self.set_block(p.x, p.y, p.z, b);
        }
    }

    /// Block id at a world coordinate; 0 (air) when the owning chunk is
    /// unloaded or out of range.
    pub fn get_block_id(&self, wx: i32, wy: i32, wz: i32) -> BlockId {
        match self.get_chunk(wx, wy, wz) {
            Some(chunk) => chunk.get_block_id(wx, wy, wz),
            None => 0,
        }
    }

    pub fn get_block_id_point(&self, p: Point3) -> BlockId {
        self.get_block_id(p.x, p.y, p.z)
    }

    /// Opacity at a world coordinate. Unloaded and out-of-range space is
    /// opaque, so not-yet-streamed regions neither render through nor get
    /// culled wrong.
    pub fn is_opaque(&self, wx: i32, wy: i32, wz: i32) -> bool {
        match self.get_chunk(wx, wy, wz) {
            Some(chunk) => chunk.is_opaque_from_world(&self.reg, wx, wy, wz),
            None => true,
        }
    }

    pub fn is_opaque_point(&self, p: Point3) -> bool {
        self.is_opaque(p.x, p.y, p.z)
    }

    // --- Whole-world operations ---

    /// Number of published chunks.
    pub fn chunk_count(&self) -> usize {
        self.loaded.len()
    }

    /// Published chunk coordinates in publication order.
    pub fn loaded_coords(&self) -> &[ChunkCoord] {
        &self.loaded
    }

    /// Submits every loaded chunk's opaque geometry, then every loaded
    /// chunk's non-opaque geometry, both in publication order. Two passes
    /// across the whole loaded set so transparency blends against all solid
    /// geometry already drawn.
    pub fn render(&self, camera: &Camera, sink: &mut dyn RenderSink) {
        for &coord in &self.loaded {
            if let Some(chunk) = self.grid.get(coord) {
                sink.submit_opaque(camera, chunk);
            }
        }
        for &coord in &self.loaded {
            if let Some(chunk) = self.grid.get(coord) {
                sink.submit_non_opaque(camera, chunk);
            }
        }
    }
}
