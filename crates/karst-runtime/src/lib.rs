//! Background chunk generation: one worker thread, channel in, channel out.
#![forbid(unsafe_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use karst_blocks::{Block, BlockRegistry};
use karst_chunk::{Chunk, generate_chunk};
use karst_world::{ChunkCoord, CapacityError, World};

/// One chunk generation request.
#[derive(Clone, Debug)]
pub struct GenJob {
    pub coord: ChunkCoord,
    pub job_id: u64,
    pub reg: Arc<BlockRegistry>,
}

/// Completion for a [`GenJob`]: the fully built chunk, or the generation
/// error. Either way the coordinate comes back so the consumer can advance.
pub struct GenJobOut {
    pub coord: ChunkCoord,
    pub job_id: u64,
    pub result: Result<Chunk, CapacityError>,
}

/// Owns the dedicated generation worker. Jobs are processed strictly in
/// submission order because a single thread reads a single channel; the
/// worker outlives any one failure and answers every job it receives.
pub struct Runtime {
    job_tx: Sender<GenJob>,
    res_rx: Receiver<GenJobOut>,
    queued: Arc<AtomicUsize>,
}

impl Runtime {
    pub fn new(world: Arc<World>) -> Self {
        let (job_tx, job_rx) = unbounded::<GenJob>();
        let (res_tx, res_rx) = unbounded::<GenJobOut>();
        let queued = Arc::new(AtomicUsize::new(0));

        {
            let queued = queued.clone();
            thread::Builder::new()
                .name("karst-gen".to_string())
                .spawn(move || {
                    while let Ok(job) = job_rx.recv() {
                        queued.fetch_sub(1, Ordering::Relaxed);
                        let out = process_gen_job(job, world.as_ref());
                        if res_tx.send(out).is_err() {
                            break;
                        }
                    }
                })
                .ok();
        }

        Self {
            job_tx,
            res_rx,
            queued,
        }
    }

    /// Hands a job to the worker. Never blocks the caller.
    pub fn submit(&self, job: GenJob) {
        self.queued.fetch_add(1, Ordering::Relaxed);
        if self.job_tx.send(job).is_err() {
            self.queued.fetch_sub(1, Ordering::Relaxed);
        }
    }

    /// All completions currently sitting in the result channel.
    pub fn drain_results(&self) -> Vec<GenJobOut> {
        self.res_rx.try_iter().collect()
    }

    /// Blocks up to `timeout` for the next completion.
    pub fn recv_result_timeout(&self, timeout: Duration) -> Option<GenJobOut> {
        self.res_rx.recv_timeout(timeout).ok()
    }

    /// Jobs submitted but not yet picked up by the worker.
    pub fn queued_count(&self) -> usize {
        self.queued.load(Ordering::Relaxed)
    }
}

fn process_gen_job(job: GenJob, world: &World) -> GenJobOut {
    let GenJob { coord, job_id, reg } = job;
    let result = generate_chunk(world, coord, &reg).map(|mut chunk| {
        // Canonical post-generation edit: the chunk's world-origin block is
        // always cleared, marking the slot generation completed on.
        let (bx, by, bz) = coord.base();
        chunk.set_block_from_world(bx, by, bz, Block::AIR);
        chunk
    });
    if let Err(ref e) = result {
        log::debug!("generation failed for ({},{},{}): {}", coord.cx, coord.cy, coord.cz, e);
    }
    GenJobOut {
        coord,
        job_id,
        result,
    }
}
