use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use karst_blocks::BlockRegistry;
use karst_chunk::Chunk;
use karst_geom::{Camera, Cuboid, Point3, Vec3};
use karst_store::{BlockStore, RenderSink};
use karst_world::{CHUNK_SIZE, World, WorldGenMode, load_params_from_path};

/// Headless streaming harness: generates a region of chunks through the
/// background worker, applies a sample edit, and reports what got loaded.
#[derive(Parser, Debug)]
#[command(name = "karst", version, about)]
struct Args {
    /// Grid capacity in chunk slots per axis
    #[arg(long, default_value_t = 32)]
    chunks_x: usize,
    #[arg(long, default_value_t = 8)]
    chunks_y: usize,
    #[arg(long, default_value_t = 32)]
    chunks_z: usize,

    /// Worldgen seed
    #[arg(long, default_value_t = 1337)]
    seed: i32,

    /// Flat world with the given slab thickness instead of noise terrain
    #[arg(long)]
    flat: Option<i32>,

    /// Optional worldgen parameter TOML
    #[arg(long)]
    worldgen: Option<PathBuf>,

    /// Optional block registry TOML (defaults to the built-in set)
    #[arg(long)]
    blocks: Option<PathBuf>,

    /// Chunks to stream per horizontal axis, starting at the grid origin
    #[arg(long, default_value_t = 4)]
    span: i32,
    /// Chunks to stream vertically
    #[arg(long, default_value_t = 1)]
    span_y: i32,

    /// Give up if streaming has not finished after this many seconds
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,
}

/// Render sink that only counts submissions; stands in for a real backend.
#[derive(Default)]
struct CountingSink {
    opaque: usize,
    non_opaque: usize,
}

impl RenderSink for CountingSink {
    fn submit_opaque(&mut self, _camera: &Camera, _chunk: &Chunk) {
        self.opaque += 1;
    }
    fn submit_non_opaque(&mut self, _camera: &Camera, _chunk: &Chunk) {
        self.non_opaque += 1;
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let reg = match &args.blocks {
        Some(path) => Arc::new(BlockRegistry::from_path(path)?),
        None => Arc::new(BlockRegistry::with_defaults()),
    };
    let mode = match args.flat {
        Some(thickness) => WorldGenMode::Flat { thickness },
        None => WorldGenMode::Normal,
    };
    let world = Arc::new(World::new(
        args.chunks_x,
        args.chunks_y,
        args.chunks_z,
        args.seed,
        mode,
    ));
    if let Some(path) = &args.worldgen {
        world.update_worldgen_params(load_params_from_path(path)?);
    }
    log::info!(
        "world: {}x{}x{} chunk slots, chunk size {}, seed {}, mode {:?}",
        world.chunks_x,
        world.chunks_y,
        world.chunks_z,
        CHUNK_SIZE,
        world.seed,
        world.mode,
    );

    let mut store = BlockStore::new(world, reg);
    let region = Cuboid::new(
        Point3::ZERO,
        Point3::new(args.span, args.span_y, args.span),
    );
    let t0 = Instant::now();
    let accepted = store.request_load_region(region);
    log::info!("requested {} chunk loads", accepted);
    if !store.wait_idle(Duration::from_secs(args.timeout_secs)) {
        return Err(format!(
            "streaming did not finish within {}s ({} chunks pending)",
            args.timeout_secs,
            store.pending_count()
        )
        .into());
    }
    log::info!(
        "loaded {} chunks in {:.2?}",
        store.chunk_count(),
        t0.elapsed()
    );

    // Sample edit: carve a glass box above the first streamed chunk
    if let Some(glass) = store.registry().block_by_name("glass") {
        let base = CHUNK_SIZE as i32 / 2;
        let box_min = Point3::new(base, base, base);
        store.set_cuboid(Cuboid::new(box_min, box_min + 4), glass);
        log::info!(
            "edited cuboid at {:?}: block id there is now {}",
            box_min,
            store.get_block_id_point(box_min)
        );
    }

    let camera = Camera::new(
        Vec3::new(0.0, (CHUNK_SIZE * 2) as f32, 0.0),
        Vec3::ZERO,
    );
    let mut sink = CountingSink::default();
    store.render(&camera, &mut sink);
    log::info!(
        "render dry run: {} opaque + {} non-opaque submissions",
        sink.opaque,
        sink.non_opaque
    );
    Ok(())
}
