use karst_chunk::Chunk;
use karst_geom::Camera;

/// Seam between the store and whatever draws it. The store decides pass
/// ordering (all opaque submissions, then all non-opaque); the sink owns
/// everything GPU-shaped.
pub trait RenderSink {
    fn submit_opaque(&mut self, camera: &Camera, chunk: &Chunk);
    fn submit_non_opaque(&mut self, camera: &Camera, chunk: &Chunk);
}
