//! Triangle mesh construction from height grids.
//!
//! Converts a finalized height grid into an indexed triangle mesh and
//! provides area-weighted random sampling of positions on its surface.

mod sampler;
mod terrain_mesh;
mod triangulate;

pub use sampler::SurfaceSampler;
pub use terrain_mesh::TerrainMesh;
pub use triangulate::build_terrain_mesh;

use thiserror::Error;

/// Errors that can occur while building or sampling a terrain mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("mesh requires a grid of at least 2x2 vertices, got {cols}x{rows}")]
    DegenerateGrid { cols: usize, rows: usize },
    #[error("mesh has no sampleable surface (total triangle weight is zero)")]
    EmptyMesh,
}
