//! Fractal terrain generator.
//!
//! This crate generates terrain height fields using iterative midpoint
//! displacement (the diamond-square algorithm) and converts them into
//! indexed triangle meshes with crease-aware diagonal selection.

pub mod mesh;
pub mod noise;
pub mod terrain;

pub use mesh::{build_terrain_mesh, MeshError, SurfaceSampler, TerrainMesh};
pub use noise::{ChaChaOffsets, OffsetConfig, OffsetSource, ZeroOffsets};
pub use terrain::{generate_terrain, HeightGrid, TerrainError};
