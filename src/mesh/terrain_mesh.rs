//! Indexed triangle mesh data.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh built from a finalized height grid.
///
/// The vertex buffers are parallel: one position, one normal, and one UV
/// per vertex. Indices are flat triples with counter-clockwise winding.
/// The mesh is plain data; the core never mutates it after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainMesh {
    /// World-space vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals (placeholder unit vectors along the elevation axis).
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates in [0, 1], V inverted.
    pub uvs: Vec<Vec2>,
    /// Flat triangle index triples.
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the vertex indices of triangle `i`.
    pub fn triangle(&self, i: usize) -> [u32; 3] {
        [
            self.indices[i * 3],
            self.indices[i * 3 + 1],
            self.indices[i * 3 + 2],
        ]
    }

    /// Returns the corner positions of triangle `i`.
    pub fn triangle_positions(&self, i: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangle(i);
        [
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ]
    }

    /// Returns the surface area of triangle `i`.
    pub fn triangle_area(&self, i: usize) -> f32 {
        let [a, b, c] = self.triangle_positions(i);
        (b - a).cross(c - a).length() * 0.5
    }
}
