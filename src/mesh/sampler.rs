//! Area-weighted random sampling of positions on a terrain mesh.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::terrain_mesh::TerrainMesh;
use super::MeshError;

/// Samples uniformly distributed random points on a mesh surface.
///
/// Triangles are weighted by surface area, optionally scaled by a
/// per-vertex elevation-band weight, so large triangles and accepted
/// regions are covered evenly. Used for scattering object placement
/// positions over generated terrain.
pub struct SurfaceSampler<'a> {
    mesh: &'a TerrainMesh,
    /// Cumulative weighted-area distribution, one entry per triangle.
    cumulative: Vec<f32>,
    total: f32,
    rng: ChaCha8Rng,
}

impl<'a> SurfaceSampler<'a> {
    /// Creates a sampler over the whole surface, weighted by area only.
    pub fn new(mesh: &'a TerrainMesh, seed: u64) -> Result<Self, MeshError> {
        Self::with_vertex_weights(mesh, seed, |_| 1.0)
    }

    /// Creates a sampler restricted to the elevation band `[min, max]`.
    ///
    /// Vertices whose elevation (the position's third coordinate) lies in
    /// the band weigh 1, others 0; a triangle's weight is its area scaled
    /// by the mean of its vertex weights, so triangles straddling the band
    /// edge fade out rather than cut off.
    pub fn with_elevation_band(
        mesh: &'a TerrainMesh,
        seed: u64,
        min: f32,
        max: f32,
    ) -> Result<Self, MeshError> {
        Self::with_vertex_weights(mesh, seed, |pos| {
            if pos.z >= min && pos.z <= max {
                1.0
            } else {
                0.0
            }
        })
    }

    fn with_vertex_weights(
        mesh: &'a TerrainMesh,
        seed: u64,
        weight: impl Fn(Vec3) -> f32,
    ) -> Result<Self, MeshError> {
        let mut cumulative = Vec::with_capacity(mesh.triangle_count());
        let mut total = 0.0f32;
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(i);
            let vertex_weight = (weight(a) + weight(b) + weight(c)) / 3.0;
            total += mesh.triangle_area(i) * vertex_weight;
            cumulative.push(total);
        }

        if total <= 0.0 {
            return Err(MeshError::EmptyMesh);
        }

        Ok(Self {
            mesh,
            cumulative,
            total,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Draws one random point on the weighted surface.
    pub fn sample(&mut self) -> Vec3 {
        let pick = self.rng.random::<f32>() * self.total;
        let tri = self
            .cumulative
            .partition_point(|&c| c <= pick)
            .min(self.cumulative.len() - 1);

        let [a, b, c] = self.mesh.triangle_positions(tri);

        // Uniform barycentric sample; the parallelogram half is folded
        // back onto the triangle.
        let mut u = self.rng.random::<f32>();
        let mut v = self.rng.random::<f32>();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        a + (b - a) * u + (c - a) * v
    }
}
