//! Height grid triangulation with crease-aware diagonal selection.

use glam::{Vec2, Vec3};
use rayon::prelude::*;

use crate::terrain::HeightGrid;

use super::terrain_mesh::TerrainMesh;
use super::MeshError;

/// Scale applied to grid elevations when stored as the vertex depth.
const ELEVATION_SCALE: f32 = 0.5;

/// Builds an indexed triangle mesh from a height grid.
///
/// Grid columns map linearly across `[-world_width/2, world_width/2]` and
/// rows across `[-world_height/2, world_height/2]` with the row axis
/// negated (image-space orientation); the elevation, scaled by 0.5, is the
/// third coordinate. Normals are placeholder `+Z` unit vectors and UVs map
/// linearly over `[0, 1]` with V inverted.
///
/// Each quad is split along the diagonal that keeps its two triangles
/// coplanar when the cell is flat, and otherwise away from the corner pair
/// whose heights disagree. The corner comparisons use exact float equality
/// on purpose: elevations are unmodified copies of grid values, and the
/// relax pass has already rounded them to integers.
pub fn build_terrain_mesh(
    grid: &HeightGrid,
    world_width: f32,
    world_height: f32,
) -> Result<TerrainMesh, MeshError> {
    let cols = grid.cols();
    let rows = grid.rows();
    if cols < 2 || rows < 2 {
        return Err(MeshError::DegenerateGrid { cols, rows });
    }

    let grid_x = cols - 1;
    let grid_y = rows - 1;
    let segment_width = world_width / grid_x as f32;
    let segment_height = world_height / grid_y as f32;
    let half_width = world_width / 2.0;
    let half_height = world_height / 2.0;

    // Vertex attributes are independent per vertex; fill them in parallel.
    let positions: Vec<Vec3> = (0..cols * rows)
        .into_par_iter()
        .map(|i| {
            let ix = i % cols;
            let iy = i / cols;
            let x = ix as f32 * segment_width - half_width;
            let y = iy as f32 * segment_height - half_height;
            Vec3::new(x, -y, grid.get(ix, iy) * ELEVATION_SCALE)
        })
        .collect();

    let normals = vec![Vec3::Z; cols * rows];

    let uvs: Vec<Vec2> = (0..cols * rows)
        .into_par_iter()
        .map(|i| {
            let ix = i % cols;
            let iy = i / cols;
            Vec2::new(
                ix as f32 / grid_x as f32,
                1.0 - iy as f32 / grid_y as f32,
            )
        })
        .collect();

    let mut indices = Vec::with_capacity(grid_x * grid_y * 6);
    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = (ix + cols * iy) as u32;
            let b = (ix + cols * (iy + 1)) as u32;
            let c = (ix + 1 + cols * (iy + 1)) as u32;
            let d = (ix + 1 + cols * iy) as u32;

            let ah = grid.get(ix, iy);
            let bh = grid.get(ix, iy + 1);
            let ch = grid.get(ix + 1, iy + 1);
            let dh = grid.get(ix + 1, iy);

            let reverse_crease = (ah == bh && ah == dh) || ah != ch;
            if reverse_crease {
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            } else {
                indices.extend_from_slice(&[b, c, a, a, c, d]);
            }
        }
    }

    Ok(TerrainMesh {
        positions,
        normals,
        uvs,
        indices,
    })
}
