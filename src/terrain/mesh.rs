//! CPU-side terrain grid mesh
//!
//! Samples the height field over a regular grid and emits positions, normals,
//! per-vertex biome colors, and triangle indices for a renderer to upload.
//! Vertex heights come from the same `height_at` every other consumer uses,
//! so the rendered surface, scattered objects, and player collision agree
//! exactly.

use glam::Vec3;
use rayon::prelude::*;

use super::biome::BiomeClassifier;
use super::generator::HeightField;

/// Terrain mesh data in world space.
pub struct TerrainMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Per-vertex linear RGB from biome classification.
    pub colors: Vec<[f32; 3]>,
    /// Triangle list indices into the vertex arrays.
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Build the grid mesh for the whole island.
    ///
    /// Rows are generated in parallel; the height field is pure, so
    /// concurrent sampling is safe and bit-stable.
    pub fn build(field: &HeightField, classifier: &BiomeClassifier) -> Self {
        let params = field.params();
        let segments = params.resolution as usize;
        let verts_per_side = segments + 1;
        let step = params.size / segments as f32;
        let half = params.size * 0.5;
        // Gradient epsilon at half a cell keeps normals stable across
        // resolutions.
        let eps = step * 0.5;

        let rows: Vec<Vec<(Vec3, Vec3, [f32; 3])>> = (0..verts_per_side)
            .into_par_iter()
            .map(|j| {
                let z = -half + j as f32 * step;
                (0..verts_per_side)
                    .map(|i| {
                        let x = -half + i as f32 * step;
                        let y = field.height_at(x, z);
                        let normal = field.normal_at(x, z, eps);
                        let color = classifier.surface_color(y);
                        (Vec3::new(x, y, z), normal, color)
                    })
                    .collect()
            })
            .collect();

        let vertex_count = verts_per_side * verts_per_side;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut colors = Vec::with_capacity(vertex_count);

        for row in rows {
            for (position, normal, color) in row {
                positions.push(position);
                normals.push(normal);
                colors.push(color);
            }
        }

        let mut indices = Vec::with_capacity(segments * segments * 6);
        for j in 0..segments {
            for i in 0..segments {
                let a = (j * verts_per_side + i) as u32;
                let b = a + 1;
                let c = a + verts_per_side as u32;
                let d = c + 1;

                indices.extend_from_slice(&[a, c, b]);
                indices.extend_from_slice(&[b, c, d]);
            }
        }

        Self {
            positions,
            normals,
            colors,
            indices,
        }
    }

    /// Number of vertices in the mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
