//! Deterministic object scattering over the height field
//!
//! Places trees, rocks, and campfires at hash-derived positions, rejecting
//! spots whose elevation falls outside the per-kind bounds (no trees in the
//! water or on the peaks). Every instance sits exactly on the shared height
//! field, which is what keeps scattered objects from floating above or
//! sinking below the rendered terrain.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::terrain::generator::HeightField;

/// Scatter counts and elevation rejection bounds.
///
/// The bounds are policy defaults, not fixed semantics; worlds with different
/// water or snow lines tune them alongside the biome thresholds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScatterConfig {
    pub tree_count: u32,
    pub rock_count: u32,
    pub campfire_count: u32,
    /// Trees reject below this elevation (water) and above the max (peaks).
    pub tree_min_height: f32,
    pub tree_max_height: f32,
    /// Rocks tolerate shallow water but not the deep sea floor.
    pub rock_min_height: f32,
    /// Campfires stay on dry land below the snow.
    pub campfire_min_height: f32,
    pub campfire_max_height: f32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            tree_count: 450,
            rock_count: 160,
            campfire_count: 12,
            tree_min_height: -5.0,
            tree_max_height: 140.0,
            rock_min_height: -8.0,
            campfire_min_height: 0.0,
            campfire_max_height: 140.0,
        }
    }
}

/// Kind of scattered object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScatterKind {
    Tree,
    Rock,
    Campfire,
}

/// One placed object instance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterInstance {
    pub kind: ScatterKind,
    /// World position; `y` is the terrain height at (x, z), plus a small
    /// embed offset for rocks.
    pub position: Vec3,
    /// Rotation around Y in radians
    pub yaw: f32,
    /// Uniform scale factor
    pub scale: f32,
}

/// Scatter all object kinds over the island.
///
/// Deterministic for a fixed height field and config: candidate positions
/// come from an integer hash of (index, kind, seed), not a stateful RNG.
/// Rejected candidates are skipped rather than re-rolled, so the output count
/// can be below the configured count.
pub fn scatter(field: &HeightField, config: &ScatterConfig) -> Vec<ScatterInstance> {
    let mut instances = Vec::new();

    scatter_kind(field, config, ScatterKind::Tree, config.tree_count, &mut instances);
    scatter_kind(field, config, ScatterKind::Rock, config.rock_count, &mut instances);
    scatter_kind(field, config, ScatterKind::Campfire, config.campfire_count, &mut instances);

    instances
}

fn scatter_kind(
    field: &HeightField,
    config: &ScatterConfig,
    kind: ScatterKind,
    count: u32,
    out: &mut Vec<ScatterInstance>,
) {
    let seed = field.params().seed;
    let half = field.params().size * 0.5;
    let salt = match kind {
        ScatterKind::Tree => 1,
        ScatterKind::Rock => 2,
        ScatterKind::Campfire => 3,
    };

    for i in 0..count as i32 {
        let x = (hash_2d(i, salt, seed) - 0.5) * 2.0 * half;
        let z = (hash_2d(i, salt + 10, seed) - 0.5) * 2.0 * half;
        let height = field.height_at(x, z);

        if !accepts(config, kind, height) {
            continue;
        }

        let yaw = hash_2d(i, salt + 20, seed) * std::f32::consts::TAU;
        let roll = hash_2d(i, salt + 30, seed);
        let (scale, y) = match kind {
            ScatterKind::Tree => (0.8 + roll * 0.6, height),
            // Rocks embed slightly so irregular bases do not hover
            ScatterKind::Rock => {
                let radius = 2.0 + roll * 6.0;
                (radius, height + radius * 0.2)
            }
            ScatterKind::Campfire => (1.0, height),
        };

        out.push(ScatterInstance {
            kind,
            position: Vec3::new(x, y, z),
            yaw,
            scale,
        });
    }
}

fn accepts(config: &ScatterConfig, kind: ScatterKind, height: f32) -> bool {
    match kind {
        ScatterKind::Tree => height >= config.tree_min_height && height <= config.tree_max_height,
        ScatterKind::Rock => height >= config.rock_min_height,
        ScatterKind::Campfire => {
            height >= config.campfire_min_height && height <= config.campfire_max_height
        }
    }
}

/// Integer hash producing a value in [0, 1].
fn hash_2d(ix: i32, iz: i32, seed: u32) -> f32 {
    let mut h = (ix as u32)
        .wrapping_mul(374761393)
        .wrapping_add((iz as u32).wrapping_mul(668265263))
        .wrapping_add(seed.wrapping_mul(1274126177));
    h = (h ^ (h >> 13)).wrapping_mul(1103515245);
    h = h ^ (h >> 16);
    (h & 0x7FFFFFFF) as f32 / 0x7FFFFFFF_u32 as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::generator::TerrainParams;

    fn field() -> HeightField {
        HeightField::new(TerrainParams::default()).unwrap()
    }

    #[test]
    fn test_scatter_deterministic() {
        let field = field();
        let config = ScatterConfig::default();
        let a = scatter(&field, &config);
        let b = scatter(&field, &config);
        assert_eq!(a, b);
        assert!(!a.is_empty(), "default island should place some objects");
    }

    #[test]
    fn test_instances_sit_on_terrain() {
        let field = field();
        for inst in scatter(&field, &ScatterConfig::default()) {
            let ground = field.height_at(inst.position.x, inst.position.z);
            match inst.kind {
                ScatterKind::Rock => {
                    assert_eq!(inst.position.y, ground + inst.scale * 0.2);
                }
                _ => assert_eq!(
                    inst.position.y, ground,
                    "{:?} floats above the height field",
                    inst.kind
                ),
            }
        }
    }

    #[test]
    fn test_elevation_bounds_respected() {
        let field = field();
        let config = ScatterConfig::default();
        for inst in scatter(&field, &config) {
            let ground = field.height_at(inst.position.x, inst.position.z);
            match inst.kind {
                ScatterKind::Tree => {
                    assert!(ground >= config.tree_min_height && ground <= config.tree_max_height);
                }
                ScatterKind::Rock => assert!(ground >= config.rock_min_height),
                ScatterKind::Campfire => {
                    assert!(
                        ground >= config.campfire_min_height
                            && ground <= config.campfire_max_height
                    );
                }
            }
        }
    }

    #[test]
    fn test_counts_bounded_by_config() {
        let field = field();
        let config = ScatterConfig::default();
        let instances = scatter(&field, &config);

        let trees = instances.iter().filter(|i| i.kind == ScatterKind::Tree).count();
        let rocks = instances.iter().filter(|i| i.kind == ScatterKind::Rock).count();
        let fires = instances.iter().filter(|i| i.kind == ScatterKind::Campfire).count();

        assert!(trees <= config.tree_count as usize);
        assert!(rocks <= config.rock_count as usize);
        assert!(fires <= config.campfire_count as usize);
    }

    #[test]
    fn test_positions_within_world() {
        let field = field();
        let half = field.params().size * 0.5;
        for inst in scatter(&field, &ScatterConfig::default()) {
            assert!(inst.position.x.abs() <= half);
            assert!(inst.position.z.abs() <= half);
        }
    }

    #[test]
    fn test_different_seeds_scatter_differently() {
        let a = HeightField::new(TerrainParams { seed: 1, ..Default::default() }).unwrap();
        let b = HeightField::new(TerrainParams { seed: 2, ..Default::default() }).unwrap();
        let config = ScatterConfig::default();
        assert_ne!(scatter(&a, &config), scatter(&b, &config));
    }
}
