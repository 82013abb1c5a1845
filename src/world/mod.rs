//! World composition: terrain, clock, scattered objects, flicker lights

pub mod clock;
pub mod config;
pub mod flicker;
pub mod scatter;

pub use clock::{DayLight, WorldClock};
pub use config::WorldConfig;
pub use flicker::FlickerRegistry;
pub use scatter::{ScatterConfig, ScatterInstance, ScatterKind};

use glam::Vec3;

use crate::core::types::Result;
use crate::terrain::biome::BiomeClassifier;
use crate::terrain::generator::HeightField;
use crate::terrain::mesh::TerrainMesh;

/// Base intensity of a campfire point light before flicker.
const CAMPFIRE_INTENSITY: f32 = 2.4;

/// The island world.
///
/// Owns the height field, biome classifier, clock, scattered objects, and
/// flicker registry. [`height`](Self::height) is the single ground-truth
/// elevation query shared by the mesh, the scatterer, and player collision.
pub struct World {
    config: WorldConfig,
    height_field: HeightField,
    classifier: BiomeClassifier,
    clock: WorldClock,
    objects: Vec<ScatterInstance>,
    flicker: FlickerRegistry,
}

impl World {
    /// Build a world from a validated configuration.
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;

        let height_field = HeightField::new(config.terrain.clone())?;
        let classifier = BiomeClassifier::new(config.biomes);
        let objects = scatter::scatter(&height_field, &config.scatter);

        let mut flicker = FlickerRegistry::new();
        for object in &objects {
            if object.kind == ScatterKind::Campfire {
                // The hashed yaw doubles as a stable per-fire phase offset
                flicker.register(CAMPFIRE_INTENSITY, object.yaw);
            }
        }

        let clock = WorldClock::new(config.day_length);

        Ok(Self {
            config,
            height_field,
            classifier,
            clock,
            objects,
            flicker,
        })
    }

    /// Ground elevation at (x, z) — the canonical height query.
    pub fn height(&self, x: f32, z: f32) -> f32 {
        self.height_field.height_at(x, z)
    }

    /// Player spawn position: configured XZ, ground height plus eye height.
    pub fn spawn_point(&self) -> Vec3 {
        let x = self.config.spawn_x;
        let z = self.config.spawn_z;
        Vec3::new(x, self.height(x, z) + self.config.eye_height, z)
    }

    /// Build the render mesh for the whole island.
    pub fn build_mesh(&self) -> TerrainMesh {
        TerrainMesh::build(&self.height_field, &self.classifier)
    }

    /// Advance the simulation by `dt` seconds (clock, then flicker).
    pub fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        self.flicker.update(self.clock.time());
    }

    /// Current day/night lighting parameters.
    pub fn lighting(&self) -> DayLight {
        self.clock.lighting()
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn height_field(&self) -> &HeightField {
        &self.height_field
    }

    pub fn classifier(&self) -> &BiomeClassifier {
        &self.classifier
    }

    pub fn clock(&self) -> &WorldClock {
        &self.clock
    }

    pub fn objects(&self) -> &[ScatterInstance] {
        &self.objects
    }

    pub fn flicker(&self) -> &FlickerRegistry {
        &self.flicker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_sits_at_eye_height() {
        let world = World::new(WorldConfig::default()).unwrap();
        let spawn = world.spawn_point();

        assert_eq!(spawn.x, 80.0);
        assert_eq!(spawn.z, 80.0);
        assert_eq!(spawn.y, world.height(80.0, 80.0) + 8.0);
    }

    #[test]
    fn test_one_flicker_light_per_campfire() {
        let world = World::new(WorldConfig::default()).unwrap();
        let fires = world
            .objects()
            .iter()
            .filter(|o| o.kind == ScatterKind::Campfire)
            .count();
        assert_eq!(world.flicker().len(), fires);
    }

    #[test]
    fn test_update_advances_clock_and_flicker() {
        let mut world = World::new(WorldConfig::default()).unwrap();
        let before = world.lighting();

        world.update(45.0);
        assert_eq!(world.clock().time(), 45.0);
        assert_ne!(world.lighting(), before);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = WorldConfig {
            terrain: crate::terrain::TerrainParams { octaves: 0, ..Default::default() },
            ..Default::default()
        };
        assert!(World::new(config).is_err());
    }

    #[test]
    fn test_world_height_matches_field() {
        let world = World::new(WorldConfig::default()).unwrap();
        assert_eq!(world.height(80.0, 80.0), world.height_field().height_at(80.0, 80.0));
    }
}
