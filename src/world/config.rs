//! World configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::terrain::biome::BiomeThresholds;
use crate::terrain::generator::TerrainParams;
use crate::world::scatter::ScatterConfig;

/// Full configuration for a world session.
///
/// Created once at world start and never mutated afterwards; everything the
/// simulation derives (heights, biomes, scatter, spawn point) is a pure
/// function of this struct.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Terrain noise parameters
    pub terrain: TerrainParams,
    /// Biome elevation thresholds
    pub biomes: BiomeThresholds,
    /// Object scattering counts and bounds
    pub scatter: ScatterConfig,
    /// Real seconds per full day/night cycle
    pub day_length: f32,
    /// Player spawn position (XZ); Y comes from the height field
    pub spawn_x: f32,
    pub spawn_z: f32,
    /// Camera height above the ground surface
    pub eye_height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainParams::default(),
            biomes: BiomeThresholds::default(),
            scatter: ScatterConfig::default(),
            day_length: 180.0,
            spawn_x: 80.0,
            spawn_z: 80.0,
            eye_height: 8.0,
        }
    }
}

impl WorldConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to defaults, so a config file only needs to
    /// name what it overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration once, up front.
    pub fn validate(&self) -> Result<()> {
        self.terrain.validate()?;
        if !(self.day_length > 0.0 && self.day_length.is_finite()) {
            return Err(Error::Config(format!(
                "day_length must be positive, got {}",
                self.day_length
            )));
        }
        if !self.eye_height.is_finite() {
            return Err(Error::Config("eye_height must be finite".into()));
        }
        Ok(())
    }
}
