//! Procedural terrain: fractal height field, biome classification, grid mesh

pub mod generator;
pub mod biome;
pub mod mesh;

pub use generator::{HeightField, TerrainParams};
pub use biome::{Biome, BiomeClassifier, BiomeThresholds};
pub use mesh::TerrainMesh;
