//! Noise-based procedural height field generation

use glam::Vec3;
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Parameters controlling terrain generation.
///
/// Immutable after construction; together with the seed they fully determine
/// every height query. Mesh building, object scattering, and player collision
/// all read the same [`HeightField`] built from these, so there is no other
/// source of ground truth to drift from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerrainParams {
    /// World extent; the island spans `[-size/2, size/2]` on X and Z.
    pub size: f32,
    /// Grid segments per side for the terrain mesh.
    pub resolution: u32,
    /// Vertical scale (max height of one full-amplitude octave).
    pub max_height: f32,
    /// Horizontal noise scale (larger = smoother).
    pub noise_scale: f32,
    /// Fractal octaves (detail levels).
    pub octaves: u32,
    /// Per-octave amplitude decay (0.5 typical).
    pub persistence: f32,
    /// Per-octave frequency growth (2.0 typical).
    pub lacunarity: f32,
    /// Random seed.
    pub seed: u32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            size: 2000.0,
            resolution: 256,
            max_height: 180.0,
            noise_scale: 320.0,
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.2,
            seed: 42,
        }
    }
}

impl TerrainParams {
    /// Validate the parameters, rejecting configurations that would make the
    /// height function degenerate. Called once at [`HeightField`]
    /// construction; queries themselves are total and never fail.
    pub fn validate(&self) -> Result<()> {
        if self.octaves < 1 {
            return Err(Error::Config("octaves must be >= 1".into()));
        }
        if !self.persistence.is_finite() || self.persistence == 0.0 {
            return Err(Error::Config(format!(
                "persistence must be finite and nonzero, got {}",
                self.persistence
            )));
        }
        if !self.lacunarity.is_finite() || self.lacunarity == 0.0 {
            return Err(Error::Config(format!(
                "lacunarity must be finite and nonzero, got {}",
                self.lacunarity
            )));
        }
        if !self.noise_scale.is_finite() || self.noise_scale == 0.0 {
            return Err(Error::Config(format!(
                "noise_scale must be finite and nonzero, got {}",
                self.noise_scale
            )));
        }
        if !self.max_height.is_finite() {
            return Err(Error::Config("max_height must be finite".into()));
        }
        if self.size <= 0.0 || !self.size.is_finite() {
            return Err(Error::Config(format!("size must be positive, got {}", self.size)));
        }
        if self.resolution < 1 {
            return Err(Error::Config("resolution must be >= 1".into()));
        }
        Ok(())
    }

    /// Sum of octave amplitudes (`1 + p + p^2 + ...`).
    ///
    /// `height_at` output is bounded by `max_height * amplitude_sum()` in
    /// either direction (the noise kernel itself stays within [-1, 1]).
    pub fn amplitude_sum(&self) -> f32 {
        let mut amplitude = 1.0f32;
        let mut total = 0.0f32;
        for _ in 0..self.octaves {
            total += amplitude.abs();
            amplitude *= self.persistence;
        }
        total
    }
}

/// Fractal height field built on seeded Perlin noise.
///
/// `height_at` is a pure function of (x, z): no caching, no interior
/// mutability. That makes the field safe to query from parallel mesh
/// generation while physics and scattering read it on other paths, and
/// guarantees all three see the identical ground surface.
pub struct HeightField {
    params: TerrainParams,
    noise: Perlin,
    /// Constant per-axis shift derived from the seed, used to decorrelate
    /// worlds that share a noise kernel.
    seed_offset: f64,
}

impl HeightField {
    /// Create a new height field, validating the parameters.
    pub fn new(params: TerrainParams) -> Result<Self> {
        params.validate()?;
        let noise = Perlin::new(params.seed);
        let seed_offset = params.seed as f64 * 100.0;
        Ok(Self {
            params,
            noise,
            seed_offset,
        })
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Get terrain height at world position (x, z).
    ///
    /// Octave `i` samples the noise at frequency `lacunarity^i` relative to
    /// `noise_scale` with amplitude `persistence^i`; the accumulated value is
    /// scaled by `max_height`.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let mut amplitude = 1.0f64;
        let mut frequency = 1.0f64;
        let mut value = 0.0f64;

        for _ in 0..self.params.octaves {
            let effective_scale = self.params.noise_scale as f64 / frequency;
            let nx = (x as f64 + self.seed_offset) / effective_scale;
            let nz = (z as f64 + self.seed_offset) / effective_scale;

            value += self.noise.get([nx, nz, self.seed_offset]) * amplitude;

            amplitude *= self.params.persistence as f64;
            frequency *= self.params.lacunarity as f64;
        }

        (value * self.params.max_height as f64) as f32
    }

    /// Surface normal at (x, z) from central-difference height gradients.
    pub fn normal_at(&self, x: f32, z: f32, eps: f32) -> Vec3 {
        let dh_dx = (self.height_at(x + eps, z) - self.height_at(x - eps, z)) / (2.0 * eps);
        let dh_dz = (self.height_at(x, z + eps) - self.height_at(x, z - eps)) / (2.0 * eps);
        Vec3::new(-dh_dx, 1.0, -dh_dz).normalize()
    }

    /// Absolute bound on `height_at` output for these parameters.
    pub fn height_bound(&self) -> f32 {
        self.params.max_height.abs() * self.params.amplitude_sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_params_default() {
        let params = TerrainParams::default();
        assert_eq!(params.size, 2000.0);
        assert_eq!(params.resolution, 256);
        assert_eq!(params.max_height, 180.0);
        assert_eq!(params.noise_scale, 320.0);
        assert_eq!(params.octaves, 5);
        assert_eq!(params.persistence, 0.5);
        assert_eq!(params.lacunarity, 2.2);
        assert_eq!(params.seed, 42);
    }

    #[test]
    fn test_validation_rejects_zero_octaves() {
        let params = TerrainParams { octaves: 0, ..Default::default() };
        assert!(HeightField::new(params).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_persistence() {
        let params = TerrainParams { persistence: 0.0, ..Default::default() };
        assert!(HeightField::new(params).is_err());

        let params = TerrainParams { persistence: f32::NAN, ..Default::default() };
        assert!(HeightField::new(params).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_lacunarity() {
        let params = TerrainParams { lacunarity: f32::INFINITY, ..Default::default() };
        assert!(HeightField::new(params).is_err());
    }

    #[test]
    fn test_height_at_deterministic() {
        let field = HeightField::new(TerrainParams::default()).unwrap();
        let positions = [(0.0, 0.0), (80.0, 80.0), (-512.3, 740.1), (999.0, -999.0)];

        for (x, z) in positions {
            let h1 = field.height_at(x, z);
            let h2 = field.height_at(x, z);
            assert_eq!(h1, h2, "height must be bit-identical at ({}, {})", x, z);
        }
    }

    #[test]
    fn test_height_bounded() {
        let field = HeightField::new(TerrainParams::default()).unwrap();
        let bound = field.height_bound();

        // Default persistence 0.5 over 5 octaves: total amplitude 1.9375
        assert!((field.params().amplitude_sum() - 1.9375).abs() < 1e-6);

        for i in -20..=20 {
            for j in -20..=20 {
                let h = field.height_at(i as f32 * 97.0, j as f32 * 53.0);
                assert!(
                    h.abs() <= bound,
                    "height {} exceeds bound {} at ({}, {})",
                    h,
                    bound,
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let f1 = HeightField::new(TerrainParams { seed: 1, ..Default::default() }).unwrap();
        let f2 = HeightField::new(TerrainParams { seed: 2, ..Default::default() }).unwrap();

        let h1 = f1.height_at(50.0, 50.0);
        let h2 = f2.height_at(50.0, 50.0);
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_scenario_seed_42() {
        // Reference scenario: seed=42, scale=320, 5 octaves, persistence 0.5,
        // lacunarity 2.2, max height 180, query at (80, 80).
        let field = HeightField::new(TerrainParams::default()).unwrap();
        let h1 = field.height_at(80.0, 80.0);
        let h2 = field.height_at(80.0, 80.0);
        assert_eq!(h1, h2);
        assert!(h1.abs() <= field.height_bound());
    }

    #[test]
    fn test_normal_points_up_on_average() {
        let field = HeightField::new(TerrainParams::default()).unwrap();
        let n = field.normal_at(80.0, 80.0, 0.5);
        assert!(n.y > 0.0, "terrain normal must have positive Y, got {:?}", n);
        assert!((n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_continuity_at_small_steps() {
        // Coherent noise must not jump at small steps; catches lattice
        // discontinuities in the sampling scheme.
        let field = HeightField::new(TerrainParams::default()).unwrap();
        let mut prev = field.height_at(0.0, 0.0);
        for i in 1..=400 {
            let h = field.height_at(i as f32 * 0.25, 0.0);
            assert!(
                (h - prev).abs() < 5.0,
                "height jumped by {} at step {}",
                (h - prev).abs(),
                i
            );
            prev = h;
        }
    }
}
