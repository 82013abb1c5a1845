//! Biome classification driven by terrain elevation

use serde::{Deserialize, Serialize};

/// Biome types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    Underwater,
    Beach,
    VegetatedLow,
    Rock,
    Snow,
}

impl Biome {
    /// Base surface color for this biome (linear RGB).
    pub fn base_color(&self) -> [f32; 3] {
        match self {
            Biome::Underwater => rgb(0x12, 0x38, 0x4a),
            Biome::Beach => rgb(0xca, 0xba, 0x94),
            Biome::VegetatedLow => rgb(0x2f, 0x6b, 0x35),
            Biome::Rock => rgb(0x6b, 0x65, 0x5b),
            Biome::Snow => rgb(0xd8, 0xd4, 0xc0),
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Elevation thresholds separating biome bands.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BiomeThresholds {
    /// Below this elevation the surface is underwater.
    pub water_level: f32,
    /// Below this elevation (and above water) the surface is beach.
    pub beach_level: f32,
    /// Above this elevation the surface is snow.
    pub snow_level: f32,
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self {
            water_level: -15.0,
            beach_level: 10.0,
            snow_level: 120.0,
        }
    }
}

/// Maps a height sample to a biome and a boundary blend weight.
///
/// The Underwater/Beach and Snow cutovers are intentionally hard edges; the
/// mid band blends VegetatedLow toward Rock with a weight that is continuous
/// and non-decreasing in height.
#[derive(Clone, Copy, Debug, Default)]
pub struct BiomeClassifier {
    pub thresholds: BiomeThresholds,
}

impl BiomeClassifier {
    /// Create a classifier with the given thresholds
    pub fn new(thresholds: BiomeThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify an elevation into a biome plus a blend weight.
    ///
    /// The weight is only nonzero for [`Biome::VegetatedLow`], where it blends
    /// toward [`Biome::Rock`]: `smoothstep(h, beach, snow) * 0.5`.
    pub fn classify(&self, height: f32) -> (Biome, f32) {
        let t = self.thresholds;

        if height < t.water_level {
            return (Biome::Underwater, 0.0);
        }
        if height < t.beach_level {
            return (Biome::Beach, 0.0);
        }
        if height > t.snow_level {
            return (Biome::Snow, 0.0);
        }

        let blend = smoothstep(height, t.beach_level, t.snow_level) * 0.5;
        (Biome::VegetatedLow, blend)
    }

    /// Per-vertex surface color for an elevation, applying the rock blend.
    pub fn surface_color(&self, height: f32) -> [f32; 3] {
        let (biome, blend) = self.classify(height);
        match biome {
            Biome::VegetatedLow => lerp_color(
                Biome::VegetatedLow.base_color(),
                Biome::Rock.base_color(),
                blend,
            ),
            other => other.base_color(),
        }
    }
}

/// Cubic Hermite interpolation of `x` over `[edge0, edge1]`, clamped to [0, 1].
pub fn smoothstep(x: f32, edge0: f32, edge1: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp_color(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_ordering() {
        let classifier = BiomeClassifier::default();

        assert_eq!(classifier.classify(-40.0).0, Biome::Underwater);
        assert_eq!(classifier.classify(-15.0).0, Biome::Beach);
        assert_eq!(classifier.classify(0.0).0, Biome::Beach);
        assert_eq!(classifier.classify(10.0).0, Biome::VegetatedLow);
        assert_eq!(classifier.classify(60.0).0, Biome::VegetatedLow);
        assert_eq!(classifier.classify(120.0).0, Biome::VegetatedLow);
        assert_eq!(classifier.classify(120.1).0, Biome::Snow);
    }

    #[test]
    fn test_blend_weight_monotonic() {
        let classifier = BiomeClassifier::default();
        let mut prev = -1.0f32;

        for i in 0..=110 {
            let h = 10.0 + i as f32; // beach_level..snow_level
            let (biome, w) = classifier.classify(h);
            assert_eq!(biome, Biome::VegetatedLow);
            assert!(
                w >= prev,
                "blend weight decreased from {} to {} at height {}",
                prev,
                w,
                h
            );
            prev = w;
        }
    }

    #[test]
    fn test_blend_weight_range() {
        let classifier = BiomeClassifier::default();

        let (_, at_beach) = classifier.classify(10.0);
        let (_, at_snow) = classifier.classify(120.0);
        assert_eq!(at_beach, 0.0);
        assert!((at_snow - 0.5).abs() < 1e-6, "blend maxes at 0.5, got {}", at_snow);
    }

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(smoothstep(2.0, 0.0, 1.0), 1.0);
        assert!((smoothstep(0.5, 0.0, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_surface_color_blends_toward_rock() {
        let classifier = BiomeClassifier::default();

        // Just above beach: essentially pure vegetation color
        let low = classifier.surface_color(10.5);
        let veg = Biome::VegetatedLow.base_color();
        assert!((low[0] - veg[0]).abs() < 0.01);

        // Near the snow line: half way toward rock
        let high = classifier.surface_color(119.9);
        let rock = Biome::Rock.base_color();
        for c in 0..3 {
            let expected = veg[c] + (rock[c] - veg[c]) * 0.5;
            assert!(
                (high[c] - expected).abs() < 0.01,
                "channel {} expected ~{}, got {}",
                c,
                expected,
                high[c]
            );
        }
    }

    #[test]
    fn test_hard_edges_use_base_colors() {
        let classifier = BiomeClassifier::default();
        assert_eq!(classifier.surface_color(-100.0), Biome::Underwater.base_color());
        assert_eq!(classifier.surface_color(150.0), Biome::Snow.base_color());
    }
}
