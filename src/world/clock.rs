//! Simulation clock and day/night lighting parameters

/// Lighting parameters derived from the time of day.
///
/// Consumed by the renderer; nothing in the simulation reads these back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayLight {
    /// Sun pivot angle in radians, one full turn per day cycle.
    pub sun_angle: f32,
    /// Daylight factor in [0.15, 1.0]; floored so nights stay readable.
    pub daylight: f32,
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Directional sun intensity.
    pub sun_intensity: f32,
    /// Sky/fog color (linear RGB), shifting from day blue to dusk violet.
    pub sky_color: [f32; 3],
}

/// Advances simulation time and derives day/night lighting.
///
/// Time increases monotonically; the day phase is taken modulo
/// `day_length` so lighting wraps while elapsed time keeps counting.
#[derive(Clone, Debug)]
pub struct WorldClock {
    time: f32,
    day_length: f32,
}

impl WorldClock {
    /// Create a clock with the given day-cycle length in seconds.
    pub fn new(day_length: f32) -> Self {
        Self {
            time: 0.0,
            day_length: day_length.max(f32::EPSILON),
        }
    }

    /// Advance simulation time by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.time += dt.max(0.0);
    }

    /// Total elapsed simulation seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Fraction of the current day cycle in [0, 1).
    pub fn day_phase(&self) -> f32 {
        (self.time % self.day_length) / self.day_length
    }

    /// Derive the lighting parameters for the current time.
    pub fn lighting(&self) -> DayLight {
        let angle = self.day_phase() * std::f32::consts::TAU;
        let daylight = angle.sin().max(0.15);

        DayLight {
            sun_angle: angle,
            daylight,
            ambient_intensity: lerp(0.25, 0.65, daylight),
            sun_intensity: lerp(0.6, 2.0, daylight),
            sky_color: hsl_to_rgb(0.6 - daylight * 0.15, 0.5, 0.7 - daylight * 0.25),
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert HSL (all components in [0, 1]) to linear RGB.
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
