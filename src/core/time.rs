//! Frame timing utilities

use std::time::{Duration, Instant};

/// Longest elapsed time a single simulation tick will integrate, in seconds.
///
/// Frame stalls (window drags, debugger pauses) can produce multi-second
/// deltas; integrating those in one step destabilizes the player physics, so
/// the tick delta is clamped before use.
pub const MAX_TICK_SECONDS: f32 = 0.1;

/// Sanitize a raw frame delta for simulation use.
///
/// Non-finite input collapses to zero; otherwise the value is clamped to
/// `[0, MAX_TICK_SECONDS]`.
pub fn clamp_tick(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_TICK_SECONDS)
    } else {
        0.0
    }
}

/// Tracks frame timing and calculates FPS
pub struct FrameTimer {
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
    fps_timer: Instant,
    fps: f32,
    fps_frame_count: u32,
}

impl FrameTimer {
    /// Create a new frame timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            fps_timer: now,
            fps: 0.0,
            fps_frame_count: 0,
        }
    }

    /// Call once per frame to update timing
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
        self.fps_frame_count += 1;

        // Update FPS every second
        let fps_elapsed = now - self.fps_timer;
        if fps_elapsed >= Duration::from_secs(1) {
            self.fps = self.fps_frame_count as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = 0;
            self.fps_timer = now;
        }
    }

    /// Get delta time in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get the delta time sanitized for simulation (see [`clamp_tick`])
    pub fn sim_delta_secs(&self) -> f32 {
        clamp_tick(self.delta.as_secs_f32())
    }

    /// Get current FPS (updated every second)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get total frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
