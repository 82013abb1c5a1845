//! First-person player controller
//!
//! Integrates movement intents into velocity with exponential friction and
//! gravity, translates along the player's local yaw axes, and resolves
//! ground collision against the shared height field as a hard vertical
//! clamp. Two implicit states, airborne and grounded, distinguished by the
//! `grounded` flag.

use glam::Vec3;

use crate::core::input::MoveIntents;
use crate::core::time::clamp_tick;
use crate::terrain::generator::HeightField;

/// Walking speed in units per second
pub const BASE_SPEED: f32 = 480.0;
/// Speed multiplier while sprinting
pub const SPRINT_MULTIPLIER: f32 = 1.8;
/// Exponential horizontal velocity decay per second
pub const FRICTION: f32 = 8.0;
/// Vertical velocity applied on jump
pub const JUMP_FORCE: f32 = 230.0;
/// Downward acceleration in units per second squared
pub const GRAVITY: f32 = 580.0;
/// Mouse-look sensitivity scale
const LOOK_SENSITIVITY: f32 = 0.001;
/// Pitch clamp in radians, short of straight up/down
const PITCH_LIMIT: f32 = 1.5;

/// Player simulation state.
///
/// Mutated once per tick by [`PlayerController`]; read-only to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct PlayerState {
    /// Camera position (eye point, not feet)
    pub position: Vec3,
    /// Velocity in the controller's local frame (x right, z forward)
    pub velocity: Vec3,
    /// Horizontal facing in radians (0 faces -Z)
    pub yaw: f32,
    /// Vertical look angle in radians
    pub pitch: f32,
    /// Whether the player ended the last tick clamped to the ground
    pub grounded: bool,
}

/// Height-driven walking controller.
pub struct PlayerController {
    state: PlayerState,
    /// Camera height above the terrain surface
    eye_height: f32,
    /// Whether input capture is live; no update runs while inactive, and the
    /// controller resumes cleanly when capture returns.
    active: bool,
}

impl PlayerController {
    /// Create a controller at the given spawn point (already at eye height).
    pub fn new(spawn: Vec3, eye_height: f32) -> Self {
        Self {
            state: PlayerState {
                position: spawn,
                velocity: Vec3::ZERO,
                yaw: 0.0,
                pitch: 0.0,
                grounded: false,
            },
            eye_height,
            active: false,
        }
    }

    /// Current player state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Enable or disable simulation (pointer captured / released)
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Look direction for the renderer, from yaw and pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.state.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.state.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Apply a mouse-look delta in pixels.
    pub fn look(&mut self, dx: f32, dy: f32) {
        if !self.active {
            return;
        }
        self.state.yaw -= dx * LOOK_SENSITIVITY;
        self.state.pitch = (self.state.pitch - dy * LOOK_SENSITIVITY)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Jump on an input press edge. Gated on `grounded`, which flips false
    /// immediately so a second press the same tick does nothing.
    pub fn jump(&mut self) {
        if self.active && self.state.grounded {
            self.state.velocity.y += JUMP_FORCE;
            self.state.grounded = false;
        }
    }

    /// One simulation tick.
    ///
    /// `dt` is sanitized before use (non-finite → 0, clamped to 0.1 s).
    /// Order: friction, gravity, intent accumulation, horizontal translation
    /// along local axes, vertical integration, ground clamp. Integrating the
    /// vertical position before the clamp means a tick never ends below the
    /// ground and a resting player stays bit-exactly at ground height with
    /// zero vertical velocity.
    pub fn update(&mut self, intents: MoveIntents, dt: f32, field: &HeightField) {
        if !self.active {
            return;
        }
        let dt = clamp_tick(dt);

        let speed = BASE_SPEED * if intents.sprint { SPRINT_MULTIPLIER } else { 1.0 };

        self.state.velocity.x -= self.state.velocity.x * FRICTION * dt;
        self.state.velocity.z -= self.state.velocity.z * FRICTION * dt;
        self.state.velocity.y -= GRAVITY * dt;

        let dir_z = intents.forward as i32 as f32 - intents.backward as i32 as f32;
        let dir_x = intents.right as i32 as f32 - intents.left as i32 as f32;
        let len = (dir_x * dir_x + dir_z * dir_z).sqrt();
        let (dir_x, dir_z) = if len > 0.0 {
            (dir_x / len, dir_z / len)
        } else {
            (0.0, 0.0)
        };

        if intents.forward || intents.backward {
            self.state.velocity.z -= dir_z * speed * dt;
        }
        if intents.left || intents.right {
            self.state.velocity.x -= dir_x * speed * dt;
        }

        // Translate along the facing's right/forward axes; velocity is
        // stored negated relative to travel direction, as accumulated above.
        let (sin_yaw, cos_yaw) = self.state.yaw.sin_cos();
        let forward = Vec3::new(-sin_yaw, 0.0, -cos_yaw);
        let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        self.state.position += right * (-self.state.velocity.x * dt);
        self.state.position += forward * (-self.state.velocity.z * dt);

        self.state.position.y += self.state.velocity.y * dt;

        let ground_y = field.height_at(self.state.position.x, self.state.position.z)
            + self.eye_height;
        if self.state.position.y <= ground_y {
            self.state.position.y = ground_y;
            self.state.velocity.y = 0.0;
            self.state.grounded = true;
        } else {
            self.state.grounded = false;
        }
    }
}
