//! Input state tracking
//!
//! Translates winit keyboard/mouse events into the boolean movement intents
//! the player controller consumes. The controller never sees key codes; it
//! reads [`MoveIntents`] once per tick.

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Boolean movement intents for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

impl MoveIntents {
    /// Whether any horizontal movement key is held.
    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Tracks keyboard and mouse input state
pub struct InputState {
    intents: MoveIntents,
    /// Jump press edge, pending until consumed by [`take_jump`](Self::take_jump).
    jump_queued: bool,
    /// Mouse look delta for the current frame
    mouse_delta: (f32, f32),
    /// Accumulated raw mouse motion (only meaningful while captured)
    mouse_delta_accumulated: (f32, f32),
    /// Whether the pointer is captured by the window
    mouse_captured: bool,
}

impl InputState {
    /// Create new input state
    pub fn new() -> Self {
        Self {
            intents: MoveIntents::default(),
            jump_queued: false,
            mouse_delta: (0.0, 0.0),
            mouse_delta_accumulated: (0.0, 0.0),
            mouse_captured: false,
        }
    }

    /// Process a window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event: KeyEvent {
                physical_key: PhysicalKey::Code(key_code),
                state,
                repeat,
                ..
            },
            ..
        } = event
        {
            let pressed = *state == ElementState::Pressed;
            match key_code {
                KeyCode::KeyW | KeyCode::ArrowUp => self.intents.forward = pressed,
                KeyCode::KeyS | KeyCode::ArrowDown => self.intents.backward = pressed,
                KeyCode::KeyA | KeyCode::ArrowLeft => self.intents.left = pressed,
                KeyCode::KeyD | KeyCode::ArrowRight => self.intents.right = pressed,
                KeyCode::ShiftLeft | KeyCode::ShiftRight => self.intents.sprint = pressed,
                KeyCode::Space => {
                    if pressed && !*repeat {
                        self.jump_queued = true;
                    }
                }
                _ => {}
            }
        }
    }

    /// Process device event for raw mouse motion (when cursor is grabbed)
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_delta_accumulated.0 += delta.0 as f32;
        self.mouse_delta_accumulated.1 += delta.1 as f32;
    }

    /// Call at end of frame to latch per-frame state
    pub fn end_frame(&mut self) {
        self.mouse_delta = if self.mouse_captured {
            self.mouse_delta_accumulated
        } else {
            (0.0, 0.0)
        };
        self.mouse_delta_accumulated = (0.0, 0.0);
    }

    /// Current movement intents
    pub fn intents(&self) -> MoveIntents {
        self.intents
    }

    /// Consume a pending jump press edge, if any
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_queued)
    }

    /// Get mouse look delta for this frame
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Set mouse captured state
    pub fn set_mouse_captured(&mut self, captured: bool) {
        self.mouse_captured = captured;
        self.mouse_delta = (0.0, 0.0);
        self.mouse_delta_accumulated = (0.0, 0.0);
    }

    /// Check if mouse is captured
    pub fn is_mouse_captured(&self) -> bool {
        self.mouse_captured
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
