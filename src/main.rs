//! Skerry - island walker
//!
//! Hosts the simulation in a winit window: pointer capture drives the
//! first-person controller, the world clock advances every frame, and the
//! tick order is fixed as clock → world visuals → player. Rendering is left
//! to an external renderer; the terrain mesh and lighting parameters it
//! would consume are built here and logged.

use std::path::PathBuf;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use skerry::core::{input::InputState, logging, time::FrameTimer};
use skerry::player::PlayerController;
use skerry::terrain::TerrainMesh;
use skerry::world::{World, WorldConfig};

/// Log the player/world state every this many frames.
const STATE_LOG_INTERVAL: u64 = 120;

struct App {
    window: Option<Window>,
    world: World,
    player: PlayerController,
    /// Built once at startup; an external renderer would upload it.
    #[allow(dead_code)]
    mesh: TerrainMesh,
    input: InputState,
    timer: FrameTimer,
    cursor_grabbed: bool,
}

impl App {
    fn new(config: WorldConfig) -> skerry::core::types::Result<Self> {
        let world = World::new(config)?;
        let mesh = world.build_mesh();
        let spawn = world.spawn_point();
        let player = PlayerController::new(spawn, world.config().eye_height);

        log::info!(
            "Terrain mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        log::info!("Scattered objects: {}", world.objects().len());
        log::info!("Spawn: ({:.1}, {:.1}, {:.1})", spawn.x, spawn.y, spawn.z);

        Ok(Self {
            window: None,
            world,
            player,
            mesh,
            input: InputState::new(),
            timer: FrameTimer::new(),
            cursor_grabbed: false,
        })
    }

    fn toggle_cursor_grab(&mut self) {
        if let Some(window) = &self.window {
            self.cursor_grabbed = !self.cursor_grabbed;

            if self.cursor_grabbed {
                window
                    .set_cursor_grab(CursorGrabMode::Confined)
                    .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
                    .ok();
                window.set_cursor_visible(false);
            } else {
                window.set_cursor_grab(CursorGrabMode::None).ok();
                window.set_cursor_visible(true);
            }

            self.input.set_mouse_captured(self.cursor_grabbed);
            self.player.set_active(self.cursor_grabbed);
        }
    }

    /// One simulation frame: clock → world → player.
    fn tick(&mut self) {
        self.timer.tick();
        let dt = self.timer.sim_delta_secs();

        self.world.update(dt);

        let (dx, dy) = self.input.mouse_delta();
        self.player.look(dx, dy);
        if self.input.take_jump() {
            self.player.jump();
        }
        self.player
            .update(self.input.intents(), dt, self.world.height_field());

        self.input.end_frame();

        if self.timer.frame_count() % STATE_LOG_INTERVAL == 0 {
            let state = self.player.state();
            let light = self.world.lighting();
            log::debug!(
                "pos=({:.1}, {:.1}, {:.1}) grounded={} daylight={:.2} fps={:.0}",
                state.position.x,
                state.position.y,
                state.position.z,
                state.grounded,
                light.daylight,
                self.timer.fps()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Skerry - Island Walker")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = event_loop
            .create_window(window_attrs)
            .expect("Failed to create window");
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);
        log::info!("Click to capture the pointer, Escape to release");

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && key_event.state == ElementState::Pressed
                    && self.cursor_grabbed
                {
                    self.toggle_cursor_grab();
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if !self.cursor_grabbed {
                    self.toggle_cursor_grab();
                }
            }
            WindowEvent::Focused(false) => {
                if self.cursor_grabbed {
                    self.toggle_cursor_grab();
                }
            }
            WindowEvent::RedrawRequested => {
                self.tick();
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.process_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    logging::init();
    log::info!("Skerry starting...");

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_config_arg(&args) {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            WorldConfig::load(&path).expect("Failed to load world config")
        }
        None => WorldConfig::default(),
    };

    let mut app = App::new(config).expect("Failed to build world");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.run_app(&mut app).expect("Event loop error");
}

/// Parse --config argument from command line
fn parse_config_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--config" || args[i] == "-c" {
            if let Some(path) = args.get(i + 1) {
                return Some(PathBuf::from(path));
            }
        }
    }
    None
}
