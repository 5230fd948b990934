use std::collections::HashSet;

use vitrine_mesh::Vector3;
use vitrine_scene::Scene;
use winit::event::{ElementState, VirtualKeyCode};

/// What the axis-control keys currently mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Translate,
    Rotate,
    Scale,
}

impl Mode {
    fn label(self) -> &'static str {
        match self {
            Mode::Translate => "Translation",
            Mode::Rotate => "Rotation",
            Mode::Scale => "Scale",
        }
    }
}

/// Units-per-second rates for the three interaction modes.
#[derive(Debug, Clone, Copy)]
pub struct TransformRates {
    pub translation: f32,
    pub rotation: f32,
    pub scale: f32,
}

impl Default for TransformRates {
    fn default() -> Self {
        Self {
            translation: 2.0,
            rotation: 50.0,
            scale: 1.0,
        }
    }
}

#[derive(Default)]
struct HeldKeys {
    w: bool,
    a: bool,
    s: bool,
    d: bool,
    q: bool,
    e: bool,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

/// Keyboard-driven interaction state: the current mode, the wireframe flag,
/// and which axis keys are held. Continuous keys are sampled every frame;
/// mode/selection/wireframe/quit keys act on the press edge only.
pub struct Controller {
    mode: Mode,
    wireframe: bool,
    rates: TransformRates,
    held: HeldKeys,
    // Discrete keys currently down, used to ignore key-repeat events.
    down: HashSet<VirtualKeyCode>,
    quit: bool,
}

impl Controller {
    pub fn new(rates: TransformRates) -> Self {
        Self {
            mode: Mode::Translate,
            wireframe: false,
            rates,
            held: HeldKeys::default(),
            down: HashSet::new(),
            quit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn wireframe_enabled(&self) -> bool {
        self.wireframe
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Routes one keyboard event into the state machine.
    pub fn key_input(&mut self, state: ElementState, key: VirtualKeyCode, scene: &mut Scene) {
        let pressed = state == ElementState::Pressed;
        match key {
            VirtualKeyCode::W => self.held.w = pressed,
            VirtualKeyCode::A => self.held.a = pressed,
            VirtualKeyCode::S => self.held.s = pressed,
            VirtualKeyCode::D => self.held.d = pressed,
            VirtualKeyCode::Q => self.held.q = pressed,
            VirtualKeyCode::E => self.held.e = pressed,
            VirtualKeyCode::Up => self.held.up = pressed,
            VirtualKeyCode::Down => self.held.down = pressed,
            VirtualKeyCode::Left => self.held.left = pressed,
            VirtualKeyCode::Right => self.held.right = pressed,
            _ if pressed => {
                if self.down.insert(key) {
                    self.press_edge(key, scene);
                }
            }
            _ => {
                self.down.remove(&key);
            }
        }
    }

    fn press_edge(&mut self, key: VirtualKeyCode, scene: &mut Scene) {
        match key {
            VirtualKeyCode::Tab => {
                scene.select_next();
                if let Some(object) = scene.selected() {
                    log::info!(
                        "Selected object: {}/{} ({})",
                        scene.selected_index() + 1,
                        scene.len(),
                        object.name()
                    );
                }
            }
            VirtualKeyCode::Key1 => {
                self.mode = Mode::Rotate;
                log::info!("Mode: {}", self.mode.label());
            }
            VirtualKeyCode::Key2 => {
                self.mode = Mode::Translate;
                log::info!("Mode: {}", self.mode.label());
            }
            VirtualKeyCode::Key3 => {
                self.mode = Mode::Scale;
                log::info!("Mode: {}", self.mode.label());
            }
            VirtualKeyCode::Key4 => {
                self.wireframe = !self.wireframe;
                log::info!(
                    "Wireframe mode: {}",
                    if self.wireframe { "ON" } else { "OFF" }
                );
            }
            VirtualKeyCode::H => crate::print_help(),
            VirtualKeyCode::Escape => self.quit = true,
            _ => {}
        }
    }

    /// Applies the held-key transform update for one frame to the selected
    /// object. Every axis uses the same `dt`; multiple held keys accumulate
    /// independently. No-op when nothing is selected.
    ///
    /// The arrow keys are translation aliases only; rotation and scale
    /// respond to W/A/S/D/Q/E alone.
    pub fn update(&self, dt: f32, scene: &mut Scene) {
        let Some(object) = scene.selected_mut() else {
            return;
        };
        let held = &self.held;
        let mut delta = Vector3::new(0.0, 0.0, 0.0);

        match self.mode {
            Mode::Translate => {
                let step = self.rates.translation * dt;
                if held.w || held.up {
                    delta.y += step;
                }
                if held.s || held.down {
                    delta.y -= step;
                }
                if held.a || held.left {
                    delta.x -= step;
                }
                if held.d || held.right {
                    delta.x += step;
                }
                if held.q {
                    delta.z -= step;
                }
                if held.e {
                    delta.z += step;
                }
                object.transform.translate(delta);
            }
            Mode::Rotate => {
                let step = self.rates.rotation * dt;
                if held.w {
                    delta.x += step;
                }
                if held.s {
                    delta.x -= step;
                }
                if held.a {
                    delta.y += step;
                }
                if held.d {
                    delta.y -= step;
                }
                if held.q {
                    delta.z += step;
                }
                if held.e {
                    delta.z -= step;
                }
                object.transform.rotate(delta);
            }
            Mode::Scale => {
                let step = self.rates.scale * dt;
                if held.w {
                    delta.y += step;
                }
                if held.s {
                    delta.y -= step;
                }
                if held.a {
                    delta.x -= step;
                }
                if held.d {
                    delta.x += step;
                }
                if held.q {
                    delta.z += step;
                }
                if held.e {
                    delta.z -= step;
                }
                object.transform.rescale(delta);
            }
        }
    }
}
