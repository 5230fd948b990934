mod camera;
mod controller;
mod state;

use anyhow::Context;
use winit::{
    event::{Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::WindowBuilder,
};

pub use controller::{Controller, Mode, TransformRates};
use state::State;
use vitrine_scene::Scene;

const WINDOW_TITLE: &str = "OBJ Viewer";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// Emits the control summary on stdout. Shown at startup and on the H key.
pub fn print_help() {
    println!("==== 3D Object Viewer Controls ====");
    println!("ESC - Exit application");
    println!("TAB - Switch between objects");
    println!();
    println!("== Transformation Modes ==");
    println!("1 - Rotation mode");
    println!("2 - Translation mode");
    println!("3 - Scale mode");
    println!("4 - Toggle wireframe mode");
    println!();
    println!("== Controls (in respective modes) ==");
    println!("W/S or Up/Down - Y-axis movement/rotation/scale");
    println!("A/D or Left/Right - X-axis movement/rotation/scale");
    println!("Q/E - Z-axis movement/rotation/scale");
    println!("H - Show this help");
    println!("===============================");
    println!();
}

/// Opens the viewer window and runs the frame loop until the user quits.
///
/// Returns an error for fatal setup failures (window, surface, adapter,
/// device); once the loop is running the only way out is a quit request or
/// a closed window, both of which return `Ok`.
pub fn run(scene: Scene, rates: TransformRates) -> anyhow::Result<()> {
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)
        .context("failed to create window")?;

    let controller = Controller::new(rates);
    let mut state = pollster::block_on(State::new(window, scene, controller))?;

    print_help();

    // Wall-clock time of the previous frame start; the delta drives all
    // held-key transform updates for a frame.
    let mut last_frame = std::time::Instant::now();

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, window_id } if window_id == state.window().id() => {
                match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: key_state,
                                virtual_keycode: Some(key),
                                ..
                            },
                        ..
                    } => {
                        state.key_input(key_state, key);
                        if state.quit_requested() {
                            *control_flow = ControlFlow::Exit;
                        }
                    }
                    WindowEvent::Resized(physical_size) => state.resize(physical_size),
                    WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                        state.resize(*new_inner_size)
                    }
                    _ => {}
                }
            }
            Event::RedrawRequested(_) => {
                let now = std::time::Instant::now();
                let dt = (now - last_frame).as_secs_f32();
                last_frame = now;

                state.update(dt);
                match state.render() {
                    Ok(()) => {}
                    // Reconfigure the surface if lost.
                    Err(wgpu::SurfaceError::Lost) => state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("render surface out of memory");
                        *control_flow = ControlFlow::Exit;
                    }
                    // Outdated/Timeout resolve themselves by the next frame.
                    Err(e) => log::warn!("surface error: {e:?}"),
                }
            }
            Event::MainEventsCleared => {
                // RedrawRequested only triggers once unless we manually
                // request it.
                state.window().request_redraw();
            }
            _ => {}
        }
    });

    // State drops here: per-object GPU buffers first, then the surface and
    // device, then the window.
    Ok(())
}
