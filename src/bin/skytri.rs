//! A triangle over a sky gradient, tinted by a slowly cycling color.
//! Pressing R recompiles the shader pair from disk without restarting.

use glam::Mat4;
use glow::HasContext;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use gltoys::abs::{App, Mesh, ShaderProgram, Vertex};
use gltoys::anim::{ColorCycle, Ramp};
use gltoys::settings::Settings;
use gltoys::{init_logging, resource};

// Each channel completes a fade in 2500 of its turns; with the round-robin
// update that is 7500 frames of wall time.
const CYCLE_DELTA: f64 = 1.0 / 2500.0;

/// Triangle corner paired with the sky-quad corner whose gradient value it
/// samples.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct SceneVertex {
    position: [f32; 2],
    sky: [f32; 2],
}

impl Vertex for SceneVertex {
    fn vertex_attribs(gl: &glow::Context) {
        let stride = std::mem::size_of::<SceneVertex>() as i32;
        unsafe {
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride, 8);
            gl.enable_vertex_attrib_array(1);
        }
    }
}

const VERTICES: [SceneVertex; 3] = [
    SceneVertex { position: [0.0, 0.5], sky: [0.5, 0.5] },
    SceneVertex { position: [0.5, -0.5], sky: [0.5, -0.5] },
    SceneVertex { position: [-0.5, -0.5], sky: [-0.5, -0.5] },
];
const INDICES: [u32; 3] = [0, 1, 2];

struct FrameState {
    matrix: Mat4,
    tint: glam::Vec3,
}

fn draw(gl: &glow::Context, program: &ShaderProgram, mesh: &Mesh, state: &FrameState) {
    unsafe {
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
    program.use_program();
    program.set_uniform("matrix", state.matrix);
    program.set_uniform("tint", state.tint);
    mesh.draw();
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let settings = Settings::load();
    let mut app = App::new("skytri", settings.width, settings.height, settings.vsync)?;
    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.depth_func(glow::LESS);
    }

    let mesh = Mesh::new(&app.gl, &VERTICES, &INDICES, glow::TRIANGLES);
    let (vert_path, frag_path) = resource::shader_paths("skytri");
    let mut program = resource::load_program(&app.gl, &vert_path, &frag_path)?;

    // Channels start staggered so the tint drifts through mixed hues
    // instead of fading gray-to-white in lockstep.
    let mut tint = ColorCycle::new(
        Ramp::new(0.0, CYCLE_DELTA),
        Ramp::new(1.0 / 3.0, CYCLE_DELTA),
        Ramp::new(2.0 / 3.0, CYCLE_DELTA),
    );

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    repeat: false,
                    ..
                } => {
                    resource::reload_program(&app.gl, &mut program, &vert_path, &frag_path);
                }
                Event::Window {
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        let state = FrameState {
            matrix: Mat4::IDENTITY,
            tint: tint.advance(),
        };
        draw(&app.gl, &program, &mesh, &state);
        app.window.gl_swap_window();
    }

    Ok(())
}
