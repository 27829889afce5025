//! A triangle that drifts across the window and bounces off the edges,
//! DVD-logo style, picking new colors on every bounce.

use glam::{Mat3, Mat4, Vec3};
use glow::HasContext;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use gltoys::abs::{App, ColorVertex, Mesh, ShaderProgram};
use gltoys::anim::{FrameClock, Oscillator, PlanarBounce, SpeedPolicy};
use gltoys::settings::Settings;
use gltoys::{init_logging, resource};

const EDGE: f32 = 0.75;
const DRIFT_RATE: f32 = 0.75;

const VERTICES: [ColorVertex; 3] = [
    ColorVertex { position: [0.0, 0.5, 0.0], color: [1.0, 0.0, 0.0] },
    ColorVertex { position: [0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0] },
    ColorVertex { position: [-0.5, -0.5, 0.0], color: [0.0, 0.0, 1.0] },
];
const INDICES: [u32; 3] = [0, 1, 2];

struct FrameState {
    matrix: Mat4,
    color_transform: Mat3,
}

/// A random matrix that remixes the per-vertex colors, drawn fresh on each
/// bounce so the triangle changes appearance when it hits an edge.
fn random_color_transform() -> Mat3 {
    let mut entries = [0.0f32; 9];
    for entry in &mut entries {
        *entry = rand::random::<f32>();
    }
    Mat3::from_cols_array(&entries)
}

fn draw(gl: &glow::Context, program: &ShaderProgram, mesh: &Mesh, state: &FrameState) {
    unsafe {
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
    program.use_program();
    program.set_uniform("matrix", state.matrix);
    program.set_uniform("cmatrix", state.color_transform);
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
    let mut app = App::new("dvd", settings.width, settings.height, settings.vsync)?;
    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.depth_func(glow::LESS);
    }

    let mesh = Mesh::new(&app.gl, &VERTICES, &INDICES, glow::TRIANGLES);
    let (vert_path, frag_path) = resource::shader_paths("dvd");
    let program = resource::load_program(&app.gl, &vert_path, &frag_path)?;

    // The horizontal axis speeds up a little on each bounce (and resets at
    // the limit) so the path never settles into a visually periodic loop.
    let policy = SpeedPolicy {
        base_speed: DRIFT_RATE,
        boost: 0.2,
        speed_limit: 1.25,
    };
    let start_x = rand::random::<f32>() * 0.5;
    let start_y = rand::random::<f32>() * 0.5;
    let mut bouncer = PlanarBounce::new(
        Oscillator::new(start_x, DRIFT_RATE, -EDGE, EDGE).with_policy(policy),
        Oscillator::new(start_y, DRIFT_RATE, -EDGE, EDGE),
    );
    let mut color_transform = Mat3::IDENTITY;
    let mut clock = FrameClock::new();

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        let elapsed = clock.tick() as f32;
        if bouncer.step(elapsed) {
            color_transform = random_color_transform();
        }

        let state = FrameState {
            matrix: Mat4::from_translation(bouncer.position().extend(0.0))
                * Mat4::from_scale(Vec3::splat(0.5)),
            color_transform,
        };
        draw(&app.gl, &program, &mesh, &state);
        app.window.gl_swap_window();
    }

    Ok(())
}
