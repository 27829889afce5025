//! A faceted 3D bauble that falls, bounces off a floor plane and squishes
//! on impact while slowly tumbling.

use std::time::Duration;

use glam::{Mat4, vec3};
use glow::HasContext;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use gltoys::abs::{App, ColorVertex, Mesh, ShaderProgram};
use gltoys::anim::{AngleAccumulator, FrameClock, Oscillator, squish_scale};
use gltoys::settings::Settings;
use gltoys::{init_logging, resource};

const FLOOR_Y: f32 = -0.6;
const OBJECT_RADIUS: f32 = 0.15;
const SQUISH_COMPRESS: f32 = 0.75;
const SQUISH_EXPAND: f32 = 0.75;
const FALL_RATE: f32 = -1.0;
const LOWEST_CENTER: f32 = -0.65;
// correction factor for widescreen
const WIDESCREEN_DIVISOR: f32 = 0.5625;
const FRAME_DELAY: Duration = Duration::from_nanos(16_500_000);

// A cube with a shallow pyramid raised on each face: the eight cube corners
// followed by the six face tips.
const VERTICES: [ColorVertex; 14] = [
    ColorVertex { position: [-0.5, 0.5, 0.5], color: [0.22, 0.00, 0.23] },
    ColorVertex { position: [-0.5, -0.5, 0.5], color: [0.00, 0.44, 0.00] },
    ColorVertex { position: [0.5, 0.5, 0.5], color: [0.01, 0.00, 0.58] },
    ColorVertex { position: [0.5, -0.5, 0.5], color: [1.00, 0.11, 0.00] },
    ColorVertex { position: [-0.5, 0.5, -0.5], color: [0.26, 1.00, 0.59] },
    ColorVertex { position: [-0.5, -0.5, -0.5], color: [0.00, 0.00, 1.00] },
    ColorVertex { position: [0.5, 0.5, -0.5], color: [0.55, 0.00, 0.56] },
    ColorVertex { position: [0.5, -0.5, -0.5], color: [0.00, 0.64, 0.00] },
    ColorVertex { position: [0.75, 0.0, 0.0], color: [0.98, 0.00, 0.58] },
    ColorVertex { position: [-0.75, 0.0, 0.0], color: [1.00, 0.66, 0.00] },
    ColorVertex { position: [0.0, 0.75, 0.0], color: [0.74, 1.00, 0.69] },
    ColorVertex { position: [0.0, -0.75, 0.0], color: [0.00, 0.37, 1.00] },
    ColorVertex { position: [0.0, 0.0, 0.75], color: [0.84, 0.00, 0.10] },
    ColorVertex { position: [0.0, 0.0, -0.75], color: [0.00, 0.73, 0.00] },
];

#[rustfmt::skip]
const INDICES: [u32; 72] = [
    // front face
    0, 1, 12,  0, 2, 12,  3, 1, 12,  3, 2, 12,
    // rear face
    4, 5, 13,  4, 6, 13,  7, 5, 13,  7, 6, 13,
    // right face
    2, 3, 8,   2, 6, 8,   7, 3, 8,   7, 6, 8,
    // left face
    0, 1, 9,   0, 4, 9,   5, 1, 9,   5, 4, 9,
    // top face
    0, 4, 10,  0, 2, 10,  6, 4, 10,  6, 2, 10,
    // bottom face
    1, 5, 11,  1, 3, 11,  7, 5, 11,  7, 3, 11,
];

/// Uniform values recomputed from the animation state every frame.
struct FrameState {
    model: Mat4,
    rotation: Mat4,
    squish: Mat4,
}

fn draw(gl: &glow::Context, program: &ShaderProgram, mesh: &Mesh, state: &FrameState) {
    unsafe {
        gl.clear_color(0.05, 0.05, 0.08, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
    program.use_program();
    program.set_uniform("model", state.model);
    program.set_uniform("rotation", state.rotation);
    program.set_uniform("squish", state.squish);
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
    let mut app = App::new("bounce", settings.width, settings.height, settings.vsync)?;
    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.depth_func(glow::LESS);
    }

    let mesh = Mesh::new(&app.gl, &VERTICES, &INDICES, glow::TRIANGLES);
    let (vert_path, frag_path) = resource::shader_paths("bounce");
    let program = resource::load_program(&app.gl, &vert_path, &frag_path)?;

    let scale = vec3(0.3, 0.3 / WIDESCREEN_DIVISOR, 0.3);
    let mut altitude = Oscillator::new(0.0, FALL_RATE, LOWEST_CENTER, 0.0);
    let mut angle = AngleAccumulator::new(1, 1);
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
        altitude.step(elapsed);
        let theta = angle.radians();
        angle.advance();

        let state = FrameState {
            model: Mat4::from_translation(vec3(0.0, altitude.value(), 0.0))
                * Mat4::from_scale(scale),
            rotation: Mat4::from_rotation_x(theta) * Mat4::from_rotation_y(theta),
            squish: Mat4::from_scale(squish_scale(
                altitude.value(),
                OBJECT_RADIUS,
                FLOOR_Y,
                SQUISH_COMPRESS,
                SQUISH_EXPAND,
            )),
        };
        draw(&app.gl, &program, &mesh, &state);
        app.window.gl_swap_window();

        // fixed-duration sleep capping the loop at roughly 60 fps
        std::thread::sleep(FRAME_DELAY);
    }

    Ok(())
}
