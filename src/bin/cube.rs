//! A crate-textured cube tumbling in place. The texture comes from disk
//! and falls back to a placeholder when the file is missing.

use glam::{Mat4, vec3};
use glow::HasContext;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use gltoys::abs::{App, Mesh, ShaderProgram, TexVertex, Texture};
use gltoys::anim::AngleAccumulator;
use gltoys::settings::Settings;
use gltoys::{init_logging, resource};

const TEXTURE_PATH: &str = "res/img/container.jpg";
// correction factor for widescreen
const WIDESCREEN_DIVISOR: f32 = 0.5625;

// Four vertices per face so every face gets the full texture.
#[rustfmt::skip]
const VERTICES: [TexVertex; 24] = [
    // front
    TexVertex { position: [-0.5, -0.5,  0.5], uv: [0.0, 0.0] },
    TexVertex { position: [ 0.5, -0.5,  0.5], uv: [1.0, 0.0] },
    TexVertex { position: [ 0.5,  0.5,  0.5], uv: [1.0, 1.0] },
    TexVertex { position: [-0.5,  0.5,  0.5], uv: [0.0, 1.0] },
    // rear
    TexVertex { position: [ 0.5, -0.5, -0.5], uv: [0.0, 0.0] },
    TexVertex { position: [-0.5, -0.5, -0.5], uv: [1.0, 0.0] },
    TexVertex { position: [-0.5,  0.5, -0.5], uv: [1.0, 1.0] },
    TexVertex { position: [ 0.5,  0.5, -0.5], uv: [0.0, 1.0] },
    // left
    TexVertex { position: [-0.5, -0.5, -0.5], uv: [0.0, 0.0] },
    TexVertex { position: [-0.5, -0.5,  0.5], uv: [1.0, 0.0] },
    TexVertex { position: [-0.5,  0.5,  0.5], uv: [1.0, 1.0] },
    TexVertex { position: [-0.5,  0.5, -0.5], uv: [0.0, 1.0] },
    // right
    TexVertex { position: [ 0.5, -0.5,  0.5], uv: [0.0, 0.0] },
    TexVertex { position: [ 0.5, -0.5, -0.5], uv: [1.0, 0.0] },
    TexVertex { position: [ 0.5,  0.5, -0.5], uv: [1.0, 1.0] },
    TexVertex { position: [ 0.5,  0.5,  0.5], uv: [0.0, 1.0] },
    // top
    TexVertex { position: [-0.5,  0.5,  0.5], uv: [0.0, 0.0] },
    TexVertex { position: [ 0.5,  0.5,  0.5], uv: [1.0, 0.0] },
    TexVertex { position: [ 0.5,  0.5, -0.5], uv: [1.0, 1.0] },
    TexVertex { position: [-0.5,  0.5, -0.5], uv: [0.0, 1.0] },
    // bottom
    TexVertex { position: [-0.5, -0.5, -0.5], uv: [0.0, 0.0] },
    TexVertex { position: [ 0.5, -0.5, -0.5], uv: [1.0, 0.0] },
    TexVertex { position: [ 0.5, -0.5,  0.5], uv: [1.0, 1.0] },
    TexVertex { position: [-0.5, -0.5,  0.5], uv: [0.0, 1.0] },
];

#[rustfmt::skip]
const INDICES: [u32; 36] = [
     0,  1,  2,   2,  3,  0,
     4,  5,  6,   6,  7,  4,
     8,  9, 10,  10, 11,  8,
    12, 13, 14,  14, 15, 12,
    16, 17, 18,  18, 19, 16,
    20, 21, 22,  22, 23, 20,
];

struct FrameState {
    model: Mat4,
    rotation: Mat4,
}

fn draw(
    gl: &glow::Context,
    program: &ShaderProgram,
    mesh: &Mesh,
    texture: &Texture,
    state: &FrameState,
) {
    unsafe {
        gl.clear_color(0.05, 0.05, 0.08, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
    program.use_program();
    texture.bind(0);
    program.set_uniform("texture_sampler", 0);
    program.set_uniform("model", state.model);
    program.set_uniform("rotation", state.rotation);
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
    let mut app = App::new("cube", settings.width, settings.height, settings.vsync)?;
    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.depth_func(glow::LESS);
    }

    let mesh = Mesh::new(&app.gl, &VERTICES, &INDICES, glow::TRIANGLES);
    let texture = resource::load_texture_or_fallback(&app.gl, TEXTURE_PATH, false);
    let (vert_path, frag_path) = resource::shader_paths("cube");
    let program = resource::load_program(&app.gl, &vert_path, &frag_path)?;

    let model = Mat4::from_scale(vec3(0.3, 0.3 / WIDESCREEN_DIVISOR, 0.3));
    // One degree per frame; the spin rate rides the display refresh rate.
    let mut angle = AngleAccumulator::new(1, 1);

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

        let theta = angle.radians();
        angle.advance();

        let state = FrameState {
            model,
            rotation: Mat4::from_rotation_x(theta) * Mat4::from_rotation_y(theta),
        };
        draw(&app.gl, &program, &mesh, &texture, &state);
        app.window.gl_swap_window();
    }

    Ok(())
}
