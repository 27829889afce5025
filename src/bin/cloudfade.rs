//! A full-window cloud photograph fading slowly in and out. Pressing R
//! recompiles the shader pair from disk without restarting.

use glam::Mat4;
use glow::HasContext;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use gltoys::abs::{App, Mesh, ShaderProgram, TexVertex, Texture};
use gltoys::anim::Ramp;
use gltoys::settings::Settings;
use gltoys::{init_logging, resource};

const TEXTURE_PATH: &str = "res/img/clouds.jpg";
// A full fade takes 7500 frames, a couple of minutes at 60 fps.
const FADE_DELTA: f64 = 1.0 / 7500.0;

const VERTICES: [TexVertex; 4] = [
    TexVertex { position: [-1.0, 1.0, 0.0], uv: [0.0, 1.0] },
    TexVertex { position: [-1.0, -1.0, 0.0], uv: [0.0, 0.0] },
    TexVertex { position: [1.0, -1.0, 0.0], uv: [1.0, 0.0] },
    TexVertex { position: [1.0, 1.0, 0.0], uv: [1.0, 1.0] },
];
const INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

struct FrameState {
    matrix: Mat4,
    intensity: f32,
}

fn draw(
    gl: &glow::Context,
    program: &ShaderProgram,
    mesh: &Mesh,
    texture: &Texture,
    state: &FrameState,
) {
    unsafe {
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
    program.use_program();
    texture.bind(0);
    program.set_uniform("texture_sampler", 0);
    program.set_uniform("matrix", state.matrix);
    program.set_uniform("intensity", state.intensity);
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
    let mut app = App::new("cloudfade", settings.width, settings.height, settings.vsync)?;
    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.depth_func(glow::LESS);
    }

    let mesh = Mesh::new(&app.gl, &VERTICES, &INDICES, glow::TRIANGLES);
    let texture = resource::load_texture_or_fallback(&app.gl, TEXTURE_PATH, true);
    let (vert_path, frag_path) = resource::shader_paths("cloudfade");
    let mut program = resource::load_program(&app.gl, &vert_path, &frag_path)?;

    let mut intensity = Ramp::new(0.0, FADE_DELTA);

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

        intensity.advance();

        let state = FrameState {
            matrix: Mat4::IDENTITY,
            intensity: intensity.value() as f32,
        };
        draw(&app.gl, &program, &mesh, &texture, &state);
        app.window.gl_swap_window();
    }

    Ok(())
}
