//! Loading of on-disk demo resources: shader sources and textures.
//!
//! Every demo reads its shader pair from a fixed relative path under
//! `res/shaders/<demo>/`. A startup failure to compile is fatal for the
//! caller; a reload failure keeps the previous program; a missing texture
//! downgrades to a generated placeholder so the demo keeps running.

use std::sync::Arc;

use log::{info, warn};

use crate::abs::{Shader, ShaderProgram, Texture};

/// Returns the conventional vertex/fragment source paths for a demo.
pub fn shader_paths(demo: &str) -> (String, String) {
    (
        format!("res/shaders/{demo}/vert.glsl"),
        format!("res/shaders/{demo}/frag.glsl"),
    )
}

fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))
}

/// Reads, compiles and links a vertex/fragment shader pair from disk.
pub fn load_program(
    gl: &Arc<glow::Context>,
    vert_path: &str,
    frag_path: &str,
) -> Result<ShaderProgram, String> {
    let vert_src = read_source(vert_path)?;
    let frag_src = read_source(frag_path)?;
    let vert = Shader::new(gl, glow::VERTEX_SHADER, &vert_src)?;
    let frag = Shader::new(gl, glow::FRAGMENT_SHADER, &frag_src)?;
    ShaderProgram::new(gl, &[&vert, &frag])
}

/// Recompiles a shader pair from disk. On failure the previously linked
/// program stays active and only a diagnostic is emitted.
pub fn reload_program(
    gl: &Arc<glow::Context>,
    program: &mut ShaderProgram,
    vert_path: &str,
    frag_path: &str,
) {
    match load_program(gl, vert_path, frag_path) {
        Ok(new_program) => {
            *program = new_program;
            info!("reloaded shaders from {vert_path} and {frag_path}");
        }
        Err(e) => warn!("shader reload failed, keeping the current program: {e}"),
    }
}

/// Loads an image file into a texture. When the file is missing or does not
/// decode, the demo gets a small magenta checkerboard instead of an error:
/// visibly wrong output beats crashing over an asset.
pub fn load_texture_or_fallback(gl: &Arc<glow::Context>, path: &str, flip_vertically: bool) -> Texture {
    match image::open(path) {
        Ok(img) => {
            let img = if flip_vertically { img.flipv() } else { img };
            Texture::new(gl, &img)
        }
        Err(e) => {
            warn!("failed to load {path} ({e}), using a placeholder texture");
            placeholder_texture(gl)
        }
    }
}

fn placeholder_texture(gl: &Arc<glow::Context>) -> Texture {
    let data: [u8; 16] = [
        255, 0, 255, 255, //
        0, 0, 0, 255, //
        0, 0, 0, 255, //
        255, 0, 255, 255,
    ];
    Texture::new_from_data(gl, 2, 2, &data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_paths_follow_the_convention() {
        let (vert, frag) = shader_paths("cube");
        assert_eq!(vert, "res/shaders/cube/vert.glsl");
        assert_eq!(frag, "res/shaders/cube/frag.glsl");
    }

    #[test]
    fn test_missing_source_reports_the_path() {
        let err = read_source("res/shaders/no_such_demo/vert.glsl").unwrap_err();
        assert!(err.contains("res/shaders/no_such_demo/vert.glsl"));
    }
}
