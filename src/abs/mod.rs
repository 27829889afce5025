//! SDL2 and OpenGL plumbing shared by the demo binaries: window and context
//! creation, shader programs, meshes and textures.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
