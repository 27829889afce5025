//! Shared pieces for a handful of small OpenGL animation demos.
//!
//! The demos themselves live under `src/bin/`; each one is a monolithic
//! entry point that opens a window, uploads a few hundred bytes of static
//! geometry and runs a render loop. Everything they have in common sits
//! here: the per-frame animation state in [`anim`], the SDL2/OpenGL
//! plumbing in [`abs`], and the on-disk resource handling in [`resource`].

pub mod abs;
pub mod anim;
pub mod resource;
pub mod settings;

/// Sets up the global [`fern`] logger, chained to stderr.
///
/// Called once at the top of every demo's `main`. A second call is a no-op
/// apart from a note on stderr.
pub fn init_logging() {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr());
    if dispatch.apply().is_err() {
        eprintln!("logger was already initialized");
    }
}
