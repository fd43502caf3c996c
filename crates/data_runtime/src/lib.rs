//! data_runtime: data schemas and loaders for the boss arena.
//!
//! Kept free of simulation dependencies so the server core and any tooling
//! can share one stable data API. Loaders prefer the workspace `data/`
//! directory and fall back to embedded defaults so tests run anywhere.

pub mod configs {
    pub mod boss;
}
pub mod specs {
    pub mod skills;
}

pub(crate) fn data_root() -> std::path::PathBuf {
    // Prefer top-level workspace `data/` so tests and tools can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() {
        ws
    } else {
        here.join("data")
    }
}
