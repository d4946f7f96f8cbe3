//! Cellula Engine - cellular grid-toy simulation in WASM
//!
//! The engine owns the grid state, the per-step update rules, pointer brush
//! strokes and colorization; the JS host owns devices, windows, UI and
//! blitting. Per frame the host pushes a pointer snapshot, calls `step()`,
//! and blits the color array straight out of wasm memory.
//!
//! Architecture:
//! - domain/      - elements, tools, configuration
//! - spatial/     - grid storage, ping-pong buffers, paint field
//! - systems/     - update rules, brush, pointer snapshot
//! - simulation/  - world orchestration and the wasm facade

pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

// Compatibility re-exports (keeps internal/external paths short)
pub use domain::config;
pub use domain::elements;
pub use domain::tool;
pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Cellula WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{SimConfig, Variant};
pub use domain::elements::Element;
pub use domain::tool::Tool;
pub use simulation::{PerfStats, World, WorldCore};

// Export element codes for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 {
    Element::Empty.code()
}
#[wasm_bindgen]
pub fn el_sand() -> u8 {
    Element::Sand.code()
}
#[wasm_bindgen]
pub fn el_pipe() -> u8 {
    Element::Pipe.code()
}
#[wasm_bindgen]
pub fn el_paint() -> u8 {
    Element::Paint.code()
}
#[wasm_bindgen]
pub fn el_head() -> u8 {
    Element::Head.code()
}
#[wasm_bindgen]
pub fn el_tail() -> u8 {
    Element::Tail.code()
}
#[wasm_bindgen]
pub fn el_forkbomb() -> u8 {
    Element::Forkbomb.code()
}
#[wasm_bindgen]
pub fn el_void() -> u8 {
    Element::Void.code()
}
