//! WorldCore - the simulation world behind the wasm facade
//!
//! The core only orchestrates: grid storage lives in spatial/, the update
//! rules, brush and pointer snapshot in systems/, and the thin per-concern
//! submodules below hold the actual bodies. The host drives everything
//! through `step()`, once per display refresh.

use crate::domain::config::SimConfig;
use crate::domain::config::Variant;
use crate::spatial::grid::{CellBuffers, PaintField};
use crate::systems::pointer::PointerState;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/colorize.rs"]
mod colorize;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: SimConfig,

    // State
    cells: CellBuffers,
    paint: PaintField,
    pointer: PointerState,
    colors: Vec<u32>,
    frame: u64,

    // Live settings (seeded from config, adjustable by the host)
    brush_radius: f32,
    canvas_size: (f32, f32),

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world from a validated configuration.
    pub fn new(config: SimConfig) -> Result<WorldCore, String> {
        init::create_world_core(config)
    }

    /// Convenience constructor for the common host call.
    pub fn with_variant(grid_size: u32, variant: Variant) -> Result<WorldCore, String> {
        init::create_world_core(SimConfig::new(grid_size, variant))
    }

    pub fn from_config_json(json: &str) -> Result<WorldCore, String> {
        init::create_world_core(SimConfig::from_json(json)?)
    }

    pub fn grid_size(&self) -> u32 {
        self.config.grid_size
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when
    /// enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === POINTER SNAPSHOT ===

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        settings::pointer_moved(self, x, y);
    }

    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        settings::pointer_pressed(self, x, y);
    }

    pub fn pointer_released(&mut self) {
        settings::pointer_released(self);
    }

    /// Select a brush tool by name; unknown names are a configuration
    /// error.
    pub fn set_tool(&mut self, name: &str) -> Result<(), String> {
        settings::set_tool(self, name)
    }

    pub fn tool_name(&self) -> &'static str {
        settings::tool_name(self)
    }

    /// Negative radii are rejected; zero is legal (a brush that hits
    /// nothing).
    pub fn set_brush_radius(&mut self, radius: f32) -> Result<(), String> {
        settings::set_brush_radius(self, radius)
    }

    pub fn brush_radius(&self) -> f32 {
        self.brush_radius
    }

    /// Pixel size of the presentation surface; non-finite or non-positive
    /// values are ignored.
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        settings::set_canvas_size(self, width, height);
    }

    // === COMMANDS ===

    /// Seed a single cell; returns false for bad codes or out-of-bounds
    /// coordinates.
    pub fn set_cell(&mut self, x: i32, y: i32, element: u8) -> bool {
        commands::set_cell(self, x, y, element)
    }

    /// Element code at (x, y); the `Void` code when out of bounds.
    pub fn cell_at(&self, x: i32, y: i32) -> u8 {
        commands::cell_at(self, x, y)
    }

    pub fn saturation_at(&self, x: i32, y: i32) -> f32 {
        commands::saturation_at(self, x, y)
    }

    /// Reset cells, paint and clock; settings and pointer survive.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn live_cell_count(&self) -> u32 {
        commands::live_cell_count(self)
    }

    /// Step the simulation forward: brush, one rule generation, colorize.
    /// Exactly one generation per call - the host calls this once per
    /// display refresh, with no catch-up.
    pub fn step(&mut self) {
        step::step(self);
    }

    // === ZERO-COPY EXPORTS (for JS rendering) ===

    /// Get pointer to the packed RGBA color array
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors_byte_len(&self) -> usize {
        self.colors.len() * std::mem::size_of::<u32>()
    }

    /// Get pointer to the cell array (one element code byte per cell)
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.front().cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.cells.front().cell_count()
    }

    /// Get pointer to the paint saturation array
    pub fn saturation_ptr(&self) -> *const f32 {
        self.paint.as_ptr()
    }

    pub fn saturation_len(&self) -> usize {
        self.paint.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

// Private driver pieces
impl WorldCore {
    /// Recolor the whole grid into the color buffer (read-only over state).
    fn colorize(&mut self) {
        colorize::colorize(self);
    }
}
