use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with the given grid edge and variant name
    /// ("sand", "forkbomb" or "pipes").
    #[wasm_bindgen(constructor)]
    pub fn new(grid_size: u32, variant: &str) -> Result<World, JsValue> {
        let variant =
            crate::domain::config::Variant::from_name(variant).map_err(|e| JsValue::from_str(&e))?;
        let core = WorldCore::with_variant(grid_size, variant).map_err(|e| JsValue::from_str(&e))?;
        Ok(World { core })
    }

    /// Create a world from a JSON configuration document.
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(World { core })
    }

    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 {
        self.core.grid_size()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        self.core.variant().name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn live_cell_count(&self) -> u32 {
        self.core.live_cell_count()
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when
    /// enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === POINTER SNAPSHOT (buffered by the host, polled per step) ===

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.core.pointer_moved(x, y);
    }

    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        self.core.pointer_pressed(x, y);
    }

    pub fn pointer_released(&mut self) {
        self.core.pointer_released();
    }

    /// Select a brush tool by name; unknown names are rejected.
    pub fn set_tool(&mut self, name: &str) -> Result<(), JsValue> {
        self.core.set_tool(name).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn tool(&self) -> String {
        self.core.tool_name().to_string()
    }

    /// Negative radii are rejected.
    pub fn set_brush_radius(&mut self, radius: f32) -> Result<(), JsValue> {
        self.core
            .set_brush_radius(radius)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn brush_radius(&self) -> f32 {
        self.core.brush_radius()
    }

    /// Tell the engine how large the presentation surface is, for the
    /// pixel-to-grid mapping.
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.core.set_canvas_size(width, height);
    }

    // === COMMANDS ===

    /// Seed a single cell with an element code
    pub fn set_cell(&mut self, x: i32, y: i32, element: u8) -> bool {
        self.core.set_cell(x, y, element)
    }

    /// Element code at (x, y); the Void code when out of bounds
    pub fn cell_at(&self, x: i32, y: i32) -> u8 {
        self.core.cell_at(x, y)
    }

    pub fn saturation_at(&self, x: i32, y: i32) -> f32 {
        self.core.saturation_at(x, y)
    }

    /// Clear all cells and paint, reset the clock
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward - one generation per display refresh
    pub fn step(&mut self) {
        self.core.step();
    }

    // === ZERO-COPY EXPORTS (for JS rendering) ===

    /// Get pointer to the packed RGBA color array (for JS blitting)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn colors_byte_len(&self) -> usize {
        self.core.colors_byte_len()
    }

    /// Get pointer to the cell array (one element code byte per cell)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Get pointer to the paint saturation array
    pub fn saturation_ptr(&self) -> *const f32 {
        self.core.saturation_ptr()
    }

    pub fn saturation_len(&self) -> usize {
        self.core.saturation_len()
    }
}
