use wasm_bindgen::prelude::*;

/// Last-step timing snapshot; all zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) brush_ms: f64,
    pub(super) rule_ms: f64,
    pub(super) colorize_ms: f64,
    pub(super) painted_cells: u32,
    pub(super) live_cells: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(super) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    #[wasm_bindgen(getter)]
    pub fn brush_ms(&self) -> f64 {
        self.brush_ms
    }

    #[wasm_bindgen(getter)]
    pub fn rule_ms(&self) -> f64 {
        self.rule_ms
    }

    #[wasm_bindgen(getter)]
    pub fn colorize_ms(&self) -> f64 {
        self.colorize_ms
    }

    #[wasm_bindgen(getter)]
    pub fn painted_cells(&self) -> u32 {
        self.painted_cells
    }

    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 {
        self.live_cells
    }

    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }
}
