use crate::domain::config::SimConfig;
use crate::spatial::grid::{CellBuffers, PaintField};
use crate::systems::pointer::PointerState;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(config: SimConfig) -> Result<WorldCore, String> {
    config.validate()?;

    let n = config.grid_size;
    let canvas_size = config.canvas_size.unwrap_or((n as f32, n as f32));
    let tool = config.tool.unwrap_or_else(|| config.variant.default_tool());

    Ok(WorldCore {
        cells: CellBuffers::new(n),
        paint: PaintField::new(n),
        pointer: PointerState::new(tool),
        colors: vec![0; (n as usize) * (n as usize)],
        frame: 0,

        brush_radius: config.brush_radius,
        canvas_size,

        perf_enabled: false,
        perf_stats: PerfStats::default(),

        config,
    })
}
