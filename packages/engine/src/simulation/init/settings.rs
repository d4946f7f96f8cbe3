use crate::domain::tool::Tool;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn config_json(world: &WorldCore) -> String {
    world.config.to_json()
}

pub(super) fn pointer_moved(world: &mut WorldCore, x: f32, y: f32) {
    world.pointer.moved(x, y);
}

pub(super) fn pointer_pressed(world: &mut WorldCore, x: f32, y: f32) {
    world.pointer.pressed(x, y);
}

pub(super) fn pointer_released(world: &mut WorldCore) {
    world.pointer.released();
}

pub(super) fn set_tool(world: &mut WorldCore, name: &str) -> Result<(), String> {
    let tool = Tool::from_name(name)?;
    world.pointer.set_tool(tool);
    Ok(())
}

pub(super) fn tool_name(world: &WorldCore) -> &'static str {
    world.pointer.tool().name()
}

pub(super) fn set_brush_radius(world: &mut WorldCore, radius: f32) -> Result<(), String> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(format!("brush_radius must be non-negative, got {radius}"));
    }
    world.brush_radius = radius;
    Ok(())
}

pub(super) fn set_canvas_size(world: &mut WorldCore, width: f32, height: f32) {
    // Tolerated input violation: a zero-sized or NaN canvas would poison
    // the pixel-to-grid mapping, so keep the previous size instead.
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        world.canvas_size = (width, height);
    }
}
