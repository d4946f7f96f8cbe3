use crate::domain::config::Variant;
use crate::domain::elements::Element;
use crate::spatial::grid::Grid;
use crate::systems::{brush, rules};

use super::{PerfTimer, WorldCore};

/// One frame of the driver, in fixed order:
/// 1. shift the pointer's previous position forward (one-frame stroke lag)
/// 2. apply the brush stroke against the pre-step front buffer
/// 3. advance the update rule exactly one generation and swap buffers
/// 4. colorize the whole grid into the color buffer
///
/// The buffer swap in (3) is the barrier between "all cells updated" and
/// "colorize begins"; the colorizer only ever sees a completed generation.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.grid_size = world.config.grid_size;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let stroke = world.pointer.take_segment();
    if world.pointer.is_down() {
        let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
        let painted = brush::apply_stroke(
            world.config.variant,
            world.pointer.tool(),
            world.cells.front_mut(),
            &mut world.paint,
            stroke,
            world.brush_radius,
            world.canvas_size,
        );
        if let Some(t0) = t0 {
            world.perf_stats.brush_ms = t0.elapsed_ms();
            world.perf_stats.painted_cells = painted;
        }
    }

    if rules::advances(world.config.variant) {
        let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
        let variant = world.config.variant;
        let (front, back) = world.cells.split();
        advance_generation(variant, front, back);
        world.cells.swap();
        if let Some(t0) = t0 {
            world.perf_stats.rule_ms = t0.elapsed_ms();
        }
    }

    {
        let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
        world.colorize();
        if let Some(t0) = t0 {
            world.perf_stats.colorize_ms = t0.elapsed_ms();
        }
    }

    if perf_on {
        world.perf_stats.live_cells = world.live_cell_count();
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}

/// Fill the back buffer from the frozen front buffer, one whole generation.
///
/// Rows are independent because `next_cell` is pure over the front buffer -
/// that independence is the license for the parallel path.
fn advance_generation(variant: Variant, front: &Grid, back: &mut Grid) {
    let n = front.size() as usize;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        back.cells_mut()
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(y, row)| advance_row(variant, front, y as i32, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in back.cells_mut().chunks_mut(n).enumerate() {
            advance_row(variant, front, y as i32, row);
        }
    }
}

fn advance_row(variant: Variant, front: &Grid, y: i32, row: &mut [Element]) {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = rules::next_cell(variant, front, x as i32, y);
    }
}
