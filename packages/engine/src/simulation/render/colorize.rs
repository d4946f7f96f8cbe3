use crate::domain::config::Variant;
use crate::domain::elements::Element;
use crate::spatial::grid::{Grid, PaintField};
use crate::systems::rules::pipes;

use super::WorldCore;

// Pipes palette. Everything else derives from the gradient + oscillation.
const PIPE_BODY: (f32, f32, f32) = (0.55, 0.58, 0.62);
const PAINT_HUE: (f32, f32, f32) = (0.93, 0.42, 0.18);
const SHADOW_SHADE: f32 = 0.65;

/// Cosmetic color oscillation; carries no simulation semantics.
#[inline]
pub(super) fn oscillation(frame: u64) -> f32 {
    0.5 + 0.5 * (frame as f32 / 240.0).sin()
}

/// Recolor every cell from the post-step front buffer. Pure pass: reads
/// cells, paint and the clock term, writes only the color buffer.
pub(super) fn colorize(world: &mut WorldCore) {
    let variant = world.config.variant;
    let osc = oscillation(world.frame);
    let front = world.cells.front();
    let paint = &world.paint;
    let n = front.size() as usize;
    let colors = &mut world.colors;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        colors
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(y, row)| color_row(variant, front, paint, osc, y as i32, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in colors.chunks_mut(n).enumerate() {
            color_row(variant, front, paint, osc, y as i32, row);
        }
    }
}

fn color_row(
    variant: Variant,
    front: &Grid,
    paint: &PaintField,
    osc: f32,
    y: i32,
    row: &mut [u32],
) {
    for (x, out) in row.iter_mut().enumerate() {
        *out = color_cell(variant, front, paint, osc, x as i32, y);
    }
}

fn color_cell(
    variant: Variant,
    front: &Grid,
    paint: &PaintField,
    osc: f32,
    x: i32,
    y: i32,
) -> u32 {
    let n = front.size() as f32;
    let fx = (x as f32 + 0.5) / n;
    let fy = (y as f32 + 0.5) / n;

    // Background gradient shared by all variants: oscillating red, green
    // down the rows, blue across the columns.
    let background = pack(osc, fy, fx);

    match variant {
        Variant::Sand => match front.get(x, y) {
            Element::Sand => pack(1.0 - osc, fx, fy),
            _ => background,
        },

        Variant::Forkbomb => match front.get(x, y) {
            Element::Forkbomb => pack(fy, fx, osc),
            _ => background,
        },

        Variant::Pipes => {
            let cell = front.get(x, y);
            let saturation = paint.get(x, y);
            let (r, g, b) = match cell {
                Element::Pipe => PIPE_BODY,
                Element::Paint => scale(PAINT_HUE, 0.4 + 0.6 * saturation),
                // A wet pipe head pulses gently with the clock.
                Element::Head => scale(mix(PIPE_BODY, PAINT_HUE, saturation), 0.85 + 0.15 * osc),
                Element::Tail => scale(PAINT_HUE, 0.6),
                _ => return background,
            };
            if pipes::is_shadowed(front, x, y) {
                pack(r * SHADOW_SHADE, g * SHADOW_SHADE, b * SHADOW_SHADE)
            } else {
                pack(r, g, b)
            }
        }
    }
}

#[inline]
fn mix(a: (f32, f32, f32), b: (f32, f32, f32), t: f32) -> (f32, f32, f32) {
    (
        a.0 + (b.0 - a.0) * t,
        a.1 + (b.1 - a.1) * t,
        a.2 + (b.2 - a.2) * t,
    )
}

#[inline]
fn scale(color: (f32, f32, f32), factor: f32) -> (f32, f32, f32) {
    (color.0 * factor, color.1 * factor, color.2 * factor)
}

/// Pack to the ABGR u32 layout the host blits directly (RGBA8 bytes in
/// little-endian memory order).
#[inline]
fn pack(r: f32, g: f32, b: f32) -> u32 {
    let r = (r.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (g.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (b.clamp(0.0, 1.0) * 255.0) as u32;
    0xFF00_0000 | (b << 16) | (g << 8) | r
}
