//! Brush stroke applicator - capsule sweep between pointer samples
//!
//! Each frame the pointer contributes a segment (previous sample to current
//! sample); every cell whose pixel-space center lies within the brush radius
//! of that segment takes the tool's effect. Effects depend only on the hit
//! cell's own prior state, so application order across hit cells is
//! irrelevant.

use crate::domain::config::Variant;
use crate::domain::elements::Element;
use crate::domain::tool::Tool;
use crate::spatial::grid::{Grid, PaintField};
use crate::systems::pointer::Stroke;

/// Distance from p to the nearest point on segment a-b.
///
/// The projection parameter is clamped to [0, 1], so the nearest point
/// never extrapolates past either endpoint; queries beyond an end measure
/// to that end, not to the infinite line.
pub fn segment_distance(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    let v = (b.0 - a.0, b.1 - a.1);
    let w = (p.0 - a.0, p.1 - a.1);

    let c1 = w.0 * v.0 + w.1 * v.1;
    if c1 <= 0.0 {
        return (w.0 * w.0 + w.1 * w.1).sqrt();
    }
    let c2 = v.0 * v.0 + v.1 * v.1;
    if c2 <= c1 {
        let d = (p.0 - b.0, p.1 - b.1);
        return (d.0 * d.0 + d.1 * d.1).sqrt();
    }
    let t = c1 / c2;
    let nearest = (a.0 + t * v.0, a.1 + t * v.1);
    let d = (p.0 - nearest.0, p.1 - nearest.1);
    (d.0 * d.0 + d.1 * d.1).sqrt()
}

/// Sweep the stroke capsule over the whole grid, applying the tool effect
/// to every hit cell. Returns the number of cells the stroke touched.
pub fn apply_stroke(
    variant: Variant,
    tool: Tool,
    cells: &mut Grid,
    paint: &mut PaintField,
    stroke: Stroke,
    radius: f32,
    canvas_size: (f32, f32),
) -> u32 {
    if tool == Tool::None {
        return 0;
    }

    let n = cells.size();
    let cell_w = canvas_size.0 / n as f32;
    let cell_h = canvas_size.1 / n as f32;

    let mut hit_count = 0u32;
    for y in 0..n as i32 {
        for x in 0..n as i32 {
            let center = (
                (x as f32 + 0.5) * cell_w,
                (y as f32 + 0.5) * cell_h,
            );
            if segment_distance(stroke.from, stroke.to, center) < radius {
                apply_tool(variant, tool, cells, paint, x, y);
                hit_count += 1;
            }
        }
    }
    hit_count
}

/// Tool effect on a single hit cell, by variant.
fn apply_tool(
    variant: Variant,
    tool: Tool,
    cells: &mut Grid,
    paint: &mut PaintField,
    x: i32,
    y: i32,
) {
    if tool == Tool::Erase {
        cells.set(x, y, Element::Empty);
        paint.set(x, y, 0.0);
        return;
    }

    match variant {
        // The single-element toys deposit their element under any
        // non-erase tool; the toolbar selection only matters for pipes.
        Variant::Sand => cells.set(x, y, Element::Sand),
        Variant::Forkbomb => cells.set(x, y, Element::Forkbomb),

        Variant::Pipes => match tool {
            Tool::Pipe => {
                if cells.get(x, y) == Element::Empty {
                    // Laying pipe over already-painted ground wets it
                    // immediately.
                    if paint.get(x, y) > 0.0 {
                        cells.set(x, y, Element::Head);
                    } else {
                        cells.set(x, y, Element::Pipe);
                    }
                }
            }
            Tool::Paint => match cells.get(x, y) {
                Element::Empty => {
                    cells.set(x, y, Element::Paint);
                    paint.set(x, y, 1.0);
                }
                Element::Pipe => {
                    cells.set(x, y, Element::Head);
                    paint.set(x, y, 1.0);
                }
                // Already painted (or not paintable): state no-op.
                _ => {}
            },
            // None and Erase were handled before the variant dispatch.
            _ => {}
        },
    }
}
