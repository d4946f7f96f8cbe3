//! Update rules - one pure transition per variant
//!
//! The central correctness contract: a generation advances every cell
//! exactly once, reading only the previous generation's values. Each rule is
//! therefore a pure per-cell function `(front, x, y) -> Element`; no cell
//! ever observes a same-step update of another cell. That independence is
//! also what makes the row-parallel execution in the step driver legal.

pub mod forkbomb;
pub mod pipes;
pub mod sand;

use crate::domain::config::Variant;
use crate::domain::elements::Element;
use crate::spatial::grid::Grid;

/// Next state of one cell, dispatched by variant.
#[inline]
pub fn next_cell(variant: Variant, front: &Grid, x: i32, y: i32) -> Element {
    match variant {
        Variant::Sand => sand::next_cell(front, x, y),
        Variant::Forkbomb => forkbomb::next_cell(front, x, y),
        Variant::Pipes => pipes::next_cell(front, x, y),
    }
}

/// Whether the variant has any autonomous per-step dynamics at all.
///
/// The pipes toy only ever changes under the brush, so its step skips the
/// generation pass (and the buffer swap) entirely.
#[inline]
pub fn advances(variant: Variant) -> bool {
    !matches!(variant, Variant::Pipes)
}
