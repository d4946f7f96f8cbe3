//! Pipes rule - brush-driven only
//!
//! Pipework grows and gets painted exclusively under the brush; there is no
//! autonomous propagation. The only per-step "dynamics" of this variant is
//! the cosmetic shadow the colorizer draws on pipes facing empty space.

use crate::domain::elements::Element;
use crate::spatial::grid::Grid;

/// Identity transition; the pipes step driver skips the generation pass,
/// but the dispatcher still needs a total answer.
#[inline]
pub fn next_cell(front: &Grid, x: i32, y: i32) -> Element {
    front.get(x, y)
}

/// Shadow predicate for the colorizer: pipework with empty space below or
/// below-right renders in its shaded variant. Never feeds back into state.
#[inline]
pub fn is_shadowed(front: &Grid, x: i32, y: i32) -> bool {
    front.get(x, y).is_pipework()
        && (front.get(x, y + 1) == Element::Empty || front.get(x + 1, y + 1) == Element::Empty)
}
