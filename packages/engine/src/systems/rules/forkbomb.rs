//! Fork bomb rule - unconditional 4-connected flood fill

use crate::domain::elements::Element;
use crate::spatial::grid::Grid;

/// A cell becomes a fork bomb if any 4-connected neighbor already was one
/// in the previous generation. Neighbor priority is right, left, up, down;
/// the first match wins and no further neighbors are checked.
///
/// Out-of-bounds neighbors read `Void` and never trigger spread. Because
/// every read comes from the frozen front buffer, growth is exactly one
/// ring per step.
#[inline]
pub fn next_cell(front: &Grid, x: i32, y: i32) -> Element {
    let cell = front.get(x, y);
    if cell == Element::Forkbomb {
        return cell;
    }
    if front.get(x + 1, y) == Element::Forkbomb {
        return Element::Forkbomb;
    }
    if front.get(x - 1, y) == Element::Forkbomb {
        return Element::Forkbomb;
    }
    if front.get(x, y - 1) == Element::Forkbomb {
        return Element::Forkbomb;
    }
    if front.get(x, y + 1) == Element::Forkbomb {
        return Element::Forkbomb;
    }
    cell
}
