//! Sand rule - gravity one cell per step on the ping-pong buffers

use crate::domain::elements::Element;
use crate::spatial::grid::Grid;

/// A sand cell with empty space directly below falls away; an empty cell
/// with sand directly above receives the grain. Everything else carries
/// over unchanged.
///
/// Edge policy comes from the saturating lookups: below the bottom row the
/// neighbor reads `Void` (not `Empty`), so the bottom row never empties;
/// above the top row it reads `Void` (not `Sand`), so the top row never
/// fills. The two transitions are mutually exclusive because a cell enters
/// the step as either sand or empty.
#[inline]
pub fn next_cell(front: &Grid, x: i32, y: i32) -> Element {
    match front.get(x, y) {
        Element::Sand => {
            if front.get(x, y + 1) == Element::Empty {
                Element::Empty
            } else {
                Element::Sand
            }
        }
        Element::Empty => {
            if front.get(x, y - 1) == Element::Sand {
                Element::Sand
            } else {
                Element::Empty
            }
        }
        other => other,
    }
}
