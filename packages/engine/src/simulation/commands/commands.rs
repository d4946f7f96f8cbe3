use crate::domain::elements::Element;

use super::WorldCore;

pub(super) fn set_cell(world: &mut WorldCore, x: i32, y: i32, element: u8) -> bool {
    let Some(element) = Element::from_code(element) else {
        return false;
    };
    if !element.is_storable() {
        return false;
    }
    if !world.cells.front().in_bounds(x, y) {
        return false;
    }

    world.cells.front_mut().set(x, y, element);

    // Keep the saturation field coherent with the seeded state, the same
    // way the paint tool would have left it.
    match element {
        Element::Paint | Element::Head => world.paint.set(x, y, 1.0),
        Element::Empty => world.paint.set(x, y, 0.0),
        _ => {}
    }

    true
}

pub(super) fn cell_at(world: &WorldCore, x: i32, y: i32) -> u8 {
    world.cells.front().get(x, y).code()
}

pub(super) fn saturation_at(world: &WorldCore, x: i32, y: i32) -> f32 {
    world.paint.get(x, y)
}

pub(super) fn clear(world: &mut WorldCore) {
    world.cells.clear();
    world.paint.clear();
    world.colors.fill(0);
    world.frame = 0;
}

pub(super) fn live_cell_count(world: &WorldCore) -> u32 {
    world
        .cells
        .front()
        .cells()
        .iter()
        .filter(|cell| !cell.is_empty())
        .count() as u32
}
