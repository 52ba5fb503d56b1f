//! Terrain-surface probe over vertical columns.

use crate::world::access::WorldAccess;
use crate::world::cell::CellPos;

/// The y coordinate just above the topmost non-empty cell of the column at
/// `(x, z)`, or 0 when the whole column is empty. Linear downward probe
/// from the world's height cap.
pub fn top_solid_cell_y(world: &impl WorldAccess, x: i32, z: i32) -> i32 {
    let mut y = world.max_height();
    while y > 0 && world.is_empty(CellPos::new(x, y - 1, z)) {
        y -= 1;
    }
    y
}
