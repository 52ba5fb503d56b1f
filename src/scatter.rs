//! Spawns dropped-item entities: jittered single drops, directional
//! ejection, and container drains.

use crate::item::dropped::DroppedItem;
use crate::item::stack::ItemStack;
use crate::world::access::{ContainerAccess, DroppedId, WorldAccess};
use crate::world::cell::CellPos;
use crate::world::direction::Direction;
use glam::Vec3;
use rand::Rng;

// Width of the jitter band inside a unit cell; offsets land in [0.15, 0.85].
const POSITION_SPREAD: f32 = 0.7;
// Ticks before the spawning actor can re-collect the item.
const PICKUP_DELAY_TICKS: u32 = 10;
const EJECT_SPEED_DIVISOR: f32 = 5.0;

fn scatter_offset(rng: &mut impl Rng) -> f32 {
    rng.gen::<f32>() * POSITION_SPREAD + (1.0 - POSITION_SPREAD) * 0.5
}

/// Spawn a dropped item near `pos`, jittered per axis so stacked drops
/// spread out. The stack's tag data is deep-copied onto the entity; the
/// caller's stack is left untouched.
pub fn spawn_item(
    world: &mut impl WorldAccess,
    rng: &mut impl Rng,
    pos: Vec3,
    stack: &ItemStack,
) -> DroppedId {
    let jitter = Vec3::new(
        scatter_offset(rng),
        scatter_offset(rng),
        scatter_offset(rng),
    );
    let mut item = DroppedItem::new(stack.clone(), pos + jitter);
    item.pickup_delay = PICKUP_DELAY_TICKS;
    world.spawn_dropped(item)
}

/// [`spawn_item`] from a cell's minimum corner.
pub fn spawn_item_at(
    world: &mut impl WorldAccess,
    rng: &mut impl Rng,
    cell: CellPos,
    stack: &ItemStack,
) -> DroppedId {
    spawn_item(world, rng, cell.to_world(), stack)
}

/// Spawn a dropped item and launch it along `direction`. Only the spawn
/// position is jittered; the launch velocity is fixed.
pub fn eject_item(
    world: &mut impl WorldAccess,
    rng: &mut impl Rng,
    pos: Vec3,
    direction: Direction,
    stack: &ItemStack,
) -> DroppedId {
    let id = spawn_item(world, rng, pos, stack);
    if let Some(item) = world.dropped_mut(id) {
        item.velocity = direction.offset().as_vec3() / EJECT_SPEED_DIVISOR;
    }
    id
}

/// Spawn one dropped item per occupied slot, in slot order, all at `pos`.
/// The container is read, not cleared; a missing container is a no-op.
pub fn drain_inventory<C: ContainerAccess + ?Sized>(
    world: &mut impl WorldAccess,
    rng: &mut impl Rng,
    container: Option<&C>,
    pos: Vec3,
) {
    let container = match container {
        Some(container) => container,
        None => return,
    };
    for index in 0..container.slot_count() {
        if let Some(stack) = container.stack_at(index) {
            if !stack.is_empty() {
                spawn_item(world, rng, pos, stack);
            }
        }
    }
}

/// [`drain_inventory`] at a cell's midpoint.
pub fn drain_inventory_at<C: ContainerAccess + ?Sized>(
    world: &mut impl WorldAccess,
    rng: &mut impl Rng,
    container: Option<&C>,
    cell: CellPos,
) {
    drain_inventory(world, rng, container, cell.center());
}

/// Drain the container exposed by the occupant of `cell`, if there is one,
/// into the world at that cell's midpoint. Cells without a container
/// capability are a no-op.
pub fn drain_cell_inventory(world: &mut impl WorldAccess, rng: &mut impl Rng, cell: CellPos) {
    // Copy the stacks out first; spawning needs the world mutably.
    let stacks: Vec<ItemStack> = match world.container_at(cell) {
        Some(container) => (0..container.slot_count())
            .filter_map(|index| container.stack_at(index).cloned())
            .collect(),
        None => return,
    };
    let pos = cell.center();
    for stack in &stacks {
        if !stack.is_empty() {
            spawn_item(world, rng, pos, stack);
        }
    }
}
