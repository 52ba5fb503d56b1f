use crate::item::dropped::DroppedItem;
use crate::item::stack::ItemStack;
use crate::world::block_id::BlockData;
use crate::world::cell::CellPos;
use crate::world::tag::DataTag;

/// Handle to a dropped item registered with a world.
pub type DroppedId = usize;

/// Mutable access to a voxel-grid world. Callers hold exclusive access for
/// the duration of each operation; implementations do no locking.
pub trait WorldAccess {
    /// False on read-only or replica views. Mutating operations refuse to
    /// run against a non-authoritative world.
    fn is_authoritative(&self) -> bool;

    /// Exclusive upper bound on cell y coordinates.
    fn max_height(&self) -> i32;

    fn block_at(&self, pos: CellPos) -> BlockData;

    /// Write a descriptor into a cell. Creates or replaces the cell's
    /// auxiliary-state slot according to the descriptor's block type.
    fn set_block(&mut self, pos: CellPos, block: BlockData);

    /// Empty a cell, dropping its descriptor and any attached auxiliary
    /// state or container.
    fn clear_cell(&mut self, pos: CellPos);

    fn is_empty(&self, pos: CellPos) -> bool {
        self.block_at(pos).is_air()
    }

    fn aux_state_at(&self, pos: CellPos) -> Option<&DataTag>;

    fn aux_state_mut(&mut self, pos: CellPos) -> Option<&mut DataTag>;

    /// Container capability of the cell's occupant, if it has one.
    fn container_at(&self, pos: CellPos) -> Option<&dyn ContainerAccess>;

    fn spawn_dropped(&mut self, item: DroppedItem) -> DroppedId;

    fn dropped_mut(&mut self, id: DroppedId) -> Option<&mut DroppedItem>;
}

/// Read access to an ordered sequence of item-stack slots.
pub trait ContainerAccess {
    fn slot_count(&self) -> usize;

    /// The stack in a slot, or `None` for an empty or out-of-range slot.
    fn stack_at(&self, index: usize) -> Option<&ItemStack>;
}
