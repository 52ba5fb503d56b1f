//! Relocates a block together with its auxiliary state to another cell.

use crate::world::access::WorldAccess;
use crate::world::cell::CellPos;
use crate::world::direction::Direction;
use crate::world::tag::DataTag;
use log::debug;

/// Move the block at `src` to `dst`, carrying its auxiliary state along.
///
/// Returns false without touching the world when the world is a
/// non-authoritative view, when `src` is empty, or when `dst` is occupied
/// and `allow_replace` is false. With `allow_replace`, the destination's
/// prior contents are overwritten and NOT dropped as loot.
///
/// Once the preconditions pass the move always completes: the source
/// descriptor is written into the destination, the source's auxiliary
/// record is cloned, relabelled to the destination coordinates and
/// deposited into the slot the descriptor write materialized. If no slot
/// materialized (the world rejected the write, or the type stopped
/// supporting auxiliary state), the record is discarded rather than rolled
/// back. The source cell is cleared last.
pub fn move_block(
    world: &mut impl WorldAccess,
    src: CellPos,
    dst: CellPos,
    allow_replace: bool,
) -> bool {
    if !world.is_authoritative() {
        debug!("refusing block move {} -> {} on replica view", src, dst);
        return false;
    }
    if world.is_empty(src) {
        debug!("no block to move at {}", src);
        return false;
    }
    if !world.is_empty(dst) && !allow_replace {
        debug!("destination {} occupied, move from {} blocked", dst, src);
        return false;
    }

    let descriptor = world.block_at(src);
    world.set_block(dst, descriptor);

    // Stage the auxiliary record before committing it to the destination.
    let staged: Option<DataTag> = world.aux_state_at(src).map(|state| {
        let mut record = state.clone();
        record.relabel_position(dst);
        record
    });
    if let Some(record) = staged {
        match world.aux_state_mut(dst) {
            Some(slot) => *slot = record,
            None => debug!("destination {} holds no auxiliary slot, state discarded", dst),
        }
    }

    world.clear_cell(src);
    true
}

/// Auxiliary state of the cell one step from `cell` along `direction`.
pub fn aux_state_toward(
    world: &impl WorldAccess,
    cell: CellPos,
    direction: Direction,
) -> Option<&DataTag> {
    world.aux_state_at(cell.offset(direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::dropped::DroppedItem;
    use crate::world::access::{ContainerAccess, DroppedId};
    use crate::world::block_id::BlockData;
    use crate::world::blocks_data::{CHEST, DIRT, STONE};
    use crate::world::grid::GridWorld;

    fn test_world() -> GridWorld {
        GridWorld::new()
    }

    fn src_pos() -> CellPos {
        CellPos::new(1, 64, 1)
    }

    fn dst_pos() -> CellPos {
        CellPos::new(5, 64, -2)
    }

    #[test]
    fn test_move_copies_descriptor_and_clears_source() {
        let mut world = test_world();
        world.set_block(src_pos(), BlockData::new(STONE, 3));

        assert!(move_block(&mut world, src_pos(), dst_pos(), false));
        assert!(world.is_empty(src_pos()));
        assert_eq!(world.block_at(dst_pos()), BlockData::new(STONE, 3));
    }

    #[test]
    fn test_replica_view_refuses_and_mutates_nothing() {
        let mut world = test_world();
        world.set_block(src_pos(), BlockData::from(STONE));
        world.set_authoritative(false);

        assert!(!move_block(&mut world, src_pos(), dst_pos(), true));
        assert_eq!(world.block_at(src_pos()), BlockData::from(STONE));
        assert!(world.is_empty(dst_pos()));
    }

    #[test]
    fn test_empty_source_refuses() {
        let mut world = test_world();
        assert!(!move_block(&mut world, src_pos(), dst_pos(), true));
        assert!(world.is_empty(dst_pos()));
    }

    #[test]
    fn test_occupied_destination_blocks_the_move() {
        let mut world = test_world();
        world.set_block(src_pos(), BlockData::from(STONE));
        world.set_block(dst_pos(), BlockData::from(DIRT));

        assert!(!move_block(&mut world, src_pos(), dst_pos(), false));
        assert_eq!(world.block_at(src_pos()), BlockData::from(STONE));
        assert_eq!(world.block_at(dst_pos()), BlockData::from(DIRT));
    }

    #[test]
    fn test_allow_replace_overwrites_without_loot() {
        let mut world = test_world();
        world.set_block(src_pos(), BlockData::from(STONE));
        world.set_block(dst_pos(), BlockData::from(DIRT));

        assert!(move_block(&mut world, src_pos(), dst_pos(), true));
        assert!(world.is_empty(src_pos()));
        assert_eq!(world.block_at(dst_pos()), BlockData::from(STONE));
        // The replaced block is gone, not spawned as an item
        assert!(world.dropped_items().is_empty());
    }

    #[test]
    fn test_auxiliary_state_travels_and_is_relabelled() {
        let mut world = test_world();
        world.set_block(src_pos(), BlockData::from(CHEST));
        world
            .aux_state_mut(src_pos())
            .unwrap()
            .insert("fuel", 40);

        assert!(move_block(&mut world, src_pos(), dst_pos(), false));

        assert!(world.aux_state_at(src_pos()).is_none());
        let moved = world.aux_state_at(dst_pos()).unwrap();
        assert_eq!(moved.get_i64("fuel"), Some(40));
        assert_eq!(moved.position(), Some(dst_pos()));
    }

    #[test]
    fn test_round_trip_restores_original_state() {
        let mut world = test_world();
        world.set_block(src_pos(), BlockData::new(CHEST, 2));
        world
            .aux_state_mut(src_pos())
            .unwrap()
            .insert("contents", "ledger");
        let original = world.aux_state_at(src_pos()).unwrap().clone();

        assert!(move_block(&mut world, src_pos(), dst_pos(), false));
        assert!(move_block(&mut world, dst_pos(), src_pos(), false));

        assert_eq!(world.block_at(src_pos()), BlockData::new(CHEST, 2));
        let restored = world.aux_state_at(src_pos()).unwrap();
        assert_eq!(*restored, original);
        assert_eq!(restored.position(), Some(src_pos()));
    }

    #[test]
    fn test_aux_state_toward_probes_the_neighbor() {
        let mut world = test_world();
        let cell = CellPos::new(0, 10, 0);
        world.set_block(cell.offset(Direction::East), BlockData::from(CHEST));

        assert!(aux_state_toward(&world, cell, Direction::East).is_some());
        assert!(aux_state_toward(&world, cell, Direction::West).is_none());
    }

    /// World double whose cell writes silently fail for one protected cell,
    /// the shape of a world rejecting a descriptor write.
    struct RejectingWorld {
        inner: GridWorld,
        protected: CellPos,
    }

    impl WorldAccess for RejectingWorld {
        fn is_authoritative(&self) -> bool {
            self.inner.is_authoritative()
        }

        fn max_height(&self) -> i32 {
            self.inner.max_height()
        }

        fn block_at(&self, pos: CellPos) -> BlockData {
            self.inner.block_at(pos)
        }

        fn set_block(&mut self, pos: CellPos, block: BlockData) {
            if pos != self.protected {
                self.inner.set_block(pos, block);
            }
        }

        fn clear_cell(&mut self, pos: CellPos) {
            self.inner.clear_cell(pos);
        }

        fn aux_state_at(&self, pos: CellPos) -> Option<&DataTag> {
            self.inner.aux_state_at(pos)
        }

        fn aux_state_mut(&mut self, pos: CellPos) -> Option<&mut DataTag> {
            self.inner.aux_state_mut(pos)
        }

        fn container_at(&self, pos: CellPos) -> Option<&dyn ContainerAccess> {
            self.inner.container_at(pos)
        }

        fn spawn_dropped(&mut self, item: DroppedItem) -> DroppedId {
            self.inner.spawn_dropped(item)
        }

        fn dropped_mut(&mut self, id: DroppedId) -> Option<&mut DroppedItem> {
            self.inner.dropped_mut(id)
        }
    }

    #[test]
    fn test_rejected_destination_discards_auxiliary_state() {
        let mut world = RejectingWorld {
            inner: test_world(),
            protected: dst_pos(),
        };
        world.set_block(src_pos(), BlockData::from(CHEST));
        world
            .aux_state_mut(src_pos())
            .unwrap()
            .insert("fuel", 40);

        // The move still reports success; the state is dropped, not rolled back.
        assert!(move_block(&mut world, src_pos(), dst_pos(), false));
        assert!(world.is_empty(src_pos()));
        assert!(world.is_empty(dst_pos()));
        assert!(world.aux_state_at(src_pos()).is_none());
        assert!(world.aux_state_at(dst_pos()).is_none());
    }
}
