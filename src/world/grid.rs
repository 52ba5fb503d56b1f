use crate::config::grid::GridConfig;
use crate::item::container::SlotContainer;
use crate::item::dropped::DroppedItem;
use crate::world::access::{ContainerAccess, DroppedId, WorldAccess};
use crate::world::block_id::{BlockData, BlockRegistry};
use crate::world::blocks_data::BLOCKS;
use crate::world::cell::CellPos;
use crate::world::tag::DataTag;
use log::trace;
use std::collections::HashMap;

/// In-memory implementation of [`WorldAccess`] backed by hash maps.
///
/// This is a reference-grade world for tests and tools, not a storage
/// engine: no chunking, no persistence, no generation.
#[derive(Debug, Clone)]
pub struct GridWorld {
    registry: BlockRegistry,
    blocks: HashMap<CellPos, BlockData>,
    aux: HashMap<CellPos, DataTag>,
    containers: HashMap<CellPos, SlotContainer>,
    dropped: Vec<DroppedItem>,
    max_height: i32,
    authoritative: bool,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    pub fn with_config(config: GridConfig) -> Self {
        Self::with_registry(config, BLOCKS.clone())
    }

    pub fn with_registry(config: GridConfig, registry: BlockRegistry) -> Self {
        Self {
            registry,
            blocks: HashMap::new(),
            aux: HashMap::new(),
            containers: HashMap::new(),
            dropped: Vec::new(),
            max_height: config.max_height,
            authoritative: config.authoritative,
        }
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Mark this instance as a replica view. Mutating operations such as
    /// block relocation refuse to run against it.
    pub fn set_authoritative(&mut self, authoritative: bool) {
        self.authoritative = authoritative;
    }

    /// Attach a container to a cell. The previous container, if any, is
    /// returned. Containers are removed together with the cell.
    pub fn attach_container(
        &mut self,
        pos: CellPos,
        container: SlotContainer,
    ) -> Option<SlotContainer> {
        self.containers.insert(pos, container)
    }

    pub fn container_mut(&mut self, pos: CellPos) -> Option<&mut SlotContainer> {
        self.containers.get_mut(&pos)
    }

    pub fn dropped_items(&self) -> &[DroppedItem] {
        &self.dropped
    }

    pub fn dropped(&self, id: DroppedId) -> Option<&DroppedItem> {
        self.dropped.get(id)
    }
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldAccess for GridWorld {
    fn is_authoritative(&self) -> bool {
        self.authoritative
    }

    fn max_height(&self) -> i32 {
        self.max_height
    }

    fn block_at(&self, pos: CellPos) -> BlockData {
        self.blocks.get(&pos).copied().unwrap_or(BlockData::AIR)
    }

    fn set_block(&mut self, pos: CellPos, block: BlockData) {
        if block.is_air() {
            self.clear_cell(pos);
            return;
        }
        self.blocks.insert(pos, block);
        if self.registry.requires_aux_state(block.id) {
            self.aux.insert(pos, DataTag::for_cell(pos));
        } else {
            self.aux.remove(&pos);
        }
    }

    fn clear_cell(&mut self, pos: CellPos) {
        self.blocks.remove(&pos);
        self.aux.remove(&pos);
        self.containers.remove(&pos);
    }

    fn aux_state_at(&self, pos: CellPos) -> Option<&DataTag> {
        self.aux.get(&pos)
    }

    fn aux_state_mut(&mut self, pos: CellPos) -> Option<&mut DataTag> {
        self.aux.get_mut(&pos)
    }

    fn container_at(&self, pos: CellPos) -> Option<&dyn ContainerAccess> {
        self.containers
            .get(&pos)
            .map(|container| container as &dyn ContainerAccess)
    }

    fn spawn_dropped(&mut self, item: DroppedItem) -> DroppedId {
        trace!(
            "spawning dropped item {} x{} at {}",
            item.stack.item,
            item.stack.count,
            item.position
        );
        self.dropped.push(item);
        self.dropped.len() - 1
    }

    fn dropped_mut(&mut self, id: DroppedId) -> Option<&mut DroppedItem> {
        self.dropped.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::stack::{ItemId, ItemStack};
    use crate::world::blocks_data::{CHEST, STONE};
    use glam::Vec3;

    fn test_world() -> GridWorld {
        GridWorld::new()
    }

    #[test]
    fn test_unset_cells_read_as_air() {
        let world = test_world();
        let pos = CellPos::new(0, 64, 0);
        assert!(world.is_empty(pos));
        assert_eq!(world.block_at(pos), BlockData::AIR);
    }

    #[test]
    fn test_set_block_materializes_aux_slot_for_capable_types() {
        let mut world = test_world();
        let pos = CellPos::new(2, 10, 2);

        world.set_block(pos, BlockData::from(CHEST));
        let slot = world.aux_state_at(pos).unwrap();
        assert_eq!(slot.position(), Some(pos));
    }

    #[test]
    fn test_set_block_removes_aux_slot_for_plain_types() {
        let mut world = test_world();
        let pos = CellPos::new(2, 10, 2);

        world.set_block(pos, BlockData::from(CHEST));
        world.set_block(pos, BlockData::from(STONE));
        assert!(world.aux_state_at(pos).is_none());
    }

    #[test]
    fn test_clear_cell_removes_everything() {
        let mut world = test_world();
        let pos = CellPos::new(1, 5, 1);

        world.set_block(pos, BlockData::from(CHEST));
        world.attach_container(pos, SlotContainer::new(9));
        world.clear_cell(pos);

        assert!(world.is_empty(pos));
        assert!(world.aux_state_at(pos).is_none());
        assert!(world.container_at(pos).is_none());
    }

    #[test]
    fn test_setting_air_clears_the_cell() {
        let mut world = test_world();
        let pos = CellPos::new(0, 1, 0);

        world.set_block(pos, BlockData::from(CHEST));
        world.set_block(pos, BlockData::AIR);
        assert!(world.is_empty(pos));
        assert!(world.aux_state_at(pos).is_none());
    }

    #[test]
    fn test_replica_views_are_not_authoritative() {
        let mut world = test_world();
        assert!(world.is_authoritative());
        world.set_authoritative(false);
        assert!(!world.is_authoritative());
    }

    #[test]
    fn test_spawned_items_are_inspectable() {
        let mut world = test_world();
        let id = world.spawn_dropped(DroppedItem::new(
            ItemStack::new(ItemId(3), 2),
            Vec3::new(0.5, 64.5, 0.5),
        ));

        assert_eq!(world.dropped_items().len(), 1);
        world.dropped_mut(id).unwrap().velocity.y = 1.0;
        assert_eq!(world.dropped(id).unwrap().velocity.y, 1.0);
    }
}
