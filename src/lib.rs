pub mod column;
pub mod config;
pub mod item;
pub mod orientation;
pub mod relocate;
pub mod scatter;
pub mod world;

// Re-export commonly used types
pub use column::top_solid_cell_y;
pub use config::GridConfig;
pub use item::{DroppedItem, ItemId, ItemStack, SlotContainer};
pub use orientation::{
    display_angle_of, planar_direction, planar_direction_of, spatial_direction,
    spatial_direction_of, Heading,
};
pub use relocate::{aux_state_toward, move_block};
pub use scatter::{
    drain_cell_inventory, drain_inventory, drain_inventory_at, eject_item, spawn_item,
    spawn_item_at,
};
pub use world::{
    BlockData, BlockError, BlockId, BlockRegistry, CellPos, ContainerAccess, DataTag, Direction,
    DroppedId, GridWorld, WorldAccess, BLOCKS,
};
