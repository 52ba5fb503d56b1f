pub mod container;
pub mod dropped;
pub mod stack;

// Re-export commonly used types
pub use container::SlotContainer;
pub use dropped::DroppedItem;
pub use stack::{ItemId, ItemStack};
