pub mod access;
pub mod block_error;
pub mod block_id;
pub mod blocks_data;
pub mod cell;
pub mod direction;
pub mod grid;
pub mod tag;

// Re-export commonly used types
pub use access::{ContainerAccess, DroppedId, WorldAccess};
pub use block_error::BlockError;
pub use block_id::{BlockData, BlockId, BlockRegistry};
pub use blocks_data::BLOCKS;
pub use cell::CellPos;
pub use direction::Direction;
pub use grid::GridWorld;
pub use tag::DataTag;
