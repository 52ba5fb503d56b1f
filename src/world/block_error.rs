use crate::world::block_id::BlockId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("Duplicate block ID: {0:?}")]
    DuplicateId(BlockId),

    #[error("Duplicate block name: {0}")]
    DuplicateName(String),

    #[error("Unknown block name: {0}")]
    UnknownName(String),
}
