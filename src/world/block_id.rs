use crate::world::block_error::BlockError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display, Formatter};

/// Numeric block type identifier. Zero is reserved for "no block".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);

    pub fn is_air(&self) -> bool {
        *self == Self::AIR
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for BlockId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl From<BlockId> for u16 {
    fn from(id: BlockId) -> u16 {
        id.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::AIR
    }
}

/// The (type, variant) descriptor occupying one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockData {
    pub id: BlockId,
    pub metadata: u16,
}

impl BlockData {
    pub const AIR: BlockData = BlockData {
        id: BlockId::AIR,
        metadata: 0,
    };

    pub fn new(id: BlockId, metadata: u16) -> Self {
        Self { id, metadata }
    }

    pub fn is_air(&self) -> bool {
        self.id.is_air()
    }
}

impl From<BlockId> for BlockData {
    fn from(id: BlockId) -> Self {
        Self { id, metadata: 0 }
    }
}

/// Maps block names to ids and records which block types carry an
/// auxiliary-state record.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    names: HashMap<String, BlockId>,
    ids: HashMap<BlockId, String>,
    aux_capable: HashSet<BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: &str,
        id: BlockId,
        requires_aux_state: bool,
    ) -> Result<(), BlockError> {
        if self.ids.contains_key(&id) {
            return Err(BlockError::DuplicateId(id));
        }
        if self.names.contains_key(name) {
            return Err(BlockError::DuplicateName(name.to_string()));
        }
        self.names.insert(name.to_string(), id);
        self.ids.insert(id, name.to_string());
        if requires_aux_state {
            self.aux_capable.insert(id);
        }
        Ok(())
    }

    pub fn id_by_name(&self, name: &str) -> Result<BlockId, BlockError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| BlockError::UnknownName(name.to_string()))
    }

    pub fn name_of(&self, id: BlockId) -> Option<&str> {
        self.ids.get(&id).map(String::as_str)
    }

    /// Whether cells holding this block type carry an auxiliary-state record.
    pub fn requires_aux_state(&self, id: BlockId) -> bool {
        self.aux_capable.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
