use crate::world::tag::DataTag;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Numeric item type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u16);

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ItemId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

/// A stack of identical items, optionally carrying a data tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
    pub tag: Option<DataTag>,
}

impl ItemStack {
    pub fn new(item: ItemId, count: u32) -> Self {
        Self {
            item,
            count,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: DataTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
