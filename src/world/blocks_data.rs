// blocks_data.rs - Baseline block vocabulary shared by worlds and tests

use crate::world::block_id::{BlockId, BlockRegistry};
use once_cell::sync::Lazy;

pub const AIR: BlockId = BlockId::AIR;
pub const STONE: BlockId = BlockId(1);
pub const DIRT: BlockId = BlockId(2);
pub const SAND: BlockId = BlockId(3);
pub const GLASS: BlockId = BlockId(4);
pub const TORCH: BlockId = BlockId(5);
pub const CHEST: BlockId = BlockId(16);
pub const FURNACE: BlockId = BlockId(17);
pub const SIGN: BlockId = BlockId(18);

const TABLE: &[(&str, BlockId, bool)] = &[
    ("stone", STONE, false),
    ("dirt", DIRT, false),
    ("sand", SAND, false),
    ("glass", GLASS, false),
    ("torch", TORCH, false),
    ("chest", CHEST, true),
    ("furnace", FURNACE, true),
    ("sign", SIGN, true),
];

pub static BLOCKS: Lazy<BlockRegistry> = Lazy::new(|| {
    let mut registry = BlockRegistry::new();
    for &(name, id, requires_aux_state) in TABLE {
        registry
            .register(name, id, requires_aux_state)
            .expect("duplicate entry in baseline block table");
    }
    registry
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_table_registers_cleanly() {
        assert_eq!(BLOCKS.len(), TABLE.len());
        assert_eq!(BLOCKS.id_by_name("stone").unwrap(), STONE);
    }

    #[test]
    fn test_storage_blocks_carry_aux_state() {
        assert!(BLOCKS.requires_aux_state(CHEST));
        assert!(BLOCKS.requires_aux_state(FURNACE));
        assert!(!BLOCKS.requires_aux_state(STONE));
        assert!(!BLOCKS.requires_aux_state(AIR));
    }
}
