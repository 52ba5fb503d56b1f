use crate::item::stack::ItemStack;
use crate::world::access::ContainerAccess;
use serde::{Deserialize, Serialize};

/// Fixed-size ordered sequence of item-stack slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotContainer {
    slots: Vec<Option<ItemStack>>,
}

impl SlotContainer {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Place a stack into a slot, returning whatever the slot held before.
    /// Out-of-range slots are ignored and the stack is returned unchanged.
    pub fn put(&mut self, index: usize, stack: ItemStack) -> Option<ItemStack> {
        match self.slots.get_mut(index) {
            Some(slot) => slot.replace(stack),
            None => Some(stack),
        }
    }

    pub fn take(&mut self, index: usize) -> Option<ItemStack> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl ContainerAccess for SlotContainer {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn stack_at(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::stack::ItemId;

    #[test]
    fn test_put_and_take_round_trip() {
        let mut container = SlotContainer::new(3);
        assert_eq!(container.put(1, ItemStack::new(ItemId(5), 8)), None);
        assert_eq!(container.occupied_slots(), 1);

        let taken = container.take(1).unwrap();
        assert_eq!(taken.count, 8);
        assert_eq!(container.occupied_slots(), 0);
    }

    #[test]
    fn test_out_of_range_put_is_rejected() {
        let mut container = SlotContainer::new(1);
        let stack = ItemStack::new(ItemId(5), 8);
        assert_eq!(container.put(4, stack.clone()), Some(stack));
        assert_eq!(container.occupied_slots(), 0);
    }

    #[test]
    fn test_empty_slots_read_as_none() {
        let container = SlotContainer::new(2);
        assert_eq!(container.slot_count(), 2);
        assert!(container.stack_at(0).is_none());
        assert!(container.stack_at(9).is_none());
    }
}
