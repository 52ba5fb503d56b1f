use crate::item::stack::ItemStack;
use glam::Vec3;

/// Ticks a dropped item survives before despawning.
const DESPAWN_AGE: u32 = 6000;

/// A physical item entity resting or moving in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedItem {
    pub stack: ItemStack,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Ticks remaining before the item can be collected.
    pub pickup_delay: u32,
    pub age: u32,
}

impl DroppedItem {
    pub fn new(stack: ItemStack, position: Vec3) -> Self {
        Self {
            stack,
            position,
            velocity: Vec3::ZERO,
            pickup_delay: 0,
            age: 0,
        }
    }

    /// Advance one tick: count down the pickup delay and age the item.
    pub fn tick(&mut self) {
        self.pickup_delay = self.pickup_delay.saturating_sub(1);
        self.age += 1;
    }

    pub fn can_pickup(&self) -> bool {
        self.pickup_delay == 0
    }

    pub fn expired(&self) -> bool {
        self.age >= DESPAWN_AGE
    }
}
