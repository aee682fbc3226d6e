//! Insertion order of tank occupants.
//!
//! bevy_ecs does not guarantee a stable query order, so every pool member is
//! stamped with a monotonically increasing [`PoolSlot`] at spawn time (see
//! [`PoolSequence`](crate::resources::tank::PoolSequence)). Update and draw
//! passes sort by slot, which keeps surviving entities in insertion order and
//! appends newcomers at the end.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolSlot(pub u64);
