//! Linger time for dead tank occupants.
//!
//! The [`Decay`] component counts down only while the entity is
//! [`LifeState::Dead`](crate::components::lifestate::LifeState::Dead). When it
//! runs out the entity is marked `Discard` and removed by the next pool sweep.
//! A corpse keeps showing its death sprite until then; expired pellets use a
//! zero linger and disappear on the frame they die.
//!
//! # Related
//!
//! - [`crate::systems::decay::decay_dead`] – the countdown system

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct Decay {
    /// Seconds left before a dead entity is discarded.
    pub remaining: f32,
}

impl Decay {
    pub fn new(seconds: f32) -> Self {
        Decay { remaining: seconds }
    }
}
