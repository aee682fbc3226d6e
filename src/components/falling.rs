//! Constant-speed sinking for pellets and coins.
//!
//! See [`crate::systems::falling::falling_objects`].

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct Falling {
    /// Units per frame.
    pub speed: f32,
    /// Set once the object has reached the tank floor.
    pub landed: bool,
}

impl Falling {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            landed: false,
        }
    }
}
