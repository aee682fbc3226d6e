use bevy_ecs::prelude::Component;

/// Food pellet dropped by the player.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pellet {
    /// Hunger restored to the fish that eats it.
    pub nutrition: f32,
}

impl Pellet {
    pub fn new(nutrition: f32) -> Self {
        Self { nutrition }
    }
}
