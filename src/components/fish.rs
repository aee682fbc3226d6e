//! Fish state carried by every swimming tank occupant.
//!
//! Behavior constants (speeds, diet, thresholds) live in the species table,
//! see [`SpeciesConfig`](crate::resources::species::SpeciesConfig). The
//! component only holds per-instance mutable state.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Speed (units per frame) above which a fish plays its swimming frames.
pub const MOVING_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Hunger band used to pick the sprite set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HungerTier {
    Healthy,
    Warning,
    Danger,
}

impl HungerTier {
    /// Index into per-tier arrays (`[healthy, warning, danger]`).
    pub fn index(self) -> usize {
        match self {
            HungerTier::Healthy => 0,
            HungerTier::Warning => 1,
            HungerTier::Danger => 2,
        }
    }

    /// Tier for `hunger / max_hunger`. Above `warning` is healthy, above
    /// `danger` is warning, everything else is danger.
    pub fn from_fraction(fraction: f32, warning: f32, danger: f32) -> Self {
        if fraction > warning {
            HungerTier::Healthy
        } else if fraction > danger {
            HungerTier::Warning
        } else {
            HungerTier::Danger
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Fish {
    /// Key into the species table.
    pub species: String,
    hunger: f32,
    max_hunger: f32,
    /// Lifetime nutrition eaten, drives evolution.
    pub consumed: f32,
    pub wander_target: Option<Vector2>,
    pub facing: Facing,
    /// Displacement applied during the last update.
    pub velocity: Vector2,
}

impl Fish {
    /// A fish with a full belly.
    pub fn new(species: impl Into<String>, max_hunger: f32) -> Self {
        let max_hunger = max_hunger.max(0.0);
        Self {
            species: species.into(),
            hunger: max_hunger,
            max_hunger,
            consumed: 0.0,
            wander_target: None,
            facing: Facing::default(),
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn with_hunger(mut self, hunger: f32) -> Self {
        self.set_hunger(hunger);
        self
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn max_hunger(&self) -> f32 {
        self.max_hunger
    }

    /// Writes are clamped to `[0, max_hunger]`.
    pub fn set_hunger(&mut self, hunger: f32) {
        self.hunger = hunger.clamp(0.0, self.max_hunger);
    }

    /// Eat `nutrition`: hunger rises (clamped), lifetime consumption grows
    /// by the full amount.
    pub fn feed(&mut self, nutrition: f32) {
        self.set_hunger(self.hunger + nutrition);
        self.consumed += nutrition;
    }

    /// Per-frame hunger decay. Returns the remaining hunger.
    pub fn starve(&mut self, decay: f32) -> f32 {
        self.set_hunger(self.hunger - decay);
        self.hunger
    }

    pub fn is_starved(&self) -> bool {
        self.hunger <= 0.0
    }

    pub fn tier(&self, warning: f32, danger: f32) -> HungerTier {
        let fraction = if self.max_hunger > 0.0 {
            self.hunger / self.max_hunger
        } else {
            0.0
        };
        HungerTier::from_fraction(fraction, warning, danger)
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.x.hypot(self.velocity.y) > MOVING_THRESHOLD
    }

    /// Record this frame's displacement and turn to face it.
    /// Purely vertical moves keep the current facing.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
        if velocity.x < 0.0 {
            self.facing = Facing::Left;
        } else if velocity.x > 0.0 {
            self.facing = Facing::Right;
        }
    }

    pub fn stop(&mut self) {
        self.velocity = Vector2 { x: 0.0, y: 0.0 };
    }
}
