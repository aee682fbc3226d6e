//! Tank-wide resources: geometry, fixed rules, pool ordering and RNG.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::components::poolslot::PoolSlot;
use crate::resources::gameconfig::GameConfig;

/// Placement of the tank inside the render target.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TankBounds {
    /// Top-left of the tank in render-target pixels.
    pub origin: Vector2,
    pub width: f32,
    pub height: f32,
}

impl TankBounds {
    pub fn new(origin: Vector2, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Tank anchored to the bottom of the render target, under the shop bar.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Vector2 {
                x: 0.0,
                y: config.shop_height() as f32,
            },
            config.tank_width as f32,
            config.tank_height as f32,
        )
    }

    /// Render-target position to tank-local, `None` outside the tank.
    pub fn to_local(&self, game_pos: Vector2) -> Option<Vector2> {
        let local = Vector2 {
            x: game_pos.x - self.origin.x,
            y: game_pos.y - self.origin.y,
        };
        let inside = (0.0..=self.width).contains(&local.x) && (0.0..=self.height).contains(&local.y);
        inside.then_some(local)
    }

    pub fn to_game(&self, local: Vector2) -> Vector2 {
        Vector2 {
            x: local.x + self.origin.x,
            y: local.y + self.origin.y,
        }
    }

    /// Largest top-left position that keeps a box of `size` inside.
    pub fn max_position(&self, size: Vector2) -> Vector2 {
        Vector2 {
            x: (self.width - size.x).max(0.0),
            y: (self.height - size.y).max(0.0),
        }
    }
}

/// Fixed tuning for pellets and coins.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TankRules {
    pub pellet_nutrition: f32,
    pub pellet_size: f32,
    /// Units per frame.
    pub pellet_fall_speed: f32,
    pub coin_size: f32,
    pub coin_fall_speed: f32,
    pub coin_rest_time: f32,
    pub pellet_cost: i64,
    pub max_pellets: u32,
    pub starting_gold: i64,
    pub starting_fish: u32,
}

impl Default for TankRules {
    fn default() -> Self {
        Self::from_config(&GameConfig::new())
    }
}

impl TankRules {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            pellet_nutrition: 30.0,
            pellet_size: 12.0,
            pellet_fall_speed: 0.75,
            coin_size: 24.0,
            coin_fall_speed: 0.5,
            coin_rest_time: config.coin_rest_time,
            pellet_cost: config.pellet_cost,
            max_pellets: config.max_pellets,
            starting_gold: config.starting_gold,
            starting_fish: config.starting_fish,
        }
    }
}

/// Hands out monotonically increasing pool slots.
#[derive(Resource, Debug, Default)]
pub struct PoolSequence {
    next: u64,
}

impl PoolSequence {
    pub fn next_slot(&mut self) -> PoolSlot {
        let slot = PoolSlot(self.next);
        self.next += 1;
        slot
    }
}

/// Seeded RNG for wander targets and spawn placement.
#[derive(Resource, Debug, Clone)]
pub struct TankRng(pub fastrand::Rng);

impl TankRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(fastrand::Rng::with_seed(seed)),
            None => Self(fastrand::Rng::new()),
        }
    }

    /// Uniform in `[0, 1)`.
    pub fn f32(&mut self) -> f32 {
        self.0.f32()
    }

    /// Uniform in `[lo, hi)`; returns `lo` for an empty range.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        lo + self.0.f32() * (hi - lo)
    }
}

impl Default for TankRng {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_local_respects_shop_offset() {
        let bounds = TankBounds::from_config(&GameConfig::new());
        assert_eq!(bounds.to_local(Vector2 { x: 10.0, y: 20.0 }), None);
        let local = bounds.to_local(Vector2 { x: 10.0, y: 100.0 }).unwrap();
        assert_eq!(local.x, 10.0);
        assert_eq!(local.y, 20.0);
        assert_eq!(bounds.to_game(local).y, 100.0);
    }

    #[test]
    fn slots_increase() {
        let mut seq = PoolSequence::default();
        let a = seq.next_slot();
        let b = seq.next_slot();
        assert!(a < b);
    }

    #[test]
    fn seeded_rng_repeats() {
        let mut a = TankRng::new(Some(3));
        let mut b = TankRng::new(Some(3));
        for _ in 0..5 {
            assert_eq!(a.f32(), b.f32());
        }
        assert_eq!(a.range(4.0, 4.0), 4.0);
    }
}
