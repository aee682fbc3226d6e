//! Periodic coin drops for economic fish.
//!
//! The timer counts scaled seconds from [`WorldTime`](crate::resources::worldtime::WorldTime).
//! When it expires the fish behavior system emits a
//! [`TankEvent::SpawnCoin`](crate::events::tank::TankEvent::SpawnCoin) at the
//! fish's center and the timer restarts.

use bevy_ecs::prelude::Component;

use crate::components::coin::CoinKind;

#[derive(Component, Debug, Clone, Copy)]
pub struct CoinDropper {
    pub time_since_drop: f32,
    pub drop_interval: f32,
    pub coin: CoinKind,
}

impl CoinDropper {
    pub fn new(drop_interval: f32, coin: CoinKind) -> Self {
        Self {
            time_since_drop: 0.0,
            drop_interval,
            coin,
        }
    }

    /// Advance by `dt` seconds. Returns true when a coin is due; the timer is
    /// reset in that case.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.time_since_drop += dt;
        if self.time_since_drop >= self.drop_interval {
            self.reset();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.time_since_drop = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut d = CoinDropper::new(1.0, CoinKind::Silver);
        assert!(!d.tick(0.5));
        assert!(d.tick(0.5));
        assert_eq!(d.time_since_drop, 0.0);
        assert!(!d.tick(0.25));
    }

    #[test]
    fn large_delta_fires_once() {
        let mut d = CoinDropper::new(1.0, CoinKind::Gold);
        assert!(d.tick(5.0));
        assert!(!d.tick(0.1));
    }
}
