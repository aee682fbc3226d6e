//! The tank update.
//!
//! One `advance` moves the world clock forward and runs, in order:
//!
//! 1. [`sweep_discarded`]
//! 2. [`fish_behavior`]
//! 3. [`falling_objects`]
//! 4. [`decay_dead`]
//! 5. [`apply_tank_events`]
//! 6. [`sweep_discarded`]
//!
//! The chain inserts sync points, so despawns from the first sweep are applied
//! before behavior runs and spawns are in the world before the final sweep.
//! An empty pool runs every step as a no-op.

use bevy_ecs::prelude::*;

use crate::systems::decay::decay_dead;
use crate::systems::falling::falling_objects;
use crate::systems::fish::fish_behavior;
use crate::systems::pool::sweep_discarded;
use crate::systems::spawn::apply_tank_events;
use crate::systems::time::update_world_time;

pub fn tank_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            sweep_discarded,
            fish_behavior,
            falling_objects,
            decay_dead,
            apply_tank_events,
            sweep_discarded,
        )
            .chain(),
    );
    schedule
}

/// Advance the tank by `dt` seconds of wall time.
pub fn advance(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}
