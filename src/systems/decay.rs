//! Dead-entity decay.
//!
//! Counts down [`Decay`] on every Dead pool member and discards it when the
//! linger time runs out. Respects `time_scale` through `WorldTime::delta`.

use bevy_ecs::prelude::*;

use crate::components::decay::Decay;
use crate::components::lifestate::LifeState;
use crate::resources::worldtime::WorldTime;

pub fn decay_dead(world_time: Res<WorldTime>, mut query: Query<(&mut LifeState, &mut Decay)>) {
    let dt = world_time.delta;
    for (mut state, mut decay) in query.iter_mut() {
        if !state.is_dead() {
            continue;
        }
        decay.remaining -= dt;
        if decay.remaining <= 0.0 {
            state.discard();
        }
    }
}
