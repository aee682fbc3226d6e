//! Falling objects: pellets and coins sink at a constant speed.
//!
//! - A pellet reaching the floor expires (Dead, then discarded by decay).
//! - A coin reaching the floor lands and rests for its remaining rest time,
//!   still collectible, then is discarded.

use bevy_ecs::prelude::*;

use crate::components::boundary::Boundary;
use crate::components::coin::Coin;
use crate::components::falling::Falling;
use crate::components::lifestate::LifeState;
use crate::resources::tank::TankBounds;
use crate::resources::worldtime::WorldTime;

pub fn falling_objects(
    bounds: Res<TankBounds>,
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Boundary, &mut LifeState, &mut Falling, Option<&mut Coin>)>,
) {
    for (mut boundary, mut state, mut falling, coin) in query.iter_mut() {
        if !state.is_alive() {
            continue;
        }
        if falling.landed {
            if let Some(mut coin) = coin {
                coin.rest_remaining -= world_time.delta;
                if coin.rest_remaining <= 0.0 {
                    state.discard();
                }
            }
            continue;
        }

        boundary.pos.y += falling.speed;
        let floor = (bounds.height - boundary.height()).max(0.0);
        if boundary.pos.y >= floor {
            boundary.pos.y = floor;
            falling.landed = true;
            if coin.is_none() {
                state.kill();
            }
        }
    }
}
