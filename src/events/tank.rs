//! Deferred tank mutations.
//!
//! Behavior systems, pointer handling and shop buttons never spawn pool
//! members directly. They write a [`TankEvent`] and
//! [`apply_tank_events`](crate::systems::spawn::apply_tank_events) appends
//! the new entities after the behavior pass, so newcomers are first visited on
//! the next frame.

use bevy_ecs::message::Message;
use raylib::prelude::Vector2;

use crate::components::coin::CoinKind;

#[derive(Message, Debug, Clone, PartialEq)]
pub enum TankEvent {
    /// Drop a coin centered on `center` (tank-local).
    SpawnCoin { center: Vector2, kind: CoinKind },
    /// Drop a pellet centered on `center` (tank-local).
    SpawnPellet { center: Vector2 },
    /// Add a fish with its top-left at `pos` (tank-local).
    SpawnFish { species: String, pos: Vector2 },
}
