//! Pool maintenance.
//!
//! Only [`LifeState::Discard`] members are ever removed. The sweep runs at the
//! start and at the end of every tank update, so no Discard entity survives an
//! `advance`.

use bevy_ecs::prelude::*;

use crate::components::lifestate::LifeState;
use crate::components::poolslot::PoolSlot;

pub fn sweep_discarded(
    mut commands: Commands,
    query: Query<(Entity, &LifeState), With<PoolSlot>>,
) {
    for (entity, state) in query.iter() {
        if state.is_discard() {
            commands.entity(entity).try_despawn();
        }
    }
}
