//! Clicks inside the tank.
//!
//! A click collects the topmost coin under the pointer, or failing that the
//! topmost pellet (removed, no refund). Over open water it drops a pellet,
//! provided the wallet pays `pellet_cost` and the tank is below
//! `max_pellets` alive pellets.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boundary::Boundary;
use crate::components::coin::Coin;
use crate::components::lifestate::LifeState;
use crate::components::pellet::Pellet;
use crate::components::poolslot::PoolSlot;
use crate::events::tank::TankEvent;
use crate::resources::input::{InputState, PointerState};
use crate::resources::tank::TankRules;
use crate::resources::wallet::Wallet;

pub fn tank_click(
    input: Res<InputState>,
    pointer: Res<PointerState>,
    rules: Res<TankRules>,
    mut wallet: ResMut<Wallet>,
    mut coins: Query<(&PoolSlot, &Boundary, &mut LifeState, &Coin)>,
    mut pellets: Query<(&PoolSlot, &Boundary, &mut LifeState), (With<Pellet>, Without<Coin>)>,
    mut tank_events: MessageWriter<TankEvent>,
) {
    if !input.pointer_select.just_pressed {
        return;
    }
    let Some(pos) = pointer.tank_pos else {
        return;
    };

    // Drawn last means on top.
    let topmost = coins
        .iter_mut()
        .filter(|(_, boundary, state, _)| state.is_alive() && boundary.contains_point(pos))
        .max_by_key(|(slot, ..)| **slot);
    if let Some((_, _, mut state, coin)) = topmost {
        state.discard();
        wallet.credit(coin.value());
        debug!("Collected {:?} coin (+{})", coin.kind, coin.value());
        return;
    }

    let topmost = pellets
        .iter_mut()
        .filter(|(_, boundary, state)| state.is_alive() && boundary.contains_point(pos))
        .max_by_key(|(slot, ..)| **slot);
    if let Some((slot, _, mut state)) = topmost {
        state.discard();
        debug!("Picked up pellet {:?}", slot);
        return;
    }

    let alive_pellets = pellets.iter().filter(|(_, _, s)| s.is_alive()).count();
    if alive_pellets >= rules.max_pellets as usize {
        debug!("Pellet limit reached ({})", rules.max_pellets);
        return;
    }
    if wallet.try_spend(rules.pellet_cost) {
        tank_events.write(TankEvent::SpawnPellet { center: pos });
    }
}
