//! Game state transition event and observer.
//!
//! Systems request a change by updating [`NextGameState`]. Emitting a
//! [`GameStateChangedEvent`] triggers [`observe_gamestate_change_event`],
//! which applies the transition to [`GameState`] and runs the enter hook
//! registered in [`SystemsStore`] for the new state.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], resets the request
///   and runs the enter hook of the new state.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            let old_state = game_state.get().clone();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_exit(&old_state);
            on_state_enter(&new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Name of the enter hook for `state` in the [`SystemsStore`].
pub fn enter_hook_name(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Setup => Some("setup"),
        GameStates::MainMenu => Some("enter_menu"),
        GameStates::Tank => Some("enter_tank"),
        GameStates::Quitting => Some("quit_game"),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(hook) = enter_hook_name(state) else {
        debug!("Entered {:?} state", state);
        return;
    };
    let system_id = systems_store
        .get(hook)
        .unwrap_or_else(|| panic!("{} system not found in SystemsStore", hook));
    commands.run_system(*system_id);
}

fn on_state_exit(state: &GameStates) {
    debug!("Exited {:?} state", state);
}
