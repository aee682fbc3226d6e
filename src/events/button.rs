//! Button press event and the observer that carries out its action.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::button::ButtonAction;
use crate::events::tank::TankEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::species::SpeciesRegistry;
use crate::resources::tank::{TankBounds, TankRng};
use crate::resources::wallet::Wallet;

#[derive(Event, Debug, Clone)]
pub struct ButtonPressedEvent {
    pub button: Entity,
    pub action: ButtonAction,
}

/// Executes the action of a pressed button.
///
/// - [`ButtonAction::StartGame`] / [`ButtonAction::OpenMenu`] request a state change
/// - [`ButtonAction::QuitGame`] moves to the quitting state
/// - [`ButtonAction::BuyFish`] spends gold and queues the fish in the upper
///   half of the tank; refused silently when the wallet is short
pub fn button_pressed_observer(
    trigger: On<ButtonPressedEvent>,
    mut next_game_state: ResMut<NextGameState>,
    mut wallet: ResMut<Wallet>,
    registry: Res<SpeciesRegistry>,
    bounds: Res<TankBounds>,
    mut rng: ResMut<TankRng>,
    mut tank_events: MessageWriter<TankEvent>,
) {
    match &trigger.event().action {
        ButtonAction::StartGame => next_game_state.set(GameStates::Tank),
        ButtonAction::OpenMenu => next_game_state.set(GameStates::MainMenu),
        ButtonAction::QuitGame => next_game_state.set(GameStates::Quitting),
        ButtonAction::BuyFish(name) => {
            let Some((species, price)) = registry.get(name).and_then(|s| s.price.map(|p| (s, p)))
            else {
                debug!("'{}' is not for sale", name);
                return;
            };
            if !wallet.try_spend(price) {
                debug!("Cannot afford {} ({} < {})", name, wallet.gold(), price);
                return;
            }
            let max = bounds.max_position(Vector2 {
                x: species.width,
                y: species.height,
            });
            let pos = Vector2 {
                x: rng.range(0.0, max.x),
                y: rng.range(0.0, max.y * 0.5),
            };
            info!("Bought {} for {} gold", name, price);
            tank_events.write(TankEvent::SpawnFish {
                species: name.clone(),
                pos,
            });
        }
    }
}
