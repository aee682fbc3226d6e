//! Button hover, affordability and click handling.

use bevy_ecs::prelude::*;

use crate::components::button::Button;
use crate::events::button::ButtonPressedEvent;
use crate::resources::input::{InputState, PointerState};
use crate::resources::wallet::Wallet;

/// Refresh hover/enabled flags and trigger [`ButtonPressedEvent`] for a
/// click on an enabled button. Priced buttons are disabled while the wallet
/// cannot pay.
pub fn update_buttons(
    mut query: Query<(Entity, &mut Button)>,
    input: Res<InputState>,
    pointer: Res<PointerState>,
    wallet: Res<Wallet>,
    mut commands: Commands,
) {
    for (entity, mut button) in query.iter_mut() {
        button.hovered = button.contains(pointer.game_pos);
        button.enabled = button.price.is_none_or(|price| wallet.can_afford(price));
        if button.hovered && button.enabled && input.pointer_select.just_pressed {
            commands.trigger(ButtonPressedEvent {
                button: entity,
                action: button.action.clone(),
            });
        }
    }
}
