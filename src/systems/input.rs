//! Input polling.
//!
//! [`update_input_state`] is the only place that reads raylib input. It
//! refreshes [`InputState`] and [`PointerState`], toggles the debug overlay on
//! F11 and sends the player back to the main menu on Escape.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::{BoolState, InputBinding, InputState, PointerState};
use crate::resources::tank::TankBounds;
use crate::resources::windowsize::WindowSize;

pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut pointer: ResMut<PointerState>,
    rl: NonSend<raylib::RaylibHandle>,
    window_size: Res<WindowSize>,
    config: Res<GameConfig>,
    bounds: Res<TankBounds>,
    game_state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    let is_down = |state: &BoolState| match state.binding {
        InputBinding::Key(key) => rl.is_key_down(key),
        InputBinding::Mouse(button) => rl.is_mouse_button_down(button),
    };
    let select = is_down(&input.pointer_select);
    let back = is_down(&input.action_back);
    let debug = is_down(&input.mode_debug);
    input.pointer_select.update(select);
    input.action_back.update(back);
    input.mode_debug.update(debug);

    pointer.window_pos = rl.get_mouse_position();
    pointer.game_pos = window_size.window_to_game_pos(
        pointer.window_pos,
        config.render_width,
        config.render_height,
    );
    pointer.tank_pos = bounds.to_local(pointer.game_pos);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.action_back.just_pressed && matches!(game_state.get(), GameStates::Tank) {
        next_state.set(GameStates::MainMenu);
    }
}
