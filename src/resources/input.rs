//! Per-frame input resources.
//!
//! [`InputState`] holds the few buttons the game reacts to and
//! [`PointerState`] the mouse position in each coordinate space. Both are
//! written once per frame by [`crate::systems::input::update_input_state`];
//! everything downstream reads them and never touches raylib.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Physical source of a [`BoolState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputBinding {
    Key(KeyboardKey),
    Mouse(MouseButton),
}

/// Boolean button state with edge detection.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub binding: InputBinding,
}

impl BoolState {
    pub fn new(binding: InputBinding) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            binding,
        }
    }

    /// Feed the current hardware level and derive the edges.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Left mouse button: collect, feed, press buttons.
    pub pointer_select: BoolState,
    /// Escape: back to the main menu.
    pub action_back: BoolState,
    /// F11: toggle the debug overlay.
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_select: BoolState::new(InputBinding::Mouse(MouseButton::MOUSE_BUTTON_LEFT)),
            action_back: BoolState::new(InputBinding::Key(KeyboardKey::KEY_ESCAPE)),
            mode_debug: BoolState::new(InputBinding::Key(KeyboardKey::KEY_F11)),
        }
    }
}

/// Pointer position in window, render-target and tank-local space.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PointerState {
    pub window_pos: Vector2,
    pub game_pos: Vector2,
    /// `None` when the pointer is outside the tank rectangle.
    pub tank_pos: Option<Vector2>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            window_pos: Vector2::zero(),
            game_pos: Vector2::zero(),
            tank_pos: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_fire_for_one_frame() {
        let mut b = BoolState::new(InputBinding::Key(KeyboardKey::KEY_F11));
        b.update(true);
        assert!(b.active && b.just_pressed && !b.just_released);
        b.update(true);
        assert!(b.active && !b.just_pressed);
        b.update(false);
        assert!(!b.active && b.just_released);
        b.update(false);
        assert!(!b.just_released);
    }
}
