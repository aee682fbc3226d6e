//! Lifecycle state of a tank occupant.
//!
//! Transitions only move forward: `Alive -> Dead -> Discard`, or
//! `Alive -> Discard` directly. Dead entities are still drawn (a corpse or an
//! expired pellet); Discard entities are never drawn and are removed by the
//! next pool sweep.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifeState {
    #[default]
    Alive,
    Dead,
    Discard,
}

impl LifeState {
    pub fn is_alive(&self) -> bool {
        matches!(self, LifeState::Alive)
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, LifeState::Dead)
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, LifeState::Discard)
    }

    /// `Alive -> Dead`. Returns false (and changes nothing) from any other state.
    pub fn kill(&mut self) -> bool {
        if self.is_alive() {
            *self = LifeState::Dead;
            true
        } else {
            false
        }
    }

    /// Mark for removal. Valid from every state.
    pub fn discard(&mut self) {
        *self = LifeState::Discard;
    }

    /// Whether the render pass should draw this entity.
    pub fn is_visible(&self) -> bool {
        !self.is_discard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_alive() {
        assert!(LifeState::default().is_alive());
    }

    #[test]
    fn kill_only_from_alive() {
        let mut s = LifeState::Alive;
        assert!(s.kill());
        assert!(s.is_dead());

        assert!(!s.kill());
        assert!(s.is_dead());

        let mut s = LifeState::Discard;
        assert!(!s.kill());
        assert!(s.is_discard());
    }

    #[test]
    fn discard_is_terminal() {
        let mut s = LifeState::Dead;
        s.discard();
        assert!(s.is_discard());
        assert!(!s.kill());
        assert!(!s.is_visible());
    }
}
