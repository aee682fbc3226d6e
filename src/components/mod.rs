//! ECS components for tank occupants and UI.
//!
//! Submodules overview:
//! - [`animation`] – frame cursors and the per-fish pose animator
//! - [`boundary`] – top-left box of every pool member, plus distance helpers
//! - [`button`] – clickable menu and shop buttons
//! - [`coin`] – coin kinds and their gold value
//! - [`coindropper`] – periodic coin drops for economic fish
//! - [`decay`] – linger time of dead entities before removal
//! - [`falling`] – constant-speed sinking for pellets and coins
//! - [`fish`] – hunger, facing and wander state of a fish
//! - [`lifestate`] – Alive / Dead / Discard lifecycle
//! - [`pellet`] – food pellets
//! - [`poolslot`] – insertion order of pool members
//! - [`sprite`] – sprite-sheet frame to draw

pub mod animation;
pub mod boundary;
pub mod button;
pub mod coin;
pub mod coindropper;
pub mod decay;
pub mod falling;
pub mod fish;
pub mod lifestate;
pub mod pellet;
pub mod poolslot;
pub mod sprite;
