//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – pick fish poses and advance sprite cursors
//! - [`buttons`] – hover, affordability and presses of shop/menu buttons
//! - [`decay`] – count down corpses and spent pellets
//! - [`falling`] – sink pellets and coins to the tank floor
//! - [`fish`] – per-fish feeding, pursuit, hunger and wandering
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`pointer`] – clicks inside the tank: collect coins, drop pellets
//! - [`pool`] – remove discarded pool members
//! - [`render`] – draw the scene, HUD and debug overlay using Raylib
//! - [`spawn`] – build pool members and apply queued spawns
//! - [`tank`] – the ordered tank update
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod buttons;
pub mod decay;
pub mod falling;
pub mod fish;
pub mod gamestate;
pub mod input;
pub mod pointer;
pub mod pool;
pub mod render;
pub mod spawn;
pub mod tank;
pub mod time;
