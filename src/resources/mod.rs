//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – strip definitions for fish and coin animations
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed window, render and tank settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame button state and pointer position
//! - `rendertarget` – fixed-resolution framebuffer (non-send)
//! - `species` – the data-driven species table
//! - `systemsstore` – registry of state enter hooks by name
//! - `tank` – tank geometry, rules, pool ordering and RNG
//! - `texturestore` – loaded textures keyed by string IDs
//! - `wallet` – player gold
//! - `windowsize` – OS window size and letterbox math
//! - `worldsignals` – global flags such as `quit_game`
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rendertarget;
pub mod species;
pub mod systemsstore;
pub mod tank;
pub mod texturestore;
pub mod wallet;
pub mod windowsize;
pub mod worldsignals;
pub mod worldtime;
