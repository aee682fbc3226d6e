//! Event types and observers.
//!
//! Submodules:
//! - [`button`] – shop and menu button presses
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`tank`] – deferred spawn requests for the tank pool
pub mod button;
pub mod gamestate;
pub mod switchdebug;
pub mod tank;
