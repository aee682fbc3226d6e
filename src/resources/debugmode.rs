//! Debug toggle resource.
//!
//! The presence of this resource turns on the tank debug overlay
//! (boundaries, wander targets, capture radii). Remove it to hide it.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
