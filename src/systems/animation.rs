//! Animation systems.
//!
//! - [`fish_animation`] picks a pose from lifecycle state, hunger tier and
//!   movement, advances its cursor and writes the frame into the [`Sprite`].
//! - [`clip_animation`] does the same for single-strip entities (coins).
//!
//! Both are driven by total elapsed time from [`WorldTime`], independent of
//! movement speed.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity cursor
//! - [`crate::resources::animationstore::AnimationStore`] – strip definitions

use bevy_ecs::prelude::*;

use crate::components::animation::{ClipAnimation, FishAnimator, select_pose};
use crate::components::fish::{Facing, Fish};
use crate::components::lifestate::LifeState;
use crate::components::sprite::Sprite;
use crate::resources::species::SpeciesRegistry;
use crate::resources::worldtime::WorldTime;

pub fn fish_animation(
    mut query: Query<(&Fish, &LifeState, &mut FishAnimator, &mut Sprite)>,
    registry: Res<SpeciesRegistry>,
    time: Res<WorldTime>,
) {
    for (fish, state, mut animator, mut sprite) in query.iter_mut() {
        if !state.is_visible() {
            continue;
        }
        let Some(species) = registry.get(&fish.species) else {
            continue;
        };
        let tier = fish.tier(species.warning_fraction, species.danger_fraction);
        let pose = select_pose(*state, tier, fish.is_moving());
        let (tex_key, offset) = animator.play(pose, time.elapsed);
        if sprite.tex_key != tex_key {
            sprite.tex_key = tex_key.to_string();
        }
        sprite.offset = offset;
        sprite.flip_h = fish.facing == Facing::Left;
    }
}

pub fn clip_animation(
    mut query: Query<(&LifeState, &mut ClipAnimation, &mut Sprite)>,
    time: Res<WorldTime>,
) {
    for (state, mut clip, mut sprite) in query.iter_mut() {
        if !state.is_visible() {
            continue;
        }
        sprite.offset = clip.0.update(time.elapsed);
    }
}
