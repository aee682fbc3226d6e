//! Pool spawning.
//!
//! [`apply_tank_events`] drains the queued [`TankEvent`]s once per tank update
//! and appends the requested entities. Every new member gets the next
//! [`PoolSlot`], so spawn order is the order events were written in.
//!
//! The `spawn_*` helpers build the component bundles and are also used by
//! tests to set up a tank directly.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::animation::ClipAnimation;
use crate::components::boundary::Boundary;
use crate::components::coin::{Coin, CoinKind};
use crate::components::coindropper::CoinDropper;
use crate::components::decay::Decay;
use crate::components::falling::Falling;
use crate::components::fish::Fish;
use crate::components::lifestate::LifeState;
use crate::components::pellet::Pellet;
use crate::components::sprite::Sprite;
use crate::events::tank::TankEvent;
use crate::resources::animationstore::{AnimationStore, COIN_FRAME_SIZE, COIN_TEX_KEY};
use crate::resources::species::SpeciesRegistry;
use crate::resources::tank::{PoolSequence, TankBounds, TankRules};

pub const PELLET_TEX_KEY: &str = "pellet";

/// Spawn a full-bellied fish of `species` with its top-left at `pos`.
///
/// # Panics
///
/// If `species` is not in the registry. Callers only pass names taken from
/// the registry itself.
pub fn spawn_fish(
    commands: &mut Commands,
    registry: &SpeciesRegistry,
    animations: &AnimationStore,
    sequence: &mut PoolSequence,
    bounds: &TankBounds,
    species: &str,
    pos: Vector2,
) -> Entity {
    let config = registry
        .get(species)
        .unwrap_or_else(|| panic!("spawn_fish: unknown species '{}'", species));

    let mut boundary = Boundary::new(pos.x, pos.y, config.width, config.height);
    boundary.clamp_into(bounds.width, bounds.height);

    let mut entity = commands.spawn((
        sequence.next_slot(),
        boundary,
        LifeState::Alive,
        Fish::new(species, config.max_hunger),
        Decay::new(config.corpse_linger),
        Sprite::new(
            config.art.tex_key.clone(),
            config.art.frame_width as f32,
            config.art.frame_height as f32,
        ),
    ));
    if let Some(drop) = config.coin_drop {
        entity.insert(CoinDropper::new(drop.interval, drop.coin));
    }
    match animations.fish_animator(species) {
        Some(animator) => {
            entity.insert(animator);
        }
        None => warn!("No animations registered for species '{}'", species),
    }
    entity.id()
}

/// Spawn a pellet centered on `center`.
pub fn spawn_pellet(
    commands: &mut Commands,
    rules: &TankRules,
    sequence: &mut PoolSequence,
    bounds: &TankBounds,
    center: Vector2,
) -> Entity {
    let mut boundary = Boundary::centered_at(center, rules.pellet_size, rules.pellet_size);
    boundary.clamp_into(bounds.width, bounds.height);
    commands
        .spawn((
            sequence.next_slot(),
            boundary,
            LifeState::Alive,
            Pellet::new(rules.pellet_nutrition),
            Falling::new(rules.pellet_fall_speed),
            Decay::new(0.0),
            Sprite::new(PELLET_TEX_KEY, rules.pellet_size, rules.pellet_size),
        ))
        .id()
}

/// Spawn a coin centered on `center`.
pub fn spawn_coin(
    commands: &mut Commands,
    rules: &TankRules,
    animations: &AnimationStore,
    sequence: &mut PoolSequence,
    bounds: &TankBounds,
    center: Vector2,
    kind: CoinKind,
) -> Entity {
    let mut boundary = Boundary::centered_at(center, rules.coin_size, rules.coin_size);
    boundary.clamp_into(bounds.width, bounds.height);
    let mut entity = commands.spawn((
        sequence.next_slot(),
        boundary,
        LifeState::Alive,
        Coin::new(kind, rules.coin_rest_time),
        Falling::new(rules.coin_fall_speed),
        Sprite::new(
            COIN_TEX_KEY,
            COIN_FRAME_SIZE as f32,
            COIN_FRAME_SIZE as f32,
        ),
    ));
    if let Some(anim) = animations.instantiate(kind.animation_key()) {
        entity.insert(ClipAnimation(anim));
    }
    entity.id()
}

/// Append every queued spawn to the pool.
pub fn apply_tank_events(
    mut commands: Commands,
    mut events: ResMut<Messages<TankEvent>>,
    registry: Res<SpeciesRegistry>,
    animations: Res<AnimationStore>,
    rules: Res<TankRules>,
    bounds: Res<TankBounds>,
    mut sequence: ResMut<PoolSequence>,
) {
    for event in events.drain() {
        match event {
            TankEvent::SpawnCoin { center, kind } => {
                spawn_coin(
                    &mut commands,
                    &rules,
                    &animations,
                    &mut sequence,
                    &bounds,
                    center,
                    kind,
                );
            }
            TankEvent::SpawnPellet { center } => {
                spawn_pellet(&mut commands, &rules, &mut sequence, &bounds, center);
            }
            TankEvent::SpawnFish { species, pos } => {
                debug!("Spawning {} at ({:.1}, {:.1})", species, pos.x, pos.y);
                spawn_fish(
                    &mut commands,
                    &registry,
                    &animations,
                    &mut sequence,
                    &bounds,
                    &species,
                    pos,
                );
            }
        }
    }
}
