//! Fish behavior.
//!
//! [`fish_behavior`] runs once per tank update and visits every alive fish in
//! pool order. For each fish, in priority order:
//!
//! 1. tick the coin dropper (never short-circuits);
//! 2. find the nearest alive food matching the diet, ties broken by slot;
//! 3. food found: eat it when closer than the capture radius, otherwise swim
//!    towards it. The update ends here either way;
//! 4. no food: hunger decays, starving species die at zero;
//! 5. wander towards the current target, or maybe pick a new one.
//!
//! Consumption is visible to fish visited later in the same pass: a pellet
//! eaten by the first fish is no longer food for the second.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::boundary::{Boundary, distance, step_towards};
use crate::components::coin::Coin;
use crate::components::coindropper::CoinDropper;
use crate::components::fish::Fish;
use crate::components::lifestate::LifeState;
use crate::components::pellet::Pellet;
use crate::components::poolslot::PoolSlot;
use crate::events::tank::TankEvent;
use crate::resources::species::{Diet, SpeciesConfig, SpeciesRegistry};
use crate::resources::tank::{TankBounds, TankRng};
use crate::resources::wallet::Wallet;
use crate::resources::worldtime::WorldTime;

/// Every pool member as seen by the behavior pass.
pub type PoolQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static PoolSlot,
        &'static mut Boundary,
        &'static mut LifeState,
        Option<&'static mut Fish>,
        Option<&'static Pellet>,
        Option<&'static Coin>,
        Option<&'static mut CoinDropper>,
    ),
>;

/// Nearest food candidate.
#[derive(Debug, Clone, Copy)]
struct Target {
    entity: Entity,
    slot: PoolSlot,
    center: Vector2,
    distance: f32,
}

/// What a fish gains from eating something.
enum Meal {
    Nutrition(f32),
    Gold(i64),
}

pub fn fish_behavior(
    mut pool: PoolQuery,
    registry: Res<SpeciesRegistry>,
    bounds: Res<TankBounds>,
    world_time: Res<WorldTime>,
    mut rng: ResMut<TankRng>,
    mut wallet: ResMut<Wallet>,
    mut tank_events: MessageWriter<TankEvent>,
) {
    let mut order: Vec<(PoolSlot, Entity)> = pool
        .iter()
        .filter(|(_, _, _, state, fish, ..)| state.is_alive() && fish.is_some())
        .map(|(entity, slot, ..)| (*slot, entity))
        .collect();
    order.sort_unstable_by_key(|(slot, _)| *slot);

    for (_, entity) in order {
        // Re-check: an earlier fish may have eaten this one.
        let Ok((_, _, boundary, state, Some(fish), _, _, dropper)) = pool.get_mut(entity) else {
            continue;
        };
        if !state.is_alive() {
            continue;
        }
        let Some(species) = registry.get(&fish.species) else {
            warn!("Fish {:?} has unknown species '{}'", entity, fish.species);
            continue;
        };
        let center = boundary.center();

        if let Some(mut dropper) = dropper
            && dropper.tick(world_time.delta)
        {
            tank_events.write(TankEvent::SpawnCoin {
                center,
                kind: dropper.coin,
            });
        }

        match nearest_food(&pool, entity, center, species) {
            Some(target) if target.distance < species.capture_radius => {
                let meal = consume(&mut pool, target.entity, species);
                if let Meal::Gold(value) = meal {
                    wallet.credit(value);
                }
                eat(&mut pool, entity, meal, species, &mut tank_events);
            }
            Some(target) => {
                pursue(&mut pool, entity, target.center, species, &bounds);
            }
            None => {
                if starve(&mut pool, entity, species) {
                    wander(&mut pool, entity, species, &bounds, &mut rng);
                }
            }
        }
    }
}

/// Does `hunter`'s diet accept this pool member as food?
fn is_food(hunter: &SpeciesConfig, fish: Option<&Fish>, pellet: bool, coin: bool) -> bool {
    match &hunter.diet {
        Diet::Pellets => pellet,
        Diet::Coins => coin,
        Diet::Prey { .. } => fish.is_some_and(|f| hunter.hunts(&f.species)),
    }
}

fn nearest_food(
    pool: &PoolQuery,
    hunter: Entity,
    center: Vector2,
    species: &SpeciesConfig,
) -> Option<Target> {
    let mut best: Option<Target> = None;
    for (entity, slot, boundary, state, fish, pellet, coin, _) in pool.iter() {
        if entity == hunter || !state.is_alive() {
            continue;
        }
        if !is_food(species, fish, pellet.is_some(), coin.is_some()) {
            continue;
        }
        let candidate = Target {
            entity,
            slot: *slot,
            center: boundary.center(),
            distance: distance(center, boundary.center()),
        };
        let closer = match &best {
            None => true,
            Some(b) => {
                candidate.distance < b.distance
                    || (candidate.distance == b.distance && candidate.slot < b.slot)
            }
        };
        if closer {
            best = Some(candidate);
        }
    }
    best
}

/// Mark the food as Discard and report what it was worth.
fn consume(pool: &mut PoolQuery, food: Entity, hunter: &SpeciesConfig) -> Meal {
    let Ok((_, _, _, mut state, _, pellet, coin, _)) = pool.get_mut(food) else {
        return Meal::Nutrition(0.0);
    };
    state.discard();
    if let Some(coin) = coin {
        Meal::Gold(coin.value())
    } else if let Some(pellet) = pellet {
        Meal::Nutrition(pellet.nutrition)
    } else {
        // Prey restores the whole belly.
        Meal::Nutrition(hunter.max_hunger)
    }
}

fn eat(
    pool: &mut PoolQuery,
    entity: Entity,
    meal: Meal,
    species: &SpeciesConfig,
    tank_events: &mut MessageWriter<TankEvent>,
) {
    let Ok((_, _, boundary, mut state, Some(mut fish), ..)) = pool.get_mut(entity) else {
        return;
    };
    if let Meal::Nutrition(nutrition) = meal {
        fish.feed(nutrition);
    }
    fish.wander_target = None;
    fish.stop();

    if let Some(evolution) = &species.evolution
        && fish.consumed >= evolution.threshold
    {
        debug!(
            "{} evolves into {} after eating {:.1}",
            species.name, evolution.into, fish.consumed
        );
        state.discard();
        tank_events.write(TankEvent::SpawnFish {
            species: evolution.into.clone(),
            pos: boundary.pos,
        });
    }
}

fn pursue(
    pool: &mut PoolQuery,
    entity: Entity,
    food_center: Vector2,
    species: &SpeciesConfig,
    bounds: &TankBounds,
) {
    let Ok((_, _, mut boundary, _, Some(mut fish), ..)) = pool.get_mut(entity) else {
        return;
    };
    fish.wander_target = None;
    let step = step_towards(boundary.center(), food_center, species.speed);
    move_by(&mut boundary, &mut fish, step, bounds);
}

/// Apply hunger decay. Returns false when the fish died.
fn starve(pool: &mut PoolQuery, entity: Entity, species: &SpeciesConfig) -> bool {
    let Ok((_, _, _, mut state, Some(mut fish), ..)) = pool.get_mut(entity) else {
        return false;
    };
    fish.starve(species.hunger_decay);
    if species.starves && fish.is_starved() {
        debug!("{} {:?} starved", species.name, entity);
        state.kill();
        fish.stop();
        return false;
    }
    true
}

fn wander(
    pool: &mut PoolQuery,
    entity: Entity,
    species: &SpeciesConfig,
    bounds: &TankBounds,
    rng: &mut TankRng,
) {
    let Ok((_, _, mut boundary, _, Some(mut fish), ..)) = pool.get_mut(entity) else {
        return;
    };
    match fish.wander_target {
        Some(target) if distance(boundary.pos, target) < boundary.width() => {
            fish.wander_target = None;
            fish.stop();
        }
        Some(target) => {
            let step = step_towards(boundary.pos, target, species.wander_speed);
            move_by(&mut boundary, &mut fish, step, bounds);
        }
        None => {
            fish.stop();
            if rng.f32() < species.wander_chance {
                fish.wander_target = Some(pick_wander_target(
                    &boundary,
                    species.wander_radius,
                    bounds,
                    rng,
                ));
            }
        }
    }
}

fn move_by(boundary: &mut Boundary, fish: &mut Fish, step: Vector2, bounds: &TankBounds) {
    let before = boundary.pos;
    boundary.translate(step);
    boundary.clamp_into(bounds.width, bounds.height);
    fish.set_velocity(Vector2 {
        x: boundary.pos.x - before.x,
        y: boundary.pos.y - before.y,
    });
}

/// Random top-left destination within `radius` of the current position.
///
/// Uniform over the disk. A fish touching a wall never picks a target further
/// into that wall: the offset is mirrored back into the tank. The result is
/// clamped so the whole fish stays inside.
pub fn pick_wander_target(
    boundary: &Boundary,
    radius: f32,
    bounds: &TankBounds,
    rng: &mut TankRng,
) -> Vector2 {
    let angle = rng.f32() * std::f32::consts::TAU;
    let r = radius * rng.f32().sqrt();
    let mut dx = r * angle.cos();
    let mut dy = r * angle.sin();

    let max = bounds.max_position(boundary.size);
    let pos = boundary.pos;
    if (pos.x <= 0.0 && dx < 0.0) || (pos.x >= max.x && dx > 0.0) {
        dx = -dx;
    }
    if (pos.y <= 0.0 && dy < 0.0) || (pos.y >= max.y && dy > 0.0) {
        dy = -dy;
    }

    Vector2 {
        x: (pos.x + dx).clamp(0.0, max.x),
        y: (pos.y + dy).clamp(0.0, max.y),
    }
}
