//! Tank update integration tests: feeding, pursuit, wandering, hunger,
//! evolution, predators, coins, falling objects, pool ordering and clicks.

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use raylib::prelude::Vector2;

use fishbowl::components::boundary::Boundary;
use fishbowl::components::coin::{Coin, CoinKind};
use fishbowl::components::falling::Falling;
use fishbowl::components::fish::{Facing, Fish};
use fishbowl::components::lifestate::LifeState;
use fishbowl::components::pellet::Pellet;
use fishbowl::components::poolslot::PoolSlot;
use fishbowl::events::tank::TankEvent;
use fishbowl::game::insert_tank_resources;
use fishbowl::resources::animationstore::AnimationStore;
use fishbowl::resources::gameconfig::GameConfig;
use fishbowl::resources::input::{InputState, PointerState};
use fishbowl::resources::species::SpeciesRegistry;
use fishbowl::resources::tank::{PoolSequence, TankBounds, TankRules};
use fishbowl::resources::wallet::Wallet;
use fishbowl::resources::worldtime::WorldTime;
use fishbowl::systems::pointer::tank_click;
use fishbowl::systems::spawn::{spawn_coin, spawn_fish, spawn_pellet};
use fishbowl::systems::tank::{advance, tank_schedule};

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Built-in species that never start wandering on their own.
fn calm_registry() -> SpeciesRegistry {
    let species = SpeciesRegistry::builtin()
        .iter()
        .cloned()
        .map(|mut s| {
            s.wander_chance = 0.0;
            s
        })
        .collect();
    SpeciesRegistry::new(species).unwrap()
}

fn make_world() -> World {
    let mut world = World::new();
    let mut config = GameConfig::new();
    config.seed = Some(7);
    insert_tank_resources(&mut world, &config, calm_registry());
    world
}

fn spawn_fish_at(world: &mut World, species: &str, x: f32, y: f32) -> Entity {
    let species = species.to_string();
    world
        .run_system_once(
            move |mut commands: Commands,
                  registry: Res<SpeciesRegistry>,
                  animations: Res<AnimationStore>,
                  mut sequence: ResMut<PoolSequence>,
                  bounds: Res<TankBounds>| {
                spawn_fish(
                    &mut commands,
                    &registry,
                    &animations,
                    &mut sequence,
                    &bounds,
                    &species,
                    Vector2 { x, y },
                )
            },
        )
        .unwrap()
}

fn spawn_pellet_at(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .run_system_once(
            move |mut commands: Commands,
                  rules: Res<TankRules>,
                  mut sequence: ResMut<PoolSequence>,
                  bounds: Res<TankBounds>| {
                spawn_pellet(
                    &mut commands,
                    &rules,
                    &mut sequence,
                    &bounds,
                    Vector2 { x, y },
                )
            },
        )
        .unwrap()
}

fn spawn_coin_at(world: &mut World, x: f32, y: f32, kind: CoinKind) -> Entity {
    world
        .run_system_once(
            move |mut commands: Commands,
                  rules: Res<TankRules>,
                  animations: Res<AnimationStore>,
                  mut sequence: ResMut<PoolSequence>,
                  bounds: Res<TankBounds>| {
                spawn_coin(
                    &mut commands,
                    &rules,
                    &animations,
                    &mut sequence,
                    &bounds,
                    Vector2 { x, y },
                    kind,
                )
            },
        )
        .unwrap()
}

fn tick(world: &mut World, schedule: &mut Schedule, frames: usize) {
    for _ in 0..frames {
        advance(world, schedule, DT);
        assert_no_discard(world);
    }
}

fn assert_no_discard(world: &mut World) {
    let mut query = world.query::<&LifeState>();
    assert!(query.iter(world).all(|s| !s.is_discard()));
}

fn gone(world: &World, entity: Entity) -> bool {
    world.get::<LifeState>(entity).is_none()
}

fn fish(world: &World, entity: Entity) -> &Fish {
    world.get::<Fish>(entity).unwrap()
}

/// Press the pointer at a tank-local position and run the click handler.
fn click(world: &mut World, x: f32, y: f32) {
    world.resource_mut::<InputState>().pointer_select.just_pressed = true;
    world.resource_mut::<PointerState>().tank_pos = Some(Vector2 { x, y });
    world.run_system_once(tank_click).unwrap();
}

fn drain_events(world: &mut World) -> Vec<TankEvent> {
    world
        .resource_mut::<Messages<TankEvent>>()
        .drain()
        .collect()
}

#[test]
fn fish_eats_pellet_inside_capture_radius() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let guppy = spawn_fish_at(&mut world, "guppy_small", 100.0, 100.0);
    world.get_mut::<Fish>(guppy).unwrap().set_hunger(50.0);
    // Fish center is (120, 116).
    let pellet = spawn_pellet_at(&mut world, 125.0, 116.0);

    tick(&mut world, &mut schedule, 1);

    assert!(gone(&world, pellet));
    assert!(approx_eq(fish(&world, guppy).hunger(), 80.0));
    assert!(approx_eq(fish(&world, guppy).consumed, 30.0));
}

#[test]
fn feeding_clamps_hunger_but_counts_full_nutrition() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let guppy = spawn_fish_at(&mut world, "guppy_small", 100.0, 100.0);
    world.get_mut::<Fish>(guppy).unwrap().set_hunger(90.0);
    spawn_pellet_at(&mut world, 120.0, 116.0);

    tick(&mut world, &mut schedule, 1);

    assert!(approx_eq(fish(&world, guppy).hunger(), 100.0));
    assert!(approx_eq(fish(&world, guppy).consumed, 30.0));
}

#[test]
fn pursuing_fish_closes_in_without_getting_hungrier() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let guppy = spawn_fish_at(&mut world, "guppy_small", 100.0, 100.0);
    world.get_mut::<Fish>(guppy).unwrap().set_hunger(60.0);
    let pellet = spawn_pellet_at(&mut world, 300.0, 116.0);

    tick(&mut world, &mut schedule, 1);

    let boundary = world.get::<Boundary>(guppy).unwrap();
    assert!(approx_eq(boundary.pos.x, 102.0));
    assert!(approx_eq(boundary.pos.y, 100.0));
    let f = fish(&world, guppy);
    assert!(approx_eq(f.hunger(), 60.0));
    assert_eq!(f.facing, Facing::Right);
    assert!(f.is_moving());
    assert!(world.get::<LifeState>(pellet).unwrap().is_alive());
}

#[test]
fn fish_starves_at_exactly_zero_and_corpse_lingers() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let starving = spawn_fish_at(&mut world, "guppy_small", 100.0, 100.0);
    let hungry = spawn_fish_at(&mut world, "guppy_small", 300.0, 100.0);
    world.get_mut::<Fish>(starving).unwrap().set_hunger(0.05);
    world.get_mut::<Fish>(hungry).unwrap().set_hunger(0.1);

    tick(&mut world, &mut schedule, 1);

    assert_eq!(fish(&world, starving).hunger(), 0.0);
    assert!(world.get::<LifeState>(starving).unwrap().is_dead());
    assert!(world.get::<LifeState>(hungry).unwrap().is_alive());
    assert!(fish(&world, hungry).hunger() > 0.0);

    // Corpse linger is 4 seconds.
    tick(&mut world, &mut schedule, 60);
    assert!(world.get::<LifeState>(starving).unwrap().is_dead());
    tick(&mut world, &mut schedule, 200);
    assert!(gone(&world, starving));
}

#[test]
fn non_starving_species_survive_empty_belly() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let snail = spawn_fish_at(&mut world, "snail", 100.0, 400.0);
    world.get_mut::<Fish>(snail).unwrap().set_hunger(0.0);

    tick(&mut world, &mut schedule, 10);

    assert!(world.get::<LifeState>(snail).unwrap().is_alive());
    assert_eq!(fish(&world, snail).hunger(), 0.0);
}

#[test]
fn evolution_replaces_fish_with_one_successor_in_place() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let guppy = spawn_fish_at(&mut world, "guppy_small", 100.0, 100.0);
    {
        let mut f = world.get_mut::<Fish>(guppy).unwrap();
        f.consumed = 80.0;
        f.set_hunger(50.0);
    }
    spawn_pellet_at(&mut world, 120.0, 116.0);

    tick(&mut world, &mut schedule, 1);

    assert!(gone(&world, guppy));
    let mut query = world.query::<(&Fish, &Boundary, &LifeState)>();
    let all: Vec<_> = query.iter(&world).collect();
    assert_eq!(all.len(), 1);
    let (successor, boundary, state) = all[0];
    assert_eq!(successor.species, "guppy_medium");
    assert!(state.is_alive());
    assert!(approx_eq(successor.hunger(), successor.max_hunger()));
    assert!(approx_eq(boundary.pos.x, 100.0));
    assert!(approx_eq(boundary.pos.y, 100.0));
    assert!(approx_eq(boundary.width(), 56.0));
}

#[test]
fn carnivore_eats_small_guppy() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let prey = spawn_fish_at(&mut world, "guppy_small", 220.0, 216.0);
    let carnivore = spawn_fish_at(&mut world, "carnivore", 200.0, 200.0);
    world.get_mut::<Fish>(carnivore).unwrap().set_hunger(100.0);

    tick(&mut world, &mut schedule, 1);

    assert!(gone(&world, prey));
    assert!(approx_eq(fish(&world, carnivore).hunger(), 150.0));
    assert!(approx_eq(fish(&world, carnivore).consumed, 150.0));
}

#[test]
fn carnivore_ignores_grown_guppies_and_pellets() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let grown = spawn_fish_at(&mut world, "guppy_medium", 220.0, 216.0);
    let pellet = spawn_pellet_at(&mut world, 240.0, 232.0);
    let carnivore = spawn_fish_at(&mut world, "carnivore", 200.0, 200.0);

    tick(&mut world, &mut schedule, 1);

    assert!(world.get::<LifeState>(grown).unwrap().is_alive());
    // The guppy got the pellet, not the carnivore.
    assert!(gone(&world, pellet));
    assert!(approx_eq(fish(&world, carnivore).consumed, 0.0));
}

#[test]
fn snail_collects_coins_into_wallet() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let snail = spawn_fish_at(&mut world, "snail", 100.0, 400.0);
    // Snail center is (124, 416).
    let coin = spawn_coin_at(&mut world, 124.0, 416.0, CoinKind::Silver);
    let before = world.resource::<Wallet>().gold();

    tick(&mut world, &mut schedule, 1);

    assert!(gone(&world, coin));
    assert_eq!(world.resource::<Wallet>().gold(), before + 15);
    assert!(approx_eq(fish(&world, snail).hunger(), 100.0));
}

#[test]
fn pellet_sinks_and_expires_on_the_floor() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    // Tank is 520 high, pellet is 12: floor at y = 508.
    let pellet = spawn_pellet_at(&mut world, 400.0, 500.0);

    tick(&mut world, &mut schedule, 1);
    assert!(approx_eq(world.get::<Boundary>(pellet).unwrap().pos.y, 494.75));
    assert!(world.get::<LifeState>(pellet).unwrap().is_alive());

    tick(&mut world, &mut schedule, 30);
    assert!(gone(&world, pellet));
}

#[test]
fn coin_rests_on_floor_then_disappears() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    // Coin is 24 high: floor at y = 496, spawned at 488.
    let coin = spawn_coin_at(&mut world, 400.0, 500.0, CoinKind::Gold);

    tick(&mut world, &mut schedule, 20);
    assert!(world.get::<LifeState>(coin).unwrap().is_alive());
    assert!(world.get::<Falling>(coin).unwrap().landed);
    assert!(approx_eq(world.get::<Boundary>(coin).unwrap().pos.y, 496.0));

    // Rest time is 3 seconds.
    tick(&mut world, &mut schedule, 120);
    assert!(world.get::<LifeState>(coin).unwrap().is_alive());
    tick(&mut world, &mut schedule, 80);
    assert!(gone(&world, coin));
}

#[test]
fn grown_guppy_drops_a_coin_on_schedule() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    spawn_fish_at(&mut world, "guppy_medium", 100.0, 100.0);

    tick(&mut world, &mut schedule, 470);
    let mut coins = world.query::<&Coin>();
    assert_eq!(coins.iter(&world).count(), 0);

    tick(&mut world, &mut schedule, 30);
    let kinds: Vec<CoinKind> = coins.iter(&world).map(|c| c.kind).collect();
    assert_eq!(kinds, vec![CoinKind::Silver]);
}

#[test]
fn earlier_slot_eats_first_when_both_can_reach() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let first = spawn_fish_at(&mut world, "guppy_small", 160.0, 100.0);
    let second = spawn_fish_at(&mut world, "guppy_small", 200.0, 100.0);
    // Both centers are 20 away.
    spawn_pellet_at(&mut world, 200.0, 116.0);

    tick(&mut world, &mut schedule, 1);

    assert!(approx_eq(fish(&world, first).consumed, 30.0));
    assert!(approx_eq(fish(&world, second).consumed, 0.0));
    // No food left for the second fish, so it got hungrier.
    assert!(fish(&world, second).hunger() < 100.0);
}

#[test]
fn equidistant_food_ties_break_by_slot() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let guppy = spawn_fish_at(&mut world, "guppy_small", 180.0, 100.0);
    // Fish center is (200, 116).
    let older = spawn_pellet_at(&mut world, 220.0, 116.0);
    let newer = spawn_pellet_at(&mut world, 180.0, 116.0);

    tick(&mut world, &mut schedule, 1);

    assert!(gone(&world, older));
    assert!(world.get::<LifeState>(newer).unwrap().is_alive());
    assert!(approx_eq(fish(&world, guppy).consumed, 30.0));
}

#[test]
fn queued_spawns_are_appended_in_order() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    {
        let mut events = world.resource_mut::<Messages<TankEvent>>();
        events.write(TankEvent::SpawnPellet {
            center: Vector2 { x: 100.0, y: 50.0 },
        });
        events.write(TankEvent::SpawnFish {
            species: "snail".into(),
            pos: Vector2 { x: 300.0, y: 300.0 },
        });
    }

    tick(&mut world, &mut schedule, 1);

    let mut pellets = world.query_filtered::<&PoolSlot, With<Pellet>>();
    let mut fish = world.query_filtered::<&PoolSlot, With<Fish>>();
    let pellet_slot = *pellets.single(&world).unwrap();
    let fish_slot = *fish.single(&world).unwrap();
    assert!(pellet_slot < fish_slot);
}

#[test]
fn empty_tank_advances_cleanly() {
    let mut world = make_world();
    let mut schedule = tank_schedule();

    tick(&mut world, &mut schedule, 5);

    let mut pool = world.query::<&PoolSlot>();
    assert_eq!(pool.iter(&world).count(), 0);
    assert_eq!(world.resource::<WorldTime>().frame_count, 5);
    assert!(approx_eq(world.resource::<WorldTime>().elapsed, 5.0 * DT));
}

#[test]
fn pursuit_abandons_wander_target() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let guppy = spawn_fish_at(&mut world, "guppy_small", 100.0, 100.0);
    world.get_mut::<Fish>(guppy).unwrap().wander_target = Some(Vector2 { x: 400.0, y: 300.0 });
    spawn_pellet_at(&mut world, 300.0, 116.0);

    tick(&mut world, &mut schedule, 1);

    assert_eq!(fish(&world, guppy).wander_target, None);
    let boundary = world.get::<Boundary>(guppy).unwrap();
    assert!(approx_eq(boundary.pos.x, 102.0));
    assert!(approx_eq(boundary.pos.y, 100.0));
}

#[test]
fn wandering_fish_stops_within_a_body_width_of_target() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let guppy = spawn_fish_at(&mut world, "guppy_small", 100.0, 100.0);
    let target = Vector2 { x: 200.0, y: 100.0 };
    world.get_mut::<Fish>(guppy).unwrap().wander_target = Some(target);

    // Wander speed is 1.0 per frame.
    tick(&mut world, &mut schedule, 1);
    let boundary = world.get::<Boundary>(guppy).unwrap();
    assert!(approx_eq(boundary.pos.x, 101.0));
    assert!(approx_eq(boundary.pos.y, 100.0));
    assert!(fish(&world, guppy).is_moving());
    assert_eq!(fish(&world, guppy).wander_target, Some(target));

    // Width is 40: still 40 away after frame 60, 39 after frame 61.
    tick(&mut world, &mut schedule, 60);
    assert!(approx_eq(world.get::<Boundary>(guppy).unwrap().pos.x, 161.0));
    assert_eq!(fish(&world, guppy).wander_target, Some(target));

    tick(&mut world, &mut schedule, 1);
    let f = fish(&world, guppy);
    assert_eq!(f.wander_target, None);
    assert!(!f.is_moving());
    assert!(approx_eq(world.get::<Boundary>(guppy).unwrap().pos.x, 161.0));
}

#[test]
fn clicking_a_coin_collects_it() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let coin = spawn_coin_at(&mut world, 400.0, 200.0, CoinKind::Silver);

    click(&mut world, 405.0, 195.0);

    assert_eq!(world.resource::<Wallet>().gold(), 215);
    assert!(world.get::<LifeState>(coin).unwrap().is_discard());
    assert!(drain_events(&mut world).is_empty());
    tick(&mut world, &mut schedule, 1);
    assert!(gone(&world, coin));
}

#[test]
fn click_collects_only_the_topmost_coin() {
    let mut world = make_world();
    let under = spawn_coin_at(&mut world, 400.0, 200.0, CoinKind::Silver);
    let over = spawn_coin_at(&mut world, 400.0, 200.0, CoinKind::Gold);

    click(&mut world, 400.0, 200.0);

    assert_eq!(world.resource::<Wallet>().gold(), 235);
    assert!(world.get::<LifeState>(over).unwrap().is_discard());
    assert!(world.get::<LifeState>(under).unwrap().is_alive());
}

#[test]
fn clicking_a_pellet_removes_it_without_refund() {
    let mut world = make_world();
    let mut schedule = tank_schedule();
    let pellet = spawn_pellet_at(&mut world, 400.0, 200.0);

    click(&mut world, 402.0, 202.0);

    assert_eq!(world.resource::<Wallet>().gold(), 200);
    assert!(world.get::<LifeState>(pellet).unwrap().is_discard());
    assert!(drain_events(&mut world).is_empty());
    tick(&mut world, &mut schedule, 1);
    assert!(gone(&world, pellet));
}

#[test]
fn clicking_open_water_buys_a_pellet() {
    let mut world = make_world();
    let mut schedule = tank_schedule();

    click(&mut world, 300.0, 150.0);

    assert_eq!(world.resource::<Wallet>().gold(), 195);
    tick(&mut world, &mut schedule, 1);
    let mut pellets = world.query_filtered::<&Boundary, With<Pellet>>();
    let boundary = pellets.single(&world).unwrap();
    assert!(approx_eq(boundary.center().x, 300.0));
    // Spawned after this frame's falling step.
    assert!(approx_eq(boundary.center().y, 150.0));
}

#[test]
fn pellet_purchase_refused_when_wallet_is_short() {
    let mut world = make_world();
    world.resource_mut::<Wallet>().reset(3);

    click(&mut world, 300.0, 150.0);

    assert_eq!(world.resource::<Wallet>().gold(), 3);
    assert!(drain_events(&mut world).is_empty());
}

#[test]
fn pellet_purchase_refused_at_pellet_limit() {
    let mut world = make_world();
    for i in 0..6 {
        spawn_pellet_at(&mut world, 50.0 + 40.0 * i as f32, 400.0);
    }

    click(&mut world, 600.0, 150.0);

    assert_eq!(world.resource::<Wallet>().gold(), 200);
    assert!(drain_events(&mut world).is_empty());
}

#[test]
fn pointer_without_press_does_nothing() {
    let mut world = make_world();
    let coin = spawn_coin_at(&mut world, 400.0, 200.0, CoinKind::Silver);
    world.resource_mut::<PointerState>().tank_pos = Some(Vector2 { x: 400.0, y: 200.0 });

    world.run_system_once(tank_click).unwrap();

    assert_eq!(world.resource::<Wallet>().gold(), 200);
    assert!(world.get::<LifeState>(coin).unwrap().is_alive());
}
