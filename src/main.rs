//! Fishbowl main entry point.
//!
//! A small aquarium game written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Feed pellets to guppies, let them grow, collect the coins they drop and
//! spend them on more fish.
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini` and the species table
//! 2. Initialize the raylib window, ECS world and resources
//! 3. Register observers and state enter hooks, enter the Setup state
//! 4. Every frame:
//!    - Poll input, apply state transitions, handle buttons and tank clicks
//!    - Advance the tank while playing
//!    - Animate and render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use fishbowl::events::button::button_pressed_observer;
use fishbowl::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use fishbowl::events::switchdebug::switch_debug_observer;
use fishbowl::game;
use fishbowl::resources::gameconfig::GameConfig;
use fishbowl::resources::gamestate::{GameState, GameStates, NextGameState};
use fishbowl::resources::rendertarget::RenderTarget;
use fishbowl::resources::species::SpeciesRegistry;
use fishbowl::resources::systemsstore::SystemsStore;
use fishbowl::resources::windowsize::WindowSize;
use fishbowl::resources::worldsignals::WorldSignals;
use fishbowl::resources::worldtime::WorldTime;
use fishbowl::systems::animation::{clip_animation, fish_animation};
use fishbowl::systems::buttons::update_buttons;
use fishbowl::systems::gamestate::{check_pending_state, state_is_tank};
use fishbowl::systems::input::update_input_state;
use fishbowl::systems::pointer::tank_click;
use fishbowl::systems::render::render_system;
use fishbowl::systems::tank::{advance, tank_schedule};
use fishbowl::systems::time::update_world_time;

/// Fishbowl
#[derive(Parser)]
#[command(version, about = "Feed the fish, collect the coins, grow the tank.")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the tank RNG for a reproducible game. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Load the species table from a JSON file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    species: Option<PathBuf>,

    /// Write the built-in species table as JSON and exit.
    /// Optionally provide a path (default: species.json).
    #[arg(long, value_name = "PATH")]
    dump_species: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write the species table and quit (no window needed)
    if let Some(maybe_path) = cli.dump_species {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from("species.json"));
        let json = match SpeciesRegistry::builtin().to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error serializing species: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(&path, json) {
            eprintln!("Error: {}: {e}", path.display());
            std::process::exit(1);
        }
        println!("Species table written to {}", path.display());
        return;
    }

    // --------------- Configuration ---------------
    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_or_create() {
        warn!("{}; using defaults", e);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let registry = match &cli.species {
        Some(path) => SpeciesRegistry::load_from_file(path).unwrap_or_else(|e| {
            error!("Failed to load species from {}: {}", path.display(), e);
            SpeciesRegistry::builtin()
        }),
        None => SpeciesRegistry::builtin(),
    };
    info!("{} species available", registry.len());

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Fishbowl");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape returns to the menu instead of closing the window
    rl.set_exit_key(None);

    let render_target =
        match RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height) {
            Ok(target) => target,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    // WindowSize is the actual window dimensions (updated each frame)
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    game::insert_tank_resources(&mut world, &config, registry);
    world.insert_resource(config);
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_gamestate_change_event));

    // State enter hooks, looked up by name when a transition is applied
    let mut systems_store = SystemsStore::new();
    systems_store.insert("setup", world.register_system(game::setup));
    systems_store.insert("enter_menu", world.register_system(game::enter_menu));
    systems_store.insert("enter_tank", world.register_system(game::enter_tank));
    systems_store.insert("quit_game", world.register_system(game::quit_game));
    world.insert_resource(systems_store);

    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // Enter Setup immediately

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(button_pressed_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            check_pending_state,
            update_buttons,
            tank_click.run_if(state_is_tank),
        )
            .chain(),
    );

    let mut tank = tank_schedule();

    let mut present = Schedule::default();
    present.add_systems((fish_animation, clip_animation, render_system).chain());

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();

        update.run(&mut world);

        if matches!(world.resource::<GameState>().get(), GameStates::Tank) {
            advance(&mut world, &mut tank, dt);
        } else {
            update_world_time(&mut world, dt);
        }

        present.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let mut window_size = world.resource_mut::<WindowSize>();
        window_size.w = new_w;
        window_size.h = new_h;
    }
    info!("Bye");
}
