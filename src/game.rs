//! Game setup and state enter hooks.
//!
//! - [`setup`] loads textures (or draws placeholder sheets when an asset is
//!   missing) and moves on to the main menu.
//! - [`enter_menu`] / [`enter_tank`] rebuild the scene for their state.
//! - [`quit_game`] raises the flag the main loop exits on.
//!
//! [`insert_tank_resources`] puts every resource the tank simulation needs
//! into a world; the binary and the headless tests share it.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::button::{Button, ButtonAction};
use crate::components::coin::CoinKind;
use crate::components::poolslot::PoolSlot;
use crate::events::tank::TankEvent;
use crate::resources::animationstore::{
    AnimationStore, COIN_FRAME_COUNT, COIN_FRAME_SIZE, COIN_TEX_KEY,
};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::{InputState, PointerState};
use crate::resources::species::{SpeciesArt, SpeciesRegistry};
use crate::resources::tank::{PoolSequence, TankBounds, TankRng, TankRules};
use crate::resources::texturestore::TextureStore;
use crate::resources::wallet::Wallet;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::spawn::PELLET_TEX_KEY;

const SHOP_BUTTON_SIZE: Vector2 = Vector2 { x: 120.0, y: 60.0 };
const MENU_BUTTON_SIZE: Vector2 = Vector2 { x: 200.0, y: 56.0 };

/// Tier tints for placeholder fish sheets: healthy, warning, danger.
const TIER_TINTS: [Color; 3] = [Color::ORANGE, Color::YELLOW, Color::LIGHTGRAY];

/// Insert the resources used by the tank simulation and its input handling.
pub fn insert_tank_resources(world: &mut World, config: &GameConfig, registry: SpeciesRegistry) {
    world.insert_resource(AnimationStore::from_species(&registry));
    world.insert_resource(registry);
    world.insert_resource(TankBounds::from_config(config));
    world.insert_resource(TankRules::from_config(config));
    world.insert_resource(PoolSequence::default());
    world.insert_resource(TankRng::new(config.seed));
    world.insert_resource(Wallet::new(config.starting_gold));
    world.insert_resource(InputState::default());
    world.insert_resource(PointerState::default());
    world.init_resource::<WorldTime>();
    world.init_resource::<Messages<TankEvent>>();
}

pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    registry: Res<SpeciesRegistry>,
) {
    let mut textures = TextureStore::new();

    for species in registry.iter() {
        let key = &species.art.tex_key;
        if textures.contains(key) {
            continue;
        }
        let image = load_or_placeholder(key, || placeholder_fish_sheet(&species.art));
        insert_texture(&mut rl, &th, &mut textures, key, &image);
    }
    let coins = load_or_placeholder(COIN_TEX_KEY, placeholder_coin_sheet);
    insert_texture(&mut rl, &th, &mut textures, COIN_TEX_KEY, &coins);
    let pellet = load_or_placeholder(PELLET_TEX_KEY, placeholder_pellet);
    insert_texture(&mut rl, &th, &mut textures, PELLET_TEX_KEY, &pellet);

    info!("Loaded {} textures", textures.len());
    commands.insert_resource(textures);
    next_state.set(GameStates::MainMenu);
}

/// `./assets/textures/{key}.png`, or a generated stand-in.
fn load_or_placeholder(key: &str, placeholder: impl FnOnce() -> Image) -> Image {
    let path = format!("./assets/textures/{}.png", key);
    match Image::load_image(&path) {
        Ok(image) => image,
        Err(e) => {
            warn!("Using placeholder for '{}': {}", key, e);
            placeholder()
        }
    }
}

fn insert_texture(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    textures: &mut TextureStore,
    key: &str,
    image: &Image,
) {
    match rl.load_texture_from_image(th, image) {
        Ok(texture) => textures.insert(key, texture),
        Err(e) => warn!("Failed to upload texture '{}': {}", key, e),
    }
}

/// One row per strip, fish facing right. The tail flaps with the frame index.
fn placeholder_fish_sheet(art: &SpeciesArt) -> Image {
    let (fw, fh) = (art.frame_width as i32, art.frame_height as i32);
    let rows = art.sheet_rows();
    let mut image = Image::gen_image_color(fw * art.frame_count as i32, fh * rows as i32, Color::BLANK);

    for row in 0..rows {
        let tint = if row == art.rows.dead {
            Color::DARKGRAY
        } else {
            (0..3)
                .find(|&t| art.rows.swim[t] == row || art.rows.idle[t] == row)
                .map(|t| TIER_TINTS[t])
                .unwrap_or(Color::WHITE)
        };
        let swimming = art.rows.swim.contains(&row);
        for frame in 0..art.frame_count as i32 {
            let (x, y) = (frame * fw, row as i32 * fh);
            let flap = if swimming { (frame % 2) * fh / 6 } else { 0 };
            image.draw_rectangle(x + fw / 4, y + fh / 4, fw / 2, fh / 2, tint);
            image.draw_rectangle(x + fw / 16, y + fh / 3 + flap, fw / 5, fh / 3, tint);
            if row != art.rows.dead {
                image.draw_rectangle(x + fw * 5 / 8, y + fh / 3, 3, 3, Color::BLACK);
            }
        }
    }
    image
}

/// Spinning coins: the disk narrows and widens across the strip.
fn placeholder_coin_sheet() -> Image {
    let size = COIN_FRAME_SIZE as i32;
    let mut image = Image::gen_image_color(
        size * COIN_FRAME_COUNT as i32,
        size * CoinKind::ALL.len() as i32,
        Color::BLANK,
    );
    for kind in CoinKind::ALL {
        let color = match kind {
            CoinKind::Silver => Color::LIGHTGRAY,
            CoinKind::Gold => Color::GOLD,
            CoinKind::Diamond => Color::SKYBLUE,
        };
        let y = kind.sheet_row() as i32 * size;
        for frame in 0..COIN_FRAME_COUNT as i32 {
            let half = COIN_FRAME_COUNT as i32 / 2;
            let width = (size - 4) * (half - (frame - half).abs()).max(1) / half;
            let x = frame * size + (size - width) / 2;
            image.draw_rectangle(x, y + 2, width, size - 4, color);
        }
    }
    image
}

fn placeholder_pellet() -> Image {
    let mut image = Image::gen_image_color(12, 12, Color::BLANK);
    image.draw_rectangle(2, 2, 8, 8, Color::BROWN);
    image
}

/// Despawn pool members and buttons left over from the previous state.
fn clear_scene(commands: &mut Commands, scene: &Query<Entity, Or<(With<PoolSlot>, With<Button>)>>) {
    for entity in scene.iter() {
        commands.entity(entity).despawn();
    }
}

pub fn enter_menu(
    mut commands: Commands,
    scene: Query<Entity, Or<(With<PoolSlot>, With<Button>)>>,
    config: Res<GameConfig>,
) {
    clear_scene(&mut commands, &scene);

    let x = (config.render_width as f32 - MENU_BUTTON_SIZE.x) * 0.5;
    let y = config.render_height as f32 * 0.5;
    commands.spawn(Button::new(
        "play",
        "Play",
        Vector2 { x, y },
        MENU_BUTTON_SIZE,
        ButtonAction::StartGame,
    ));
    commands.spawn(Button::new(
        "quit",
        "Quit",
        Vector2 {
            x,
            y: y + MENU_BUTTON_SIZE.y + 16.0,
        },
        MENU_BUTTON_SIZE,
        ButtonAction::QuitGame,
    ));
}

pub fn enter_tank(
    mut commands: Commands,
    scene: Query<Entity, Or<(With<PoolSlot>, With<Button>)>>,
    config: Res<GameConfig>,
    registry: Res<SpeciesRegistry>,
    rules: Res<TankRules>,
    bounds: Res<TankBounds>,
    mut wallet: ResMut<Wallet>,
    mut rng: ResMut<TankRng>,
    mut tank_events: ResMut<Messages<TankEvent>>,
) {
    clear_scene(&mut commands, &scene);
    tank_events.clear();
    wallet.reset(rules.starting_gold);

    let mut x = 10.0;
    for (species, price) in registry.purchasable() {
        commands.spawn(
            Button::new(
                format!("buy_{}", species.name),
                species.display_name.clone(),
                Vector2 { x, y: 10.0 },
                SHOP_BUTTON_SIZE,
                ButtonAction::BuyFish(species.name.clone()),
            )
            .with_price(price),
        );
        x += SHOP_BUTTON_SIZE.x + 10.0;
    }
    commands.spawn(Button::new(
        "menu",
        "Menu",
        Vector2 {
            x: config.render_width as f32 - 300.0,
            y: 10.0,
        },
        Vector2 { x: 100.0, y: 60.0 },
        ButtonAction::OpenMenu,
    ));

    if let Some(starter) = registry.get("guppy_small") {
        let max = bounds.max_position(Vector2 {
            x: starter.width,
            y: starter.height,
        });
        for _ in 0..rules.starting_fish {
            tank_events.write(TankEvent::SpawnFish {
                species: starter.name.clone(),
                pos: Vector2 {
                    x: rng.range(0.0, max.x),
                    y: rng.range(0.0, max.y * 0.5),
                },
            });
        }
    } else {
        warn!("No guppy_small species; starting with an empty tank");
    }
    info!("Tank ready with {} gold", wallet.gold());
}

pub fn quit_game(mut world_signals: ResMut<WorldSignals>) {
    info!("Quitting");
    world_signals.set_flag("quit_game");
}
