//! Render pass.
//!
//! Draws the scene into the fixed-resolution [`RenderTarget`], then scales it
//! into the window with letterboxing. Pool members are drawn in slot order so
//! later spawns appear on top; Discard members are skipped and sprites whose
//! texture is missing are silently not drawn.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boundary::Boundary;
use crate::components::button::Button;
use crate::components::fish::Fish;
use crate::components::lifestate::LifeState;
use crate::components::poolslot::PoolSlot;
use crate::components::sprite::Sprite;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::rendertarget::RenderTarget;
use crate::resources::species::SpeciesRegistry;
use crate::resources::tank::TankBounds;
use crate::resources::texturestore::TextureStore;
use crate::resources::wallet::Wallet;
use crate::resources::windowsize::WindowSize;

const WATER_TOP: Color = Color::new(40, 110, 170, 255);
const WATER_BOTTOM: Color = Color::new(10, 40, 80, 255);
const SAND: Color = Color::new(194, 170, 110, 255);
const SHOP_BAR: Color = Color::new(30, 30, 40, 255);
const BUTTON_IDLE: Color = Color::new(70, 90, 120, 255);
const BUTTON_HOVER: Color = Color::new(100, 140, 190, 255);
const BUTTON_DISABLED: Color = Color::new(60, 60, 60, 255);

type PoolDrawQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static PoolSlot,
        &'static Boundary,
        &'static Sprite,
        &'static LifeState,
    ),
>;

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: Res<TextureStore>,
    window_size: Res<WindowSize>,
    game_state: Res<GameState>,
    bounds: Res<TankBounds>,
    wallet: Res<Wallet>,
    registry: Res<SpeciesRegistry>,
    debug: Option<Res<DebugMode>>,
    pool: PoolDrawQuery,
    fish: Query<(&Fish, &Boundary, &LifeState)>,
    buttons: Query<&Button>,
) {
    let target = &mut *target;
    let letterbox = window_size.calculate_letterbox(target.game_width, target.game_height);
    let source = target.source_rect();
    let (game_w, game_h) = (target.game_width as i32, target.game_height as i32);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(SHOP_BAR);

        match game_state.get() {
            GameStates::Tank => {
                draw_tank(&mut t, &bounds, &textures, &pool);
                draw_hud(&mut t, &wallet, &fish, game_w);
                if debug.is_some() {
                    draw_debug(&mut t, &bounds, &registry, &fish, pool.iter().count());
                }
            }
            GameStates::MainMenu => {
                t.draw_rectangle_gradient_v(0, 0, game_w, game_h, WATER_TOP, WATER_BOTTOM);
                t.draw_text("FISHBOWL", game_w / 2 - 120, game_h / 4, 48, Color::RAYWHITE);
            }
            _ => {}
        }
        draw_buttons(&mut t, &buttons);
    }
    d.draw_texture_pro(
        &target.texture,
        source,
        letterbox,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}

fn draw_tank<D: RaylibDraw>(
    d: &mut D,
    bounds: &TankBounds,
    textures: &TextureStore,
    pool: &PoolDrawQuery,
) {
    let (ox, oy) = (bounds.origin.x, bounds.origin.y);
    let (w, h) = (bounds.width as i32, bounds.height as i32);
    d.draw_rectangle_gradient_v(ox as i32, oy as i32, w, h, WATER_TOP, WATER_BOTTOM);
    d.draw_rectangle(ox as i32, oy as i32 + h - 12, w, 12, SAND);

    let mut members: Vec<_> = pool
        .iter()
        .filter(|(_, _, _, state)| state.is_visible())
        .collect();
    members.sort_unstable_by_key(|(slot, ..)| **slot);

    for (_, boundary, sprite, _) in members {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let mut src = Rectangle {
            x: sprite.offset.x,
            y: sprite.offset.y,
            width: sprite.width,
            height: sprite.height,
        };
        if sprite.flip_h {
            src.width = -src.width;
        }
        let dest = Rectangle {
            x: boundary.pos.x + ox,
            y: boundary.pos.y + oy,
            width: boundary.width(),
            height: boundary.height(),
        };
        d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }
}

fn draw_buttons<D: RaylibDraw>(d: &mut D, buttons: &Query<&Button>) {
    for button in buttons.iter() {
        let fill = if !button.enabled {
            BUTTON_DISABLED
        } else if button.hovered {
            BUTTON_HOVER
        } else {
            BUTTON_IDLE
        };
        let rect = button.rect();
        d.draw_rectangle_rec(rect, fill);
        d.draw_rectangle_lines_ex(rect, 2.0, Color::RAYWHITE);
        let (x, y) = (rect.x as i32 + 8, rect.y as i32 + 8);
        d.draw_text(&button.label, x, y, 20, Color::RAYWHITE);
        if let Some(price) = button.price {
            d.draw_text(&format!("{} g", price), x, y + 24, 16, Color::GOLD);
        }
    }
}

fn draw_hud<D: RaylibDraw>(
    d: &mut D,
    wallet: &Wallet,
    fish: &Query<(&Fish, &Boundary, &LifeState)>,
    game_w: i32,
) {
    let alive = fish.iter().filter(|(_, _, s)| s.is_alive()).count();
    d.draw_text(
        &format!("Gold: {}", wallet.gold()),
        game_w - 180,
        12,
        24,
        Color::GOLD,
    );
    d.draw_text(
        &format!("Fish: {}", alive),
        game_w - 180,
        44,
        20,
        Color::RAYWHITE,
    );
}

fn draw_debug<D: RaylibDraw>(
    d: &mut D,
    bounds: &TankBounds,
    registry: &SpeciesRegistry,
    fish: &Query<(&Fish, &Boundary, &LifeState)>,
    pool_size: usize,
) {
    let origin = bounds.origin;
    for (f, boundary, state) in fish.iter() {
        let rect = Rectangle {
            x: boundary.pos.x + origin.x,
            y: boundary.pos.y + origin.y,
            width: boundary.width(),
            height: boundary.height(),
        };
        let color = if state.is_alive() { Color::GREEN } else { Color::RED };
        d.draw_rectangle_lines_ex(rect, 1.0, color);

        let center = bounds.to_game(boundary.center());
        if let Some(species) = registry.get(&f.species) {
            d.draw_circle_lines(
                center.x as i32,
                center.y as i32,
                species.capture_radius,
                Color::YELLOW,
            );
        }
        if let Some(target) = f.wander_target {
            let t = bounds.to_game(target);
            d.draw_line(
                rect.x as i32,
                rect.y as i32,
                t.x as i32,
                t.y as i32,
                Color::SKYBLUE,
            );
        }
        d.draw_text(
            &format!("{:.0}", f.hunger()),
            rect.x as i32,
            rect.y as i32 - 12,
            10,
            Color::RAYWHITE,
        );
    }
    d.draw_text(
        &format!("DEBUG (F11) | pool: {}", pool_size),
        10,
        origin.y as i32 + 10,
        10,
        Color::RAYWHITE,
    );
}
