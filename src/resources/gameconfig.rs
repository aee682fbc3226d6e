//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 800
//! height = 600
//!
//! [window]
//! width = 1024
//! height = 768
//! vsync = true
//! target_fps = 60
//!
//! [tank]
//! width = 800
//! height = 520
//! starting_gold = 200
//! starting_fish = 2
//! pellet_cost = 5
//! max_pellets = 6
//! coin_rest_time = 3.0
//! seed = 42
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_RENDER_WIDTH: u32 = 800;
const DEFAULT_RENDER_HEIGHT: u32 = 600;
const DEFAULT_WINDOW_WIDTH: u32 = 1024;
const DEFAULT_WINDOW_HEIGHT: u32 = 768;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_SHOP_HEIGHT: u32 = 80;
const DEFAULT_STARTING_GOLD: i64 = 200;
const DEFAULT_STARTING_FISH: u32 = 2;
const DEFAULT_PELLET_COST: i64 = 5;
const DEFAULT_MAX_PELLETS: u32 = 6;
const DEFAULT_COIN_REST_TIME: f32 = 3.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Tank size in render pixels. The tank sits under the shop bar.
    pub tank_width: u32,
    pub tank_height: u32,
    pub starting_gold: i64,
    /// Small guppies placed in a fresh tank.
    pub starting_fish: u32,
    pub pellet_cost: i64,
    pub max_pellets: u32,
    /// Seconds a landed coin stays collectible.
    pub coin_rest_time: f32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            tank_width: DEFAULT_RENDER_WIDTH,
            tank_height: DEFAULT_RENDER_HEIGHT - DEFAULT_SHOP_HEIGHT,
            starting_gold: DEFAULT_STARTING_GOLD,
            starting_fish: DEFAULT_STARTING_FISH,
            pellet_cost: DEFAULT_PELLET_COST,
            max_pellets: DEFAULT_MAX_PELLETS,
            coin_rest_time: DEFAULT_COIN_REST_TIME,
            seed: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [tank] section
        if let Some(width) = config.getuint("tank", "width").ok().flatten() {
            self.tank_width = width as u32;
        }
        if let Some(height) = config.getuint("tank", "height").ok().flatten() {
            self.tank_height = height as u32;
        }
        if let Some(gold) = config.getint("tank", "starting_gold").ok().flatten() {
            self.starting_gold = gold;
        }
        if let Some(count) = config.getuint("tank", "starting_fish").ok().flatten() {
            self.starting_fish = count as u32;
        }
        if let Some(cost) = config.getint("tank", "pellet_cost").ok().flatten() {
            self.pellet_cost = cost;
        }
        if let Some(max) = config.getuint("tank", "max_pellets").ok().flatten() {
            self.max_pellets = max as u32;
        }
        if let Some(rest) = config.getfloat("tank", "coin_rest_time").ok().flatten() {
            self.coin_rest_time = rest as f32;
        }
        if let Some(seed) = config.getuint("tank", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, vsync={}, tank {}x{}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.tank_width,
            self.tank_height
        );

        Ok(())
    }

    /// Load the INI file, or write the current values to it when it does not
    /// exist yet so there is something to edit next time.
    pub fn load_or_create(&mut self) -> Result<(), String> {
        if self.config_path.exists() {
            self.load_from_file()
        } else {
            info!("No config at {:?}, writing defaults", self.config_path);
            self.save_to_file()
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config.set("tank", "width", Some(self.tank_width.to_string()));
        config.set("tank", "height", Some(self.tank_height.to_string()));
        config.set("tank", "starting_gold", Some(self.starting_gold.to_string()));
        config.set("tank", "starting_fish", Some(self.starting_fish.to_string()));
        config.set("tank", "pellet_cost", Some(self.pellet_cost.to_string()));
        config.set("tank", "max_pellets", Some(self.max_pellets.to_string()));
        config.set("tank", "coin_rest_time", Some(self.coin_rest_time.to_string()));
        if let Some(seed) = self.seed {
            config.set("tank", "seed", Some(seed.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Vertical space above the tank, used by the shop bar.
    pub fn shop_height(&self) -> u32 {
        self.render_height.saturating_sub(self.tank_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fishbowl_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn defaults_fit_tank_under_shop_bar() {
        let config = GameConfig::new();
        assert_eq!(config.tank_width, config.render_width);
        assert_eq!(config.shop_height(), 80);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.target_fps, DEFAULT_TARGET_FPS);
    }

    #[test]
    fn save_then_load_keeps_tank_section() {
        let path = temp_path("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.pellet_cost = 9;
        saved.coin_rest_time = 1.5;
        saved.seed = Some(7);
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, saved);
    }

    #[test]
    fn load_or_create_writes_defaults_then_reads_them() {
        let path = temp_path("create");
        let _ = std::fs::remove_file(&path);

        let mut first = GameConfig::with_path(&path);
        first.load_or_create().unwrap();
        assert!(path.exists());

        std::fs::write(&path, "[tank]\nstarting_gold = 42\n").unwrap();
        let mut second = GameConfig::with_path(&path);
        second.load_or_create().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(first, GameConfig::with_path(&path));
        assert_eq!(second.starting_gold, 42);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[tank]\nmax_pellets = 3\n").unwrap();
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.max_pellets, 3);
        assert_eq!(config.pellet_cost, DEFAULT_PELLET_COST);
        assert_eq!(config.seed, None);
    }
}
