//! Data-driven species table.
//!
//! Every fish kind is a [`SpeciesConfig`] row: size, hunger tuning, speeds,
//! diet, coin drops, evolution and sprite-sheet layout. Behavior systems look
//! the row up by the fish's species name; there is no per-species code.
//!
//! The built-in table can be replaced by a JSON file (`--species`) and dumped
//! with `--dump-species`.
//!
//! ```json
//! { "species": [ { "name": "guppy_small", "diet": { "kind": "pellets" }, ... } ] }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::coin::CoinKind;

/// What a fish hunts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Diet {
    /// Food pellets dropped by the player.
    Pellets,
    /// Alive fish of the listed species.
    Prey { species: Vec<String> },
    /// Coins, credited to the wallet instead of feeding.
    Coins,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinDrop {
    /// Seconds between drops.
    pub interval: f32,
    pub coin: CoinKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    /// Successor species.
    pub into: String,
    /// Lifetime nutrition needed.
    pub threshold: f32,
}

/// Row indices of each strip in the sprite sheet, tiers ordered
/// `[healthy, warning, danger]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtRows {
    pub swim: [u32; 3],
    pub idle: [u32; 3],
    pub dead: u32,
}

impl Default for ArtRows {
    fn default() -> Self {
        Self {
            swim: [0, 1, 2],
            idle: [3, 4, 5],
            dead: 6,
        }
    }
}

/// Sprite sheet layout: one row per strip, `frame_count` frames per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesArt {
    pub tex_key: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
    pub fps: f32,
    #[serde(default)]
    pub rows: ArtRows,
}

impl SpeciesArt {
    pub fn sheet_rows(&self) -> u32 {
        let rows = &self.rows;
        rows.swim
            .iter()
            .chain(rows.idle.iter())
            .copied()
            .chain(std::iter::once(rows.dead))
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesConfig {
    pub name: String,
    pub display_name: String,
    pub width: f32,
    pub height: f32,
    pub max_hunger: f32,
    /// Hunger lost per frame while no food is being chased.
    pub hunger_decay: f32,
    /// Fractions of `max_hunger` separating healthy/warning/danger.
    pub warning_fraction: f32,
    pub danger_fraction: f32,
    /// Pursuit speed, units per frame.
    pub speed: f32,
    pub wander_speed: f32,
    pub wander_radius: f32,
    /// Per-frame probability of picking a new wander target while idle.
    pub wander_chance: f32,
    pub capture_radius: f32,
    pub diet: Diet,
    /// Species that do not starve clamp at zero hunger and live on.
    pub starves: bool,
    #[serde(default)]
    pub coin_drop: Option<CoinDrop>,
    #[serde(default)]
    pub evolution: Option<Evolution>,
    /// Shop price; species without one are not sold.
    #[serde(default)]
    pub price: Option<i64>,
    /// Seconds a corpse stays in the tank.
    pub corpse_linger: f32,
    pub art: SpeciesArt,
}

impl SpeciesConfig {
    fn fish(name: &str, display_name: &str, width: f32, height: f32, diet: Diet) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            width,
            height,
            max_hunger: 100.0,
            hunger_decay: 0.05,
            warning_fraction: 0.5,
            danger_fraction: 0.25,
            speed: 2.0,
            wander_speed: 1.0,
            wander_radius: 150.0,
            wander_chance: 1.0 / 180.0,
            capture_radius: 30.0,
            diet,
            starves: true,
            coin_drop: None,
            evolution: None,
            price: None,
            corpse_linger: 4.0,
            art: SpeciesArt {
                tex_key: name.to_string(),
                frame_width: width as u32,
                frame_height: height as u32,
                frame_count: 4,
                fps: 8.0,
                rows: ArtRows::default(),
            },
        }
    }

    /// Whether `food` (a fish species name) is prey for this species.
    pub fn hunts(&self, food: &str) -> bool {
        matches!(&self.diet, Diet::Prey { species } if species.iter().any(|s| s == food))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpeciesFile {
    species: Vec<SpeciesConfig>,
}

/// Species rows in table order, indexed by name.
#[derive(Resource, Debug, Clone)]
pub struct SpeciesRegistry {
    species: Vec<SpeciesConfig>,
    index: FxHashMap<String, usize>,
}

impl SpeciesRegistry {
    /// Build a registry, rejecting duplicate names and dangling references.
    pub fn new(species: Vec<SpeciesConfig>) -> Result<Self, String> {
        let mut index = FxHashMap::default();
        for (i, s) in species.iter().enumerate() {
            if index.insert(s.name.clone(), i).is_some() {
                return Err(format!("Duplicate species '{}'", s.name));
            }
        }
        let registry = Self { species, index };
        registry.validate()?;
        Ok(registry)
    }

    fn validate(&self) -> Result<(), String> {
        for s in &self.species {
            if s.width <= 0.0 || s.height <= 0.0 {
                return Err(format!("Species '{}' has an empty size", s.name));
            }
            if s.max_hunger <= 0.0 {
                return Err(format!("Species '{}' needs a positive max_hunger", s.name));
            }
            if s.danger_fraction > s.warning_fraction {
                return Err(format!(
                    "Species '{}': danger_fraction must not exceed warning_fraction",
                    s.name
                ));
            }
            if s.art.frame_count == 0 || s.art.fps <= 0.0 {
                return Err(format!("Species '{}' has no animation frames", s.name));
            }
            if let Some(evo) = &s.evolution
                && !self.index.contains_key(&evo.into)
            {
                return Err(format!(
                    "Species '{}' evolves into unknown species '{}'",
                    s.name, evo.into
                ));
            }
            if let Diet::Prey { species } = &s.diet {
                for prey in species {
                    if !self.index.contains_key(prey) {
                        return Err(format!(
                            "Species '{}' hunts unknown species '{}'",
                            s.name, prey
                        ));
                    }
                }
            }
            if let Some(drop) = &s.coin_drop
                && drop.interval <= 0.0
            {
                return Err(format!("Species '{}' drops coins with no interval", s.name));
            }
        }
        Ok(())
    }

    /// The default tank population.
    pub fn builtin() -> Self {
        let small = SpeciesConfig {
            evolution: Some(Evolution {
                into: "guppy_medium".into(),
                threshold: 90.0,
            }),
            price: Some(100),
            ..SpeciesConfig::fish("guppy_small", "Guppy", 40.0, 32.0, Diet::Pellets)
        };
        let medium = SpeciesConfig {
            coin_drop: Some(CoinDrop {
                interval: 8.0,
                coin: CoinKind::Silver,
            }),
            evolution: Some(Evolution {
                into: "guppy_large".into(),
                threshold: 150.0,
            }),
            ..SpeciesConfig::fish("guppy_medium", "Guppy", 56.0, 44.0, Diet::Pellets)
        };
        let large = SpeciesConfig {
            coin_drop: Some(CoinDrop {
                interval: 8.0,
                coin: CoinKind::Gold,
            }),
            ..SpeciesConfig::fish("guppy_large", "Big Guppy", 72.0, 56.0, Diet::Pellets)
        };
        let carnivore = SpeciesConfig {
            max_hunger: 150.0,
            hunger_decay: 0.04,
            speed: 2.5,
            coin_drop: Some(CoinDrop {
                interval: 12.0,
                coin: CoinKind::Diamond,
            }),
            price: Some(1000),
            ..SpeciesConfig::fish(
                "carnivore",
                "Carnivore",
                80.0,
                64.0,
                Diet::Prey {
                    species: vec!["guppy_small".into()],
                },
            )
        };
        let snail = SpeciesConfig {
            hunger_decay: 0.0,
            speed: 1.5,
            wander_speed: 0.5,
            capture_radius: 24.0,
            starves: false,
            price: Some(200),
            ..SpeciesConfig::fish("snail", "Snail", 48.0, 32.0, Diet::Coins)
        };

        // The built-in rows are consistent by construction.
        Self::new(vec![small, medium, large, carnivore, snail])
            .unwrap_or_else(|e| panic!("built-in species table is invalid: {e}"))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let file: SpeciesFile =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse species: {}", e))?;
        Self::new(file.species)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read species file {:?}: {}", path, e))?;
        let registry = Self::from_json(&json)?;
        info!("Loaded {} species from {:?}", registry.len(), path);
        Ok(registry)
    }

    pub fn to_json(&self) -> Result<String, String> {
        let file = SpeciesFile {
            species: self.species.clone(),
        };
        serde_json::to_string_pretty(&file).map_err(|e| format!("Failed to serialize species: {}", e))
    }

    pub fn get(&self, name: &str) -> Option<&SpeciesConfig> {
        self.index.get(name).map(|&i| &self.species[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesConfig> {
        self.species.iter()
    }

    /// Species sold in the shop, in table order, with their price.
    pub fn purchasable(&self) -> impl Iterator<Item = (&SpeciesConfig, i64)> {
        self.species
            .iter()
            .filter_map(|s| s.price.map(|price| (s, price)))
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl Default for SpeciesRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_links_up() {
        let reg = SpeciesRegistry::builtin();
        let small = reg.get("guppy_small").unwrap();
        let evo = small.evolution.as_ref().unwrap();
        assert!(reg.get(&evo.into).is_some());
        assert!(reg.get("carnivore").unwrap().hunts("guppy_small"));
        assert!(!reg.get("snail").unwrap().starves);
        assert!(reg.get("nope").is_none());
    }

    #[test]
    fn purchasable_keeps_table_order() {
        let reg = SpeciesRegistry::builtin();
        let names: Vec<_> = reg.purchasable().map(|(s, _)| s.name.as_str()).collect();
        assert_eq!(names, ["guppy_small", "carnivore", "snail"]);
    }

    #[test]
    fn json_dump_loads_back() {
        let reg = SpeciesRegistry::builtin();
        let json = reg.to_json().unwrap();
        let back = SpeciesRegistry::from_json(&json).unwrap();
        assert_eq!(back.len(), reg.len());
        assert_eq!(back.get("carnivore"), reg.get("carnivore"));
    }

    #[test]
    fn dangling_evolution_is_rejected() {
        let mut rows: Vec<_> = SpeciesRegistry::builtin().iter().cloned().collect();
        rows.retain(|s| s.name != "guppy_large");
        let err = SpeciesRegistry::new(rows).unwrap_err();
        assert!(err.contains("guppy_large"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let reg = SpeciesRegistry::builtin();
        let mut rows: Vec<_> = reg.iter().cloned().collect();
        rows.push(rows[0].clone());
        assert!(SpeciesRegistry::new(rows).is_err());
    }

    #[test]
    fn bad_json_reports_error() {
        assert!(SpeciesRegistry::from_json("{ nope").is_err());
    }

    #[test]
    fn default_sheet_has_seven_rows() {
        let reg = SpeciesRegistry::builtin();
        assert_eq!(reg.get("snail").unwrap().art.sheet_rows(), 7);
    }
}
