//! Animation resource registry.
//!
//! Holds immutable strip definitions keyed by string. Spawning code builds
//! per-entity [`Animation`] cursors from them; the cursors then run on their
//! own without touching the store again.
//!
//! Key layout:
//! - `"{species}/swim/{tier}"` and `"{species}/idle/{tier}"`, tier 0..3
//! - `"{species}/dead"`
//! - `"coin/silver"`, `"coin/gold"`, `"coin/diamond"`

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::components::animation::{Animation, FishAnimator};
use crate::components::coin::CoinKind;
use crate::resources::species::{SpeciesConfig, SpeciesRegistry};

pub const COIN_TEX_KEY: &str = "coins";
pub const COIN_FRAME_SIZE: u32 = 24;
pub const COIN_FRAME_COUNT: usize = 6;
const COIN_FPS: f32 = 10.0;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default, Debug)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationDef>,
}

/// A horizontal strip in a sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    /// Offset of the first frame in the sheet.
    pub position: Vector2,
    /// Horizontal distance between frames.
    pub displacement: f32,
    pub frame_count: usize,
    pub fps: f32,
    pub looped: bool,
}

impl AnimationDef {
    pub fn frames(&self) -> SmallVec<[Vector2; 8]> {
        (0..self.frame_count)
            .map(|i| Vector2 {
                x: self.position.x + i as f32 * self.displacement,
                y: self.position.y,
            })
            .collect()
    }

    /// Fresh cursor for this strip.
    pub fn instantiate(&self) -> Animation {
        Animation::new(
            self.tex_key.clone(),
            self.frames(),
            1.0 / self.fps,
            self.looped,
        )
    }
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, def: AnimationDef) {
        self.animations.insert(key.into(), def);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationDef> {
        self.animations.get(key)
    }

    pub fn instantiate(&self, key: &str) -> Option<Animation> {
        self.get(key).map(AnimationDef::instantiate)
    }

    /// Store with every species strip and the coin strips registered.
    pub fn from_species(registry: &SpeciesRegistry) -> Self {
        let mut store = Self::new();
        for species in registry.iter() {
            store.register_species(species);
        }
        store.register_coins();
        store
    }

    pub fn register_species(&mut self, species: &SpeciesConfig) {
        let art = &species.art;
        let strip = |row: u32, looped: bool| AnimationDef {
            tex_key: art.tex_key.clone(),
            position: Vector2 {
                x: 0.0,
                y: (row * art.frame_height) as f32,
            },
            displacement: art.frame_width as f32,
            frame_count: art.frame_count as usize,
            fps: art.fps,
            looped,
        };
        for tier in 0..3 {
            self.insert(
                format!("{}/swim/{}", species.name, tier),
                strip(art.rows.swim[tier], true),
            );
            self.insert(
                format!("{}/idle/{}", species.name, tier),
                strip(art.rows.idle[tier], true),
            );
        }
        self.insert(format!("{}/dead", species.name), strip(art.rows.dead, false));
    }

    pub fn register_coins(&mut self) {
        for kind in CoinKind::ALL {
            self.insert(
                kind.animation_key(),
                AnimationDef {
                    tex_key: COIN_TEX_KEY.to_string(),
                    position: Vector2 {
                        x: 0.0,
                        y: (kind.sheet_row() * COIN_FRAME_SIZE) as f32,
                    },
                    displacement: COIN_FRAME_SIZE as f32,
                    frame_count: COIN_FRAME_COUNT,
                    fps: COIN_FPS,
                    looped: true,
                },
            );
        }
    }

    /// Cursor set for a fish of `species`, `None` if any strip is missing.
    pub fn fish_animator(&self, species: &str) -> Option<FishAnimator> {
        let tier = |pose: &str, t: usize| self.instantiate(&format!("{species}/{pose}/{t}"));
        let swim = [tier("swim", 0)?, tier("swim", 1)?, tier("swim", 2)?];
        let idle = [tier("idle", 0)?, tier("idle", 1)?, tier("idle", 2)?];
        let dead = self.instantiate(&format!("{species}/dead"))?;
        Some(FishAnimator::new(swim, idle, dead))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_strips_use_sheet_rows() {
        let registry = SpeciesRegistry::builtin();
        let store = AnimationStore::from_species(&registry);
        let guppy = registry.get("guppy_small").unwrap();

        let dead = store.get("guppy_small/dead").unwrap();
        assert!(!dead.looped);
        assert_eq!(dead.position.y, (6 * guppy.art.frame_height) as f32);

        let swim = store.get("guppy_small/swim/2").unwrap();
        let frames = swim.frames();
        assert_eq!(frames.len(), guppy.art.frame_count as usize);
        assert_eq!(frames[1].x, guppy.art.frame_width as f32);
    }

    #[test]
    fn fish_animator_needs_registered_species() {
        let store = AnimationStore::from_species(&SpeciesRegistry::builtin());
        assert!(store.fish_animator("carnivore").is_some());
        assert!(store.fish_animator("whale").is_none());
    }

    #[test]
    fn coin_strips_are_registered() {
        let store = AnimationStore::from_species(&SpeciesRegistry::builtin());
        for kind in CoinKind::ALL {
            assert!(store.instantiate(kind.animation_key()).unwrap().looped);
        }
    }
}
