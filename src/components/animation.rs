//! Frame cursors for sprite-sheet animations.
//!
//! An [`Animation`] is an ordered list of sprite-sheet offsets played at a
//! fixed frame duration. Playback is driven by total elapsed simulation time:
//! the cursor stores the timestamp of its next switch and advances by at most
//! one frame per check, so a long hitch never skips frames.
//!
//! Fish carry a [`FishAnimator`] holding one cursor per pose and hunger tier;
//! coins carry a single [`ClipAnimation`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use smallvec::SmallVec;

use crate::components::fish::HungerTier;
use crate::components::lifestate::LifeState;

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    /// Top-left offset of every frame inside the sheet.
    pub frames: SmallVec<[Vector2; 8]>,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    pub looped: bool,
    pub current_frame: usize,
    /// Elapsed time at which the cursor moves next. `None` until the first
    /// check anchors it.
    pub next_switch_time: Option<f32>,
}

impl Animation {
    pub fn new(
        tex_key: impl Into<String>,
        frames: impl IntoIterator<Item = Vector2>,
        frame_duration: f32,
        looped: bool,
    ) -> Self {
        Self {
            tex_key: tex_key.into(),
            frames: frames.into_iter().collect(),
            frame_duration,
            looped,
            current_frame: 0,
            next_switch_time: None,
        }
    }

    /// Offset of the frame under the cursor.
    pub fn current_offset(&self) -> Vector2 {
        self.frames
            .get(self.current_frame)
            .copied()
            .unwrap_or(Vector2 { x: 0.0, y: 0.0 })
    }

    /// Check the cursor against total elapsed time and return the current
    /// frame offset.
    ///
    /// The first call anchors the clock at `elapsed`. Later calls advance one
    /// frame once `elapsed` reaches the stored switch time. Looping cursors
    /// wrap to 0, others stay on the last frame.
    pub fn update(&mut self, elapsed: f32) -> Vector2 {
        match self.next_switch_time {
            None => {
                self.next_switch_time = Some(elapsed + self.frame_duration);
            }
            Some(next) if elapsed >= next => {
                let last = self.frames.len().saturating_sub(1);
                if self.current_frame < last {
                    self.current_frame += 1;
                } else if self.looped {
                    self.current_frame = 0;
                }
                self.next_switch_time = Some(next + self.frame_duration);
            }
            Some(_) => {}
        }
        self.current_offset()
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.next_switch_time = None;
    }
}

/// Which set of frames a fish shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Swim(HungerTier),
    Idle(HungerTier),
    Dead,
}

/// Sprite selection for a fish, a pure function of its lifecycle state,
/// hunger tier and whether it moved this frame.
pub fn select_pose(state: LifeState, tier: HungerTier, moving: bool) -> Pose {
    match state {
        LifeState::Alive if moving => Pose::Swim(tier),
        LifeState::Alive => Pose::Idle(tier),
        LifeState::Dead | LifeState::Discard => Pose::Dead,
    }
}

#[derive(Component, Debug, Clone)]
pub struct FishAnimator {
    pub swim: [Animation; 3],
    pub idle: [Animation; 3],
    pub dead: Animation,
    pub pose: Option<Pose>,
}

impl FishAnimator {
    pub fn new(swim: [Animation; 3], idle: [Animation; 3], dead: Animation) -> Self {
        Self {
            swim,
            idle,
            dead,
            pose: None,
        }
    }

    pub fn get_mut(&mut self, pose: Pose) -> &mut Animation {
        match pose {
            Pose::Swim(tier) => &mut self.swim[tier.index()],
            Pose::Idle(tier) => &mut self.idle[tier.index()],
            Pose::Dead => &mut self.dead,
        }
    }

    /// Switch to `pose` and advance its cursor. Entering the dead pose
    /// restarts it so the death strip plays from the first frame.
    pub fn play(&mut self, pose: Pose, elapsed: f32) -> (&str, Vector2) {
        if pose == Pose::Dead && self.pose != Some(Pose::Dead) {
            self.dead.reset();
        }
        self.pose = Some(pose);
        let anim = self.get_mut(pose);
        let offset = anim.update(elapsed);
        (anim.tex_key.as_str(), offset)
    }
}

/// Single looping strip, used by coins.
#[derive(Component, Debug, Clone)]
pub struct ClipAnimation(pub Animation);
