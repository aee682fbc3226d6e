//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! game's render resolution. Updated each frame to handle window resizing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Destination rectangle that fits the game resolution into the window
    /// while preserving its aspect ratio, centered.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w.max(1) as f32;
        let window_h = self.h.max(1) as f32;

        if window_w / window_h > game_w / game_h {
            // pillarbox
            let scaled_w = game_w * (window_h / game_h);
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // letterbox
            let scaled_h = game_h * (window_w / game_w);
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }

    /// Transform a window-space position to render-target space, clamped to
    /// the game area.
    pub fn window_to_game_pos(
        &self,
        window_pos: Vector2,
        game_width: u32,
        game_height: u32,
    ) -> Vector2 {
        let letterbox = self.calculate_letterbox(game_width, game_height);
        let game_w = game_width as f32;
        let game_h = game_height as f32;

        Vector2 {
            x: ((window_pos.x - letterbox.x) * game_w / letterbox.width).clamp(0.0, game_w),
            y: ((window_pos.y - letterbox.y) * game_h / letterbox.height).clamp(0.0, game_h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_aspect_scales_uniformly() {
        let ws = WindowSize { w: 1600, h: 1200 };
        let p = ws.window_to_game_pos(Vector2 { x: 800.0, y: 600.0 }, 800, 600);
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn pillarbox_offsets_x() {
        let ws = WindowSize { w: 1000, h: 600 };
        let rect = ws.calculate_letterbox(800, 600);
        assert!((rect.x - 100.0).abs() < 1e-3);
        assert!((rect.width - 800.0).abs() < 1e-3);
        let p = ws.window_to_game_pos(Vector2 { x: 50.0, y: 10.0 }, 800, 600);
        assert_eq!(p.x, 0.0);
    }
}
