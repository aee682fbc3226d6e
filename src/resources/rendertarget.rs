//! Render target resource for fixed-resolution rendering.
//!
//! The whole scene is drawn into a texture at the configured render size and
//! then scaled into the window with letterboxing (see
//! [`WindowSize::calculate_letterbox`](crate::resources::windowsize::WindowSize::calculate_letterbox)).

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Texture filtering mode for scaling the render target.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum RenderFilter {
    /// Nearest-neighbor, sharp pixels.
    Nearest,
    /// Smooth scaling.
    #[default]
    Bilinear,
}

/// Non-send: `RenderTexture2D` must stay on the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
    pub filter: RenderFilter,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        let mut target = Self {
            texture,
            game_width: width,
            game_height: height,
            filter: RenderFilter::default(),
        };
        target.apply_filter();
        Ok(target)
    }

    fn apply_filter(&mut self) {
        let filter_value = match self.filter {
            RenderFilter::Nearest => TextureFilter::TEXTURE_FILTER_POINT as i32,
            RenderFilter::Bilinear => TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
        };
        unsafe {
            ffi::SetTextureFilter(self.texture.texture, filter_value);
        }
    }

    /// Source rectangle with negative height: render textures are stored
    /// upside down.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
