use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its frame size in pixels and the
/// offset of the current frame inside the sheet.
///
/// The frame is stretched over the entity's [`Boundary`](crate::components::boundary::Boundary)
/// when drawn. `flip_h` mirrors it for fish facing left.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            flip_h: false,
        }
    }
}
