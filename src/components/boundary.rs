//! Axis-aligned bounds of a tank occupant.
//!
//! Every pool member carries a [`Boundary`]: a top-left position and a size,
//! both in tank-local units. Distances between entities are measured between
//! boundary centers.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Boundary {
    /// Top-left corner in tank-local coordinates.
    pub pos: Vector2,
    pub size: Vector2,
}

impl Boundary {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
            size: Vector2 {
                x: width,
                y: height,
            },
        }
    }

    /// Build a boundary of the given size centered on `center`.
    pub fn centered_at(center: Vector2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width * 0.5,
            center.y - height * 0.5,
            width,
            height,
        )
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.pos.x + self.size.x * 0.5,
            y: self.pos.y + self.size.y * 0.5,
        }
    }

    pub fn translate(&mut self, delta: Vector2) {
        self.pos.x += delta.x;
        self.pos.y += delta.y;
    }

    /// Point containment, edges inclusive.
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size.y
    }

    /// Clamp the top-left corner so the whole box stays inside a
    /// `tank_width` x `tank_height` area.
    pub fn clamp_into(&mut self, tank_width: f32, tank_height: f32) {
        let max_x = (tank_width - self.size.x).max(0.0);
        let max_y = (tank_height - self.size.y).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Vector2, b: Vector2) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Displacement of at most `step` units from `from` towards `to`.
///
/// Returns a zero vector when both points coincide. Never overshoots.
pub fn step_towards(from: Vector2, to: Vector2, step: f32) -> Vector2 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = dx.hypot(dy);
    if len <= f32::EPSILON {
        return Vector2 { x: 0.0, y: 0.0 };
    }
    let travel = step.min(len);
    Vector2 {
        x: dx / len * travel,
        y: dy / len * travel,
    }
}
