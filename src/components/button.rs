use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// What happens when a button is clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    StartGame,
    OpenMenu,
    QuitGame,
    /// Buy one fish of the named species.
    BuyFish(String),
}

/// Clickable rectangle in game (render target) coordinates.
#[derive(Component, Clone, Debug)]
pub struct Button {
    pub id: String,
    pub label: String,
    pub position: Vector2,
    pub size: Vector2,
    pub action: ButtonAction,
    /// Gold needed to press it, if any.
    pub price: Option<i64>,
    pub hovered: bool,
    pub enabled: bool,
}

impl Button {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        position: Vector2,
        size: Vector2,
        action: ButtonAction,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            size,
            action,
            price: None,
            hovered: false,
            enabled: true,
        }
    }

    pub fn with_price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle {
            x: self.position.x,
            y: self.position.y,
            width: self.size.x,
            height: self.size.y,
        }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y <= self.position.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let b = Button::new(
            "play",
            "Play",
            Vector2 { x: 10.0, y: 10.0 },
            Vector2 { x: 100.0, y: 40.0 },
            ButtonAction::StartGame,
        );
        assert!(b.contains(Vector2 { x: 10.0, y: 10.0 }));
        assert!(b.contains(Vector2 { x: 110.0, y: 50.0 }));
        assert!(!b.contains(Vector2 { x: 111.0, y: 30.0 }));
    }
}
