//! Coins dropped by economic fish.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinKind {
    Silver,
    Gold,
    Diamond,
}

impl CoinKind {
    /// Gold credited to the wallet when collected.
    pub fn value(self) -> i64 {
        match self {
            CoinKind::Silver => 15,
            CoinKind::Gold => 35,
            CoinKind::Diamond => 200,
        }
    }

    /// Animation key of the spinning coin strip.
    pub fn animation_key(self) -> &'static str {
        match self {
            CoinKind::Silver => "coin/silver",
            CoinKind::Gold => "coin/gold",
            CoinKind::Diamond => "coin/diamond",
        }
    }

    /// Row of this coin in the shared coin sprite sheet.
    pub fn sheet_row(self) -> u32 {
        match self {
            CoinKind::Silver => 0,
            CoinKind::Gold => 1,
            CoinKind::Diamond => 2,
        }
    }

    pub const ALL: [CoinKind; 3] = [CoinKind::Silver, CoinKind::Gold, CoinKind::Diamond];
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Coin {
    pub kind: CoinKind,
    /// Seconds left on the tank floor before the coin is lost.
    pub rest_remaining: f32,
}

impl Coin {
    pub fn new(kind: CoinKind, rest_time: f32) -> Self {
        Self {
            kind,
            rest_remaining: rest_time,
        }
    }

    pub fn value(&self) -> i64 {
        self.kind.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_values_are_ordered() {
        assert!(CoinKind::Silver.value() < CoinKind::Gold.value());
        assert!(CoinKind::Gold.value() < CoinKind::Diamond.value());
    }

    #[test]
    fn coin_kind_serializes_lowercase() {
        let json = serde_json::to_string(&CoinKind::Diamond).unwrap();
        assert_eq!(json, "\"diamond\"");
        let back: CoinKind = serde_json::from_str("\"silver\"").unwrap();
        assert_eq!(back, CoinKind::Silver);
    }
}
