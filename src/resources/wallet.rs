use bevy_ecs::prelude::Resource;

/// Player gold.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wallet {
    gold: i64,
}

impl Wallet {
    pub fn new(gold: i64) -> Self {
        Self { gold }
    }

    pub fn gold(&self) -> i64 {
        self.gold
    }

    pub fn credit(&mut self, amount: i64) {
        self.gold += amount;
    }

    /// Spend `amount` if the wallet can cover it. Returns false and leaves
    /// the balance untouched otherwise.
    pub fn try_spend(&mut self, amount: i64) -> bool {
        if amount > self.gold {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn can_afford(&self, amount: i64) -> bool {
        amount <= self.gold
    }

    pub fn reset(&mut self, gold: i64) {
        self.gold = gold;
    }
}
