//! LootTable - drop-table descriptors
//!
//! A [`LootTable`] is an immutable value object with the same clone contract
//! as [`Ability`](crate::Ability): a clone owns all of its storage and shares
//! nothing with the original.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an enemy drops when defeated: items, gold, and experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootTable {
    /// Ordered item names, theme-specific
    items: Vec<String>,
    gold: u32,
    experience: u32,
}

impl LootTable {
    /// Create a new loot table.
    ///
    /// # Example
    ///
    /// ```
    /// use bestiary_domain::LootTable;
    ///
    /// let loot = LootTable::new(vec!["Fire Gem".to_string()], 500, 1200);
    /// assert_eq!(loot.items(), ["Fire Gem"]);
    /// assert_eq!(loot.gold(), 500);
    /// ```
    pub fn new(items: Vec<String>, gold: u32, experience: u32) -> Self {
        Self {
            items,
            gold,
            experience,
        }
    }

    /// Get the possible item drops, in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Get the gold dropped by the enemy.
    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Get the experience dropped by the enemy.
    pub fn experience(&self) -> u32 {
        self.experience
    }
}

impl fmt::Display for LootTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Items={:?}, Gold={}, EXP={}",
            self.items, self.gold, self.experience
        )
    }
}
