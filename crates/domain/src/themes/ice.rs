//! Ice theme: slowing breath, shielding, and frost loot.

use crate::value_objects::{Ability, LootTable, Theme};

use super::ComponentFactory;

/// Component factory for ice-themed enemies
pub struct IceComponentFactory;

impl ComponentFactory for IceComponentFactory {
    fn theme(&self) -> Theme {
        Theme::Ice
    }

    fn create_abilities(&self) -> Vec<Ability> {
        vec![
            Ability::new(
                "Frost Breath",
                95,
                "Breathes freezing air, dealing AoE damage and slowing enemies.",
            ),
            Ability::new(
                "Ice Shield",
                0,
                "Forms an icy barrier that reduces incoming damage and hardens defense.",
            ),
        ]
    }

    fn create_loot_table(&self) -> LootTable {
        LootTable::new(
            vec![
                "Ice Gem".to_string(),
                "Frost Scale".to_string(),
                "Ice Rune".to_string(),
            ],
            450,
            1100,
        )
    }

    fn create_ai_behavior(&self) -> &'static str {
        "DEFENSIVE"
    }
}
