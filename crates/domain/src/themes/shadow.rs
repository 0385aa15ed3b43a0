//! Shadow theme: burst damage, stealth, and dark loot.

use crate::value_objects::{Ability, LootTable, Theme};

use super::ComponentFactory;

/// Component factory for shadow-themed enemies
pub struct ShadowComponentFactory;

impl ComponentFactory for ShadowComponentFactory {
    fn theme(&self) -> Theme {
        Theme::Shadow
    }

    fn create_abilities(&self) -> Vec<Ability> {
        vec![
            Ability::new(
                "Shadow Strike",
                140,
                "Strikes from the shadows, dealing high damage and blinding the target.",
            ),
            Ability::new(
                "Vanish",
                0,
                "Turns invisible briefly, increasing evasion and avoiding incoming attacks.",
            ),
        ]
    }

    fn create_loot_table(&self) -> LootTable {
        LootTable::new(
            vec![
                "Shadow Gem".to_string(),
                "Dark Essence".to_string(),
                "Shadow Rune".to_string(),
            ],
            550,
            1300,
        )
    }

    fn create_ai_behavior(&self) -> &'static str {
        "TACTICAL"
    }
}
