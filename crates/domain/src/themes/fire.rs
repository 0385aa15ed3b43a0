//! Fire theme: heavy breath damage and burning loot.

use crate::value_objects::{Ability, LootTable, Theme};

use super::ComponentFactory;

/// Component factory for fire-themed enemies
///
/// # Example
///
/// ```
/// use bestiary_domain::{ComponentFactory, FireComponentFactory, Theme};
///
/// let factory = FireComponentFactory;
/// assert_eq!(factory.theme(), Theme::Fire);
/// assert_eq!(factory.create_ai_behavior(), "AGGRESSIVE");
/// ```
pub struct FireComponentFactory;

impl ComponentFactory for FireComponentFactory {
    fn theme(&self) -> Theme {
        Theme::Fire
    }

    fn create_abilities(&self) -> Vec<Ability> {
        vec![
            Ability::new(
                "Flame Breath",
                120,
                "Unleashes a cone of fire, dealing heavy AoE damage and burning enemies.",
            ),
            Ability::new(
                "Fire Shield",
                0,
                "Creates a flaming barrier that reduces incoming damage and burns attackers.",
            ),
        ]
    }

    fn create_loot_table(&self) -> LootTable {
        LootTable::new(
            vec![
                "Fire Gem".to_string(),
                "Dragon Scale".to_string(),
                "Flame Rune".to_string(),
            ],
            500,
            1200,
        )
    }

    fn create_ai_behavior(&self) -> &'static str {
        "AGGRESSIVE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_bundle_stays_in_theme() {
        let factory = FireComponentFactory;
        assert_eq!(factory.theme(), Theme::Fire);

        let abilities = factory.create_abilities();
        assert_eq!(abilities.len(), 2);
        assert_eq!(abilities[0].name(), "Flame Breath");
        assert_eq!(abilities[0].power(), 120);
        assert_eq!(abilities[1].name(), "Fire Shield");
        assert_eq!(abilities[1].power(), 0);

        let loot = factory.create_loot_table();
        assert_eq!(loot.items(), ["Fire Gem", "Dragon Scale", "Flame Rune"]);
        assert_eq!(loot.gold(), 500);
        assert_eq!(loot.experience(), 1200);

        assert_eq!(factory.create_ai_behavior(), "AGGRESSIVE");
    }

    #[test]
    fn every_call_returns_fresh_equal_values() {
        let factory = FireComponentFactory;
        assert_eq!(factory.create_abilities(), factory.create_abilities());
        assert_eq!(factory.create_loot_table(), factory.create_loot_table());
    }
}
