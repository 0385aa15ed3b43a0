//! Preset enemy recipes
//!
//! [`EnemyDirector`] wraps one builder and exposes named recipes: canned
//! stat blocks combined with the abilities, loot, and behavior of a
//! caller-supplied component factory. The director holds no construction
//! logic of its own and never bypasses builder validation.
//!
//! Because `build()` resets the builder, multiple recipe calls on one
//! director are safe sequentially (and only sequentially; see the module
//! docs on [`crate::builders`]).

use crate::aggregates::Enemy;
use crate::error::DomainError;
use crate::themes::ComponentFactory;

use super::EnemyBuilder;

/// Fixed recipes layered over a builder plus a theme factory
///
/// # Example
///
/// ```
/// use bestiary_domain::{BossEnemyBuilder, EnemyDirector, ShadowComponentFactory};
///
/// let mut director = EnemyDirector::new(BossEnemyBuilder::new());
/// let raid_boss = director
///     .create_raid_boss(&ShadowComponentFactory)
///     .expect("valid boss");
///
/// assert_eq!(raid_boss.health(), 50000);
/// assert_eq!(raid_boss.ai_behavior(), "TACTICAL");
/// ```
pub struct EnemyDirector<B: EnemyBuilder> {
    builder: B,
}

impl<B: EnemyBuilder> EnemyDirector<B> {
    /// Create a director around the given builder.
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Weak fodder enemy: low stats, no phases.
    pub fn create_minion(&mut self, factory: &dyn ComponentFactory) -> Result<Enemy, DomainError> {
        self.builder
            .set_name("Minion")
            .set_health(60)
            .set_damage(8)
            .set_defense(3)
            .set_speed(30)
            .set_element("NONE")
            .set_ai_behavior(factory.create_ai_behavior())
            .set_abilities(factory.create_abilities())
            .set_loot_table(factory.create_loot_table())
            .build()
    }

    /// Hardened regular enemy: mid-tier stats, no phases.
    pub fn create_elite(&mut self, factory: &dyn ComponentFactory) -> Result<Enemy, DomainError> {
        self.builder
            .set_name("Elite")
            .set_health(200)
            .set_damage(35)
            .set_defense(20)
            .set_speed(25)
            .set_element("NONE")
            .set_ai_behavior(factory.create_ai_behavior())
            .set_abilities(factory.create_abilities())
            .set_loot_table(factory.create_loot_table())
            .build()
    }

    /// Mid-tier boss with a three-phase fight.
    pub fn create_mini_boss(
        &mut self,
        factory: &dyn ComponentFactory,
    ) -> Result<Enemy, DomainError> {
        self.builder
            .set_name("Mini Boss")
            .set_health(5000)
            .set_damage(160)
            .set_defense(80)
            .set_speed(40)
            .set_element("NONE")
            .set_ai_behavior(factory.create_ai_behavior())
            .set_abilities(factory.create_abilities())
            .set_loot_table(factory.create_loot_table())
            .add_phase(1, 5000)
            .add_phase(2, 3000)
            .add_phase(3, 1500)
            .build()
    }

    /// Top-tier boss with a three-phase fight.
    pub fn create_raid_boss(
        &mut self,
        factory: &dyn ComponentFactory,
    ) -> Result<Enemy, DomainError> {
        self.builder
            .set_name("Raid Boss")
            .set_health(50000)
            .set_damage(500)
            .set_defense(250)
            .set_speed(50)
            .set_element("NONE")
            .set_ai_behavior(factory.create_ai_behavior())
            .set_abilities(factory.create_abilities())
            .set_loot_table(factory.create_loot_table())
            .add_phase(1, 50000)
            .add_phase(2, 30000)
            .add_phase(3, 15000)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::EnemyClass;
    use crate::builders::{BasicEnemyBuilder, BossEnemyBuilder};
    use crate::themes::{FireComponentFactory, IceComponentFactory, ShadowComponentFactory};

    #[test]
    fn raid_boss_recipe_matches_its_stat_block() {
        let mut director = EnemyDirector::new(BossEnemyBuilder::new());
        let boss = director
            .create_raid_boss(&ShadowComponentFactory)
            .expect("valid boss");

        assert_eq!(boss.name().as_str(), "Raid Boss");
        assert_eq!(boss.health(), 50000);
        assert_eq!(boss.damage(), 500);
        assert_eq!(boss.defense(), 250);
        assert_eq!(boss.speed(), 50);
        assert_eq!(boss.class(), EnemyClass::Boss);
        assert_eq!(boss.phases().get(&1), Some(&50000));
        assert_eq!(boss.phases().get(&2), Some(&30000));
        assert_eq!(boss.phases().get(&3), Some(&15000));
        // Shadow components flow through unchanged.
        assert_eq!(boss.ai_behavior(), "TACTICAL");
        assert_eq!(boss.abilities().len(), 2);
        assert_eq!(boss.abilities()[0].name(), "Shadow Strike");
        let loot = boss.loot_table().expect("loot");
        assert!(loot.items().contains(&"Shadow Gem".to_string()));
    }

    #[test]
    fn mini_boss_recipe_matches_its_stat_block() {
        let mut director = EnemyDirector::new(BossEnemyBuilder::new());
        let boss = director
            .create_mini_boss(&FireComponentFactory)
            .expect("valid boss");

        assert_eq!(boss.name().as_str(), "Mini Boss");
        assert_eq!(boss.health(), 5000);
        assert_eq!(boss.damage(), 160);
        assert_eq!(boss.phases().get(&2), Some(&3000));
        assert_eq!(boss.ai_behavior(), "AGGRESSIVE");
    }

    #[test]
    fn minion_and_elite_recipes_work_on_the_basic_builder() {
        let mut director = EnemyDirector::new(BasicEnemyBuilder::new());

        let minion = director
            .create_minion(&IceComponentFactory)
            .expect("valid minion");
        assert_eq!(minion.health(), 60);
        assert_eq!(minion.damage(), 8);
        assert_eq!(minion.defense(), 3);
        assert_eq!(minion.speed(), 30);
        assert_eq!(minion.class(), EnemyClass::Minion);
        assert!(minion.phases().is_empty());
        assert_eq!(minion.ai_behavior(), "DEFENSIVE");

        let elite = director
            .create_elite(&IceComponentFactory)
            .expect("valid minion");
        assert_eq!(elite.health(), 200);
        assert_eq!(elite.damage(), 35);
        assert_eq!(elite.defense(), 20);
        assert_eq!(elite.speed(), 25);
    }

    #[test]
    fn sequential_recipes_on_one_director_are_independent() {
        let mut director = EnemyDirector::new(BossEnemyBuilder::new());

        let first = director
            .create_raid_boss(&FireComponentFactory)
            .expect("valid boss");
        let second = director
            .create_mini_boss(&ShadowComponentFactory)
            .expect("valid boss");

        // Nothing from the raid boss leaked into the mini boss.
        assert_eq!(second.health(), 5000);
        assert_eq!(second.phases().get(&1), Some(&5000));
        assert_eq!(second.ai_behavior(), "TACTICAL");
        assert_eq!(first.health(), 50000);
    }

    #[test]
    fn recipes_accept_any_theme_factory() {
        let mut director = EnemyDirector::new(BossEnemyBuilder::new());
        for factory in [
            &FireComponentFactory as &dyn ComponentFactory,
            &IceComponentFactory,
            &ShadowComponentFactory,
        ] {
            let boss = director.create_raid_boss(factory).expect("valid boss");
            assert_eq!(boss.ai_behavior(), factory.create_ai_behavior());
            assert_eq!(boss.abilities(), factory.create_abilities());
        }
    }
}
