//! Boss construction
//!
//! [`BossEnemyBuilder`] produces boss-class enemies carrying a phase map and
//! boss traits. Bosses are the reason the builder exists: the parameter
//! surface is too wide for a constructor.

use std::collections::BTreeMap;
use std::mem;

use crate::aggregates::{BossTraits, Enemy, EnemyClass};
use crate::common::{normalize_tag, scale_stat};
use crate::error::DomainError;
use crate::value_objects::{Ability, EnemyName, LootTable};

use super::EnemyBuilder;

const DEFAULT_AI_BEHAVIOR: &str = "BOSS";
const DEFAULT_ELEMENT: &str = "NONE";

/// Phase-two threshold as a share of full health.
const PHASE_TWO_SHARE: f64 = 0.6;
/// Phase-three threshold as a share of full health.
const PHASE_THREE_SHARE: f64 = 0.3;

/// Builder for boss-class enemies
///
/// # Validation
///
/// `build` requires a non-blank name, strictly positive health, and
/// non-negative damage/defense/speed.
///
/// # Phase defaulting
///
/// Explicitly added phases are kept as given. For phases 1-3 that were not
/// set, thresholds are synthesized from health: full, 60% and 30% (each
/// rounded, clamped to at least 1). Phases beyond 3 exist only if added.
///
/// # Example
///
/// ```
/// use bestiary_domain::{BossEnemyBuilder, EnemyBuilder};
///
/// let mut builder = BossEnemyBuilder::new();
/// let dragon = builder
///     .set_name("Ancient Fire Dragon")
///     .set_health(50000)
///     .build()
///     .expect("valid boss");
///
/// assert_eq!(dragon.phases().get(&1), Some(&50000));
/// assert_eq!(dragon.phases().get(&2), Some(&30000));
/// assert_eq!(dragon.phases().get(&3), Some(&15000));
/// ```
#[derive(Debug)]
pub struct BossEnemyBuilder {
    name: Option<String>,
    health: Option<i32>,
    damage: i32,
    defense: i32,
    speed: i32,
    element: String,
    ai_behavior: String,
    abilities: Vec<Ability>,
    loot_table: Option<LootTable>,
    phases: BTreeMap<u32, i32>,
    can_fly: bool,
    breath_attack: bool,
    wingspan: i32,
}

impl Default for BossEnemyBuilder {
    fn default() -> Self {
        let traits = BossTraits::default();
        Self {
            name: None,
            health: None,
            damage: 0,
            defense: 0,
            speed: 0,
            element: DEFAULT_ELEMENT.to_string(),
            ai_behavior: DEFAULT_AI_BEHAVIOR.to_string(),
            abilities: Vec::new(),
            loot_table: None,
            phases: BTreeMap::new(),
            can_fly: traits.can_fly,
            breath_attack: traits.breath_attack,
            wingspan: traits.wingspan,
        }
    }
}

impl BossEnemyBuilder {
    /// Create a builder in its initial configuration.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Boss-specific fluent extensions (not part of the common contract)
    // -------------------------------------------------------------------------

    /// Set whether the boss can fly (default: true).
    pub fn set_can_fly(&mut self, can_fly: bool) -> &mut Self {
        self.can_fly = can_fly;
        self
    }

    /// Set whether the boss has a breath attack (default: true).
    pub fn set_breath_attack(&mut self, breath_attack: bool) -> &mut Self {
        self.breath_attack = breath_attack;
        self
    }

    /// Set the boss wingspan (default: 20).
    pub fn set_wingspan(&mut self, wingspan: i32) -> &mut Self {
        self.wingspan = wingspan;
        self
    }
}

impl EnemyBuilder for BossEnemyBuilder {
    fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    fn set_health(&mut self, health: i32) -> &mut Self {
        self.health = Some(health);
        self
    }

    fn set_damage(&mut self, damage: i32) -> &mut Self {
        self.damage = damage;
        self
    }

    fn set_defense(&mut self, defense: i32) -> &mut Self {
        self.defense = defense;
        self
    }

    fn set_speed(&mut self, speed: i32) -> &mut Self {
        self.speed = speed;
        self
    }

    fn set_element(&mut self, element: impl Into<String>) -> &mut Self {
        self.element = element.into();
        self
    }

    fn set_ai_behavior(&mut self, ai_behavior: impl Into<String>) -> &mut Self {
        self.ai_behavior = ai_behavior.into();
        self
    }

    fn add_ability(&mut self, ability: Ability) -> &mut Self {
        self.abilities.push(ability);
        self
    }

    fn set_abilities(&mut self, abilities: Vec<Ability>) -> &mut Self {
        self.abilities = abilities;
        self
    }

    fn add_phase(&mut self, phase: u32, threshold: i32) -> &mut Self {
        // Same guards as the enemy mutator: zero thresholds would mark
        // phases that can never trigger.
        if phase > 0 && threshold > 0 {
            self.phases.insert(phase, threshold);
        }
        self
    }

    fn set_loot_table(&mut self, loot_table: LootTable) -> &mut Self {
        self.loot_table = Some(loot_table);
        self
    }

    fn build(&mut self) -> Result<Enemy, DomainError> {
        let name = EnemyName::new(self.name.clone().unwrap_or_default())?;
        let health = self.health.unwrap_or(0);
        if health <= 0 {
            return Err(DomainError::validation("Boss health must be positive"));
        }
        if self.damage < 0 || self.defense < 0 || self.speed < 0 {
            return Err(DomainError::validation("Boss stats cannot be negative"));
        }

        let state = mem::take(self);

        let mut phases = state.phases;
        phases.entry(1).or_insert(health);
        phases
            .entry(2)
            .or_insert_with(|| scale_stat(health, PHASE_TWO_SHARE).max(1));
        phases
            .entry(3)
            .or_insert_with(|| scale_stat(health, PHASE_THREE_SHARE).max(1));

        Ok(Enemy::new(
            name,
            EnemyClass::Boss,
            health,
            state.damage,
            state.defense,
            state.speed,
            normalize_tag(&state.element, DEFAULT_ELEMENT),
            normalize_tag(&state.ai_behavior, DEFAULT_AI_BEHAVIOR),
            state.abilities,
            state.loot_table,
            phases,
            Some(BossTraits {
                can_fly: state.can_fly,
                breath_attack: state.breath_attack,
                wingspan: state.wingspan,
            }),
        ))
    }
}
