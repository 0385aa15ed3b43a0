//! Minion construction
//!
//! [`BasicEnemyBuilder`] produces minion-class enemies. Only the name is
//! required; everything else falls back to a base stat block that scales
//! proportionally when a health target is supplied.

use std::collections::BTreeMap;
use std::mem;

use crate::aggregates::{Enemy, EnemyClass};
use crate::common::{normalize_tag, scale_stat};
use crate::error::DomainError;
use crate::value_objects::{Ability, EnemyName, LootTable};

use super::EnemyBuilder;

/// Base minion stat block; scaled proportionally when health is overridden.
const DEFAULT_HEALTH: i32 = 100;
const DEFAULT_DAMAGE: i32 = 15;
const DEFAULT_DEFENSE: i32 = 5;
const DEFAULT_SPEED: i32 = 35;

const DEFAULT_AI_BEHAVIOR: &str = "BASIC";
const DEFAULT_ELEMENT: &str = "NONE";

/// Builder for minion-class enemies
///
/// # Defaulting rules
///
/// - No explicit health: the base stat block (100 / 15 / 5 / 35) is used
///   as-is.
/// - Explicit positive health: the base block is scaled proportionally
///   (`round(base * health / 100)`), then health lands exactly as requested.
///   Non-positive explicit health is ignored.
/// - Explicit damage/defense/speed override the (possibly scaled) defaults
///   individually.
/// - Phases accepted through [`EnemyBuilder::add_phase`] are dropped:
///   minions never carry a phase map.
///
/// # Example
///
/// ```
/// use bestiary_domain::{BasicEnemyBuilder, EnemyBuilder};
///
/// let mut builder = BasicEnemyBuilder::new();
/// let scout = builder
///     .set_name("Goblin Scout")
///     .set_health(200)
///     .build()
///     .expect("valid minion");
///
/// assert_eq!(scout.health(), 200);
/// assert_eq!(scout.damage(), 30); // 15 scaled by 2.0
/// ```
#[derive(Debug)]
pub struct BasicEnemyBuilder {
    name: Option<String>,
    health: Option<i32>,
    damage: Option<i32>,
    defense: Option<i32>,
    speed: Option<i32>,
    element: String,
    ai_behavior: String,
    abilities: Vec<Ability>,
    loot_table: Option<LootTable>,
}

impl Default for BasicEnemyBuilder {
    fn default() -> Self {
        Self {
            name: None,
            health: None,
            damage: None,
            defense: None,
            speed: None,
            element: DEFAULT_ELEMENT.to_string(),
            ai_behavior: DEFAULT_AI_BEHAVIOR.to_string(),
            abilities: Vec::new(),
            loot_table: None,
        }
    }
}

impl BasicEnemyBuilder {
    /// Create a builder in its initial configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnemyBuilder for BasicEnemyBuilder {
    fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    fn set_health(&mut self, health: i32) -> &mut Self {
        self.health = Some(health);
        self
    }

    fn set_damage(&mut self, damage: i32) -> &mut Self {
        self.damage = Some(damage);
        self
    }

    fn set_defense(&mut self, defense: i32) -> &mut Self {
        self.defense = Some(defense);
        self
    }

    fn set_speed(&mut self, speed: i32) -> &mut Self {
        self.speed = Some(speed);
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

    fn add_phase(&mut self, _phase: u32, _threshold: i32) -> &mut Self {
        // Accepted for contract parity; minions are built without phases.
        self
    }

    fn set_loot_table(&mut self, loot_table: LootTable) -> &mut Self {
        self.loot_table = Some(loot_table);
        self
    }

    fn build(&mut self) -> Result<Enemy, DomainError> {
        let name = EnemyName::new(self.name.clone().unwrap_or_default())?;
        let state = mem::take(self);

        let (health, mut damage, mut defense, mut speed) = match state.health {
            Some(h) if h > 0 => {
                let factor = f64::from(h) / f64::from(DEFAULT_HEALTH);
                (
                    h,
                    scale_stat(DEFAULT_DAMAGE, factor),
                    scale_stat(DEFAULT_DEFENSE, factor),
                    scale_stat(DEFAULT_SPEED, factor),
                )
            }
            _ => (DEFAULT_HEALTH, DEFAULT_DAMAGE, DEFAULT_DEFENSE, DEFAULT_SPEED),
        };
        if let Some(d) = state.damage {
            damage = d;
        }
        if let Some(d) = state.defense {
            defense = d;
        }
        if let Some(s) = state.speed {
            speed = s;
        }

        Ok(Enemy::new(
            name,
            EnemyClass::Minion,
            health,
            damage,
            defense,
            speed,
            normalize_tag(&state.element, DEFAULT_ELEMENT),
            normalize_tag(&state.ai_behavior, DEFAULT_AI_BEHAVIOR),
            state.abilities,
            state.loot_table,
            BTreeMap::new(),
            None,
        ))
    }
}
