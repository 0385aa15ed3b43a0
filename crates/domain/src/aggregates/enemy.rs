//! Enemy aggregate - the constructible, clonable entity
//!
//! # Invariants
//!
//! - `name` is always non-empty and <= 200 characters (enforced by [`EnemyName`])
//! - `health > 0` for every enemy produced by a builder
//! - Collections are exposed as shared borrows; the borrow checker makes it
//!   impossible to mutate internal state through an accessor, which replaces
//!   the defensive-copy getters a GC language would need here
//! - `Clone` is a deep copy: every field owns its storage, so a clone shares
//!   zero mutable substructure with its source
//!
//! # Lifecycle
//!
//! An enemy is created only by a builder's `build()` (the constructor is
//! crate-internal) or by cloning an existing enemy. Enemies are free-standing
//! values with no identity and no back-references.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{normalize_tag, scale_stat};
use crate::error::DomainError;
use crate::value_objects::{Ability, EnemyName, LootTable};

/// Element tag substituted when a caller clears the element.
const DEFAULT_ELEMENT: &str = "NONE";

/// Behavior tag substituted when a caller clears the AI tag on a built enemy.
const FALLBACK_AI_BEHAVIOR: &str = "AGGRESSIVE";

/// Classification of a constructed enemy
///
/// Minions carry an empty phase map and no boss traits; bosses carry both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnemyClass {
    Minion,
    Boss,
}

impl fmt::Display for EnemyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minion => write!(f, "Minion"),
            Self::Boss => write!(f, "Boss"),
        }
    }
}

impl FromStr for EnemyClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minion" => Ok(Self::Minion),
            "boss" => Ok(Self::Boss),
            other => Err(DomainError::parse(format!("Unknown enemy class: {}", other))),
        }
    }
}

/// Boss-only physical traits
///
/// A data-carrying struct with no invariants to protect: any combination of
/// values is valid, so the fields are public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossTraits {
    pub can_fly: bool,
    pub breath_attack: bool,
    pub wingspan: i32,
}

impl Default for BossTraits {
    fn default() -> Self {
        Self {
            can_fly: true,
            breath_attack: true,
            wingspan: 20,
        }
    }
}

/// A constructed enemy: stats, theme tags, abilities, loot, and boss phases
///
/// # Example
///
/// ```
/// use bestiary_domain::{BasicEnemyBuilder, EnemyBuilder};
///
/// let mut builder = BasicEnemyBuilder::new();
/// let goblin = builder.set_name("Goblin").build().expect("valid minion");
///
/// assert_eq!(goblin.name().as_str(), "Goblin");
/// assert_eq!(goblin.health(), 100);
/// assert!(goblin.phases().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    // Identity-free core attributes
    name: EnemyName,
    class: EnemyClass,

    // Stats
    health: i32,
    damage: i32,
    defense: i32,
    speed: i32,

    // Theme / behavior (uppercase tags)
    element: String,
    ai_behavior: String,

    // Owned components
    abilities: Vec<Ability>,
    loot_table: Option<LootTable>,

    // Boss phases: phase number -> health threshold (empty for minions)
    phases: BTreeMap<u32, i32>,

    // Present exactly for boss-built enemies
    boss_traits: Option<BossTraits>,
}

impl Enemy {
    /// Crate-internal constructor: enemies reach callers only through a
    /// builder's `build()` or by cloning an existing enemy.
    pub(crate) fn new(
        name: EnemyName,
        class: EnemyClass,
        health: i32,
        damage: i32,
        defense: i32,
        speed: i32,
        element: String,
        ai_behavior: String,
        abilities: Vec<Ability>,
        loot_table: Option<LootTable>,
        phases: BTreeMap<u32, i32>,
        boss_traits: Option<BossTraits>,
    ) -> Self {
        Self {
            name,
            class,
            health,
            damage,
            defense,
            speed,
            element,
            ai_behavior,
            abilities,
            loot_table,
            phases,
            boss_traits,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// Get the enemy's name.
    pub fn name(&self) -> &EnemyName {
        &self.name
    }

    /// Get the enemy's classification.
    pub fn class(&self) -> EnemyClass {
        self.class
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Get the element tag (uppercase, `"NONE"` when unthemed).
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Get the AI-behavior tag (uppercase).
    pub fn ai_behavior(&self) -> &str {
        &self.ai_behavior
    }

    /// Get the abilities, in insertion order (duplicates permitted).
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Get the loot table, if one has been attached.
    pub fn loot_table(&self) -> Option<&LootTable> {
        self.loot_table.as_ref()
    }

    /// Get the phase map: phase number -> health threshold.
    ///
    /// Empty for minions. The borrow is read-only; mutate phases through
    /// [`Enemy::add_phase`].
    pub fn phases(&self) -> &BTreeMap<u32, i32> {
        &self.phases
    }

    /// Get the boss traits; `None` for minions.
    pub fn boss_traits(&self) -> Option<BossTraits> {
        self.boss_traits
    }

    // =========================================================================
    // Variant helpers (used after cloning from a template)
    // =========================================================================

    /// Append an ability.
    ///
    /// Takes ownership: the caller hands the ability over and cannot retain
    /// an alias to it, which is what kept the original's clone-on-store rule
    /// honest.
    pub fn add_ability(&mut self, ability: Ability) {
        self.abilities.push(ability);
    }

    /// Replace the whole ability sequence.
    pub fn set_abilities(&mut self, abilities: Vec<Ability>) {
        self.abilities = abilities;
    }

    /// Attach a loot table, or clear it with `None`.
    pub fn set_loot_table(&mut self, loot_table: Option<LootTable>) {
        self.loot_table = loot_table;
    }

    /// Set the element tag. Trimmed and uppercased; blank input falls back
    /// to `"NONE"`.
    pub fn set_element(&mut self, element: &str) {
        self.element = normalize_tag(element, DEFAULT_ELEMENT);
    }

    /// Set the AI-behavior tag. Trimmed and uppercased; blank input falls
    /// back to `"AGGRESSIVE"`.
    pub fn set_ai_behavior(&mut self, ai_behavior: &str) {
        self.ai_behavior = normalize_tag(ai_behavior, FALLBACK_AI_BEHAVIOR);
    }

    /// Rescale health, damage, defense, and speed by `factor`, rounding each
    /// to the nearest integer. A factor of zero or below is a no-op on all
    /// four stats.
    pub fn multiply_stats(&mut self, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        self.health = scale_stat(self.health, factor);
        self.damage = scale_stat(self.damage, factor);
        self.defense = scale_stat(self.defense, factor);
        self.speed = scale_stat(self.speed, factor);
    }

    /// Add or overwrite a phase threshold.
    ///
    /// Non-positive phase numbers or thresholds are ignored. Meaningful for
    /// boss-class enemies; nothing prevents adding phases to a minion, but
    /// builders never do.
    pub fn add_phase(&mut self, phase: u32, threshold: i32) {
        if phase == 0 || threshold <= 0 {
            return;
        }
        self.phases.insert(phase, threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{BasicEnemyBuilder, BossEnemyBuilder, EnemyBuilder};

    fn default_minion(name: &str) -> Enemy {
        BasicEnemyBuilder::new()
            .set_name(name)
            .build()
            .expect("valid minion")
    }

    fn sample_boss() -> Enemy {
        BossEnemyBuilder::new()
            .set_name("Ancient Fire Dragon")
            .set_health(50000)
            .set_damage(550)
            .set_defense(260)
            .set_speed(55)
            .set_element("FIRE")
            .set_ai_behavior("AGGRESSIVE")
            .add_ability(Ability::new("Flame Breath", 120, "Cone of fire."))
            .add_ability(Ability::new("Fire Shield", 0, "Flaming barrier."))
            .set_loot_table(LootTable::new(vec!["Fire Gem".to_string()], 500, 1200))
            .build()
            .expect("valid boss")
    }

    #[test]
    fn minion_defaults_match_the_base_stat_block() {
        let goblin = default_minion("Goblin");
        assert_eq!(goblin.health(), 100);
        assert_eq!(goblin.damage(), 15);
        assert_eq!(goblin.defense(), 5);
        assert_eq!(goblin.speed(), 35);
        assert_eq!(goblin.element(), "NONE");
        assert_eq!(goblin.class(), EnemyClass::Minion);
        assert!(goblin.phases().is_empty());
        assert!(goblin.boss_traits().is_none());
        assert!(goblin.loot_table().is_none());
    }

    #[test]
    fn set_element_normalizes_and_falls_back() {
        let mut goblin = default_minion("Goblin");
        goblin.set_element("  fire ");
        assert_eq!(goblin.element(), "FIRE");
        goblin.set_element("");
        assert_eq!(goblin.element(), "NONE");
    }

    #[test]
    fn set_ai_behavior_normalizes_and_falls_back() {
        let mut goblin = default_minion("Goblin");
        goblin.set_ai_behavior("tactical");
        assert_eq!(goblin.ai_behavior(), "TACTICAL");
        goblin.set_ai_behavior("   ");
        assert_eq!(goblin.ai_behavior(), "AGGRESSIVE");
    }

    #[test]
    fn add_ability_appends_and_permits_duplicates() {
        let mut goblin = default_minion("Goblin");
        let stab = Ability::new("Stab", 10, "A quick stab.");
        goblin.add_ability(stab.clone());
        goblin.add_ability(stab);
        assert_eq!(goblin.abilities().len(), 2);
        assert_eq!(goblin.abilities()[0], goblin.abilities()[1]);
    }

    #[test]
    fn set_abilities_replaces_the_sequence() {
        let mut goblin = default_minion("Goblin");
        goblin.add_ability(Ability::new("Stab", 10, "A quick stab."));
        goblin.set_abilities(vec![Ability::new("Bite", 5, "Chomp.")]);
        assert_eq!(goblin.abilities().len(), 1);
        assert_eq!(goblin.abilities()[0].name(), "Bite");
    }

    #[test]
    fn set_loot_table_attaches_and_clears() {
        let mut goblin = default_minion("Goblin");
        goblin.set_loot_table(Some(LootTable::new(vec!["Rusty Knife".to_string()], 5, 10)));
        assert_eq!(goblin.loot_table().expect("loot").gold(), 5);
        goblin.set_loot_table(None);
        assert!(goblin.loot_table().is_none());
    }

    #[test]
    fn multiply_stats_rounds_each_stat() {
        let mut goblin = default_minion("Goblin");
        goblin.multiply_stats(2.0);
        assert_eq!(
            (
                goblin.health(),
                goblin.damage(),
                goblin.defense(),
                goblin.speed()
            ),
            (200, 30, 10, 70)
        );

        let mut other = default_minion("Goblin");
        other.multiply_stats(1.5);
        // 100*1.5=150, 15*1.5=22.5->23, 5*1.5=7.5->8, 35*1.5=52.5->53
        assert_eq!(
            (
                other.health(),
                other.damage(),
                other.defense(),
                other.speed()
            ),
            (150, 23, 8, 53)
        );
    }

    #[test]
    fn multiply_stats_ignores_non_positive_factors() {
        let mut goblin = default_minion("Goblin");
        goblin.multiply_stats(0.0);
        goblin.multiply_stats(-2.5);
        assert_eq!(goblin.health(), 100);
        assert_eq!(goblin.damage(), 15);
        assert_eq!(goblin.defense(), 5);
        assert_eq!(goblin.speed(), 35);
    }

    #[test]
    fn add_phase_guards_non_positive_input() {
        let mut boss = sample_boss();
        let before = boss.phases().clone();
        boss.add_phase(0, 1000);
        boss.add_phase(4, 0);
        boss.add_phase(4, -5);
        assert_eq!(boss.phases(), &before);

        boss.add_phase(4, 7500);
        assert_eq!(boss.phases().get(&4), Some(&7500));
        // Overwriting an existing phase is allowed.
        boss.add_phase(2, 25000);
        assert_eq!(boss.phases().get(&2), Some(&25000));
    }

    #[test]
    fn clone_shares_no_mutable_substructure() {
        let boss = sample_boss();
        let mut clone = boss.clone();

        clone.add_ability(Ability::new("Tail Swipe", 80, "Sweeps the arena."));
        clone.set_element("shadow");
        clone.multiply_stats(2.0);
        clone.add_phase(4, 9000);
        clone.set_loot_table(None);

        // The source is untouched by any mutation of the clone.
        assert_eq!(boss.abilities().len(), 2);
        assert_eq!(boss.element(), "FIRE");
        assert_eq!(boss.health(), 50000);
        assert_eq!(boss.phases().len(), 3);
        assert!(boss.loot_table().is_some());

        assert_eq!(clone.abilities().len(), 3);
        assert_eq!(clone.health(), 100000);
    }

    #[test]
    fn boss_carries_default_traits_and_phases() {
        let boss = sample_boss();
        assert_eq!(boss.class(), EnemyClass::Boss);
        let traits = boss.boss_traits().expect("boss traits");
        assert!(traits.can_fly);
        assert!(traits.breath_attack);
        assert_eq!(traits.wingspan, 20);
        assert_eq!(boss.phases().get(&1), Some(&50000));
    }

    #[test]
    fn enemy_class_parses_and_displays() {
        assert_eq!(
            "boss".parse::<EnemyClass>().expect("parses"),
            EnemyClass::Boss
        );
        assert_eq!(EnemyClass::Minion.to_string(), "Minion");
        assert!(matches!(
            "npc".parse::<EnemyClass>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn enemy_serde_round_trip_preserves_state() {
        let boss = sample_boss();
        let json = serde_json::to_string(&boss).expect("serialize");
        let back: Enemy = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.name().as_str(), boss.name().as_str());
        assert_eq!(back.health(), boss.health());
        assert_eq!(back.abilities(), boss.abilities());
        assert_eq!(back.phases(), boss.phases());
        assert_eq!(back.boss_traits(), boss.boss_traits());
    }
}
