//! Step-wise enemy construction
//!
//! Builders accumulate parameters through chained setters and produce an
//! [`Enemy`] through a single validating [`EnemyBuilder::build`] call. A
//! successful build consumes the accumulated parameters and returns the
//! builder to its initial configuration, so one builder can be reused for
//! independent sequential builds. A failed build leaves the accumulated
//! state in place so the caller can correct it and retry.
//!
//! Nothing here is synchronized: one builder per logical construction task,
//! or external locking by the caller.

mod basic;
mod boss;
mod director;

pub use basic::BasicEnemyBuilder;
pub use boss::BossEnemyBuilder;
pub use director::EnemyDirector;

use crate::aggregates::Enemy;
use crate::error::DomainError;
use crate::value_objects::{Ability, LootTable};

/// Common fluent contract shared by all enemy builders
///
/// Setters return `&mut Self` for chaining. Abilities and loot tables are
/// accepted by value: once handed to the builder the caller holds no alias
/// to them, so a built enemy can never be altered retroactively through a
/// value the caller kept.
pub trait EnemyBuilder {
    fn set_name(&mut self, name: impl Into<String>) -> &mut Self;
    fn set_health(&mut self, health: i32) -> &mut Self;
    fn set_damage(&mut self, damage: i32) -> &mut Self;
    fn set_defense(&mut self, defense: i32) -> &mut Self;
    fn set_speed(&mut self, speed: i32) -> &mut Self;
    fn set_element(&mut self, element: impl Into<String>) -> &mut Self;
    fn set_ai_behavior(&mut self, ai_behavior: impl Into<String>) -> &mut Self;
    fn add_ability(&mut self, ability: Ability) -> &mut Self;
    fn set_abilities(&mut self, abilities: Vec<Ability>) -> &mut Self;
    fn add_phase(&mut self, phase: u32, threshold: i32) -> &mut Self;
    fn set_loot_table(&mut self, loot_table: LootTable) -> &mut Self;

    /// Validate the accumulated state, construct the enemy, and reset the
    /// builder to its initial configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when required fields are missing or
    /// out of range; the builder state is left untouched in that case.
    fn build(&mut self) -> Result<Enemy, DomainError>;
}
