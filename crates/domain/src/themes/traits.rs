//! The component factory trait.
//!
//! Defines the interface every theme implements, allowing builders, the
//! director, and callers to consume themed bundles without knowing which
//! theme they hold.

use crate::value_objects::{Ability, LootTable, Theme};

/// Factory for one theme's matched component bundle.
///
/// Every method is deterministic and pure, and every call returns freshly
/// constructed values - never shared or cached instances - so callers may
/// attach or modify the results without aliasing risk.
///
/// Implementations must keep all three outputs within [`ComponentFactory::theme`]:
/// a fire factory never hands out ice loot.
pub trait ComponentFactory: Send + Sync {
    /// The theme every output of this factory belongs to.
    fn theme(&self) -> Theme;

    /// Produce the theme's fixed ability set.
    fn create_abilities(&self) -> Vec<Ability>;

    /// Produce the theme's fixed loot table.
    fn create_loot_table(&self) -> LootTable;

    /// Produce the theme's default AI-behavior tag.
    fn create_ai_behavior(&self) -> &'static str;
}
