//! Value objects - Immutable objects defined by their attributes

mod ability;
mod loot_table;
mod names;
mod theme;

pub use ability::Ability;
pub use loot_table::LootTable;
pub use names::EnemyName;
pub use theme::Theme;
