//! Bestiary Domain - enemy construction and cloning.
//!
//! Three cooperating creational mechanisms produce [`Enemy`] values:
//!
//! - **Themed component factories** ([`themes`]) hand out internally
//!   consistent bundles of abilities, loot, and AI behavior.
//! - **Builders** ([`builders`]) accumulate parameters through chained
//!   setters and produce a validated enemy in a single `build()` call; the
//!   [`EnemyDirector`] layers fixed recipes on top.
//! - **The prototype registry** ([`registry`]) stores finished enemies as
//!   templates and stamps out independent deep clones on demand.
//!
//! Everything is synchronous and single-threaded; see the module docs for
//! the ownership rules that make clones aliasing-free.

pub mod aggregates;
pub mod builders;
pub mod common;
pub mod error;
pub mod registry;
pub mod themes;
pub mod value_objects;

pub use aggregates::{BossTraits, Enemy, EnemyClass};
pub use builders::{BasicEnemyBuilder, BossEnemyBuilder, EnemyBuilder, EnemyDirector};
pub use error::DomainError;
pub use registry::EnemyRegistry;
pub use themes::{
    ComponentFactory, FireComponentFactory, IceComponentFactory, ShadowComponentFactory,
};
pub use value_objects::{Ability, EnemyName, LootTable, Theme};
