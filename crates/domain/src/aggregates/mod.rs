//! Aggregate roots - domain objects that own their related data
//!
//! The [`Enemy`] aggregate owns its abilities, loot table, and phase map
//! outright. Ownership is what makes the prototype contract cheap to honor:
//! a derived `Clone` of a fully-owning struct *is* the deep copy.

pub mod enemy;

pub use enemy::{BossTraits, Enemy, EnemyClass};
