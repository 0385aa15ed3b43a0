//! Prototype registry for enemy templates.
//!
//! The registry stores fully built enemies under string keys and produces
//! new instances by cloning. Stored templates are never handed out by
//! value and never mutated: every read of a template yields a fresh deep
//! clone (see the clone contract on [`Enemy`]).

use std::collections::HashMap;

use crate::aggregates::Enemy;
use crate::common::is_blank;
use crate::error::DomainError;

/// Named store of enemy templates; reads always return clones
///
/// A plain associative store: each operation is atomic and independent, and
/// nothing here is synchronized (one registry per thread, or a lock around
/// it, is the caller's choice).
///
/// # Example
///
/// ```
/// use bestiary_domain::{BasicEnemyBuilder, EnemyBuilder, EnemyRegistry};
///
/// let template = BasicEnemyBuilder::new().set_name("Goblin").build().expect("valid");
/// let mut registry = EnemyRegistry::new();
/// registry.register_template("goblin", template).expect("registered");
///
/// let mut raider = registry.create_from_template("goblin").expect("cloned");
/// raider.multiply_stats(2.0);
///
/// // The stored template is unaffected by mutations of the clone.
/// assert_eq!(registry.view_templates()["goblin"].health(), 100);
/// assert_eq!(raider.health(), 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnemyRegistry {
    templates: HashMap<String, Enemy>,
}

impl EnemyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under a key, overwriting any previous template
    /// stored there.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the key is blank.
    pub fn register_template(
        &mut self,
        key: impl Into<String>,
        template: Enemy,
    ) -> Result<(), DomainError> {
        let key = key.into();
        if is_blank(&key) {
            return Err(DomainError::invalid_argument("Template key cannot be blank"));
        }
        self.templates.insert(key, template);
        Ok(())
    }

    /// Produce a new, fully independent enemy by cloning the template
    /// registered under `key`. The stored template is never returned
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTemplate` if no template is registered
    /// under `key`.
    pub fn create_from_template(&self, key: &str) -> Result<Enemy, DomainError> {
        self.templates
            .get(key)
            .cloned()
            .ok_or_else(|| DomainError::unknown_template(key))
    }

    /// Snapshot of all registered template keys.
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Read-only view of the stored templates.
    ///
    /// The shared borrow lets callers inspect template fields (e.g., to
    /// compare a template against its clones) without any way to mutate the
    /// registry through it.
    pub fn view_templates(&self) -> &HashMap<String, Enemy> {
        &self.templates
    }

    /// Check whether a template is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check whether the registry holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
