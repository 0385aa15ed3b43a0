//! Ability - named combat action descriptors
//!
//! An [`Ability`] is an immutable value object. Cloning one yields a fully
//! independent copy: every field owns its storage, so a clone shares no
//! backing state with the original.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named combat action an enemy can perform
///
/// `power` is the base damage contribution of the action; defensive and
/// utility abilities carry a power of zero. Non-negativity is enforced by
/// construction through the unsigned type, so there are no error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    name: String,
    power: u32,
    description: String,
}

impl Ability {
    /// Create a new ability.
    ///
    /// # Example
    ///
    /// ```
    /// use bestiary_domain::Ability;
    ///
    /// let breath = Ability::new("Flame Breath", 120, "Cone of fire.");
    /// assert_eq!(breath.name(), "Flame Breath");
    /// assert_eq!(breath.power(), 120);
    /// ```
    pub fn new(name: impl Into<String>, power: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power,
            description: description.into(),
        }
    }

    /// Get the ability name (e.g., "Flame Breath").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the base power of the ability.
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Get the description of the effect.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_accessors_return_field_values() {
        let ability = Ability::new("Shadow Strike", 140, "Strikes from the shadows.");
        assert_eq!(ability.name(), "Shadow Strike");
        assert_eq!(ability.power(), 140);
        assert_eq!(ability.description(), "Strikes from the shadows.");
    }

    #[test]
    fn ability_clone_is_field_for_field_equal() {
        let original = Ability::new("Vanish", 0, "Turns invisible briefly.");
        let copy = original.clone();
        assert_eq!(original, copy);
    }

    #[test]
    fn ability_display_shows_name_and_power() {
        let ability = Ability::new("Frost Breath", 95, "Breathes freezing air.");
        assert_eq!(ability.to_string(), "Frost Breath (95)");
    }

    #[test]
    fn ability_serde_round_trip() {
        let ability = Ability::new("Fire Shield", 0, "Creates a flaming barrier.");
        let json = serde_json::to_string(&ability).expect("serialize");
        assert!(json.contains("\"name\":\"Fire Shield\""));
        let back: Ability = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(ability, back);
    }
}
