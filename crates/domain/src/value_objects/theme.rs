//! Theme - the closed set of elemental bundle identities
//!
//! A theme names a matched bundle of abilities, loot, and AI behavior. The
//! component factories in [`crate::themes`] guarantee that everything they
//! produce belongs to a single theme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A bundle identity guaranteeing matched abilities, loot, and behavior tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Fire,
    Ice,
    Shadow,
}

impl Theme {
    /// All built-in themes.
    pub fn all() -> [Theme; 3] {
        [Theme::Fire, Theme::Ice, Theme::Shadow]
    }

    /// The element tag carried by enemies of this theme.
    pub fn element_tag(&self) -> &'static str {
        match self {
            Self::Fire => "FIRE",
            Self::Ice => "ICE",
            Self::Shadow => "SHADOW",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire"),
            Self::Ice => write!(f, "Ice"),
            Self::Shadow => write!(f, "Shadow"),
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fire" => Ok(Self::Fire),
            "ice" => Ok(Self::Ice),
            "shadow" => Ok(Self::Shadow),
            other => Err(DomainError::parse(format!("Unknown theme: {}", other))),
        }
    }
}
