//! Relational role archetypes.

use serde::{Deserialize, Serialize};

/// The relational role the companion embodies for one relationship.
///
/// Closed set; adding an archetype is a compile-time-checked change that
/// forces every per-role rule (personality registry, ethics gate, tone
/// modulator) to take a position on the new role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleArchetype {
    Paternal,
    Maternal,
    /// Sibling / peer role.
    Sibling,
    Mentor,
    Friend,
    RomanticPartner,
    /// Caller-defined role; has no built-in personality profile.
    Custom,
}

impl RoleArchetype {
    /// Lowercase name used in prompts and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Paternal => "paternal",
            Self::Maternal => "maternal",
            Self::Sibling => "sibling",
            Self::Mentor => "mentor",
            Self::Friend => "friend",
            Self::RomanticPartner => "romantic_partner",
            Self::Custom => "custom",
        }
    }

    /// Parental roles share register and advice rules in the ethics gate.
    pub fn is_parental(self) -> bool {
        matches!(self, Self::Paternal | Self::Maternal)
    }

    /// Peer-like roles get the morning energize rule in the tone modulator.
    pub fn is_peer_like(self) -> bool {
        matches!(self, Self::Sibling | Self::Friend)
    }
}

impl std::fmt::Display for RoleArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
