//! Escalation tiers
//!
//! A reply names direct owners first, then optionally falls back to the
//! wider circles of a group. Each tier contributes its own contact set.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ContactSet;

/// A circle of contacts, in escalation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Direct owners of the changed files or the repository
    Owners,
    /// Group maintainers
    Maintainers,
    /// Group committers
    Committers,
}

impl Tier {
    /// All tiers in escalation order
    pub const ALL: [Self; 3] = [Self::Owners, Self::Maintainers, Self::Committers];

    /// Wording used in the reply
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Owners => "owner",
            Self::Maintainers => "maintainers",
            Self::Committers => "committers",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owners => write!(f, "owners"),
            Self::Maintainers => write!(f, "maintainers"),
            Self::Committers => write!(f, "committers"),
        }
    }
}

/// Contact sets per tier, iterated in escalation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Escalation {
    tiers: BTreeMap<Tier, ContactSet>,
}

impl Escalation {
    /// Escalation with only direct owners
    #[must_use]
    pub fn with_owners(owners: ContactSet) -> Self {
        let mut escalation = Self::default();
        escalation.set(Tier::Owners, owners);
        escalation
    }

    /// Replace the contacts of a tier
    pub fn set(&mut self, tier: Tier, contacts: ContactSet) {
        self.tiers.insert(tier, contacts);
    }

    /// Contacts of a tier, `None` if never set
    #[must_use]
    pub fn get(&self, tier: Tier) -> Option<&ContactSet> {
        self.tiers.get(&tier)
    }

    /// Direct owners
    #[must_use]
    pub fn owners(&self) -> Option<&ContactSet> {
        self.get(Tier::Owners)
    }

    /// Tiers in escalation order
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &ContactSet)> {
        self.tiers.iter().map(|(tier, set)| (*tier, set))
    }
}
