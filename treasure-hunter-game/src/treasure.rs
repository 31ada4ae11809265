//! Treasure kinds and the hunt catalog.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
}

impl Treasure {
    pub const ALL: &'static [Self] = &[Self::Crown, Self::Trophy, Self::Gem];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Crown => "a crown",
            Self::Trophy => "a trophy",
            Self::Gem => "a gem",
        }
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry in the hunt catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Find {
    Treasure(Treasure),
    /// Nothing of value.
    Dust,
}

impl Find {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Treasure(treasure) => treasure.name(),
            Self::Dust => "dust",
        }
    }
}

/// Number of entries a hunt roll chooses between.
pub const CATALOG_SIZE: usize = 4;

/// Hunt outcomes in roll order; the last entry is the empty find.
pub const TREASURE_CATALOG: [Find; CATALOG_SIZE] = [
    Find::Treasure(Treasure::Crown),
    Find::Treasure(Treasure::Trophy),
    Find::Treasure(Treasure::Gem),
    Find::Dust,
];

/// Map a 1-based hunt roll onto the catalog.
#[must_use]
pub fn find_for_roll(roll: i32) -> Find {
    usize::try_from(roll - 1)
        .ok()
        .and_then(|index| TREASURE_CATALOG.get(index))
        .copied()
        .unwrap_or(Find::Dust)
}
