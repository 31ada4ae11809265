//! Kit items: the catalog of everything a hunter can carry.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Water,
    Rope,
    Machete,
    Horse,
    Boat,
    Boots,
    Shovel,
    Sword,
}

impl Item {
    pub const ALL: &'static [Self] = &[
        Self::Water,
        Self::Rope,
        Self::Machete,
        Self::Horse,
        Self::Boat,
        Self::Boots,
        Self::Shovel,
        Self::Sword,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Rope => "rope",
            Self::Machete => "machete",
            Self::Horse => "horse",
            Self::Boat => "boat",
            Self::Boots => "boots",
            Self::Shovel => "shovel",
            Self::Sword => "sword",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raised when text does not name a catalog item.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown item `{0}`")]
pub struct ParseItemError(pub String);

impl FromStr for Item {
    type Err = ParseItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|item| item.key() == wanted)
            .ok_or_else(|| ParseItemError(s.trim().to_string()))
    }
}
