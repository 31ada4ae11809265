//! Terrain surrounding a town and the item needed to cross it.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dice::Dice;
use crate::item::Item;
use crate::message::{Message, Tone};

/// Number of terrains in the catalog.
pub const TERRAIN_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainKind {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl TerrainKind {
    pub const ALL: &'static [Self; TERRAIN_COUNT] = &[
        Self::Mountains,
        Self::Ocean,
        Self::Plains,
        Self::Desert,
        Self::Jungle,
        Self::Marsh,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mountains => "Mountains",
            Self::Ocean => "Ocean",
            Self::Plains => "Plains",
            Self::Desert => "Desert",
            Self::Jungle => "Jungle",
            Self::Marsh => "Marsh",
        }
    }

    #[must_use]
    pub const fn required_item(self) -> Item {
        match self {
            Self::Mountains => Item::Rope,
            Self::Ocean => Item::Boat,
            Self::Plains => Item::Horse,
            Self::Desert => Item::Water,
            Self::Jungle => Item::Machete,
            Self::Marsh => Item::Boots,
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Mountains => Tone::Snow,
            Self::Ocean => Tone::Water,
            Self::Plains | Self::Desert => Tone::Sand,
            Self::Jungle | Self::Marsh => Tone::Foliage,
        }
    }
}

/// Immutable obstacle descriptor owned by a single town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    kind: TerrainKind,
}

impl Terrain {
    #[must_use]
    pub const fn new(kind: TerrainKind) -> Self {
        Self { kind }
    }

    /// Pick one of the six catalog terrains with equal weight.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    pub fn random(dice: &mut impl Dice) -> Self {
        let index = dice.roll_range(0..=TERRAIN_COUNT as i32 - 1) as usize;
        let kind = TerrainKind::ALL[index];
        debug!("terrain roll {index} selected {}", kind.name());
        Self { kind }
    }

    #[must_use]
    pub const fn kind(&self) -> TerrainKind {
        self.kind
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn required_item(&self) -> Item {
        self.kind.required_item()
    }

    /// Terrain name as a single toned segment.
    #[must_use]
    pub fn label(&self) -> Message {
        Message::new().with(self.name(), self.kind.tone())
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
