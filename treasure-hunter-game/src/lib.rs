//! Treasure Hunter Game Engine
//!
//! Platform-agnostic town logic for the Treasure Hunter text adventure.
//! This crate resolves every in-town action into adventurer state changes
//! and an outcome message, without any console or platform dependencies.
//! Randomness is injected through [`Dice`] so callers pick the generator.

pub mod adventurer;
pub mod config;
mod constants;
pub mod dice;
pub mod expedition;
pub mod item;
pub mod message;
pub mod shop;
pub mod terrain;
pub mod town;
pub mod treasure;

// Re-export commonly used types
pub use adventurer::{Adventurer, Hunter};
pub use config::{ConfigError, Difficulty, DifficultyCfg, GameConfig, ShopCfg};
pub use dice::Dice;
pub use expedition::{Departure, Expedition, HunterTown, Standing};
pub use item::{Item, ParseItemError};
pub use message::{Message, Segment, Tone};
pub use shop::{GeneralStore, Receipt, Shop, ShopChoice, ShopError};
pub use terrain::{TERRAIN_COUNT, Terrain, TerrainKind};
pub use town::{BrawlOutcome, DigOutcome, HuntOutcome, Town};
pub use treasure::{CATALOG_SIZE, Find, TREASURE_CATALOG, Treasure};
