//! Game configuration: difficulty presets and store pricing.
//!
//! Defaults live in code; a JSON document may override any part of them.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::DEFAULT_SELL_MARKDOWN;
use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Samurai,
}

impl Difficulty {
    pub const ALL: &'static [Self] = &[Self::Easy, Self::Normal, Self::Hard, Self::Samurai];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Samurai => "samurai",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json")]
    Json(#[from] serde_json::Error),
    #[error("{difficulty} toughness must be between 0 and 1 (got {value})")]
    Toughness { difficulty: Difficulty, value: f64 },
    #[error("price for {item} must not be negative (got {price})")]
    NegativePrice { item: Item, price: i32 },
    #[error("sell markdown must be between 0 and 1 (got {0})")]
    Markdown(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCfg {
    /// Probability that a generated town is tough.
    pub toughness: f64,
    pub starting_gold: i32,
    #[serde(default)]
    pub easy_mode: bool,
    #[serde(default)]
    pub starting_kit: Vec<Item>,
}

impl DifficultyCfg {
    const fn preset(toughness: f64, starting_gold: i32, easy_mode: bool) -> Self {
        Self {
            toughness,
            starting_gold,
            easy_mode,
            starting_kit: Vec::new(),
        }
    }
}

/// Per-difficulty override as read from JSON; absent fields keep the preset.
#[derive(Debug, Default, Deserialize)]
struct DifficultyPatch {
    toughness: Option<f64>,
    starting_gold: Option<i32>,
    easy_mode: Option<bool>,
    starting_kit: Option<Vec<Item>>,
}

impl DifficultyPatch {
    fn apply(self, preset: DifficultyCfg) -> DifficultyCfg {
        DifficultyCfg {
            toughness: self.toughness.unwrap_or(preset.toughness),
            starting_gold: self.starting_gold.unwrap_or(preset.starting_gold),
            easy_mode: self.easy_mode.unwrap_or(preset.easy_mode),
            starting_kit: self.starting_kit.unwrap_or(preset.starting_kit),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct DifficultyTablePatch {
    #[serde(default)]
    easy: DifficultyPatch,
    #[serde(default)]
    normal: DifficultyPatch,
    #[serde(default)]
    hard: DifficultyPatch,
    #[serde(default)]
    samurai: DifficultyPatch,
}

impl From<DifficultyTablePatch> for DifficultyTable {
    fn from(patch: DifficultyTablePatch) -> Self {
        Self {
            easy: patch.easy.apply(Self::default_easy()),
            normal: patch.normal.apply(Self::default_normal()),
            hard: patch.hard.apply(Self::default_hard()),
            samurai: patch.samurai.apply(Self::default_samurai()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DifficultyTablePatch")]
pub struct DifficultyTable {
    pub easy: DifficultyCfg,
    pub normal: DifficultyCfg,
    pub hard: DifficultyCfg,
    pub samurai: DifficultyCfg,
}

impl DifficultyTable {
    fn default_easy() -> DifficultyCfg {
        DifficultyCfg::preset(0.2, 20, true)
    }

    fn default_normal() -> DifficultyCfg {
        DifficultyCfg::preset(0.4, 10, false)
    }

    fn default_hard() -> DifficultyCfg {
        DifficultyCfg::preset(0.75, 10, false)
    }

    fn default_samurai() -> DifficultyCfg {
        DifficultyCfg {
            starting_kit: vec![Item::Sword],
            ..DifficultyCfg::preset(0.4, 10, false)
        }
    }

    #[must_use]
    pub const fn get(&self, difficulty: Difficulty) -> &DifficultyCfg {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
            Difficulty::Samurai => &self.samurai,
        }
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: Self::default_easy(),
            normal: Self::default_normal(),
            hard: Self::default_hard(),
            samurai: Self::default_samurai(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCfg {
    #[serde(default = "ShopCfg::default_prices")]
    pub prices: BTreeMap<Item, i32>,
    /// Fraction of the list price paid when buying items back.
    #[serde(default = "ShopCfg::default_sell_markdown")]
    pub sell_markdown: f64,
}

impl ShopCfg {
    fn default_prices() -> BTreeMap<Item, i32> {
        BTreeMap::from([
            (Item::Water, 2),
            (Item::Rope, 4),
            (Item::Machete, 6),
            (Item::Horse, 12),
            (Item::Boat, 20),
            (Item::Boots, 5),
            (Item::Shovel, 8),
        ])
    }

    const fn default_sell_markdown() -> f64 {
        DEFAULT_SELL_MARKDOWN
    }
}

impl Default for ShopCfg {
    fn default() -> Self {
        Self {
            prices: Self::default_prices(),
            sell_markdown: Self::default_sell_markdown(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub difficulties: DifficultyTable,
    #[serde(default)]
    pub shop: ShopCfg,
}

impl GameConfig {
    /// Get default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`GameConfig::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &difficulty in Difficulty::ALL {
            let value = self.difficulties.get(difficulty).toughness;
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Toughness { difficulty, value });
            }
        }
        if let Some((&item, &price)) = self.shop.prices.iter().find(|(_, price)| **price < 0) {
            return Err(ConfigError::NegativePrice { item, price });
        }
        if !(0.0..=1.0).contains(&self.shop.sell_markdown) {
            return Err(ConfigError::Markdown(self.shop.sell_markdown));
        }
        Ok(())
    }

    #[must_use]
    pub const fn difficulty(&self, difficulty: Difficulty) -> &DifficultyCfg {
        self.difficulties.get(difficulty)
    }
}
