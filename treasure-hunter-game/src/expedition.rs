//! A hunter's run from town to town.
use log::info;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::adventurer::Hunter;
use crate::config::{Difficulty, DifficultyCfg, GameConfig};
use crate::dice::Dice;
use crate::message::Message;
use crate::shop::GeneralStore;
use crate::town::Town;

pub type HunterTown = Town<GeneralStore, Hunter>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Exploring,
    /// Holds every treasure kind.
    Won,
    /// Gold fell below zero.
    Broke,
}

/// Result of trying to move on to the next town.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub crossed: bool,
    pub message: Message,
}

pub struct Expedition {
    config: GameConfig,
    difficulty: Difficulty,
    hunter: Rc<RefCell<Hunter>>,
    town: HunterTown,
    towns_visited: u32,
}

impl Expedition {
    /// Outfit a hunter for `difficulty` and arrive in the first town.
    pub fn start(
        name: impl Into<String>,
        difficulty: Difficulty,
        config: GameConfig,
        dice: &mut impl Dice,
    ) -> Self {
        let preset = config.difficulty(difficulty);
        let hunter = Hunter::new(name, preset.starting_gold)
            .with_kit(preset.starting_kit.iter().copied());
        let hunter = Rc::new(RefCell::new(hunter));
        let town = Self::build_town(&config, preset, &hunter, dice);
        info!("expedition started on {difficulty}");
        Self {
            config,
            difficulty,
            hunter,
            town,
            towns_visited: 1,
        }
    }

    fn build_town(
        config: &GameConfig,
        preset: &DifficultyCfg,
        hunter: &Rc<RefCell<Hunter>>,
        dice: &mut impl Dice,
    ) -> HunterTown {
        let store = GeneralStore::new(&config.shop);
        let mut town = Town::new(store, preset.toughness, preset.easy_mode, dice);
        town.on_arrival(Rc::clone(hunter));
        town
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn town(&self) -> &HunterTown {
        &self.town
    }

    pub const fn town_mut(&mut self) -> &mut HunterTown {
        &mut self.town
    }

    #[must_use]
    pub fn hunter(&self) -> Ref<'_, Hunter> {
        self.hunter.borrow()
    }

    #[must_use]
    pub const fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    /// Cross the current terrain and, on success, arrive in a fresh town.
    pub fn depart(&mut self, dice: &mut impl Dice) -> Departure {
        let crossed = self.town.attempt_leave(dice);
        let message = self.town.latest_message().clone();
        if crossed {
            let preset = self.config.difficulty(self.difficulty);
            self.town = Self::build_town(&self.config, preset, &self.hunter, dice);
            self.towns_visited = self.towns_visited.saturating_add(1);
            info!("arrived in town #{}", self.towns_visited);
        }
        Departure { crossed, message }
    }

    #[must_use]
    pub fn standing(&self) -> Standing {
        let hunter = self.hunter.borrow();
        if hunter.has_all_treasures() {
            Standing::Won
        } else if hunter.is_broke() {
            Standing::Broke
        } else {
            Standing::Exploring
        }
    }
}
