//! The adventurer contract the town drives, plus the stock [`Hunter`].
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::item::Item;
use crate::treasure::Treasure;

/// Everything a town needs to query and mutate on its visitor.
pub trait Adventurer {
    fn name(&self) -> &str;

    fn gold(&self) -> i32;

    fn has_item(&self, item: Item) -> bool;

    /// Returns `false` when the item was already in the kit.
    fn add_item(&mut self, item: Item) -> bool;

    /// Returns `false` when the item was not in the kit.
    fn remove_item(&mut self, item: Item) -> bool;

    fn has_treasure(&self, treasure: Treasure) -> bool;

    /// Returns `false` when the treasure was already collected.
    fn add_treasure(&mut self, treasure: Treasure) -> bool;

    /// Apply a signed gold change. Implementations decide whether to floor it.
    fn add_gold(&mut self, delta: i32);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: i32,
    #[serde(default)]
    kit: BTreeSet<Item>,
    #[serde(default)]
    treasures: BTreeSet<Treasure>,
}

impl Hunter {
    #[must_use]
    pub fn new(name: impl Into<String>, gold: i32) -> Self {
        Self {
            name: name.into(),
            gold,
            kit: BTreeSet::new(),
            treasures: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_kit(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.kit.extend(items);
        self
    }

    #[must_use]
    pub const fn kit(&self) -> &BTreeSet<Item> {
        &self.kit
    }

    #[must_use]
    pub const fn treasures(&self) -> &BTreeSet<Treasure> {
        &self.treasures
    }

    /// Gold below zero ends an expedition.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.gold < 0
    }

    #[must_use]
    pub fn has_all_treasures(&self) -> bool {
        Treasure::ALL.iter().all(|t| self.treasures.contains(t))
    }

    /// One-line status for menus.
    #[must_use]
    pub fn summary(&self) -> String {
        let kit = if self.kit.is_empty() {
            "none".to_string()
        } else {
            self.kit
                .iter()
                .map(|item| item.key())
                .collect::<Vec<_>>()
                .join(" | ")
        };
        let treasures = if self.treasures.is_empty() {
            "none".to_string()
        } else {
            self.treasures
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "{} has {} gold | kit: {kit} | treasures: {treasures}",
            self.name, self.gold
        )
    }
}

impl Adventurer for Hunter {
    fn name(&self) -> &str {
        &self.name
    }

    fn gold(&self) -> i32 {
        self.gold
    }

    fn has_item(&self, item: Item) -> bool {
        self.kit.contains(&item)
    }

    fn add_item(&mut self, item: Item) -> bool {
        self.kit.insert(item)
    }

    fn remove_item(&mut self, item: Item) -> bool {
        let removed = self.kit.remove(&item);
        if removed {
            info!("{} lost {item}", self.name);
        }
        removed
    }

    fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&treasure)
    }

    fn add_treasure(&mut self, treasure: Treasure) -> bool {
        let added = self.treasures.insert(treasure);
        if added {
            info!("{} collected {treasure}", self.name);
        }
        added
    }

    fn add_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
        info!("{} gold {delta:+} -> {}", self.name, self.gold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_has_set_semantics() {
        let mut hunter = Hunter::new("Ivy", 10);
        assert!(hunter.add_item(Item::Rope));
        assert!(!hunter.add_item(Item::Rope));
        assert_eq!(hunter.kit().len(), 1);
        assert!(hunter.remove_item(Item::Rope));
        assert!(!hunter.remove_item(Item::Rope));
    }

    #[test]
    fn gold_may_go_negative() {
        let mut hunter = Hunter::new("Ivy", 3);
        hunter.add_gold(-7);
        assert_eq!(hunter.gold(), -4);
        assert!(hunter.is_broke());
    }

    #[test]
    fn all_treasures_detected() {
        let mut hunter = Hunter::new("Ivy", 0);
        for treasure in Treasure::ALL {
            assert!(!hunter.has_all_treasures());
            assert!(hunter.add_treasure(*treasure));
        }
        assert!(hunter.has_all_treasures());
        assert!(!hunter.add_treasure(Treasure::Gem));
    }

    #[test]
    fn summary_lists_kit_and_treasures() {
        let mut hunter = Hunter::new("Ivy", 12).with_kit([Item::Shovel, Item::Water]);
        hunter.add_treasure(Treasure::Crown);
        assert_eq!(
            hunter.summary(),
            "Ivy has 12 gold | kit: water | shovel | treasures: a crown"
        );
    }
}
