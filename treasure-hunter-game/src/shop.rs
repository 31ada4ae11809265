//! Shop contract and the stock general store.
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::adventurer::Adventurer;
use crate::config::ShopCfg;
use crate::constants::SWORD_BUYBACK_PRICE;
use crate::item::Item;

/// What the visitor asked the shopkeeper for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopChoice {
    Buy(Item),
    Sell(Item),
    Browse,
}

/// Transaction surface a town hands its visitor to.
pub trait Shop {
    fn enter(&mut self, adventurer: &mut dyn Adventurer, choice: ShopChoice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Receipt {
    Bought { item: Item, price: i32 },
    Sold { item: Item, price: i32 },
    Browsed,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("we don't sell {0} here")]
    NotForSale(Item),
    #[error("you already have a {0}")]
    AlreadyOwned(Item),
    #[error("you don't have a {0} to sell")]
    NotOwned(Item),
    #[error("a {item} costs {price} gold but you only have {gold}")]
    InsufficientGold { item: Item, price: i32, gold: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralStore {
    prices: BTreeMap<Item, i32>,
    sell_markdown: f64,
    last_result: Option<Result<Receipt, ShopError>>,
}

impl Default for GeneralStore {
    fn default() -> Self {
        Self::new(&ShopCfg::default())
    }
}

impl GeneralStore {
    #[must_use]
    pub fn new(cfg: &ShopCfg) -> Self {
        Self {
            prices: cfg.prices.clone(),
            sell_markdown: cfg.sell_markdown,
            last_result: None,
        }
    }

    #[must_use]
    pub fn price(&self, item: Item) -> Option<i32> {
        self.prices.get(&item).copied()
    }

    /// What the store pays for an item. Swords are never stocked but are
    /// always bought back at a flat rate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn buyback_price(&self, item: Item) -> Option<i32> {
        if item == Item::Sword {
            return Some(SWORD_BUYBACK_PRICE);
        }
        self.price(item)
            .map(|price| (f64::from(price) * self.sell_markdown).floor() as i32)
    }

    /// Stock in catalog order.
    #[must_use]
    pub fn listing(&self) -> Vec<(Item, i32)> {
        self.prices.iter().map(|(item, price)| (*item, *price)).collect()
    }

    /// Result of the most recent visit, if any.
    #[must_use]
    pub const fn last_result(&self) -> Option<&Result<Receipt, ShopError>> {
        self.last_result.as_ref()
    }

    /// Buy `item` for the visitor.
    ///
    /// # Errors
    ///
    /// Fails without mutation when the item is not stocked, already owned,
    /// or unaffordable.
    pub fn buy(&self, adventurer: &mut dyn Adventurer, item: Item) -> Result<Receipt, ShopError> {
        let price = self.price(item).ok_or(ShopError::NotForSale(item))?;
        if adventurer.has_item(item) {
            return Err(ShopError::AlreadyOwned(item));
        }
        let gold = adventurer.gold();
        if gold < price {
            return Err(ShopError::InsufficientGold { item, price, gold });
        }
        adventurer.add_gold(-price);
        adventurer.add_item(item);
        info!("{} bought {item} for {price}", adventurer.name());
        Ok(Receipt::Bought { item, price })
    }

    /// Sell `item` from the visitor's kit.
    ///
    /// # Errors
    ///
    /// Fails without mutation when the visitor does not own the item or the
    /// store will not take it.
    pub fn sell(&self, adventurer: &mut dyn Adventurer, item: Item) -> Result<Receipt, ShopError> {
        if !adventurer.has_item(item) {
            return Err(ShopError::NotOwned(item));
        }
        let price = self
            .buyback_price(item)
            .ok_or(ShopError::NotForSale(item))?;
        adventurer.remove_item(item);
        adventurer.add_gold(price);
        info!("{} sold {item} for {price}", adventurer.name());
        Ok(Receipt::Sold { item, price })
    }
}

impl Shop for GeneralStore {
    fn enter(&mut self, adventurer: &mut dyn Adventurer, choice: ShopChoice) {
        let result = match choice {
            ShopChoice::Buy(item) => self.buy(adventurer, item),
            ShopChoice::Sell(item) => self.sell(adventurer, item),
            ShopChoice::Browse => Ok(Receipt::Browsed),
        };
        self.last_result = Some(result);
    }
}
