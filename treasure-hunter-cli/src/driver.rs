//! Interactive menu loop: one town action per turn.
use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};
use treasure_hunter_game::{
    Adventurer, Dice, Difficulty, Expedition, GameConfig, Item, Receipt, ShopChoice, ShopError,
    Standing,
};

use crate::console::Console;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Broke,
    GaveUp,
    OutOfInput,
}

const MENU: &str = "\
(B)uy something at the shop.
(S)ell something at the shop.
(M)ove on to a different town.
(L)ook for trouble!
(H)unt for treasure!
(D)ig for gold!
Give up the hunt and e(X)it.";

pub struct SessionOptions {
    pub name: Option<String>,
    pub difficulty: Difficulty,
    pub config: GameConfig,
}

/// Drive a full expedition until it ends or input runs out.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn run<R: BufRead, W: Write>(
    options: SessionOptions,
    dice: &mut impl Dice,
    console: &mut Console<R, W>,
) -> Result<Ending> {
    console.heading("Welcome to TREASURE HUNTER!")?;
    console.say("Going hunting for the big treasure, eh?")?;

    let name = match options.name {
        Some(name) => name,
        None => match console.ask("What's your name, Hunter? ")? {
            Some(name) if !name.is_empty() => name,
            Some(_) => "Hunter".to_string(),
            None => return Ok(Ending::OutOfInput),
        },
    };

    let mut expedition = Expedition::start(name, options.difficulty, options.config, dice);
    debug!("playing on {}", expedition.difficulty());
    show_and_clear(&mut expedition, console)?;

    loop {
        match expedition.standing() {
            Standing::Won => {
                console.say(
                    "Congratulations, you have found the last of the three treasures, you win!",
                )?;
                return Ok(Ending::Won);
            }
            Standing::Broke => {
                console.say("You ran out of gold. Game over!")?;
                return Ok(Ending::Broke);
            }
            Standing::Exploring => {}
        }

        console.say("***")?;
        let summary = expedition.hunter().summary();
        console.say(summary)?;
        let surroundings = expedition.town().describe_surroundings();
        console.show(&surroundings)?;
        console.say(MENU)?;

        let Some(choice) = console.ask("What's your next move? ")? else {
            return Ok(Ending::OutOfInput);
        };
        debug!("menu choice `{choice}`");

        match choice.to_ascii_lowercase().as_str() {
            "b" => {
                if !shop_visit(&mut expedition, console, Trade::Buy)? {
                    return Ok(Ending::OutOfInput);
                }
            }
            "s" => {
                if !shop_visit(&mut expedition, console, Trade::Sell)? {
                    return Ok(Ending::OutOfInput);
                }
            }
            "m" => {
                let departure = expedition.depart(dice);
                if departure.crossed {
                    console.show(&departure.message)?;
                    console.say(format!(
                        "You arrive in town #{}.",
                        expedition.towns_visited()
                    ))?;
                }
            }
            "l" => {
                let outcome = expedition.town_mut().look_for_trouble(dice);
                debug!("brawl: {outcome:?}");
            }
            "h" => {
                let outcome = expedition.town_mut().hunt_for_treasure(dice);
                debug!("hunt: {outcome:?}");
            }
            "d" => {
                let outcome = expedition.town_mut().dig_for_gold(dice);
                debug!("dig: {outcome:?}");
            }
            "x" => {
                let name = expedition.hunter().name().to_string();
                console.say(format!("Fare thee well, {name}!"))?;
                return Ok(Ending::GaveUp);
            }
            _ => console.say("Yikes! That's an invalid option! Try again.")?,
        }
        show_and_clear(&mut expedition, console)?;
    }
}

#[derive(Debug, Clone, Copy)]
enum Trade {
    Buy,
    Sell,
}

/// Returns `false` when input ran out mid-visit.
fn shop_visit<R: BufRead, W: Write>(
    expedition: &mut Expedition,
    console: &mut Console<R, W>,
    trade: Trade,
) -> Result<bool> {
    let store = expedition.town().shop();
    match trade {
        Trade::Buy => {
            console.say("Welcome to the General Store! We have the finest wares in town.")?;
            for (item, price) in store.listing() {
                console.say(format!("  {item}: {price} gold"))?;
            }
        }
        Trade::Sell => {
            console.say("What're you lookin' to sell?")?;
            let offers: Vec<_> = Item::ALL
                .iter()
                .filter_map(|item| store.buyback_price(*item).map(|price| (*item, price)))
                .collect();
            for (item, price) in offers {
                console.say(format!("  {item}: {price} gold"))?;
            }
        }
    }

    let Some(answer) = console.ask("Which item? ")? else {
        return Ok(false);
    };
    let item = match answer.parse::<Item>() {
        Ok(item) => item,
        Err(err) => {
            console.say(format!("Sorry, {err}."))?;
            expedition.town_mut().enter_shop(ShopChoice::Browse);
            return Ok(true);
        }
    };

    let choice = match trade {
        Trade::Buy => ShopChoice::Buy(item),
        Trade::Sell => ShopChoice::Sell(item),
    };
    expedition.town_mut().enter_shop(choice);
    if let Some(result) = expedition.town().shop().last_result() {
        console.say(describe_trade(result))?;
    }
    Ok(true)
}

fn describe_trade(result: &Result<Receipt, ShopError>) -> String {
    match result {
        Ok(Receipt::Bought { item, price }) => {
            format!("Ye' got yerself a {item} for {price} gold. Come again soon.")
        }
        Ok(Receipt::Sold { item, price }) => {
            format!("Pleasure doin' business with you. Here's {price} gold for your {item}.")
        }
        Ok(Receipt::Browsed) => "Just lookin', eh?".to_string(),
        Err(err) => format!("Sorry, {err}."),
    }
}

fn show_and_clear<R: BufRead, W: Write>(
    expedition: &mut Expedition,
    console: &mut Console<R, W>,
) -> Result<()> {
    console
        .show(expedition.town().latest_message())
        .context("writing town message")?;
    expedition.town_mut().clear_message();
    Ok(())
}
