//! Town resolution: arrival, departure, brawls, digging and treasure hunts.
//!
//! A [`Town`] owns its terrain and shop and holds a shared handle to the
//! visiting adventurer once one arrives. Every action writes exactly one
//! outcome [`Message`], replacing whatever the previous action produced.
//!
//! All actions other than [`Town::on_arrival`] assume the town is occupied.
//! Calling them first is a caller bug and panics.
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::adventurer::Adventurer;
use crate::constants::{
    BRAWL_GOLD_MAX, BRAWL_GOLD_MIN, DIG_GOLD_MAX, DIG_GOLD_MIN, DIG_SUCCESS_THRESHOLD,
    EASY_MODE_BREAK_ROLL, EASY_MODE_VICTORY_SCALE, ITEM_BREAK_CHANCE, MILD_TOWN_NO_TROUBLE_CHANCE,
    TOUGH_TOWN_NO_TROUBLE_CHANCE,
};
use crate::dice::Dice;
use crate::item::Item;
use crate::message::{Message, Tone};
use crate::shop::{Shop, ShopChoice};
use crate::terrain::Terrain;
use crate::treasure::{CATALOG_SIZE, Find, TREASURE_CATALOG, Treasure, find_for_roll};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrawlOutcome {
    NoTrouble,
    /// The brawler saw a sword and paid up without a fight.
    Intimidated { gold: i32 },
    Won { gold: i32 },
    Lost { gold: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntOutcome {
    Found(Treasure),
    /// Rolled a treasure the adventurer already holds.
    Greedy(Treasure),
    Dust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigOutcome {
    NoShovel,
    Gold(i32),
    Dirt,
}

pub struct Town<S, A> {
    shop: S,
    terrain: Terrain,
    adventurer: Option<Rc<RefCell<A>>>,
    tough_town: bool,
    easy_mode: bool,
    last_message: Message,
}

impl<S: Shop, A: Adventurer> Town<S, A> {
    /// Build a town with random terrain. `toughness` is the probability,
    /// in `[0, 1]`, that it turns out to be a tough town.
    pub fn new(shop: S, toughness: f64, easy_mode: bool, dice: &mut impl Dice) -> Self {
        let terrain = Terrain::random(dice);
        let roll = dice.roll();
        let tough_town = roll < toughness;
        debug!("toughness roll {roll:.3} against {toughness:.2}: tough={tough_town}");
        Self::with_terrain(shop, terrain, tough_town, easy_mode)
    }

    /// Build a town with fixed terrain and temperament.
    #[must_use]
    pub const fn with_terrain(
        shop: S,
        terrain: Terrain,
        tough_town: bool,
        easy_mode: bool,
    ) -> Self {
        Self {
            shop,
            terrain,
            adventurer: None,
            tough_town,
            easy_mode,
            last_message: Message::new(),
        }
    }

    #[must_use]
    pub const fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    #[must_use]
    pub const fn is_tough_town(&self) -> bool {
        self.tough_town
    }

    #[must_use]
    pub const fn easy_mode(&self) -> bool {
        self.easy_mode
    }

    #[must_use]
    pub const fn shop(&self) -> &S {
        &self.shop
    }

    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.adventurer.is_some()
    }

    #[must_use]
    pub const fn adventurer(&self) -> Option<&Rc<RefCell<A>>> {
        self.adventurer.as_ref()
    }

    #[must_use]
    pub const fn treasure_catalog(&self) -> &'static [Find] {
        &TREASURE_CATALOG
    }

    #[must_use]
    pub const fn latest_message(&self) -> &Message {
        &self.last_message
    }

    pub fn clear_message(&mut self) {
        self.last_message.clear();
    }

    /// Fixed-format line naming the terrain.
    #[must_use]
    pub fn describe_surroundings(&self) -> Message {
        let mut msg = Message::plain("This nice little town is surrounded by ");
        msg.extend(self.terrain.label());
        msg.push_plain(".");
        msg
    }

    /// Register the visiting adventurer and greet them.
    pub fn on_arrival(&mut self, adventurer: Rc<RefCell<A>>) {
        let mut msg = Message::plain(format!(
            "Welcome to town, {}.",
            adventurer.borrow().name()
        ));
        if self.tough_town {
            msg.push_plain("\nIt's pretty rough around here, so watch yourself.");
        } else {
            msg.push_plain("\nWe're just a sleepy little town with mild mannered folk.");
        }
        self.adventurer = Some(adventurer);
        self.last_message = msg;
    }

    /// Try to cross the surrounding terrain. A sword stands in for a
    /// machete and never breaks; any other crossing item may break.
    ///
    /// # Panics
    ///
    /// Panics if no adventurer has arrived.
    pub fn attempt_leave(&mut self, dice: &mut impl Dice) -> bool {
        let occupant = self.occupant();
        let mut adventurer = occupant.borrow_mut();
        let required = self.terrain.required_item();
        let substitute = required == Item::Machete && adventurer.has_item(Item::Sword);

        if !substitute && !adventurer.has_item(required) {
            self.last_message = Message::plain(format!(
                "You can't leave town, {}. You don't have a {required}.",
                adventurer.name()
            ));
            return false;
        }

        let used = if substitute { Item::Sword } else { required };
        let mut msg = Message::plain(format!("You used your {used} to cross the "));
        msg.extend(self.terrain.label());
        msg.push_plain(".");

        let mut roll = dice.roll();
        if self.easy_mode {
            roll = EASY_MODE_BREAK_ROLL;
        }
        let broke = roll < ITEM_BREAK_CHANCE;
        debug!("item break roll {roll:.3}: broke={broke} substitute={substitute}");
        if broke && !substitute {
            adventurer.remove_item(required);
            msg.push_plain(format!("\nUnfortunately, you lost your {required}"));
        }

        info!("{} left town across the {}", adventurer.name(), self.terrain);
        self.last_message = msg;
        true
    }

    /// Hand the visitor to the shop, then report that they left it.
    ///
    /// # Panics
    ///
    /// Panics if no adventurer has arrived.
    pub fn enter_shop(&mut self, choice: ShopChoice) {
        let occupant = self.occupant();
        self.shop.enter(&mut *occupant.borrow_mut(), choice);
        self.last_message = Message::plain("You left the shop");
    }

    /// Pick a fight for gold. Tough towns make fights easier to find and
    /// harder to win.
    ///
    /// # Panics
    ///
    /// Panics if no adventurer has arrived.
    pub fn look_for_trouble(&mut self, dice: &mut impl Dice) -> BrawlOutcome {
        let occupant = self.occupant();
        let mut adventurer = occupant.borrow_mut();
        let no_trouble_chance = if self.tough_town {
            TOUGH_TOWN_NO_TROUBLE_CHANCE
        } else {
            MILD_TOWN_NO_TROUBLE_CHANCE
        };

        let roll = dice.roll();
        debug!("trouble roll {roll:.3} against {no_trouble_chance:.2}");
        if roll > no_trouble_chance {
            self.last_message = Message::plain("You couldn't find any trouble");
            return BrawlOutcome::NoTrouble;
        }

        if adventurer.has_item(Item::Sword) {
            let gold = dice.roll_range(BRAWL_GOLD_MIN..=BRAWL_GOLD_MAX);
            adventurer.add_gold(gold);
            self.last_message = Message::plain(
                "The brawler, seeing your sword, realizes he picked a losing fight and gives you his gold",
            )
            .with("\nYou won the brawl and receive ", Tone::Plain)
            .with(gold_amount(gold), Tone::Gold);
            return BrawlOutcome::Intimidated { gold };
        }

        let mut msg = Message::new().with(
            "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n",
            Tone::Danger,
        );
        let gold = dice.roll_range(BRAWL_GOLD_MIN..=BRAWL_GOLD_MAX);
        let mut victory = dice.roll();
        if self.easy_mode {
            victory *= EASY_MODE_VICTORY_SCALE;
        }
        debug!("victory roll {victory:.3} against {no_trouble_chance:.2}");

        let outcome = if victory > no_trouble_chance {
            adventurer.add_gold(gold);
            msg.push_plain("Okay, stranger! You proved yer mettle. Here, take my gold.");
            msg.push_plain("\nYou won the brawl and receive ");
            BrawlOutcome::Won { gold }
        } else {
            adventurer.add_gold(-gold);
            msg.push_plain("That'll teach you to go lookin' fer trouble in MY town! Now pay up!");
            msg.push_plain("\nYou lost the brawl and pay ");
            BrawlOutcome::Lost { gold }
        };
        msg.push(gold_amount(gold), Tone::Gold);
        self.last_message = msg;
        outcome
    }

    /// Search for one of the catalog treasures. Each kind is awarded at
    /// most once per adventurer.
    ///
    /// # Panics
    ///
    /// Panics if no adventurer has arrived.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn hunt_for_treasure(&mut self, dice: &mut impl Dice) -> HuntOutcome {
        let occupant = self.occupant();
        let mut adventurer = occupant.borrow_mut();
        let roll = dice.roll_range(1..=CATALOG_SIZE as i32);
        let find = find_for_roll(roll);
        debug!("treasure roll {roll}: {}", find.name());

        let mut msg = Message::plain(format!("You found {}!", find.name()));
        let outcome = match find {
            Find::Treasure(treasure) if adventurer.has_treasure(treasure) => {
                msg.push_plain("\nDon't be too greedy...");
                HuntOutcome::Greedy(treasure)
            }
            Find::Treasure(treasure) => {
                adventurer.add_treasure(treasure);
                HuntOutcome::Found(treasure)
            }
            Find::Dust => {
                msg.push_plain("\nThere's nothing here you wee little lad.");
                HuntOutcome::Dust
            }
        };
        self.last_message = msg;
        outcome
    }

    /// Dig for gold; needs a shovel.
    ///
    /// # Panics
    ///
    /// Panics if no adventurer has arrived.
    pub fn dig_for_gold(&mut self, dice: &mut impl Dice) -> DigOutcome {
        let occupant = self.occupant();
        let mut adventurer = occupant.borrow_mut();
        if !adventurer.has_item(Item::Shovel) {
            self.last_message = Message::plain("You can't dig for gold without a shovel!");
            return DigOutcome::NoShovel;
        }

        let roll = dice.roll();
        debug!("dig roll {roll:.3}");
        if roll > DIG_SUCCESS_THRESHOLD {
            let gold = dice.roll_range(DIG_GOLD_MIN..=DIG_GOLD_MAX);
            adventurer.add_gold(gold);
            self.last_message =
                Message::plain("You dug up ").with(format!("{gold} gold!"), Tone::Gold);
            DigOutcome::Gold(gold)
        } else {
            self.last_message = Message::plain("You dug but only found dirt");
            DigOutcome::Dirt
        }
    }

    fn occupant(&self) -> Rc<RefCell<A>> {
        let Some(adventurer) = self.adventurer.as_ref() else {
            panic!("town action invoked before an adventurer arrived");
        };
        Rc::clone(adventurer)
    }
}

impl<S, A> fmt::Display for Town<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This nice little town is surrounded by {}.",
            self.terrain
        )
    }
}

fn gold_amount(gold: i32) -> String {
    format!("{gold} gold.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::Hunter;
    use crate::dice::scripted::ScriptedDice;
    use crate::shop::GeneralStore;
    use crate::terrain::TerrainKind;

    type TestTown = Town<GeneralStore, Hunter>;

    fn town(kind: TerrainKind, tough: bool, easy: bool) -> TestTown {
        Town::with_terrain(GeneralStore::default(), Terrain::new(kind), tough, easy)
    }

    fn arrive(town: &mut TestTown, hunter: Hunter) -> Rc<RefCell<Hunter>> {
        let shared = Rc::new(RefCell::new(hunter));
        town.on_arrival(Rc::clone(&shared));
        shared
    }

    #[test]
    fn full_toughness_always_builds_tough_town() {
        let mut dice = ScriptedDice::new(&[0.999], &[2]);
        let town: TestTown = Town::new(GeneralStore::default(), 1.0, false, &mut dice);
        assert!(town.is_tough_town());
        assert_eq!(town.terrain().kind(), TerrainKind::Plains);
        assert!(!town.is_occupied());
        assert!(town.latest_message().is_empty());
        assert!(dice.is_spent());
    }

    #[test]
    fn zero_toughness_never_builds_tough_town() {
        let mut dice = ScriptedDice::new(&[0.0], &[0]);
        let town: TestTown = Town::new(GeneralStore::default(), 0.0, false, &mut dice);
        assert!(!town.is_tough_town());
    }

    #[test]
    fn arrival_tone_follows_toughness() {
        let mut rough = town(TerrainKind::Ocean, true, false);
        assert!(rough.adventurer().is_none());
        let ivy = arrive(&mut rough, Hunter::new("Ivy", 10));
        assert!(rough.is_occupied());
        assert!(rough.adventurer().is_some_and(|held| Rc::ptr_eq(held, &ivy)));
        assert_eq!(
            rough.latest_message().to_string(),
            "Welcome to town, Ivy.\nIt's pretty rough around here, so watch yourself."
        );

        let mut sleepy = town(TerrainKind::Ocean, false, false);
        arrive(&mut sleepy, Hunter::new("Ivy", 10));
        assert!(sleepy.latest_message().contains("sleepy little town"));
    }

    #[test]
    fn leaving_without_item_fails_and_changes_nothing() {
        let mut t = town(TerrainKind::Mountains, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10).with_kit([Item::Boat]));
        let before = hunter.borrow().clone();
        let mut dice = ScriptedDice::new(&[], &[]);

        assert!(!t.attempt_leave(&mut dice));
        assert_eq!(
            t.latest_message().to_string(),
            "You can't leave town, Ivy. You don't have a rope."
        );
        assert_eq!(*hunter.borrow(), before);
    }

    #[test]
    fn leaving_with_item_that_holds() {
        let mut t = town(TerrainKind::Desert, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10).with_kit([Item::Water]));
        let mut dice = ScriptedDice::new(&[0.5], &[]);

        assert!(t.attempt_leave(&mut dice));
        assert_eq!(
            t.latest_message().to_string(),
            "You used your water to cross the Desert."
        );
        assert_eq!(t.latest_message().segments()[1].tone, Tone::Sand);
        assert!(hunter.borrow().has_item(Item::Water));
    }

    #[test]
    fn broken_item_is_removed_once() {
        let mut t = town(TerrainKind::Marsh, false, false);
        let hunter = arrive(
            &mut t,
            Hunter::new("Ivy", 10).with_kit([Item::Boots, Item::Rope]),
        );
        let mut dice = ScriptedDice::new(&[0.1], &[]);

        assert!(t.attempt_leave(&mut dice));
        assert!(
            t.latest_message()
                .contains("\nUnfortunately, you lost your boots")
        );
        let hunter = hunter.borrow();
        assert!(!hunter.has_item(Item::Boots));
        assert_eq!(hunter.kit().len(), 1);
    }

    #[test]
    fn easy_mode_never_breaks_items() {
        let mut t = town(TerrainKind::Ocean, false, true);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10).with_kit([Item::Boat]));
        let mut dice = ScriptedDice::new(&[0.0], &[]);

        assert!(t.attempt_leave(&mut dice));
        assert!(!t.latest_message().contains("Unfortunately"));
        assert!(hunter.borrow().has_item(Item::Boat));
    }

    #[test]
    fn sword_crosses_jungle_and_never_breaks() {
        let mut t = town(TerrainKind::Jungle, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10).with_kit([Item::Sword]));
        let mut dice = ScriptedDice::new(&[0.0], &[]);

        assert!(t.attempt_leave(&mut dice));
        assert_eq!(
            t.latest_message().to_string(),
            "You used your sword to cross the Jungle."
        );
        assert!(hunter.borrow().has_item(Item::Sword));
    }

    #[test]
    fn sword_is_preferred_over_machete() {
        let mut t = town(TerrainKind::Jungle, false, false);
        let hunter = arrive(
            &mut t,
            Hunter::new("Ivy", 10).with_kit([Item::Sword, Item::Machete]),
        );
        let mut dice = ScriptedDice::new(&[0.0], &[]);

        assert!(t.attempt_leave(&mut dice));
        assert!(t.latest_message().contains("sword"));
        let hunter = hunter.borrow();
        assert!(hunter.has_item(Item::Sword));
        assert!(hunter.has_item(Item::Machete));
    }

    #[test]
    fn sword_does_not_replace_other_items() {
        let mut t = town(TerrainKind::Plains, false, false);
        arrive(&mut t, Hunter::new("Ivy", 10).with_kit([Item::Sword]));
        let mut dice = ScriptedDice::new(&[], &[]);
        assert!(!t.attempt_leave(&mut dice));
        assert!(t.latest_message().contains("You don't have a horse."));
    }

    #[test]
    fn shop_visit_overwrites_message() {
        let mut t = town(TerrainKind::Ocean, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 25));
        t.enter_shop(ShopChoice::Buy(Item::Boat));
        assert_eq!(t.latest_message().to_string(), "You left the shop");
        assert!(hunter.borrow().has_item(Item::Boat));
        assert_eq!(hunter.borrow().gold(), 5);
        assert!(t.shop().last_result().is_some_and(Result::is_ok));
    }

    #[test]
    fn no_trouble_when_roll_exceeds_threshold() {
        let mut t = town(TerrainKind::Ocean, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10));
        let mut dice = ScriptedDice::new(&[0.34], &[]);
        assert_eq!(t.look_for_trouble(&mut dice), BrawlOutcome::NoTrouble);
        assert_eq!(
            t.latest_message().to_string(),
            "You couldn't find any trouble"
        );
        assert_eq!(hunter.borrow().gold(), 10);
    }

    #[test]
    fn tough_town_finds_trouble_more_often() {
        let mut t = town(TerrainKind::Ocean, true, false);
        arrive(&mut t, Hunter::new("Ivy", 10));
        let mut dice = ScriptedDice::new(&[0.5, 0.9], &[4]);
        assert_eq!(t.look_for_trouble(&mut dice), BrawlOutcome::Won { gold: 4 });
    }

    #[test]
    fn sword_intimidates_without_victory_roll() {
        let mut t = town(TerrainKind::Ocean, true, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10).with_kit([Item::Sword]));
        let mut dice = ScriptedDice::new(&[0.1], &[7]);
        assert_eq!(
            t.look_for_trouble(&mut dice),
            BrawlOutcome::Intimidated { gold: 7 }
        );
        assert!(dice.is_spent());
        assert_eq!(hunter.borrow().gold(), 17);
        assert!(t.latest_message().contains("seeing your sword"));
        assert_eq!(
            t.latest_message().highlighted(Tone::Gold).collect::<Vec<_>>(),
            ["7 gold."]
        );
    }

    #[test]
    fn lost_brawl_can_drive_gold_negative() {
        let mut t = town(TerrainKind::Ocean, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 3));
        let mut dice = ScriptedDice::new(&[0.2, 0.1], &[9]);
        assert_eq!(t.look_for_trouble(&mut dice), BrawlOutcome::Lost { gold: 9 });
        assert_eq!(hunter.borrow().gold(), -6);
        let msg = t.latest_message();
        assert_eq!(msg.segments()[0].tone, Tone::Danger);
        assert!(msg.contains("You lost the brawl and pay 9 gold."));
    }

    #[test]
    fn easy_mode_doubles_victory_roll() {
        let mut hard = town(TerrainKind::Ocean, true, false);
        arrive(&mut hard, Hunter::new("Ivy", 10));
        let mut dice = ScriptedDice::new(&[0.1, 0.4], &[5]);
        assert_eq!(hard.look_for_trouble(&mut dice), BrawlOutcome::Lost { gold: 5 });

        let mut easy = town(TerrainKind::Ocean, true, true);
        let hunter = arrive(&mut easy, Hunter::new("Ivy", 10));
        let mut dice = ScriptedDice::new(&[0.1, 0.4], &[5]);
        assert_eq!(easy.look_for_trouble(&mut dice), BrawlOutcome::Won { gold: 5 });
        assert_eq!(hunter.borrow().gold(), 15);
    }

    #[test]
    fn hunt_awards_each_treasure_once() {
        let mut t = town(TerrainKind::Ocean, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10));
        let mut dice = ScriptedDice::new(&[], &[3, 3]);

        assert_eq!(
            t.hunt_for_treasure(&mut dice),
            HuntOutcome::Found(Treasure::Gem)
        );
        assert_eq!(t.latest_message().to_string(), "You found a gem!");
        assert_eq!(
            t.hunt_for_treasure(&mut dice),
            HuntOutcome::Greedy(Treasure::Gem)
        );
        assert_eq!(
            t.latest_message().to_string(),
            "You found a gem!\nDon't be too greedy..."
        );
        assert_eq!(hunter.borrow().treasures().len(), 1);
    }

    #[test]
    fn hunt_can_turn_up_dust() {
        let mut t = town(TerrainKind::Ocean, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10));
        let mut dice = ScriptedDice::new(&[], &[4]);
        assert_eq!(t.hunt_for_treasure(&mut dice), HuntOutcome::Dust);
        assert_eq!(
            t.latest_message().to_string(),
            "You found dust!\nThere's nothing here you wee little lad."
        );
        assert!(hunter.borrow().treasures().is_empty());
    }

    #[test]
    fn digging_needs_a_shovel() {
        let mut t = town(TerrainKind::Ocean, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10));
        let mut dice = ScriptedDice::new(&[], &[]);
        assert_eq!(t.dig_for_gold(&mut dice), DigOutcome::NoShovel);
        assert_eq!(
            t.latest_message().to_string(),
            "You can't dig for gold without a shovel!"
        );
        assert_eq!(hunter.borrow().gold(), 10);
    }

    #[test]
    fn digging_finds_gold_or_dirt() {
        let mut t = town(TerrainKind::Ocean, false, false);
        let hunter = arrive(&mut t, Hunter::new("Ivy", 10).with_kit([Item::Shovel]));
        let mut dice = ScriptedDice::new(&[0.9, 0.5], &[20]);

        assert_eq!(t.dig_for_gold(&mut dice), DigOutcome::Gold(20));
        assert_eq!(t.latest_message().to_string(), "You dug up 20 gold!");
        assert_eq!(t.dig_for_gold(&mut dice), DigOutcome::Dirt);
        assert_eq!(
            t.latest_message().to_string(),
            "You dug but only found dirt"
        );
        assert_eq!(hunter.borrow().gold(), 30);
    }

    #[test]
    fn clear_message_resets_sink() {
        let mut t = town(TerrainKind::Ocean, false, false);
        arrive(&mut t, Hunter::new("Ivy", 10));
        assert!(!t.latest_message().is_empty());
        t.clear_message();
        assert!(t.latest_message().is_empty());
    }

    #[test]
    fn surroundings_name_the_terrain() {
        let t = town(TerrainKind::Mountains, false, false);
        assert_eq!(
            t.describe_surroundings().to_string(),
            "This nice little town is surrounded by Mountains."
        );
        assert_eq!(t.to_string(), t.describe_surroundings().to_string());
        assert_eq!(t.treasure_catalog().len(), 4);
    }

    #[test]
    #[should_panic(expected = "before an adventurer arrived")]
    fn actions_before_arrival_panic() {
        let mut t = town(TerrainKind::Ocean, false, false);
        let mut dice = ScriptedDice::new(&[0.1], &[]);
        let _ = t.look_for_trouble(&mut dice);
    }
}
