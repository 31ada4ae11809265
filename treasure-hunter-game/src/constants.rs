//! Centralized odds and payout constants for town resolution.
//!
//! These values define the randomized math behind every town action.
//! Keeping them together means balance can only move through reviewed
//! code changes.

// Brawls -------------------------------------------------------------------
/// Trouble threshold in a tough town; draws above it find no fight.
pub(crate) const TOUGH_TOWN_NO_TROUBLE_CHANCE: f64 = 0.66;
/// Trouble threshold in a sleepy town.
pub(crate) const MILD_TOWN_NO_TROUBLE_CHANCE: f64 = 0.33;
/// Easy mode multiplies the victory roll by this factor, unclamped.
pub(crate) const EASY_MODE_VICTORY_SCALE: f64 = 2.0;
pub(crate) const BRAWL_GOLD_MIN: i32 = 1;
pub(crate) const BRAWL_GOLD_MAX: i32 = 10;

// Digging ------------------------------------------------------------------
pub(crate) const DIG_SUCCESS_THRESHOLD: f64 = 0.5;
pub(crate) const DIG_GOLD_MIN: i32 = 1;
pub(crate) const DIG_GOLD_MAX: i32 = 20;

// Crossing -----------------------------------------------------------------
/// Break rolls strictly below this value destroy the crossing item.
pub(crate) const ITEM_BREAK_CHANCE: f64 = 0.5;
/// Easy mode replaces the break roll with this value, which never breaks.
pub(crate) const EASY_MODE_BREAK_ROLL: f64 = 1.0;

// Store --------------------------------------------------------------------
pub(crate) const DEFAULT_SELL_MARKDOWN: f64 = 0.5;
pub(crate) const SWORD_BUYBACK_PRICE: i32 = 10;
