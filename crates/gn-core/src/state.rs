//! The mutable game state aggregate and its economy rules.
//!
//! `GameState` is the single shared aggregate of a session. All fields are
//! private; every mutation goes through a method that preserves the
//! invariants: resources stay clamped, the level index stays in bounds,
//! and the active theme is always unlocked. Multi-field transitions are
//! one method call, so no intermediate state is ever observable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{GnError, GnResult};
use crate::reaction::ReactionResult;
use crate::theme::{Theme, ThemeId};

/// Upper bound for energy, reputation, and drama.
pub const MAX_METER: u32 = 100;
/// Energy spent per completed level.
pub const ENERGY_COST_PER_LEVEL: u32 = 25;
/// Seconds between energy regeneration ticks.
pub const ENERGY_REGEN_INTERVAL_SECS: u32 = 60;
/// Energy granted by a manual recharge.
pub const RECHARGE_ENERGY: u32 = 50;
/// Flat payout for any completed level.
pub const BASE_PAYOUT: u32 = 500;
/// Extra payout when the reaction goes viral.
pub const VIRAL_BONUS: u32 = 1000;

/// Outcome of a theme activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeActivation {
    /// The theme was already owned and is now active.
    Switched,
    /// The theme was bought (price deducted) and is now active.
    Purchased,
}

/// The resource and progression state of one play session.
///
/// Memory-resident for the session lifetime; nothing persists across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    money: u32,
    reputation: u32,
    energy: u32,
    drama_level: u32,
    current_level_index: usize,
    unlocked_spicy: bool,
    active_event: Option<String>,
    current_theme: ThemeId,
    unlocked_themes: BTreeSet<ThemeId>,
}

impl GameState {
    /// A fresh session: starter funds, full battery, the free theme.
    pub fn new(default_theme: ThemeId) -> Self {
        let mut unlocked_themes = BTreeSet::new();
        unlocked_themes.insert(default_theme.clone());
        Self {
            money: 1250,
            reputation: 65,
            energy: MAX_METER,
            drama_level: 0,
            current_level_index: 0,
            unlocked_spicy: false,
            active_event: Some("SEASONAL".to_string()),
            current_theme: default_theme,
            unlocked_themes,
        }
    }

    /// Current balance.
    pub fn money(&self) -> u32 {
        self.money
    }

    /// Reputation, 0-100.
    pub fn reputation(&self) -> u32 {
        self.reputation
    }

    /// Energy, 0-100.
    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Accumulated drama, 0-100.
    pub fn drama_level(&self) -> u32 {
        self.drama_level
    }

    /// Index of the current level in the catalog.
    pub fn current_level_index(&self) -> usize {
        self.current_level_index
    }

    /// Whether spicy fragments are unlocked for the current level.
    pub fn unlocked_spicy(&self) -> bool {
        self.unlocked_spicy
    }

    /// The active seasonal event tag, if any.
    pub fn active_event(&self) -> Option<&str> {
        self.active_event.as_deref()
    }

    /// The currently applied theme.
    pub fn current_theme(&self) -> &ThemeId {
        &self.current_theme
    }

    /// All owned theme ids, including the free default.
    pub fn unlocked_themes(&self) -> &BTreeSet<ThemeId> {
        &self.unlocked_themes
    }

    /// Whether there is enough energy to start a level.
    pub fn can_start_level(&self) -> bool {
        self.energy >= ENERGY_COST_PER_LEVEL
    }

    /// Apply a completed level's reaction as one atomic update.
    ///
    /// Payout, reputation delta (clamped), energy cost (floored at zero),
    /// drama gain (capped), and the per-level spicy flag reset all land
    /// together.
    pub fn apply_reaction(&mut self, result: &ReactionResult) {
        let bonus = if result.is_viral { VIRAL_BONUS } else { 0 };
        self.money += BASE_PAYOUT + bonus;
        self.reputation = clamp_signed(self.reputation, result.reputation_impact);
        self.energy = self.energy.saturating_sub(ENERGY_COST_PER_LEVEL);
        self.drama_level = (self.drama_level + result.drama_impact).min(MAX_METER);
        self.unlocked_spicy = false;
    }

    /// One energy regeneration tick: +1, capped at the maximum.
    pub fn regen_tick(&mut self) {
        self.energy = (self.energy + 1).min(MAX_METER);
    }

    /// Manual recharge payoff: +[`RECHARGE_ENERGY`], capped at the maximum.
    pub fn recharge(&mut self) {
        self.energy = (self.energy + RECHARGE_ENERGY).min(MAX_METER);
    }

    /// Advance to the next level if one remains.
    ///
    /// Returns `true` when the index moved forward by one; `false` when the
    /// current level was the last (the index stays in bounds and the caller
    /// routes to the home screen).
    pub fn advance_level(&mut self, level_count: usize) -> bool {
        if self.current_level_index + 1 < level_count {
            self.current_level_index += 1;
            true
        } else {
            false
        }
    }

    /// Activate a theme, buying it first if it is not yet owned.
    ///
    /// Owned themes switch for free. Unowned themes require
    /// `money >= price`; on failure nothing changes.
    pub fn activate_theme(&mut self, theme: &Theme) -> GnResult<ThemeActivation> {
        if self.unlocked_themes.contains(&theme.id) {
            self.current_theme = theme.id.clone();
            return Ok(ThemeActivation::Switched);
        }
        if self.money < theme.price {
            return Err(GnError::InsufficientFunds {
                price: theme.price,
                balance: self.money,
            });
        }
        self.money -= theme.price;
        self.unlocked_themes.insert(theme.id.clone());
        self.current_theme = theme.id.clone();
        Ok(ThemeActivation::Purchased)
    }

    /// Mark spicy fragments as unlocked for the current level.
    pub fn unlock_spicy(&mut self) {
        self.unlocked_spicy = true;
    }
}

/// Add a signed delta to a meter value, clamping to `0..=MAX_METER`.
fn clamp_signed(value: u32, delta: i32) -> u32 {
    let raw = i64::from(value) + i64::from(delta);
    raw.clamp(0, i64::from(MAX_METER)) as u32
}
