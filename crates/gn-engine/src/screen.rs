//! The top-level screen state machine.

use serde::{Deserialize, Serialize};

/// Which screen of the phone is showing.
///
/// Transitions: `Home → Game → Result → Home | Game(next)`, with
/// `ThemeShop` reachable from `Home` and returning to `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// The nexus home screen: start a level, recharge, browse themes.
    Home,
    /// An active level: brief, drafting, sending.
    Game,
    /// The reaction and payout for the last completed level.
    Result,
    /// The theme market.
    ThemeShop,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Game => write!(f, "game"),
            Self::Result => write!(f, "result"),
            Self::ThemeShop => write!(f, "theme shop"),
        }
    }
}
