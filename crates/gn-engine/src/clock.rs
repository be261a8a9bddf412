//! Energy regeneration countdown.
//!
//! One second of real time is one call to [`EnergyClock::tick_second`].
//! The countdown and the regeneration grant share that single cadence:
//! the tick that reaches zero grants the energy and resets the countdown,
//! so the user-visible timer always resets exactly when regeneration
//! fires.

use gn_core::GameState;
use gn_core::state::ENERGY_REGEN_INTERVAL_SECS;

/// Countdown to the next +1 energy grant.
#[derive(Debug, Clone)]
pub struct EnergyClock {
    seconds_remaining: u32,
}

impl EnergyClock {
    /// A clock with a full interval ahead of it.
    pub fn new() -> Self {
        Self {
            seconds_remaining: ENERGY_REGEN_INTERVAL_SECS,
        }
    }

    /// Seconds until the next regeneration tick.
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// The countdown as the home screen shows it: `M:SS`.
    pub fn countdown_display(&self) -> String {
        format!(
            "{}:{:02}",
            self.seconds_remaining / 60,
            self.seconds_remaining % 60
        )
    }

    /// Advance the clock by one second.
    ///
    /// On the sixtieth second the state gets its +1 energy (a clamped
    /// no-op at full battery) and the countdown resets. Returns whether
    /// a regeneration tick fired.
    pub fn tick_second(&mut self, state: &mut GameState) -> bool {
        self.seconds_remaining -= 1;
        if self.seconds_remaining == 0 {
            state.regen_tick();
            self.seconds_remaining = ENERGY_REGEN_INTERVAL_SECS;
            true
        } else {
            false
        }
    }
}

impl Default for EnergyClock {
    fn default() -> Self {
        Self::new()
    }
}
