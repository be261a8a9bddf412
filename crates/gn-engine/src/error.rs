//! Error types for session operations.
//!
//! Every error here is terminal for the operation but non-fatal for the
//! session: the game state is untouched when one of these is returned.

use thiserror::Error;

use crate::screen::Screen;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Not enough energy to start a level.
    #[error("not enough energy: need {needed}, have {have}")]
    InsufficientEnergy {
        /// Energy required.
        needed: u32,
        /// Energy available.
        have: u32,
    },

    /// The action is not available on the current screen.
    #[error("cannot {action} from the {screen} screen")]
    WrongScreen {
        /// The attempted action.
        action: &'static str,
        /// The screen the session is on.
        screen: Screen,
    },

    /// The draft action does not fit the composer's current phase.
    #[error("cannot {0} in the current drafting phase")]
    WrongPhase(&'static str),

    /// No level is active, so there is no draft to work on.
    #[error("no active draft")]
    NoActiveDraft,

    /// The composed message is too short to send.
    #[error("draft not ready: needs more than {minimum} characters")]
    DraftNotReady {
        /// Minimum trimmed length that must be exceeded.
        minimum: usize,
    },

    /// The requested fragment does not exist for that slot.
    #[error("no {slot} fragment at index {index}")]
    UnknownFragment {
        /// Slot name.
        slot: String,
        /// Requested index.
        index: usize,
    },

    /// A submission is already in flight.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// A recharge is already in flight.
    #[error("a recharge is already in flight")]
    RechargeInFlight,

    /// Core state or catalog error (insufficient funds, unknown theme...).
    #[error(transparent)]
    Core(#[from] gn_core::GnError),
}
