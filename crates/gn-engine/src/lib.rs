//! Session state machine for Ghostwriter Nexus.
//!
//! `SessionController` owns the game state and is its only mutator:
//! screen transitions, the resource economy, level progression, the theme
//! shop, and energy regeneration all go through it. `DraftComposer`
//! handles the drafting sub-states within a level. The `runtime` module
//! is the thin async shell: it serializes controller access behind one
//! mutex and drives the suspension points (oracle call, pacing delay,
//! recharge delay, periodic clock).

/// Energy regeneration countdown.
pub mod clock;
/// Draft composition: slots, free text, and the manual-edit freeze.
pub mod draft;
/// Error types for session operations.
pub mod error;
/// Async shell: shared session, timers, and the submission flow.
pub mod runtime;
/// The top-level screen state machine.
pub mod screen;
/// The session controller owning the game state.
pub mod session;
/// Daily-trend flavor picker.
pub mod trend;

/// Re-export the regeneration clock.
pub use clock::EnergyClock;
/// Re-export the draft composer and its phases.
pub use draft::{DraftComposer, DraftPhase};
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export the screen enum.
pub use screen::Screen;
/// Re-export the session controller.
pub use session::SessionController;
/// Re-export trend types.
pub use trend::{Trend, pick_trend};
