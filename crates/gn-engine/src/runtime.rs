//! Async shell: shared session, timers, and the submission flow.
//!
//! The controller is synchronous; this module adds the suspension points
//! around it. All access goes through one async mutex, and the lock is
//! never held across an await, so timer ticks and user actions interleave
//! without observing a half-applied update.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;

use gn_core::{ReactionResult, ReplyMode};
use gn_oracle::ReactionOracle;

use crate::error::EngineResult;
use crate::session::SessionController;

/// Minimum wall time between submission and the result screen.
pub const PACING_DELAY: Duration = Duration::from_millis(3500);

/// Wall time a manual recharge takes before the energy lands.
pub const RECHARGE_DELAY: Duration = Duration::from_secs(3);

/// A session controller shared between user actions and timers.
pub type SharedSession = Arc<Mutex<SessionController>>;

/// Wrap a controller for shared async access.
pub fn share(controller: SessionController) -> SharedSession {
    Arc::new(Mutex::new(controller))
}

/// Handles to the background timer tasks of a session.
///
/// Aborting drops every pending tick; the session state itself is
/// untouched because ticks only ever run self-contained updates.
#[derive(Debug, Default)]
pub struct TimerHandles {
    handles: Vec<JoinHandle<()>>,
}

impl TimerHandles {
    /// Stop all timers.
    pub fn shutdown(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TimerHandles {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Start the one-second session clock.
///
/// Every tick advances the regeneration countdown; the sixtieth doubles
/// as the regeneration tick, so the countdown and the energy gain can
/// never drift apart.
pub fn spawn_clock(session: &SharedSession) -> TimerHandles {
    let session = Arc::clone(session);
    let handle = tokio::spawn(async move {
        let mut ticker = time::interval(Duration::from_secs(1));
        // The first tick of an interval fires immediately; skip it so the
        // countdown starts at a full second.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            session.lock().await.tick_second();
        }
    });
    TimerHandles {
        handles: vec![handle],
    }
}

/// Submit the current draft and drive the level to its result.
///
/// Holds the lock only to start and to land: the oracle call and the
/// pacing delay run unlocked and concurrently, so the result screen
/// appears after whichever of the two finishes last.
pub async fn submit(
    session: &SharedSession,
    oracle: &dyn ReactionOracle,
    mode: ReplyMode,
) -> EngineResult<ReactionResult> {
    let (brief, message) = {
        let mut guard = session.lock().await;
        let brief = guard.current_brief()?.clone();
        let message = guard.begin_submit(mode)?;
        (brief, message)
    };

    let (result, ()) = tokio::join!(
        oracle.react(&brief, &message, mode),
        time::sleep(PACING_DELAY),
    );

    let mut guard = session.lock().await;
    guard.complete_level(result.clone());
    Ok(result)
}

/// Run a manual recharge: busy-guarded delay, then the energy payoff.
///
/// Returns the energy level after the payoff.
pub async fn recharge(session: &SharedSession) -> EngineResult<u32> {
    session.lock().await.begin_recharge()?;
    time::sleep(RECHARGE_DELAY).await;
    let mut guard = session.lock().await;
    guard.finish_recharge();
    Ok(guard.state().energy())
}
