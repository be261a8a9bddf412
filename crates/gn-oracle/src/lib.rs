//! Reaction oracle for Ghostwriter Nexus.
//!
//! The oracle judges a submitted draft: given the brief, the composed
//! message, and the reply mode, it produces a [`gn_core::ReactionResult`].
//! Two implementations ship: a Gemini-backed HTTP client and a
//! deterministic offline oracle for play and tests without a backend.
//! Any client failure is recovered locally into a fixed fallback result,
//! so callers never see an error.

/// The oracle trait and the Gemini-backed client.
pub mod client;
/// Error types internal to the oracle clients.
pub mod error;
/// Deterministic local oracle, no network required.
pub mod offline;
/// Prompt construction for the generative backend.
pub mod prompt;
/// Wire-format parsing and the fixed fallback result.
pub mod response;
/// Splitting reaction text into display segments.
pub mod segment;

/// Re-export the oracle trait and HTTP client.
pub use client::{GeminiClient, ReactionOracle};
/// Re-export the oracle error type.
pub use error::OracleError;
/// Re-export the offline oracle.
pub use offline::OfflineOracle;
/// Re-export the fallback constructor.
pub use response::fallback;
/// Re-export reaction-text segmentation.
pub use segment::{ReactionLine, split_reaction};
