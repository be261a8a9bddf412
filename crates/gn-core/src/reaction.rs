//! Reaction results returned by the oracle and their outcome categories.

use serde::{Deserialize, Serialize};

/// Drama score above which a reaction goes viral on its own.
pub const VIRAL_DRAMA_THRESHOLD: u32 = 65;

/// How the composed message is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyMode {
    /// Standard direct message to the intended recipient.
    Normal,
    /// Emergency reply-all: the message reaches everyone in the scenario.
    ///
    /// Irreversible and always viral, whatever the drama score.
    ReplyAll,
}

impl std::fmt::Display for ReplyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::ReplyAll => write!(f, "reply-all"),
        }
    }
}

/// How a submitted draft landed, as judged by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeCategory {
    /// The client got away with it.
    Success,
    /// It went wrong, but entertainingly.
    FunnyFail,
    /// Career-ending.
    TotalDisaster,
}

impl OutcomeCategory {
    /// Parse the wire-format literal (`"Success"`, `"Funny Fail"`,
    /// `"Total Disaster"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Success" => Some(Self::Success),
            "Funny Fail" => Some(Self::FunnyFail),
            "Total Disaster" => Some(Self::TotalDisaster),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::FunnyFail => write!(f, "Funny Fail"),
            Self::TotalDisaster => write!(f, "Total Disaster"),
        }
    }
}

/// The oracle's verdict on a submitted draft.
///
/// Transient: held for one result-screen display cycle, then replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionResult {
    /// Narrative reaction, newline-delimited, optionally multi-speaker
    /// (`"Speaker: line"` segments).
    pub reaction_text: String,
    /// Drama generated, 0-100.
    pub drama_impact: u32,
    /// Signed reputation change, nominally -20..=20.
    pub reputation_impact: i32,
    /// Whether the exchange went viral. Derived: drama above
    /// [`VIRAL_DRAMA_THRESHOLD`], or any reply-all submission.
    pub is_viral: bool,
    /// Clickbait headline shown when the exchange goes viral.
    pub leaked_commentary: String,
    /// Witty rating title for the player's performance.
    pub rating_title: String,
    /// Client stress, 0-100. Parsed and carried but reserved: no resource
    /// currently consumes it.
    pub stress_impact: u32,
    /// Outcome category.
    pub outcome: OutcomeCategory,
}

impl ReactionResult {
    /// Whether a drama score and reply mode amount to a viral outcome.
    pub fn viral(drama: u32, mode: ReplyMode) -> bool {
        drama > VIRAL_DRAMA_THRESHOLD || mode == ReplyMode::ReplyAll
    }
}
