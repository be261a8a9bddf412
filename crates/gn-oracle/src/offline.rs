//! Deterministic local oracle, no network required.
//!
//! Scores a draft from fixed phrase tables and a RNG seeded by the brief,
//! the message, and the reply mode, so the same submission always gets the
//! same verdict. Used by the `--offline` frontend mode and by tests.

use std::hash::{DefaultHasher, Hash, Hasher};

use async_trait::async_trait;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gn_core::{Brief, OutcomeCategory, ReactionResult, ReplyMode};

use crate::client::ReactionOracle;

const SUCCESS_LINES: [&str; 3] = [
    "okay honestly? that was smooth.",
    "wait, that actually makes sense.",
    "crisis averted. we never doubted you.",
];

const FAIL_LINES: [&str; 3] = [
    "I have so many questions and none of them are good.",
    "screenshotting this for later. forever, actually.",
    "this raises more questions than it answers??",
];

const DISASTER_LINES: [&str; 3] = [
    "I'm forwarding this to everyone I have ever met.",
    "legal has been notified. so has my therapist.",
    "deleting this app won't delete what I just read.",
];

const EXTRA_SPEAKERS: [&str; 3] = ["Follower69", "Brand Manager", "Toxic Ex"];

const EXTRA_LINES: [&str; 3] = [
    "why am I on this thread?",
    "this is a legal disaster.",
    "so THAT'S what you've been up to.",
];

const HEADLINES: [&str; 4] = [
    "Influencer's Reply Breaks The Internet's Will To Live",
    "Local Texter Invents New Genre Of Apology",
    "Group Chat Declares State Of Emergency",
    "Sources Confirm: The Vibes Are Off",
];

const RATING_TITLES: [&str; 4] = [
    "Certified Smooth Operator",
    "Damage Control Intern",
    "Chaos Gremlin",
    "Pattern Of Behavior",
];

/// A reaction oracle that never leaves the process.
#[derive(Debug, Clone, Default)]
pub struct OfflineOracle;

impl OfflineOracle {
    /// Create an offline oracle.
    pub fn new() -> Self {
        Self
    }

    fn judge(&self, brief: &Brief, message: &str, mode: ReplyMode) -> ReactionResult {
        let mut rng = StdRng::seed_from_u64(submission_seed(brief, message, mode));

        let drama: u32 = match mode {
            ReplyMode::Normal => rng.random_range(15..=85),
            ReplyMode::ReplyAll => rng.random_range(55..=95),
        };
        let (outcome, lines, reputation_impact): (_, &[&str], i32) = if drama < 35 {
            (OutcomeCategory::Success, &SUCCESS_LINES, rng.random_range(5..=15))
        } else if drama <= 70 {
            (OutcomeCategory::FunnyFail, &FAIL_LINES, rng.random_range(-5..=5))
        } else {
            (
                OutcomeCategory::TotalDisaster,
                &DISASTER_LINES,
                rng.random_range(-20..=-5),
            )
        };

        let mut reaction_text = format!(
            "{}: {}",
            brief.recipient,
            lines[rng.random_range(0..lines.len())]
        );
        if mode == ReplyMode::ReplyAll {
            let speaker = EXTRA_SPEAKERS[rng.random_range(0..EXTRA_SPEAKERS.len())];
            let line = EXTRA_LINES[rng.random_range(0..EXTRA_LINES.len())];
            reaction_text.push_str(&format!("\n{speaker}: {line}"));
        }

        ReactionResult {
            reaction_text,
            drama_impact: drama,
            reputation_impact,
            is_viral: ReactionResult::viral(drama, mode),
            leaked_commentary: HEADLINES[rng.random_range(0..HEADLINES.len())].to_string(),
            rating_title: RATING_TITLES[rng.random_range(0..RATING_TITLES.len())].to_string(),
            stress_impact: (drama + rng.random_range(0..=20)).min(100),
            outcome,
        }
    }
}

#[async_trait]
impl ReactionOracle for OfflineOracle {
    async fn react(&self, brief: &Brief, message: &str, mode: ReplyMode) -> ReactionResult {
        self.judge(brief, message, mode)
    }
}

/// Seed the RNG from everything that identifies a submission.
fn submission_seed(brief: &Brief, message: &str, mode: ReplyMode) -> u64 {
    let mut hasher = DefaultHasher::new();
    brief.id.hash(&mut hasher);
    message.hash(&mut hasher);
    (mode == ReplyMode::ReplyAll).hash(&mut hasher);
    hasher.finish()
}
