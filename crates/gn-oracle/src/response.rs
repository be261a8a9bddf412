//! Wire-format parsing and the fixed fallback result.
//!
//! The backend must answer with a JSON object carrying exactly the fields
//! of [`ReactionWire`]. A missing field, a non-JSON body, or an unknown
//! outcome literal is an [`OracleError`]; clients recover to [`fallback`].

use serde::Deserialize;

use gn_core::{OutcomeCategory, ReactionResult, ReplyMode};

use crate::error::OracleError;

/// The raw JSON object the backend is prompted to emit.
#[derive(Debug, Deserialize)]
pub(crate) struct ReactionWire {
    /// The reaction conversation, `Name: Text` lines.
    #[serde(rename = "Recipient_Reaction")]
    recipient_reaction: String,
    /// Heat generated, nominally 1-100.
    #[serde(rename = "Drama_Score")]
    drama_score: f64,
    /// One of the three outcome literals.
    #[serde(rename = "Outcome_Category")]
    outcome_category: String,
    /// Clickbait headline.
    #[serde(rename = "Viral_Headline")]
    viral_headline: String,
    /// Client stress, nominally 1-100.
    #[serde(rename = "stressImpact")]
    stress_impact: f64,
    /// Reputation delta, nominally -20..=20.
    #[serde(rename = "reputationImpact")]
    reputation_impact: f64,
    /// Witty title for the player.
    #[serde(rename = "ratingTitle")]
    rating_title: String,
}

impl ReactionWire {
    /// Convert the wire object into a [`ReactionResult`], deriving the
    /// viral flag and clamping numeric fields to their contract ranges.
    pub(crate) fn into_result(self, mode: ReplyMode) -> Result<ReactionResult, OracleError> {
        let outcome = OutcomeCategory::parse(&self.outcome_category).ok_or_else(|| {
            OracleError::InvalidResponse(format!(
                "unknown outcome category: {:?}",
                self.outcome_category
            ))
        })?;
        let drama = clamp_meter(self.drama_score);
        Ok(ReactionResult {
            reaction_text: self.recipient_reaction,
            drama_impact: drama,
            reputation_impact: (self.reputation_impact.round() as i64).clamp(-20, 20) as i32,
            is_viral: ReactionResult::viral(drama, mode),
            leaked_commentary: self.viral_headline,
            rating_title: self.rating_title,
            stress_impact: clamp_meter(self.stress_impact),
            outcome,
        })
    }
}

/// Clamp a wire number to the 0-100 meter range.
fn clamp_meter(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Parse a backend JSON body into a reaction result.
pub(crate) fn parse_reaction(body: &str, mode: ReplyMode) -> Result<ReactionResult, OracleError> {
    let wire: ReactionWire = serde_json::from_str(body.trim())
        .map_err(|e| OracleError::InvalidResponse(e.to_string()))?;
    wire.into_result(mode)
}

/// The fixed result standing in for total communication failure.
///
/// Zero drama, a reputation hit, `TotalDisaster`, placeholder headline and
/// rating. The session state machine can always complete the transition to
/// the result screen with this.
pub fn fallback() -> ReactionResult {
    ReactionResult {
        reaction_text: "Nexus: Connection severed. Response lost to the void.".to_string(),
        drama_impact: 0,
        reputation_impact: -10,
        is_viral: false,
        leaked_commentary: "Protocol Failure.".to_string(),
        rating_title: "Offline Ghost".to_string(),
        stress_impact: 100,
        outcome: OutcomeCategory::TotalDisaster,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_BODY: &str = r#"{
        "Recipient_Reaction": "Boss: what does ILOVEU stand for?\nSarah: oh no",
        "Drama_Score": 42,
        "Outcome_Category": "Funny Fail",
        "Viral_Headline": "Local employee invents acronym in real time",
        "stressImpact": 77,
        "reputationImpact": -4,
        "ratingTitle": "Damage Control Intern"
    }"#;

    #[test]
    fn parses_a_complete_body() {
        let result = parse_reaction(GOOD_BODY, ReplyMode::Normal).unwrap();
        assert_eq!(result.drama_impact, 42);
        assert_eq!(result.reputation_impact, -4);
        assert_eq!(result.stress_impact, 77);
        assert_eq!(result.outcome, OutcomeCategory::FunnyFail);
        assert!(!result.is_viral);
        assert!(result.reaction_text.contains("Boss:"));
    }

    #[test]
    fn reply_all_forces_viral_at_any_drama() {
        let result = parse_reaction(GOOD_BODY, ReplyMode::ReplyAll).unwrap();
        assert_eq!(result.drama_impact, 42);
        assert!(result.is_viral);
    }

    #[test]
    fn high_drama_is_viral_on_its_own() {
        let body = GOOD_BODY.replace("\"Drama_Score\": 42", "\"Drama_Score\": 80");
        let result = parse_reaction(&body, ReplyMode::Normal).unwrap();
        assert!(result.is_viral);
    }

    #[test]
    fn missing_field_is_rejected() {
        let body = r#"{"Recipient_Reaction": "hi", "Drama_Score": 10}"#;
        assert!(matches!(
            parse_reaction(body, ReplyMode::Normal),
            Err(OracleError::InvalidResponse(_))
        ));
    }

    #[test]
    fn non_json_body_is_rejected() {
        assert!(parse_reaction("the dog ate the JSON", ReplyMode::Normal).is_err());
    }

    #[test]
    fn unknown_outcome_literal_is_rejected() {
        let body = GOOD_BODY.replace("Funny Fail", "Shrug");
        assert!(parse_reaction(&body, ReplyMode::Normal).is_err());
    }

    #[test]
    fn numbers_clamp_to_contract_ranges() {
        let body = GOOD_BODY
            .replace("\"Drama_Score\": 42", "\"Drama_Score\": 900")
            .replace("\"reputationImpact\": -4", "\"reputationImpact\": -55")
            .replace("\"stressImpact\": 77", "\"stressImpact\": -3");
        let result = parse_reaction(&body, ReplyMode::Normal).unwrap();
        assert_eq!(result.drama_impact, 100);
        assert_eq!(result.reputation_impact, -20);
        assert_eq!(result.stress_impact, 0);
    }

    #[test]
    fn fallback_is_the_documented_disaster() {
        let result = fallback();
        assert_eq!(result.outcome, OutcomeCategory::TotalDisaster);
        assert_eq!(result.drama_impact, 0);
        assert_eq!(result.reputation_impact, -10);
        assert_eq!(result.stress_impact, 100);
        assert!(!result.is_viral);
        assert_eq!(result.rating_title, "Offline Ghost");
        assert_eq!(result.leaked_commentary, "Protocol Failure.");
    }
}
