//! Prompt construction for the generative backend.
//!
//! The prompt pins down the wire format: one `Name: message` line per
//! speaker in the reaction, and a JSON object with the exact fields
//! `response.rs` parses. Changing either side alone breaks the contract.

use gn_core::{Brief, ReplyMode};

/// Build the full prompt for one submitted draft.
pub fn build_prompt(brief: &Brief, message: &str, mode: ReplyMode) -> String {
    let modality = match mode {
        ReplyMode::Normal => "Standard direct message.".to_string(),
        ReplyMode::ReplyAll => "CRITICAL ERROR: PLAYER CLICKED 'REPLY ALL'. The message was \
                                sent to EVERYONE involved in the scenario, including potential \
                                brand managers, followers, and exes."
            .to_string(),
    };

    format!(
        "System Instruction: You are the 'Ghostwriter Game Engine'. The player is a social \
         media fixer.\n\
         \n\
         [Scenario]: {scenario}\n\
         [Context]: {context}\n\
         [Recipient]: {recipient}\n\
         [Player's Draft]: \"{message}\"\n\
         [Modality]: {modality}\n\
         \n\
         CRITICAL FORMATTING:\n\
         - Act as the recipient(s) responding to this message.\n\
         - If multiple people respond (especially in 'Reply All'), use the format \
         \"Name: Message\" for each response on a new line.\n\
         - Examples: \"Follower69: No way!\", \"Brand Manager: This is a legal disaster.\", \
         \"Boyfriend: Who's hand is that?\".\n\
         \n\
         Output a JSON response containing:\n\
         - Recipient_Reaction: (The text of the conversation. Use \"Name: Text\" format).\n\
         - Drama_Score: (A number 1-100 representing the heat generated).\n\
         - Outcome_Category: (Must be one of: \"Success\", \"Funny Fail\", or \
         \"Total Disaster\").\n\
         - Viral_Headline: (A funny clickbait title for the result).\n\
         - stressImpact: (1-100 scale of how stressed the client is).\n\
         - reputationImpact: (-20 to +20 change in score).\n\
         - ratingTitle: (A witty title for the player).",
        scenario = brief.scenario,
        context = brief.context,
        recipient = brief.recipient,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gn_core::{Client, LevelCatalog};

    fn test_brief() -> Brief {
        Brief {
            id: "lvl_test".into(),
            client: Client {
                id: "c0".into(),
                name: "Pat".into(),
                avatar: "a.png".into(),
                follower_count: 10,
            },
            scenario: "I replied to the wrong thread.".into(),
            recipient: "The Group Chat".into(),
            context: "Keep it breezy.".into(),
            is_daily: false,
            event_tag: None,
        }
    }

    #[test]
    fn prompt_carries_all_request_fields() {
        let prompt = build_prompt(&test_brief(), "so anyway lol", ReplyMode::Normal);
        assert!(prompt.contains("I replied to the wrong thread."));
        assert!(prompt.contains("Keep it breezy."));
        assert!(prompt.contains("The Group Chat"));
        assert!(prompt.contains("\"so anyway lol\""));
        assert!(prompt.contains("Standard direct message."));
    }

    #[test]
    fn reply_all_changes_the_modality() {
        let prompt = build_prompt(&test_brief(), "so anyway lol", ReplyMode::ReplyAll);
        assert!(prompt.contains("REPLY ALL"));
        assert!(!prompt.contains("Standard direct message."));
    }

    #[test]
    fn prompt_names_every_wire_field() {
        let brief = LevelCatalog::built_in().get(0).unwrap().clone();
        let prompt = build_prompt(&brief, "hi", ReplyMode::Normal);
        for field in [
            "Recipient_Reaction",
            "Drama_Score",
            "Outcome_Category",
            "Viral_Headline",
            "stressImpact",
            "reputationImpact",
            "ratingTitle",
        ] {
            assert!(prompt.contains(field), "prompt missing {field}");
        }
    }
}
