//! Brief (level) definitions and the clients that commission them.
//!
//! A brief is an immutable catalog entry: the social disaster a client is
//! in, who the reply must go to, and a hint about the expected spin.

use serde::{Deserialize, Serialize};

/// A client who hires the ghostwriter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Stable catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Reference to the client's avatar image.
    pub avatar: String,
    /// Follower count, for flavor and stakes.
    pub follower_count: u32,
}

/// A level definition: scenario, client, recipient, and context hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    /// Stable catalog identifier, also the key into the fragment catalog.
    pub id: String,
    /// The client in trouble.
    pub client: Client,
    /// The situation in the client's own words.
    pub scenario: String,
    /// Who the composed message is addressed to.
    pub recipient: String,
    /// Hint about the angle the reply should take.
    pub context: String,
    /// Whether this brief belongs to a daily rotation.
    pub is_daily: bool,
    /// Optional seasonal event tag, informational only.
    pub event_tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_serde() {
        let brief = Brief {
            id: "lvl_test".into(),
            client: Client {
                id: "c9".into(),
                name: "Test Client".into(),
                avatar: "avatar.png".into(),
                follower_count: 1234,
            },
            scenario: "I did a thing.".into(),
            recipient: "The Group Chat".into(),
            context: "Deny everything.".into(),
            is_daily: false,
            event_tag: Some("SEASONAL".into()),
        };
        let json = serde_json::to_string(&brief).unwrap();
        let back: Brief = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "lvl_test");
        assert_eq!(back.client.follower_count, 1234);
        assert_eq!(back.event_tag.as_deref(), Some("SEASONAL"));
    }
}
