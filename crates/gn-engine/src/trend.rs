//! Daily-trend flavor picker.
//!
//! Decorative: a trend is announced on demand and changes nothing in the
//! economy. Pure over the supplied RNG so it stays testable.

use rand::Rng;
use rand::rngs::StdRng;

/// A daily trend announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trend {
    /// Trend name.
    pub name: &'static str,
    /// The drama behind it.
    pub drama: &'static str,
}

/// The rotating trend pool.
pub const TRENDS: [Trend; 3] = [
    Trend {
        name: "AI Boyfriend Scandal",
        drama: "Viral AI Boyfriend caught texting ex-users.",
    },
    Trend {
        name: "Quiet Quitting TikTok",
        drama: "Employee accidentally 'Reply All' to resigning email.",
    },
    Trend {
        name: "Metaverse Real Estate",
        drama: "Landlord trying to evict virtual tenant for 'bad vibes'.",
    },
];

/// Pick today's trend.
pub fn pick_trend(rng: &mut StdRng) -> Trend {
    TRENDS[rng.random_range(0..TRENDS.len())]
}
