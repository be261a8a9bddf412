//! Tone classification for message fragments.

use serde::{Deserialize, Serialize};

/// The rhetorical register of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// Earnest and apologetic.
    Sincere,
    /// Denies what everyone plainly saw.
    Gaslight,
    /// Small-minded retaliation.
    Petty,
    /// HR-approved deflection.
    Corporate,
    /// Pure nonsense, maximally destabilizing.
    Chaotic,
    /// Goes for the throat.
    Savage,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sincere => write!(f, "Sincere"),
            Self::Gaslight => write!(f, "Gaslight"),
            Self::Petty => write!(f, "Petty"),
            Self::Corporate => write!(f, "Corporate"),
            Self::Chaotic => write!(f, "Chaotic"),
            Self::Savage => write!(f, "Savage"),
        }
    }
}
