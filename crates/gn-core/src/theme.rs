//! Cosmetic phone themes and their palettes.
//!
//! Themes share the money economy but are otherwise independent of
//! gameplay. Palette slots hold semantic color identifiers, not pixel
//! values — rendering is someone else's problem.

use serde::{Deserialize, Serialize};

/// Identifier of a purchasable theme.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ThemeId(String);

impl ThemeId {
    /// Create a theme id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Semantic color slots of a theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Primary accent color.
    pub primary: String,
    /// Secondary accent color.
    pub secondary: String,
    /// Tertiary accent color.
    pub accent: String,
    /// Screen background.
    pub background: String,
    /// Panel/card background.
    pub panel: String,
    /// Border color.
    pub border: String,
    /// Body text color.
    pub text: String,
    /// De-emphasized text and hairlines.
    pub muted: String,
}

/// A purchasable cosmetic theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Stable identifier, referenced by `GameState::unlocked_themes`.
    pub id: ThemeId,
    /// Display name.
    pub name: String,
    /// Price in money; 0 for the free default theme.
    pub price: u32,
    /// Color palette.
    pub palette: Palette,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_id_display_and_eq() {
        let id = ThemeId::from("cyberpunk");
        assert_eq!(id.to_string(), "cyberpunk");
        assert_eq!(id, ThemeId::new("cyberpunk"));
        assert_eq!(id.as_str(), "cyberpunk");
    }
}
