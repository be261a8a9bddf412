//! Static content catalogs: levels, fragments, themes.
//!
//! Catalogs are defined at load time and never mutated. The built-in
//! content ships three briefs, their fragment sets, and four themes.

use std::collections::HashMap;

use crate::brief::{Brief, Client};
use crate::error::{GnError, GnResult};
use crate::fragment::{Fragment, FragmentSet};
use crate::theme::{Palette, Theme, ThemeId};
use crate::tone::Tone;

/// Ordered list of briefs making up the campaign.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    briefs: Vec<Brief>,
}

impl LevelCatalog {
    /// Build a catalog from an ordered list of briefs.
    pub fn new(briefs: Vec<Brief>) -> Self {
        Self { briefs }
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.briefs.len()
    }

    /// Whether the catalog has no levels.
    pub fn is_empty(&self) -> bool {
        self.briefs.is_empty()
    }

    /// The brief at `index`.
    pub fn get(&self, index: usize) -> GnResult<&Brief> {
        self.briefs.get(index).ok_or(GnError::LevelOutOfBounds {
            index,
            len: self.briefs.len(),
        })
    }

    /// Whether `index` is the final level.
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.briefs.len()
    }

    /// The shipped campaign.
    pub fn built_in() -> Self {
        Self::new(vec![
            Brief {
                id: "lvl1_tiffany".into(),
                client: Client {
                    id: "c1".into(),
                    name: "Tiffany".into(),
                    avatar: "avatars/tiffany.jpg".into(),
                    follower_count: 5200,
                },
                scenario: "I posted a photo of a guy's hand to 'soft launch' my boyfriend. \
                           It's actually my ex's hand. My followers are calling me out!"
                    .into(),
                recipient: "The Followers".into(),
                context: "Play it off as a joke or manifestation to stay relatable.".into(),
                is_daily: false,
                event_tag: Some("SOFT LAUNCH SCANDAL".into()),
            },
            Brief {
                id: "valentine_fail".into(),
                client: Client {
                    id: "c4".into(),
                    name: "Sarah".into(),
                    avatar: "avatars/sarah.jpg".into(),
                    follower_count: 1500,
                },
                scenario: "I accidentally sent 'I love you ❤️' to my boss instead of my \
                           partner. I need to fix this NOW before it's awkward!"
                    .into(),
                recipient: "The Boss".into(),
                context: "The boss is professional and confused. We need an acronym or a pivot."
                    .into(),
                is_daily: false,
                event_tag: Some("VALENTINE'S DAY MASSACRE".into()),
            },
            Brief {
                id: "halloween_ghost".into(),
                client: Client {
                    id: "c5".into(),
                    name: "Exorcist Tim".into(),
                    avatar: "avatars/tim.jpg".into(),
                    follower_count: 2200,
                },
                scenario: "My toxic ex keeps 'haunting' my DMs with 'U up?' texts. I need an \
                           'Exorcism Text' so weird they never reply again."
                    .into(),
                recipient: "Toxic Ex".into(),
                context: "Make it so confusing they question their existence.".into(),
                is_daily: false,
                event_tag: Some("GHOSTING SEASON".into()),
            },
        ])
    }
}

/// Fragment sets keyed by level id.
#[derive(Debug, Clone, Default)]
pub struct FragmentCatalog {
    by_level: HashMap<String, FragmentSet>,
}

impl FragmentCatalog {
    /// Build a catalog from per-level fragment sets.
    pub fn new(by_level: HashMap<String, FragmentSet>) -> Self {
        Self { by_level }
    }

    /// The fragments offered for a level.
    ///
    /// Levels without an entry yield an empty set; free-text drafting
    /// still works for them.
    pub fn for_level(&self, level_id: &str) -> FragmentSet {
        self.by_level.get(level_id).cloned().unwrap_or_default()
    }

    /// The shipped fragment sets.
    pub fn built_in() -> Self {
        let mut by_level = HashMap::new();
        by_level.insert(
            "lvl1_tiffany".to_string(),
            FragmentSet {
                openers: vec![
                    Fragment::new("t1_o1", "Um, hands look the same?", Tone::Gaslight),
                    Fragment::new("t1_o2", "Guys, I'm just manifesting...", Tone::Sincere),
                    Fragment::new("t1_o4", "Omg it's not even him,", Tone::Chaotic),
                ],
                pivots: vec![
                    Fragment::new(
                        "t1_m1",
                        "You guys are literally obsessed with my past.",
                        Tone::Gaslight,
                    ),
                    Fragment::new(
                        "t1_m2",
                        "A hand like that... let a girl dream!",
                        Tone::Sincere,
                    ),
                    Fragment::new(
                        "t1_m3",
                        "It's actually his twin brother's hand.",
                        Tone::Chaotic,
                    ),
                ],
                closers: vec![
                    Fragment::new(
                        "t1_c1",
                        "Anyway, use code TIFF20 for 20% off! 💅",
                        Tone::Chaotic,
                    ),
                    Fragment::new("t1_c2", "Manifestation is a mood. ✨", Tone::Sincere),
                    Fragment::new("t1_c3", "Let's focus on the vibes, okay?", Tone::Petty),
                ],
            },
        );
        by_level.insert(
            "valentine_fail".to_string(),
            FragmentSet {
                openers: vec![
                    Fragment::new(
                        "v_o1",
                        "Wait! That was meant for the I.L.O.V.E.U. project!",
                        Tone::Corporate,
                    ),
                    Fragment::new("v_o2", "Omg so sorry, I love everyone today!", Tone::Sincere),
                    Fragment::new(
                        "v_o3",
                        "I said what I said, you're the best.",
                        Tone::Chaotic,
                    ),
                    Fragment::new(
                        "v_o4",
                        "Did I send that? My phone is glitching.",
                        Tone::Gaslight,
                    ),
                ],
                pivots: vec![
                    Fragment::new(
                        "v_m1",
                        "Integrated Logistics Of Various Enterprise Units is finally ready.",
                        Tone::Corporate,
                    ),
                    Fragment::new(
                        "v_m2",
                        "Just feeling the festive Valentine's spirit in the office!",
                        Tone::Sincere,
                    ),
                    Fragment::new(
                        "v_m3",
                        "You're basically like a father figure to me anyway.",
                        Tone::Petty,
                    ),
                    Fragment::new(
                        "v_m4",
                        "I was actually typing 'I loathe you' but autocorrect??",
                        Tone::Chaotic,
                    ),
                ],
                closers: vec![
                    Fragment::new(
                        "v_c1",
                        "I'll send the full report on the units by EOD.",
                        Tone::Corporate,
                    ),
                    Fragment::new(
                        "v_c2",
                        "Anyway, let's just get back to work! 😅",
                        Tone::Sincere,
                    ),
                    Fragment::new("v_c3", "No more coffee for me today! LOL", Tone::Petty),
                    Fragment::new(
                        "v_c4",
                        "Let's never speak of this again. Deal?",
                        Tone::Gaslight,
                    ),
                ],
            },
        );
        by_level.insert(
            "halloween_ghost".to_string(),
            FragmentSet {
                openers: vec![
                    Fragment::new("h_o1", "BEGONE SPIRIT! The ritual has begun.", Tone::Chaotic),
                    Fragment::new(
                        "h_o2",
                        "Who is this? My phone is currently being debugged.",
                        Tone::Gaslight,
                    ),
                    Fragment::new(
                        "h_o3",
                        "I am currently a potato. Please leave a message.",
                        Tone::Chaotic,
                    ),
                    Fragment::new(
                        "h_o4",
                        "Regarding your previous communication,",
                        Tone::Corporate,
                    ),
                ],
                pivots: vec![
                    Fragment::new(
                        "h_m1",
                        "The seven seals have been broken and the beans are spilled.",
                        Tone::Chaotic,
                    ),
                    Fragment::new(
                        "h_m2",
                        "I never actually dated you. You were a mass hallucination.",
                        Tone::Gaslight,
                    ),
                    Fragment::new(
                        "h_m3",
                        "I've sold your number to a telemarketing firm in Mars.",
                        Tone::Petty,
                    ),
                    Fragment::new(
                        "h_m4",
                        "I'm sorry, I only speak in binary now. 01101000 01101001",
                        Tone::Chaotic,
                    ),
                ],
                closers: vec![
                    Fragment::new(
                        "h_c1",
                        "Do not reply or the curse will be permanent.",
                        Tone::Chaotic,
                    ),
                    Fragment::new(
                        "h_c2",
                        "Anyway, hope you find a new ghost soon! 👻",
                        Tone::Sincere,
                    ),
                    Fragment::new(
                        "h_c3",
                        "Please unsubscribe from this existence.",
                        Tone::Petty,
                    ),
                    Fragment::new("h_c4", "Unsubscribe.", Tone::Corporate),
                ],
            },
        );
        Self::new(by_level)
    }
}

/// The purchasable themes, in shop order.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Build a catalog from a list of themes. The first entry is the free
    /// default every session starts with.
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    /// All themes in shop order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// The free default theme.
    pub fn default_theme(&self) -> &Theme {
        &self.themes[0]
    }

    /// Look up a theme by id.
    pub fn get(&self, id: &ThemeId) -> GnResult<&Theme> {
        self.themes
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| GnError::UnknownTheme(id.clone()))
    }

    /// The shipped theme shop.
    pub fn built_in() -> Self {
        Self::new(vec![
            Theme {
                id: ThemeId::from("y2k"),
                name: "Y2K Pink".into(),
                price: 0,
                palette: Palette {
                    primary: "pink-500".into(),
                    secondary: "fuchsia-400".into(),
                    accent: "purple-500".into(),
                    background: "rose-50".into(),
                    panel: "white".into(),
                    border: "pink-200".into(),
                    text: "pink-900".into(),
                    muted: "pink-400".into(),
                },
            },
            Theme {
                id: ThemeId::from("nexus"),
                name: "Nexus Default".into(),
                price: 500,
                palette: Palette {
                    primary: "rose-600".into(),
                    secondary: "rose-500".into(),
                    accent: "blue-600".into(),
                    background: "slate-950".into(),
                    panel: "slate-900".into(),
                    border: "slate-900".into(),
                    text: "white".into(),
                    muted: "white/40".into(),
                },
            },
            Theme {
                id: ThemeId::from("cyberpunk"),
                name: "Cyberpunk".into(),
                price: 1200,
                palette: Palette {
                    primary: "yellow-400".into(),
                    secondary: "cyan-400".into(),
                    accent: "fuchsia-600".into(),
                    background: "zinc-950".into(),
                    panel: "zinc-900".into(),
                    border: "yellow-500".into(),
                    text: "yellow-400".into(),
                    muted: "yellow-400/40".into(),
                },
            },
            Theme {
                id: ThemeId::from("stealth"),
                name: "Dark Stealth".into(),
                price: 2500,
                palette: Palette {
                    primary: "zinc-100".into(),
                    secondary: "zinc-400".into(),
                    accent: "zinc-600".into(),
                    background: "black".into(),
                    panel: "zinc-950".into(),
                    border: "zinc-800".into(),
                    text: "zinc-100".into(),
                    muted: "zinc-600".into(),
                },
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_levels_ordered() {
        let levels = LevelCatalog::built_in();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels.get(0).unwrap().id, "lvl1_tiffany");
        assert_eq!(levels.get(2).unwrap().id, "halloween_ghost");
        assert!(levels.is_last(2));
        assert!(!levels.is_last(0));
    }

    #[test]
    fn out_of_bounds_level_is_an_error() {
        let levels = LevelCatalog::built_in();
        assert!(matches!(
            levels.get(99),
            Err(GnError::LevelOutOfBounds { index: 99, len: 3 })
        ));
    }

    #[test]
    fn every_built_in_level_has_fragments() {
        let levels = LevelCatalog::built_in();
        let fragments = FragmentCatalog::built_in();
        for i in 0..levels.len() {
            let brief = levels.get(i).unwrap();
            let set = fragments.for_level(&brief.id);
            assert!(!set.is_empty(), "level {} has no fragments", brief.id);
        }
    }

    #[test]
    fn unknown_level_yields_empty_set() {
        let fragments = FragmentCatalog::built_in();
        assert!(fragments.for_level("no_such_level").is_empty());
    }

    #[test]
    fn theme_shop_contents() {
        let themes = ThemeCatalog::built_in();
        assert_eq!(themes.themes().len(), 4);
        assert_eq!(themes.default_theme().id, ThemeId::from("y2k"));
        assert_eq!(themes.default_theme().price, 0);
        assert_eq!(themes.get(&ThemeId::from("cyberpunk")).unwrap().price, 1200);
        assert!(matches!(
            themes.get(&ThemeId::from("vaporwave")),
            Err(GnError::UnknownTheme(_))
        ));
    }
}
