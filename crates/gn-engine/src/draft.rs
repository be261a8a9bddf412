//! Draft composition: slots, free text, and the manual-edit freeze.
//!
//! The composer owns one level's drafting session. Each of the three
//! slots holds either a selected catalog fragment or a free-text
//! override, never both. The composed message is recomputed from the
//! slots until the player edits it directly, after which it is theirs
//! until the composer is reset for a new level.

use gn_core::{Fragment, FragmentSet, ReplyMode, Slot};

use crate::error::{EngineError, EngineResult};

/// Trimmed character count the composed message must exceed to be sent.
pub const MIN_MESSAGE_CHARS: usize = 5;

/// Where the composer is within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    /// Reading the brief; no drafting yet.
    Brief,
    /// Assembling the reply.
    Drafting,
    /// The reply has been handed to the oracle; the composer is inert.
    Submitting,
}

/// One slot's choice: a fragment, a free-text override, or nothing.
#[derive(Debug, Clone, Default)]
struct SlotChoice {
    fragment: Option<Fragment>,
    free_text: String,
}

impl SlotChoice {
    /// The text this slot contributes: free text wins over the fragment.
    fn value(&self) -> &str {
        if !self.free_text.is_empty() {
            &self.free_text
        } else if let Some(fragment) = &self.fragment {
            &fragment.text
        } else {
            ""
        }
    }
}

/// The in-progress reply for the current level.
#[derive(Debug, Clone)]
pub struct DraftComposer {
    fragments: FragmentSet,
    phase: DraftPhase,
    opener: SlotChoice,
    pivot: SlotChoice,
    closer: SlotChoice,
    message: String,
    manual_edit: bool,
}

impl DraftComposer {
    /// Start a fresh draft over a level's fragment set.
    pub fn new(fragments: FragmentSet) -> Self {
        Self {
            fragments,
            phase: DraftPhase::Brief,
            opener: SlotChoice::default(),
            pivot: SlotChoice::default(),
            closer: SlotChoice::default(),
            message: String::new(),
            manual_edit: false,
        }
    }

    /// The fragments this level offers.
    pub fn fragments(&self) -> &FragmentSet {
        &self.fragments
    }

    /// Current drafting phase.
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// The composed message as it stands.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the player has taken manual control of the message.
    pub fn is_manual_edit(&self) -> bool {
        self.manual_edit
    }

    /// The fragment currently selected for a slot, if any.
    pub fn selected_fragment(&self, slot: Slot) -> Option<&Fragment> {
        self.slot(slot).fragment.as_ref()
    }

    /// The free-text override for a slot (empty when none).
    pub fn free_text(&self, slot: Slot) -> &str {
        &self.slot(slot).free_text
    }

    /// Move from reading the brief to drafting.
    pub fn begin_drafting(&mut self) -> EngineResult<()> {
        if self.phase != DraftPhase::Brief {
            return Err(EngineError::WrongPhase("begin drafting"));
        }
        self.phase = DraftPhase::Drafting;
        Ok(())
    }

    /// Select a catalog fragment for a slot.
    ///
    /// Clears the slot's free text, leaves manual-edit mode, and
    /// recomposes the message.
    pub fn select_fragment(&mut self, slot: Slot, index: usize) -> EngineResult<Fragment> {
        self.require_drafting("select a fragment")?;
        let fragment = self
            .fragments
            .for_slot(slot)
            .get(index)
            .cloned()
            .ok_or_else(|| EngineError::UnknownFragment {
                slot: slot.to_string(),
                index,
            })?;
        let choice = self.slot_mut(slot);
        choice.fragment = Some(fragment.clone());
        choice.free_text.clear();
        self.manual_edit = false;
        self.recompose();
        Ok(fragment)
    }

    /// Type free text into a slot.
    ///
    /// Clears the slot's fragment selection, leaves manual-edit mode, and
    /// recomposes the message. An empty string empties the slot.
    pub fn set_free_text(&mut self, slot: Slot, text: &str) -> EngineResult<()> {
        self.require_drafting("type into a slot")?;
        let choice = self.slot_mut(slot);
        choice.free_text = text.to_string();
        choice.fragment = None;
        self.manual_edit = false;
        self.recompose();
        Ok(())
    }

    /// Edit the composed message directly.
    ///
    /// Enters manual-edit mode: slot changes stop recomputing the message
    /// until the composer is reset for a new level.
    pub fn edit_message(&mut self, text: &str) -> EngineResult<()> {
        self.require_drafting("edit the message")?;
        self.message = text.to_string();
        self.manual_edit = true;
        Ok(())
    }

    /// Whether the draft may be submitted.
    pub fn is_ready(&self) -> bool {
        self.message.trim().chars().count() > MIN_MESSAGE_CHARS
    }

    /// Hand the draft over for submission.
    ///
    /// Requires the readiness rule; moves the composer to `Submitting`,
    /// after which it is inert. Returns the composed message.
    pub fn begin_submit(&mut self, _mode: ReplyMode) -> EngineResult<String> {
        self.require_drafting("submit")?;
        if !self.is_ready() {
            return Err(EngineError::DraftNotReady {
                minimum: MIN_MESSAGE_CHARS,
            });
        }
        self.phase = DraftPhase::Submitting;
        Ok(self.message.clone())
    }

    fn require_drafting(&self, action: &'static str) -> EngineResult<()> {
        if self.phase != DraftPhase::Drafting {
            return Err(EngineError::WrongPhase(action));
        }
        Ok(())
    }

    fn slot(&self, slot: Slot) -> &SlotChoice {
        match slot {
            Slot::Opener => &self.opener,
            Slot::Pivot => &self.pivot,
            Slot::Closer => &self.closer,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotChoice {
        match slot {
            Slot::Opener => &mut self.opener,
            Slot::Pivot => &mut self.pivot,
            Slot::Closer => &mut self.closer,
        }
    }

    /// Rebuild the message from the slots, unless the player owns it.
    fn recompose(&mut self) {
        if self.manual_edit {
            return;
        }
        self.message = [&self.opener, &self.pivot, &self.closer]
            .into_iter()
            .map(SlotChoice::value)
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gn_core::{FragmentCatalog, Tone};

    fn composer() -> DraftComposer {
        let mut c = DraftComposer::new(FragmentCatalog::built_in().for_level("lvl1_tiffany"));
        c.begin_drafting().unwrap();
        c
    }

    #[test]
    fn starts_on_the_brief() {
        let c = DraftComposer::new(FragmentSet::default());
        assert_eq!(c.phase(), DraftPhase::Brief);
        assert!(c.message().is_empty());
    }

    #[test]
    fn drafting_actions_require_the_drafting_phase() {
        let mut c = DraftComposer::new(FragmentCatalog::built_in().for_level("lvl1_tiffany"));
        assert!(matches!(
            c.select_fragment(Slot::Opener, 0),
            Err(EngineError::WrongPhase(_))
        ));
        assert!(matches!(c.edit_message("hi"), Err(EngineError::WrongPhase(_))));
        c.begin_drafting().unwrap();
        assert!(c.select_fragment(Slot::Opener, 0).is_ok());
        assert!(matches!(c.begin_drafting(), Err(EngineError::WrongPhase(_))));
    }

    #[test]
    fn composition_joins_slots_in_order() {
        let mut c = composer();
        c.select_fragment(Slot::Closer, 1).unwrap();
        c.select_fragment(Slot::Opener, 0).unwrap();
        assert_eq!(
            c.message(),
            "Um, hands look the same? Manifestation is a mood. ✨"
        );
        c.select_fragment(Slot::Pivot, 2).unwrap();
        assert_eq!(
            c.message(),
            "Um, hands look the same? It's actually his twin brother's hand. \
             Manifestation is a mood. ✨"
        );
    }

    #[test]
    fn empty_slots_are_omitted() {
        let mut c = composer();
        c.select_fragment(Slot::Pivot, 0).unwrap();
        assert_eq!(c.message(), "You guys are literally obsessed with my past.");
    }

    #[test]
    fn free_text_wins_over_fragment_selection() {
        let mut c = composer();
        c.select_fragment(Slot::Opener, 0).unwrap();
        c.set_free_text(Slot::Opener, "Listen.").unwrap();
        assert_eq!(c.selected_fragment(Slot::Opener), None);
        assert_eq!(c.message(), "Listen.");
    }

    #[test]
    fn fragment_selection_clears_free_text() {
        let mut c = composer();
        c.set_free_text(Slot::Closer, "bye.").unwrap();
        let picked = c.select_fragment(Slot::Closer, 2).unwrap();
        assert_eq!(picked.tone, Tone::Petty);
        assert_eq!(c.free_text(Slot::Closer), "");
        assert_eq!(c.message(), picked.text);
    }

    #[test]
    fn slots_are_independent() {
        let mut c = composer();
        c.set_free_text(Slot::Opener, "custom opener").unwrap();
        c.select_fragment(Slot::Pivot, 0).unwrap();
        assert_eq!(c.free_text(Slot::Opener), "custom opener");
        assert!(c.selected_fragment(Slot::Pivot).is_some());
        assert_eq!(c.selected_fragment(Slot::Opener), None);
    }

    #[test]
    fn manual_edit_freezes_recomposition() {
        let mut c = composer();
        c.edit_message("my own masterpiece").unwrap();
        assert!(c.is_manual_edit());
        c.select_fragment(Slot::Opener, 0).unwrap();
        // Selecting leaves manual mode and recomposes from the slots.
        assert!(!c.is_manual_edit());
        assert_eq!(c.message(), "Um, hands look the same?");
    }

    #[test]
    fn manual_edit_holds_until_a_slot_changes() {
        let mut c = composer();
        c.select_fragment(Slot::Opener, 0).unwrap();
        c.edit_message("rewritten").unwrap();
        assert_eq!(c.message(), "rewritten");
        // No slot change: the manual message stands.
        assert!(c.is_manual_edit());
        assert_eq!(c.message(), "rewritten");
    }

    #[test]
    fn readiness_needs_more_than_five_trimmed_chars() {
        let mut c = composer();
        c.edit_message("     ").unwrap();
        assert!(!c.is_ready());
        c.edit_message("12345").unwrap();
        assert!(!c.is_ready());
        c.edit_message("  123456  ").unwrap();
        assert!(c.is_ready());
    }

    #[test]
    fn submit_requires_readiness() {
        let mut c = composer();
        c.edit_message("hi").unwrap();
        assert!(matches!(
            c.begin_submit(ReplyMode::Normal),
            Err(EngineError::DraftNotReady { .. })
        ));
        c.edit_message("hello there").unwrap();
        let message = c.begin_submit(ReplyMode::ReplyAll).unwrap();
        assert_eq!(message, "hello there");
        assert_eq!(c.phase(), DraftPhase::Submitting);
    }

    #[test]
    fn submitting_composer_is_inert() {
        let mut c = composer();
        c.edit_message("hello there").unwrap();
        c.begin_submit(ReplyMode::Normal).unwrap();
        assert!(matches!(
            c.select_fragment(Slot::Opener, 0),
            Err(EngineError::WrongPhase(_))
        ));
        assert!(matches!(
            c.begin_submit(ReplyMode::Normal),
            Err(EngineError::WrongPhase(_))
        ));
    }

    #[test]
    fn unknown_fragment_index_is_an_error() {
        let mut c = composer();
        assert!(matches!(
            c.select_fragment(Slot::Opener, 99),
            Err(EngineError::UnknownFragment { index: 99, .. })
        ));
    }

    #[test]
    fn level_without_fragments_still_drafts_free_text() {
        let mut c = DraftComposer::new(FragmentSet::default());
        c.begin_drafting().unwrap();
        assert!(matches!(
            c.select_fragment(Slot::Opener, 0),
            Err(EngineError::UnknownFragment { .. })
        ));
        c.set_free_text(Slot::Opener, "an entirely custom reply").unwrap();
        assert!(c.is_ready());
    }
}
