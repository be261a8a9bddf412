//! Property tests over the draft composer and the resource meters.

use proptest::prelude::*;

use gn_core::{
    FragmentCatalog, GameState, OutcomeCategory, ReactionResult, Slot, ThemeId,
};
use gn_engine::DraftComposer;
use gn_engine::draft::MIN_MESSAGE_CHARS;

/// One player action during drafting. Fragment indices stay within the
/// first level's catalog (three per slot), so every action succeeds.
#[derive(Debug, Clone)]
enum Action {
    Pick(Slot, usize),
    Write(Slot, String),
    Edit(String),
}

fn slot_strategy() -> impl Strategy<Value = Slot> {
    prop_oneof![Just(Slot::Opener), Just(Slot::Pivot), Just(Slot::Closer)]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (slot_strategy(), 0usize..3).prop_map(|(slot, i)| Action::Pick(slot, i)),
        (slot_strategy(), "[a-z ]{0,12}").prop_map(|(slot, t)| Action::Write(slot, t)),
        "[a-z ]{0,20}".prop_map(Action::Edit),
    ]
}

/// The message the composition rule prescribes for the current slots.
fn slot_join(composer: &DraftComposer) -> String {
    Slot::ALL
        .iter()
        .map(|&slot| {
            let free = composer.free_text(slot);
            if !free.is_empty() {
                free.to_string()
            } else if let Some(fragment) = composer.selected_fragment(slot) {
                fragment.text.clone()
            } else {
                String::new()
            }
        })
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn drafting_composer() -> DraftComposer {
    let mut composer =
        DraftComposer::new(FragmentCatalog::built_in().for_level("lvl1_tiffany"));
    composer.begin_drafting().unwrap();
    composer
}

proptest! {
    #[test]
    fn composition_and_exclusivity_hold_for_all_action_sequences(
        actions in prop::collection::vec(action_strategy(), 0..16),
    ) {
        let mut composer = drafting_composer();
        let mut manual_text: Option<String> = None;
        for action in &actions {
            match action {
                Action::Pick(slot, index) => {
                    composer.select_fragment(*slot, *index).unwrap();
                    manual_text = None;
                }
                Action::Write(slot, text) => {
                    composer.set_free_text(*slot, text).unwrap();
                    manual_text = None;
                }
                Action::Edit(text) => {
                    composer.edit_message(text).unwrap();
                    manual_text = Some(text.clone());
                }
            }
            // A slot never holds a fragment and free text at once.
            for slot in Slot::ALL {
                prop_assert!(
                    composer.selected_fragment(slot).is_none()
                        || composer.free_text(slot).is_empty()
                );
            }
            // The message is either the player's verbatim edit or the
            // slot join, opener to closer, single-space separated.
            match &manual_text {
                Some(text) => prop_assert_eq!(composer.message(), text.as_str()),
                None => prop_assert_eq!(composer.message(), slot_join(&composer)),
            }
            prop_assert_eq!(
                composer.is_ready(),
                composer.message().trim().chars().count() > MIN_MESSAGE_CHARS
            );
        }
    }

    #[test]
    fn slot_actions_end_manual_mode(
        text in "[a-z ]{6,20}",
        slot in slot_strategy(),
        index in 0usize..3,
    ) {
        let mut composer = drafting_composer();
        composer.edit_message(&text).unwrap();
        prop_assert!(composer.is_manual_edit());
        prop_assert_eq!(composer.message(), text.as_str());

        composer.select_fragment(slot, index).unwrap();
        prop_assert!(!composer.is_manual_edit());
        prop_assert_eq!(composer.message(), slot_join(&composer));
    }
}

/// One economy mutation on the game state.
#[derive(Debug, Clone)]
enum EconomyOp {
    Regen,
    Recharge,
    Complete { drama: u32, rep: i32, viral: bool },
}

fn economy_op() -> impl Strategy<Value = EconomyOp> {
    prop_oneof![
        Just(EconomyOp::Regen),
        Just(EconomyOp::Recharge),
        (0u32..=100, -20i32..=20, any::<bool>())
            .prop_map(|(drama, rep, viral)| EconomyOp::Complete { drama, rep, viral }),
    ]
}

fn reaction(drama: u32, rep: i32, viral: bool) -> ReactionResult {
    ReactionResult {
        reaction_text: "The Followers: hm.".into(),
        drama_impact: drama,
        reputation_impact: rep,
        is_viral: viral,
        leaked_commentary: "headline".into(),
        rating_title: "title".into(),
        stress_impact: 0,
        outcome: OutcomeCategory::FunnyFail,
    }
}

proptest! {
    #[test]
    fn meters_stay_in_bounds_and_drama_never_drops(
        ops in prop::collection::vec(economy_op(), 0..64),
    ) {
        let mut state = GameState::new(ThemeId::from("y2k"));
        for op in ops {
            let drama_before = state.drama_level();
            match op {
                EconomyOp::Regen => state.regen_tick(),
                EconomyOp::Recharge => state.recharge(),
                EconomyOp::Complete { drama, rep, viral } => {
                    state.apply_reaction(&reaction(drama, rep, viral));
                }
            }
            prop_assert!(state.energy() <= 100);
            prop_assert!(state.reputation() <= 100);
            prop_assert!(state.drama_level() <= 100);
            prop_assert!(state.drama_level() >= drama_before);
        }
    }
}
