//! The session controller owning the game state.
//!
//! `SessionController` is the single mutation entry point for a session:
//! every screen transition and every resource change is one method call,
//! so multi-field updates are atomic from any observer's point of view.
//! The controller itself is synchronous and deterministic; the async
//! shell in [`crate::runtime`] drives it.

use gn_core::state::ENERGY_COST_PER_LEVEL;
use gn_core::{
    Brief, FragmentCatalog, GameState, LevelCatalog, ReactionResult, ReplyMode, Theme,
    ThemeActivation, ThemeCatalog, ThemeId,
};

use crate::clock::EnergyClock;
use crate::draft::DraftComposer;
use crate::error::{EngineError, EngineResult};
use crate::screen::Screen;

/// Orchestrates one play session over the static catalogs.
pub struct SessionController {
    state: GameState,
    screen: Screen,
    levels: LevelCatalog,
    fragments: FragmentCatalog,
    themes: ThemeCatalog,
    draft: Option<DraftComposer>,
    last_result: Option<ReactionResult>,
    clock: EnergyClock,
    sending: bool,
    charging: bool,
}

impl SessionController {
    /// Start a session over the given catalogs.
    pub fn new(levels: LevelCatalog, fragments: FragmentCatalog, themes: ThemeCatalog) -> Self {
        let state = GameState::new(themes.default_theme().id.clone());
        Self {
            state,
            screen: Screen::Home,
            levels,
            fragments,
            themes,
            draft: None,
            last_result: None,
            clock: EnergyClock::new(),
            sending: false,
            charging: false,
        }
    }

    /// Start a session over the shipped content.
    pub fn built_in() -> Self {
        Self::new(
            LevelCatalog::built_in(),
            FragmentCatalog::built_in(),
            ThemeCatalog::built_in(),
        )
    }

    /// The game state (read-only; mutations go through the controller).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The regeneration countdown.
    pub fn clock(&self) -> &EnergyClock {
        &self.clock
    }

    /// The theme shop contents.
    pub fn themes(&self) -> &ThemeCatalog {
        &self.themes
    }

    /// The brief for the current level.
    pub fn current_brief(&self) -> EngineResult<&Brief> {
        Ok(self.levels.get(self.state.current_level_index())?)
    }

    /// The active theme's full definition.
    pub fn current_theme(&self) -> EngineResult<&Theme> {
        Ok(self.themes.get(self.state.current_theme())?)
    }

    /// The reaction from the last completed level, if any.
    pub fn last_result(&self) -> Option<&ReactionResult> {
        self.last_result.as_ref()
    }

    /// The draft composer for the active level.
    pub fn draft(&self) -> EngineResult<&DraftComposer> {
        self.draft.as_ref().ok_or(EngineError::NoActiveDraft)
    }

    /// Mutable access to the active level's draft composer.
    pub fn draft_mut(&mut self) -> EngineResult<&mut DraftComposer> {
        self.draft.as_mut().ok_or(EngineError::NoActiveDraft)
    }

    /// Whether a submission is in flight.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Whether a recharge is in flight.
    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// Go online: `Home → Game`, gated by the energy cost.
    ///
    /// On failure nothing changes; the frontend surfaces the gate as a
    /// disabled action, not an error dialog.
    pub fn start_level(&mut self) -> EngineResult<&Brief> {
        if self.screen != Screen::Home {
            return Err(EngineError::WrongScreen {
                action: "start a level",
                screen: self.screen,
            });
        }
        if !self.state.can_start_level() {
            return Err(EngineError::InsufficientEnergy {
                needed: ENERGY_COST_PER_LEVEL,
                have: self.state.energy(),
            });
        }
        self.enter_level()
    }

    /// Hand the current draft to the oracle.
    ///
    /// Guarded by the in-flight flag; the composer enforces readiness.
    /// Returns the composed message for the oracle call. The caller must
    /// follow up with [`Self::complete_level`] once the oracle resolves.
    pub fn begin_submit(&mut self, mode: ReplyMode) -> EngineResult<String> {
        if self.screen != Screen::Game {
            return Err(EngineError::WrongScreen {
                action: "submit a draft",
                screen: self.screen,
            });
        }
        if self.sending {
            return Err(EngineError::SubmissionInFlight);
        }
        let message = self.draft_mut()?.begin_submit(mode)?;
        self.sending = true;
        Ok(message)
    }

    /// Land the oracle's verdict: `Game → Result`, one atomic update.
    pub fn complete_level(&mut self, result: ReactionResult) {
        self.state.apply_reaction(&result);
        tracing::info!(
            outcome = %result.outcome,
            drama = result.drama_impact,
            viral = result.is_viral,
            "level complete"
        );
        self.last_result = Some(result);
        self.draft = None;
        self.sending = false;
        self.screen = Screen::Result;
    }

    /// Leave the result screen: next level if one remains, else home.
    pub fn next_level(&mut self) -> EngineResult<Screen> {
        if self.screen != Screen::Result {
            return Err(EngineError::WrongScreen {
                action: "advance",
                screen: self.screen,
            });
        }
        if self.state.advance_level(self.levels.len()) {
            self.enter_level()?;
        } else {
            self.screen = Screen::Home;
        }
        Ok(self.screen)
    }

    /// Browse the theme market: `Home → ThemeShop`.
    pub fn open_theme_shop(&mut self) -> EngineResult<()> {
        if self.screen != Screen::Home {
            return Err(EngineError::WrongScreen {
                action: "open the theme shop",
                screen: self.screen,
            });
        }
        self.screen = Screen::ThemeShop;
        Ok(())
    }

    /// Back to the home screen from the theme market.
    pub fn close_theme_shop(&mut self) -> EngineResult<()> {
        if self.screen != Screen::ThemeShop {
            return Err(EngineError::WrongScreen {
                action: "leave the theme shop",
                screen: self.screen,
            });
        }
        self.screen = Screen::Home;
        Ok(())
    }

    /// Activate a theme, buying it first if not yet owned.
    ///
    /// Insufficient funds reject the purchase and leave everything
    /// unchanged.
    pub fn activate_theme(&mut self, id: &ThemeId) -> EngineResult<ThemeActivation> {
        if self.screen != Screen::ThemeShop {
            return Err(EngineError::WrongScreen {
                action: "activate a theme",
                screen: self.screen,
            });
        }
        let theme = self.themes.get(id)?.clone();
        let activation = self.state.activate_theme(&theme)?;
        if activation == ThemeActivation::Purchased {
            tracing::info!(theme = %theme.id, price = theme.price, "theme purchased");
        }
        Ok(activation)
    }

    /// Start a manual recharge; the payoff lands via
    /// [`Self::finish_recharge`] after the ad delay.
    pub fn begin_recharge(&mut self) -> EngineResult<()> {
        if self.charging {
            return Err(EngineError::RechargeInFlight);
        }
        self.charging = true;
        Ok(())
    }

    /// Land the recharge payoff and clear the busy flag.
    pub fn finish_recharge(&mut self) {
        self.state.recharge();
        self.charging = false;
    }

    /// Advance the session clock by one second.
    ///
    /// Returns whether a regeneration tick fired.
    pub fn tick_second(&mut self) -> bool {
        self.clock.tick_second(&mut self.state)
    }

    /// Enter the current level: fresh composer, game screen.
    fn enter_level(&mut self) -> EngineResult<&Brief> {
        let brief = self.levels.get(self.state.current_level_index())?;
        self.draft = Some(DraftComposer::new(self.fragments.for_level(&brief.id)));
        self.screen = Screen::Game;
        Ok(brief)
    }
}
