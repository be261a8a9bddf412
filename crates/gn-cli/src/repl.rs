//! Interactive command loop over a shared game session.
//!
//! One command per line, one response per command. Errors from the
//! session are printed and the loop continues; only stdin EOF or an
//! explicit `quit` ends it.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

use gn_core::{Brief, ReactionResult, ReplyMode, Slot, ThemeId};
use gn_engine::error::EngineResult;
use gn_engine::runtime::{self, SharedSession};
use gn_engine::{Screen, SessionController, pick_trend};
use gn_oracle::{ReactionOracle, split_reaction};

const BANNER: &str = "GHOSTWRITER NEXUS — you are the fixer. Type 'help' for commands.";

const HELP: &str = "\
status               resources, screen, regeneration countdown
trend                today's trend
start                take the next gig (costs 25 energy)
reply                start drafting the reply
fragments            list the fragments this level offers
pick <slot> <n>      select fragment n for a slot (opener|pivot|closer)
write <slot> <text>  put your own text in a slot
edit <text>          rewrite the whole message by hand
draft                show the composed message
send                 send the reply
sendall              EMERGENCY REPLY ALL (always goes viral)
next                 leave the result screen
shop                 browse the theme market
buy <id>             buy or switch to a theme
back                 leave the theme market
recharge             watch an ad for +50 energy
quit                 hang up";

/// The interactive frontend over one session.
pub struct Repl {
    session: SharedSession,
    oracle: Box<dyn ReactionOracle>,
    rng: StdRng,
}

impl Repl {
    /// A fresh session over the built-in campaign.
    pub fn new(oracle: Box<dyn ReactionOracle>, seed: u64) -> Self {
        Self {
            session: runtime::share(SessionController::built_in()),
            oracle,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Read commands from stdin until EOF or `quit`.
    pub async fn run(mut self) -> io::Result<()> {
        let _timers = runtime::spawn_clock(&self.session);

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{BANNER}")?;
        let mut line = String::new();
        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;
            line.clear();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match self.process(line.trim()).await {
                Ok(Some(output)) => writeln!(stdout, "{output}")?,
                Ok(None) => break,
                Err(e) => writeln!(stdout, "error: {e}")?,
            }
        }
        Ok(())
    }

    /// Dispatch one command line. `Ok(None)` means quit.
    async fn process(&mut self, input: &str) -> EngineResult<Option<String>> {
        let mut parts = input.splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or("").to_lowercase();
        let rest = parts.next().unwrap_or("").trim();

        let output = match cmd.as_str() {
            "status" => self.do_status().await,
            "trend" => self.do_trend(),
            "start" => self.do_start().await?,
            "reply" => self.do_reply().await?,
            "fragments" => self.do_fragments().await?,
            "pick" => self.do_pick(rest).await?,
            "write" => self.do_write(rest).await?,
            "edit" => self.do_edit(rest).await?,
            "draft" => self.do_draft().await?,
            "send" => self.do_send(ReplyMode::Normal).await?,
            "sendall" => self.do_send(ReplyMode::ReplyAll).await?,
            "next" => self.do_next().await?,
            "shop" => self.do_shop().await?,
            "buy" => self.do_buy(rest).await?,
            "back" => self.do_back().await?,
            "recharge" => self.do_recharge().await?,
            "help" => HELP.to_string(),
            "quit" | "exit" => return Ok(None),
            _ => format!("unknown command: {cmd} (try 'help')"),
        };
        Ok(Some(output))
    }

    async fn do_status(&self) -> String {
        let guard = self.session.lock().await;
        let state = guard.state();
        let mut out = format!(
            "screen: {}\nmoney: ${}  reputation: {}  energy: {}%  drama: {}",
            guard.screen(),
            state.money(),
            state.reputation(),
            state.energy(),
            state.drama_level(),
        );
        let _ = write!(
            out,
            "\ntheme: {}  next +1 energy in {}",
            state.current_theme(),
            guard.clock().countdown_display(),
        );
        if let Some(event) = state.active_event() {
            let _ = write!(out, "\nevent: {event}");
        }
        out
    }

    fn do_trend(&mut self) -> String {
        let trend = pick_trend(&mut self.rng);
        format!("TRENDING: {} — {}", trend.name, trend.drama)
    }

    async fn do_start(&self) -> EngineResult<String> {
        let mut guard = self.session.lock().await;
        let brief = guard.start_level()?;
        Ok(format!("{}\n\nType 'reply' to start drafting.", format_brief(brief)))
    }

    async fn do_reply(&self) -> EngineResult<String> {
        let mut guard = self.session.lock().await;
        guard.draft_mut()?.begin_drafting()?;
        Ok("Drafting. 'fragments' lists what you can tap; 'write' and 'edit' are all yours.".into())
    }

    async fn do_fragments(&self) -> EngineResult<String> {
        let guard = self.session.lock().await;
        let fragments = guard.draft()?.fragments().clone();
        if fragments.is_empty() {
            return Ok("No fragments for this gig; 'write' or 'edit' your own reply.".into());
        }
        let mut out = String::new();
        for slot in Slot::ALL {
            for (i, fragment) in fragments.for_slot(slot).iter().enumerate() {
                let _ = writeln!(out, "{slot} {i}: [{}] {}", fragment.tone, fragment.text);
            }
        }
        Ok(out.trim_end().to_string())
    }

    async fn do_pick(&self, rest: &str) -> EngineResult<String> {
        let Some((slot, index)) = parse_slot_arg(rest) else {
            return Ok("usage: pick <opener|pivot|closer> <number>".into());
        };
        let Ok(index) = index.parse::<usize>() else {
            return Ok("usage: pick <opener|pivot|closer> <number>".into());
        };
        let mut guard = self.session.lock().await;
        let fragment = guard.draft_mut()?.select_fragment(slot, index)?;
        Ok(format!(
            "{slot} ← [{}] {}\ndraft: {}",
            fragment.tone,
            fragment.text,
            guard.draft()?.message(),
        ))
    }

    async fn do_write(&self, rest: &str) -> EngineResult<String> {
        let Some((slot, text)) = parse_slot_arg(rest) else {
            return Ok("usage: write <opener|pivot|closer> <text>".into());
        };
        let mut guard = self.session.lock().await;
        guard.draft_mut()?.set_free_text(slot, text)?;
        Ok(format!("{slot} ← (yours)\ndraft: {}", guard.draft()?.message()))
    }

    async fn do_edit(&self, text: &str) -> EngineResult<String> {
        let mut guard = self.session.lock().await;
        guard.draft_mut()?.edit_message(text)?;
        Ok(format!("draft (manual): {}", guard.draft()?.message()))
    }

    async fn do_draft(&self) -> EngineResult<String> {
        let guard = self.session.lock().await;
        let draft = guard.draft()?;
        let readiness = if draft.is_ready() { "ready to send" } else { "too short to send" };
        let manual = if draft.is_manual_edit() { ", manual edit" } else { "" };
        Ok(format!("draft: {}\n({readiness}{manual})", draft.message()))
    }

    async fn do_send(&self, mode: ReplyMode) -> EngineResult<String> {
        let result = runtime::submit(&self.session, self.oracle.as_ref(), mode).await?;
        let guard = self.session.lock().await;
        Ok(format_result(&result, guard.state().money()))
    }

    async fn do_next(&self) -> EngineResult<String> {
        let mut guard = self.session.lock().await;
        match guard.next_level()? {
            Screen::Game => Ok(format!(
                "{}\n\nType 'reply' to start drafting.",
                format_brief(guard.current_brief()?)
            )),
            _ => Ok("That was the last gig. Back home.".into()),
        }
    }

    async fn do_shop(&self) -> EngineResult<String> {
        let mut guard = self.session.lock().await;
        guard.open_theme_shop()?;
        let mut out = String::from("THEME MARKET\n");
        for theme in guard.themes().themes() {
            let tag = if guard.state().current_theme() == &theme.id {
                "active"
            } else if guard.state().unlocked_themes().contains(&theme.id) {
                "owned"
            } else {
                "locked"
            };
            let _ = writeln!(out, "{}: {} — ${} ({tag})", theme.id, theme.name, theme.price);
        }
        out.push_str("'buy <id>' to buy or switch, 'back' to leave.");
        Ok(out)
    }

    async fn do_buy(&self, id: &str) -> EngineResult<String> {
        let mut guard = self.session.lock().await;
        let id = ThemeId::from(id);
        let activation = guard.activate_theme(&id)?;
        let money = guard.state().money();
        Ok(match activation {
            gn_core::ThemeActivation::Purchased => {
                format!("Purchased '{id}'. Balance: ${money}.")
            }
            gn_core::ThemeActivation::Switched => format!("Switched to '{id}'."),
        })
    }

    async fn do_back(&self) -> EngineResult<String> {
        self.session.lock().await.close_theme_shop()?;
        Ok("Back home.".into())
    }

    async fn do_recharge(&self) -> EngineResult<String> {
        let energy = runtime::recharge(&self.session).await?;
        Ok(format!("Ad over. Battery at {energy}%."))
    }
}

/// Split a `<slot> <rest>` argument pair.
fn parse_slot_arg(rest: &str) -> Option<(Slot, &str)> {
    let mut parts = rest.splitn(2, char::is_whitespace);
    let slot = match parts.next().unwrap_or("").to_lowercase().as_str() {
        "opener" => Slot::Opener,
        "pivot" => Slot::Pivot,
        "closer" => Slot::Closer,
        _ => return None,
    };
    Some((slot, parts.next().unwrap_or("").trim()))
}

fn format_brief(brief: &Brief) -> String {
    let mut out = format!(
        "NEW GIG: {} ({} followers)",
        brief.client.name, brief.client.follower_count
    );
    if let Some(tag) = &brief.event_tag {
        let _ = write!(out, " [{tag}]");
    }
    let _ = write!(
        out,
        "\n\"{}\"\nreply to: {}\nangle: {}",
        brief.scenario, brief.recipient, brief.context
    );
    out
}

fn format_result(result: &ReactionResult, money: u32) -> String {
    let mut out = String::new();
    for line in split_reaction(&result.reaction_text) {
        match line.speaker {
            Some(speaker) => {
                let _ = writeln!(out, "  {speaker}: {}", line.text);
            }
            None => {
                let _ = writeln!(out, "  {}", line.text);
            }
        }
    }
    let _ = write!(
        out,
        "outcome: {} (drama +{}, reputation {:+})",
        result.outcome, result.drama_impact, result.reputation_impact
    );
    if result.is_viral {
        let _ = write!(out, "\nVIRAL: {}", result.leaked_commentary);
    }
    let _ = write!(
        out,
        "\nrating: {}\nbalance: ${money}\n'next' to move on.",
        result.rating_title
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gn_core::{OutcomeCategory, Tone};
    use gn_engine::error::EngineError;

    #[test]
    fn parse_slot_arg_accepts_the_three_slots() {
        assert_eq!(parse_slot_arg("opener 2"), Some((Slot::Opener, "2")));
        assert_eq!(parse_slot_arg("pivot hello there"), Some((Slot::Pivot, "hello there")));
        assert_eq!(parse_slot_arg("closer"), Some((Slot::Closer, "")));
        assert_eq!(parse_slot_arg("subject line"), None);
    }

    #[test]
    fn brief_formatting_carries_the_event_tag() {
        let brief = gn_core::LevelCatalog::built_in().get(0).unwrap().clone();
        let text = format_brief(&brief);
        assert!(text.contains("Tiffany"));
        assert!(text.contains("[SOFT LAUNCH SCANDAL]"));
        assert!(text.contains("reply to: The Followers"));
    }

    #[test]
    fn result_formatting_shows_viral_headline_only_when_viral() {
        let mut result = ReactionResult {
            reaction_text: "The Boss: noted.\n[HR]: we saw that.".into(),
            drama_impact: 70,
            reputation_impact: -10,
            is_viral: true,
            leaked_commentary: "Local Fixer Fixes Nothing".into(),
            rating_title: "Chaos Gremlin".into(),
            stress_impact: 50,
            outcome: OutcomeCategory::FunnyFail,
        };
        let text = format_result(&result, 2750);
        assert!(text.contains("  The Boss: noted."));
        assert!(text.contains("  HR: we saw that."));
        assert!(text.contains("VIRAL: Local Fixer Fixes Nothing"));
        assert!(text.contains("balance: $2750"));

        result.is_viral = false;
        assert!(!format_result(&result, 0).contains("VIRAL"));
    }

    #[tokio::test]
    async fn scripted_commands_drive_a_level() {
        let mut repl = Repl::new(Box::new(gn_oracle::OfflineOracle::new()), 7);
        repl.process("start").await.unwrap();
        repl.process("reply").await.unwrap();
        let listing = repl.process("fragments").await.unwrap().unwrap();
        assert!(listing.contains(&format!("[{}]", Tone::Gaslight)));
        let picked = repl.process("pick opener 0").await.unwrap().unwrap();
        assert!(picked.contains("draft: "));
        let err = repl.process("pick opener 99").await;
        assert!(matches!(err, Err(EngineError::UnknownFragment { .. })));
        let draft = repl.process("draft").await.unwrap().unwrap();
        assert!(draft.contains("too short to send") || draft.contains("ready to send"));
    }

    #[tokio::test]
    async fn unknown_commands_do_not_error() {
        let mut repl = Repl::new(Box::new(gn_oracle::OfflineOracle::new()), 7);
        let out = repl.process("defenestrate").await.unwrap().unwrap();
        assert!(out.contains("unknown command"));
        assert!(repl.process("quit").await.unwrap().is_none());
    }
}
