//! Game session: setup, the round loop and the final tally.

use tracing::{debug, info};

use crate::cards::Catalog;
use crate::core::config::SessionConfig;
use crate::core::player::{Player, Roster};
use crate::core::rng::GameRng;
use crate::error::GameError;
use crate::io::{Console, ProposalSink};
use crate::rules::scoring::tier_message;
use crate::rules::{RoundEngine, RoundReport};
use crate::zones::Deck;

/// Prompt for `count` player names, re-prompting on blank names.
pub fn setup_roster<C: Console>(console: &mut C, count: usize) -> Result<Roster, GameError> {
    console.show("")?;
    console.show(&format!("Please enter the names of the {count} players:"))?;

    let mut players = Vec::with_capacity(count);
    for seat in 1..=count {
        let player = loop {
            let input = console.read_line(&format!("Player {seat} name"))?;
            match Player::new(&input) {
                Ok(player) => break player,
                Err(e) => console.show(&e.to_string())?,
            }
        };
        players.push(player);
    }

    Ok(Roster::new(players))
}

/// Final result of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// `(name, score)` in seat order.
    pub scores: Vec<(String, u32)>,
    /// Sum of all player scores.
    pub total: u32,
    pub message: &'static str,
    pub rounds_played: u32,
    pub cards_remaining: usize,
}

/// A full game: owns the deck, roster and RNG, and borrows its cards from a `Catalog`.
///
/// Terminal and log access are injected so the same session runs against a
/// real terminal or a script.
pub struct GameSession<'c, C, S> {
    config: SessionConfig,
    deck: Deck<'c>,
    roster: Roster,
    rng: GameRng,
    console: C,
    sink: S,
    round: u32,
    history: Vec<RoundReport>,
}

impl<'c, C: Console, S: ProposalSink> GameSession<'c, C, S> {
    /// Shuffle a deck from `catalog` and prepare to play.
    pub fn new(
        config: SessionConfig,
        catalog: &'c Catalog,
        roster: Roster,
        console: C,
        sink: S,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if roster.len() < 2 {
            return Err(GameError::Config(format!(
                "at least 2 players are needed, got {}",
                roster.len()
            )));
        }

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Deck::shuffled(catalog, &mut rng, config.deck_limit);
        info!(
            variant = ?config.variant,
            players = roster.len(),
            deck = deck.len(),
            seed = rng.seed(),
            "session ready"
        );

        Ok(Self {
            config,
            deck,
            roster,
            rng,
            console,
            sink,
            round: 0,
            history: Vec::new(),
        })
    }

    /// Whether another round will be played.
    #[must_use]
    pub fn has_next_round(&self) -> bool {
        let under_limit = self
            .config
            .round_limit
            .map_or(true, |limit| (self.round as usize) < limit);
        under_limit && !self.deck.is_empty()
    }

    /// Play the next round, or return `None` once the session is over.
    pub fn play_round(&mut self) -> Result<Option<&RoundReport>, GameError> {
        if !self.has_next_round() {
            return Ok(None);
        }

        let round = self.round + 1;
        let mut engine =
            RoundEngine::new(&self.config, &mut self.rng, &mut self.console, &mut self.sink);
        let report = engine.play(round, &mut self.deck, &mut self.roster)?;

        match report {
            Some(report) => {
                self.round = round;
                self.history.push(report);
                Ok(self.history.last())
            }
            None => Ok(None),
        }
    }

    /// Play every remaining round, then show and return the final tally.
    pub fn run(&mut self) -> Result<SessionSummary, GameError> {
        while self.play_round()?.is_some() {}

        if !self.deck.is_empty() {
            debug!(left = self.deck.len(), "round limit reached with cards left");
        }
        let summary = self.summary();
        self.show_summary(&summary)?;
        info!(total = summary.total, rounds = summary.rounds_played, "session over");
        Ok(summary)
    }

    /// Current tally.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let total = self.roster.total_score();
        SessionSummary {
            scores: self
                .roster
                .iter()
                .map(|(_, p)| (p.name().to_string(), p.score))
                .collect(),
            total,
            message: tier_message(i64::from(total)),
            rounds_played: self.round,
            cards_remaining: self.deck.len(),
        }
    }

    fn show_summary(&mut self, summary: &SessionSummary) -> Result<(), GameError> {
        self.console.show("")?;
        self.console.show("--- Final Scores ---")?;
        for (name, score) in &summary.scores {
            self.console.show(&format!("{name}: {score} point(s)"))?;
        }
        self.console
            .show(&format!("Team total: {} point(s)", summary.total))?;
        self.console.show(summary.message)?;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn deck(&self) -> &Deck<'c> {
        &self.deck
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    /// Give back the injected console and sink.
    pub fn into_parts(self) -> (C, S) {
        (self.console, self.sink)
    }
}
