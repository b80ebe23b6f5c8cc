//! Round engine.
//!
//! One round walks through fixed phases, in order:
//!
//! `SelectingWord → RevealingToClueGivers → CollectingProposals →
//! Deduplicating → AwaitingGuess → Resolved`
//!
//! The secret word is shown only between two blocking prompts, and the
//! screen is cleared before anyone types a clue, so the guesser never sees
//! it. Invalid input is answered by re-prompting; only terminal failures
//! abort a round.

use tracing::{debug, warn};

use super::dedup::unique_proposals;
use super::proposal::{Proposal, ProposalSet};
use super::scoring::{judge_guess, GuessOutcome};
use crate::cards::{Card, CardId, WordIndex, WORDS_PER_CARD};
use crate::core::config::{RuleVariant, SessionConfig};
use crate::core::player::{PlayerId, Roster};
use crate::core::rng::GameRng;
use crate::error::{GameError, ValidationError};
use crate::io::{Console, ProposalSink};
use crate::zones::Deck;

/// Where a round currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    SelectingWord,
    RevealingToClueGivers,
    CollectingProposals,
    Deduplicating,
    AwaitingGuess,
    Resolved,
}

/// What happened in a completed round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub guesser: PlayerId,
    pub card: CardId,
    pub word_index: WordIndex,
    pub secret_word: String,
    /// Proposals entered before elimination.
    pub proposals_submitted: usize,
    /// Proposals shown to the guesser, in collection order.
    pub shown: Vec<String>,
    pub guess: String,
    pub outcome: GuessOutcome,
    pub cards_consumed: usize,
}

/// Plays single rounds against a deck and roster.
pub struct RoundEngine<'a, C, S> {
    config: &'a SessionConfig,
    rng: &'a mut GameRng,
    console: &'a mut C,
    sink: &'a mut S,
    phase: RoundPhase,
}

impl<'a, C: Console, S: ProposalSink> RoundEngine<'a, C, S> {
    pub fn new(
        config: &'a SessionConfig,
        rng: &'a mut GameRng,
        console: &'a mut C,
        sink: &'a mut S,
    ) -> Self {
        Self {
            config,
            rng,
            console,
            sink,
            phase: RoundPhase::SelectingWord,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    fn enter(&mut self, phase: RoundPhase) {
        debug!(from = ?self.phase, to = ?phase, "round phase");
        self.phase = phase;
    }

    /// Play round `round` with the card at the front of `deck`.
    ///
    /// Returns `None` without prompting anyone if the deck is empty.
    pub fn play(
        &mut self,
        round: u32,
        deck: &mut Deck<'_>,
        roster: &mut Roster,
    ) -> Result<Option<RoundReport>, GameError> {
        let Some(card) = deck.draw() else {
            return Ok(None);
        };
        self.phase = RoundPhase::SelectingWord;

        let guesser = roster.guesser_for_round(round);
        let guesser_name = roster.get(guesser).name().to_string();
        debug!(round, guesser = %guesser_name, card = card.id().raw(), "round start");

        self.console.show("")?;
        self.console.show(&format!("--- Round {round} ---"))?;
        self.console.show(&format!("The guesser is: {guesser_name}"))?;

        let word_index = self.select_word(&guesser_name)?;
        let secret = card.word(word_index).to_string();

        self.enter(RoundPhase::RevealingToClueGivers);
        self.reveal(&secret)?;

        self.enter(RoundPhase::CollectingProposals);
        let proposals = self.collect_proposals(round, card, word_index, guesser, roster)?;

        self.enter(RoundPhase::Deduplicating);
        let shown = self.display_unique(&proposals)?;

        self.enter(RoundPhase::AwaitingGuess);
        let guess = self
            .console
            .read_line(&format!("{guesser_name}, enter your guess"))?
            .trim()
            .to_string();
        let pass_token = self.config.allows_pass().then_some(self.config.pass_token.as_str());
        let outcome = judge_guess(&guess, &secret, pass_token);

        self.enter(RoundPhase::Resolved);
        let cards_consumed = self.resolve(outcome, &secret, guesser, deck, roster)?;

        debug!(round, ?outcome, cards_consumed, remaining = deck.len(), "round resolved");

        Ok(Some(RoundReport {
            round,
            guesser,
            card: card.id(),
            word_index,
            secret_word: secret,
            proposals_submitted: proposals.len(),
            shown,
            guess,
            outcome,
            cards_consumed,
        }))
    }

    fn select_word(&mut self, guesser_name: &str) -> Result<WordIndex, GameError> {
        match self.config.variant {
            RuleVariant::Basic => {
                let slot = self.rng.gen_range_usize(0..WORDS_PER_CARD);
                Ok(WordIndex::from_slot(slot))
            }
            RuleVariant::Advanced => {
                let prompt = format!(
                    "{guesser_name}, enter the number (1-{WORDS_PER_CARD}) of the word you want to guess"
                );
                self.prompt_until_valid(&prompt, WordIndex::parse)
            }
        }
    }

    fn reveal(&mut self, secret: &str) -> Result<(), GameError> {
        self.console.show("")?;
        self.console.show("Clue-givers, please look at the secret word.")?;
        self.console.read_line("Guesser, please look away, then press Enter")?;
        self.console.show(&format!("Secret word (visible to clue-givers): {secret}"))?;
        self.console.read_line("Press Enter when ready to enter proposals")?;
        self.console.clear()?;
        Ok(())
    }

    fn collect_proposals(
        &mut self,
        round: u32,
        card: &Card,
        word_index: WordIndex,
        guesser: PlayerId,
        roster: &Roster,
    ) -> Result<ProposalSet, GameError> {
        let mut proposals = ProposalSet::new();

        for giver in roster.clue_givers(guesser) {
            let name = roster.get(giver).name();
            let prompt = format!("{name}, enter your one-word proposal for word {word_index}");
            let text = self.prompt_until_valid(&prompt, |input| {
                let text = input.trim();
                if text.is_empty() {
                    Err(ValidationError::EmptyProposal)
                } else {
                    Ok(text.to_string())
                }
            })?;

            let proposal = Proposal {
                player_name: name.to_string(),
                round,
                card: card.id(),
                word_index,
                text,
            };
            if let Err(e) = self.sink.record(&proposal) {
                warn!(error = %e, round, player = name, "failed to log proposal, continuing");
            }
            proposals.push(proposal);
        }

        Ok(proposals)
    }

    fn display_unique(&mut self, proposals: &[Proposal]) -> Result<Vec<String>, GameError> {
        let unique: Vec<String> = unique_proposals(proposals)
            .into_iter()
            .map(|p| p.text.clone())
            .collect();

        self.console.show("")?;
        if proposals.is_empty() {
            self.console.show("No proposals were submitted.")?;
        } else if unique.is_empty() {
            self.console.show("All proposals were duplicates and have been removed.")?;
        } else {
            self.console.show("Unique proposals after removing duplicates:")?;
            for (i, word) in unique.iter().enumerate() {
                self.console.show(&format!("{}. {word}", i + 1))?;
            }
        }
        Ok(unique)
    }

    fn resolve(
        &mut self,
        outcome: GuessOutcome,
        secret: &str,
        guesser: PlayerId,
        deck: &mut Deck<'_>,
        roster: &mut Roster,
    ) -> Result<usize, GameError> {
        let consumed = match outcome {
            GuessOutcome::Correct => {
                roster.get_mut(guesser).score += 1;
                self.console.show("Congratulations! You guessed the word correctly.")?;
                deck.consume(1)
            }
            GuessOutcome::Passed => {
                self.console.show(&format!("Passed. The word was: {secret}"))?;
                deck.consume(1)
            }
            GuessOutcome::Incorrect => {
                self.console.show(&format!("Sorry! The correct word was: {secret}"))?;
                let consumed = deck.consume(self.config.wrong_guess_penalty());
                if consumed > 1 {
                    self.console.show("A wrong guess costs an extra card from the deck.")?;
                }
                consumed
            }
        };
        Ok(consumed)
    }

    /// Prompt until `validate` accepts the input, showing each rejection.
    fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, GameError> {
        loop {
            let input = self.console.read_line(prompt)?;
            match validate(&input) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "rejected input");
                    self.console.show(&e.to_string())?;
                }
            }
        }
    }
}
