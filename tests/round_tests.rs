//! Round engine tests through the public API.
//!
//! These exercise single rounds with scripted input: phase ordering,
//! proposal logging, and how log failures are tolerated.

mod common;

use std::io;

use common::{catalog, roster};
use just_one::cards::CardId;
use just_one::core::{GameRng, PlayerId, SessionConfig};
use just_one::io::{ConsoleEvent, MemoryProposalLog, ProposalSink, ScriptedConsole};
use just_one::rules::{GuessOutcome, Proposal, RoundEngine, RoundPhase};
use just_one::zones::Deck;

/// Sink whose disk is always full.
struct BrokenSink {
    attempts: usize,
}

impl ProposalSink for BrokenSink {
    fn record(&mut self, _proposal: &Proposal) -> io::Result<()> {
        self.attempts += 1;
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }
}

/// Log failures are reported but the round still completes.
#[test]
fn test_round_survives_log_failure() {
    let catalog = catalog(2);
    let mut deck = Deck::from_cards(catalog.iter());
    let mut roster = roster();
    let config = SessionConfig::advanced();
    let mut rng = GameRng::new(1);
    let mut console = ScriptedConsole::new(["1", "", "", "a", "b", "c", "d", "w1_1"]);
    let mut sink = BrokenSink { attempts: 0 };

    let report = RoundEngine::new(&config, &mut rng, &mut console, &mut sink)
        .play(1, &mut deck, &mut roster)
        .unwrap()
        .unwrap();

    assert_eq!(sink.attempts, 4);
    assert_eq!(report.outcome, GuessOutcome::Correct);
    assert_eq!(roster.total_score(), 1);
}

/// Each logged proposal carries round, player, card and word index.
#[test]
fn test_logged_proposal_fields() {
    let catalog = catalog(2);
    let mut deck = Deck::from_cards(catalog.iter());
    let mut roster = roster();
    let config = SessionConfig::advanced();
    let mut rng = GameRng::new(1);
    let mut console = ScriptedConsole::new(["4", "", "", " spaced ", "b", "c", "d", "nope"]);
    let mut log = MemoryProposalLog::new();

    RoundEngine::new(&config, &mut rng, &mut console, &mut log)
        .play(2, &mut deck, &mut roster)
        .unwrap();

    let first = &log.entries()[0];
    assert_eq!(first.round, 2);
    assert_eq!(first.player_name, "Ada");
    assert_eq!(first.card, CardId::new(1));
    assert_eq!(first.word_index.get(), 4);
    assert_eq!(first.text, "spaced");
    assert_eq!(log.lines()[0], "Round 2 - Ada: spaced (word 4, card 1)");
}

/// The guesser's word prompt comes before the reveal; clues after the clear.
#[test]
fn test_prompt_order() {
    let catalog = catalog(1);
    let mut deck = Deck::from_cards(catalog.iter());
    let mut roster = roster();
    let config = SessionConfig::advanced();
    let mut rng = GameRng::new(1);
    let mut console = ScriptedConsole::new(["2", "", "", "a", "b", "c", "d", "x"]);
    let mut log = MemoryProposalLog::new();

    let mut engine = RoundEngine::new(&config, &mut rng, &mut console, &mut log);
    engine.play(1, &mut deck, &mut roster).unwrap();
    assert_eq!(engine.phase(), RoundPhase::Resolved);

    let prompts: Vec<&str> = console.prompts().collect();
    assert!(prompts[0].starts_with("Ada, enter the number (1-5)"));
    assert!(prompts[1].contains("look away"));
    assert!(prompts[2].contains("Press Enter"));
    assert!(prompts[3..7].iter().all(|p| p.contains("one-word proposal for word 2")));
    assert_eq!(prompts[7], "Ada, enter your guess");
    assert_eq!(prompts.len(), 8);

    let clears = console
        .events()
        .iter()
        .filter(|e| **e == ConsoleEvent::Clear)
        .count();
    assert_eq!(clears, 1);
}

/// A wrong guess on the last card consumes only that card.
#[test]
fn test_wrong_guess_on_last_card() {
    let catalog = catalog(1);
    let mut deck = Deck::from_cards(catalog.iter());
    let mut roster = roster();
    let config = SessionConfig::advanced();
    let mut rng = GameRng::new(1);
    let mut console = ScriptedConsole::new(["1", "", "", "a", "b", "c", "d", "wrong"]);
    let mut log = MemoryProposalLog::new();

    let report = RoundEngine::new(&config, &mut rng, &mut console, &mut log)
        .play(1, &mut deck, &mut roster)
        .unwrap()
        .unwrap();

    assert_eq!(report.cards_consumed, 1);
    assert!(deck.is_empty());
    assert!(!console.saw("extra card"));
}

/// Round 6 with five players comes back to the first seat.
#[test]
fn test_round_six_guesser_is_first_player() {
    let catalog = catalog(1);
    let mut deck = Deck::from_cards(catalog.iter());
    let mut roster = roster();
    let config = SessionConfig::advanced();
    let mut rng = GameRng::new(1);
    let mut console = ScriptedConsole::new(["1", "", "", "a", "b", "c", "d", "w1_1"]);
    let mut log = MemoryProposalLog::new();

    let report = RoundEngine::new(&config, &mut rng, &mut console, &mut log)
        .play(6, &mut deck, &mut roster)
        .unwrap()
        .unwrap();

    assert_eq!(report.guesser, PlayerId::new(0));
    assert_eq!(roster.get(PlayerId::new(0)).score, 1);
}
