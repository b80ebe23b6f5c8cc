//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io;

use just_one::cards::{Card, CardId, Catalog};
use just_one::core::{Player, Roster};
use just_one::io::Console;

pub const NAMES: [&str; 5] = ["Ada", "Bo", "Cy", "Di", "Ed"];

/// Catalog of `n` cards with distinct words `w{id}_{slot}`.
pub fn catalog(n: i64) -> Catalog {
    let cards = (1..=n)
        .map(|id| {
            let words: [String; 5] = std::array::from_fn(|slot| format!("w{id}_{}", slot + 1));
            Card::new(CardId::new(id), words).unwrap()
        })
        .collect();
    Catalog::new(cards).unwrap()
}

pub fn roster() -> Roster {
    Roster::new(NAMES.iter().map(|n| Player::new(n).unwrap()).collect())
}

/// How the simulated table answers the guess prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guessing {
    AlwaysRight,
    AlwaysWrong,
    AlwaysPass,
}

/// Console that plays along: it reads the revealed secret word off the
/// screen and answers prompts the way a table of players would.
#[derive(Debug)]
pub struct Table {
    pub guessing: Guessing,
    /// Clue every giver writes; `None` gives each giver a distinct clue.
    pub shared_clue: Option<String>,
    pub word_choice: String,
    secret: Option<String>,
    clue_counter: usize,
    pub prompts: Vec<String>,
    pub lines: Vec<String>,
    pub clears: usize,
}

impl Table {
    pub fn new(guessing: Guessing) -> Self {
        Self {
            guessing,
            shared_clue: None,
            word_choice: "3".to_string(),
            secret: None,
            clue_counter: 0,
            prompts: Vec::new(),
            lines: Vec::new(),
            clears: 0,
        }
    }
}

impl Console for Table {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());

        if prompt.contains("of the word you want to guess") {
            return Ok(self.word_choice.clone());
        }
        if prompt.contains("proposal") {
            self.clue_counter += 1;
            return Ok(self
                .shared_clue
                .clone()
                .unwrap_or_else(|| format!("clue{}", self.clue_counter)));
        }
        if prompt.contains("enter your guess") {
            let secret = self.secret.take().unwrap_or_default();
            return Ok(match self.guessing {
                Guessing::AlwaysRight => secret.to_uppercase(),
                Guessing::AlwaysWrong => "definitely-not-it".to_string(),
                Guessing::AlwaysPass => "Pass".to_string(),
            });
        }
        Ok(String::new())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        if let Some(secret) = text.strip_prefix("Secret word (visible to clue-givers): ") {
            self.secret = Some(secret.to_string());
        }
        self.lines.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
