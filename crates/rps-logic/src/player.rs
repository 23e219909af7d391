//! Player state: identity, strategy, move history and cumulative counters

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::random::SeededRng;
use crate::strategy::{execute_strategy, Move, Strategy};

/// How a single round ended from one player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Win,
    Loss,
    Draw,
}

/// Counters for one move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTally {
    /// Times the move was played, whatever the result
    pub played: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

/// A scripted participant
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    strategy: Strategy,
    history: Vec<Move>,
    wins: u64,
    losses: u64,
    draws: u64,
    tallies: [MoveTally; 3],
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            strategy,
            history: Vec::new(),
            wins: 0,
            losses: 0,
            draws: 0,
            tallies: [MoveTally::default(); 3],
        }
    }

    /// Build from a strategy tag such as `"rock-enjoyer"`
    pub fn from_tag(name: impl Into<String>, tag: &str) -> Result<Self, ArenaError> {
        Ok(Self::new(name, tag.parse()?))
    }

    /// Parse a `NAME=STRATEGY` entry
    pub fn from_spec(spec: &str) -> Result<Self, ArenaError> {
        let (name, tag) = spec
            .split_once('=')
            .map(|(name, tag)| (name.trim(), tag.trim()))
            .filter(|(name, tag)| !name.is_empty() && !tag.is_empty())
            .ok_or_else(|| ArenaError::InvalidPlayerSpec(spec.to_string()))?;
        Self::from_tag(name, tag)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }

    pub fn losses(&self) -> u64 {
        self.losses
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Rounds this player took part in
    pub fn games(&self) -> u64 {
        self.wins + self.losses + self.draws
    }

    /// Wins over losses; with no losses the ratio is the win count itself
    pub fn win_loss_ratio(&self) -> f64 {
        if self.losses > 0 {
            self.wins as f64 / self.losses as f64
        } else {
            self.wins as f64
        }
    }

    pub fn tally(&self, m: Move) -> MoveTally {
        self.tallies[m.index()]
    }

    /// Pick this round's move. The opponent is only read, never mutated.
    pub fn choose_move(&self, opponent: Option<&Player>, rng: &mut SeededRng) -> Move {
        execute_strategy(
            self.strategy,
            &self.history,
            opponent.map(Player::history),
            rng,
        )
    }

    /// Apply a resolved round: history, overall counters and per-move counters
    pub fn record(&mut self, played: Move, result: RoundResult) {
        self.history.push(played);
        let tally = &mut self.tallies[played.index()];
        tally.played += 1;
        match result {
            RoundResult::Win => {
                self.wins += 1;
                tally.wins += 1;
            }
            RoundResult::Loss => {
                self.losses += 1;
                tally.losses += 1;
            }
            RoundResult::Draw => {
                self.draws += 1;
                tally.draws += 1;
            }
        }
    }

    /// Overall counters agree with history length and with the per-move counters
    pub fn is_consistent(&self) -> bool {
        let rounds = self.history.len() as u64;
        let (played, outcomes) = self.tallies.iter().fold((0, 0), |(p, o), t| {
            (p + t.played, o + t.wins + t.losses + t.draws)
        });
        let per_move_split = Move::ALL.iter().all(|m| {
            let t = self.tally(*m);
            t.wins + t.losses + t.draws == t.played
        });
        self.games() == rounds && played == rounds && outcomes == rounds && per_move_split
    }
}
