//! Match Logic for RPS Arena
//!
//! Repeated rock-paper-scissors between scripted players.
//! Players are paired at random each round, pick moves by a fixed
//! strategy, and accumulate win/loss/draw counters per player and per move.

mod error;
mod random;
mod strategy;
mod player;
mod game;
mod pairing;
mod simulation;
mod report;

use serde::{Deserialize, Serialize};

pub use error::ArenaError;
pub use random::SeededRng;
pub use strategy::{execute_strategy, Move, Strategy};
pub use player::{MoveTally, Player, RoundResult};
pub use game::{play_round, MatchRecord, TIE_LABEL};
pub use pairing::sample_pair;
pub use simulation::Simulation;
pub use report::{elapsed_line, print_stats, trace_line, write_stats, PlayerReport, DIVIDER};

/// Result of one round from the table's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Tie,
    FirstWins,
    SecondWins,
}

/// Resolve a pair of moves: rock beats scissors, scissors beats paper, paper beats rock
pub fn resolve(a: Move, b: Move) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a.beats(b) {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}
