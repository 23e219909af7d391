//! Strategy definitions and execution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;
use crate::random::SeededRng;

/// A move in rock-paper-scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in cycle order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Whether `self` beats `other` under the standard dominance relation
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// The move that beats `self`
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Successor in the rock → paper → scissors → rock cycle
    pub fn next_in_cycle(self) -> Move {
        Move::ALL[(self.index() + 1) % Move::ALL.len()]
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed decision rule a player follows for the whole run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Uniform choice each round.
    Random,
    /// Rock first, then step through rock → paper → scissors.
    Cycle,
    /// 60% rock, 20% scissors, 20% paper.
    RockEnjoyer,
    /// Play whatever beats the opponent's last move.
    CounterLast,
    /// Repeat the opponent's last move.
    Copycat,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::Cycle,
        Strategy::RockEnjoyer,
        Strategy::CounterLast,
        Strategy::Copycat,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Cycle => "cycle",
            Strategy::RockEnjoyer => "rock-enjoyer",
            Strategy::CounterLast => "counter-last",
            Strategy::Copycat => "copycat",
        }
    }

    /// Strategies that read the opponent's history
    pub fn needs_opponent(self) -> bool {
        matches!(self, Strategy::CounterLast | Strategy::Copycat)
    }

    /// Human-readable one-liner
    pub fn describe(self) -> &'static str {
        match self {
            Strategy::Random => "Picks rock, paper or scissors uniformly at random.",
            Strategy::Cycle => "Opens with rock, then cycles rock, paper, scissors.",
            Strategy::RockEnjoyer => "Throws rock 60% of the time, scissors and paper 20% each.",
            Strategy::CounterLast => "Plays the move that beats the opponent's last move.",
            Strategy::Copycat => "Repeats the opponent's last move.",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Strategy {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.tag() == s)
            .ok_or_else(|| ArenaError::InvalidStrategy(s.to_string()))
    }
}

/// Execute a strategy for one round
///
/// # Arguments
/// * `strategy` - The strategy to execute
/// * `my_history` - Our past moves
/// * `opponent_history` - Opponent's past moves, `None` when no opponent was dealt
/// * `rng` - Shared random number generator
pub fn execute_strategy(
    strategy: Strategy,
    my_history: &[Move],
    opponent_history: Option<&[Move]>,
    rng: &mut SeededRng,
) -> Move {
    match strategy {
        Strategy::Random => random_move(rng),
        Strategy::Cycle => execute_cycle(my_history),
        Strategy::RockEnjoyer => execute_rock_enjoyer(rng),
        Strategy::CounterLast => match opponent_history.and_then(|h| h.last()) {
            Some(last) => last.counter(),
            None => random_move(rng),
        },
        Strategy::Copycat => match opponent_history.and_then(|h| h.last()) {
            Some(last) => *last,
            None => random_move(rng),
        },
    }
}

fn random_move(rng: &mut SeededRng) -> Move {
    Move::ALL[rng.next_index(Move::ALL.len())]
}

fn execute_cycle(my_history: &[Move]) -> Move {
    match my_history.last() {
        None => Move::Rock,
        Some(last) => last.next_in_cycle(),
    }
}

/// Ten buckets: 0-5 rock, 6-7 scissors, 8-9 paper
fn execute_rock_enjoyer(rng: &mut SeededRng) -> Move {
    match rng.next_range(10) {
        0..=5 => Move::Rock,
        6..=7 => Move::Scissors,
        _ => Move::Paper,
    }
}
