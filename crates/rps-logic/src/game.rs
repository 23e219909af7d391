//! Single-round execution: move selection, resolution, counter updates

use serde::{Deserialize, Serialize};

use crate::player::{Player, RoundResult};
use crate::random::SeededRng;
use crate::strategy::Move;
use crate::{resolve, Outcome};

/// Label used in place of a player name when a round is tied
pub const TIE_LABEL: &str = "tie";

/// Log entry for one simulated round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player1: String,
    pub player2: String,
    pub move1: Move,
    pub move2: Move,
    pub outcome: Outcome,
}

impl MatchRecord {
    /// Winner's name, or `"tie"`
    pub fn winner(&self) -> &str {
        match self.outcome {
            Outcome::Tie => TIE_LABEL,
            Outcome::FirstWins => &self.player1,
            Outcome::SecondWins => &self.player2,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.outcome == Outcome::Tie
    }
}

/// Play one round between `p1` and `p2`
///
/// Both moves are chosen before either history is touched, so neither side
/// sees anything from the round in progress.
pub fn play_round(p1: &mut Player, p2: &mut Player, rng: &mut SeededRng) -> MatchRecord {
    let move1 = p1.choose_move(Some(&*p2), rng);
    let move2 = p2.choose_move(Some(&*p1), rng);
    let outcome = resolve(move1, move2);

    let (result1, result2) = match outcome {
        Outcome::Tie => (RoundResult::Draw, RoundResult::Draw),
        Outcome::FirstWins => (RoundResult::Win, RoundResult::Loss),
        Outcome::SecondWins => (RoundResult::Loss, RoundResult::Win),
    };
    p1.record(move1, result1);
    p2.record(move2, result2);

    MatchRecord {
        player1: p1.name().to_string(),
        player2: p2.name().to_string(),
        move1,
        move2,
        outcome,
    }
}
