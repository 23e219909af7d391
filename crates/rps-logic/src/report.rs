//! Console reporting of per-player statistics

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::game::MatchRecord;
use crate::player::{MoveTally, Player};
use crate::strategy::{Move, Strategy};

/// Line printed after each player block
pub const DIVIDER: &str =
    "----------------------------------------------------------------------";

/// Snapshot of one player's aggregate statistics
///
/// Move maps only carry moves with a non-zero count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub name: String,
    pub strategy: Strategy,
    pub games: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
    pub win_loss_ratio: f64,
    pub move_counts: BTreeMap<Move, u64>,
    pub move_wins: BTreeMap<Move, u64>,
    pub move_losses: BTreeMap<Move, u64>,
    pub move_draws: BTreeMap<Move, u64>,
}

impl From<&Player> for PlayerReport {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            strategy: player.strategy(),
            games: player.games(),
            wins: player.wins(),
            losses: player.losses(),
            draws: player.draws(),
            win_loss_ratio: player.win_loss_ratio(),
            move_counts: nonzero_counts(player, |t| t.played),
            move_wins: nonzero_counts(player, |t| t.wins),
            move_losses: nonzero_counts(player, |t| t.losses),
            move_draws: nonzero_counts(player, |t| t.draws),
        }
    }
}

fn nonzero_counts(player: &Player, field: fn(&MoveTally) -> u64) -> BTreeMap<Move, u64> {
    Move::ALL
        .iter()
        .map(|m| (*m, field(&player.tally(*m))))
        .filter(|(_, n)| *n > 0)
        .collect()
}

struct MoveMap<'a>(&'a BTreeMap<Move, u64>);

impl fmt::Display for MoveMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (m, n)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", m, n)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for PlayerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stats for {} (Strategy: {}):", self.name, self.strategy)?;
        writeln!(
            f,
            "  Games: {}, Wins: {}, Losses: {}, Draws: {}",
            self.games, self.wins, self.losses, self.draws
        )?;
        writeln!(f, "  Win/Loss Ratio: {:.2}", self.win_loss_ratio)?;
        writeln!(f, "  Move Counts: {}", MoveMap(&self.move_counts))?;
        writeln!(f, "  Move Wins: {}", MoveMap(&self.move_wins))?;
        writeln!(f, "  Move Losses: {}", MoveMap(&self.move_losses))?;
        write!(f, "  Move Draws: {}", MoveMap(&self.move_draws))
    }
}

/// Write every player's block followed by a divider line
pub fn write_stats<W: Write>(out: &mut W, players: &[Player]) -> io::Result<()> {
    for player in players {
        writeln!(out, "{}", PlayerReport::from(player))?;
        writeln!(out, "{}", DIVIDER)?;
    }
    Ok(())
}

/// `write_stats` to stdout
pub fn print_stats(players: &[Player]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_stats(&mut out, players)?;
    out.flush()
}

/// Per-round trace line; `index` is 1-based
pub fn trace_line(index: usize, record: &MatchRecord) -> String {
    format!(
        "Game {}: {}({}) vs {}({}) → Winner: {}",
        index,
        record.player1,
        record.move1,
        record.player2,
        record.move2,
        record.winner()
    )
}

pub fn elapsed_line(elapsed: Duration) -> String {
    format!(
        "Total simulation time: {:.3} ms",
        elapsed.as_secs_f64() * 1000.0
    )
}
