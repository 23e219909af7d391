//! Simulation driver: pairs players, plays rounds, keeps the record log

use std::time::{Duration, Instant};

use crate::error::ArenaError;
use crate::game::{play_round, MatchRecord};
use crate::pairing::sample_pair;
use crate::player::Player;
use crate::random::SeededRng;

/// A pool of players and everything that happened to them
#[derive(Debug)]
pub struct Simulation {
    players: Vec<Player>,
    records: Vec<MatchRecord>,
    keep_records: bool,
    rounds_played: u64,
    ties: u64,
    rng: SeededRng,
}

impl Simulation {
    /// Build a simulation over `players`; the pool needs at least 2
    pub fn new(players: Vec<Player>, rng: SeededRng) -> Result<Self, ArenaError> {
        if players.len() < 2 {
            return Err(ArenaError::InsufficientPlayers {
                count: players.len(),
            });
        }
        Ok(Self {
            players,
            records: Vec::new(),
            keep_records: true,
            rounds_played: 0,
            ties: 0,
            rng,
        })
    }

    /// Turn the per-round log on or off. Counters are updated either way.
    pub fn with_record_log(mut self, keep: bool) -> Self {
        self.keep_records = keep;
        self
    }

    /// Play `rounds` rounds and return the wall-clock time they took
    pub fn run(&mut self, rounds: u64) -> Duration {
        log::debug!(
            "simulating {} rounds across {} players",
            rounds,
            self.players.len()
        );
        let start = Instant::now();

        for _ in 0..rounds {
            let Some(record) = self.step() else {
                break;
            };
            log::trace!(
                "{}({}) vs {}({}) -> {}",
                record.player1,
                record.move1,
                record.player2,
                record.move2,
                record.winner()
            );
            self.rounds_played += 1;
            if record.is_tie() {
                self.ties += 1;
            }
            if self.keep_records {
                self.records.push(record);
            }
        }

        let elapsed = start.elapsed();
        log::info!(
            "simulated {} rounds in {:.3} ms ({} played, {} ties overall)",
            rounds,
            elapsed.as_secs_f64() * 1000.0,
            self.rounds_played,
            self.ties
        );
        elapsed
    }

    /// `None` only for a pool under 2, which `new` already rejects
    fn step(&mut self) -> Option<MatchRecord> {
        let (first, second) = sample_pair(self.players.len(), &mut self.rng)?;
        let (p1, p2) = pair_mut(&mut self.players, first, second);
        Some(play_round(p1, p2, &mut self.rng))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    /// Logged rounds, oldest first. Empty when the log is disabled.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn tie_count(&self) -> u64 {
        self.ties
    }
}

/// Two distinct mutable borrows out of one slice, in the requested order
fn pair_mut(players: &mut [Player], first: usize, second: usize) -> (&mut Player, &mut Player) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = players.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = players.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;

    fn roster() -> Vec<Player> {
        vec![
            Player::new("Rachelle", Strategy::Random),
            Player::new("Rambo", Strategy::RockEnjoyer),
            Player::new("Celine", Strategy::Cycle),
            Player::new("Charles", Strategy::CounterLast),
            Player::new("Carlyle", Strategy::Copycat),
        ]
    }

    #[test]
    fn test_insufficient_players() {
        let err = Simulation::new(vec![], SeededRng::new(1)).unwrap_err();
        assert_eq!(err, ArenaError::InsufficientPlayers { count: 0 });

        let one = vec![Player::new("Solo", Strategy::Cycle)];
        let err = Simulation::new(one, SeededRng::new(1)).unwrap_err();
        assert_eq!(err, ArenaError::InsufficientPlayers { count: 1 });
    }

    #[test]
    fn test_zero_rounds_is_noop() {
        let mut sim = Simulation::new(roster(), SeededRng::new(1)).unwrap();
        sim.run(0);

        assert!(sim.records().is_empty());
        assert_eq!(sim.rounds_played(), 0);
        for p in sim.players() {
            assert_eq!(p.games(), 0);
            assert!(p.history().is_empty());
        }
    }

    #[test]
    fn test_two_players_thousand_rounds() {
        let players = vec![
            Player::new("A", Strategy::Cycle),
            Player::new("B", Strategy::Random),
        ];
        let mut sim = Simulation::new(players, SeededRng::new(42)).unwrap();
        sim.run(1000);

        assert_eq!(sim.records().len(), 1000);
        let non_ties = sim.records().iter().filter(|r| !r.is_tie()).count() as u64;
        let wins: u64 = sim.players().iter().map(Player::wins).sum();
        assert_eq!(wins, non_ties);
        assert_eq!(sim.tie_count(), 1000 - non_ties);
        for p in sim.players() {
            assert_eq!(p.games(), 1000);
        }
    }

    #[test]
    fn test_counters_consistent_across_pool() {
        let mut sim = Simulation::new(roster(), SeededRng::new(7)).unwrap();
        sim.run(5000);

        let total_games: u64 = sim.players().iter().map(Player::games).sum();
        assert_eq!(total_games, 2 * 5000);
        for p in sim.players() {
            assert!(p.is_consistent(), "{} counters out of sync", p.name());
        }

        // records agree with per-player participation
        for p in sim.players() {
            let appearances = sim
                .records()
                .iter()
                .filter(|r| r.player1 == p.name() || r.player2 == p.name())
                .count() as u64;
            assert_eq!(appearances, p.games());
        }
    }

    #[test]
    fn test_never_pairs_player_with_itself() {
        let mut sim = Simulation::new(roster(), SeededRng::new(11)).unwrap();
        sim.run(2000);
        assert!(sim.records().iter().all(|r| r.player1 != r.player2));
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Simulation::new(roster(), SeededRng::new(99)).unwrap();
        let mut b = Simulation::new(roster(), SeededRng::new(99)).unwrap();
        a.run(500);
        b.run(500);
        assert_eq!(a.records(), b.records());
    }

    #[test]
    fn test_record_log_can_be_disabled() {
        let mut sim = Simulation::new(roster(), SeededRng::new(3))
            .unwrap()
            .with_record_log(false);
        sim.run(300);

        assert!(sim.records().is_empty());
        assert_eq!(sim.rounds_played(), 300);
        let total_games: u64 = sim.players().iter().map(Player::games).sum();
        assert_eq!(total_games, 600);
    }

    #[test]
    fn test_runs_accumulate() {
        let mut sim = Simulation::new(roster(), SeededRng::new(3)).unwrap();
        sim.run(100);
        sim.run(150);
        assert_eq!(sim.records().len(), 250);
        assert_eq!(sim.rounds_played(), 250);
    }

    #[test]
    fn test_pair_mut_order() {
        let mut players = roster();
        let (a, b) = pair_mut(&mut players, 3, 1);
        assert_eq!(a.name(), "Charles");
        assert_eq!(b.name(), "Rambo");
        let (a, b) = pair_mut(&mut players, 0, 4);
        assert_eq!(a.name(), "Rachelle");
        assert_eq!(b.name(), "Carlyle");
    }
}
