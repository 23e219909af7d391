//! Command-line configuration and roster loading

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use rps_logic::{Player, Strategy};

/// Rounds simulated when `--rounds` is not given
pub const DEFAULT_ROUNDS: i64 = 1_000_000;

/// Players used when neither `--player` nor `--roster` is given
pub const DEFAULT_ROSTER: [(&str, Strategy); 5] = [
    ("Rachelle", Strategy::Random),
    ("Rambo", Strategy::RockEnjoyer),
    ("Celine", Strategy::Cycle),
    ("Charles", Strategy::CounterLast),
    ("Carlyle", Strategy::Copycat),
];

#[derive(Parser, Debug)]
#[command(
    name = "rps-arena",
    about = "Simulate rock-paper-scissors rounds between scripted players",
    long_about = "Pairs two distinct players at random each round, lets each pick a move by its\n\
                  strategy, and reports per-player and per-move win/loss/draw statistics."
)]
pub struct Args {
    /// Number of rounds to simulate (values <= 0 simulate nothing)
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROUNDS, allow_negative_numbers = true)]
    pub rounds: i64,

    /// Seed for reproducible runs; OS entropy when omitted
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Player as NAME=STRATEGY (repeatable)
    #[arg(short = 'p', long = "player", value_name = "NAME=STRATEGY", conflicts_with = "roster")]
    pub players: Vec<String>,

    /// JSON roster file: [{"name": "...", "strategy": "..."}]
    #[arg(short = 'r', long)]
    pub roster: Option<PathBuf>,

    /// Print one line per simulated round
    #[arg(long, conflicts_with = "no_records")]
    pub trace: bool,

    /// Discard the per-round log to keep memory flat
    #[arg(long)]
    pub no_records: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Terminal log level
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    /// Also write debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Requested rounds, with non-positive values meaning none
    pub fn round_count(&self) -> u64 {
        u64::try_from(self.rounds).unwrap_or(0)
    }

    /// Build the player pool from `--player`, `--roster`, or the default roster
    pub fn players(&self) -> anyhow::Result<Vec<Player>> {
        if let Some(path) = &self.roster {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading roster {}", path.display()))?;
            return parse_roster(&text).with_context(|| format!("parsing roster {}", path.display()));
        }
        if !self.players.is_empty() {
            return self
                .players
                .iter()
                .map(|spec| Player::from_spec(spec).map_err(anyhow::Error::from))
                .collect();
        }
        Ok(default_players())
    }
}

/// One roster entry. The strategy stays a raw tag so unknown values surface
/// as `InvalidStrategy` rather than a generic JSON error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub strategy: String,
}

pub fn parse_roster(json: &str) -> anyhow::Result<Vec<Player>> {
    let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
    entries
        .into_iter()
        .map(|entry| Player::from_tag(entry.name, &entry.strategy).map_err(anyhow::Error::from))
        .collect()
}

pub fn default_players() -> Vec<Player> {
    DEFAULT_ROSTER
        .iter()
        .map(|(name, strategy)| Player::new(*name, *strategy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_logic::ArenaError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rps-arena").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.round_count(), 1_000_000);
        assert_eq!(args.seed, None);
        assert!(!args.trace && !args.no_records && !args.json);
        assert_eq!(args.log_level, LevelFilter::Warn);

        let players = args.players().unwrap();
        let names: Vec<_> = players.iter().map(Player::name).collect();
        assert_eq!(names, vec!["Rachelle", "Rambo", "Celine", "Charles", "Carlyle"]);
        assert_eq!(players[3].strategy(), Strategy::CounterLast);
    }

    #[test]
    fn test_non_positive_rounds() {
        assert_eq!(parse(&["--rounds", "0"]).round_count(), 0);
        assert_eq!(parse(&["-n", "-5"]).round_count(), 0);
        assert_eq!(parse(&["-n", "12"]).round_count(), 12);
    }

    #[test]
    fn test_players_from_flags() {
        let args = parse(&["-p", "A=cycle", "--player", "B=copycat", "-s", "7"]);
        assert_eq!(args.seed, Some(7));
        let players = args.players().unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].name(), "B");
        assert_eq!(players[1].strategy(), Strategy::Copycat);
    }

    #[test]
    fn test_bad_player_flag() {
        let err = parse(&["-p", "A=chaos"]).players().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArenaError>(),
            Some(&ArenaError::InvalidStrategy("chaos".to_string()))
        );
    }

    #[test]
    fn test_conflicting_flags() {
        let conflicts = [
            vec!["rps-arena", "--trace", "--no-records"],
            vec!["rps-arena", "-p", "A=cycle", "-r", "roster.json"],
        ];
        for argv in conflicts {
            assert!(Args::try_parse_from(argv).is_err());
        }
    }

    #[test]
    fn test_parse_roster() {
        let players = parse_roster(
            r#"[{"name": "Rambo", "strategy": "rock-enjoyer"}, {"name": "Celine", "strategy": "cycle"}]"#,
        )
        .unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].strategy(), Strategy::RockEnjoyer);

        let err = parse_roster(r#"[{"name": "X", "strategy": "mirror"}]"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ArenaError>(),
            Some(ArenaError::InvalidStrategy(tag)) if tag == "mirror"
        ));

        assert!(parse_roster("not json").is_err());
    }
}
