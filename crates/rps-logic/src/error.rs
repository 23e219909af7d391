//! Error codes for arena configuration

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("at least 2 players are required, got {count}")]
    InsufficientPlayers { count: usize },

    #[error("unknown strategy `{0}` (expected one of: random, cycle, rock-enjoyer, counter-last, copycat)")]
    InvalidStrategy(String),

    #[error("invalid player entry `{0}`, expected NAME=STRATEGY")]
    InvalidPlayerSpec(String),
}
