//! RPS Arena entry point
//!
//! Builds the player pool, runs the simulation and prints per-player stats.

mod config;
mod logging;

use std::io::{self, BufWriter, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use rps_logic::{
    elapsed_line, print_stats, trace_line, MatchRecord, PlayerReport, SeededRng, Simulation,
};

use crate::config::Args;

/// Machine-readable form of a finished run
#[derive(Serialize)]
struct RunSummary<'a> {
    rounds: u64,
    seed: Option<u64>,
    ties: u64,
    elapsed_ms: f64,
    players: Vec<PlayerReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<&'a [MatchRecord]>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level, args.log_file.as_deref())?;

    let players = args.players()?;
    log::info!("roster:");
    for p in &players {
        log::info!("{:<16}{:<16}{}", p.name(), p.strategy(), p.strategy().describe());
    }

    let rng = match args.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    let mut simulation = Simulation::new(players, rng)
        .context("configuring simulation")?
        .with_record_log(!args.no_records);

    let elapsed = simulation.run(args.round_count());

    if args.json {
        write_json(&args, &simulation, elapsed)
    } else {
        write_text(&args, &simulation, elapsed)
    }
}

fn write_text(args: &Args, simulation: &Simulation, elapsed: Duration) -> anyhow::Result<()> {
    print_stats(simulation.players()).context("writing stats")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.trace {
        for (i, record) in simulation.records().iter().enumerate() {
            writeln!(out, "{}", trace_line(i + 1, record))?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{}", elapsed_line(elapsed))?;
    out.flush()?;
    Ok(())
}

fn write_json(args: &Args, simulation: &Simulation, elapsed: Duration) -> anyhow::Result<()> {
    let summary = RunSummary {
        rounds: simulation.rounds_played(),
        seed: args.seed,
        ties: simulation.tie_count(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        players: simulation.players().iter().map(PlayerReport::from).collect(),
        records: args.trace.then(|| simulation.records()),
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    serde_json::to_writer_pretty(&mut out, &summary).context("writing JSON report")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
