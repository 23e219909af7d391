//! Logger setup: terminal on stderr, optional debug file

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

fn config() -> Config {
    ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build()
}

/// Install the global logger. The report goes to stdout, so the terminal
/// logger always writes to stderr.
pub fn init(level: LevelFilter, file: Option<&Path>) -> anyhow::Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = file {
        let sink = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, config(), sink));
    }
    CombinedLogger::init(loggers).context("initializing logger")
}
