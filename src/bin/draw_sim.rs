//! Headless draw simulator.
//!
//! Runs many complete sequences on a paused tokio clock, so every timer in the
//! controller fires exactly as it would interactively while the whole run
//! finishes in wall-clock milliseconds. Prints a JSON report of the revealed
//! value distribution.

use std::collections::BTreeMap;
use std::time::{Duration, Instant as WallInstant};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tokio::time::Instant;

use lucky_draw::audio::SilentBackend;
use lucky_draw::core::{NoEffects, Presenter, StdSelector, Tally, CHI_SQUARE_CRITICAL_999};
use lucky_draw::engine::{SequenceController, Timings};
use lucky_draw::types::{DisplayValue, RANGE_MAX, RANGE_MIN};

#[derive(Debug, Parser, Clone)]
#[command(name = "draw-sim")]
#[command(about = "Run lucky draw sequences in virtual time and report the distribution")]
struct Cli {
    /// Number of complete sequences to run.
    #[arg(long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    runs: u64,

    /// Selector seed; random when omitted (the report prints the one used).
    #[arg(long)]
    seed: Option<u64>,

    /// Roll phase duration in milliseconds.
    #[arg(long, default_value_t = 2200)]
    roll_ms: u64,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

/// Counts spin frames; everything else is discarded.
#[derive(Debug, Default)]
struct Headless {
    spins: u64,
}

impl Presenter for Headless {
    fn set_display(&mut self, value: DisplayValue) {
        if let DisplayValue::Spin(_) = value {
            self.spins += 1;
        }
    }
    fn set_status(&mut self, _text: &str) {}
    fn set_highlight(&mut self, _pick: Option<u8>) {}
    fn set_magic(&mut self, _on: bool) {}
    fn set_trigger(&mut self, _enabled: bool, _label: &str) {}
    fn pulse(&mut self, _duration: Duration) {}
    fn set_muted(&mut self, _muted: bool) {}
}

#[derive(Debug, Serialize)]
struct Report {
    runs: u64,
    seed: u64,
    roll_ms: u64,
    counts: BTreeMap<u8, u64>,
    chi_square: f64,
    chi_square_critical: f64,
    uniform: bool,
    spins_per_draw: f64,
    virtual_ms: u128,
    wall_ms: u128,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .context("building paused runtime")?;

    let wall = WallInstant::now();
    let report = rt.block_on(simulate(&cli, seed));
    let report = Report {
        wall_ms: wall.elapsed().as_millis(),
        ..report
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

async fn simulate(cli: &Cli, seed: u64) -> Report {
    let timings = Timings {
        roll_duration: Duration::from_millis(cli.roll_ms),
        ..Timings::default()
    };
    let mut controller = SequenceController::new(
        Headless::default(),
        NoEffects,
        SilentBackend,
        StdSelector::seeded(seed),
    )
    .with_timings(timings);

    let mut tally = Tally::new();
    let start = Instant::now();
    for _ in 0..cli.runs {
        if let Some(pick) = controller.trigger().await {
            tally.record(pick);
        }
    }

    Report {
        runs: cli.runs,
        seed,
        roll_ms: cli.roll_ms,
        counts: (RANGE_MIN..=RANGE_MAX).map(|n| (n, tally.count(n))).collect(),
        chi_square: tally.chi_square(),
        chi_square_critical: CHI_SQUARE_CRITICAL_999,
        uniform: tally.looks_uniform(),
        spins_per_draw: controller.presenter().spins as f64 / cli.runs as f64,
        virtual_ms: start.elapsed().as_millis(),
        wall_ms: 0,
    }
}
