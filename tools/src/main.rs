//! award-sim: headless distribution runner for the award dispatcher.
//!
//! Usage:
//!   award-sim --picks 1000000
//!   award-sim --picks 1000000 --seed 12345
//!   award-sim --picks 100000 --seed 7 --json
//!
//! Without --seed the award draws from the OS secure source, exactly as
//! in production. With --seed it uses a reproducible seeded stream.

use anyhow::Result;
use award_core::{Award, AwardConfig, SeededSource, Tally, TallyReport};
use std::env;

#[derive(serde::Serialize)]
struct RunSummary {
    picks:         u64,
    source:        String,
    refills:       u64,
    max_deviation: f64,
    report:        TallyReport,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let picks = parse_arg(&args, "--picks", 1_000_000u64);
    let seed: Option<u64> = args
        .windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse().ok());
    let json = args.iter().any(|a| a == "--json");

    let tally = Tally::new();
    let config = tally.instrument(AwardConfig::new());

    let (source, refills) = match seed {
        Some(seed) => {
            let mut award = Award::with_source(config, SeededSource::new(seed).with_name("award-sim"))?;
            run_picks(picks, || award.pick())?;
            (format!("seeded({seed})"), award.evaluator().reservoir().refills())
        }
        None => {
            let mut award = Award::new(config)?;
            run_picks(picks, || award.pick())?;
            ("os".to_string(), award.evaluator().reservoir().refills())
        }
    };

    let report = tally.report();
    let summary = RunSummary {
        picks,
        source,
        refills,
        max_deviation: report.max_deviation(),
        report,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn run_picks<F>(picks: u64, mut pick: F) -> Result<()>
where
    F: FnMut() -> award_core::AwardResult<()>,
{
    for i in 0..picks {
        if let Err(err) = pick() {
            log::error!("pick {i} failed: {err}");
            return Err(err.into());
        }
    }
    log::info!("completed {picks} picks");
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("=== AWARD SIMULATION ===");
    println!("  picks:          {}", summary.picks);
    println!("  source:         {}", summary.source);
    println!("  refills:        {}", summary.refills);
    println!();
    println!("  {:<16} {:>10} {:>10} {:>10}", "outcome", "count", "observed", "expected");
    for row in &summary.report.rows {
        println!(
            "  {:<16} {:>10} {:>9.4}% {:>9.4}%",
            row.outcome,
            row.count,
            row.observed * 100.0,
            row.expected * 100.0
        );
    }
    println!();
    println!("  max deviation:  {:.4}%", summary.max_deviation * 100.0);
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
