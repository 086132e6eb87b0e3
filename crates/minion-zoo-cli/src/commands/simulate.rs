//! Simulate command - run a roster over gold-labelled subjects.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use colored::Colorize;
use fastrand::Rng;
use minion_zoo::{MinionSummary, Simulation, ZooConfig, random_subjects};

use crate::cli::OutputFormat;

pub fn run(
    config_path: PathBuf,
    subject_count: usize,
    seed: Option<u64>,
    output: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ZooConfig::load(&config_path)?;
    if seed.is_some() {
        config.seed = seed;
    }

    let mut roster = config.build_roster()?;

    // Gold labels draw from their own stream so they do not depend on the roster.
    let mut gold_rng = match config.seed {
        Some(seed) => Rng::with_seed(seed.wrapping_add(1)),
        None => Rng::new(),
    };
    let subjects = random_subjects(subject_count, &config.labels, &mut gold_rng)?;

    tracing::info!(
        minions = roster.len(),
        subjects = subjects.len(),
        "running simulation"
    );
    let simulation = Simulation::run(&mut roster, &subjects)?;

    match &output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create '{}': {}", path.display(), e))?;
            write_records(&simulation, format, BufWriter::new(file))?;
        }
        None => write_records(&simulation, format, io::stdout().lock())?,
    }

    print_summary(simulation.summarize(), output.as_ref(), verbose);
    Ok(())
}

fn write_records(
    simulation: &Simulation,
    format: OutputFormat,
    mut writer: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Csv => simulation.write_csv(&mut writer)?,
        OutputFormat::Json => {
            simulation.write_json(&mut writer)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Per-minion accuracy table, on stderr so it never mixes with records on stdout.
fn print_summary(summaries: &[MinionSummary], output: Option<&PathBuf>, verbose: bool) {
    eprintln!();
    eprintln!("{}", "Accuracy by minion:".yellow().bold());
    for s in summaries {
        let accuracy = s.accuracy();
        let pct = format!("{:>6.1}%", accuracy * 100.0);
        let pct = if accuracy >= 0.9 {
            pct.green()
        } else if accuracy >= 0.5 {
            pct.yellow()
        } else {
            pct.red()
        };

        if verbose {
            eprintln!(
                "  {:>3}  {:20} {:12} {} ({}/{})",
                s.minion_id, s.minion_name, s.policy, pct, s.correct, s.classified
            );
        } else {
            eprintln!("  {:20} {}", s.minion_name, pct);
        }
    }

    if let Some(path) = output {
        eprintln!();
        eprintln!(
            "{} {}",
            "Records written to".green(),
            path.display().to_string().white()
        );
    }
}
