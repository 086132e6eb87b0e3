//! Roster command - show the minions a configuration describes.

use std::path::PathBuf;

use colored::Colorize;
use minion_zoo::{MinionConfig, MinionId, Policy, ZooConfig};
use serde_json::{Map, Value};

pub fn run(
    config_path: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ZooConfig::load(&config_path)?;
    let roster = config.build_roster()?;

    if json_output {
        let minions: Vec<_> = roster
            .iter()
            .zip(&config.minions)
            .map(|(minion, spec)| minion_json(minion.id(), spec))
            .collect::<Result<_, _>>()?;
        let out = serde_json::json!({
            "labels": config.labels,
            "seed": config.seed,
            "minions": minions,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Roster from".cyan().bold(),
        config_path.display().to_string().white()
    );
    println!(
        "Labels: {}",
        config
            .labels
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if verbose {
        match config.seed {
            Some(seed) => println!("Seed: {}", seed),
            None => println!("Seed: {}", "entropy".dimmed()),
        }
    }
    println!();

    for (minion, spec) in roster.iter().zip(&config.minions) {
        println!(
            "  {:>3}  {:20} {}",
            minion.id(),
            minion.name().white().bold(),
            describe(&spec.policy)
        );
    }

    Ok(())
}

fn describe(policy: &Policy) -> String {
    match policy {
        Policy::Expert => "expert".green().to_string(),
        Policy::SingleLabel { label } => format!("{} (always {})", "single_label".yellow(), label),
        Policy::Random => "random".magenta().to_string(),
        Policy::Noisy { confusion_matrix } => {
            let [p0, p1] = confusion_matrix.as_array();
            format!("{} (p0={:.2}, p1={:.2})", "noisy".blue(), p0, p1)
        }
    }
}

/// A minion entry shaped like the configuration format, plus its assigned id.
fn minion_json(id: MinionId, spec: &MinionConfig) -> Result<Value, serde_json::Error> {
    let mut entry = Map::new();
    entry.insert("id".to_string(), Value::from(id));
    if let Value::Object(fields) = serde_json::to_value(spec)? {
        entry.extend(fields);
    }
    Ok(Value::Object(entry))
}
