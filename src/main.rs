// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;

use cratedig::{rank, Candidate, RankingPolicy, Target};
use serde::Deserialize;

mod cli;
use cli::{Cli, Commands, PolicyPreset};

/// Input file shape for `cratedig rank`.
#[derive(Deserialize)]
struct Payload {
    target: Target,
    candidates: Vec<Candidate>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rank {
            input,
            policy,
            policy_file,
            pretty,
        } => run_rank(&input, policy, policy_file.as_deref(), pretty),
        Commands::Presets => run_presets(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_rank(
    input: &str,
    preset: PolicyPreset,
    policy_file: Option<&str>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(input)?;
    let payload: Payload = serde_json::from_str(&raw)?;

    let policy = match policy_file {
        Some(path) => serde_json::from_str::<RankingPolicy>(&fs::read_to_string(path)?)?,
        None => match preset {
            PolicyPreset::QualityFirst => RankingPolicy::quality_first(),
            PolicyPreset::DjReady => RankingPolicy::dj_ready(),
        },
    };

    let outcome = rank(&payload.target, payload.candidates, &policy)?;

    let json = if pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{json}");

    if outcome.safety_rejected > 0 {
        eprintln!(
            "{} candidate(s) rejected by the safety filter",
            outcome.safety_rejected
        );
    }
    Ok(())
}

fn run_presets() -> Result<(), Box<dyn std::error::Error>> {
    let presets = serde_json::json!({
        "quality_first": RankingPolicy::quality_first(),
        "dj_ready": RankingPolicy::dj_ready(),
    });
    println!("{}", serde_json::to_string_pretty(&presets)?);
    Ok(())
}
