// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "cratedig",
    about = "Rank peer file-sharing search results by trustworthiness and quality",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a JSON batch of search results against a target track
    Rank {
        /// Input JSON file: { "target": {...}, "candidates": [...] }
        #[arg(short, long)]
        input: String,

        /// Policy preset to rank under
        #[arg(short, long, value_enum, default_value_t = PolicyPreset::QualityFirst)]
        policy: PolicyPreset,

        /// Optional JSON file overriding the preset policy entirely
        #[arg(long, conflicts_with = "policy")]
        policy_file: Option<String>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the built-in policy presets as JSON
    Presets,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyPreset {
    /// Fidelity first: lossless/320 with a free slot on top
    QualityFirst,
    /// Mixability first: BPM/key metadata outranks raw bitrate
    DjReady,
}
