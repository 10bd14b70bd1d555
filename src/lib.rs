// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic ranking and tiering for peer file-sharing search results.
//!
//! A decentralized music search hands back arbitrary filenames with
//! self-reported bitrate, duration, and queue depth - no authentication, no
//! guarantees. This crate decides which of those candidates are trustworthy
//! enough, and in what preference order, to hand to a download selector.
//! Same inputs plus same policy always produce the same ordering.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌────────────┐    ┌─────────────┐
//! │ tokenize.rs │───▶│ safety.rs  │───▶│ forensic.rs │
//! │ (admission  │    │ (exclude + │    │ (flag fakes,│
//! │  gate)      │    │  count)    │    │  demote)    │
//! └─────────────┘    └────────────┘    └─────────────┘
//!                          │                  │
//!                          ▼                  ▼
//!                    ┌─────────────┐    ┌────────────┐    ┌───────────┐
//!                    │ classify.rs │───▶│ compare.rs │───▶│ report.rs │
//!                    │ (five-tier  │    │ (tier then │    │ (score +  │
//!                    │  table)     │    │  cascade)  │    │  rationale)│
//!                    └─────────────┘    └────────────┘    └───────────┘
//! ```
//!
//! `engine::rank` threads a batch through the whole pipeline: safety and
//! classification fan out per candidate (rayon, behind the default `parallel`
//! feature), then one stable sort with the composed comparator.
//!
//! # Usage
//!
//! ```
//! use cratedig::{rank, Candidate, RankingPolicy, Target};
//!
//! let target = Target {
//!     title: "Strobe".to_string(),
//!     artist: "deadmau5".to_string(),
//!     length_seconds: Some(634),
//!     bpm: Some(128.0),
//! };
//! let batch = vec![Candidate {
//!     source_id: "peer-1".to_string(),
//!     filename: "deadmau5 - Strobe.mp3".to_string(),
//!     format: "mp3".to_string(),
//!     bitrate_kbps: 320,
//!     length_seconds: Some(630),
//!     has_free_capacity: true,
//!     queue_depth: 0,
//!     bpm: None,
//!     musical_key: None,
//! }];
//!
//! let outcome = rank(&target, batch, &RankingPolicy::quality_first()).unwrap();
//! assert_eq!(outcome.ranked.len(), 1);
//! assert_eq!(outcome.safety_rejected, 0);
//! ```
//!
//! # What this crate does NOT do
//!
//! No network I/O, no file transfer, no persistence, no content
//! verification. The forensic check detects *statistically implausible*
//! metadata; it cannot prove a file is real.

// Module declarations
mod classify;
mod compare;
mod engine;
mod forensic;
mod policy;
mod report;
mod safety;
mod tokenize;
mod types;

// Re-exports for public API
pub use classify::{
    classify, AVAILABILITY_VETO_QUEUE_DEPTH, BPM_MATCH_TOLERANCE, HIGH_QUALITY_BITRATE_KBPS,
    MID_QUALITY_BITRATE_KBPS,
};
pub use compare::{compare_ranked, compare_within_tier};
pub use engine::rank;
pub use forensic::is_fake;
pub use policy::{ForensicThresholds, PolicyError, Priority, RankingPolicy};
pub use report::{
    tier_breakdown, tier_score, BRONZE_SCORE, DIAMOND_SCORE, GOLD_SCORE, SILVER_SCORE, TRASH_SCORE,
};
pub use safety::is_safe;
pub use tokenize::{matches_all_tokens, normalize, tokenize};
pub use types::{Candidate, RankOutcome, RankedCandidate, Target, Tier};
