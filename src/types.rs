// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking call.
//!
//! These types define what flows into the engine (a [`Target`] plus a batch of
//! [`Candidate`]s) and what flows out (a sorted list of [`RankedCandidate`]s
//! inside a [`RankOutcome`]). Candidates are what a decentralized peer search
//! hands back: arbitrary filenames and self-reported numbers that nobody has
//! authenticated. The engine never mutates a candidate - every annotation it
//! produces lives on the wrapper type, so "input" and "decision" can't blur.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Tier**: `Diamond < Gold < Silver < Bronze < Trash` under derived `Ord`.
//!   Smaller enum value = better. The composed comparator leans on this
//!   ordering directly, so reordering variants reorders every result list.
//!
//! - **RankedCandidate**: `original_index` is the position in the input batch
//!   before sorting and is never rewritten afterwards. Callers use it for
//!   audit/undo display.
//!
//! - **Candidate**: `bitrate_kbps == 0` means unknown, not silence. Decision
//!   tables treat unknown as the worst applicable branch rather than erroring.

use serde::{Deserialize, Serialize};

/// One reported search result from a file-sharing peer.
///
/// Everything here is self-reported by the remote source and must be treated
/// as adversarial until the forensic check has had a look at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque peer/user identifier. Matched verbatim against the policy's
    /// blocked-source set.
    pub source_id: String,
    /// Raw filename as reported, extension included.
    pub filename: String,
    /// Lower-cased extension: "mp3", "flac", ...
    pub format: String,
    /// Declared bitrate in kbps. 0 = unknown.
    #[serde(default)]
    pub bitrate_kbps: u32,
    /// Declared duration, if the source bothered to report one.
    #[serde(default)]
    pub length_seconds: Option<u32>,
    /// Whether the source can start the transfer right now.
    #[serde(default)]
    pub has_free_capacity: bool,
    /// How many transfers are queued ahead of ours at this source.
    #[serde(default)]
    pub queue_depth: u32,
    /// Pre-computed BPM, when an upstream analyzer supplied one.
    #[serde(default)]
    pub bpm: Option<f64>,
    /// Pre-computed musical key ("8A", "Am", ...), when available.
    #[serde(default)]
    pub musical_key: Option<String>,
}

impl Candidate {
    /// True when the declared container is a lossless format.
    pub fn is_lossless(&self) -> bool {
        matches!(self.format.as_str(), "flac" | "wav")
    }

    /// True when the candidate carries any musical metadata at all
    /// (BPM or key). DjReady tiers gate on this.
    pub fn has_musical_metadata(&self) -> bool {
        self.bpm.is_some() || self.musical_key.is_some()
    }
}

/// The track being searched for, as described by the query originator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub title: String,
    pub artist: String,
    /// Expected duration, when known (e.g. from a release database).
    #[serde(default)]
    pub length_seconds: Option<u32>,
    /// Expected tempo, when the caller cares about beat-matching.
    #[serde(default)]
    pub bpm: Option<f64>,
}

impl Target {
    /// The free-text query this target implies, for token admission checks.
    pub fn query_text(&self) -> String {
        format!("{} {}", self.artist, self.title)
    }
}

/// Quality bucket assigned to a candidate. Smaller = better.
///
/// Buckets are impermeable: a Gold candidate with terrible availability still
/// outranks every Silver candidate. Numeric attributes only matter as
/// tiebreakers within a bucket - see `compare::compare_within_tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Everything the policy asks for: quality, availability, metadata.
    Diamond = 1,
    /// High quality, minor compromise (e.g. no free slot).
    Gold = 2,
    /// Acceptable mid-range quality.
    Silver = 3,
    /// Low quality or effectively unreachable.
    Bronze = 4,
    /// Forensic mismatch - likely fake or mislabeled. Always last.
    Trash = 5,
}

/// A candidate plus everything the engine decided about it.
///
/// The input [`Candidate`] is embedded untouched; `tier`, `rank_score`, and
/// `rank_breakdown` are set exactly once during ranking. Score and breakdown
/// are presentation aids only - ordering is entirely comparator-driven.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub tier: Tier,
    /// Fixed per-tier score in `[0, 1]`, for display and telemetry.
    pub rank_score: f64,
    /// Short human-readable rationale for the tier.
    pub rank_breakdown: &'static str,
    /// Position in the input batch before sorting.
    pub original_index: usize,
}

/// Everything a ranking call produces.
///
/// `ranked` is best-first and contains every candidate that survived the
/// safety filter - including Trash-tier ones, which are demoted but never
/// hidden. `safety_rejected` counts the candidates that were excluded
/// outright; rejection and demotion are different failure classes and are
/// reported separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankOutcome {
    pub ranked: Vec<RankedCandidate>,
    pub safety_rejected: usize,
}
