// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking policy: the configuration bundle behind every decision.
//!
//! One tagged value, not a strategy-class hierarchy. The two presets cover
//! the two real use cases: [`RankingPolicy::quality_first`] for listeners
//! who want fidelity, [`RankingPolicy::dj_ready`] for sets where a
//! beat-matched 192 kbps file beats a pristine file that can't be mixed.
//! Everything the decision tables consult lives here, so a ranking call is
//! fully reproducible from (target, batch, policy).
//!
//! Misconfiguration fails at construction via [`RankingPolicy::validate`],
//! never mid-batch. Negative thresholds are unrepresentable - the numeric
//! fields are unsigned, and serde refuses negative JSON for them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// What the tier classifier optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Fidelity first: lossless/320 with a free slot is the top tier.
    QualityFirst,
    /// Mixability first: BPM/key metadata and tempo match outrank raw bitrate.
    DjReady,
}

/// Thresholds for the forensic plausibility check.
///
/// These are deliberately configuration, not constants: the detector's rule
/// set gets tuned against whatever fakes are circulating this month, and
/// tuning must never require touching the tiering or comparator logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForensicThresholds {
    /// Physical ceiling for a declared mp3 bitrate. MPEG-1 Layer III tops
    /// out at 320 kbps; anything above is a fabricated header.
    pub max_mp3_bitrate_kbps: u32,
    /// A lossless container declaring less than this is suspicious - real
    /// FLAC rips land well above typical lossy bitrates.
    pub lossless_min_bitrate_kbps: u32,
    /// Declared durations under this are clips or stubs, not tracks.
    pub min_plausible_seconds: u32,
    /// Flag when the target is more than this many times longer than the
    /// candidate's declared duration.
    pub duration_shortfall_ratio: f64,
}

impl Default for ForensicThresholds {
    fn default() -> Self {
        ForensicThresholds {
            max_mp3_bitrate_kbps: 320,
            lossless_min_bitrate_kbps: 400,
            min_plausible_seconds: 45,
            duration_shortfall_ratio: 3.0,
        }
    }
}

/// Configuration bundle for one ranking call.
///
/// Read-only during ranking - the engine borrows it and never writes back.
/// There is no process-wide "current policy": callers thread a policy into
/// every call explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingPolicy {
    pub priority: Priority,
    /// When true, candidates outside the duration tolerance are excluded by
    /// the safety filter (and demoted to Bronze by the standalone classifier).
    pub enforce_duration_match: bool,
    /// Allowed deviation from the target's expected length, in seconds.
    pub duration_tolerance_seconds: u32,
    /// Minimum bitrate delta before bitrate is allowed to break a tie.
    pub significant_bitrate_gap_kbps: u32,
    /// Minimum queue-depth delta before queue depth is allowed to break a tie.
    pub significant_queue_gap: u32,
    /// Sources whose results are rejected outright.
    #[serde(default)]
    pub blocked_sources: HashSet<String>,
    /// Optional safety-filter floor: reject candidates whose declared bitrate
    /// is known and below this. Off by default.
    #[serde(default)]
    pub min_bitrate_floor_kbps: Option<u32>,
    #[serde(default)]
    pub forensic: ForensicThresholds,
}

impl RankingPolicy {
    /// Preset for listeners: fidelity dominates.
    ///
    /// Defaults: 10 s duration tolerance (enforced), 32 kbps significant
    /// bitrate gap, queue gap of 5.
    pub fn quality_first() -> Self {
        RankingPolicy {
            priority: Priority::QualityFirst,
            enforce_duration_match: true,
            duration_tolerance_seconds: 10,
            significant_bitrate_gap_kbps: 32,
            significant_queue_gap: 5,
            blocked_sources: HashSet::new(),
            min_bitrate_floor_kbps: None,
            forensic: ForensicThresholds::default(),
        }
    }

    /// Preset for DJ sets: musical compatibility dominates.
    ///
    /// Same gates as [`Self::quality_first`] except the significant bitrate
    /// gap widens to 64 kbps - under this preset bitrate is deliberately a
    /// weaker tiebreaker.
    pub fn dj_ready() -> Self {
        RankingPolicy {
            priority: Priority::DjReady,
            significant_bitrate_gap_kbps: 64,
            ..Self::quality_first()
        }
    }

    /// Check the policy for logical misconfiguration.
    ///
    /// Runs once per ranking call, before any candidate is touched, so a bad
    /// policy can never abort a half-ranked batch.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.forensic.duration_shortfall_ratio <= 1.0
            || !self.forensic.duration_shortfall_ratio.is_finite()
        {
            return Err(PolicyError::InvalidShortfallRatio {
                ratio: self.forensic.duration_shortfall_ratio,
            });
        }
        if self.forensic.max_mp3_bitrate_kbps == 0 {
            return Err(PolicyError::ZeroMp3Ceiling);
        }
        Ok(())
    }
}

/// Error type for policy misconfiguration.
///
/// Note that a zero duration tolerance is NOT an error: with enforcement on
/// it simply demands an exact length match, which is a legitimate (if
/// strict) configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyError {
    /// Shortfall ratio must be finite and greater than 1.
    InvalidShortfallRatio { ratio: f64 },
    /// An mp3 bitrate ceiling of zero would flag every mp3 as fake.
    ZeroMp3Ceiling,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::InvalidShortfallRatio { ratio } => {
                write!(f, "duration shortfall ratio {} must be finite and > 1", ratio)
            }
            PolicyError::ZeroMp3Ceiling => {
                write!(f, "mp3 bitrate ceiling must be nonzero")
            }
        }
    }
}

impl std::error::Error for PolicyError {}
