// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The tier classifier: one deterministic decision table per candidate.
//!
//! Five buckets, evaluated once per candidate with no cross-candidate state.
//! The table reads top-down and the first matching rule wins:
//!
//! 1. Forensic flag → Trash. Nothing a fake declares can buy it back.
//! 2. Availability veto → Bronze. A 500-deep queue with no free slot makes
//!    quality irrelevant; the transfer will effectively never start.
//! 3. Duration mismatch → Bronze. The engine's safety filter already excludes
//!    these, so this branch is unreachable in the normal pipeline - it exists
//!    so `classify` stays correct when reused standalone.
//! 4. Priority branch: DjReady weights musical compatibility (BPM/key
//!    presence and tempo match) above raw bitrate, because a slightly
//!    lower-bitrate beat-matched file is more useful in a set than a pristine
//!    file that can't be mixed. QualityFirst weights fidelity - the listener
//!    doesn't care about tempo compatibility.
//!
//! # Constants
//!
//! | Constant | Value | Why |
//! |----------|-------|-----|
//! | `HIGH_QUALITY_BITRATE_KBPS` | 320 | mp3 ceiling; "as good as lossy gets" |
//! | `MID_QUALITY_BITRATE_KBPS`  | 192 | the floor of "acceptable" |
//! | `BPM_MATCH_TOLERANCE`       | 3.0 | mixable without audible stretching |
//! | `AVAILABILITY_VETO_QUEUE_DEPTH` | 500 | past this, the slot never comes |

use crate::forensic::is_fake;
use crate::policy::{Priority, RankingPolicy};
use crate::types::{Candidate, Target, Tier};

/// Bitrate at or above which a lossy file counts as high quality.
pub const HIGH_QUALITY_BITRATE_KBPS: u32 = 320;

/// Bitrate at or above which a file counts as mid quality.
pub const MID_QUALITY_BITRATE_KBPS: u32 = 192;

/// Maximum BPM deviation from the target that still counts as a match.
pub const BPM_MATCH_TOLERANCE: f64 = 3.0;

/// Queue depth beyond which an unavailable source is vetoed to Bronze.
pub const AVAILABILITY_VETO_QUEUE_DEPTH: u32 = 500;

/// Assign a quality tier to one candidate.
///
/// Pure and total: malformed or missing metadata lands in the worst
/// applicable branch, it never panics or errors. Same inputs, same tier.
pub fn classify(candidate: &Candidate, target: &Target, policy: &RankingPolicy) -> Tier {
    if is_fake(candidate, target, &policy.forensic) {
        return Tier::Trash;
    }

    if !candidate.has_free_capacity && candidate.queue_depth > AVAILABILITY_VETO_QUEUE_DEPTH {
        return Tier::Bronze;
    }

    if policy.enforce_duration_match {
        if let (Some(candidate_len), Some(target_len)) =
            (candidate.length_seconds, target.length_seconds)
        {
            if candidate_len.abs_diff(target_len) > policy.duration_tolerance_seconds {
                return Tier::Bronze;
            }
        }
    }

    let is_high_quality =
        candidate.bitrate_kbps >= HIGH_QUALITY_BITRATE_KBPS || candidate.is_lossless();
    let is_mid_quality = candidate.bitrate_kbps >= MID_QUALITY_BITRATE_KBPS || is_high_quality;
    let bpm_matches = bpm_matches(candidate, target);

    match policy.priority {
        Priority::DjReady => {
            if candidate.has_musical_metadata()
                && bpm_matches
                && is_high_quality
                && candidate.has_free_capacity
            {
                Tier::Diamond
            } else if candidate.has_musical_metadata() && bpm_matches && is_mid_quality {
                Tier::Gold
            } else if is_mid_quality {
                Tier::Silver
            } else {
                Tier::Bronze
            }
        }
        Priority::QualityFirst => {
            if (candidate.is_lossless() || candidate.bitrate_kbps == HIGH_QUALITY_BITRATE_KBPS)
                && candidate.has_free_capacity
            {
                Tier::Diamond
            } else if is_high_quality {
                Tier::Gold
            } else if is_mid_quality {
                Tier::Silver
            } else {
                Tier::Bronze
            }
        }
    }
}

/// Tempo compatibility: vacuously true when the target declares no BPM,
/// otherwise the candidate must declare one within tolerance.
fn bpm_matches(candidate: &Candidate, target: &Target) -> bool {
    match (target.bpm, candidate.bpm) {
        (None, _) => true,
        (Some(want), Some(got)) => (want - got).abs() <= BPM_MATCH_TOLERANCE,
        (Some(_), None) => false,
    }
}
