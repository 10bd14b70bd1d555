// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forensic integrity check: spotting files whose metadata lies.
//!
//! Peer networks are full of mislabeled and outright fake files - a 30-second
//! loop labeled as a full track, an upscaled 128 kbps rip declaring "320",
//! a renamed mp3 wearing a .flac extension. This check flags candidates whose
//! *declared* metadata is internally or contextually implausible. It cannot
//! prove anything about the actual bytes (we never fetch them); it only
//! catches statistical impossibilities.
//!
//! Intentionally conservative: the only consequence of a flag is demotion to
//! Trash, where the candidate stays visible but always sorts last. A false
//! positive costs one good file a bad rank; a missed fake costs the user a
//! download. The rules lean toward the first failure mode.
//!
//! Thresholds live in [`ForensicThresholds`] so the rule set can be tuned
//! without touching tiering or comparison.

use crate::policy::ForensicThresholds;
use crate::types::{Candidate, Target};

/// Does the declared metadata look fabricated or mislabeled?
///
/// Rules (any one flags the candidate):
/// - An mp3 declaring a bitrate above the format's physical ceiling.
/// - A lossless container declaring a suspiciously low bitrate - a real FLAC
///   rip does not land at lossy bitrates.
/// - A declared duration under the absolute floor: a clip, not a track.
/// - A declared duration shorter than the target's expected length by more
///   than the shortfall ratio (e.g. 60 s against an expected 300 s).
///
/// Unknown values (bitrate 0, missing lengths) never flag - absence of
/// metadata is handled by the tier tables, not here.
pub fn is_fake(candidate: &Candidate, target: &Target, thresholds: &ForensicThresholds) -> bool {
    if candidate.format == "mp3" && candidate.bitrate_kbps > thresholds.max_mp3_bitrate_kbps {
        return true;
    }

    if candidate.is_lossless()
        && candidate.bitrate_kbps > 0
        && candidate.bitrate_kbps < thresholds.lossless_min_bitrate_kbps
    {
        return true;
    }

    if let Some(length) = candidate.length_seconds {
        if length < thresholds.min_plausible_seconds {
            return true;
        }
        if let Some(expected) = target.length_seconds {
            if f64::from(expected) > f64::from(length) * thresholds.duration_shortfall_ratio {
                return true;
            }
        }
    }

    false
}
