// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The safety pre-filter: cheap rejections before any scoring work.
//!
//! Everything here is an unconditional exclusion - candidates that fail never
//! reach the classifier and never appear in the output. That makes this the
//! only place in the engine where a candidate can disappear, which is why the
//! engine counts rejections and reports them to the caller. A silent drop
//! here would be indistinguishable from a peer that never responded.
//!
//! Exclusion is a different failure class from Trash demotion: a rejected
//! candidate is gone, a Trash candidate is visible but always last.

use crate::policy::RankingPolicy;
use crate::tokenize::matches_all_tokens;
use crate::types::{Candidate, Target};

/// Should this candidate be considered at all?
///
/// Rules, in order, each an unconditional rejection:
/// 1. Blocked source.
/// 2. Token admission: every token of the target's query must appear in the
///    candidate's filename (fuzzy - joiner words ignored). Binary, not a
///    score; an empty query admits everything.
/// 3. Duration gate: when the policy enforces duration match and both the
///    candidate and the target declare a length, a deviation beyond the
///    tolerance rejects.
/// 4. Bitrate floor: when configured, a *known* bitrate below the floor
///    rejects. Unknown bitrate (0) passes - absence of metadata downgrades
///    tier later, it never excludes.
pub fn is_safe(candidate: &Candidate, target: &Target, policy: &RankingPolicy) -> bool {
    if policy.blocked_sources.contains(&candidate.source_id) {
        return false;
    }

    if !matches_all_tokens(&target.query_text(), &candidate.filename, true) {
        return false;
    }

    if policy.enforce_duration_match {
        if let (Some(candidate_len), Some(target_len)) =
            (candidate.length_seconds, target.length_seconds)
        {
            if candidate_len.abs_diff(target_len) > policy.duration_tolerance_seconds {
                return false;
            }
        }
    }

    if let Some(floor) = policy.min_bitrate_floor_kbps {
        if candidate.bitrate_kbps > 0 && candidate.bitrate_kbps < floor {
            return false;
        }
    }

    true
}
