// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking entry point: filter, classify, sort, annotate.
//!
//! One pure, synchronous, CPU-bound pass over an immutable batch:
//!
//! 1. Validate the policy (fail fast - a bad policy never aborts a
//!    half-ranked batch).
//! 2. Per-candidate map: safety filter, then tier classification. No data
//!    dependency between candidates, so with the `parallel` feature the map
//!    fans out across the rayon pool; the serial fallback produces identical
//!    output.
//! 3. One stable sort with the composed tier-then-cascade comparator.
//!    Stability matters: candidates that tie completely keep input order,
//!    which is what makes ranking idempotent.
//!
//! No I/O, no locks, no long-lived state. The policy is borrowed read-only
//! for the duration of the call; callers who mutate policy concurrently must
//! hand the engine a clone. Async callers should treat the whole call as one
//! non-suspending unit of work on a worker thread.

use crate::classify::classify;
use crate::compare::compare_ranked;
use crate::policy::{PolicyError, RankingPolicy};
use crate::report::{tier_breakdown, tier_score};
use crate::safety::is_safe;
use crate::types::{Candidate, RankOutcome, RankedCandidate, Target};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Rank a batch of candidates against a target under a policy.
///
/// Returns the surviving candidates best-first, each annotated with tier,
/// score, rationale, and its original batch position, plus a count of
/// safety-filter rejections. Trash-tier candidates are included (demoted,
/// not hidden); only the safety filter removes anything, and every removal
/// is counted.
///
/// Total function over candidates: malformed metadata degrades tier, it
/// never aborts the batch. The only error is policy misconfiguration,
/// detected before any candidate is touched.
pub fn rank(
    target: &Target,
    candidates: Vec<Candidate>,
    policy: &RankingPolicy,
) -> Result<RankOutcome, PolicyError> {
    policy.validate()?;

    let total = candidates.len();
    let mut ranked = evaluate_batch(target, candidates, policy);
    let safety_rejected = total - ranked.len();

    // Stable sort: full ties keep input order
    ranked.sort_by(|a, b| compare_ranked(a, b, policy));

    Ok(RankOutcome {
        ranked,
        safety_rejected,
    })
}

/// The embarrassingly-parallel map step: safety + classification per
/// candidate, independently.
#[cfg(feature = "rayon")]
fn evaluate_batch(
    target: &Target,
    candidates: Vec<Candidate>,
    policy: &RankingPolicy,
) -> Vec<RankedCandidate> {
    candidates
        .into_par_iter()
        .enumerate()
        .filter_map(|(index, candidate)| evaluate_one(index, candidate, target, policy))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn evaluate_batch(
    target: &Target,
    candidates: Vec<Candidate>,
    policy: &RankingPolicy,
) -> Vec<RankedCandidate> {
    candidates
        .into_iter()
        .enumerate()
        .filter_map(|(index, candidate)| evaluate_one(index, candidate, target, policy))
        .collect()
}

/// Evaluate one candidate: `None` means safety-rejected (the caller counts
/// these), `Some` carries the full annotation.
fn evaluate_one(
    index: usize,
    candidate: Candidate,
    target: &Target,
    policy: &RankingPolicy,
) -> Option<RankedCandidate> {
    if !is_safe(&candidate, target, policy) {
        return None;
    }

    let tier = classify(&candidate, target, policy);
    Some(RankedCandidate {
        tier,
        rank_score: tier_score(tier),
        rank_breakdown: tier_breakdown(tier),
        original_index: index,
        candidate,
    })
}
