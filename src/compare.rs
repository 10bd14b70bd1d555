// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how ranked candidates get sorted.
//!
//! The ordering is bucketed by tier, not by score. A Gold candidate with a
//! 50-deep queue beats a Silver candidate with a free slot. Numeric
//! attributes only matter as tiebreakers within a tier - buckets are
//! impermeable.
//!
//! Within a tier, a four-step cascade decides, first non-equal step wins:
//!
//! 1. **Availability** - a free slot sorts first, unconditionally.
//! 2. **Bitrate** - compared in gap-wide buckets (tiny deltas are
//!    self-reported noise, not signal).
//! 3. **Queue depth** - shallower first, same bucketing rule.
//! 4. **Filename length** - shorter first. Crude but effective: long names
//!    tend to carry remix/bonus/rip clutter that means "not the plain track".
//!
//! The significance rule is a derived sort key, not a pairwise delta test:
//! each value is quantized into buckets of width `gap + 1` and the buckets
//! are compared. Same bucket implies a delta within the gap, a delta past
//! the gap always lands in different buckets, and - unlike a raw pairwise
//! threshold - bucket comparison is transitive, which keeps the whole
//! cascade a total preorder. (A pairwise `|a - b| > gap` test can build a
//! strict cycle out of three candidates straddling the threshold.)
//!
//! Ties after step 4 are genuinely equal. No randomness anywhere - the
//! engine's stable sort keeps input order for full ties, so the same batch
//! with the same policy always produces the same ordering.

use crate::policy::RankingPolicy;
use crate::types::{Candidate, RankedCandidate};
use std::cmp::Ordering;

/// Break a tie between two candidates already known to share a tier.
///
/// Returns `Less` when `a` should sort before `b`. Only meaningful when
/// `classify(a) == classify(b)`; the composed comparator guarantees that.
pub fn compare_within_tier(a: &Candidate, b: &Candidate, policy: &RankingPolicy) -> Ordering {
    // Availability first, unconditionally
    match (a.has_free_capacity, b.has_free_capacity) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    // Bitrate in gap-wide buckets, higher bucket first
    let a_bitrate = bucket(a.bitrate_kbps, policy.significant_bitrate_gap_kbps);
    let b_bitrate = bucket(b.bitrate_kbps, policy.significant_bitrate_gap_kbps);
    if a_bitrate != b_bitrate {
        return b_bitrate.cmp(&a_bitrate);
    }

    // Queue depth, same bucketing, shallower first
    let a_queue = bucket(a.queue_depth, policy.significant_queue_gap);
    let b_queue = bucket(b.queue_depth, policy.significant_queue_gap);
    if a_queue != b_queue {
        return a_queue.cmp(&b_queue);
    }

    // Shorter filename first; empty counts as maximally long
    filename_weight(&a.filename).cmp(&filename_weight(&b.filename))
}

/// Full comparison between two ranked candidates: tier, then the
/// within-tier cascade.
///
/// This is the single comparator handed to the sort. It is a total preorder:
/// reflexive, transitive, antisymmetric up to ties. Score and breakdown are
/// never consulted here - a float lookup diverging from the tier logic must
/// not be able to change the order.
pub fn compare_ranked(a: &RankedCandidate, b: &RankedCandidate, policy: &RankingPolicy) -> Ordering {
    match a.tier.cmp(&b.tier) {
        Ordering::Equal => compare_within_tier(&a.candidate, &b.candidate, policy),
        ord => ord, // tier order determines ranking
    }
}

/// Quantize a value into significance buckets of width `gap + 1`.
///
/// Values in the same bucket differ by at most `gap`; values differing by
/// more than `gap` always land in different buckets. Comparing buckets
/// instead of pairwise deltas is what makes the cascade transitive.
fn bucket(value: u32, gap: u32) -> u32 {
    value / (gap + 1)
}

/// Sort key for the filename heuristic: character length, with empty names
/// pushed to the very end.
fn filename_weight(filename: &str) -> usize {
    if filename.is_empty() {
        usize::MAX
    } else {
        filename.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RankingPolicy;
    use crate::report::{tier_breakdown, tier_score};
    use crate::types::Tier;

    fn candidate(bitrate: u32, free: bool, queue: u32, filename: &str) -> Candidate {
        Candidate {
            source_id: "peer".to_string(),
            filename: filename.to_string(),
            format: "mp3".to_string(),
            bitrate_kbps: bitrate,
            length_seconds: Some(300),
            has_free_capacity: free,
            queue_depth: queue,
            bpm: None,
            musical_key: None,
        }
    }

    fn ranked(tier: Tier, candidate: Candidate, index: usize) -> RankedCandidate {
        RankedCandidate {
            candidate,
            tier,
            rank_score: tier_score(tier),
            rank_breakdown: tier_breakdown(tier),
            original_index: index,
        }
    }

    #[test]
    fn test_availability_decides_first() {
        let policy = RankingPolicy::quality_first();
        // b has far better bitrate, but a has a free slot
        let a = candidate(192, true, 0, "a.mp3");
        let b = candidate(320, false, 0, "b.mp3");
        assert_eq!(compare_within_tier(&a, &b, &policy), Ordering::Less);
    }

    #[test]
    fn test_insignificant_bitrate_gap_falls_through() {
        let policy = RankingPolicy::quality_first(); // gap 32
        let a = candidate(320, true, 0, "short.mp3");
        let b = candidate(300, true, 0, "much_longer_filename.mp3");
        // 20 kbps is noise; filename length decides instead
        assert_eq!(compare_within_tier(&a, &b, &policy), Ordering::Less);
    }

    #[test]
    fn test_significant_bitrate_gap_decides() {
        let policy = RankingPolicy::quality_first();
        let a = candidate(320, true, 0, "zzzzzzzzzzzz.mp3");
        let b = candidate(192, true, 0, "a.mp3");
        assert_eq!(compare_within_tier(&a, &b, &policy), Ordering::Less);
    }

    #[test]
    fn test_queue_depth_decides_past_gap() {
        let policy = RankingPolicy::quality_first(); // queue gap 5
        let a = candidate(320, false, 2, "same.mp3");
        let b = candidate(320, false, 40, "same.mp3");
        assert_eq!(compare_within_tier(&a, &b, &policy), Ordering::Less);

        // Same bucket: equal filenames make them fully tied
        let c = candidate(320, false, 2, "same.mp3");
        let d = candidate(320, false, 5, "same.mp3");
        assert_eq!(compare_within_tier(&c, &d, &policy), Ordering::Equal);
    }

    #[test]
    fn test_near_gap_bitrates_cannot_form_a_cycle() {
        // Three Silver-grade candidates whose bitrates straddle the
        // significance threshold. Under a pairwise |a-b| > gap rule these
        // formed a strict cycle (a < b, b < c, c < a); bucketed comparison
        // must order them consistently.
        let policy = RankingPolicy::quality_first(); // gap 32
        let a = candidate(225, true, 0, "aaaaaaaaaa.mp3");
        let b = candidate(192, true, 0, "b.mp3");
        let c = candidate(224, true, 0, "ccccc.mp3");

        let ab = compare_within_tier(&a, &b, &policy);
        let bc = compare_within_tier(&b, &c, &policy);
        let ac = compare_within_tier(&a, &c, &policy);

        // Antisymmetry
        assert_eq!(ab, compare_within_tier(&b, &a, &policy).reverse());
        assert_eq!(bc, compare_within_tier(&c, &b, &policy).reverse());
        assert_eq!(ac, compare_within_tier(&c, &a, &policy).reverse());

        // No strict cycle: a before b, c before b, c before a
        assert_eq!(ab, Ordering::Less);
        assert_eq!(bc, Ordering::Greater);
        assert_eq!(ac, Ordering::Greater);
    }

    #[test]
    fn test_bucketing_matches_significance_contract() {
        let policy = RankingPolicy::quality_first(); // gap 32, width 33
        // Delta past the gap always decides, higher first
        let a = candidate(320, true, 0, "same.mp3");
        let b = candidate(287, true, 0, "same.mp3");
        assert_eq!(compare_within_tier(&a, &b, &policy), Ordering::Less);
        // Same bucket never decides, regardless of a nonzero delta
        let c = candidate(230, true, 0, "same.mp3");
        let d = candidate(198, true, 0, "same.mp3");
        assert_eq!(compare_within_tier(&c, &d, &policy), Ordering::Equal);
    }

    #[test]
    fn test_filename_length_last_resort() {
        let policy = RankingPolicy::quality_first();
        let a = candidate(320, true, 0, "artist - title.mp3");
        let b = candidate(320, true, 0, "artist - title (extended club remix) [vinyl rip].mp3");
        assert_eq!(compare_within_tier(&a, &b, &policy), Ordering::Less);
    }

    #[test]
    fn test_empty_filename_sorts_last() {
        let policy = RankingPolicy::quality_first();
        let a = candidate(320, true, 0, "x.mp3");
        let b = candidate(320, true, 0, "");
        assert_eq!(compare_within_tier(&a, &b, &policy), Ordering::Less);
        assert_eq!(compare_within_tier(&b, &a, &policy), Ordering::Greater);
    }

    #[test]
    fn test_tier_dominates_everything() {
        let policy = RankingPolicy::quality_first();
        // Gold with the worst possible attributes still beats Silver with the best
        let worst_gold = ranked(Tier::Gold, candidate(0, false, 400, "very long name indeed.mp3"), 0);
        let best_silver = ranked(Tier::Silver, candidate(320, true, 0, "a.mp3"), 1);
        assert_eq!(
            compare_ranked(&worst_gold, &best_silver, &policy),
            Ordering::Less
        );
    }

    #[test]
    fn test_full_tie_is_equal() {
        let policy = RankingPolicy::quality_first();
        let a = ranked(Tier::Gold, candidate(320, true, 0, "same.mp3"), 0);
        let b = ranked(Tier::Gold, candidate(320, true, 0, "same.mp3"), 1);
        assert_eq!(compare_ranked(&a, &b, &policy), Ordering::Equal);
    }
}
