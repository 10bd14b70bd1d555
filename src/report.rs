// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank reporting: fixed score and rationale per tier, for display only.
//!
//! Ordering is entirely comparator-driven; these lookups exist so a UI can
//! show "0.85 - High quality" next to a result without re-deriving the
//! decision. Feeding the float back into ordering would invite a
//! float-precision divergence from the tier/tie-break logic, so don't.
//!
//! # Constants
//!
//! | Tier    | Score | Rationale shown |
//! |---------|-------|-----------------|
//! | Diamond | 1.0   | quality, availability, metadata all aligned |
//! | Gold    | 0.85  | high quality, minor compromise |
//! | Silver  | 0.60  | acceptable mid-range |
//! | Bronze  | 0.40  | low quality or unreachable |
//! | Trash   | 0.10  | forensic mismatch |

use crate::types::Tier;

/// Display score for Diamond-tier results.
pub const DIAMOND_SCORE: f64 = 1.0;
/// Display score for Gold-tier results.
pub const GOLD_SCORE: f64 = 0.85;
/// Display score for Silver-tier results.
pub const SILVER_SCORE: f64 = 0.60;
/// Display score for Bronze-tier results.
pub const BRONZE_SCORE: f64 = 0.40;
/// Display score for Trash-tier results.
pub const TRASH_SCORE: f64 = 0.10;

/// Fixed numeric score for a tier, in `[0, 1]`.
pub fn tier_score(tier: Tier) -> f64 {
    match tier {
        Tier::Diamond => DIAMOND_SCORE,
        Tier::Gold => GOLD_SCORE,
        Tier::Silver => SILVER_SCORE,
        Tier::Bronze => BRONZE_SCORE,
        Tier::Trash => TRASH_SCORE,
    }
}

/// Short fixed rationale for a tier, for UI display.
pub fn tier_breakdown(tier: Tier) -> &'static str {
    match tier {
        Tier::Diamond => "Perfect match: quality, availability, and metadata",
        Tier::Gold => "High quality with a minor compromise",
        Tier::Silver => "Acceptable mid-range quality",
        Tier::Bronze => "Low quality or effectively unavailable",
        Tier::Trash => "Forensic Mismatch (possible fake)",
    }
}
