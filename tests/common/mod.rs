//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cratedig::{Candidate, Target};

/// A target with a known length, matching [`make_candidate`] filenames.
pub fn make_target() -> Target {
    Target {
        title: "Strobe".to_string(),
        artist: "deadmau5".to_string(),
        length_seconds: Some(300),
        bpm: None,
    }
}

/// Same target, with an expected tempo for DjReady scenarios.
pub fn make_target_with_bpm(bpm: f64) -> Target {
    Target {
        bpm: Some(bpm),
        ..make_target()
    }
}

/// A well-behaved mp3 candidate whose filename admits [`make_target`]'s query.
/// Tests override individual fields from here.
pub fn make_candidate(source: &str) -> Candidate {
    Candidate {
        source_id: source.to_string(),
        filename: "deadmau5 - Strobe.mp3".to_string(),
        format: "mp3".to_string(),
        bitrate_kbps: 320,
        length_seconds: Some(300),
        has_free_capacity: true,
        queue_depth: 0,
        bpm: None,
        musical_key: None,
    }
}
