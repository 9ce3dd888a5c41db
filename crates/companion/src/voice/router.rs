//! Voice Command Router
//!
//! Maps a transcript to exactly one intent using ordered keyword containment.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Voice intent classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum VoiceIntent {
    /// Begin turn-by-turn guidance
    Navigate,
    /// Set the starting location
    SetFrom,
    /// Set the destination
    SetTo,
    /// Obstacle detection through the camera
    Camera,
    /// Nearby public transport
    Transport,
    /// List capabilities
    Help,
    /// Nothing recognised
    General,
}

impl VoiceIntent {
    pub const ALL: [VoiceIntent; 7] = [
        VoiceIntent::Navigate,
        VoiceIntent::SetFrom,
        VoiceIntent::SetTo,
        VoiceIntent::Camera,
        VoiceIntent::Transport,
        VoiceIntent::Help,
        VoiceIntent::General,
    ];

    /// Wire label, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceIntent::Navigate => "navigate",
            VoiceIntent::SetFrom => "set_from",
            VoiceIntent::SetTo => "set_to",
            VoiceIntent::Camera => "camera",
            VoiceIntent::Transport => "transport",
            VoiceIntent::Help => "help",
            VoiceIntent::General => "general",
        }
    }
}

impl fmt::Display for VoiceIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword rules, evaluated top to bottom. Categories overlap ("stop" contains
/// "to", "directions from" hits two rules), so the order is part of the contract.
pub const KEYWORD_RULES: &[(&[&str], VoiceIntent)] = &[
    (&["navigate", "directions"], VoiceIntent::Navigate),
    (&["from", "start"], VoiceIntent::SetFrom),
    (&["to", "destination"], VoiceIntent::SetTo),
    (&["camera", "detect"], VoiceIntent::Camera),
    (&["transport", "bus", "train"], VoiceIntent::Transport),
    (&["help"], VoiceIntent::Help),
];

/// Voice command router
#[derive(Debug, Clone, Copy)]
pub struct VoiceCommandRouter {
    rules: &'static [(&'static [&'static str], VoiceIntent)],
}

impl VoiceCommandRouter {
    pub fn new() -> Self {
        Self {
            rules: KEYWORD_RULES,
        }
    }

    /// Classify a transcript. Matching is plain substring containment on the
    /// lower-cased text, so "starting" counts as "start".
    pub fn route(&self, transcript: &str) -> VoiceIntent {
        let text_lower = transcript.to_lowercase();

        self.rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|kw| text_lower.contains(kw)))
            .map(|(_, intent)| *intent)
            .unwrap_or(VoiceIntent::General)
    }
}

impl Default for VoiceCommandRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `VoiceCommandRouter::new().route(transcript)`
pub fn classify(transcript: &str) -> VoiceIntent {
    VoiceCommandRouter::new().route(transcript)
}
