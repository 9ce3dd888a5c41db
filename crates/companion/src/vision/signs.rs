use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// (gesture, translation) pairs the detector can report
pub const SIGN_VOCABULARY: [(&str, &str); 10] = [
    ("hello", "Hello"),
    ("thank_you", "Thank you"),
    ("help", "Help"),
    ("where", "Where?"),
    ("bus", "Bus"),
    ("train", "Train"),
    ("stop", "Stop"),
    ("go", "Go"),
    ("left", "Left"),
    ("right", "Right"),
];

/// A poll only yields a sign when the draw exceeds this value.
const DETECTION_THRESHOLD: f64 = 0.7;
/// Confidence is drawn from `MIN_CONFIDENCE..MAX_CONFIDENCE`, upper bound excluded.
const MIN_CONFIDENCE: f32 = 0.7;
const MAX_CONFIDENCE: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct SignDetection {
    pub gesture: String,
    pub translation: String,
    pub confidence: f32,
    pub timestamp: String,
}

/// Simulated sign-language recogniser driven by an injected RNG
#[derive(Debug)]
pub struct SignLanguageDetector<R> {
    rng: R,
    recent: VecDeque<SignDetection>,
}

impl<R: Rng> SignLanguageDetector<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            recent: VecDeque::with_capacity(crate::RECENT_WINDOW + 1),
        }
    }

    /// Inspect one frame. Roughly three polls in ten produce a detection.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<SignDetection> {
        if self.rng.gen::<f64>() <= DETECTION_THRESHOLD {
            return None;
        }

        let (gesture, translation) = SIGN_VOCABULARY[self.rng.gen_range(0..SIGN_VOCABULARY.len())];
        let detection = SignDetection {
            gesture: gesture.to_string(),
            translation: translation.to_string(),
            confidence: self.rng.gen_range(MIN_CONFIDENCE..MAX_CONFIDENCE),
            timestamp: crate::iso_timestamp(now),
        };

        tracing::debug!(gesture, confidence = detection.confidence, "Sign detected");
        crate::push_recent(&mut self.recent, detection.clone());
        Some(detection)
    }

    /// Oldest first
    pub fn recent(&self) -> Vec<SignDetection> {
        self.recent.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}
