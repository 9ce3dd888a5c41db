//! # Companion - Accessible Travel Assistant
//!
//! Domain logic behind the travel companion's three interfaces (voice-first,
//! visual-first and standard). Everything here is pure: callers pass in the
//! transcript, the image bytes, the clock reading and the random source, and
//! get plain data back.

pub mod alerts;
pub mod interface;
pub mod navigation;
pub mod vision;
pub mod voice;

#[cfg(test)]
mod session_tests;

pub use alerts::{AlertKind, SoundAlert, SoundAlertFeed};
pub use interface::InterfaceMode;
pub use navigation::{
    NavigationError, RoutePlan, RoutePreferences, RouteRequest, RouteStep, StepKind,
    TransportArrival, TransportBoard, TransportKind, TransportStatus,
};
pub use vision::{
    BoundingBox, DetectedObject, ObjectDetectionReport, SignDetection, SignLanguageDetector,
    VisionError,
};
pub use voice::{
    PendingField, SessionTurn, VoiceCommandOutcome, VoiceCommandRouter, VoiceError, VoiceIntent,
    VoiceSession,
};

/// Number of entries kept in every rolling detection/alert window.
pub const RECENT_WINDOW: usize = 5;

/// Main error type for companion operations
#[derive(Debug, thiserror::Error)]
pub enum CompanionError {
    #[error("Voice error: {0}")]
    Voice(#[from] VoiceError),

    #[error("Vision error: {0}")]
    Vision(#[from] VisionError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

pub type Result<T> = std::result::Result<T, CompanionError>;

/// Format a timestamp the way browsers print `Date.toISOString()`.
pub fn iso_timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Push into a rolling window, dropping the oldest entries past [`RECENT_WINDOW`].
pub(crate) fn push_recent<T>(window: &mut std::collections::VecDeque<T>, item: T) {
    window.push_back(item);
    while window.len() > RECENT_WINDOW {
        window.pop_front();
    }
}
