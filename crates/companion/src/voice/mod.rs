//! Voice command handling for the companion
//!
//! ## Pipeline
//!
//! ```text
//!  transcript ──► VoiceCommandRouter ──► VoiceIntent ──► respond() ──► reply
//!                                              │
//!                                              └──► VoiceSession (guided dialog)
//! ```
//!
//! Speech capture and playback happen in the client; this module only ever
//! sees text.

pub mod responses;
pub mod router;
pub mod session;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use responses::respond;
pub use router::{classify, VoiceCommandRouter, VoiceIntent, KEYWORD_RULES};
pub use session::{PendingField, SessionSnapshot, SessionTurn, VoiceSession};

/// Voice processing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoiceError {
    #[error("No transcript provided")]
    MissingTranscript,
}

pub type VoiceResult<T> = Result<T, VoiceError>;

/// Result of a one-shot voice command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct VoiceCommandOutcome {
    pub command: VoiceIntent,
    pub response: String,
    pub timestamp: String,
}

/// Classify a transcript and build the reply for it.
///
/// A missing or empty transcript is the only failure; any other string,
/// whitespace included, is classified.
pub fn process_voice_command(
    transcript: Option<&str>,
    now: DateTime<Utc>,
) -> VoiceResult<VoiceCommandOutcome> {
    let transcript = match transcript {
        Some(t) if !t.is_empty() => t,
        _ => return Err(VoiceError::MissingTranscript),
    };

    let command = classify(transcript);
    tracing::debug!(intent = %command, "Classified voice command");

    Ok(VoiceCommandOutcome {
        command,
        response: respond(command, transcript),
        timestamp: crate::iso_timestamp(now),
    })
}
