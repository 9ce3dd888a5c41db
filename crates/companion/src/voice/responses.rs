//! Canned replies for each voice intent.

use super::VoiceIntent;

pub const NAVIGATE_RESPONSE: &str =
    "I'll help you start navigation. Please make sure you've set your starting location and destination.";
pub const SET_FROM_RESPONSE: &str =
    "I'm ready to set your starting location. Please tell me where you're starting from.";
pub const SET_TO_RESPONSE: &str =
    "I'm ready to set your destination. Where would you like to go?";
pub const CAMERA_RESPONSE: &str =
    "Activating camera for object detection. Point your camera ahead to see what's around you.";
pub const TRANSPORT_RESPONSE: &str = "Let me check nearby public transport options for you.";
pub const HELP_RESPONSE: &str = "I can help you with navigation, setting locations, object detection, and finding public transport. What would you like to do?";

/// Build the reply for an intent. Only `General` looks at the transcript,
/// which it echoes back exactly as received.
pub fn respond(intent: VoiceIntent, transcript: &str) -> String {
    match intent {
        VoiceIntent::Navigate => NAVIGATE_RESPONSE.to_string(),
        VoiceIntent::SetFrom => SET_FROM_RESPONSE.to_string(),
        VoiceIntent::SetTo => SET_TO_RESPONSE.to_string(),
        VoiceIntent::Camera => CAMERA_RESPONSE.to_string(),
        VoiceIntent::Transport => TRANSPORT_RESPONSE.to_string(),
        VoiceIntent::Help => HELP_RESPONSE.to_string(),
        VoiceIntent::General => format!(
            "I heard you say: \"{}\". How can I help you with your travel needs?",
            transcript
        ),
    }
}
