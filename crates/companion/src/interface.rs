//! The three ways a traveller can use the companion.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceMode {
    /// Voice-first: everything is spoken, input is speech
    Blind,
    /// Visual-first: sounds become text alerts, sign language is recognised
    Deaf,
    /// All panels visible
    #[default]
    Standard,
}

impl InterfaceMode {
    pub fn welcome_message(&self) -> &'static str {
        match self {
            InterfaceMode::Blind => {
                "Welcome to your AI Travel Companion. Tap anywhere to start voice commands, or use the navigation buttons."
            }
            InterfaceMode::Deaf => {
                "Welcome. Sound alerts will appear as text and sign language detection is available from the camera panel."
            }
            InterfaceMode::Standard => {
                "Welcome to your AI Travel Companion. Plan a route, check live transport, or use the camera for assistance."
            }
        }
    }

    /// Whether replies should be read aloud by the client
    pub fn speaks_replies(&self) -> bool {
        matches!(self, InterfaceMode::Blind | InterfaceMode::Standard)
    }

    /// Whether the client should poll for sound alerts and sign detections
    pub fn shows_visual_feeds(&self) -> bool {
        matches!(self, InterfaceMode::Deaf | InterfaceMode::Standard)
    }
}
