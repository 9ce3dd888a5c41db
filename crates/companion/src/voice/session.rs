//! Guided voice dialog for a single traveller.
//!
//! A session remembers which location it is waiting for, the endpoints
//! captured so far and whether guidance is running. It also owns the seeded
//! sign and alert feeds so a session replays identically for the same seed.
//!
//! Blind and deaf sessions run the guided dialog: keywords drive it and a
//! captured starting location chains straight into asking for the
//! destination. Standard sessions are button-driven: speech only fills the
//! field that was asked for, and anything else gets the plain intent reply.

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{respond, VoiceCommandRouter, VoiceError, VoiceIntent, VoiceResult};
use crate::{
    alerts::{SoundAlert, SoundAlertFeed},
    interface::InterfaceMode,
    navigation::{plan_route, RoutePlan, RouteRequest},
    vision::{objects::SPOKEN_SCENE, SignDetection, SignLanguageDetector},
};

/// Which location the next transcript will be captured as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum PendingField {
    From,
    To,
}

/// Reply to one transcript within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct SessionTurn {
    /// `None` when the transcript was captured as a location
    pub intent: Option<VoiceIntent>,
    pub reply: String,
    /// Second announcement the client should deliver after the reply
    pub follow_up: Option<String>,
    pub route: Option<RoutePlan>,
    pub pending_field: Option<PendingField>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub navigating: bool,
    /// Direction currently shown on screen while navigating
    pub current_direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub mode: InterfaceMode,
    pub pending_field: Option<PendingField>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub navigating: bool,
    pub current_direction: Option<String>,
    pub recent_signs: Vec<SignDetection>,
    pub recent_alerts: Vec<SoundAlert>,
    pub created_at: String,
}

pub const PROMPT_FROM: &str = "Please say your starting location";
pub const PROMPT_TO: &str = "Please say your destination";
pub const NEED_BOTH_ENDPOINTS: &str = "Please set both starting location and destination first";
pub const CAMERA_ACTIVATED: &str =
    "Camera activated. Point your camera ahead to detect objects and obstacles.";
pub const FIRST_DIRECTION: &str = "In 100 meters, turn right onto Main Street";
pub const NEXT_DIRECTION: &str = "Turn right onto Oak Avenue";
pub const NAVIGATION_STARTED: &str =
    "Navigation started. I will provide both voice and visual directions.";
pub const NAVIGATION_STOPPED: &str = "Navigation stopped";
pub const NAVIGATION_NOT_ACTIVE: &str = "Navigation is not active";

/// Keeps the alert stream independent of the sign stream for the same seed
const ALERT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug)]
pub struct VoiceSession {
    mode: InterfaceMode,
    router: VoiceCommandRouter,
    pending: Option<PendingField>,
    from: Option<String>,
    to: Option<String>,
    navigating: bool,
    current_direction: Option<&'static str>,
    signs: SignLanguageDetector<StdRng>,
    alerts: SoundAlertFeed<StdRng>,
    created_at: DateTime<Utc>,
}

impl VoiceSession {
    /// The seed drives both the sign and the alert feeds.
    pub fn new(mode: InterfaceMode, seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            mode,
            router: VoiceCommandRouter::new(),
            pending: None,
            from: None,
            to: None,
            navigating: false,
            current_direction: None,
            signs: SignLanguageDetector::new(StdRng::seed_from_u64(seed)),
            alerts: SoundAlertFeed::new(StdRng::seed_from_u64(seed ^ ALERT_SEED_SALT)),
            created_at: now,
        }
    }

    pub fn mode(&self) -> InterfaceMode {
        self.mode
    }

    pub fn welcome(&self) -> &'static str {
        self.mode.welcome_message()
    }

    /// Ask for a location directly, as the on-screen "From"/"To" buttons do
    pub fn request_field(&mut self, field: PendingField) -> SessionTurn {
        self.pending = Some(field);
        let reply = match field {
            PendingField::From => PROMPT_FROM,
            PendingField::To => PROMPT_TO,
        };
        self.turn(None, reply.to_string(), None, None)
    }

    /// Feed one recognised utterance into the dialog
    pub fn handle_transcript(&mut self, transcript: &str) -> VoiceResult<SessionTurn> {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(VoiceError::MissingTranscript);
        }

        if let Some(field) = self.pending.take() {
            return Ok(self.capture(field, transcript));
        }

        let intent = self.router.route(transcript);
        tracing::debug!(%intent, mode = ?self.mode, "Session voice command");

        if self.mode == InterfaceMode::Standard {
            return Ok(self.turn(Some(intent), respond(intent, transcript), None, None));
        }

        let turn = match intent {
            VoiceIntent::SetFrom => {
                self.pending = Some(PendingField::From);
                self.turn(Some(intent), PROMPT_FROM.to_string(), None, None)
            }
            VoiceIntent::SetTo => {
                self.pending = Some(PendingField::To);
                self.turn(Some(intent), PROMPT_TO.to_string(), None, None)
            }
            VoiceIntent::Navigate => self.start_navigation(),
            VoiceIntent::Camera => self.turn(
                Some(intent),
                CAMERA_ACTIVATED.to_string(),
                Some(SPOKEN_SCENE.to_string()),
                None,
            ),
            _ => self.turn(Some(intent), respond(intent, transcript), None, None),
        };
        Ok(turn)
    }

    /// Begin guidance if both endpoints are known
    pub fn start_navigation(&mut self) -> SessionTurn {
        let request = RouteRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            preferences: None,
        };
        match plan_route(&request) {
            Ok(plan) => {
                self.navigating = true;
                self.current_direction = Some(opening_direction(self.mode));
                let (reply, follow_up) = match self.mode {
                    InterfaceMode::Standard => (NAVIGATION_STARTED.to_string(), NEXT_DIRECTION),
                    InterfaceMode::Blind | InterfaceMode::Deaf => {
                        let reply = format!(
                            "Starting navigation from {} to {}. I will guide you with voice directions.",
                            self.from.as_deref().unwrap_or_default(),
                            self.to.as_deref().unwrap_or_default()
                        );
                        let follow_up = if self.mode == InterfaceMode::Blind {
                            FIRST_DIRECTION
                        } else {
                            NEXT_DIRECTION
                        };
                        (reply, follow_up)
                    }
                };
                tracing::info!(from = ?self.from, to = ?self.to, mode = ?self.mode, "Navigation started");
                self.turn(
                    Some(VoiceIntent::Navigate),
                    reply,
                    Some(follow_up.to_string()),
                    Some(plan),
                )
            }
            Err(_) => self.turn(
                Some(VoiceIntent::Navigate),
                NEED_BOTH_ENDPOINTS.to_string(),
                None,
                None,
            ),
        }
    }

    pub fn stop_navigation(&mut self) -> SessionTurn {
        let reply = if self.navigating {
            self.navigating = false;
            self.current_direction = None;
            NAVIGATION_STOPPED
        } else {
            NAVIGATION_NOT_ACTIVE
        };
        self.turn(None, reply.to_string(), None, None)
    }

    pub fn poll_signs(&mut self, now: DateTime<Utc>) -> Option<SignDetection> {
        self.signs.poll(now)
    }

    pub fn recent_signs(&self) -> Vec<SignDetection> {
        self.signs.recent()
    }

    pub fn next_alert(&mut self, now: DateTime<Utc>) -> SoundAlert {
        self.alerts.next(now)
    }

    pub fn recent_alerts(&self) -> Vec<SoundAlert> {
        self.alerts.recent()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            pending_field: self.pending,
            from: self.from.clone(),
            to: self.to.clone(),
            navigating: self.navigating,
            current_direction: self.current_direction.map(str::to_string),
            recent_signs: self.signs.recent(),
            recent_alerts: self.alerts.recent(),
            created_at: crate::iso_timestamp(self.created_at),
        }
    }

    fn capture(&mut self, field: PendingField, location: &str) -> SessionTurn {
        if self.mode == InterfaceMode::Standard {
            let reply = match field {
                PendingField::From => {
                    self.from = Some(location.to_string());
                    format!("From location set to {}", location)
                }
                PendingField::To => {
                    self.to = Some(location.to_string());
                    format!("Destination set to {}", location)
                }
            };
            return self.turn(None, reply, None, None);
        }

        match field {
            PendingField::From => {
                self.from = Some(location.to_string());
                self.pending = Some(PendingField::To);
                self.turn(
                    None,
                    format!("From location set to {}. Now say your destination.", location),
                    None,
                    None,
                )
            }
            PendingField::To => {
                self.to = Some(location.to_string());
                self.turn(
                    None,
                    format!("Destination set to {}. Ready to start navigation.", location),
                    None,
                    None,
                )
            }
        }
    }

    fn turn(
        &self,
        intent: Option<VoiceIntent>,
        reply: String,
        follow_up: Option<String>,
        route: Option<RoutePlan>,
    ) -> SessionTurn {
        SessionTurn {
            intent,
            reply,
            follow_up,
            route,
            pending_field: self.pending,
            from: self.from.clone(),
            to: self.to.clone(),
            navigating: self.navigating,
            current_direction: self.current_direction.map(str::to_string),
        }
    }
}

/// First direction shown when guidance starts
fn opening_direction(mode: InterfaceMode) -> &'static str {
    match mode {
        InterfaceMode::Blind => FIRST_DIRECTION,
        InterfaceMode::Deaf => "Head north on Main Street for 200 meters",
        InterfaceMode::Standard => "Head north on Main Street for 200 meters, then turn right",
    }
}
