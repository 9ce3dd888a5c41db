//! Simulated sound-to-text alerts for the visual-first interface.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Announcement,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct SoundAlert {
    pub id: u64,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub timestamp: String,
}

pub const ALERT_CATALOGUE: [(&str, AlertKind); 5] = [
    ("Bus arriving at platform 2", AlertKind::Announcement),
    ("Next stop: Central Station", AlertKind::Info),
    ("Mind the gap", AlertKind::Warning),
    ("Train departing in 2 minutes", AlertKind::Announcement),
    ("Emergency vehicle approaching", AlertKind::Warning),
];

/// Rolling feed of alerts drawn from [`ALERT_CATALOGUE`] with an injected RNG
#[derive(Debug)]
pub struct SoundAlertFeed<R> {
    rng: R,
    next_id: u64,
    recent: VecDeque<SoundAlert>,
}

impl<R: Rng> SoundAlertFeed<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            next_id: 1,
            recent: VecDeque::with_capacity(crate::RECENT_WINDOW + 1),
        }
    }

    /// Produce the next alert and add it to the window
    pub fn next(&mut self, now: DateTime<Utc>) -> SoundAlert {
        let (message, kind) = ALERT_CATALOGUE[self.rng.gen_range(0..ALERT_CATALOGUE.len())];
        let alert = SoundAlert {
            id: self.next_id,
            message: message.to_string(),
            kind,
            timestamp: crate::iso_timestamp(now),
        };
        self.next_id += 1;

        tracing::trace!(id = alert.id, alert = message, "Sound alert raised");
        crate::push_recent(&mut self.recent, alert.clone());
        alert
    }

    /// Oldest first
    pub fn recent(&self) -> Vec<SoundAlert> {
        self.recent.iter().cloned().collect()
    }
}
