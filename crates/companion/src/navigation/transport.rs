//! Live transport board (mock data).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Bus,
    Train,
    Metro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum TransportStatus {
    OnTime,
    Delayed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct TransportArrival {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransportKind,
    pub line: String,
    pub destination: String,
    pub arrival: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub platform: Option<String>,
    pub status: TransportStatus,
}

impl TransportArrival {
    fn new(
        id: &str,
        kind: TransportKind,
        line: &str,
        destination: &str,
        arrival: &str,
        status: TransportStatus,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            line: line.to_string(),
            destination: destination.to_string(),
            arrival: arrival.to_string(),
            delay: None,
            platform: None,
            status,
        }
    }

    fn with_delay(mut self, delay: &str) -> Self {
        self.delay = Some(delay.to_string());
        self
    }

    fn with_platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    /// One line for speech output or a visual ticker
    pub fn announce(&self) -> String {
        let kind = match self.kind {
            TransportKind::Bus => "Bus",
            TransportKind::Train => "Train",
            TransportKind::Metro => "Metro",
        };
        let mut text = format!("{} {} to {}", kind, self.line, self.destination);
        match self.status {
            TransportStatus::Cancelled => text.push_str(" is cancelled"),
            TransportStatus::OnTime => text.push_str(&format!(" arrives in {}", self.arrival)),
            TransportStatus::Delayed => {
                text.push_str(&format!(" arrives in {}", self.arrival));
                if let Some(delay) = &self.delay {
                    text.push_str(&format!(", delayed by {}", delay));
                }
            }
        }
        if let Some(platform) = &self.platform {
            if self.status != TransportStatus::Cancelled {
                text.push_str(&format!(" at {}", platform));
            }
        }
        text.push('.');
        text
    }
}

/// Arrivals near a location. The mock board ignores the location itself.
#[derive(Debug, Clone, Default)]
pub struct TransportBoard;

impl TransportBoard {
    pub fn new() -> Self {
        Self
    }

    pub fn arrivals(&self, location: &str) -> Vec<TransportArrival> {
        tracing::debug!(location, "Fetching transport arrivals");

        vec![
            TransportArrival::new(
                "1",
                TransportKind::Bus,
                "Route 42",
                "Downtown Terminal",
                "2 min",
                TransportStatus::OnTime,
            ),
            TransportArrival::new(
                "2",
                TransportKind::Train,
                "Blue Line",
                "Airport",
                "5 min",
                TransportStatus::Delayed,
            )
            .with_delay("1 min")
            .with_platform("Platform 2"),
            TransportArrival::new(
                "3",
                TransportKind::Metro,
                "Red Line",
                "University",
                "8 min",
                TransportStatus::OnTime,
            )
            .with_platform("Platform 1"),
            TransportArrival::new(
                "4",
                TransportKind::Bus,
                "Route 15",
                "Shopping Mall",
                "12 min",
                TransportStatus::OnTime,
            ),
            TransportArrival::new(
                "5",
                TransportKind::Train,
                "Green Line",
                "City Center",
                "15 min",
                TransportStatus::Cancelled,
            ),
        ]
    }

    /// First arrival that is actually running
    pub fn next_departure(&self, location: &str) -> Option<TransportArrival> {
        self.arrivals(location)
            .into_iter()
            .find(|a| a.status != TransportStatus::Cancelled)
    }
}
