use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{VisionError, VisionResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct DetectedObject {
    pub label: String,
    pub confidence: f32,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct ObjectDetectionReport {
    pub objects: Vec<DetectedObject>,
    pub description: String,
    pub timestamp: String,
}

pub const SCENE_DESCRIPTION: &str = "I can see a person walking ahead, a car parked on the right, and a traffic light showing green. The path ahead appears clear for walking.";

/// What the voice-first interface announces when the camera is switched on
pub const SPOKEN_SCENE: &str =
    "I can see a bus stop 50 meters ahead on your right, and a crosswalk directly in front of you.";

const MOCK_DETECTIONS: [(&str, f32, BoundingBox); 3] = [
    (
        "person",
        0.92,
        BoundingBox { x: 100, y: 50, width: 150, height: 300 },
    ),
    (
        "car",
        0.87,
        BoundingBox { x: 300, y: 100, width: 200, height: 100 },
    ),
    (
        "traffic_light",
        0.95,
        BoundingBox { x: 50, y: 20, width: 30, height: 80 },
    ),
];

/// "Detect" obstacles in an uploaded frame. The image is only checked for
/// presence; the detections are always the same three objects.
pub fn detect_objects(image: &[u8], now: DateTime<Utc>) -> VisionResult<ObjectDetectionReport> {
    if image.is_empty() {
        return Err(VisionError::MissingImage);
    }

    tracing::debug!(bytes = image.len(), "Running mock object detection");

    let objects = MOCK_DETECTIONS
        .iter()
        .map(|(label, confidence, bbox)| DetectedObject {
            label: label.to_string(),
            confidence: *confidence,
            bbox: *bbox,
        })
        .collect();

    Ok(ObjectDetectionReport {
        objects,
        description: SCENE_DESCRIPTION.to_string(),
        timestamp: crate::iso_timestamp(now),
    })
}
