//! Simulated camera assistance: obstacle detection and sign-language recognition.
//!
//! No model runs here. Both detectors return canned or randomly drawn results
//! so the interfaces can be exercised end to end.

pub mod objects;
pub mod signs;

pub use objects::{detect_objects, BoundingBox, DetectedObject, ObjectDetectionReport};
pub use signs::{SignDetection, SignLanguageDetector, SIGN_VOCABULARY};

/// Vision processing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisionError {
    #[error("No image provided")]
    MissingImage,
}

pub type VisionResult<T> = Result<T, VisionError>;
