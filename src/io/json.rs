//! Wire types for the input/output JSON streams.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionRecord {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameRecord {
    pub timestamp: String,
    #[serde(default)]
    pub detections: Vec<DetectionRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackRecord {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputFrame {
    pub timestamp: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<TrackRecord>,
}
