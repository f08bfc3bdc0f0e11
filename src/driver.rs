//! Feeds timestamped detection batches into the engine and collects labels.

use std::path::Path;

use tracing::warn;

use crate::error::{Result, TrackerError};
use crate::geometry::Rect;
use crate::io::json::{DetectionRecord, FrameRecord, OutputFrame, TrackRecord};
use crate::io::timestamp;
use crate::tracker::Tracker;

/// Drives a [`Tracker`] across a chronological stream of frame records.
pub struct FrameDriver {
    tracker: Tracker,
}

impl FrameDriver {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    /// Validates and runs every frame in order, returning one [`OutputFrame`]
    /// per input frame. Rejects the whole stream on the first detection with
    /// non-positive width/height, naming the offending timestamp.
    pub fn run(&mut self, frames: &[FrameRecord]) -> Result<Vec<OutputFrame>> {
        self.run_with_vis(frames, None)
    }

    /// As [`Self::run`], but additionally renders a diagnostic PNG for each
    /// frame's post-step track set under `vis_dir`, if given, in the same
    /// pass rather than re-running the engine a second time.
    pub fn run_with_vis(
        &mut self,
        frames: &[FrameRecord],
        vis_dir: Option<&Path>,
    ) -> Result<Vec<OutputFrame>> {
        let mut outputs = Vec::with_capacity(frames.len());

        for (i, frame) in frames.iter().enumerate() {
            let ts = timestamp::parse(&frame.timestamp)?;
            let detections = validate_detections(&frame.timestamp, &frame.detections)?;

            let labels = self
                .tracker
                .step(timestamp::to_epoch_seconds(&ts), &detections)?;

            if let Some(dir) = vis_dir {
                crate::vis::render_frame(dir, i, &self.tracker.tracks())?;
            }

            let tracks = labels
                .into_iter()
                .map(|label| TrackRecord {
                    id: label.track_id,
                    x: label.rect.x,
                    y: label.rect.y,
                    w: label.rect.w,
                    h: label.rect.h,
                })
                .collect();

            outputs.push(OutputFrame {
                timestamp: timestamp::format(&ts),
                tracks,
            });
        }

        Ok(outputs)
    }
}

fn validate_detections(raw_timestamp: &str, records: &[DetectionRecord]) -> Result<Vec<Rect>> {
    records
        .iter()
        .map(|d| {
            if d.w <= 0.0 || d.h <= 0.0 {
                warn!(timestamp = raw_timestamp, "rejecting non-positive detection size");
                return Err(TrackerError::malformed(format!(
                    "detection at {raw_timestamp} has non-positive width or height"
                )));
            }
            Ok(Rect::new(d.x, d.y, d.w, d.h))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ts: &str, detections: Vec<(f64, f64, f64, f64)>) -> FrameRecord {
        FrameRecord {
            timestamp: ts.to_string(),
            detections: detections
                .into_iter()
                .map(|(x, y, w, h)| DetectionRecord { x, y, w, h })
                .collect(),
        }
    }

    #[test]
    fn test_run_rejects_non_positive_size() {
        let mut driver = FrameDriver::new(Tracker::default());
        let frames = vec![frame("2026-01-01T00:00:00", vec![(0.1, 0.1, 0.0, 0.1)])];
        assert!(driver.run(&frames).is_err());
    }

    #[test]
    fn test_run_produces_one_output_per_frame() {
        let mut driver = FrameDriver::new(Tracker::default());
        let frames = vec![
            frame("2026-01-01T00:00:00", vec![(0.5, 0.5, 0.1, 0.1)]),
            frame("2026-01-01T00:00:00.030", vec![(0.51, 0.5, 0.1, 0.1)]),
        ];
        let outputs = driver.run(&frames).unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].tracks.len(), 1);
        assert_eq!(outputs[0].tracks[0].id, outputs[1].tracks[0].id);
    }

    #[test]
    fn test_run_formats_timestamp_canonically() {
        let mut driver = FrameDriver::new(Tracker::default());
        let frames = vec![frame("2026-01-01T00:00:00.5", vec![])];
        let outputs = driver.run(&frames).unwrap();
        assert_eq!(outputs[0].timestamp, "2026-01-01T00:00:00.500000");
    }
}
