//! A single tracked object's persistent state.

use crate::geometry::Rect;
use crate::kalman::KalmanFilter8D;

/// Per-object state owned exclusively by the [`crate::tracker::Tracker`].
///
/// `rect` always mirrors the filter's current state (predicted or
/// corrected, whichever ran most recently) and exists so gating and
/// visualization never need to re-derive it from the filter's raw vector.
pub struct Track {
    pub id: u64,
    pub(crate) filter: KalmanFilter8D,
    pub rect: Rect,
    pub last_ts: f64,
    pub age: u32,
    pub time_since_update: u32,
}

impl Track {
    /// Creates a new track from an unmatched detection.
    pub fn new(id: u64, rect: Rect, ts: f64) -> Self {
        let filter = KalmanFilter8D::from_rect(rect);
        Self {
            id,
            filter,
            rect,
            last_ts: ts,
            age: 0,
            time_since_update: 0,
        }
    }

    /// Extrapolates the filter to `ts`, refreshing `rect` and bumping the
    /// age/time-since-update counters. Does not touch `last_ts` — that only
    /// advances on a correction.
    pub fn predict_to(&mut self, ts: f64) {
        let dt = ts - self.last_ts;
        self.filter.predict(dt);
        self.rect = self.filter.rect();
        self.age += 1;
        self.time_since_update += 1;
    }

    /// Assimilates a matched detection, resetting the miss counter.
    pub fn correct(&mut self, detection_rect: Rect, ts: f64) {
        self.filter.correct(detection_rect);
        self.rect = self.filter.rect();
        self.last_ts = ts;
        self.time_since_update = 0;
    }
}
