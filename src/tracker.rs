//! The per-frame predict → cost → assign → update → spawn → cull engine.

use tracing::{debug, trace, warn};

use crate::cost::{self, BIG};
use crate::error::{Result, TrackerError};
use crate::geometry::Rect;
use crate::track::Track;

/// Default gating radius on centre distance (normalized coordinates).
pub const DEFAULT_MAX_DIST: f64 = 0.15;
/// Default number of frames a track may coast without a correction.
pub const DEFAULT_MAX_AGE: u32 = 5;
/// Default IoU/centre-distance cost weight.
pub const DEFAULT_ALPHA: f64 = 0.7;

/// A single frame's output: one `(track_id, raw detection)` pair per
/// detection that was associated to a track this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub track_id: u64,
    pub rect: Rect,
}

/// A read-only view of a track, for visualization.
#[derive(Clone, Copy, Debug)]
pub struct TrackView {
    pub id: u64,
    pub rect: Rect,
}

/// Owns all track state and the identity counter for one tracking run.
pub struct Tracker {
    tracks: Vec<Track>,
    next_id: u64,
    max_dist: f64,
    max_age: u32,
    alpha: f64,
}

impl Tracker {
    pub fn new(max_dist: f64, max_age: u32, alpha: f64) -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 0,
            max_dist,
            max_age,
            alpha,
        }
    }

    /// Read-only view of currently-held tracks, for visualization.
    pub fn tracks(&self) -> Vec<TrackView> {
        self.tracks
            .iter()
            .map(|t| TrackView {
                id: t.id,
                rect: t.rect,
            })
            .collect()
    }

    /// Advances the engine by one frame, returning one `(track_id, raw
    /// detection)` pair per associated detection, in detection order.
    pub fn step(&mut self, ts: f64, detections: &[Rect]) -> Result<Vec<Label>> {
        for t in &mut self.tracks {
            t.predict_to(ts);
        }

        let n_tracks = self.tracks.len();
        let n_detections = detections.len();
        let n = n_tracks.max(n_detections);

        if n == 0 {
            return Ok(Vec::new());
        }

        let costs = self.build_cost_matrix(detections, n);
        let assignment = crate::assignment::solve(&costs);
        self.validate_permutation(&assignment, n)?;

        let mut det_to_track: Vec<Option<usize>> = vec![None; n_detections];
        for (i, &j) in assignment.iter().enumerate() {
            if i >= n_tracks || j >= n_detections {
                continue;
            }
            if costs[i][j] < BIG {
                det_to_track[j] = Some(i);
            }
        }

        for (j, slot) in det_to_track.iter().enumerate() {
            if let Some(i) = slot {
                self.tracks[*i].correct(detections[j], ts);
            }
        }

        for (j, slot) in det_to_track.iter_mut().enumerate() {
            if slot.is_none() {
                let id = self.next_id;
                self.next_id += 1;
                debug!(track_id = id, "spawning new track");
                self.tracks.push(Track::new(id, detections[j], ts));
                *slot = Some(self.tracks.len() - 1);
            }
        }

        let mut labels = Vec::with_capacity(n_detections);
        for (j, slot) in det_to_track.iter().enumerate() {
            if let Some(i) = slot {
                labels.push(Label {
                    track_id: self.tracks[*i].id,
                    rect: detections[j],
                });
            }
        }
        trace!(frame_ts = ts, labels = labels.len(), "frame associated");

        let max_age = self.max_age;
        self.tracks.retain(|t| {
            let keep = t.time_since_update <= max_age;
            if !keep {
                debug!(track_id = t.id, "retiring track");
            }
            keep
        });

        Ok(labels)
    }

    fn build_cost_matrix(&self, detections: &[Rect], n: usize) -> Vec<Vec<f64>> {
        let n_tracks = self.tracks.len();
        let n_detections = detections.len();
        let mut costs = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i < n_tracks && j < n_detections {
                    costs[i][j] = cost::pair_cost(
                        &self.tracks[i].rect,
                        &detections[j],
                        self.max_dist,
                        self.alpha,
                    );
                }
            }
        }

        costs
    }

    /// A solver returning something other than a permutation of `0..n` is an
    /// `InvariantViolation`, not a recoverable condition.
    fn validate_permutation(&self, assignment: &[usize], n: usize) -> Result<()> {
        if assignment.len() != n {
            return Err(TrackerError::invariant(format!(
                "solver returned {} assignments for {} rows",
                assignment.len(),
                n
            )));
        }
        let mut seen = vec![false; n];
        for &j in assignment {
            if j >= n || seen[j] {
                warn!("assignment solver returned a non-permutation");
                return Err(TrackerError::invariant(
                    "assignment solver returned a non-permutation",
                ));
            }
            seen[j] = true;
        }
        Ok(())
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIST, DEFAULT_MAX_AGE, DEFAULT_ALPHA)
    }
}
