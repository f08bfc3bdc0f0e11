//! Track-to-detection cost: gated centre-distance / IoU blend.

use crate::geometry::Rect;

/// Cost assigned to a gated-out (disallowed) pair. Large enough that the
/// solver never prefers it over any allowed, finite-cost pair, but finite so
/// the solver stays numerically well-behaved.
pub const BIG: f64 = 1e9;

/// Minimum IoU required for a pair to be considered, independent of
/// `max_dist` gating.
const MIN_IOU: f64 = 0.01;

/// Cost between a track's predicted rectangle and a candidate detection.
/// Returns [`BIG`] when the pair is gated out: centre distance exceeds
/// `max_dist`, or IoU falls below 0.01.
pub fn pair_cost(track_rect: &Rect, detection_rect: &Rect, max_dist: f64, alpha: f64) -> f64 {
    let ccd = track_rect.center_distance(detection_rect);
    let iou = track_rect.iou(detection_rect);

    if ccd > max_dist || iou < MIN_IOU {
        return BIG;
    }

    alpha * (1.0 - iou) + (1.0 - alpha) * ccd
}
