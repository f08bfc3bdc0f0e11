//! End-to-end tracking scenarios, driven straight through the engine (no
//! process spawn needed — the CLI is a thin wrapper over this).

use frame_tracker::{Rect, Tracker};

#[test]
fn single_stationary_object_keeps_one_id_across_five_frames() {
    let mut tracker = Tracker::default();
    let rect = Rect::new(0.50, 0.50, 0.10, 0.10);

    let mut ids = std::collections::HashSet::new();
    let mut total_labels = 0;
    for i in 0..5 {
        let labels = tracker.step(i as f64 * 0.03, &[rect]).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].rect, rect);
        ids.insert(labels[0].track_id);
        total_labels += labels.len();
    }

    assert_eq!(ids.len(), 1);
    assert_eq!(total_labels, 5);
}

#[test]
fn two_crossing_objects_keep_distinct_stable_ids() {
    let mut tracker = Tracker::default();
    let steps = 6;

    let mut id_a = None;
    let mut id_b = None;

    for i in 0..steps {
        let t = i as f64 / (steps - 1) as f64;
        let ax = 0.20 + (0.70 - 0.20) * t;
        let bx = 0.70 + (0.20 - 0.70) * t;

        let a = Rect::new(ax, 0.50, 0.08, 0.08);
        let b = Rect::new(bx, 0.50, 0.08, 0.08);

        let labels = tracker.step(i as f64 * 0.03, &[a, b]).unwrap();
        assert_eq!(labels.len(), 2);

        // Each label should associate to whichever detection is geometrically
        // nearer to its own track's predicted position; across consecutive
        // frames that means each physical object keeps the same id.
        let label_for_a = labels.iter().find(|l| l.rect == a).unwrap();
        let label_for_b = labels.iter().find(|l| l.rect == b).unwrap();

        if let Some(id) = id_a {
            assert_eq!(label_for_a.track_id, id);
        } else {
            id_a = Some(label_for_a.track_id);
        }
        if let Some(id) = id_b {
            assert_eq!(label_for_b.track_id, id);
        } else {
            id_b = Some(label_for_b.track_id);
        }
    }

    assert_ne!(id_a, id_b);
}

#[test]
fn brief_occlusion_reuses_the_original_id() {
    let mut tracker = Tracker::new(0.15, 5, 0.7);

    let mut id = None;
    for i in 0..3 {
        let labels = tracker
            .step(i as f64 * 0.03, &[Rect::new(0.30, 0.30, 0.10, 0.10)])
            .unwrap();
        id = Some(labels[0].track_id);
    }

    for i in 3..5 {
        let labels = tracker.step(i as f64 * 0.03, &[]).unwrap();
        assert!(labels.is_empty());
    }

    let labels = tracker
        .step(5.0 * 0.03, &[Rect::new(0.32, 0.31, 0.10, 0.10)])
        .unwrap();
    assert_eq!(labels.len(), 1);
    assert_eq!(Some(labels[0].track_id), id);
}

#[test]
fn occlusion_exceeding_max_age_spawns_a_new_id() {
    let max_age = 5;
    let mut tracker = Tracker::new(0.15, max_age, 0.7);

    let labels = tracker
        .step(0.0, &[Rect::new(0.30, 0.30, 0.10, 0.10)])
        .unwrap();
    let old_id = labels[0].track_id;

    for t in 1..=(max_age + 2) {
        tracker.step(t as f64 * 0.03, &[]).unwrap();
    }

    let labels = tracker
        .step((max_age as f64 + 3.0) * 0.03, &[Rect::new(0.32, 0.31, 0.10, 0.10)])
        .unwrap();
    assert_eq!(labels.len(), 1);
    assert_ne!(labels[0].track_id, old_id);
}

#[test]
fn new_detection_alongside_existing_track() {
    let mut tracker = Tracker::default();

    tracker.step(0.0, &[Rect::new(0.2, 0.2, 0.05, 0.05)]).unwrap();

    let labels = tracker
        .step(
            0.03,
            &[
                Rect::new(0.21, 0.2, 0.05, 0.05),
                Rect::new(0.8, 0.8, 0.05, 0.05),
            ],
        )
        .unwrap();

    assert_eq!(labels.len(), 2);
    let near = labels.iter().find(|l| l.rect.x < 0.5).unwrap();
    let far = labels.iter().find(|l| l.rect.x > 0.5).unwrap();
    assert_eq!(near.track_id, 0);
    assert_ne!(far.track_id, 0);
}

#[test]
fn gated_out_by_distance_spawns_new_id() {
    let mut tracker = Tracker::new(0.15, 5, 0.7);

    tracker.step(0.0, &[Rect::new(0.1, 0.1, 0.05, 0.05)]).unwrap();

    let labels = tracker
        .step(0.03, &[Rect::new(0.9, 0.9, 0.05, 0.05)])
        .unwrap();

    assert_eq!(labels.len(), 1);
    assert_ne!(labels[0].track_id, 0);
    // The old track coasts rather than being associated to the far detection.
    assert_eq!(tracker.tracks().len(), 2);
}

#[test]
fn deterministic_output_on_repeated_runs() {
    let run = || {
        let mut tracker = Tracker::default();
        let mut all = Vec::new();
        for i in 0..5 {
            let labels = tracker
                .step(i as f64 * 0.03, &[Rect::new(0.5, 0.5, 0.1, 0.1)])
                .unwrap();
            all.push(labels);
        }
        all
    };

    assert_eq!(run(), run());
}
